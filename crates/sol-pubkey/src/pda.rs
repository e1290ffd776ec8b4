//! Program derived address (PDA) computation.
//!
//! A PDA is `SHA-256(seed_0 || seed_1 || ... || bump || program_id ||
//! "ProgramDerivedAddress")` for the highest bump in 255..=0 whose hash
//! does NOT land on the Ed25519 curve. We implement the search directly
//! rather than going through `solana-sdk`.

use sha2::{Digest, Sha256};

use crate::error::PubkeyError;
use crate::programs::METADATA_PROGRAM_ID;

/// The string appended to PDA derivation: "ProgramDerivedAddress".
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Seed prefix for Metaplex token-metadata accounts.
const METADATA_SEED: &[u8] = b"metadata";

/// Derive the metadata account address for a mint.
///
/// The metadata account is a PDA of the Token Metadata program with seeds:
///   `["metadata", metadata_program_id, mint_address]`
///
/// Returns the address and the bump seed that produced it.
pub fn find_metadata_address(mint: &[u8; 32]) -> Result<([u8; 32], u8), PubkeyError> {
    find_program_address(
        &[METADATA_SEED, &METADATA_PROGRAM_ID, mint.as_ref()],
        &METADATA_PROGRAM_ID,
    )
}

/// Find a valid program derived address for the given seeds and program.
///
/// Iterates bump seeds from 255 down to 0 and returns the first derived
/// hash that is NOT a valid Ed25519 point, together with its bump.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &[u8; 32],
) -> Result<([u8; 32], u8), PubkeyError> {
    for bump in (0u8..=255).rev() {
        if let Some(address) = try_create_program_address(seeds, &[bump], program_id) {
            return Ok((address, bump));
        }
    }

    Err(PubkeyError::NoViableBump)
}

/// Attempt to create a PDA from seeds + bump + program_id.
///
/// Returns `Some(address)` if the derived point is OFF the Ed25519 curve,
/// `None` if it falls on the curve (invalid PDA, try the next bump).
fn try_create_program_address(
    seeds: &[&[u8]],
    bump_seed: &[u8],
    program_id: &[u8; 32],
) -> Option<[u8; 32]> {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(bump_seed);
    hasher.update(program_id);
    hasher.update(PDA_MARKER);

    let hash: [u8; 32] = hasher.finalize().into();

    // A valid PDA must NOT be on the Ed25519 curve.
    if is_on_curve(&hash) {
        return None;
    }

    Some(hash)
}

/// Check if 32 bytes represent a valid Ed25519 curve point.
///
/// Uses `curve25519-dalek` to attempt decompression. If it succeeds, the
/// point is on the curve.
fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}
