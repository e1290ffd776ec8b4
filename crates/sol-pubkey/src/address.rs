//! Solana address encoding and validation.
//!
//! Solana addresses are Base58-encoded 32-byte values: Ed25519 public keys
//! for wallets, or off-curve hashes for program derived addresses. There is
//! no hashing or checksum step — the 32 bytes ARE the address bytes. The
//! canonical alphabet is the standard Bitcoin Base58 alphabet used by the
//! `bs58` crate.

use crate::error::PubkeyError;

/// Encode 32 public-key bytes as a Solana address string.
pub fn pubkey_to_address(pubkey: &[u8; 32]) -> String {
    bs58::encode(pubkey).into_string()
}

/// Decode a Solana address string to its 32-byte representation.
///
/// Returns an error if the address is not valid Base58 or does not decode
/// to exactly 32 bytes.
pub fn address_to_pubkey(address: &str) -> Result<[u8; 32], PubkeyError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| PubkeyError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
        PubkeyError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Validate a Solana address string.
///
/// A valid address is a Base58 string that decodes to exactly 32 bytes.
/// Returns `Ok(true)` if valid, or an error describing why decoding failed.
pub fn validate_address(address: &str) -> Result<bool, PubkeyError> {
    address_to_pubkey(address)?;
    Ok(true)
}
