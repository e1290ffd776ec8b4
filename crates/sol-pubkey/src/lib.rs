//! Solana public key utilities for the token-metadata toolkit.
//!
//! This crate handles Base58 address encoding/decoding and program derived
//! address (PDA) computation — all without pulling in `solana-sdk` (which
//! drags in tokio and 200+ transitive dependencies).
//!
//! Instead we implement PDA derivation by hand with `sha2`, use
//! `curve25519-dalek` for the Ed25519 off-curve check, and `bs58` for
//! Base58 encoding.

pub mod address;
pub mod error;
pub mod pda;
pub mod programs;

// Re-export key public types for ergonomic imports.
pub use address::{address_to_pubkey, pubkey_to_address, validate_address};
pub use error::PubkeyError;
pub use pda::{find_metadata_address, find_program_address};
pub use programs::{
    METADATA_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
