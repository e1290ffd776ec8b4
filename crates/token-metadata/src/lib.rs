//! Metaplex token-metadata account support.
//!
//! This crate reads and writes the metadata accounts that carry a token's
//! name, symbol, and URI — without pulling in `solana-sdk` or the
//! `mpl-token-metadata` crate. The account layout is walked by hand with a
//! bounds-checked cursor; address and PDA handling comes from the sibling
//! `sol-pubkey` crate.
//!
//! The decoder is a pure function of the bytes it is handed. Fetching the
//! account (and retrying the fetch) is the caller's job; this crate only
//! distinguishes "no account" from "account with a broken layout" so the
//! two can be logged apart.

pub mod cursor;
pub mod error;
pub mod instruction;
pub mod state;

// Re-export key public types for ergonomic imports.
pub use cursor::Cursor;
pub use error::{DecodeError, MetadataError};
pub use instruction::{
    build_create_metadata, build_update_metadata, AccountMeta, Instruction, MetadataArgs,
};
pub use state::{
    decode_account, pack_metadata, unpack_metadata, TokenMetadata, MAX_NAME_LEN,
    MAX_SYMBOL_LEN, MAX_URI_LEN, METADATA_KEY,
};
