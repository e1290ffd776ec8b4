//! The metadata account byte layout: decoding and encoding.
//!
//! A Metaplex token-metadata account begins with a fixed-offset prefix
//! followed by three length-prefixed strings:
//!
//! ```text
//! key               u8        (account discriminator, skipped)
//! update_authority  32 bytes
//! mint              32 bytes  (skipped; the caller derived the account
//!                              address from the mint, so it already knows it)
//! name              u32 LE length + bytes
//! symbol            u32 LE length + bytes
//! uri               u32 LE length + bytes
//! ```
//!
//! The on-chain program pads each string to a fixed width with trailing
//! NUL bytes, so the length prefixes are typically the padded widths and
//! decoding strips the padding. The full 4-byte little-endian length is
//! authoritative for each field.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::error::{DecodeError, MetadataError};

/// Account discriminator for a metadata account (Metaplex `Key::MetadataV1`).
pub const METADATA_KEY: u8 = 4;

/// On-chain limits for the string fields, padding widths included.
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;

/// The descriptive fields of a token, decoded from its metadata account.
///
/// Only ever produced from a buffer that held the full prefix and all
/// three strings; a buffer that cannot supply every field yields a
/// [`DecodeError`] instead of a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// The public key permitted to modify the metadata account.
    #[serde(with = "pubkey_b58")]
    pub update_authority: [u8; 32],
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl TokenMetadata {
    /// The update authority rendered as a Base58 address.
    pub fn update_authority_address(&self) -> String {
        sol_pubkey::pubkey_to_address(&self.update_authority)
    }
}

/// Decode the data of a metadata account that may not exist.
///
/// `None` means no account was found at the derived address — reported as
/// [`MetadataError::NotFound`] so callers can tell a missing account apart
/// from a malformed one.
pub fn decode_account(data: Option<&[u8]>) -> Result<TokenMetadata, MetadataError> {
    match data {
        None => Err(MetadataError::NotFound),
        Some(bytes) => Ok(unpack_metadata(bytes)?),
    }
}

/// Decode a metadata account's raw bytes.
///
/// Pure function of its input: no I/O, no shared state. Every field must
/// lie entirely within the buffer; a length prefix pointing past the end
/// of the data fails the whole decode.
pub fn unpack_metadata(data: &[u8]) -> Result<TokenMetadata, DecodeError> {
    let mut cursor = Cursor::new(data);

    cursor.read_u8()?; // key byte
    let update_authority = cursor.read_pubkey()?;
    cursor.skip(32)?; // mint

    let name = read_string(&mut cursor, "name")?;
    let symbol = read_string(&mut cursor, "symbol")?;
    let uri = read_string(&mut cursor, "uri")?;

    Ok(TokenMetadata {
        update_authority,
        name,
        symbol,
        uri,
    })
}

/// Encode a [`TokenMetadata`] back into the account layout.
///
/// Strings are NUL-padded to their on-chain widths, matching what the
/// program stores, so `unpack_metadata(&pack_metadata(&m, &mint))` returns
/// `m` for any metadata whose fields are free of trailing NULs.
pub fn pack_metadata(metadata: &TokenMetadata, mint: &[u8; 32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + 32 + 32 + 12 + MAX_NAME_LEN + MAX_SYMBOL_LEN + MAX_URI_LEN);

    out.push(METADATA_KEY);
    out.extend_from_slice(&metadata.update_authority);
    out.extend_from_slice(mint);

    write_padded_string(&mut out, &metadata.name, MAX_NAME_LEN);
    write_padded_string(&mut out, &metadata.symbol, MAX_SYMBOL_LEN);
    write_padded_string(&mut out, &metadata.uri, MAX_URI_LEN);

    out
}

/// Read one u32-LE length-prefixed UTF-8 string, stripping NUL padding.
fn read_string(cursor: &mut Cursor<'_>, field: &'static str) -> Result<String, DecodeError> {
    let len = cursor.read_u32_le()? as usize;
    let bytes = cursor.read_bytes(len)?;
    let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8(field))?;
    Ok(text.trim_end_matches('\0').to_string())
}

/// Write a u32-LE length prefix and the string NUL-padded to `width`.
///
/// A string already at or past `width` is written unpadded.
fn write_padded_string(out: &mut Vec<u8>, value: &str, width: usize) {
    let padded_len = value.len().max(width);
    out.extend_from_slice(&(padded_len as u32).to_le_bytes());
    out.extend_from_slice(value.as_bytes());
    out.resize(out.len() + padded_len - value.len(), 0);
}

mod pubkey_b58 {
    //! Serde adapter rendering a 32-byte pubkey as its Base58 address.

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pubkey: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&sol_pubkey::pubkey_to_address(pubkey))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let address = String::deserialize(deserializer)?;
        sol_pubkey::address_to_pubkey(&address).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a raw account buffer by hand, with explicit length prefixes.
    fn raw_account(authority: &[u8; 32], name: &str, symbol: &str, uri: &str) -> Vec<u8> {
        let mut buf = vec![0x01];
        buf.extend_from_slice(authority);
        buf.extend_from_slice(&[0u8; 32]); // mint
        for field in [name, symbol, uri] {
            buf.extend_from_slice(&(field.len() as u32).to_le_bytes());
            buf.extend_from_slice(field.as_bytes());
        }
        buf
    }

    #[test]
    fn decodes_well_formed_account() {
        let buf = raw_account(&[0u8; 32], "Test", "TKN", "https://example.com/nft");
        let metadata = unpack_metadata(&buf).unwrap();

        assert_eq!(metadata.name, "Test");
        assert_eq!(metadata.symbol, "TKN");
        assert_eq!(metadata.uri, "https://example.com/nft");
        assert_eq!(
            metadata.update_authority_address(),
            "11111111111111111111111111111111"
        );
    }

    #[test]
    fn authority_bytes_come_from_offset_1() {
        let authority = [0xABu8; 32];
        let buf = raw_account(&authority, "A", "B", "C");
        let metadata = unpack_metadata(&buf).unwrap();

        assert_eq!(metadata.update_authority, authority);
        assert_eq!(
            metadata.update_authority_address(),
            sol_pubkey::pubkey_to_address(&authority)
        );
    }

    #[test]
    fn strips_trailing_nul_padding() {
        let buf = raw_account(&[0u8; 32], "Padded\0\0\0\0", "PAD\0\0", "uri\0");
        let metadata = unpack_metadata(&buf).unwrap();

        assert_eq!(metadata.name, "Padded");
        assert_eq!(metadata.symbol, "PAD");
        assert_eq!(metadata.uri, "uri");
    }

    #[test]
    fn interior_nuls_are_preserved() {
        let buf = raw_account(&[0u8; 32], "a\0b\0\0", "S", "u");
        let metadata = unpack_metadata(&buf).unwrap();
        assert_eq!(metadata.name, "a\0b");
    }

    #[test]
    fn empty_strings_decode() {
        let buf = raw_account(&[0u8; 32], "", "", "");
        let metadata = unpack_metadata(&buf).unwrap();
        assert_eq!(metadata.name, "");
        assert_eq!(metadata.symbol, "");
        assert_eq!(metadata.uri, "");
    }

    #[test]
    fn ten_byte_buffer_is_a_decode_error() {
        let err = unpack_metadata(&[0u8; 10]).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { .. }));
    }

    #[test]
    fn buffer_shorter_than_fixed_prefix_fails() {
        // 64 bytes: key + authority + only 31 of the 32 mint bytes.
        let err = unpack_metadata(&[0u8; 64]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                offset: 33,
                needed: 32,
                remaining: 31,
            }
        );
    }

    #[test]
    fn declared_length_past_buffer_end_fails() {
        let mut buf = vec![0x01];
        buf.extend_from_slice(&[0u8; 64]); // authority + mint
        buf.extend_from_slice(&100u32.to_le_bytes()); // name claims 100 bytes
        buf.extend_from_slice(b"short");

        let err = unpack_metadata(&buf).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                offset: 69,
                needed: 100,
                remaining: 5,
            }
        );
    }

    #[test]
    fn full_four_length_bytes_are_read() {
        // A length of 0x0100 = 256: the second length byte matters.
        let mut buf = vec![0x01];
        buf.extend_from_slice(&[0u8; 64]);
        buf.extend_from_slice(&256u32.to_le_bytes());
        buf.extend_from_slice(&[b'x'; 256]);
        for _ in 0..2 {
            buf.extend_from_slice(&1u32.to_le_bytes());
            buf.push(b'y');
        }

        let metadata = unpack_metadata(&buf).unwrap();
        assert_eq!(metadata.name.len(), 256);
        assert_eq!(metadata.symbol, "y");
        assert_eq!(metadata.uri, "y");
    }

    #[test]
    fn invalid_utf8_in_symbol_fails() {
        let mut buf = vec![0x01];
        buf.extend_from_slice(&[0u8; 64]);
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.push(b'n');
        buf.extend_from_slice(&2u32.to_le_bytes());
        buf.extend_from_slice(&[0xFF, 0xFE]); // not UTF-8

        let err = unpack_metadata(&buf).unwrap_err();
        assert_eq!(err, DecodeError::InvalidUtf8("symbol"));
    }

    #[test]
    fn trailing_bytes_after_uri_are_ignored() {
        // Real accounts carry creators/flags past the uri; the decoder
        // stops once it has its three strings.
        let mut buf = raw_account(&[0x11u8; 32], "N", "S", "U");
        buf.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(unpack_metadata(&buf).is_ok());
    }

    #[test]
    fn absent_account_is_not_found() {
        let err = decode_account(None).unwrap_err();
        assert_eq!(err, MetadataError::NotFound);
    }

    #[test]
    fn malformed_account_is_distinct_from_not_found() {
        let err = decode_account(Some(&[0u8; 10])).unwrap_err();
        assert!(matches!(err, MetadataError::Decode(_)));
        assert_ne!(err, MetadataError::NotFound);
    }

    #[test]
    fn present_account_decodes_through_decode_account() {
        let buf = raw_account(&[0u8; 32], "Test", "TKN", "u");
        let metadata = decode_account(Some(&buf)).unwrap();
        assert_eq!(metadata.name, "Test");
    }

    #[test]
    fn pack_then_unpack_roundtrips() {
        let original = TokenMetadata {
            update_authority: [0x42u8; 32],
            name: "My Token".into(),
            symbol: "MTK".into(),
            uri: "https://example.com/mtk.json".into(),
        };

        let packed = pack_metadata(&original, &[0x99u8; 32]);
        let decoded = unpack_metadata(&packed).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn pack_pads_to_on_chain_widths() {
        let metadata = TokenMetadata {
            update_authority: [0u8; 32],
            name: "N".into(),
            symbol: "S".into(),
            uri: "U".into(),
        };
        let packed = pack_metadata(&metadata, &[0u8; 32]);

        // name length prefix at offset 65 must be the padded width.
        let name_len = u32::from_le_bytes(packed[65..69].try_into().unwrap());
        assert_eq!(name_len as usize, MAX_NAME_LEN);
        assert_eq!(
            packed.len(),
            1 + 32 + 32 + 12 + MAX_NAME_LEN + MAX_SYMBOL_LEN + MAX_URI_LEN
        );
    }

    #[test]
    fn pack_writes_key_and_mint() {
        let metadata = TokenMetadata {
            update_authority: [0x01u8; 32],
            name: String::new(),
            symbol: String::new(),
            uri: String::new(),
        };
        let mint = [0x77u8; 32];
        let packed = pack_metadata(&metadata, &mint);

        assert_eq!(packed[0], METADATA_KEY);
        assert_eq!(&packed[1..33], &[0x01u8; 32]);
        assert_eq!(&packed[33..65], &mint);
    }

    #[test]
    fn serializes_authority_as_base58() {
        let metadata = TokenMetadata {
            update_authority: [0u8; 32],
            name: "Test".into(),
            symbol: "TKN".into(),
            uri: "u".into(),
        };

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            json["update_authority"],
            "11111111111111111111111111111111"
        );

        let back: TokenMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, metadata);
    }
}
