//! Metadata instruction builders.
//!
//! Builds the Token Metadata program's create/update instructions by hand —
//! program id, account metas, and the borsh-shaped data payload — without
//! the `mpl-token-metadata` crate. Compiling instructions into a signed
//! transaction is the caller's concern; these stop at the instruction.
//!
//! ```text
//! CreateMetadataAccountV3 data:
//!   discriminator        u8 = 33
//!   name                 u32 LE length + bytes
//!   symbol               u32 LE length + bytes
//!   uri                  u32 LE length + bytes
//!   seller_fee_bps       u16 LE = 0
//!   creators             option tag = 0
//!   collection           option tag = 0
//!   uses                 option tag = 0
//!   is_mutable           u8 bool
//!   collection_details   option tag = 0
//!
//! UpdateMetadataAccountV2 data:
//!   discriminator        u8 = 15
//!   data                 option tag = 1, then the same fields as above
//!                        (name through uses)
//!   new_update_authority option tag = 0
//!   primary_sale         option tag = 0
//!   is_mutable           option tag = 0
//! ```

use sol_pubkey::{METADATA_PROGRAM_ID, SYSTEM_PROGRAM_ID};

use crate::error::MetadataError;
use crate::state::{MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_URI_LEN};

/// CreateMetadataAccountV3 instruction discriminator.
const CREATE_METADATA_V3_IX: u8 = 33;

/// UpdateMetadataAccountV2 instruction discriminator.
const UPDATE_METADATA_V2_IX: u8 = 15;

/// A single account reference in an instruction.
#[derive(Debug, Clone)]
pub struct AccountMeta {
    pub pubkey: [u8; 32],
    pub is_signer: bool,
    pub is_writable: bool,
}

/// An instruction ready to be compiled into a transaction by the caller.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub program_id: [u8; 32],
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

/// The writable string fields of a metadata account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl MetadataArgs {
    /// Enforce the program's field length limits before serializing.
    fn validate(&self) -> Result<(), MetadataError> {
        for (field, value, max) in [
            ("name", &self.name, MAX_NAME_LEN),
            ("symbol", &self.symbol, MAX_SYMBOL_LEN),
            ("uri", &self.uri, MAX_URI_LEN),
        ] {
            if value.len() > max {
                return Err(MetadataError::FieldTooLong {
                    field,
                    len: value.len(),
                    max,
                });
            }
        }
        Ok(())
    }

    /// Serialize as the DataV2 struct: three strings, zero seller fee,
    /// and `None` for creators, collection, and uses.
    fn write_data_v2(&self, out: &mut Vec<u8>) {
        for value in [&self.name, &self.symbol, &self.uri] {
            out.extend_from_slice(&(value.len() as u32).to_le_bytes());
            out.extend_from_slice(value.as_bytes());
        }
        out.extend_from_slice(&0u16.to_le_bytes()); // seller_fee_basis_points
        out.push(0); // creators: None
        out.push(0); // collection: None
        out.push(0); // uses: None
    }
}

/// Build a CreateMetadataAccountV3 instruction for a fresh mint.
///
/// `metadata_pda` is the account address derived via
/// [`sol_pubkey::find_metadata_address`]; the program re-derives and
/// checks it on chain.
pub fn build_create_metadata(
    metadata_pda: &[u8; 32],
    mint: &[u8; 32],
    mint_authority: &[u8; 32],
    payer: &[u8; 32],
    update_authority: &[u8; 32],
    args: &MetadataArgs,
    is_mutable: bool,
) -> Result<Instruction, MetadataError> {
    args.validate()?;

    let mut data = Vec::with_capacity(64);
    data.push(CREATE_METADATA_V3_IX);
    args.write_data_v2(&mut data);
    data.push(is_mutable as u8);
    data.push(0); // collection_details: None

    Ok(Instruction {
        program_id: METADATA_PROGRAM_ID,
        accounts: vec![
            AccountMeta {
                pubkey: *metadata_pda,
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *mint,
                is_signer: false,
                is_writable: false,
            },
            AccountMeta {
                pubkey: *mint_authority,
                is_signer: true,
                is_writable: false,
            },
            AccountMeta {
                pubkey: *payer,
                is_signer: true,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *update_authority,
                is_signer: false,
                is_writable: false,
            },
            AccountMeta {
                pubkey: SYSTEM_PROGRAM_ID,
                is_signer: false,
                is_writable: false,
            },
        ],
        data,
    })
}

/// Build an UpdateMetadataAccountV2 instruction replacing the string
/// fields of an existing metadata account.
///
/// The update authority keeps its role and the mutability flag is left
/// untouched; only the name/symbol/uri payload changes.
pub fn build_update_metadata(
    metadata_pda: &[u8; 32],
    update_authority: &[u8; 32],
    args: &MetadataArgs,
) -> Result<Instruction, MetadataError> {
    args.validate()?;

    let mut data = Vec::with_capacity(64);
    data.push(UPDATE_METADATA_V2_IX);
    data.push(1); // data: Some(DataV2)
    args.write_data_v2(&mut data);
    data.push(0); // new_update_authority: None
    data.push(0); // primary_sale_happened: None
    data.push(0); // is_mutable: None

    Ok(Instruction {
        program_id: METADATA_PROGRAM_ID,
        accounts: vec![
            AccountMeta {
                pubkey: *metadata_pda,
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *update_authority,
                is_signer: true,
                is_writable: false,
            },
        ],
        data,
    })
}
