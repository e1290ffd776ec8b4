use thiserror::Error;

/// Public key and PDA derivation errors.
#[derive(Debug, Error)]
pub enum PubkeyError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("could not find a valid PDA bump seed for the given seeds")]
    NoViableBump,
}
