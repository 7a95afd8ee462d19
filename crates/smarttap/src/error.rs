use thiserror::Error;

use crate::response::StatusWord;
use crate::tlv::{TagId, TlvError};

/// Result type for Smart Tap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Smart Tap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-related errors
    #[error(transparent)]
    Transport(#[from] nexum_apdu_core::Error),

    /// A TLV layer was truncated or carried an oversized length
    #[error("Malformed TLV: {0}")]
    MalformedTlv(#[from] TlvError),

    /// Response shorter than a status word
    #[error("Response too short: {len} byte(s), expected at least 2")]
    ResponseTooShort { len: usize },

    #[error("Invalid status: {0}")]
    InvalidStatus(StatusWord),

    #[error("Problem parsing `select ose` response: No FCI template!")]
    MissingFciTemplate,

    #[error("Problem parsing `select ose` response: No application label!")]
    MissingApplicationLabel,

    #[error("Problem parsing `select ose` response: No application version!")]
    MissingApplicationVersion,

    #[error("Problem parsing `select ose` response: No transaction details!")]
    MissingTransactionDetails,

    #[error("Problem parsing `select ose` response: No FCI proprietary template!")]
    MissingProprietaryTemplate,

    #[error("Problem parsing `select ose` response: No FCI PPSE data!")]
    MissingPpseData,

    #[error("Problem parsing `select ose` response: No directory entries!")]
    MissingDirectoryEntries,

    #[error("Problem parsing `select ose` response: No ADF name!")]
    MissingApplicationId,

    #[error("Problem parsing `select ose` response: Bad transaction mode {0:#04X}")]
    InvalidTransactionMode(u8),

    /// Fixed-size field with an unexpected length
    #[error(
        "Problem parsing `select ose` response: tag {tag} has {actual} byte(s), expected {expected}"
    )]
    InvalidFieldLength {
        tag: TagId,
        expected: usize,
        actual: usize,
    },
}
