//! Smart Tap `SELECT OSE` response decoding
//!
//! A terminal starts a Smart Tap exchange by selecting the `OSE.VAS.01`
//! environment. The wallet answers with a nested BER-TLV structure listing
//! the applications it offers. This crate walks that structure:
//!
//! ```text
//! 6F  FCI template
//! ├── 50  wallet application label
//! ├── C0  application version
//! ├── C1  transaction detail bitmap
//! ├── C2  mobile device nonce (optional)
//! ├── C3  mobile device ephemeral key (optional)
//! └── A5  FCI proprietary template
//!     └── BF0C  PPSE data
//!         └── 61  directory entry (repeated)
//!             ├── 4F  ADF name
//!             ├── 50  label (optional)
//!             ├── 87  priority (optional)
//!             └── 73  discretionary template (optional)
//!                 ├── DF6D / DF4D  minimum / maximum version
//!                 ├── DF6E / DF6B  nonce / ephemeral key
//!                 └── DF62  capabilities (OSE.VAS.01 only)
//! ```
//!
//! ```
//! use smarttap::SelectOseResponse;
//!
//! let raw = [0x6F, 0x14, 0x50, 0x01, 0x57, 0xC0, 0x01, 0x01, 0xC1, 0x01, 0x80, 0xA5, 0x09,
//!            0xBF, 0x0C, 0x06, 0x61, 0x04, 0x4F, 0x02, 0xA0, 0x01, 0x90, 0x00];
//! let response = SelectOseResponse::parse(&raw).unwrap();
//!
//! assert_eq!(response.transaction_mode().to_string(), "Payment enabled");
//! assert_eq!(response.applications(), vec!["Application Name: a001"]);
//! ```

mod application;
mod commands;
mod config;
mod constants;
mod error;
mod response;
pub mod tlv;
pub mod types;
mod util;

#[cfg(test)]
mod test_support;

pub use application::SmartTap;
pub use commands::{SelectOseResponse, select_ose_command};
pub use config::ParseConfig;
pub use constants::*;
pub use error::{Error, Result};
pub use response::{ApduResponse, StatusWord};
pub use types::{DirectoryEntry, SmartTapCapabilities, TransactionMode};
pub use util::unsigned_from_be_bytes;
