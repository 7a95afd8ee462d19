use std::fmt;

use alloy_primitives::hex;
use bytes::Bytes;
use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::constants::tags;
use crate::response::{ApduResponse, StatusWord};
use crate::tlv::{self, TlvMap};
use crate::types::{DirectoryEntry, TransactionMode, fixed_value};
use crate::{Error, Result};

/// Decoded response to the `SELECT OSE` command
///
/// Immutable once decoded. `application_ids` and `entries` hold the same
/// applications in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOseResponse {
    /// Status word of the response
    status: StatusWord,
    /// Wallet application label (`50`)
    wallet_application_label: String,
    /// Transaction mode from the transaction detail bitmap (`C1`)
    transaction_mode: TransactionMode,
    /// Mobile device nonce (`C2`, or `DF6E` of a directory entry)
    mobile_device_nonce: Option<Bytes>,
    /// Mobile device ephemeral key (`C3`, or `DF6B` of a directory entry)
    mobile_device_ephemeral_key: Option<Bytes>,
    /// ADF names in directory order
    application_ids: Vec<Bytes>,
    /// Directory entries in directory order
    entries: Vec<DirectoryEntry>,
}

/// Mandatory content of the FCI template, before the directory is walked
struct FciTemplate {
    wallet_application_label: String,
    transaction_mode: TransactionMode,
    mobile_device_nonce: Option<Bytes>,
    mobile_device_ephemeral_key: Option<Bytes>,
    ppse_data: TlvMap,
}

impl TryFrom<&TlvMap> for FciTemplate {
    type Error = Error;

    fn try_from(base: &TlvMap) -> Result<Self> {
        let fci = base
            .first(tags::FCI_TEMPLATE)
            .ok_or(Error::MissingFciTemplate)?;
        let fields = tlv::decode(fci.clone())?;

        let wallet_application_label = fields
            .first(tags::APPLICATION_LABEL)
            .map(|label| String::from_utf8_lossy(label).into_owned())
            .ok_or(Error::MissingApplicationLabel)?;

        if !fields.contains(tags::APPLICATION_VERSION) {
            return Err(Error::MissingApplicationVersion);
        }

        let transaction_details = match fields.first(tags::TRANSACTION_DETAILS) {
            Some(bitmap) if !bitmap.is_empty() => {
                fixed_value::<1>(&fields, tags::TRANSACTION_DETAILS)?
            }
            _ => None,
        };
        let [bitmap] = transaction_details.ok_or(Error::MissingTransactionDetails)?;
        let transaction_mode = TransactionMode::try_from(bitmap)?;

        let mobile_device_nonce = fields.first(tags::MOBILE_DEVICE_NONCE).cloned();
        let mobile_device_ephemeral_key = fields.first(tags::MOBILE_DEVICE_EPHEMERAL_KEY).cloned();

        let proprietary = fields
            .first(tags::FCI_PROPRIETARY_TEMPLATE)
            .ok_or(Error::MissingProprietaryTemplate)?;
        let proprietary = tlv::decode(proprietary.clone())?;

        let ppse_data = proprietary
            .first(tags::FCI_PPSE_DATA)
            .ok_or(Error::MissingPpseData)?;
        let ppse_data = tlv::decode(ppse_data.clone())?;

        Ok(Self {
            wallet_application_label,
            transaction_mode,
            mobile_device_nonce,
            mobile_device_ephemeral_key,
            ppse_data,
        })
    }
}

impl SelectOseResponse {
    /// Decode a raw response, status word included
    pub fn parse(raw: &[u8]) -> Result<Self> {
        Self::parse_with(raw, &ParseConfig::default())
    }

    /// Decode a raw response with explicit options
    pub fn parse_with(raw: &[u8], config: &ParseConfig) -> Result<Self> {
        Self::from_bytes(Bytes::copy_from_slice(raw), config)
    }

    /// Decode a raw response without copying it
    pub fn from_bytes(raw: Bytes, config: &ParseConfig) -> Result<Self> {
        let response = ApduResponse::from_bytes(raw)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::InvalidStatus(status));
        }

        let base = tlv::decode(response.into_payload())?;
        let fci = FciTemplate::try_from(&base)?;
        debug!(
            "FCI template: label={}, mode={}",
            fci.wallet_application_label, fci.transaction_mode
        );

        let mut response = Self {
            status,
            wallet_application_label: fci.wallet_application_label,
            transaction_mode: fci.transaction_mode,
            mobile_device_nonce: fci.mobile_device_nonce,
            mobile_device_ephemeral_key: fci.mobile_device_ephemeral_key,
            application_ids: Vec::new(),
            entries: Vec::new(),
        };

        let Some(directory) = fci.ppse_data.get(tags::DIRECTORY_ENTRY) else {
            if config.require_directory_entries {
                return Err(Error::MissingDirectoryEntries);
            }
            debug!("PPSE data holds no directory entries");
            return Ok(response);
        };

        for value in directory {
            let entry = DirectoryEntry::try_from(value.clone())?;
            trace!("Directory entry: {}", entry);

            if let Some(nonce) = &entry.nonce {
                response.mobile_device_nonce = Some(nonce.clone());
            }
            if let Some(key) = &entry.ephemeral_key {
                response.mobile_device_ephemeral_key = Some(key.clone());
            }

            response.application_ids.push(entry.application_id.clone());
            response.entries.push(entry);
        }

        Ok(response)
    }

    /// Status word of the response
    pub const fn status(&self) -> StatusWord {
        self.status
    }

    /// Wallet application label (`50`)
    pub fn wallet_application_label(&self) -> &str {
        &self.wallet_application_label
    }

    /// Transaction mode from the transaction detail bitmap (`C1`)
    pub const fn transaction_mode(&self) -> TransactionMode {
        self.transaction_mode
    }

    /// Mobile device nonce (`C2`, or `DF6E` of a directory entry)
    pub const fn mobile_device_nonce(&self) -> Option<&Bytes> {
        self.mobile_device_nonce.as_ref()
    }

    /// Mobile device ephemeral key (`C3`, or `DF6B` of a directory entry)
    pub const fn mobile_device_ephemeral_key(&self) -> Option<&Bytes> {
        self.mobile_device_ephemeral_key.as_ref()
    }

    /// ADF names in directory order
    pub fn application_ids(&self) -> &[Bytes] {
        &self.application_ids
    }

    /// Directory entries in directory order
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Human readable summary of every directory entry
    pub fn applications(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// The wallet advertised no application
    pub fn is_empty(&self) -> bool {
        self.application_ids.is_empty()
    }

    /// Directory entry of the Smart Tap / VAS application, if advertised
    pub fn smart_tap_entry(&self) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|entry| entry.is_smart_tap())
    }
}

impl TryFrom<&[u8]> for SelectOseResponse {
    type Error = Error;

    fn try_from(raw: &[u8]) -> Result<Self> {
        Self::parse(raw)
    }
}

impl fmt::Display for SelectOseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Select OSE Response:")?;
        writeln!(f, "  Status: {}", self.status)?;
        writeln!(
            f,
            "  Wallet application label: {}",
            self.wallet_application_label
        )?;
        writeln!(f, "  Transaction mode: {}", self.transaction_mode)?;
        match &self.mobile_device_nonce {
            Some(nonce) => writeln!(f, "  Mobile device nonce: {}", hex::encode(nonce))?,
            None => writeln!(f, "  Mobile device nonce: None")?,
        }
        match &self.mobile_device_ephemeral_key {
            Some(key) => writeln!(f, "  Mobile device ephemeral key: {}", hex::encode(key))?,
            None => writeln!(f, "  Mobile device ephemeral key: None")?,
        }
        if self.entries.is_empty() {
            write!(f, "  Applications: None")
        } else {
            write!(f, "  Applications:")?;
            for entry in &self.entries {
                write!(f, "\n    {}", entry)?;
            }
            Ok(())
        }
    }
}
