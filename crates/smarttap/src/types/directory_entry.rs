use std::fmt;

use alloy_primitives::hex;
use bytes::Bytes;
use tracing::trace;

use crate::constants::{OSE_VAS_AID, tags};
use crate::tlv;
use crate::{Error, Result};

use super::{SmartTapCapabilities, fixed_value};

/// One application advertised in the PPSE directory (`61`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// ADF name (`4F`)
    pub application_id: Bytes,
    /// Application label (`50`)
    pub label: Option<String>,
    /// Application priority indicator (`87`)
    pub priority: Option<u8>,
    /// Minimum supported version (`DF6D`)
    pub min_version: Option<u16>,
    /// Maximum supported version (`DF4D`)
    pub max_version: Option<u16>,
    /// Capabilities (`DF62`), only decoded for the `OSE.VAS.01` entry
    pub capabilities: Option<SmartTapCapabilities>,
    /// Mobile device nonce (`DF6E`)
    pub nonce: Option<Bytes>,
    /// Mobile device ephemeral key (`DF6B`)
    pub ephemeral_key: Option<Bytes>,
}

impl DirectoryEntry {
    /// Whether this is the Smart Tap / VAS application
    pub fn is_smart_tap(&self) -> bool {
        &self.application_id[..] == OSE_VAS_AID
    }

    fn read_discretionary_template(&mut self, template: Bytes) -> Result<()> {
        let fields = tlv::decode(template)?;

        self.min_version = fixed_value::<2>(&fields, tags::MINIMUM_VERSION)?.map(u16::from_be_bytes);
        self.max_version = fixed_value::<2>(&fields, tags::MAXIMUM_VERSION)?.map(u16::from_be_bytes);
        self.nonce = fields.first(tags::ENTRY_NONCE).cloned();
        self.ephemeral_key = fields.first(tags::ENTRY_EPHEMERAL_KEY).cloned();

        if self.is_smart_tap() {
            if let Some(value) = fields.first(tags::CAPABILITIES) {
                self.capabilities = Self::read_capabilities(value);
            }
        }

        Ok(())
    }

    /// Capabilities are advisory: anything but a known single byte is left unannotated
    fn read_capabilities(value: &[u8]) -> Option<SmartTapCapabilities> {
        let [bitmap] = value else {
            trace!("Ignoring capabilities of {} byte(s): {}", value.len(), hex::encode(value));
            return None;
        };

        let capabilities = SmartTapCapabilities::from_bitmap(*bitmap);
        if capabilities.is_none() {
            trace!("Ignoring unknown capabilities bitmap {:#04X}", bitmap);
        }
        capabilities
    }
}

impl TryFrom<Bytes> for DirectoryEntry {
    type Error = Error;

    fn try_from(entry: Bytes) -> Result<Self> {
        let fields = tlv::decode(entry)?;

        let application_id = fields
            .first(tags::APPLICATION_ID)
            .cloned()
            .ok_or(Error::MissingApplicationId)?;

        let mut directory_entry = Self {
            application_id,
            label: fields
                .first(tags::APPLICATION_LABEL)
                .map(|label| String::from_utf8_lossy(label).into_owned()),
            priority: fixed_value::<1>(&fields, tags::APPLICATION_PRIORITY)?.map(|[p]| p),
            min_version: None,
            max_version: None,
            capabilities: None,
            nonce: None,
            ephemeral_key: None,
        };

        if let Some(template) = fields.first(tags::DISCRETIONARY_TEMPLATE) {
            directory_entry.read_discretionary_template(template.clone())?;
        }

        Ok(directory_entry)
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Application Name: {}", hex::encode(&self.application_id))?;
        if let Some(label) = &self.label {
            write!(f, ", Label: {}", label)?;
        }
        if let Some(priority) = self.priority {
            write!(f, ", Priority: {}", priority)?;
        }
        if let Some(version) = self.min_version {
            write!(f, ", Minimum Version: {}", version)?;
        }
        if let Some(version) = self.max_version {
            write!(f, ", Maximum Version: {}", version)?;
        }
        if let Some(capabilities) = self.capabilities {
            write!(f, ", Capabilities: {}", capabilities)?;
        }
        Ok(())
    }
}
