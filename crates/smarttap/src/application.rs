//! Smart Tap application handle
//!
//! Sends `SELECT OSE` over any card transport and keeps the decoded reply,
//! which later Smart Tap commands need for the nonce and ephemeral key.

use alloy_primitives::hex;
use bytes::Bytes;
use nexum_apdu_core::prelude::*;
use tracing::debug;

use crate::Result;
use crate::commands::{SelectOseResponse, select_ose_command};
use crate::config::ParseConfig;

/// Smart Tap terminal side of an NFC wallet session
#[derive(Debug)]
pub struct SmartTap<T: CardTransport> {
    /// Card transport
    transport: T,
    /// Decoding options
    config: ParseConfig,
    /// Response of the last successful `SELECT OSE`
    select_ose_response: Option<SelectOseResponse>,
}

impl<T: CardTransport> SmartTap<T> {
    /// Create a new Smart Tap instance
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ParseConfig::default())
    }

    /// Create a new Smart Tap instance with explicit decoding options
    pub const fn with_config(transport: T, config: ParseConfig) -> Self {
        Self {
            transport,
            config,
            select_ose_response: None,
        }
    }

    /// Get access to the transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Get mutable access to the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Response of the last successful `SELECT OSE`
    pub const fn select_ose_response(&self) -> Option<&SelectOseResponse> {
        self.select_ose_response.as_ref()
    }

    /// Select the `OSE.VAS.01` environment and decode the wallet's directory
    pub fn select_ose(&mut self) -> Result<SelectOseResponse> {
        let command = select_ose_command().to_bytes();
        debug!("Selecting OSE: {}", hex::encode(&command));

        let response_bytes: Bytes = self.transport.transmit_raw(&command)?;
        debug!("SELECT OSE returned {} byte(s)", response_bytes.len());

        let response = SelectOseResponse::from_bytes(response_bytes, &self.config)?;
        self.select_ose_response = Some(response.clone());

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::constants::OSE_VAS_AID;
    use crate::test_support::{fci_with_entries, response, vas_entry};

    #[derive(Debug)]
    struct MockTransport {
        reply: Vec<u8>,
        sent: Vec<Vec<u8>>,
    }

    impl MockTransport {
        fn new(reply: Vec<u8>) -> Self {
            Self {
                reply,
                sent: Vec::new(),
            }
        }
    }

    impl CardTransport for MockTransport {
        fn transmit_raw(&mut self, command: &[u8]) -> std::result::Result<Bytes, nexum_apdu_core::Error> {
            self.sent.push(command.to_vec());
            Ok(Bytes::from(self.reply.clone()))
        }

        fn reset(&mut self) -> std::result::Result<(), nexum_apdu_core::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_select_ose() {
        let reply = response(&fci_with_entries(0xC0, vec![vas_entry(0x02)]), 0x90, 0x00);
        let mut smart_tap = SmartTap::new(MockTransport::new(reply));

        let response = smart_tap.select_ose().unwrap();

        assert_eq!(
            smart_tap.transport().sent,
            vec![hex::decode("00A404000A4F53452E5641532E303100").unwrap()]
        );
        assert_eq!(response.application_ids(), [Bytes::from_static(OSE_VAS_AID)]);
        assert_eq!(smart_tap.select_ose_response(), Some(&response));
    }

    #[test]
    fn test_select_ose_failure_keeps_no_response() {
        let mut smart_tap = SmartTap::new(MockTransport::new(vec![0x6A, 0x82]));

        assert!(matches!(
            smart_tap.select_ose(),
            Err(Error::InvalidStatus(_))
        ));
        assert!(smart_tap.select_ose_response().is_none());
    }

    #[test]
    fn test_select_ose_strict() {
        let reply = response(&fci_with_entries(0xC0, vec![]), 0x90, 0x00);
        let mut smart_tap = SmartTap::with_config(MockTransport::new(reply), ParseConfig::strict());

        assert!(matches!(
            smart_tap.select_ose(),
            Err(Error::MissingDirectoryEntries)
        ));
    }
}
