//! Constants used by the Smart Tap `SELECT OSE` exchange

/// `OSE.VAS.01`, the other system environment selected first by a terminal
/// and also the AID of the Smart Tap / VAS directory entry.
pub const OSE_VAS_AID: &[u8] = b"OSE.VAS.01";

/// ISO 7816 command class
pub const CLA_ISO7816: u8 = 0x00;
/// SELECT instruction
pub const INS_SELECT: u8 = 0xA4;
/// SELECT by DF name
pub const P1_SELECT_BY_NAME: u8 = 0x04;
/// First or only occurrence
pub const P2_FIRST_OCCURRENCE: u8 = 0x00;

/// Tags appearing in the `SELECT OSE` response
pub mod tags {
    /// FCI template
    pub const FCI_TEMPLATE: &[u8] = &[0x6F];
    /// Application label
    pub const APPLICATION_LABEL: &[u8] = &[0x50];
    /// Smart Tap application version number
    pub const APPLICATION_VERSION: &[u8] = &[0xC0];
    /// Transaction detail bitmap
    pub const TRANSACTION_DETAILS: &[u8] = &[0xC1];
    /// Mobile device nonce
    pub const MOBILE_DEVICE_NONCE: &[u8] = &[0xC2];
    /// Mobile device ephemeral public key
    pub const MOBILE_DEVICE_EPHEMERAL_KEY: &[u8] = &[0xC3];
    /// FCI proprietary template
    pub const FCI_PROPRIETARY_TEMPLATE: &[u8] = &[0xA5];
    /// FCI issuer discretionary data (PPSE directory)
    pub const FCI_PPSE_DATA: &[u8] = &[0xBF, 0x0C];
    /// Directory entry
    pub const DIRECTORY_ENTRY: &[u8] = &[0x61];
    /// ADF name
    pub const APPLICATION_ID: &[u8] = &[0x4F];
    /// Application priority indicator
    pub const APPLICATION_PRIORITY: &[u8] = &[0x87];
    /// Directory discretionary template
    pub const DISCRETIONARY_TEMPLATE: &[u8] = &[0x73];
    /// Minimum supported Smart Tap version
    pub const MINIMUM_VERSION: &[u8] = &[0xDF, 0x6D];
    /// Maximum supported Smart Tap version
    pub const MAXIMUM_VERSION: &[u8] = &[0xDF, 0x4D];
    /// Mobile device nonce, directory entry variant
    pub const ENTRY_NONCE: &[u8] = &[0xDF, 0x6E];
    /// Mobile device ephemeral key, directory entry variant
    pub const ENTRY_EPHEMERAL_KEY: &[u8] = &[0xDF, 0x6B];
    /// Smart Tap capabilities bitmap
    pub const CAPABILITIES: &[u8] = &[0xDF, 0x62];
}
