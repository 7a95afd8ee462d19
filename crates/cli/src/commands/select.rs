//! Reader and card selection commands

use nexum_apdu_transport_pcsc::{PcscDeviceManager, PcscTransport};
use smarttap::{ParseConfig, SmartTap};
use tracing::info;

use crate::utils::{self, reader};

/// List all available readers
pub fn list_readers(manager: &PcscDeviceManager) -> Result<(), Box<dyn std::error::Error>> {
    reader::list_readers(manager)
}

/// Select OSE.VAS.01 and display the wallet's directory
pub fn select_command(
    transport: PcscTransport,
    config: ParseConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut smart_tap = SmartTap::with_config(transport, config);

    info!("Selecting OSE.VAS.01...");
    let response = smart_tap.select_ose()?;
    info!("OSE selected successfully.");

    utils::print_response(&response);
    Ok(())
}
