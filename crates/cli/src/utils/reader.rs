//! PC/SC reader discovery

use nexum_apdu_transport_pcsc::{PcscDeviceManager, PcscReader};

/// Print every reader and whether a card (or phone) is present
pub fn list_readers(manager: &PcscDeviceManager) -> Result<(), Box<dyn std::error::Error>> {
    let readers = manager.list_readers()?;

    if readers.is_empty() {
        println!("No readers found!");
        return Ok(());
    }

    println!("Available readers:");
    for (i, reader) in readers.iter().enumerate() {
        let status = if reader.has_card() {
            "card present"
        } else {
            "no card"
        };
        println!("{}. {} ({})", i + 1, reader.name(), status);
    }

    Ok(())
}

/// Find the named reader, or the first one with a card present
pub fn find_reader(
    manager: &PcscDeviceManager,
    name: Option<&str>,
) -> Result<PcscReader, Box<dyn std::error::Error>> {
    let readers = manager.list_readers()?;

    if readers.is_empty() {
        return Err("No readers found!".into());
    }

    let reader = match name {
        Some(name) => readers
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| format!("Reader '{}' not found", name))?,
        None => readers
            .iter()
            .find(|r| r.has_card())
            .ok_or("No card found in any reader!")?,
    };

    Ok(reader.clone())
}
