//! Offline decoding commands

use std::path::PathBuf;

use alloy_primitives::hex;
use colored::Colorize;
use smarttap::{ParseConfig, SelectOseResponse, select_ose_command};
use tracing::debug;

use crate::utils;

/// Decode a SELECT OSE response given as hex
pub fn decode_command(
    response: Option<&str>,
    file: Option<&PathBuf>,
    config: &ParseConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = utils::read_hex_input(response, file)?;
    debug!("Decoding {} byte(s)", raw.len());

    match SelectOseResponse::parse_with(&raw, config) {
        Ok(response) => {
            utils::print_response(&response);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "\u{274C} Decoding failed:".red().bold(), e);
            Err(e.into())
        }
    }
}

/// Print the SELECT OSE command APDU
pub fn command_command() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", hex::encode_upper(select_ose_command().to_bytes()));
    Ok(())
}
