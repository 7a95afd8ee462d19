use alloy_primitives::hex;
use colored::Colorize;
use smarttap::SelectOseResponse;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

pub mod reader;

/// Read hex input from the argument, a file, or stdin, in that order
pub fn read_hex_input(
    argument: Option<&str>,
    file: Option<&PathBuf>,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let text = match (argument, file) {
        (Some(argument), _) => argument.to_string(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    decode_hex(&text)
}

/// Decode hex, tolerating whitespace, `:` separators and a `0x` prefix
pub fn decode_hex(text: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let cleaned: String = text
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if cleaned.is_empty() {
        return Err("No response data given".into());
    }

    Ok(hex::decode(cleaned)?)
}

/// Print a decoded SELECT OSE response
pub fn print_response(response: &SelectOseResponse) {
    println!("{}", "\u{1F4F1} Wallet Info:".green().bold());
    println!("{}", response);

    if response.is_empty() {
        println!(
            "\n{}",
            "\u{26A0} Warning: The wallet advertised no applications".yellow()
        );
    } else if response.smart_tap_entry().is_none() {
        println!(
            "\n{}",
            "\u{26A0} Warning: The wallet does not advertise OSE.VAS.01".yellow()
        );
    }
}
