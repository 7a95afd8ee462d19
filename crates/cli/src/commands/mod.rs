use clap::Subcommand;

mod decode;
mod select;

// Re-export all command handlers
pub use decode::*;
pub use select::*;

/// Define subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a captured SELECT OSE response, status word included
    Decode {
        /// Response as a hex string (read from stdin if neither this nor --file is given)
        #[arg(group = "input")]
        response: Option<String>,

        /// File containing the response as hex
        #[arg(short, long, group = "input")]
        file: Option<std::path::PathBuf>,
    },

    /// Print the SELECT OSE command APDU
    Command,

    /// List available readers
    List,

    /// Select OSE.VAS.01 on the wallet in the reader and show its directory
    Select,
}
