use clap::Parser;
use nexum_apdu_transport_pcsc::{PcscConfig, PcscDeviceManager};
use smarttap::ParseConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod utils;

use commands::Commands;

#[derive(Parser)]
#[command(version, about = "Smart Tap CLI for inspecting SELECT OSE responses from NFC wallets")]
struct Cli {
    /// Optional reader name to use (will auto-detect if not specified)
    #[arg(short, long, global = true)]
    reader: Option<String>,

    /// Debug level output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fail when the wallet advertises no directory entries
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .init();

    let config = if cli.strict {
        ParseConfig::strict()
    } else {
        ParseConfig::default()
    };

    match cli.command {
        Commands::Decode { response, file } => {
            commands::decode_command(response.as_deref(), file.as_ref(), &config)
        }
        Commands::Command => commands::command_command(),
        Commands::List => {
            let manager = PcscDeviceManager::new()?;
            commands::list_readers(&manager)
        }
        Commands::Select => {
            let manager = PcscDeviceManager::new()?;
            let reader = utils::reader::find_reader(&manager, cli.reader.as_deref())?;
            info!("Using reader: {}", reader.name());

            let transport = manager.open_reader_with_config(reader.name(), PcscConfig::default())?;
            commands::select_command(transport, config)
        }
    }
}
