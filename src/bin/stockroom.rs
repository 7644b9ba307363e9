//! Stockroom Binary
//!
//! Runs the interactive inventory menu, or a one-shot list/export.

use std::io;

use clap::{Parser, Subcommand};
use stockroom::config::{NamePolicy, Seed};
use stockroom::console::Session;
use stockroom::protocol::NO_DEVICES;
use stockroom::{Config, Shop};
use tracing_subscriber::{fmt, EnvFilter};

/// Stockroom
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Electronics inventory manager")]
#[command(version)]
struct Args {
    /// Report destination
    #[arg(short, long, default_value = "inventory.txt")]
    report: String,

    /// JSON file of devices to start with
    #[arg(short, long, conflicts_with = "empty")]
    seed: Option<String>,

    /// Start with an empty inventory
    #[arg(long)]
    empty: bool,

    /// Let the store accept devices with names already in use
    #[arg(long)]
    allow_duplicate_names: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu (default)
    Shell,

    /// Print every device and exit
    List,

    /// Write the report and exit
    Export,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let seed = match (&args.seed, args.empty) {
        (Some(path), _) => Seed::File(path.into()),
        (None, true) => Seed::Empty,
        (None, false) => Seed::Defaults,
    };
    let name_policy = if args.allow_duplicate_names {
        NamePolicy::AllowDuplicates
    } else {
        NamePolicy::Unique
    };

    let config = Config::builder()
        .report_path(&args.report)
        .seed(seed)
        .name_policy(name_policy)
        .build();

    tracing::info!("Stockroom v{}", stockroom::VERSION);
    tracing::debug!("Config: {:?}", config);

    let shop = match Shop::open(config) {
        Ok(shop) => shop,
        Err(e) => {
            tracing::error!("Failed to open shop: {}", e);
            eprintln!("Failed to open shop: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let mut session = Session::new(shop, stdin.lock(), io::stdout());
            if let Err(e) = session.run() {
                tracing::error!("Session error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::List => {
            let listing = shop.inventory().list();
            if listing.is_empty() {
                println!("{}", NO_DEVICES);
            } else {
                println!("{}", listing);
            }
        }
        Commands::Export => match shop.export() {
            Ok(summary) => println!(
                "Inventory report exported to {} ({} devices)",
                shop.config().report_path.display(),
                summary.device_count
            ),
            Err(e) => {
                eprintln!("An error occurred while writing to the file: {}", e);
                std::process::exit(1);
            }
        },
    }
}
