//! # Seed Tool
//!
//! Prepares a data directory for first use: writes the sample catalog and
//! the empty account and cart collections, then reports what is there.
//!
//! ## Usage
//! ```bash
//! # Seed the default directory (./shoplite_data)
//! cargo run -p shoplite-store --bin seed
//!
//! # Seed a specific directory
//! cargo run -p shoplite-store --bin seed -- --data ./my-store
//! ```
//!
//! Seeding is idempotent. Collections that already exist are left alone,
//! so running this against a live data directory is safe.

use std::env;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shoplite_core::types::{Product, User};
use shoplite_store::{initialize, JsonFileStore, KeyValueStore, StoreKey};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut data_dir = String::from("./shoplite_data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Shoplite Seed Tool");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data <PATH>  Data directory (default: ./shoplite_data)");
                println!("  -h, --help         Show this help message");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
        i += 1;
    }

    match run(&data_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("seed failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(data_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    info!(dir = data_dir, "seeding data directory");

    let store = JsonFileStore::open(data_dir)?;
    initialize(&store)?;

    let products: Vec<Product> = store.read_or_default(StoreKey::Products)?;
    let users: Vec<User> = store.read_or_default(StoreKey::Users)?;

    info!(
        products = products.len(),
        users = users.len(),
        "data directory ready"
    );

    println!("Seeded {}", store.dir().display());
    println!("  products: {}", products.len());
    println!("  users:    {}", users.len());

    Ok(())
}
