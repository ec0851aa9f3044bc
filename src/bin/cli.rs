//! FileDB CLI
//!
//! Command-line interface for a FileDB directory.

use clap::{Parser, Subcommand};
use filedb::{Options, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// FileDB CLI
#[derive(Parser, Debug)]
#[command(name = "filedb-cli")]
#[command(about = "CLI for the FileDB embedded document store")]
#[command(version)]
struct Args {
    /// Base directory of the store
    #[arg(short, long, default_value = "./filedb_data")]
    dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a JSON document
    Write {
        collection: String,
        resource: String,
        /// Document body as JSON text
        json: String,
    },

    /// Print one document
    Read { collection: String, resource: String },

    /// Print every document in a collection
    ReadAll { collection: String },

    /// List resource names in a collection
    List { collection: String },

    /// Delete one document
    Delete { collection: String, resource: String },

    /// Delete a whole collection
    Drop { collection: String },

    /// Remove temp files left by failed writes
    Sweep { collection: String },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open(&args.dir, Options::default())?;

    match args.command {
        Commands::Write {
            collection,
            resource,
            json,
        } => {
            let value: serde_json::Value = serde_json::from_str(&json)?;
            store.write(&collection, &resource, &value)?;
        }
        Commands::Read {
            collection,
            resource,
        } => {
            let value: serde_json::Value = store.read(&collection, &resource)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::ReadAll { collection } => {
            for record in store.read_all(&collection)? {
                print!("{}", record);
            }
        }
        Commands::List { collection } => {
            for name in store.list(&collection)? {
                println!("{}", name);
            }
        }
        Commands::Delete {
            collection,
            resource,
        } => store.delete(&collection, &resource)?,
        Commands::Drop { collection } => store.delete_collection(&collection)?,
        Commands::Sweep { collection } => {
            let removed = store.sweep_temp_files(&collection)?;
            println!("{}", removed);
        }
    }

    Ok(())
}
