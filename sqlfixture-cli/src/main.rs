//! sqlfixture CLI
//!
//! Command-line interface for preparing test databases: load multi-statement
//! fixture scripts, run ad-hoc statements, and purge tables.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use sqlfixture::{Backend, ConnectOptions, Criteria, Driver};

#[derive(Parser)]
#[command(name = "sqlfixture")]
#[command(about = "Prepare test databases from SQL fixture scripts", long_about = None)]
struct Cli {
    /// Database path (":memory:" for a throwaway database)
    #[arg(short, long, global = true, default_value = ":memory:")]
    db: String,

    /// Backend tag (currently "sqlite")
    #[arg(long, global = true, default_value = "sqlite")]
    backend: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load one or more fixture scripts, statement by statement
    Load {
        /// Script files, executed in the order given
        scripts: Vec<PathBuf>,
    },

    /// Execute a single ad-hoc SQL statement
    Exec {
        /// Statement text
        sql: String,
    },

    /// Delete all rows from the listed tables
    Purge {
        /// Table names
        tables: Vec<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let backend = Backend::from_tag(&cli.backend)?;
    let driver = Driver::connect(&ConnectOptions {
        backend,
        database: cli.db.clone(),
    })?;

    match cli.command {
        Commands::Load { scripts } => {
            for path in scripts {
                let text = fs::read_to_string(&path)?;
                driver.load_script(text.lines())?;
                log::info!("loaded fixture script {}", path.display());
            }
        }
        Commands::Exec { sql } => {
            let result = driver.execute_query(&sql, &[])?;
            println!("{} row(s) affected", result.rows_affected);
        }
        Commands::Purge { tables } => {
            for table in tables {
                let result = driver.delete_rows(&table, &Criteria::new())?;
                println!("purged {table} ({} rows)", result.rows_affected);
            }
        }
    }

    Ok(())
}
