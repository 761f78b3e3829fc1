use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::{LedgerError, LedgerService};
use crate::storage::SqliteStateStore;

/// keyledger - keyed-account ledger over a SQLite state store
#[derive(Parser)]
#[command(name = "keyledger")]
#[command(about = "Host for a minimal account ledger: seed, write, transfer and read state")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "keyledger.db")]
    pub database: String,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the state database and seed the initial accounts
    Init {
        /// Must be empty; passed through to the ledger
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run a state-changing operation: init, write, transfer
    Invoke {
        /// Operation name
        operation: String,

        /// Operation arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run a read-only operation: read
    Query {
        /// Operation name
        operation: String,

        /// Operation arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show the decoded balance of an account
    Balance {
        /// Account name
        name: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run_with(&mut stdout.lock()).await
    }

    /// Run the command, writing its output to `out`.
    pub async fn run_with(self, out: &mut impl Write) -> Result<()> {
        let service = open_service(&self.database).await?;

        match self.command {
            Commands::Init { args } => {
                service.init(&args).await?;
                writeln!(out, "Ledger initialized: {}", self.database)?;
            }

            Commands::Invoke { operation, args } => {
                let output = service.invoke(&operation, &args).await?;
                if output.is_empty() {
                    writeln!(out, "{}: ok", operation)?;
                } else {
                    out.write_all(&output)?;
                }
            }

            Commands::Query { operation, args } => {
                // Raw bytes, not necessarily UTF-8
                let output = service.query(&operation, &args).await?;
                out.write_all(&output)?;
            }

            Commands::Balance { name } => {
                let account = service.get_account(&name).await?;
                writeln!(out, "{}: {}", account.name, account.balance)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// Render a failed run for stderr. Ledger failures become the structured
/// JSON payload the host hands back to callers.
pub fn render_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LedgerError>() {
        Some(ledger_err) => String::from_utf8_lossy(&ledger_err.to_payload()).into_owned(),
        None => format!("Error: {:#}", err),
    }
}

/// Open the SQLite-backed ledger, creating the file and schema if missing.
async fn open_service(database_path: &str) -> Result<LedgerService<SqliteStateStore>> {
    let store = SqliteStateStore::init(&format!("sqlite:{}?mode=rwc", database_path)).await?;
    Ok(LedgerService::new(store))
}
