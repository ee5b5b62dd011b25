use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tickerlens", about = "Resolve ticker symbols into equity/crypto entities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve symbols and print one JSON record per input
    Resolve {
        /// Equity symbols (repeatable, or comma-separated)
        #[arg(long, value_delimiter = ',')]
        equity: Vec<String>,
        /// Crypto symbols, optionally BASE-QUOTE (repeatable, or comma-separated)
        #[arg(long, value_delimiter = ',')]
        crypto: Vec<String>,
        /// Append a summary of resolved/unresolved inputs
        #[arg(long)]
        summary: bool,
    },
    /// Print the research keywords for each resolved symbol
    Keywords {
        #[arg(long, value_delimiter = ',')]
        equity: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        crypto: Vec<String>,
    },
    /// Clean up a raw company name
    NormalizeName {
        raw: String,
    },
    /// Show the stripped and canonical forms of a symbol
    Ticker {
        symbol: String,
    },
}
