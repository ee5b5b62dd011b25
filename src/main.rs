use clap::Parser;
use tickerlens::application::classify::BatchSummary;
use tickerlens::cli::commands::{Cli, Commands};
use tickerlens::config::name_normalizer_from_env;
use tickerlens::domain::values::ticker;
use tickerlens::logging::{init_logging, LogConfig};
use tickerlens::TickerLens;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(LogConfig::from_env()) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let result = run_command(cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Resolve {
            equity,
            crypto,
            summary,
        } => {
            require_symbols(&equity, &crypto)?;
            let tl = TickerLens::new()?;
            let records = tl.classify_batch(&equity, &crypto).await;
            println!("{}", serde_json::to_string_pretty(&records)?);
            if summary {
                let totals = BatchSummary::from_records(&records);
                println!("{}", serde_json::to_string_pretty(&totals)?);
            }
        }
        Commands::Keywords { equity, crypto } => {
            require_symbols(&equity, &crypto)?;
            let tl = TickerLens::new()?;
            for record in tl.classify_batch(&equity, &crypto).await {
                match &record.entity {
                    Some(entity) => {
                        println!("{}: {}", record.input_symbol, tl.keywords(entity).join(", "))
                    }
                    None => println!("{}: invalid ticker", record.input_symbol),
                }
            }
        }
        Commands::NormalizeName { raw } => {
            println!("{}", name_normalizer_from_env().normalize(&raw));
        }
        Commands::Ticker { symbol } => {
            println!("stripped:  {}", ticker::strip(&symbol));
            println!("canonical: {}", ticker::normalize(ticker::strip(&symbol)));
        }
    }
    Ok(())
}

fn require_symbols(equity: &[String], crypto: &[String]) -> Result<(), String> {
    if equity.is_empty() && crypto.is_empty() {
        return Err("Provide at least one --equity or --crypto symbol".into());
    }
    Ok(())
}
