//! punnett - CLI entry point
//!
//! Crosses genotypes from a CSV file, or serves the cross engine over HTTP.

use clap::{Parser, Subcommand};
use punnett::prelude::*;
use punnett::web::{run_server, GenerateResponse};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "punnett")]
#[command(version)]
#[command(about = "Offspring genotype probabilities for three-locus crosses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve `POST /generate_children`
    Serve {
        /// Address to bind the server to
        #[arg(short, long, default_value = "0.0.0.0:5000")]
        bind: String,
    },

    /// Cross every pair of parents listed in a CSV file and print JSON
    Cross {
        /// CSV file with one `sex,A,B,C` row per parent
        #[arg(short, long)]
        parents: PathBuf,

        /// Offspring genotype to report, as `sex,A,B,C` (repeatable)
        #[arg(short, long = "target")]
        targets: Vec<String>,

        /// The CSV file has no header row
        #[arg(long)]
        no_headers: bool,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Commands::Serve { bind } => {
            let bind: SocketAddr = bind
                .parse()
                .map_err(|e| format!("Invalid bind address '{}': {}", bind, e))?;
            run_server(bind).await
        }
        Commands::Cross {
            parents,
            targets,
            no_headers,
            delimiter,
        } => {
            if !delimiter.is_ascii() {
                return Err(format!("Delimiter '{}' is not a single byte", delimiter).into());
            }
            let genotypes = GenotypeCsvBuilder::new()
                .headers(!no_headers)
                .delimiter(delimiter as u8)
                .from_path(&parents)?
                .collect::<Result<Vec<Genotype>, CrossError>>()?;
            log::info!("Loaded {} parents from {}", genotypes.len(), parents.display());

            let targets = targets
                .iter()
                .map(|t| t.parse::<Genotype>())
                .collect::<Result<Targets, CrossError>>()?;

            let response = GenerateResponse {
                results: cross_all(&genotypes, &targets)?,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}
