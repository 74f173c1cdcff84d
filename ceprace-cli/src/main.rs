//! ceprace CLI - command-line interface
//!
//! Looks up a Brazilian postal code by racing every known provider and
//! printing the first well-formed answer as one JSON record on stdout.
//! Diagnostics go to stderr; the process exits non-zero whenever no
//! record is produced.

mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use ceprace::logging::init_logging;
use ceprace::{
    BrasilApiProvider, Cep, CepProvider, CepRace, RaceConfig, ReqwestClient, ViaCepProvider,
};

use error::CliError;

#[derive(Parser)]
#[command(name = "ceprace")]
#[command(version = ceprace::VERSION)]
#[command(about = "Look up a Brazilian postal code by racing BrasilAPI and ViaCep", long_about = None)]
struct Args {
    /// CEP code to look up: eight decimal digits, no punctuation
    #[arg(long)]
    cep: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging();

    if let Err(e) = run(&args).await {
        e.exit();
    }
}

/// Validates the code, wires the providers, runs the race, and presents
/// the outcome.
async fn run(args: &Args) -> Result<(), CliError> {
    let cep = Cep::parse(&args.cep)?;

    let http_client = ReqwestClient::new().map_err(CliError::HttpClient)?;
    let providers: Vec<Arc<dyn CepProvider>> = vec![
        Arc::new(BrasilApiProvider::new(http_client.clone())),
        Arc::new(ViaCepProvider::new(http_client)),
    ];

    debug!(cep = %cep, providers = providers.len(), "starting lookup race");

    let race = CepRace::new(providers, RaceConfig::new());
    let outcome = race.run(&cep).await;

    output::present(&outcome)
}
