//! ceprace - Race-based Brazilian postal code lookup
//!
//! This library resolves a CEP by querying every configured provider
//! concurrently and keeping the first well-formed answer, bounded by an
//! overall deadline. Providers that fail or answer late are cancelled and
//! ignored; the caller always gets exactly one terminal [`Outcome`].
//!
//! ```ignore
//! use std::sync::Arc;
//! use ceprace::{
//!     BrasilApiProvider, Cep, CepProvider, CepRace, RaceConfig,
//!     ReqwestClient, ViaCepProvider,
//! };
//!
//! let cep = Cep::parse("01310100")?;
//! let http_client = ReqwestClient::new()?;
//! let providers: Vec<Arc<dyn CepProvider>> = vec![
//!     Arc::new(BrasilApiProvider::new(http_client.clone())),
//!     Arc::new(ViaCepProvider::new(http_client)),
//! ];
//!
//! let race = CepRace::new(providers, RaceConfig::new());
//! let outcome = race.run(&cep).await;
//! ```

pub mod cep;
pub mod logging;
pub mod provider;
pub mod race;

pub use cep::{Cep, ValidationError};
pub use provider::{
    AdapterError, AsyncHttpClient, BrasilApiProvider, CepProvider, CepRecord, ReqwestClient,
    ViaCepProvider,
};
pub use race::{CepRace, Outcome, RaceConfig, DEFAULT_LOOKUP_TIMEOUT};

/// Version of the ceprace library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_comes_from_manifest() {
        assert!(!VERSION.is_empty());
    }
}
