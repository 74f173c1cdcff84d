//! Postal-code provider abstraction
//!
//! This module provides the trait and implementations for looking up a CEP
//! against external address services. Each provider issues a single GET to
//! its own endpoint, decodes the service-specific response shape, and maps
//! it into the common [`CepRecord`] schema.

mod brasil_api;
mod http;
mod types;
mod via_cep;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::cep::Cep;

pub use brasil_api::BrasilApiProvider;
pub use http::{AsyncHttpClient, ReqwestClient};
pub use types::CepRecord;
pub use via_cep::ViaCepProvider;

#[cfg(test)]
pub use http::tests::{MockHttpClient, PendingHttpClient};

/// Errors that can occur during a single provider lookup.
///
/// These never propagate past the race: a failed lookup is logged and the
/// provider simply does not deliver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The request URL could not be built.
    #[error("failed to build request: {0}")]
    RequestBuild(String),
    /// The network call failed, was cancelled, or the deadline fired
    /// mid-flight.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body could not be fully read.
    #[error("failed to read response body: {0}")]
    BodyRead(String),
    /// The body was not the JSON shape the provider is known to return.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// A single postal-code data source.
///
/// Implementations perform one lookup attempt per call; there is no retry
/// at this layer, so one failure ends the provider's participation in a
/// race. An unknown code is not an error: it decodes to a record whose
/// `cep` field is empty, and the caller classifies it.
#[async_trait]
pub trait CepProvider: Send + Sync {
    /// Stable identifier recorded in the `api` field of produced records.
    fn id(&self) -> &'static str;

    /// Looks up the code, racing the request against the shared
    /// cancellation token.
    async fn lookup(
        &self,
        cep: &Cep,
        cancel: &CancellationToken,
    ) -> Result<CepRecord, AdapterError>;
}
