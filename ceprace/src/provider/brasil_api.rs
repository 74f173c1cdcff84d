//! BrasilAPI postal-code provider

use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::http::AsyncHttpClient;
use super::types::CepRecord;
use super::{AdapterError, CepProvider};
use crate::cep::Cep;

const BASE_URL: &str = "https://brasilapi.com.br/api/cep/v1/{cep}";
const PROVIDER_ID: &str = "brasil-api";

/// Response shape returned by the BrasilAPI CEP endpoint.
///
/// Only the mapped fields are declared; anything else in the body (such as
/// `service`) is ignored. Absent fields decode to empty strings, so the
/// JSON error body BrasilAPI returns for an unknown code becomes an empty
/// record rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BrasilApiResponse {
    cep: String,
    state: String,
    city: String,
    neighborhood: String,
    street: String,
}

/// BrasilAPI address provider.
///
/// Looks up a CEP against the public BrasilAPI service. Field names in the
/// response already match the normalized schema.
pub struct BrasilApiProvider<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> BrasilApiProvider<C> {
    /// Creates a new BrasilApiProvider with the given HTTP client.
    ///
    /// Uses the public BrasilAPI base URL.
    pub fn new(http_client: C) -> Self {
        Self {
            http_client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new BrasilApiProvider with a custom base URL.
    ///
    /// Useful for testing. The base URL should contain `{cep}` as a
    /// placeholder.
    pub fn with_base_url(http_client: C, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Constructs the lookup URL for a given code.
    fn build_url(&self, cep: &Cep) -> String {
        self.base_url.replace("{cep}", cep.as_str())
    }
}

#[async_trait]
impl<C: AsyncHttpClient> CepProvider for BrasilApiProvider<C> {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(
        &self,
        cep: &Cep,
        cancel: &CancellationToken,
    ) -> Result<CepRecord, AdapterError> {
        let url = self.build_url(cep);

        let body = tokio::select! {
            body = self.http_client.get(&url) => body?,
            _ = cancel.cancelled() => {
                return Err(AdapterError::Transport("cancelled before response".to_string()));
            }
        };

        let data: BrasilApiResponse = serde_json::from_slice(&body)
            .map_err(|e| AdapterError::Decode(format!("unexpected BrasilAPI body: {}", e)))?;

        Ok(CepRecord {
            cep: data.cep,
            state: data.state,
            city: data.city,
            neighborhood: data.neighborhood,
            street: data.street,
            api: PROVIDER_ID.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockHttpClient, PendingHttpClient};

    fn mock_with_body(body: &str) -> MockHttpClient {
        MockHttpClient {
            response: Ok(body.as_bytes().to_vec()),
        }
    }

    fn cep() -> Cep {
        Cep::parse("01310100").unwrap()
    }

    #[test]
    fn test_provider_id() {
        let provider = BrasilApiProvider::new(mock_with_body("{}"));
        assert_eq!(provider.id(), "brasil-api");
    }

    #[test]
    fn test_url_construction() {
        let provider = BrasilApiProvider::new(mock_with_body("{}"));
        assert_eq!(
            provider.build_url(&cep()),
            "https://brasilapi.com.br/api/cep/v1/01310100"
        );
    }

    #[tokio::test]
    async fn test_lookup_maps_known_code() {
        let body = r#"{
            "cep": "01310100",
            "state": "SP",
            "city": "São Paulo",
            "neighborhood": "Bela Vista",
            "street": "Avenida Paulista",
            "service": "correios"
        }"#;
        let provider = BrasilApiProvider::new(mock_with_body(body));

        let record = provider
            .lookup(&cep(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(record.cep, "01310100");
        assert_eq!(record.state, "SP");
        assert_eq!(record.city, "São Paulo");
        assert_eq!(record.neighborhood, "Bela Vista");
        assert_eq!(record.street, "Avenida Paulista");
        assert_eq!(record.api, "brasil-api");
    }

    #[tokio::test]
    async fn test_lookup_decodes_error_body_as_empty_record() {
        // Unknown codes come back as a JSON error body with none of the
        // mapped fields present.
        let body = r#"{
            "message": "Todos os serviços de CEP retornaram erro.",
            "type": "service_error",
            "name": "CepPromiseError"
        }"#;
        let provider = BrasilApiProvider::new(mock_with_body(body));

        let record = provider
            .lookup(&cep(), &CancellationToken::new())
            .await
            .unwrap();

        assert!(record.cep.is_empty());
        assert_eq!(record.api, "brasil-api");
    }

    #[tokio::test]
    async fn test_lookup_rejects_malformed_body() {
        let provider = BrasilApiProvider::new(mock_with_body("not json"));

        let result = provider.lookup(&cep(), &CancellationToken::new()).await;
        assert!(matches!(result.unwrap_err(), AdapterError::Decode(_)));
    }

    #[tokio::test]
    async fn test_lookup_propagates_transport_error() {
        let mock = MockHttpClient {
            response: Err(AdapterError::Transport("connection refused".to_string())),
        };
        let provider = BrasilApiProvider::new(mock);

        let result = provider.lookup(&cep(), &CancellationToken::new()).await;
        assert!(matches!(result.unwrap_err(), AdapterError::Transport(_)));
    }

    #[tokio::test]
    async fn test_lookup_aborts_when_cancelled() {
        let provider = BrasilApiProvider::new(PendingHttpClient);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = provider.lookup(&cep(), &cancel).await;
        let err = result.unwrap_err();
        assert!(matches!(err, AdapterError::Transport(_)));
        assert!(err.to_string().contains("cancelled"));
    }

    #[tokio::test]
    async fn test_custom_base_url() {
        let provider = BrasilApiProvider::with_base_url(
            mock_with_body("{}"),
            "http://localhost:8080/cep/{cep}".to_string(),
        );
        assert_eq!(provider.build_url(&cep()), "http://localhost:8080/cep/01310100");
    }
}
