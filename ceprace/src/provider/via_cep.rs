//! ViaCep postal-code provider

use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::http::AsyncHttpClient;
use super::types::CepRecord;
use super::{AdapterError, CepProvider};
use crate::cep::Cep;

const BASE_URL: &str = "http://viacep.com.br/ws/{cep}/json/";
const PROVIDER_ID: &str = "via-cep";

/// Response shape returned by the ViaCep endpoint.
///
/// ViaCep uses Portuguese field names; only the mapped ones are declared
/// and the rest (`complemento`, `ibge`, `ddd`, ...) are ignored. An
/// unknown code comes back as `{"erro": true}` with no address fields,
/// which decodes to all defaults and therefore an empty record.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ViaCepResponse {
    cep: String,
    logradouro: String,
    bairro: String,
    localidade: String,
    uf: String,
}

/// ViaCep address provider.
///
/// Looks up a CEP against the public ViaCep service and translates its
/// Portuguese field names into the normalized schema. ViaCep writes the
/// code in hyphenated form (`01310-100`) and the record carries it
/// verbatim.
pub struct ViaCepProvider<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> ViaCepProvider<C> {
    /// Creates a new ViaCepProvider with the given HTTP client.
    ///
    /// Uses the public ViaCep base URL.
    pub fn new(http_client: C) -> Self {
        Self {
            http_client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new ViaCepProvider with a custom base URL.
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
impl<C: AsyncHttpClient> CepProvider for ViaCepProvider<C> {
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

        let data: ViaCepResponse = serde_json::from_slice(&body)
            .map_err(|e| AdapterError::Decode(format!("unexpected ViaCep body: {}", e)))?;

        Ok(CepRecord {
            cep: data.cep,
            state: data.uf,
            city: data.localidade,
            neighborhood: data.bairro,
            street: data.logradouro,
            api: PROVIDER_ID.to_string(),
        })
    }
}
