//! Normalized record shared by all providers.

use serde::Serialize;

/// Address record in the provider-independent shape.
///
/// Every provider's response body is mapped into this schema, whatever
/// field names the service itself uses. Any field may be empty; a record
/// whose `cep` is empty marks an answer that decoded cleanly but matched
/// nothing. `api` names the provider that produced the record.
///
/// Field order is the output contract: serialization emits the fields in
/// declaration order with these exact names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CepRecord {
    pub cep: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    pub api: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_stable_field_names() {
        let record = CepRecord {
            cep: "01310100".to_string(),
            state: "SP".to_string(),
            city: "São Paulo".to_string(),
            neighborhood: "Bela Vista".to_string(),
            street: "Avenida Paulista".to_string(),
            api: "brasil-api".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"cep":"01310100","state":"SP","city":"São Paulo","neighborhood":"Bela Vista","street":"Avenida Paulista","api":"brasil-api"}"#
        );
    }

    #[test]
    fn test_empty_fields_serialize_as_empty_strings() {
        let record = CepRecord {
            cep: String::new(),
            state: String::new(),
            city: String::new(),
            neighborhood: String::new(),
            street: String::new(),
            api: "via-cep".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"cep":"","state":"","city":"","neighborhood":"","street":"","api":"via-cep"}"#
        );
    }
}
