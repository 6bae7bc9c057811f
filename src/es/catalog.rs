use serde_json::Value;
use thiserror::Error;

use super::client::{CatalogTransport, EsClient};
use crate::config::ConnectionParams;
use crate::models::IndexSummary;

/// Cat API s explicitním výčtem sloupců. The default response shape works
/// too, but pinning the columns keeps us independent of cluster defaults.
const CAT_INDICES_PATH: &str =
    "_cat/indices?format=json&h=index,docs.count,store.size,health,status";

/// Chyby fetche, rozlišené podle toho, kde selhal.
/// Display messages are the user-visible summary; the full diagnostic is
/// logged at error level before the variant is returned.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Elasticsearch configuration is missing. Please set ELASTICSEARCH_ENDPOINT and ELASTICSEARCH_API_KEY")]
    ConfigurationMissing,

    #[error("Failed to retrieve indices: {0}")]
    Transport(String),

    #[error("Error connecting to Elasticsearch: {0}")]
    MalformedResponse(String),
}

/// Získá katalog indexů z clusteru a vrátí normalizovaný seznam.
///
/// Single-shot semantics: one GET, no retry. Every failure mode degrades to
/// a [`FetchError`] the caller can show as one message.
pub async fn fetch(params: &ConnectionParams) -> Result<Vec<IndexSummary>, FetchError> {
    let client = EsClient::new(&params.endpoint, &params.api_key)
        .map_err(|e| FetchError::Transport(format!("{:#}", e)))?;

    fetch_with(params, &client).await
}

/// Jádro fetche, generické přes transport kvůli testům.
pub async fn fetch_with<T: CatalogTransport>(
    params: &ConnectionParams,
    transport: &T,
) -> Result<Vec<IndexSummary>, FetchError> {
    // Precondition check before any network I/O
    if !params.is_complete() {
        tracing::error!("Elasticsearch endpoint or API key is missing or empty");
        return Err(FetchError::ConfigurationMissing);
    }

    let (status, body) = match transport.get_raw(CAT_INDICES_PATH).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Request to Elasticsearch failed: {:#}", e);
            return Err(FetchError::Transport(format!("{:#}", e)));
        }
    };

    if !(200..300).contains(&status) {
        tracing::error!("Elasticsearch returned HTTP {}: {}", status, body);
        return Err(FetchError::Transport(format!("HTTP {}: {}", status, body)));
    }

    match normalize_catalog(&body) {
        Ok(indices) => {
            tracing::info!("Retrieved {} indices from Elasticsearch", indices.len());
            Ok(indices)
        }
        Err(e) => {
            tracing::error!("Failed to parse index catalog: {}", e);
            Err(e)
        }
    }
}

/// Převede tělo odpovědi cat API na seznam [`IndexSummary`].
///
/// Each array element is normalized independently; a missing, null, or
/// non-string field gets its documented default and never aborts the whole
/// catalog. Output order follows the input array.
pub fn normalize_catalog(body: &str) -> Result<Vec<IndexSummary>, FetchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    let elements = value
        .as_array()
        .ok_or_else(|| FetchError::MalformedResponse("response is not a JSON array".to_string()))?;

    let indices = elements
        .iter()
        .map(|element| IndexSummary {
            name: str_field(element, "index", ""),
            docs_count: str_field(element, "docs.count", "0"),
            store_size: str_field(element, "store.size", "N/A"),
            health: str_field(element, "health", "N/A"),
            status: str_field(element, "status", "N/A"),
        })
        .collect();

    Ok(indices)
}

fn str_field(element: &Value, key: &str, default: &str) -> String {
    element
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
