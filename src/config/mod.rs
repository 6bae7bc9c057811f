/// Connection parameters for the Elasticsearch cluster.
///
/// Read once at startup and passed explicitly into the fetch, so the core
/// never reaches into ambient configuration state.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub endpoint: String,
    pub api_key: String,
}

impl ConnectionParams {
    /// Načte parametry z environment proměnných.
    /// Missing variables become empty strings; validation happens per fetch.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("ELASTICSEARCH_ENDPOINT").unwrap_or_default(),
            api_key: std::env::var("ELASTICSEARCH_API_KEY").unwrap_or_default(),
        }
    }

    /// Precondition: obě hodnoty neprázdné (samotný whitespace se nepočítá).
    pub fn is_complete(&self) -> bool {
        !self.endpoint.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_params() {
        let params = ConnectionParams {
            endpoint: "https://es.example.com:9200".to_string(),
            api_key: "secret".to_string(),
        };
        assert!(params.is_complete());
    }

    #[test]
    fn test_empty_endpoint() {
        let params = ConnectionParams {
            endpoint: String::new(),
            api_key: "secret".to_string(),
        };
        assert!(!params.is_complete());
    }

    #[test]
    fn test_whitespace_api_key() {
        let params = ConnectionParams {
            endpoint: "https://es.example.com:9200".to_string(),
            api_key: "   ".to_string(),
        };
        assert!(!params.is_complete());
    }
}
