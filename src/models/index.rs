use serde::{Deserialize, Serialize};

/// Jeden řádek katalogu indexů, normalizovaný pro zobrazení.
/// All fields are the cluster's textual values; missing ones were already
/// defaulted during the fetch ("0" for docs.count, "N/A" elsewhere, "" for
/// the name).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IndexSummary {
    pub name: String,
    pub docs_count: String,    // počet dokumentů (numeric text)
    pub store_size: String,    // human-readable velikost
    pub health: String,        // green, yellow, red, N/A
    pub status: String,        // open, close, N/A
}

impl IndexSummary {
    /// Parsuje docs_count jako číslo pro souhrny
    pub fn docs_count_num(&self) -> u64 {
        self.docs_count.parse().unwrap_or(0)
    }

    /// CSS třída badge podle health
    pub fn health_class(&self) -> &'static str {
        match self.health.as_str() {
            "green" => "bg-green-lt",
            "yellow" => "bg-yellow-lt",
            "red" => "bg-red-lt",
            _ => "bg-secondary-lt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(health: &str, docs_count: &str) -> IndexSummary {
        IndexSummary {
            name: "logs-1".to_string(),
            docs_count: docs_count.to_string(),
            store_size: "1.2mb".to_string(),
            health: health.to_string(),
            status: "open".to_string(),
        }
    }

    #[test]
    fn test_docs_count_num() {
        assert_eq!(summary("green", "100").docs_count_num(), 100);
        assert_eq!(summary("green", "0").docs_count_num(), 0);
        assert_eq!(summary("green", "N/A").docs_count_num(), 0);
    }

    #[test]
    fn test_health_class() {
        assert_eq!(summary("green", "0").health_class(), "bg-green-lt");
        assert_eq!(summary("yellow", "0").health_class(), "bg-yellow-lt");
        assert_eq!(summary("red", "0").health_class(), "bg-red-lt");
        assert_eq!(summary("N/A", "0").health_class(), "bg-secondary-lt");
    }
}
