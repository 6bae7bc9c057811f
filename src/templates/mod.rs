use askama::Template;

use crate::models::IndexSummary;

#[derive(Template)]
#[template(path = "inventory.html")]
pub struct InventoryTemplate {
    pub indices: Vec<IndexSummary>,
    pub error_message: Option<String>,
}

impl InventoryTemplate {
    /// Celkový počet dokumentů přes všechny indexy
    pub fn total_docs(&self) -> u64 {
        self.indices.iter().map(|i| i.docs_count_num()).sum()
    }
}
