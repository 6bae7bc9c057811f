pub mod catalog;
pub mod client;

pub use catalog::FetchError;
pub use client::{CatalogTransport, EsClient};
