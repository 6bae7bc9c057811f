pub mod index;

pub use index::IndexSummary;
