//! Data module - the fixed in-memory sample dataset

pub mod records;

pub use records::{Dataset, SalesRecord, UserRecord};
