//! Turning typed text into structured queries

pub mod query;

pub use query::{parse_query, Query};
