//! Search module
//!
//! Builds the people-search request, sends it and classifies the outcome.

mod executor;
mod models;

pub use executor::SearchClient;
pub use models::{Outcome, PersonRecord, SearchRequest};
