//! people-search: a small client for people-search APIs
//!
//! Sends one configured search to the remote API, then reports the raw
//! response and a short summary of the matched people.

pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod render;
pub mod search;

pub use config::Settings;
pub use error::{Result, SearchError};
pub use render::Renderer;
pub use search::{Outcome, PersonRecord, SearchClient, SearchRequest};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
