//! HTTP networking module
//!
//! Provides HTTP client functionality for talking to the people-search API.

mod client;
mod request;
mod user_agent;

pub use client::HttpClient;
pub use request::{ApiRequest, ApiResponse};
pub use user_agent::default_user_agent;
