//! Command-line interface for people-search
//!
//! Flags override values loaded from settings.yml and the environment.

use crate::config::Settings;
use clap::Parser;
use std::path::PathBuf;

/// people-search - query a people-search API for matching job titles
///
/// Sends a single search request, prints the raw JSON response and a short
/// summary of the people found.
#[derive(Parser, Debug)]
#[command(name = "people-search")]
#[command(version)]
#[command(about = "Query a people-search API", long_about = None)]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API key sent with the request
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Search endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Job title to match (repeat to match several)
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub titles: Vec<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<f64>,

    /// Exit non-zero when the search fails
    #[arg(long)]
    pub fail_on_error: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ref key) = self.api_key {
            settings.api.api_key = key.clone();
        }
        if let Some(ref endpoint) = self.endpoint {
            settings.api.endpoint = endpoint.clone();
        }
        if !self.titles.is_empty() {
            settings.query.person_titles = self.titles.clone();
        }
        if let Some(page) = self.page {
            settings.query.page = page;
        }
        if let Some(per_page) = self.per_page {
            settings.query.per_page = per_page;
        }
        if let Some(timeout) = self.timeout {
            settings.outgoing.request_timeout = timeout;
        }
        if self.fail_on_error {
            settings.output.fail_on_error = true;
        }
    }

    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
