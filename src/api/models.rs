use serde::{Deserialize, Serialize};

use crate::data_models::Product;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Accepted for client compatibility; every site returns its full listing set.
    #[serde(default = "default_max_results_per_site")]
    pub max_results_per_site: u32,
    /// Accepted for client compatibility; nothing is cached.
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results_per_site: default_max_results_per_site(),
            use_cache: default_use_cache(),
        }
    }
}

fn default_max_results_per_site() -> u32 {
    3
}

fn default_use_cache() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    Completed,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_id: u32,
    pub query: String,
    pub status: SearchStatus,
    pub results: Vec<Product>,
    pub total_found: usize,
    pub search_time_ms: u64,
    pub sites_searched: Vec<String>,
    pub cached_results: usize,
    pub fresh_results: usize,
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub ai_provider: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub ai_provider: &'static str,
    pub services: HealthServices,
}

#[derive(Debug, Serialize)]
pub struct HealthServices {
    pub api: &'static str,
    pub gemini_ai: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SitesResponse {
    pub supported_sites: Vec<SiteStatus>,
    pub total_sites: usize,
    pub ai_provider: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SiteStatus {
    pub site: &'static str,
    pub status: &'static str,
}
