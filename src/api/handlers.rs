use axum::{Json, extract::State};
use std::sync::Arc;

use crate::data_models::{SITES, utc_timestamp};
use crate::error::ApiError;
use crate::search::SearchEngine;

use super::models::{
    HealthResponse, HealthServices, SearchRequest, SearchResponse, ServiceInfo, SiteStatus,
    SitesResponse,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AI_PROVIDER: &str = "Gemini AI Vision";

pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "AI-Powered Price Comparison Aggregator",
        description: "Emma Robot Technology Demonstration",
        version: VERSION,
        ai_provider: AI_PROVIDER,
        status: "running",
    })
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: utc_timestamp(),
        version: VERSION,
        ai_provider: AI_PROVIDER,
        services: HealthServices {
            api: "running",
            gemini_ai: "configured",
        },
    })
}

pub async fn search_handler(
    State(search_engine): State<Arc<SearchEngine>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let response = search_engine.search(&request).await?;
    Ok(Json(response))
}

pub async fn sites_handler() -> Json<SitesResponse> {
    let supported_sites: Vec<SiteStatus> = SITES
        .iter()
        .map(|site| SiteStatus {
            site: site.domain(),
            status: "active",
        })
        .collect();

    Json(SitesResponse {
        total_sites: supported_sites.len(),
        supported_sites,
        ai_provider: AI_PROVIDER,
    })
}
