use serde::{Deserialize, Serialize};
use crate::models::domain::{Profile, RecommendedProfile};

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub matches: Vec<RecommendedProfile>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the filter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterResponse {
    pub users: Vec<Profile>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
