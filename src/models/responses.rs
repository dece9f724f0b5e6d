use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::models::domain::{CompatibilityScore, ConversationStarter, Match};
use crate::services::CacheStats;

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub matches: Vec<Match>,
    pub total_results: usize,
}

/// Response for the conversation starters endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartersResponse {
    pub score: Arc<CompatibilityScore>,
    pub starters: Vec<ConversationStarter>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cache: CacheStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Cache clear response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    pub cleared: bool,
}
