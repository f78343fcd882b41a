use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::MatchResult;
use crate::models::domain::WardrobeItem;

/// Response for the outfit endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitResponse {
    pub success: bool,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub selections: IndexMap<String, WardrobeItem>,
    pub scores: IndexMap<String, f64>,
    pub reasoning: Vec<String>,
}

impl OutfitResponse {
    /// Render a match result for the client; reasoning keeps engine order
    pub fn from_result(request_id: String, result: MatchResult) -> Self {
        let reasoning = result.rendered_reasoning();
        Self {
            success: true,
            request_id,
            selections: result.selections,
            scores: result.scores,
            reasoning,
        }
    }
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
