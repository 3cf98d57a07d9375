use crate::core::eligibility::PairDiagnostics;
use crate::models::domain::ProposedMatch;
use serde::{Deserialize, Serialize};

/// Response for the propose-matches endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposeMatchesResponse {
    pub proposals: Vec<ProposedMatch>,
    #[serde(rename = "regularPoolSize")]
    pub regular_pool_size: usize,
    #[serde(rename = "titlePoolSize")]
    pub title_pool_size: usize,
    #[serde(rename = "pairsConsidered")]
    pub pairs_considered: usize,
}

/// Response for the judge-validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateJudgeResponse {
    pub assignable: bool,
    /// Panel size the caller still has to reach; echoed from config,
    /// not enforced here (one judge is checked at a time).
    #[serde(rename = "minPanelSize")]
    pub min_panel_size: u32,
}

/// Response for the pair-diagnostics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosePairResponse {
    pub diagnostics: PairDiagnostics,
    /// Production eligibility verdict (may disagree with the
    /// diagnostics on pairs with exactly one missing age).
    pub eligible: bool,
    pub score: Option<f64>,
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
