use crate::models::domain::Competitor;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to generate match proposals for an event (or the global pool).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProposeMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "event_id", rename = "eventId")]
    pub event_id: String,
    /// When true, competitors in ongoing/scheduled matches stay in the
    /// regular pool and title proposals become possible.
    #[serde(default)]
    #[serde(alias = "allow_ongoing_matches", rename = "allowOngoingMatches")]
    pub allow_ongoing_matches: bool,
    #[serde(default)]
    #[serde(alias = "include_title_matches", rename = "includeTitleMatches")]
    pub include_title_matches: bool,
    /// Draw from all active club members instead of the event roster.
    #[serde(default)]
    #[serde(alias = "use_global_pool", rename = "useGlobalPool")]
    pub use_global_pool: bool,
    #[serde(default = "default_match_type")]
    #[serde(alias = "match_type", rename = "matchType")]
    pub match_type: String,
    #[serde(default)]
    #[serde(alias = "is_promotion_match", rename = "isPromotionMatch")]
    pub is_promotion_match: bool,
}

fn default_match_type() -> String {
    "sparring".to_string()
}

/// Request to check a judge for conflicts of interest in an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidateJudgeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "judge_id", rename = "judgeId")]
    pub judge_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "event_id", rename = "eventId")]
    pub event_id: String,
}

/// Request to run the pair diagnostics over two ad-hoc competitors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosePairRequest {
    #[serde(alias = "competitor_a", rename = "competitorA")]
    pub competitor_a: Competitor,
    #[serde(alias = "competitor_b", rename = "competitorB")]
    pub competitor_b: Competitor,
}
