use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a competitor record (membership-system document id).
pub type CompetitorId = String;
/// Identifier of a tournament event.
pub type EventId = String;
/// Identifier of a judge profile.
pub type JudgeId = String;

/// Read-only competitor snapshot consumed by the matching core.
///
/// Age is derived from the date of birth at load time; members without a
/// recorded date of birth carry `None` and the age constraint is waived
/// for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    #[serde(rename = "competitorId")]
    pub competitor_id: CompetitorId,
    pub name: String,
    #[serde(rename = "weightKg")]
    pub weight_kg: f64,
    pub belt: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Status of a persisted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Ongoing,
    Completed,
    Cancelled,
}

impl MatchStatus {
    /// A match that is neither completed nor cancelled still blocks its
    /// participants in the strict (no-ongoing) pool mode.
    pub fn is_open(self) -> bool {
        matches!(self, MatchStatus::Scheduled | MatchStatus::Ongoing)
    }
}

/// One row of the match history for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "matchId")]
    pub match_id: Uuid,
    #[serde(rename = "eventId")]
    pub event_id: EventId,
    #[serde(rename = "competitorA")]
    pub competitor_a: CompetitorId,
    #[serde(rename = "competitorB")]
    pub competitor_b: CompetitorId,
    pub status: MatchStatus,
}

impl MatchRecord {
    pub fn involves(&self, competitor_id: &str) -> bool {
        self.competitor_a == competitor_id || self.competitor_b == competitor_id
    }
}

/// A bout proposed by the greedy matcher.
///
/// This value is transient: the caller either discards it or persists it
/// as a real match plus judge assignments. The diffs are recomputed from
/// the two competitors when the proposal is emitted, independent of the
/// ranking score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposedMatch {
    #[serde(rename = "competitorA")]
    pub competitor_a: CompetitorId,
    #[serde(rename = "competitorAName")]
    pub competitor_a_name: String,
    #[serde(rename = "competitorB")]
    pub competitor_b: CompetitorId,
    #[serde(rename = "competitorBName")]
    pub competitor_b_name: String,
    #[serde(rename = "weightDiffKg")]
    pub weight_diff_kg: f64,
    #[serde(rename = "beltGap")]
    pub belt_gap: u32,
    #[serde(rename = "ageDiff")]
    pub age_diff: u32,
    pub score: f64,
    #[serde(rename = "isTitleMatch")]
    pub is_title_match: bool,
    #[serde(rename = "matchType")]
    pub match_type: String,
    #[serde(rename = "isPromotionMatch")]
    pub is_promotion_match: bool,
}

/// The two candidate pools the pairing algorithm draws from.
///
/// Both pools are sorted by competitor id so that pairwise enumeration
/// (and therefore tie-breaking in the stable sort) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CandidatePools {
    pub regular: Vec<Competitor>,
    pub title: Vec<Competitor>,
}

impl CandidatePools {
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.title.is_empty()
    }
}

/// Judge profile with an explicit, optional link to a competitor record.
///
/// A judge that has never been a competitor carries `None` and can never
/// have a conflict of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeProfile {
    #[serde(rename = "judgeId")]
    pub judge_id: JudgeId,
    pub name: String,
    #[serde(rename = "competitorId")]
    pub competitor_id: Option<CompetitorId>,
}

/// Snapshot of a judge's competitor-side involvement in one event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JudgeParticipation {
    /// Has a registration with status "registered" for the event.
    pub registered: bool,
    /// Number of non-cancelled matches in the event the competitor
    /// appears in (either side; completed matches count too).
    pub non_cancelled_matches: u32,
}
