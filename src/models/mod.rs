pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidatePools, Competitor, CompetitorId, EventId, JudgeId, JudgeParticipation, JudgeProfile,
    MatchRecord, MatchStatus, ProposedMatch,
};
pub use requests::{DiagnosePairRequest, ProposeMatchesRequest, ValidateJudgeRequest};
pub use responses::{
    DiagnosePairResponse, ErrorResponse, HealthResponse, ProposeMatchesResponse,
    ValidateJudgeResponse,
};
