//! Dojo Algo - competitor pairing and judge assignment for the Dojo
//! club management app.
//!
//! The pure matching core lives in the `core` module: candidate pool
//! construction, pair eligibility and scoring, the greedy matcher and
//! the judge conflict decision. Everything around it (HTTP surface,
//! Postgres reads, caching) only materializes snapshots for the core
//! and ships its output back to the caller.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    build_pools, diagnose_pair, is_assignable, is_eligible_pair, pair_score, propose_matches,
    BeltRank, PairDiagnostics, ProposalResult,
};
pub use models::{
    CandidatePools, Competitor, JudgeParticipation, JudgeProfile, MatchRecord, MatchStatus,
    ProposedMatch,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(BeltRank::parse("white").map(BeltRank::ordinal), Some(0));
    }
}
