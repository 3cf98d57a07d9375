// Core algorithm exports
pub mod belt;
pub mod eligibility;
pub mod judges;
pub mod matcher;
pub mod pools;
pub mod scoring;

pub use belt::{belt_gap, BeltRank};
pub use eligibility::{diagnose_pair, is_eligible_pair, PairDiagnostics};
pub use judges::is_assignable;
pub use matcher::{propose_matches, ProposalResult};
pub use pools::build_pools;
pub use scoring::pair_score;
