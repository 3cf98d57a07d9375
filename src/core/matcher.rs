use crate::core::belt::belt_gap;
use crate::core::eligibility::{age_diff, is_eligible_pair, weight_diff};
use crate::core::scoring::{pair_score, TITLE_BONUS};
use crate::models::{CandidatePools, Competitor, ProposedMatch};
use std::collections::HashSet;

/// Result of one proposal run.
#[derive(Debug, Clone)]
pub struct ProposalResult {
    pub proposals: Vec<ProposedMatch>,
    pub regular_pool_size: usize,
    pub title_pool_size: usize,
    /// Eligible pairs that entered the ranked list, committed or not.
    pub pairs_considered: usize,
}

struct ScoredPair<'a> {
    a: &'a Competitor,
    b: &'a Competitor,
    score: f64,
    is_title: bool,
}

/// Greedy pairing over the candidate pools.
///
/// Eligible pairs from both pools are merged into one list (title pairs
/// at 90% of their base score), stably sorted ascending by score, and
/// scanned once front to back. A pair is committed only if neither side
/// has been consumed by an earlier, better-ranked pair; skipped pairs
/// are never revisited. That makes the result a heuristic, not a
/// maximum-cardinality matching, and intentionally so: committed pairs
/// can strand competitors that an alternative assignment would have
/// paired.
///
/// `match_type` and `is_promotion_match` are carried onto every
/// proposal verbatim and play no part in eligibility or ranking.
pub fn propose_matches(
    pools: &CandidatePools,
    match_type: &str,
    is_promotion_match: bool,
) -> ProposalResult {
    let mut pairs: Vec<ScoredPair<'_>> = Vec::new();

    enumerate_pool(&pools.regular, false, &mut pairs);
    enumerate_pool(&pools.title, true, &mut pairs);

    let pairs_considered = pairs.len();

    // Stable sort: equal scores keep enumeration order, which is part
    // of the observable tie-break contract.
    pairs.sort_by(|x, y| {
        x.score
            .partial_cmp(&y.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut consumed: HashSet<&str> = HashSet::new();
    let mut proposals = Vec::new();

    for pair in &pairs {
        let id_a = pair.a.competitor_id.as_str();
        let id_b = pair.b.competitor_id.as_str();
        if consumed.contains(id_a) || consumed.contains(id_b) {
            continue;
        }
        consumed.insert(id_a);
        consumed.insert(id_b);

        // Diffs are recomputed from the competitors, independent of the
        // (possibly title-adjusted) ranking score.
        proposals.push(ProposedMatch {
            competitor_a: pair.a.competitor_id.clone(),
            competitor_a_name: pair.a.name.clone(),
            competitor_b: pair.b.competitor_id.clone(),
            competitor_b_name: pair.b.name.clone(),
            weight_diff_kg: weight_diff(pair.a, pair.b),
            belt_gap: belt_gap(&pair.a.belt, &pair.b.belt).unwrap_or(0),
            age_diff: age_diff(pair.a, pair.b).unwrap_or(0),
            score: pair.score,
            is_title_match: pair.is_title,
            match_type: match_type.to_string(),
            is_promotion_match,
        });
    }

    ProposalResult {
        proposals,
        regular_pool_size: pools.regular.len(),
        title_pool_size: pools.title.len(),
        pairs_considered,
    }
}

fn enumerate_pool<'a>(pool: &'a [Competitor], is_title: bool, out: &mut Vec<ScoredPair<'a>>) {
    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            let (a, b) = (&pool[i], &pool[j]);
            if a.competitor_id == b.competitor_id {
                continue;
            }
            if !is_eligible_pair(a, b) {
                continue;
            }

            let mut score = pair_score(a, b);
            if is_title {
                score *= TITLE_BONUS;
            }

            out.push(ScoredPair {
                a,
                b,
                score,
                is_title,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(id: &str, weight_kg: f64, belt: &str, age: Option<u32>) -> Competitor {
        Competitor {
            competitor_id: id.to_string(),
            name: format!("Member {}", id),
            weight_kg,
            belt: belt.to_string(),
            age,
            is_active: true,
        }
    }

    fn regular_pools(competitors: Vec<Competitor>) -> CandidatePools {
        CandidatePools {
            regular: competitors,
            title: Vec::new(),
        }
    }

    #[test]
    fn test_empty_pools_yield_no_proposals() {
        let result = propose_matches(&CandidatePools::default(), "sparring", false);
        assert!(result.proposals.is_empty());
        assert_eq!(result.pairs_considered, 0);
    }

    #[test]
    fn test_fully_ineligible_pool_yields_no_proposals() {
        let pools = regular_pools(vec![
            competitor("a", 60.0, "white", Some(20)),
            competitor("b", 90.0, "black", Some(50)),
        ]);
        let result = propose_matches(&pools, "sparring", false);
        assert!(result.proposals.is_empty());
    }

    #[test]
    fn test_best_scoring_pair_wins() {
        // a-b score 3, a-c score 1, b-c score 2: a-c commits first and
        // b is left without a partner.
        let pools = regular_pools(vec![
            competitor("a", 70.0, "white", Some(20)),
            competitor("b", 71.0, "white", Some(21)),
            competitor("c", 70.5, "white", Some(20)),
        ]);
        let result = propose_matches(&pools, "sparring", false);

        assert_eq!(result.proposals.len(), 1);
        let proposal = &result.proposals[0];
        assert_eq!(proposal.competitor_a, "a");
        assert_eq!(proposal.competitor_b, "c");
        assert_eq!(proposal.score, 1.0);
    }

    #[test]
    fn test_greedy_scan_is_not_maximal() {
        // A-C ranks first and consumes both; B and D cannot pair with
        // each other (belt gap 2), so four eligible competitors yield a
        // single proposal. Expected, not a defect.
        let pools = regular_pools(vec![
            competitor("A", 70.0, "yellow", Some(20)),
            competitor("B", 70.5, "white", Some(20)),
            competitor("C", 70.0, "yellow", Some(21)),
            competitor("D", 70.5, "orange", Some(20)),
        ]);
        let result = propose_matches(&pools, "sparring", false);

        assert_eq!(result.proposals.len(), 1);
        assert_eq!(result.proposals[0].competitor_a, "A");
        assert_eq!(result.proposals[0].competitor_b, "C");
    }

    #[test]
    fn test_each_competitor_consumed_at_most_once() {
        let pools = regular_pools(
            (0..10)
                .map(|i| competitor(&format!("c{:02}", i), 70.0 + i as f64 * 0.1, "green", Some(25)))
                .collect(),
        );
        let result = propose_matches(&pools, "sparring", false);

        let mut seen = HashSet::new();
        for proposal in &result.proposals {
            assert_ne!(proposal.competitor_a, proposal.competitor_b);
            assert!(seen.insert(proposal.competitor_a.clone()));
            assert!(seen.insert(proposal.competitor_b.clone()));
        }
        assert_eq!(result.proposals.len(), 5);
    }

    #[test]
    fn test_title_pair_ranks_before_identical_regular_pair() {
        let pools = CandidatePools {
            regular: vec![
                competitor("r1", 70.0, "blue", Some(30)),
                competitor("r2", 71.0, "blue", Some(31)),
            ],
            title: vec![
                competitor("t1", 70.0, "blue", Some(30)),
                competitor("t2", 71.0, "blue", Some(31)),
            ],
        };
        let result = propose_matches(&pools, "sparring", false);

        assert_eq!(result.proposals.len(), 2);
        let first = &result.proposals[0];
        assert!(first.is_title_match);
        assert_eq!(first.score, 3.0 * TITLE_BONUS);
        assert!(!result.proposals[1].is_title_match);
    }

    #[test]
    fn test_competitor_in_both_pools_is_committed_once() {
        let shared = competitor("s", 70.0, "brown", Some(40));
        let pools = CandidatePools {
            regular: vec![shared.clone(), competitor("r", 70.2, "brown", Some(40))],
            title: vec![shared, competitor("t", 70.1, "brown", Some(40))],
        };
        let result = propose_matches(&pools, "sparring", false);

        // The title pair (smaller diff, 10% bonus) wins "s"; the
        // leftover regular pair cannot form.
        assert_eq!(result.proposals.len(), 1);
        assert!(result.proposals[0].is_title_match);

        let mut seen = HashSet::new();
        for proposal in &result.proposals {
            assert!(seen.insert(proposal.competitor_a.clone()));
            assert!(seen.insert(proposal.competitor_b.clone()));
        }
    }

    #[test]
    fn test_labels_are_carried_verbatim() {
        let pools = regular_pools(vec![
            competitor("a", 70.0, "white", Some(20)),
            competitor("b", 71.0, "white", Some(21)),
        ]);
        let result = propose_matches(&pools, "grappling", true);

        assert_eq!(result.proposals[0].match_type, "grappling");
        assert!(result.proposals[0].is_promotion_match);
    }

    #[test]
    fn test_two_runs_produce_identical_output() {
        let pools = regular_pools(
            (0..20)
                .map(|i| {
                    competitor(
                        &format!("c{:02}", i),
                        70.0 + (i % 7) as f64,
                        if i % 2 == 0 { "green" } else { "blue" },
                        Some(20 + (i % 5) as u32),
                    )
                })
                .collect(),
        );

        let first = propose_matches(&pools, "sparring", false);
        let second = propose_matches(&pools, "sparring", false);

        assert_eq!(first.proposals.len(), second.proposals.len());
        for (x, y) in first.proposals.iter().zip(second.proposals.iter()) {
            assert_eq!(x.competitor_a, y.competitor_a);
            assert_eq!(x.competitor_b, y.competitor_b);
            assert_eq!(x.score, y.score);
        }
    }
}
