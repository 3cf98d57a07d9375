use crate::models::{CandidatePools, Competitor, MatchRecord, MatchStatus};
use std::collections::HashSet;

/// Partition a competitor snapshot into the regular and title candidate
/// pools.
///
/// With `allow_ongoing` set, everyone stays in the regular pool and the
/// title pool holds those with at least one completed match in the
/// history. Without it, competitors sitting in an open (scheduled or
/// ongoing) match are excluded from the regular pool and no title
/// candidates are produced at all. `include_title` forces the title
/// pool empty regardless.
///
/// Both pools are sorted by competitor id before returning. The source
/// roster query has no deterministic secondary order, and the greedy
/// matcher's tie-breaking depends on enumeration order, so the ordering
/// is pinned here.
pub fn build_pools(
    mut competitors: Vec<Competitor>,
    history: &[MatchRecord],
    allow_ongoing: bool,
    include_title: bool,
) -> CandidatePools {
    competitors.sort_by(|a, b| a.competitor_id.cmp(&b.competitor_id));

    if allow_ongoing {
        let completed: HashSet<&str> = history
            .iter()
            .filter(|record| record.status == MatchStatus::Completed)
            .flat_map(|record| {
                [
                    record.competitor_a.as_str(),
                    record.competitor_b.as_str(),
                ]
            })
            .collect();

        let title = if include_title {
            competitors
                .iter()
                .filter(|competitor| completed.contains(competitor.competitor_id.as_str()))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        return CandidatePools {
            regular: competitors,
            title,
        };
    }

    // Strict mode: anyone in an open match sits out, and title
    // proposals are only generated in the ongoing-allowed mode.
    let busy: HashSet<&str> = history
        .iter()
        .filter(|record| record.status.is_open())
        .flat_map(|record| {
            [
                record.competitor_a.as_str(),
                record.competitor_b.as_str(),
            ]
        })
        .collect();

    let regular = competitors
        .into_iter()
        .filter(|competitor| !busy.contains(competitor.competitor_id.as_str()))
        .collect();

    CandidatePools {
        regular,
        title: Vec::new(),
    }
}
