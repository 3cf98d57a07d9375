use crate::core::belt::belt_gap;
use crate::models::Competitor;
use serde::{Deserialize, Serialize};

/// Maximum weight difference for an eligible pairing, in kilograms.
pub const MAX_WEIGHT_DIFF_KG: f64 = 5.0;
/// Maximum belt ordinal distance (same rank or one apart).
pub const MAX_BELT_GAP: u32 = 1;
/// Maximum age difference in years, when both ages are known.
pub const MAX_AGE_GAP: u32 = 3;

/// Absolute weight difference between two competitors, in kilograms.
#[inline]
pub fn weight_diff(a: &Competitor, b: &Competitor) -> f64 {
    (a.weight_kg - b.weight_kg).abs()
}

/// Absolute age difference, or `None` when either age is unknown.
#[inline]
pub fn age_diff(a: &Competitor, b: &Competitor) -> Option<u32> {
    match (a.age, b.age) {
        (Some(age_a), Some(age_b)) => Some(age_a.abs_diff(age_b)),
        _ => None,
    }
}

/// Hard eligibility check for a candidate pairing.
///
/// All three must hold:
/// - weight difference at most 5.0 kg
/// - belts resolve to known ranks at most one step apart
/// - ages at most 3 years apart, with a missing age on either side
///   counting as satisfied (age is advisory when the data is absent)
pub fn is_eligible_pair(a: &Competitor, b: &Competitor) -> bool {
    if weight_diff(a, b) > MAX_WEIGHT_DIFF_KG {
        return false;
    }

    // Unrecognized belt on either side makes the pair ineligible.
    match belt_gap(&a.belt, &b.belt) {
        Some(gap) if gap <= MAX_BELT_GAP => {}
        _ => return false,
    }

    match age_diff(a, b) {
        Some(gap) => gap <= MAX_AGE_GAP,
        None => true,
    }
}

/// Per-constraint breakdown of a candidate pairing, for the debug
/// endpoint coaches use to inspect why two members were not paired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PairDiagnostics {
    #[serde(rename = "weightOk")]
    pub weight_ok: bool,
    #[serde(rename = "beltOk")]
    pub belt_ok: bool,
    #[serde(rename = "ageOk")]
    pub age_ok: bool,
}

/// Diagnostic breakdown of the three hard constraints.
///
/// The age verdict here is stricter than [`is_eligible_pair`]: a single
/// missing age fails, only a pair with both ages missing passes. Kept
/// as-is so the diagnostics match what the admin tooling has always
/// reported; the production eligibility check is authoritative.
pub fn diagnose_pair(a: &Competitor, b: &Competitor) -> PairDiagnostics {
    let weight_ok = weight_diff(a, b) <= MAX_WEIGHT_DIFF_KG;

    let belt_ok = matches!(belt_gap(&a.belt, &b.belt), Some(gap) if gap <= MAX_BELT_GAP);

    let age_ok = match (a.age, b.age) {
        (Some(age_a), Some(age_b)) => age_a.abs_diff(age_b) <= MAX_AGE_GAP,
        (None, None) => true,
        _ => false,
    };

    PairDiagnostics {
        weight_ok,
        belt_ok,
        age_ok,
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

    #[test]
    fn test_eligible_close_pair() {
        let a = competitor("a", 70.0, "white", Some(20));
        let b = competitor("b", 71.0, "white", Some(21));
        assert!(is_eligible_pair(&a, &b));
    }

    #[test]
    fn test_weight_limit_is_inclusive() {
        let a = competitor("a", 70.0, "white", Some(20));
        let at_limit = competitor("b", 75.0, "white", Some(20));
        let over_limit = competitor("c", 76.0, "white", Some(20));

        assert!(is_eligible_pair(&a, &at_limit));
        assert!(!is_eligible_pair(&a, &over_limit));
    }

    #[test]
    fn test_belt_gap_limits() {
        let white = competitor("a", 70.0, "white", Some(20));
        let yellow = competitor("b", 70.0, "yellow", Some(20));
        let blue = competitor("c", 70.0, "blue", Some(20));

        assert!(is_eligible_pair(&white, &yellow));
        assert!(!is_eligible_pair(&white, &blue));
    }

    #[test]
    fn test_unknown_belt_is_ineligible() {
        let a = competitor("a", 70.0, "white", Some(20));
        let b = competitor("b", 70.0, "camo", Some(20));
        assert!(!is_eligible_pair(&a, &b));
    }

    #[test]
    fn test_age_gap_limits() {
        let a = competitor("a", 70.0, "white", Some(20));
        let close = competitor("b", 70.0, "white", Some(23));
        let far = competitor("c", 70.0, "white", Some(24));

        assert!(is_eligible_pair(&a, &close));
        assert!(!is_eligible_pair(&a, &far));
    }

    #[test]
    fn test_missing_age_waives_the_constraint() {
        let known = competitor("a", 70.0, "white", Some(20));
        let unknown = competitor("b", 70.0, "white", None);
        let far = competitor("c", 70.0, "white", Some(60));

        assert!(is_eligible_pair(&known, &unknown));
        assert!(is_eligible_pair(&unknown, &far));
    }

    #[test]
    fn test_diagnostics_age_is_stricter_on_one_missing_age() {
        let known = competitor("a", 70.0, "white", Some(20));
        let unknown = competitor("b", 70.0, "white", None);
        let also_unknown = competitor("c", 70.0, "white", None);

        // Production check waives a single missing age, diagnostics do not.
        assert!(is_eligible_pair(&known, &unknown));
        assert!(!diagnose_pair(&known, &unknown).age_ok);
        assert!(diagnose_pair(&unknown, &also_unknown).age_ok);
    }

    #[test]
    fn test_diagnostics_match_hard_bounds() {
        let a = competitor("a", 70.0, "white", Some(20));
        let b = competitor("b", 76.0, "blue", Some(30));

        let diag = diagnose_pair(&a, &b);
        assert!(!diag.weight_ok);
        assert!(!diag.belt_ok);
        assert!(!diag.age_ok);
    }
}
