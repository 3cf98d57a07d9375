use crate::core::belt::belt_gap;
use crate::core::eligibility::{age_diff, weight_diff};
use crate::models::Competitor;

/// Weight-difference multiplier in the desirability score.
pub const WEIGHT_FACTOR: f64 = 2.0;
/// Belt-gap multiplier (belt closeness dominates the ranking).
pub const BELT_FACTOR: f64 = 3.0;
/// Age-difference multiplier.
pub const AGE_FACTOR: f64 = 1.0;
/// Flat priority bonus applied to title pairs at merge time.
pub const TITLE_BONUS: f64 = 0.9;

/// Desirability score for an eligible pairing, lower is better.
///
/// ```text
/// score = weight_diff * 2 + belt_gap * 3 + age_diff
/// ```
///
/// A missing age on either side contributes 0. The factors are fixed
/// constants rather than configuration: they decide tie-break order in
/// the greedy scan, so every deployment has to rank pairs identically.
pub fn pair_score(a: &Competitor, b: &Competitor) -> f64 {
    let belt = belt_gap(&a.belt, &b.belt).unwrap_or(0) as f64;
    let age = age_diff(a, b).unwrap_or(0) as f64;

    weight_diff(a, b) * WEIGHT_FACTOR + belt * BELT_FACTOR + age * AGE_FACTOR
}
