use crate::models::JudgeParticipation;

/// Conflict-of-interest decision for one judge and one event.
///
/// `participation` is `None` when the judge's person has no linked
/// competitor record at all; such a pure judge is always assignable.
/// Otherwise the judge is refused if the linked competitor is
/// registered for the event or appears in any of its non-cancelled
/// matches.
///
/// A full panel additionally needs a minimum number of valid judges;
/// that is the caller's rule, this decision covers one judge at a time.
pub fn is_assignable(participation: Option<&JudgeParticipation>) -> bool {
    match participation {
        None => true,
        Some(snapshot) => !snapshot.registered && snapshot.non_cancelled_matches == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_judge_is_always_assignable() {
        assert!(is_assignable(None));
    }

    #[test]
    fn test_registered_competitor_conflicts() {
        let snapshot = JudgeParticipation {
            registered: true,
            non_cancelled_matches: 0,
        };
        assert!(!is_assignable(Some(&snapshot)));
    }

    #[test]
    fn test_match_participant_conflicts() {
        // Completed matches count: the competitor fought in this event.
        let snapshot = JudgeParticipation {
            registered: false,
            non_cancelled_matches: 1,
        };
        assert!(!is_assignable(Some(&snapshot)));
    }

    #[test]
    fn test_uninvolved_competitor_is_assignable() {
        let snapshot = JudgeParticipation {
            registered: false,
            non_cancelled_matches: 0,
        };
        assert!(is_assignable(Some(&snapshot)));
    }
}
