use serde::{Deserialize, Serialize};

/// Belt rank in the club-wide progression.
///
/// The ordinal is only ever used for adjacency and distance checks
/// between two competitors, never shown as a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeltRank {
    White,
    Yellow,
    Orange,
    Green,
    Blue,
    Brown,
    Black,
}

impl BeltRank {
    /// Club-wide progression, lowest rank first.
    pub const PROGRESSION: [BeltRank; 7] = [
        BeltRank::White,
        BeltRank::Yellow,
        BeltRank::Orange,
        BeltRank::Green,
        BeltRank::Blue,
        BeltRank::Brown,
        BeltRank::Black,
    ];

    /// Resolve a stored belt name to a rank. Unknown names yield `None`;
    /// a pair with an unresolvable belt is never eligible.
    pub fn parse(name: &str) -> Option<BeltRank> {
        match name.trim().to_ascii_lowercase().as_str() {
            "white" => Some(BeltRank::White),
            "yellow" => Some(BeltRank::Yellow),
            "orange" => Some(BeltRank::Orange),
            "green" => Some(BeltRank::Green),
            "blue" => Some(BeltRank::Blue),
            "brown" => Some(BeltRank::Brown),
            "black" => Some(BeltRank::Black),
            _ => None,
        }
    }

    /// Position within [`BeltRank::PROGRESSION`] (white = 0, black = 6).
    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

/// Absolute ordinal distance between two stored belt names.
///
/// `None` when either name does not resolve to a known rank.
pub fn belt_gap(a: &str, b: &str) -> Option<u32> {
    let rank_a = BeltRank::parse(a)?;
    let rank_b = BeltRank::parse(b)?;
    Some(rank_a.ordinal().abs_diff(rank_b.ordinal()))
}
