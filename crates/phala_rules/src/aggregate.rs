//! Group-level aggregation of per-player outcomes.

use serde::{Deserialize, Serialize};

use crate::outcome::TrackOutcomes;

/// Mean of each player's better track score. None for an empty group.
pub fn group_score(players: &[TrackOutcomes]) -> Option<f64> {
    if players.is_empty() {
        return None;
    }
    let total: i64 = players.iter().map(|p| i64::from(p.best_score())).sum();
    Some(total as f64 / players.len() as f64)
}

/// Which of two groups the charts favour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GroupComparison {
    FirstFavoured { margin: f64 },
    SecondFavoured { margin: f64 },
    Even,
    /// At least one group is empty.
    Undetermined,
}

/// Compare two groups by `group_score`.
pub fn compare_groups(first: &[TrackOutcomes], second: &[TrackOutcomes]) -> GroupComparison {
    let (Some(a), Some(b)) = (group_score(first), group_score(second)) else {
        return GroupComparison::Undetermined;
    };
    let margin = a - b;
    if margin > f64::EPSILON {
        GroupComparison::FirstFavoured { margin }
    } else if margin < -f64::EPSILON {
        GroupComparison::SecondFavoured { margin: -margin }
    } else {
        GroupComparison::Even
    }
}
