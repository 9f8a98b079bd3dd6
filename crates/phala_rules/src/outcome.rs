//! Result types of one evaluation: per-track score, trace and status.

use serde::{Deserialize, Serialize};

/// Scoring track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    Batting,
    Bowling,
}

pub const ALL_TRACKS: [Track; 2] = [Track::Batting, Track::Bowling];

impl Track {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Batting => "batting",
            Self::Bowling => "bowling",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match phala_vedic_base::fold_name(name).as_str() {
            "batting" | "bat" => Some(Self::Batting),
            "bowling" | "bowl" => Some(Self::Bowling),
            _ => None,
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which track(s) a trace entry or effect touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppliesTo {
    Batting,
    Bowling,
    Both,
}

impl AppliesTo {
    pub const fn covers(self, track: Track) -> bool {
        matches!(
            (self, track),
            (Self::Both, _) | (Self::Batting, Track::Batting) | (Self::Bowling, Track::Bowling)
        )
    }
}

impl From<Track> for AppliesTo {
    fn from(track: Track) -> Self {
        match track {
            Track::Batting => Self::Batting,
            Track::Bowling => Self::Bowling,
        }
    }
}

/// One line of the explanation attached to an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTraceEntry {
    pub rule_id: String,
    pub short_label: String,
    pub localized_label: String,
    pub delta: i32,
    pub applies_to: AppliesTo,
}

/// Whether a track was forced to a certain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeStatus {
    Active,
    SureFlop,
}

/// Score, trace and flags for one track.
///
/// A `SureFlop` outcome always carries `score == 0`; its trace is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub score: i32,
    pub trace: Vec<RuleTraceEntry>,
    pub is_special: bool,
    pub status: OutcomeStatus,
}

impl RuleOutcome {
    pub fn is_sure_flop(&self) -> bool {
        self.status == OutcomeStatus::SureFlop
    }
}

/// Both tracks from one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackOutcomes {
    pub batting: RuleOutcome,
    pub bowling: RuleOutcome,
}

impl TrackOutcomes {
    pub fn get(&self, track: Track) -> &RuleOutcome {
        match track {
            Track::Batting => &self.batting,
            Track::Bowling => &self.bowling,
        }
    }

    /// Higher of the two track scores.
    pub fn best_score(&self) -> i32 {
        self.batting.score.max(self.bowling.score)
    }
}
