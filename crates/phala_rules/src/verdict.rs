//! Score to human-facing verdict.

use serde::{Deserialize, Serialize};

use crate::outcome::{RuleOutcome, Track};

/// Scores at or below this are a certain flop.
pub const SURE_FLOP_MAX: i32 = -5;
/// Scores at or above this are excellent.
pub const EXCELLENT_MIN: i32 = 4;
/// Scores at or above this (and below excellent) are good.
pub const GOOD_MIN: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VerdictKind {
    SureFlop,
    Flop,
    Neutral,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Display tag for colouring or sorting verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Positive,
    Highlight,
}

impl VerdictKind {
    /// Band a raw score.
    pub const fn from_score(score: i32) -> Self {
        if score <= SURE_FLOP_MAX {
            Self::SureFlop
        } else if score < 0 {
            Self::Flop
        } else if score >= EXCELLENT_MIN {
            Self::Excellent
        } else if score >= GOOD_MIN {
            Self::Good
        } else {
            Self::Neutral
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SureFlop => "Sure Flop",
            Self::Flop => "Flop",
            Self::Neutral => "Neutral",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    pub const fn localized_label(self) -> &'static str {
        match self {
            Self::SureFlop => "Nishchit Asafal",
            Self::Flop => "Asafal",
            Self::Neutral => "Saamanya",
            Self::Good => "Shubh",
            Self::Excellent => "Uttam",
        }
    }

    pub const fn confidence(self) -> Confidence {
        match self {
            Self::SureFlop | Self::Excellent => Confidence::High,
            Self::Flop | Self::Good => Confidence::Medium,
            Self::Neutral => Confidence::Low,
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            Self::SureFlop => Severity::Critical,
            Self::Flop => Severity::Warning,
            Self::Neutral => Severity::Info,
            Self::Good => Severity::Positive,
            Self::Excellent => Severity::Highlight,
        }
    }

    /// Fixed message for this band on a track.
    pub const fn message(self, track: Track) -> &'static str {
        match (self, track) {
            (Self::SureFlop, Track::Batting) => "Avoid as a batter: the chart points to an early dismissal.",
            (Self::SureFlop, Track::Bowling) => "Avoid as a bowler: the chart points to an expensive, wicketless spell.",
            (Self::Flop, Track::Batting) => "Weak batting day; expect a low score.",
            (Self::Flop, Track::Bowling) => "Weak bowling day; wickets unlikely.",
            (Self::Neutral, Track::Batting) => "No strong indication for batting.",
            (Self::Neutral, Track::Bowling) => "No strong indication for bowling.",
            (Self::Good, Track::Batting) => "Favourable for batting; a useful contribution is likely.",
            (Self::Good, Track::Bowling) => "Favourable for bowling; a wicket or tight spell is likely.",
            (Self::Excellent, Track::Batting) => "Strong batting day; a big score is indicated.",
            (Self::Excellent, Track::Bowling) => "Strong bowling day; multiple wickets are indicated.",
        }
    }
}

/// Verdict for one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub track: Track,
    pub score: i32,
    pub label: String,
    pub localized_label: String,
    pub message: String,
    pub confidence: Confidence,
    pub severity: Severity,
}

impl Verdict {
    fn new(kind: VerdictKind, score: i32, track: Track) -> Self {
        Self {
            kind,
            track,
            score,
            label: kind.label().to_string(),
            localized_label: kind.localized_label().to_string(),
            message: kind.message(track).to_string(),
            confidence: kind.confidence(),
            severity: kind.severity(),
        }
    }
}

/// Verdict from a bare score.
pub fn map_verdict(score: i32, track: Track) -> Verdict {
    Verdict::new(VerdictKind::from_score(score), score, track)
}

/// Verdict from an evaluation; a forced SureFlop wins over the score band.
pub fn verdict_for_outcome(outcome: &RuleOutcome, track: Track) -> Verdict {
    if outcome.is_sure_flop() {
        Verdict::new(VerdictKind::SureFlop, outcome.score, track)
    } else {
        map_verdict(outcome.score, track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::OutcomeStatus;

    #[test]
    fn band_edges() {
        let cases = [
            (-9, VerdictKind::SureFlop),
            (-5, VerdictKind::SureFlop),
            (-4, VerdictKind::Flop),
            (-1, VerdictKind::Flop),
            (0, VerdictKind::Neutral),
            (1, VerdictKind::Neutral),
            (2, VerdictKind::Good),
            (3, VerdictKind::Good),
            (4, VerdictKind::Excellent),
            (25, VerdictKind::Excellent),
        ];
        for (score, kind) in cases {
            assert_eq!(map_verdict(score, Track::Batting).kind, kind, "score {score}");
        }
    }

    #[test]
    fn messages_are_track_specific() {
        let bat = map_verdict(5, Track::Batting);
        let bowl = map_verdict(5, Track::Bowling);
        assert_eq!(bat.label, bowl.label);
        assert_ne!(bat.message, bowl.message);
        assert_eq!(bat.confidence, Confidence::High);
        assert_eq!(bat.localized_label, "Uttam");
    }

    #[test]
    fn forced_status_wins() {
        let outcome = RuleOutcome {
            score: 0,
            trace: Vec::new(),
            is_special: true,
            status: OutcomeStatus::SureFlop,
        };
        let v = verdict_for_outcome(&outcome, Track::Bowling);
        assert_eq!(v.kind, VerdictKind::SureFlop);
        assert_eq!(v.severity, Severity::Critical);
        assert_eq!(v.score, 0);
    }
}
