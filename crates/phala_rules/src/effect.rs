//! Rule effects and the fold that turns them into per-track outcomes.

use crate::outcome::{AppliesTo, OutcomeStatus, RuleOutcome, RuleTraceEntry, Track};

/// Short (English) and localized (transliterated Sanskrit) label pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub short: String,
    pub localized: String,
}

impl Labels {
    pub fn new(short: impl Into<String>, localized: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            localized: localized.into(),
        }
    }
}

/// What a fired rule does to the accumulators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEffect {
    Delta {
        rule: String,
        applies_to: AppliesTo,
        delta: i32,
        labels: Labels,
    },
    /// Forces the track to SureFlop at finalization.
    ForceSureFlop {
        rule: String,
        track: Track,
        labels: Labels,
    },
    MarkSpecial {
        applies_to: AppliesTo,
    },
}

impl RuleEffect {
    pub fn delta(rule: &str, applies_to: AppliesTo, delta: i32, labels: Labels) -> Self {
        Self::Delta {
            rule: rule.to_string(),
            applies_to,
            delta,
            labels,
        }
    }

    pub fn sure_flop(rule: &str, track: Track, labels: Labels) -> Self {
        Self::ForceSureFlop {
            rule: rule.to_string(),
            track,
            labels,
        }
    }

    pub fn special(applies_to: AppliesTo) -> Self {
        Self::MarkSpecial { applies_to }
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    score: i32,
    trace: Vec<RuleTraceEntry>,
    special: bool,
    forced: bool,
}

impl Accumulator {
    fn apply(mut self, effect: &RuleEffect, track: Track) -> Self {
        match effect {
            RuleEffect::Delta {
                rule,
                applies_to,
                delta,
                labels,
            } if applies_to.covers(track) => {
                self.score += delta;
                self.trace.push(RuleTraceEntry {
                    rule_id: rule.clone(),
                    short_label: labels.short.clone(),
                    localized_label: labels.localized.clone(),
                    delta: *delta,
                    applies_to: *applies_to,
                });
            }
            RuleEffect::ForceSureFlop {
                rule,
                track: forced,
                labels,
            } if *forced == track => {
                self.forced = true;
                self.trace.push(RuleTraceEntry {
                    rule_id: rule.clone(),
                    short_label: labels.short.clone(),
                    localized_label: labels.localized.clone(),
                    delta: 0,
                    applies_to: track.into(),
                });
            }
            RuleEffect::MarkSpecial { applies_to } if applies_to.covers(track) => {
                self.special = true;
            }
            _ => {}
        }
        self
    }

    fn finish(self) -> RuleOutcome {
        if self.forced {
            RuleOutcome {
                score: 0,
                trace: self.trace,
                is_special: self.special,
                status: OutcomeStatus::SureFlop,
            }
        } else {
            RuleOutcome {
                score: self.score,
                trace: self.trace,
                is_special: self.special,
                status: OutcomeStatus::Active,
            }
        }
    }
}

/// Fold effects, in order, into the outcome for one track.
pub fn fold_effects(effects: &[RuleEffect], track: Track) -> RuleOutcome {
    effects
        .iter()
        .fold(Accumulator::default(), |acc, e| acc.apply(e, track))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l() -> Labels {
        Labels::new("x", "y")
    }

    #[test]
    fn deltas_route_by_track() {
        let effects = vec![
            RuleEffect::delta("a", AppliesTo::Both, 2, l()),
            RuleEffect::delta("b", AppliesTo::Batting, 3, l()),
            RuleEffect::delta("c", AppliesTo::Bowling, -1, l()),
        ];
        let bat = fold_effects(&effects, Track::Batting);
        let bowl = fold_effects(&effects, Track::Bowling);
        assert_eq!(bat.score, 5);
        assert_eq!(bowl.score, 1);
        assert_eq!(bat.trace.len(), 2);
        assert_eq!(bowl.trace[1].rule_id, "c");
    }

    #[test]
    fn forced_track_zeroes_score_keeps_trace() {
        let effects = vec![
            RuleEffect::delta("a", AppliesTo::Both, 7, l()),
            RuleEffect::sure_flop("b", Track::Bowling, l()),
            RuleEffect::special(AppliesTo::Both),
        ];
        let bowl = fold_effects(&effects, Track::Bowling);
        assert_eq!(bowl.status, OutcomeStatus::SureFlop);
        assert_eq!(bowl.score, 0);
        assert_eq!(bowl.trace.len(), 2);
        assert_eq!(bowl.trace[1].delta, 0);
        assert!(bowl.is_special);

        let bat = fold_effects(&effects, Track::Batting);
        assert_eq!(bat.status, OutcomeStatus::Active);
        assert_eq!(bat.score, 7);
    }

    #[test]
    fn empty_is_neutral_active() {
        let out = fold_effects(&[], Track::Batting);
        assert_eq!(out.score, 0);
        assert!(out.trace.is_empty());
        assert!(!out.is_special);
        assert_eq!(out.status, OutcomeStatus::Active);
    }
}
