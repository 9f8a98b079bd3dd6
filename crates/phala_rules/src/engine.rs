//! Evaluation entry points: general rules then the nakshatra case, folded
//! per track.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use phala_chart::Chart;

use crate::context::RuleContext;
use crate::effect::{RuleEffect, fold_effects};
use crate::general::GENERAL_RULES;
use crate::nakshatra_rules::nakshatra_rules;
use crate::outcome::{AppliesTo, OutcomeStatus, RuleOutcome, RuleTraceEntry, Track, TrackOutcomes};

/// Rule id of the short-circuit entry for a role that does not play a track.
pub const ROLE_MISMATCH_RULE: &str = "role_mismatch";

/// Every effect of one evaluation, in firing order.
pub fn collect_effects(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    let mut effects = Vec::new();
    for (id, rule) in GENERAL_RULES {
        let fired = rule(ctx);
        if !fired.is_empty() {
            debug!(rule = id, effects = fired.len(), "rule fired");
        }
        effects.extend(fired);
    }
    let fired = nakshatra_rules(ctx);
    if !fired.is_empty() {
        debug!(
            nakshatra = ?ctx.event_nakshatra,
            effects = fired.len(),
            "nakshatra rule fired"
        );
    }
    effects.extend(fired);
    effects
}

/// Score `player` against `event` on one track.
pub fn evaluate(player: &Chart, event: &Chart, track: Track) -> RuleOutcome {
    let ctx = RuleContext::new(player, event);
    fold_effects(&collect_effects(&ctx), track)
}

/// Both tracks from one context and one rule pass.
pub fn evaluate_both(player: &Chart, event: &Chart) -> TrackOutcomes {
    let ctx = RuleContext::new(player, event);
    let effects = collect_effects(&ctx);
    TrackOutcomes {
        batting: fold_effects(&effects, Track::Batting),
        bowling: fold_effects(&effects, Track::Bowling),
    }
}

/// Playing role of a player; decides which tracks are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl PlayerRole {
    pub const fn plays(self, track: Track) -> bool {
        match self {
            Self::AllRounder => true,
            Self::Batsman | Self::WicketKeeper => matches!(track, Track::Batting),
            Self::Bowler => matches!(track, Track::Bowling),
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Batsman => "BAT",
            Self::Bowler => "BOWL",
            Self::AllRounder => "AR",
            Self::WicketKeeper => "WK",
        }
    }
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown player role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for PlayerRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match phala_vedic_base::fold_name(s).as_str() {
            "bat" | "batsman" | "batter" => Ok(Self::Batsman),
            "bowl" | "bowler" => Ok(Self::Bowler),
            "ar" | "all" | "allrounder" => Ok(Self::AllRounder),
            "wk" | "wicketkeeper" | "keeper" => Ok(Self::WicketKeeper),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// `evaluate`, short-circuited to a zero outcome with a single
/// `role_mismatch` entry when the role does not play `track`.
pub fn evaluate_for_role(
    role: PlayerRole,
    player: &Chart,
    event: &Chart,
    track: Track,
) -> RuleOutcome {
    if role.plays(track) {
        return evaluate(player, event, track);
    }
    debug!(%role, %track, "role does not play track");
    RuleOutcome {
        score: 0,
        trace: vec![RuleTraceEntry {
            rule_id: ROLE_MISMATCH_RULE.to_string(),
            short_label: format!("{role} does not play the {track} track"),
            localized_label: format!("{role}: bhumika asangat"),
            delta: 0,
            applies_to: AppliesTo::from(track),
        }],
        is_special: false,
        status: OutcomeStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phala_chart::normalize_chart;
    use serde_json::json;

    #[test]
    fn role_codes_parse() {
        assert_eq!("BAT".parse::<PlayerRole>(), Ok(PlayerRole::Batsman));
        assert_eq!("bowl".parse::<PlayerRole>(), Ok(PlayerRole::Bowler));
        assert_eq!("AR".parse::<PlayerRole>(), Ok(PlayerRole::AllRounder));
        assert_eq!("ALL".parse::<PlayerRole>(), Ok(PlayerRole::AllRounder));
        assert_eq!("wk".parse::<PlayerRole>(), Ok(PlayerRole::WicketKeeper));
        assert!("umpire".parse::<PlayerRole>().is_err());
    }

    #[test]
    fn keeper_bats_only() {
        assert!(PlayerRole::WicketKeeper.plays(Track::Batting));
        assert!(!PlayerRole::WicketKeeper.plays(Track::Bowling));
        assert!(PlayerRole::AllRounder.plays(Track::Bowling));
    }

    #[test]
    fn both_tracks_match_single_track_calls() {
        let player = normalize_chart(&json!({
            "planets": { "Moon": 300.0, "Venus": 310.0, "Mars": 315.0, "Saturn": 200.0 },
            "ascendant": 280.0
        }));
        let event = normalize_chart(&json!({ "planets": { "Moon": 182.0, "Saturn": 15.0 } }));
        let both = evaluate_both(&player, &event);
        assert_eq!(both.batting, evaluate(&player, &event, Track::Batting));
        assert_eq!(both.bowling, evaluate(&player, &event, Track::Bowling));
    }
}
