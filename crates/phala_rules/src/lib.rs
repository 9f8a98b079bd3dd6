//! Natal-versus-event rule cascade.
//!
//! A player chart is scored against an event chart on two tracks, batting
//! and bowling. Nine general rules run first, then the case for the event
//! moon's nakshatra. Each rule emits [`RuleEffect`]s that are folded per
//! track into a [`RuleOutcome`]; a forced SureFlop zeroes the score but
//! keeps the trace.

pub mod aggregate;
pub mod context;
pub mod effect;
pub mod engine;
pub mod general;
pub mod nakshatra_rules;
pub mod outcome;
pub mod verdict;

pub use aggregate::{GroupComparison, compare_groups, group_score};
pub use context::RuleContext;
pub use effect::{Labels, RuleEffect, fold_effects};
pub use engine::{
    ParseRoleError, PlayerRole, ROLE_MISMATCH_RULE, collect_effects, evaluate, evaluate_both,
    evaluate_for_role,
};
pub use general::{GENERAL_RULES, RuleFn};
pub use nakshatra_rules::{CHAIN_BONUS, nakshatra_rules};
pub use outcome::{
    ALL_TRACKS, AppliesTo, OutcomeStatus, RuleOutcome, RuleTraceEntry, Track, TrackOutcomes,
};
pub use verdict::{Confidence, Severity, Verdict, VerdictKind, map_verdict, verdict_for_outcome};
