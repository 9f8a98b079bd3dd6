//! End-to-end scenarios through `evaluate` and the verdict mapper.

use phala_chart::{Chart, compute_chart, normalize_chart, role_tag};
use phala_ephemeris::{GeoLocation, Moment};
use phala_rules::{
    AppliesTo, PlayerRole, ROLE_MISMATCH_RULE, Track, VerdictKind, evaluate, evaluate_both,
    evaluate_for_role, verdict_for_outcome,
};
use proptest::prelude::*;
use serde_json::json;

fn chart(value: serde_json::Value) -> Chart {
    normalize_chart(&value)
}

#[test]
fn double_lord_conjunction_scenario() {
    // Event Tula / Chitra: lords Venus and Mars.
    // Player Kumbha / Dhanishtha: lords Saturn and Mars, with Venus and Mars in Kumbha.
    let player = chart(json!({ "planets": { "Moon": 300.0, "Venus": 310.0, "Mars": 315.0 } }));
    let event = chart(json!({ "planets": { "Moon": 182.0 } }));
    let both = evaluate_both(&player, &event);
    for track in [Track::Batting, Track::Bowling] {
        let out = both.get(track);
        assert!(out.is_special, "{track}");
        assert!(!out.is_sure_flop(), "{track}");
        assert!(out.score >= 12, "{track}: {}", out.score);
        assert!(out.trace.iter().any(|e| e.rule_id == "double_lord_conjunction"));
    }
    // +1 single lord, +2 transit conjunction, +12 double lord
    assert_eq!(both.batting.score, 15);
}

#[test]
fn identical_charts_flop_bowling_keep_trace() {
    let c = chart(json!({ "planets": { "Moon": 182.0, "Venus": 70.0, "Mars": 75.0 } }));
    let both = evaluate_both(&c, &c);

    assert!(both.bowling.is_sure_flop());
    assert_eq!(both.bowling.score, 0);
    assert!(both.bowling.trace.iter().any(|e| e.delta > 0));
    assert!(both.bowling.trace.iter().any(|e| e.rule_id == "direct_match"));

    assert!(!both.batting.is_sure_flop());
    // +3 direct, +2 +3 transit conjunction, +12 double lord, +6 Chitra lordship
    assert_eq!(both.batting.score, 26);
    assert!(both.batting.is_special);

    let verdict = verdict_for_outcome(&both.bowling, Track::Bowling);
    assert_eq!(verdict.kind, VerdictKind::SureFlop);
}

#[test]
fn trace_order_follows_rule_order() {
    let c = chart(json!({ "planets": { "Moon": 182.0, "Venus": 70.0, "Mars": 75.0 } }));
    let out = evaluate(&c, &c, Track::Batting);
    let ids: Vec<&str> = out.trace.iter().map(|e| e.rule_id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "direct_match",
            "transit_conjunction",
            "transit_conjunction",
            "double_lord_conjunction",
            "nakshatra_lordship",
        ]
    );
}

#[test]
fn batsman_on_bowling_track_short_circuits() {
    let c = chart(json!({ "planets": { "Moon": 182.0, "Venus": 70.0, "Mars": 75.0 } }));
    let out = evaluate_for_role(PlayerRole::Batsman, &c, &c, Track::Bowling);
    assert_eq!(out.score, 0);
    assert!(!out.is_sure_flop());
    assert_eq!(out.trace.len(), 1);
    assert_eq!(out.trace[0].rule_id, ROLE_MISMATCH_RULE);
    assert_eq!(out.trace[0].applies_to, AppliesTo::Bowling);

    let bowler = evaluate_for_role(PlayerRole::Bowler, &c, &c, Track::Bowling);
    assert_eq!(bowler, evaluate(&c, &c, Track::Bowling));
}

#[test]
fn role_tagged_chart_short_circuits() {
    let tagged = json!({
        "role": "BAT",
        "planets": { "Moon": 182.0, "Venus": 70.0, "Mars": 75.0 }
    });
    let role: PlayerRole = role_tag(&tagged).unwrap().parse().unwrap();
    let player = chart(tagged);
    let out = evaluate_for_role(role, &player, &player, Track::Bowling);
    assert_eq!(out.score, 0);
    assert_eq!(out.trace.len(), 1);
    assert_eq!(out.trace[0].rule_id, ROLE_MISMATCH_RULE);
}

#[test]
fn natal_ascendant_lord_dignity() {
    // Player Makara -> Saturn; the event chart only names its lagna.
    let event = chart(json!({ "ascendant_rashi": "Makara" }));

    let exalted = chart(json!({ "planets": { "Moon": 285.0, "Saturn": 200.0 } }));
    let both = evaluate_both(&exalted, &event);
    assert_eq!(both.batting.score, 3);
    assert_eq!(both.bowling.score, 3);
    assert!(both.batting.trace.iter().all(|e| e.rule_id == "ascendant_alignment"));

    let debilitated = chart(json!({ "planets": { "Moon": 285.0, "Saturn": 15.0 } }));
    let both = evaluate_both(&debilitated, &event);
    assert_eq!(both.batting.score, 1);
    assert_eq!(both.bowling.score, 1);
}

#[test]
fn unknown_charts_are_neutral() {
    let out = evaluate_both(&Chart::default(), &Chart::default());
    assert_eq!(out.batting.score, 0);
    assert!(out.batting.trace.is_empty());
    assert_eq!(
        verdict_for_outcome(&out.bowling, Track::Bowling).kind,
        VerdictKind::Neutral
    );
}

#[test]
fn computed_charts_evaluate() {
    let loc = GeoLocation::new(19.076, 72.8777);
    let birth = Moment::new(1987, 4, 24, 13, 0, 5.5, loc).unwrap();
    let event = Moment::new(2024, 5, 12, 19, 30, 5.5, loc).unwrap();
    let player = compute_chart(&birth).unwrap();
    let event = compute_chart(&event).unwrap();
    let both = evaluate_both(&player, &event);
    for track in [Track::Batting, Track::Bowling] {
        let out = both.get(track);
        if out.is_sure_flop() {
            assert_eq!(out.score, 0);
        } else {
            assert_eq!(out.score, out.trace.iter().map(|e| e.delta).sum::<i32>());
        }
    }
    let json = serde_json::to_string(&both).unwrap();
    let back: phala_rules::TrackOutcomes = serde_json::from_str(&json).unwrap();
    assert_eq!(back, both);
}

fn arb_chart() -> impl Strategy<Value = Chart> {
    (
        0.0f64..360.0,
        prop::collection::vec(0.0f64..360.0, 8),
        proptest::option::of(0.0f64..360.0),
    )
        .prop_map(|(moon, others, asc)| {
            chart(json!({
                "planets": {
                    "Moon": moon,
                    "Sun": others[0],
                    "Mars": others[1],
                    "Mercury": others[2],
                    "Jupiter": others[3],
                    "Venus": others[4],
                    "Saturn": others[5],
                    "Rahu": others[6],
                },
                "ascendant": asc,
                "bowling_ascendant": others[7],
            }))
        })
}

proptest! {
    #[test]
    fn evaluation_is_idempotent(player in arb_chart(), event in arb_chart()) {
        for track in [Track::Batting, Track::Bowling] {
            let first = evaluate(&player, &event, track);
            let second = evaluate(&player, &event, track);
            prop_assert_eq!(&first, &second);
            let both = evaluate_both(&player, &event);
            prop_assert_eq!(&first, both.get(track));
        }
    }

    #[test]
    fn forced_tracks_score_zero(player in arb_chart(), event in arb_chart()) {
        let both = evaluate_both(&player, &event);
        for track in [Track::Batting, Track::Bowling] {
            let out = both.get(track);
            if out.is_sure_flop() {
                prop_assert_eq!(out.score, 0);
            } else {
                prop_assert_eq!(out.score, out.trace.iter().map(|e| e.delta).sum::<i32>());
            }
        }
    }
}
