//! Rules keyed by the event moon's nakshatra. Exactly one case runs.
//!
//! Every planet lookup here reads the player's natal chart. A case is a
//! short list of checks drawn from four shapes:
//!
//! - dignity: bonus when a graha is exalted, penalty or forced flop when
//!   it is debilitated;
//! - conjunction: two grahas sharing a sign force a batting flop while
//!   the bowling track gains a bonus and is marked special;
//! - lordship pair: the player's moon-sign and moon-nakshatra lords are an
//!   exact pair, giving a special bonus;
//! - chain: an anchor graha joined by partners, the bonus growing with the
//!   size of the group.

use phala_vedic_base::{Graha, Nakshatra};

use crate::context::RuleContext;
use crate::effect::{Labels, RuleEffect};
use crate::outcome::{AppliesTo, Track};

/// Bonus by conjunction group size (anchor included). Groups below 2 score nothing.
pub const CHAIN_BONUS: [i32; 5] = [0, 0, 2, 4, 6];

struct Case<'c, 'a> {
    ctx: &'c RuleContext<'a>,
    nakshatra: Nakshatra,
    effects: Vec<RuleEffect>,
}

impl<'c, 'a> Case<'c, 'a> {
    fn new(ctx: &'c RuleContext<'a>, nakshatra: Nakshatra) -> Self {
        Self {
            ctx,
            nakshatra,
            effects: Vec::new(),
        }
    }

    fn exalted(mut self, graha: Graha, applies_to: AppliesTo, bonus: i32) -> Self {
        if self.ctx.player.is_exalted(graha) {
            self.effects.push(RuleEffect::delta(
                "nakshatra_dignity",
                applies_to,
                bonus,
                Labels::new(
                    format!("{}: {graha} exalted", self.nakshatra),
                    format!("{}: {} uchcha", self.nakshatra, graha.name()),
                ),
            ));
        }
        self
    }

    fn debilitated(mut self, graha: Graha, applies_to: AppliesTo, delta: i32) -> Self {
        if self.ctx.player.is_debilitated(graha) {
            self.effects.push(RuleEffect::delta(
                "nakshatra_dignity",
                applies_to,
                delta,
                Labels::new(
                    format!("{}: {graha} debilitated", self.nakshatra),
                    format!("{}: {} neecha", self.nakshatra, graha.name()),
                ),
            ));
        }
        self
    }

    fn debilitated_flop(mut self, graha: Graha, track: Track) -> Self {
        if self.ctx.player.is_debilitated(graha) {
            self.effects.push(RuleEffect::sure_flop(
                "nakshatra_dignity",
                track,
                Labels::new(
                    format!("{}: {graha} debilitated, {track} certain flop", self.nakshatra),
                    format!("{}: {} neecha, nishchit asafal", self.nakshatra, graha.name()),
                ),
            ));
        }
        self
    }

    fn conjunction(mut self, a: Graha, b: Graha, bowling_bonus: i32) -> Self {
        if self.ctx.player.conjunct(a, b) {
            let short = format!("{}: {a} with {b}", self.nakshatra);
            let localized = format!("{}: {} - {} yuti", self.nakshatra, a.name(), b.name());
            self.effects.extend([
                RuleEffect::sure_flop(
                    "nakshatra_conjunction",
                    Track::Batting,
                    Labels::new(format!("{short}, batting certain flop"), localized.clone()),
                ),
                RuleEffect::delta(
                    "nakshatra_conjunction",
                    AppliesTo::Bowling,
                    bowling_bonus,
                    Labels::new(short, localized),
                ),
                RuleEffect::special(AppliesTo::Bowling),
            ]);
        }
        self
    }

    fn lordship(
        mut self,
        rashi_lord: Graha,
        nakshatra_lord: Graha,
        applies_to: AppliesTo,
        bonus: i32,
    ) -> Self {
        if self.ctx.player_lords() == Some((rashi_lord, nakshatra_lord)) {
            self.effects.extend([
                RuleEffect::delta(
                    "nakshatra_lordship",
                    applies_to,
                    bonus,
                    Labels::new(
                        format!("{}: lords {rashi_lord} / {nakshatra_lord}", self.nakshatra),
                        format!(
                            "{}: swami yugma {} / {}",
                            self.nakshatra,
                            rashi_lord.name(),
                            nakshatra_lord.name()
                        ),
                    ),
                ),
                RuleEffect::special(applies_to),
            ]);
        }
        self
    }

    fn chain(mut self, anchor: Graha, partners: [Graha; 3], applies_to: AppliesTo) -> Self {
        let joined: Vec<Graha> = partners
            .into_iter()
            .filter(|&p| self.ctx.player.conjunct(anchor, p))
            .collect();
        let bonus = CHAIN_BONUS[joined.len() + 1];
        if bonus > 0 {
            let names: Vec<&str> = joined.iter().map(|g| g.english_name()).collect();
            self.effects.push(RuleEffect::delta(
                "nakshatra_chain",
                applies_to,
                bonus,
                Labels::new(
                    format!("{}: {anchor} joined by {}", self.nakshatra, names.join(", ")),
                    format!("{}: {} yuti x{}", self.nakshatra, anchor.name(), joined.len() + 1),
                ),
            ));
        }
        self
    }
}

/// Effects of the case matching the event moon nakshatra. Unknown event
/// nakshatra yields nothing.
pub fn nakshatra_rules(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    use AppliesTo::{Batting as Bat, Both, Bowling as Bowl};
    use Graha::*;

    let Some(nakshatra) = ctx.event_nakshatra else {
        return Vec::new();
    };
    let case = Case::new(ctx, nakshatra);
    let case = match nakshatra {
        Nakshatra::Ashwini => case
            .exalted(Mangal, Both, 3)
            .debilitated_flop(Mangal, Track::Batting)
            .lordship(Mangal, Ketu, Bat, 6),
        Nakshatra::Bharani => case
            .exalted(Shukra, Bat, 3)
            .debilitated(Shukra, Both, -3)
            .conjunction(Surya, Shani, 6),
        Nakshatra::Krittika => case
            .exalted(Surya, Both, 3)
            .debilitated_flop(Surya, Track::Bowling)
            .chain(Surya, [Buddh, Shukra, Mangal], Bat),
        Nakshatra::Rohini => case
            .exalted(Chandra, Bat, 4)
            .debilitated(Chandra, Both, -2)
            .lordship(Shukra, Chandra, Both, 6),
        Nakshatra::Mrigashira => case
            .conjunction(Mangal, Shani, 6)
            .exalted(Buddh, Both, 2)
            .debilitated(Buddh, Both, -2),
        Nakshatra::Ardra => case
            .conjunction(Rahu, Chandra, 5)
            .lordship(Buddh, Rahu, Bat, 6),
        Nakshatra::Punarvasu => case
            .exalted(Guru, Both, 4)
            .debilitated_flop(Guru, Track::Batting)
            .chain(Guru, [Chandra, Buddh, Shukra], Both),
        Nakshatra::Pushya => case
            .exalted(Shani, Bowl, 3)
            .debilitated(Shani, Bowl, -3)
            .lordship(Chandra, Shani, Both, 7),
        Nakshatra::Ashlesha => case
            .conjunction(Buddh, Mangal, 6)
            .debilitated(Chandra, Bat, -2),
        Nakshatra::Magha => case
            .exalted(Surya, Bat, 3)
            .debilitated_flop(Surya, Track::Batting)
            .lordship(Surya, Ketu, Both, 6),
        Nakshatra::PurvaPhalguni => case
            .chain(Shukra, [Surya, Buddh, Chandra], Both)
            .exalted(Shukra, Both, 3),
        Nakshatra::UttaraPhalguni => case
            .lordship(Surya, Surya, Bat, 7)
            .debilitated_flop(Surya, Track::Bowling),
        Nakshatra::Hasta => case
            .exalted(Chandra, Both, 3)
            .conjunction(Chandra, Shani, 5),
        Nakshatra::Chitra => case
            .exalted(Mangal, Both, 4)
            .debilitated_flop(Mangal, Track::Batting)
            .lordship(Shukra, Mangal, Both, 6),
        Nakshatra::Swati => case
            .conjunction(Shukra, Rahu, 6)
            .exalted(Shani, Bowl, 3),
        Nakshatra::Vishakha => case
            .chain(Guru, [Surya, Mangal, Chandra], Both)
            .debilitated(Guru, Both, -3),
        Nakshatra::Anuradha => case
            .lordship(Mangal, Shani, Bowl, 6)
            .exalted(Shani, Both, 3)
            .debilitated_flop(Shani, Track::Batting),
        Nakshatra::Jyeshtha => case
            .conjunction(Buddh, Shani, 6)
            .exalted(Mangal, Bat, 3),
        Nakshatra::Mula => case
            .exalted(Guru, Both, 3)
            .debilitated_flop(Guru, Track::Batting)
            .lordship(Guru, Ketu, Both, 6),
        Nakshatra::PurvaAshadha => case
            .chain(Shukra, [Guru, Buddh, Surya], Both)
            .debilitated(Shukra, Bat, -3),
        Nakshatra::UttaraAshadha => case
            .lordship(Shani, Surya, Both, 6)
            .exalted(Surya, Bat, 3),
        Nakshatra::Shravana => case
            .exalted(Chandra, Bat, 3)
            .debilitated_flop(Chandra, Track::Batting)
            .conjunction(Chandra, Ketu, 5),
        Nakshatra::Dhanishtha => case
            .chain(Mangal, [Shani, Surya, Guru], Both)
            .debilitated(Mangal, Both, -3),
        Nakshatra::Shatabhisha => case
            .lordship(Shani, Rahu, Bowl, 7)
            .conjunction(Shani, Mangal, 6),
        Nakshatra::PurvaBhadrapada => case
            .exalted(Guru, Both, 4)
            .lordship(Shani, Guru, Bat, 6),
        Nakshatra::UttaraBhadrapada => case
            .debilitated_flop(Shani, Track::Batting)
            .exalted(Shani, Both, 3)
            .lordship(Guru, Shani, Both, 7),
        Nakshatra::Revati => case
            .chain(Buddh, [Shukra, Guru, Chandra], Both)
            .exalted(Shukra, Bat, 4)
            .debilitated_flop(Buddh, Track::Bowling),
    };
    case.effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::fold_effects;
    use phala_chart::{Chart, normalize_chart};
    use phala_vedic_base::ALL_NAKSHATRAS;
    use serde_json::json;

    fn chart(value: serde_json::Value) -> Chart {
        normalize_chart(&value)
    }

    #[test]
    fn unknown_event_nakshatra_yields_nothing() {
        let player = chart(json!({ "planets": { "Moon": 182.0, "Mars": 295.0 } }));
        let event = Chart::default();
        assert!(nakshatra_rules(&RuleContext::new(&player, &event)).is_empty());
    }

    #[test]
    fn empty_player_chart_fires_no_case() {
        let player = Chart::default();
        for n in ALL_NAKSHATRAS {
            let event = Chart {
                moon_nakshatra: Some(n),
                ..Chart::default()
            };
            let ctx = RuleContext::new(&player, &event);
            assert!(nakshatra_rules(&ctx).is_empty(), "{n}");
        }
    }

    #[test]
    fn chitra_lordship_pair_is_special() {
        let player = chart(json!({ "planets": { "Moon": 182.0 } }));
        let event = chart(json!({ "planets": { "Moon": 182.0 } }));
        let effects = nakshatra_rules(&RuleContext::new(&player, &event));
        for track in [Track::Batting, Track::Bowling] {
            let out = fold_effects(&effects, track);
            assert_eq!(out.score, 6);
            assert!(out.is_special);
        }
    }

    #[test]
    fn swati_conjunction_splits_tracks() {
        // 190 deg: Tula / Swati
        let player = chart(json!({ "planets": { "Venus": 100.0, "Rahu": 105.0 } }));
        let event = chart(json!({ "planets": { "Moon": 190.0 } }));
        let effects = nakshatra_rules(&RuleContext::new(&player, &event));
        let bat = fold_effects(&effects, Track::Batting);
        let bowl = fold_effects(&effects, Track::Bowling);
        assert!(bat.is_sure_flop());
        assert_eq!(bat.score, 0);
        assert!(!bat.is_special);
        assert!(!bowl.is_sure_flop());
        assert_eq!(bowl.score, 6);
        assert!(bowl.is_special);
    }

    #[test]
    fn krittika_chain_grows_with_group() {
        // 30 deg: Mesha / Krittika
        let event = chart(json!({ "planets": { "Moon": 30.0 } }));
        let three = chart(json!({
            "planets": { "Sun": 125.0, "Mercury": 130.0, "Venus": 140.0 }
        }));
        let four = chart(json!({
            "planets": { "Sun": 125.0, "Mercury": 130.0, "Venus": 140.0, "Mars": 145.0 }
        }));
        let lone = chart(json!({ "planets": { "Sun": 125.0, "Mercury": 160.0 } }));

        let score = |player: &Chart, track| {
            fold_effects(&nakshatra_rules(&RuleContext::new(player, &event)), track).score
        };
        assert_eq!(score(&lone, Track::Batting), 0);
        assert_eq!(score(&three, Track::Batting), 4);
        assert_eq!(score(&four, Track::Batting), 6);
        assert_eq!(score(&four, Track::Bowling), 0);
    }

    #[test]
    fn ashwini_debilitated_mars_flops_batting() {
        // 5 deg: Mesha / Ashwini. Mars in Karka is debilitated.
        let player = chart(json!({ "planets": { "Mars": 100.0 } }));
        let event = chart(json!({ "planets": { "Moon": 5.0 } }));
        let effects = nakshatra_rules(&RuleContext::new(&player, &event));
        assert!(fold_effects(&effects, Track::Batting).is_sure_flop());
        assert!(!fold_effects(&effects, Track::Bowling).is_sure_flop());
    }

    #[test]
    fn revati_dignity_checks() {
        // 355 deg: Meena / Revati. Venus exalted, Mercury debilitated in Meena.
        let player = chart(json!({ "planets": { "Venus": 340.0, "Mercury": 350.0 } }));
        let event = chart(json!({ "planets": { "Moon": 355.0 } }));
        let effects = nakshatra_rules(&RuleContext::new(&player, &event));
        let bat = fold_effects(&effects, Track::Batting);
        let bowl = fold_effects(&effects, Track::Bowling);
        // Venus joins Mercury in Meena: chain of 2 (+2 both), Venus exalted (+4 batting)
        assert_eq!(bat.score, 6);
        assert!(bowl.is_sure_flop());
    }

    #[test]
    fn chain_bonus_strictly_increasing() {
        assert!(CHAIN_BONUS[2] < CHAIN_BONUS[3] && CHAIN_BONUS[3] < CHAIN_BONUS[4]);
    }
}
