//! The nine general rules, applied in order to every evaluation.
//!
//! Planet placements for "player" checks come from the player's natal
//! chart; placements for "event" checks come from the event chart.

use phala_vedic_base::{Graha, Rashi};

use crate::context::RuleContext;
use crate::effect::{Labels, RuleEffect};
use crate::outcome::{AppliesTo, Track};

/// A rule: pure function from context to effects (empty when it does not fire).
pub type RuleFn = fn(&RuleContext<'_>) -> Vec<RuleEffect>;

/// General rules in evaluation order.
pub const GENERAL_RULES: [(&str, RuleFn); 9] = [
    ("reciprocal_exchange", reciprocal_exchange),
    ("direct_match", direct_match),
    ("single_lord_match", single_lord_match),
    ("transit_conjunction", transit_conjunction),
    ("shared_house", shared_house),
    ("home_sign_alignment", home_sign_alignment),
    ("shadow_body_fallback", shadow_body_fallback),
    ("ascendant_alignment", ascendant_alignment),
    ("double_lord_conjunction", double_lord_conjunction),
];

/// Rule 1: event lords are the player's lords with roles swapped.
pub fn reciprocal_exchange(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    const ID: &str = "reciprocal_exchange";
    let Some((pr, pn)) = ctx.player_lords() else {
        return Vec::new();
    };
    if !ctx.reciprocal_exchange() {
        return Vec::new();
    }
    let mut effects = vec![RuleEffect::delta(
        ID,
        AppliesTo::Both,
        5,
        Labels::new(
            format!("Reciprocal exchange: {pr} / {pn}"),
            format!("Parivartana: {} / {}", pr.name(), pn.name()),
        ),
    )];
    if ctx.player.is_strong(pr) {
        effects.push(RuleEffect::delta(
            ID,
            AppliesTo::Both,
            2,
            Labels::new(
                format!("Reciprocal exchange: {pr} strong"),
                format!("Parivartana: {} bali", pr.name()),
            ),
        ));
    }
    effects
}

/// Rule 2: event lords equal the player's lords. Bowling is a certain flop.
pub fn direct_match(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    const ID: &str = "direct_match";
    let Some((pr, pn)) = ctx.player_lords() else {
        return Vec::new();
    };
    if !ctx.direct_match() {
        return Vec::new();
    }
    let mut effects = vec![RuleEffect::delta(
        ID,
        AppliesTo::Batting,
        3,
        Labels::new(
            format!("Direct lord match: {pr} / {pn}"),
            format!("Swami samya: {} / {}", pr.name(), pn.name()),
        ),
    )];
    if ctx.player.is_strong(pr) {
        effects.push(RuleEffect::delta(
            ID,
            AppliesTo::Batting,
            2,
            Labels::new(
                format!("Direct lord match: {pr} strong"),
                format!("Swami samya: {} bali", pr.name()),
            ),
        ));
    }
    effects.push(RuleEffect::sure_flop(
        ID,
        Track::Bowling,
        Labels::new(
            "Direct lord match: bowling certain flop",
            "Swami samya: gendbazi nishchit asafal",
        ),
    ));
    effects
}

/// Rule 3: the event nakshatra lord is one of the player's lords.
/// Skipped when rule 1 or 2 already matched.
pub fn single_lord_match(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    const ID: &str = "single_lord_match";
    if ctx.reciprocal_exchange() || ctx.direct_match() {
        return Vec::new();
    }
    let (Some((pr, pn)), Some(en)) = (ctx.player_lords(), ctx.event_nakshatra_lord) else {
        return Vec::new();
    };
    if en != pr && en != pn {
        return Vec::new();
    }
    let mut effects = vec![RuleEffect::delta(
        ID,
        AppliesTo::Both,
        1,
        Labels::new(
            format!("Single lord match: {en}"),
            format!("Eka swami: {}", en.name()),
        ),
    )];
    if ctx.player.is_strong(en) {
        effects.push(RuleEffect::delta(
            ID,
            AppliesTo::Bowling,
            2,
            Labels::new(
                format!("Single lord match: {en} strong"),
                format!("Eka swami: {} bali", en.name()),
            ),
        ));
    }
    effects
}

/// First player lord (rashi lord preferred) conjunct `transit` in the natal
/// chart, ignoring self-pairs.
fn conjunct_player_lord(ctx: &RuleContext<'_>, transit: Graha) -> Option<Graha> {
    let (pr, pn) = ctx.player_lords()?;
    [pr, pn]
        .into_iter()
        .find(|&lord| lord != transit && ctx.player.conjunct(transit, lord))
}

/// Rule 4: an event lord shares a sign with a player lord in the natal chart.
pub fn transit_conjunction(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    const ID: &str = "transit_conjunction";
    let Some((er, en)) = ctx.event_lords() else {
        return Vec::new();
    };
    let mut effects = Vec::new();
    for (transit, bonus, role) in [(er, 2, "rashi"), (en, 3, "nakshatra")] {
        let Some(lord) = conjunct_player_lord(ctx, transit) else {
            continue;
        };
        effects.push(RuleEffect::delta(
            ID,
            AppliesTo::Both,
            bonus,
            Labels::new(
                format!("Event {role} lord {transit} conjunct {lord}"),
                format!("Gochar yuti: {} - {}", transit.name(), lord.name()),
            ),
        ));
        if ctx.player.is_strong(lord) {
            effects.push(RuleEffect::delta(
                ID,
                AppliesTo::Both,
                1,
                Labels::new(
                    format!("Event {role} lord conjunction: {lord} strong"),
                    format!("Gochar yuti: {} bali", lord.name()),
                ),
            ));
        }
    }
    effects
}

fn both_in_signs_of(ctx: &RuleContext<'_>, owner: Graha) -> bool {
    let Some((pr, pn)) = ctx.player_lords() else {
        return false;
    };
    [pr, pn]
        .into_iter()
        .all(|g| ctx.player.rashi_of(g).is_some_and(|r| owner.owns(r)))
}

/// Rule 5: both player lords sit in signs owned by one event lord.
pub fn shared_house(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    const ID: &str = "shared_house";
    let Some((er, en)) = ctx.event_lords() else {
        return Vec::new();
    };
    if both_in_signs_of(ctx, en) {
        return vec![RuleEffect::delta(
            ID,
            AppliesTo::Both,
            3,
            Labels::new(
                format!("Player lords in houses of {en}"),
                format!("Samana bhava: {}", en.name()),
            ),
        )];
    }
    if both_in_signs_of(ctx, er) {
        return vec![
            RuleEffect::sure_flop(
                ID,
                Track::Batting,
                Labels::new(
                    format!("Player lords in houses of {er}: batting certain flop"),
                    format!("Samana bhava: {} - ballebazi nishchit asafal", er.name()),
                ),
            ),
            RuleEffect::delta(
                ID,
                AppliesTo::Bowling,
                4,
                Labels::new(
                    format!("Player lords in houses of {er}"),
                    format!("Samana bhava: {}", er.name()),
                ),
            ),
        ];
    }
    Vec::new()
}

/// Rule 6: in the event chart both event lords occupy the player's moon sign.
pub fn home_sign_alignment(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    const ID: &str = "home_sign_alignment";
    let (Some((er, en)), Some(home)) = (ctx.event_lords(), ctx.player_rashi) else {
        return Vec::new();
    };
    if ctx.event.rashi_of(er) != Some(home) || ctx.event.rashi_of(en) != Some(home) {
        return Vec::new();
    }
    let mut effects = vec![
        RuleEffect::delta(
            ID,
            AppliesTo::Batting,
            3,
            Labels::new(
                format!("Event lords in home sign {}", home.western_name()),
                format!("Swagriha: {}", home.name()),
            ),
        ),
        RuleEffect::delta(
            ID,
            AppliesTo::Bowling,
            2,
            Labels::new(
                format!("Event lords in home sign {}", home.western_name()),
                format!("Swagriha: {}", home.name()),
            ),
        ),
    ];
    if ctx.event.is_strong(er) {
        effects.push(RuleEffect::delta(
            ID,
            AppliesTo::Batting,
            2,
            Labels::new(
                format!("Home sign: {er} strong"),
                format!("Swagriha: {} bali", er.name()),
            ),
        ));
    }
    effects
}

/// Rule 7: player nakshatra ruled by a node and the player's sign owned by
/// the event nakshatra lord.
pub fn shadow_body_fallback(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    const ID: &str = "shadow_body_fallback";
    let (Some(pn), Some(home), Some(en)) = (
        ctx.player_nakshatra_lord,
        ctx.player_rashi,
        ctx.event_nakshatra_lord,
    ) else {
        return Vec::new();
    };
    if !pn.is_node() || !en.owns(home) {
        return Vec::new();
    }
    vec![RuleEffect::delta(
        ID,
        AppliesTo::Both,
        1,
        Labels::new(
            format!("Shadow lord {pn}: {en} owns {}", home.western_name()),
            format!("Chhaya graha: {} / {}", pn.name(), en.name()),
        ),
    )]
}

fn phase_alignment(
    ctx: &RuleContext<'_>,
    track: Track,
    ascendant: Rashi,
    player_lord: Graha,
) -> Vec<RuleEffect> {
    const ID: &str = "ascendant_alignment";
    let lord = ascendant.lord();
    if lord != player_lord {
        return Vec::new();
    }
    let applies = AppliesTo::from(track);
    let mut effects = vec![RuleEffect::delta(
        ID,
        applies,
        2,
        Labels::new(
            format!("{track} ascendant {} ruled by {lord}", ascendant.western_name()),
            format!("Lagna swami: {} ({})", lord.name(), ascendant.name()),
        ),
    )];
    if ctx.player.is_strong(lord) {
        effects.push(RuleEffect::delta(
            ID,
            applies,
            1,
            Labels::new(
                format!("{track} ascendant lord {lord} strong"),
                format!("Lagna swami bali: {}", lord.name()),
            ),
        ));
    }
    if ctx.player.is_debilitated(lord) {
        effects.push(RuleEffect::delta(
            ID,
            applies,
            -1,
            Labels::new(
                format!("{track} ascendant lord {lord} debilitated"),
                format!("Lagna swami neecha: {}", lord.name()),
            ),
        ));
    }
    if track == Track::Bowling {
        if let Some(occupant) = ctx
            .event
            .grahas_in(ascendant)
            .find(|&g| ctx.event.is_strong(g))
        {
            effects.push(RuleEffect::delta(
                ID,
                applies,
                1,
                Labels::new(
                    format!("Strong {occupant} in bowling ascendant"),
                    format!("Lagna sthita bali: {}", occupant.name()),
                ),
            ));
        }
    }
    effects
}

/// Rule 8: each phase ascendant of the event (falling back to the nominal
/// ascendant) ruled by the player's rashi lord. The lord's dignity is read
/// from the natal chart.
pub fn ascendant_alignment(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    let Some(pr) = ctx.player_rashi_lord else {
        return Vec::new();
    };
    let mut effects = Vec::new();
    if let Some(asc) = ctx.event.batting_ascendant() {
        effects.extend(phase_alignment(ctx, Track::Batting, asc, pr));
    }
    if let Some(asc) = ctx.event.bowling_ascendant() {
        effects.extend(phase_alignment(ctx, Track::Bowling, asc, pr));
    }
    effects
}

/// Rule 9: the two distinct event lords share a sign in the natal chart.
pub fn double_lord_conjunction(ctx: &RuleContext<'_>) -> Vec<RuleEffect> {
    const ID: &str = "double_lord_conjunction";
    let Some((er, en)) = ctx.event_lords() else {
        return Vec::new();
    };
    if er == en || !ctx.player.conjunct(er, en) {
        return Vec::new();
    }
    let sign = ctx
        .player
        .rashi_of(er)
        .map(|r| r.western_name())
        .unwrap_or("?");
    vec![
        RuleEffect::delta(
            ID,
            AppliesTo::Both,
            12,
            Labels::new(
                format!("Event lords {er} and {en} together in {sign}"),
                format!("Dvi-swami yuti: {} - {}", er.name(), en.name()),
            ),
        ),
        RuleEffect::special(AppliesTo::Both),
    ]
}
