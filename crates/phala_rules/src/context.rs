//! Per-evaluation context: the lords every rule compares, derived once.

use tracing::debug;

use phala_chart::Chart;
use phala_vedic_base::{Graha, Nakshatra, Rashi};

/// Player and event charts with their moon-sign and moon-nakshatra lords.
///
/// `None` is Unknown; any rule needing an Unknown value does not match.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub player: &'a Chart,
    pub event: &'a Chart,
    pub player_rashi: Option<Rashi>,
    pub player_nakshatra: Option<Nakshatra>,
    pub player_rashi_lord: Option<Graha>,
    pub player_nakshatra_lord: Option<Graha>,
    pub event_rashi: Option<Rashi>,
    pub event_nakshatra: Option<Nakshatra>,
    pub event_rashi_lord: Option<Graha>,
    /// Never Rahu/Ketu: a node lord is replaced by the event rashi lord.
    pub event_nakshatra_lord: Option<Graha>,
}

impl<'a> RuleContext<'a> {
    pub fn new(player: &'a Chart, event: &'a Chart) -> Self {
        let event_rashi_lord = event.moon_rashi_lord();
        let event_nakshatra_lord = match event.moon_nakshatra_lord() {
            Some(lord) if lord.is_node() => {
                debug!(node = lord.name(), ?event_rashi_lord, "substituting event nakshatra lord");
                event_rashi_lord
            }
            other => other,
        };
        Self {
            player,
            event,
            player_rashi: player.moon_rashi,
            player_nakshatra: player.moon_nakshatra,
            player_rashi_lord: player.moon_rashi_lord(),
            player_nakshatra_lord: player.moon_nakshatra_lord(),
            event_rashi: event.moon_rashi,
            event_nakshatra: event.moon_nakshatra,
            event_rashi_lord,
            event_nakshatra_lord,
        }
    }

    /// (player rashi lord, player nakshatra lord) when both are known.
    pub fn player_lords(&self) -> Option<(Graha, Graha)> {
        Some((self.player_rashi_lord?, self.player_nakshatra_lord?))
    }

    /// (event rashi lord, event nakshatra lord) when both are known.
    pub fn event_lords(&self) -> Option<(Graha, Graha)> {
        Some((self.event_rashi_lord?, self.event_nakshatra_lord?))
    }

    /// E.rashiLord = P.nakLord and E.nakLord = P.rashiLord.
    pub fn reciprocal_exchange(&self) -> bool {
        match (self.player_lords(), self.event_lords()) {
            (Some((pr, pn)), Some((er, en))) => er == pn && en == pr,
            _ => false,
        }
    }

    /// E.rashiLord = P.rashiLord and E.nakLord = P.nakLord.
    pub fn direct_match(&self) -> bool {
        match (self.player_lords(), self.event_lords()) {
            (Some((pr, pn)), Some((er, en))) => er == pr && en == pn,
            _ => false,
        }
    }
}
