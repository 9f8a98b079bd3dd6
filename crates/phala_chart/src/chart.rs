//! Canonical chart: the single shape every rule reads.
//!
//! `None` marks an Unknown value. Lords are derived on demand from the
//! stored signs, never stored themselves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use phala_ephemeris::{EphemerisOutput, Moment, compute_positions};
use phala_vedic_base::{
    ALL_GRAHAS, Dignity, Graha, Nakshatra, PanchangInfo, Rashi, dignity,
    nakshatra_from_longitude, panchang, rashi_from_longitude,
};

use crate::error::ChartError;

/// A natal or event chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub ascendant_longitude: Option<f64>,
    pub planet_longitudes: BTreeMap<Graha, f64>,
    pub moon_rashi: Option<Rashi>,
    pub moon_nakshatra: Option<Nakshatra>,
    pub moon_pada: Option<u8>,
    pub ascendant_rashi: Option<Rashi>,
    pub batting_ascendant_rashi: Option<Rashi>,
    pub bowling_ascendant_rashi: Option<Rashi>,
}

impl Chart {
    /// Chart built from one ephemeris sample.
    pub fn from_positions(positions: &EphemerisOutput) -> Self {
        let planet_longitudes: BTreeMap<Graha, f64> = ALL_GRAHAS
            .iter()
            .map(|&g| (g, positions.longitude(g)))
            .collect();
        let moon = nakshatra_from_longitude(positions.longitude(Graha::Chandra));
        Self {
            ascendant_longitude: Some(positions.ascendant),
            moon_rashi: Some(rashi_from_longitude(positions.longitude(Graha::Chandra)).rashi),
            moon_nakshatra: Some(moon.nakshatra),
            moon_pada: Some(moon.pada),
            ascendant_rashi: Some(rashi_from_longitude(positions.ascendant).rashi),
            batting_ascendant_rashi: None,
            bowling_ascendant_rashi: None,
            planet_longitudes,
        }
    }

    /// Replace the sub-phase ascendants.
    pub fn with_phase_ascendants(mut self, batting: Option<Rashi>, bowling: Option<Rashi>) -> Self {
        self.batting_ascendant_rashi = batting;
        self.bowling_ascendant_rashi = bowling;
        self
    }

    pub fn longitude(&self, graha: Graha) -> Option<f64> {
        self.planet_longitudes.get(&graha).copied()
    }

    /// Sign occupied by a graha, if its longitude is known.
    pub fn rashi_of(&self, graha: Graha) -> Option<Rashi> {
        self.longitude(graha).map(|lon| rashi_from_longitude(lon).rashi)
    }

    /// Dignity of a graha at its charted longitude.
    pub fn dignity_of(&self, graha: Graha) -> Option<Dignity> {
        self.longitude(graha).map(|lon| dignity(graha, lon))
    }

    /// Whether the graha sits in exaltation, mooltrikona or its own sign.
    pub fn is_strong(&self, graha: Graha) -> bool {
        self.dignity_of(graha).is_some_and(Dignity::is_strong)
    }

    pub fn is_debilitated(&self, graha: Graha) -> bool {
        self.dignity_of(graha) == Some(Dignity::Debilitated)
    }

    pub fn is_exalted(&self, graha: Graha) -> bool {
        self.dignity_of(graha) == Some(Dignity::Exalted)
    }

    /// Both grahas known and in the same sign.
    pub fn conjunct(&self, a: Graha, b: Graha) -> bool {
        match (self.rashi_of(a), self.rashi_of(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Grahas with a known longitude inside `rashi`.
    pub fn grahas_in(&self, rashi: Rashi) -> impl Iterator<Item = Graha> + '_ {
        self.planet_longitudes
            .iter()
            .filter(move |(_, lon)| rashi_from_longitude(**lon).rashi == rashi)
            .map(|(g, _)| *g)
    }

    /// Lord of the moon sign.
    pub fn moon_rashi_lord(&self) -> Option<Graha> {
        self.moon_rashi.map(Rashi::lord)
    }

    /// Vimshottari lord of the moon nakshatra.
    pub fn moon_nakshatra_lord(&self) -> Option<Graha> {
        self.moon_nakshatra.map(Nakshatra::lord)
    }

    pub fn ascendant_lord(&self) -> Option<Graha> {
        self.ascendant_rashi.map(Rashi::lord)
    }

    /// Batting sub-phase ascendant, falling back to the nominal one.
    pub fn batting_ascendant(&self) -> Option<Rashi> {
        self.batting_ascendant_rashi.or(self.ascendant_rashi)
    }

    /// Bowling sub-phase ascendant, falling back to the nominal one.
    pub fn bowling_ascendant(&self) -> Option<Rashi> {
        self.bowling_ascendant_rashi.or(self.ascendant_rashi)
    }
}

/// Chart for a moment: ephemeris plus classification.
pub fn compute_chart(moment: &Moment) -> Result<Chart, ChartError> {
    let positions = compute_positions(moment)?;
    Ok(Chart::from_positions(&positions))
}

/// Chart for a moment with sub-phase ascendants taken from explicit
/// batting/bowling phase times. Phase moments use the main moment's ayanamsa.
pub fn compute_chart_with_phases(
    moment: &Moment,
    batting: Option<&Moment>,
    bowling: Option<&Moment>,
) -> Result<Chart, ChartError> {
    let chart = compute_chart(moment)?;
    let phase_ascendant = |phase: Option<&Moment>| -> Result<Option<Rashi>, ChartError> {
        phase
            .map(|m| -> Result<Rashi, ChartError> {
                let out = compute_positions(&m.with_ayanamsa(moment.ayanamsa))?;
                Ok(rashi_from_longitude(out.ascendant).rashi)
            })
            .transpose()
    };
    let batting_rashi = phase_ascendant(batting)?;
    let bowling_rashi = phase_ascendant(bowling)?;
    debug!(?batting_rashi, ?bowling_rashi, "phase ascendants");
    Ok(chart.with_phase_ascendants(batting_rashi, bowling_rashi))
}

/// Panchang for a moment: tithi/yoga/karana from the sidereal Sun and Moon,
/// weekday from the local civil date.
pub fn compute_panchang(moment: &Moment) -> Result<PanchangInfo, ChartError> {
    let out = compute_positions(moment)?;
    Ok(panchang(
        out.longitude(Graha::Surya),
        out.longitude(Graha::Chandra),
        moment.julian_day_local(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use phala_ephemeris::GeoLocation;

    fn sample_moment() -> Moment {
        Moment::new(2023, 10, 15, 14, 0, 5.5, GeoLocation::new(23.0225, 72.5714)).unwrap()
    }

    #[test]
    fn computed_chart_is_complete() {
        let chart = compute_chart(&sample_moment()).unwrap();
        assert_eq!(chart.planet_longitudes.len(), 9);
        assert!(chart.moon_rashi.is_some());
        assert!(chart.moon_nakshatra.is_some());
        assert!(matches!(chart.moon_pada, Some(1..=4)));
        assert!(chart.ascendant_rashi.is_some());
        assert_eq!(chart.batting_ascendant_rashi, None);
        assert_eq!(chart.moon_rashi, chart.rashi_of(Graha::Chandra));
    }

    #[test]
    fn phase_fallbacks() {
        let chart = compute_chart(&sample_moment()).unwrap();
        assert_eq!(chart.batting_ascendant(), chart.ascendant_rashi);
        let phased = chart.with_phase_ascendants(Some(Rashi::Simha), None);
        assert_eq!(phased.batting_ascendant(), Some(Rashi::Simha));
        assert_eq!(phased.bowling_ascendant(), phased.ascendant_rashi);
    }

    #[test]
    fn phases_from_moments() {
        let m = sample_moment();
        let bat = m.plus_minutes(60).unwrap();
        let bowl = m.plus_minutes(180).unwrap();
        let chart = compute_chart_with_phases(&m, Some(&bat), Some(&bowl)).unwrap();
        assert_eq!(chart.batting_ascendant_rashi, compute_chart(&bat).unwrap().ascendant_rashi);
        assert_eq!(chart.bowling_ascendant_rashi, compute_chart(&bowl).unwrap().ascendant_rashi);
    }

    #[test]
    fn conjunction_and_dignity() {
        let mut chart = Chart::default();
        chart.planet_longitudes.insert(Graha::Mangal, 295.0);
        chart.planet_longitudes.insert(Graha::Shani, 290.0);
        assert!(chart.conjunct(Graha::Mangal, Graha::Shani));
        assert!(!chart.conjunct(Graha::Mangal, Graha::Surya));
        assert!(chart.is_exalted(Graha::Mangal));
        assert!(chart.is_strong(Graha::Shani));
        assert!(!chart.is_strong(Graha::Surya));
        assert_eq!(chart.grahas_in(Rashi::Makara).count(), 2);
    }

    #[test]
    fn unknown_chart_has_no_lords() {
        let chart = Chart::default();
        assert_eq!(chart.moon_rashi_lord(), None);
        assert_eq!(chart.moon_nakshatra_lord(), None);
        assert_eq!(chart.ascendant_lord(), None);
    }

    #[test]
    fn panchang_for_moment() {
        let p = compute_panchang(&sample_moment()).unwrap();
        assert!(p.tithi.tithi_index < 30);
        // 2023-10-15 was a Sunday
        assert_eq!(p.vaar.english_name(), "Sunday");
    }
}
