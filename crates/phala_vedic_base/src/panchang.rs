//! Panchang primitives: tithi, yoga, karana and vaar from sidereal Sun/Moon
//! longitudes and a Julian Day.
//!
//! These are pure angle classifications. Start/end times of each element
//! are not searched for; callers that need them sample at finer intervals.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// Width of one tithi in degrees of Moon-Sun elongation.
pub const TITHI_SPAN: f64 = 12.0;
/// Width of one karana (half-tithi).
pub const KARANA_SPAN: f64 = 6.0;
/// Width of one yoga in degrees of Sun+Moon longitude.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half, elongation [0, 180).
    Shukla,
    /// Waning half, elongation [180, 360).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi name within a paksha. The 15th tithi is Purnima in Shukla and
/// Amavasya in Krishna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

const TITHI_SEQUENCE: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }
}

/// Tithi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index in the synodic month (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation already covered in this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify Moon-Sun elongation into one of 30 tithis.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let el = normalize_360(elongation_deg);
    let tithi_index = ((el / TITHI_SPAN).floor() as u8).min(29);
    let in_paksha = tithi_index % 15;
    let paksha = if tithi_index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    let tithi = match (in_paksha, paksha) {
        (14, Paksha::Shukla) => Tithi::Purnima,
        (14, Paksha::Krishna) => Tithi::Amavasya,
        (i, _) => TITHI_SEQUENCE[i as usize],
    };
    TithiPosition {
        tithi,
        tithi_index,
        paksha,
        tithi_in_paksha: in_paksha + 1,
        degrees_in_tithi: el - tithi_index as f64 * TITHI_SPAN,
    }
}

/// The 27 nitya yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }
}

/// Yoga position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based index (0..26).
    pub yoga_index: u8,
}

/// Classify the sidereal Sun+Moon sum into one of 27 yogas.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let s = normalize_360(sum_deg);
    let yoga_index = ((s / YOGA_SPAN).floor() as u8).min(26);
    YogaPosition {
        yoga: ALL_YOGAS[yoga_index as usize],
        yoga_index,
    }
}

/// The 11 karanas: 7 movable (chara) and 4 fixed (sthira).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garija,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const CHARA_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garija,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garija => "Garija",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Fixed karanas occur once per synodic month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based half-tithi index in the synodic month (0..59).
    pub karana_index: u8,
}

/// Classify Moon-Sun elongation into one of 60 half-tithis.
///
/// Index 0 is Kimstughna, 1..=56 cycle through the seven movable karanas,
/// 57 Shakuni, 58 Chatushpada, 59 Naga.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let el = normalize_360(elongation_deg);
    let karana_index = ((el / KARANA_SPAN).floor() as u8).min(59);
    let karana = match karana_index {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59 => Karana::Naga,
        i => CHARA_KARANAS[((i - 1) % 7) as usize],
    };
    KaranaPosition {
        karana,
        karana_index,
    }
}

/// Weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// Ruling graha of the weekday.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }
}

/// Civil weekday of a Julian Day (0 = Sunday).
///
/// Pass a JD built from local civil time to get the local weekday.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let day = (jd + 1.5).floor() as i64;
    ALL_VAARS[day.rem_euclid(7) as usize]
}

/// Combined panchang classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanchangInfo {
    pub tithi: TithiPosition,
    pub yoga: YogaPosition,
    pub karana: KaranaPosition,
    pub vaar: Vaar,
    /// Moon-Sun elongation used for tithi and karana.
    pub elongation_deg: f64,
}

/// Classify tithi, yoga, karana and vaar from sidereal Sun and Moon
/// longitudes and a local-civil Julian Day.
pub fn panchang(sun_lon: f64, moon_lon: f64, jd: f64) -> PanchangInfo {
    let elongation_deg = normalize_360(moon_lon - sun_lon);
    PanchangInfo {
        tithi: tithi_from_elongation(elongation_deg),
        yoga: yoga_from_sum(sun_lon + moon_lon),
        karana: karana_from_elongation(elongation_deg),
        vaar: vaar_from_jd(jd),
        elongation_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tithi_first_and_last() {
        let t = tithi_from_elongation(0.0);
        assert_eq!(t.tithi, Tithi::Pratipada);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.tithi_in_paksha, 1);

        let t = tithi_from_elongation(359.9);
        assert_eq!(t.tithi, Tithi::Amavasya);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi_index, 29);
    }

    #[test]
    fn purnima_before_opposition() {
        let t = tithi_from_elongation(179.0);
        assert_eq!(t.tithi, Tithi::Purnima);
        assert_eq!(t.tithi_in_paksha, 15);
        let t = tithi_from_elongation(181.0);
        assert_eq!(t.tithi, Tithi::Pratipada);
        assert_eq!(t.paksha, Paksha::Krishna);
    }

    #[test]
    fn yoga_bounds() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkambha);
        assert_eq!(yoga_from_sum(359.9).yoga, Yoga::Vaidhriti);
        assert_eq!(yoga_from_sum(360.0 + 14.0).yoga, Yoga::Priti);
    }

    #[test]
    fn karana_fixed_positions() {
        assert_eq!(karana_from_elongation(1.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(7.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(13.0).karana, Karana::Balava);
        assert_eq!(karana_from_elongation(43.0).karana, Karana::Vishti);
        assert_eq!(karana_from_elongation(49.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(337.0).karana, Karana::Vishti);
        assert_eq!(karana_from_elongation(343.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_elongation(349.0).karana, Karana::Chatushpada);
        assert_eq!(karana_from_elongation(355.0).karana, Karana::Naga);
    }

    #[test]
    fn j2000_is_saturday() {
        // 2000-01-01 12:00 TT
        assert_eq!(vaar_from_jd(2_451_545.0), Vaar::Shanivaar);
        assert_eq!(vaar_from_jd(2_451_545.6), Vaar::Ravivaar);
    }

    #[test]
    fn panchang_combines() {
        let p = panchang(10.0, 100.0, 2_451_545.0);
        assert!((p.elongation_deg - 90.0).abs() < 1e-12);
        assert_eq!(p.tithi.tithi_index, 7);
        assert_eq!(p.karana.karana_index, 15);
        assert_eq!(p.vaar.lord(), Graha::Shani);
    }
}
