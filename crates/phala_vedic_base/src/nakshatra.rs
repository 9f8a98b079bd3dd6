//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! each, and each nakshatra into 4 padas of 3 deg 20'. Lordship follows the
//! Vimshottari cycle of nine rulers starting from Ketu at Ashwini.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::{lookup_alias, normalize_360};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 360/108 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari ruler cycle; nakshatra `i` is ruled by `VIMSHOTTARI_LORDS[i % 9]`.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

// Folded keys: see `util::fold_name`.
const NAKSHATRA_ALIASES: &[(&str, Nakshatra)] = &[
    ("ashwini", Nakshatra::Ashwini),
    ("aswini", Nakshatra::Ashwini),
    ("asvini", Nakshatra::Ashwini),
    ("ashvini", Nakshatra::Ashwini),
    ("bharani", Nakshatra::Bharani),
    ("krittika", Nakshatra::Krittika),
    ("kritika", Nakshatra::Krittika),
    ("karthigai", Nakshatra::Krittika),
    ("kruthika", Nakshatra::Krittika),
    ("rohini", Nakshatra::Rohini),
    ("mrigashira", Nakshatra::Mrigashira),
    ("mrigasira", Nakshatra::Mrigashira),
    ("mrigashirsha", Nakshatra::Mrigashira),
    ("mrugashira", Nakshatra::Mrigashira),
    ("ardra", Nakshatra::Ardra),
    ("arudra", Nakshatra::Ardra),
    ("thiruvathirai", Nakshatra::Ardra),
    ("punarvasu", Nakshatra::Punarvasu),
    ("punarpoosam", Nakshatra::Punarvasu),
    ("pushya", Nakshatra::Pushya),
    ("pushyami", Nakshatra::Pushya),
    ("pusya", Nakshatra::Pushya),
    ("poosam", Nakshatra::Pushya),
    ("ashlesha", Nakshatra::Ashlesha),
    ("aslesha", Nakshatra::Ashlesha),
    ("ashlesa", Nakshatra::Ashlesha),
    ("ayilyam", Nakshatra::Ashlesha),
    ("magha", Nakshatra::Magha),
    ("makha", Nakshatra::Magha),
    ("magam", Nakshatra::Magha),
    ("purvaphalguni", Nakshatra::PurvaPhalguni),
    ("poorvaphalguni", Nakshatra::PurvaPhalguni),
    ("pubba", Nakshatra::PurvaPhalguni),
    ("pphalguni", Nakshatra::PurvaPhalguni),
    ("pooram", Nakshatra::PurvaPhalguni),
    ("uttaraphalguni", Nakshatra::UttaraPhalguni),
    ("utharaphalguni", Nakshatra::UttaraPhalguni),
    ("uttaraphalgun", Nakshatra::UttaraPhalguni),
    ("uphalguni", Nakshatra::UttaraPhalguni),
    ("uthiram", Nakshatra::UttaraPhalguni),
    ("hasta", Nakshatra::Hasta),
    ("hastha", Nakshatra::Hasta),
    ("hastam", Nakshatra::Hasta),
    ("chitra", Nakshatra::Chitra),
    ("chitta", Nakshatra::Chitra),
    ("chithirai", Nakshatra::Chitra),
    ("swati", Nakshatra::Swati),
    ("svati", Nakshatra::Swati),
    ("swathi", Nakshatra::Swati),
    ("vishakha", Nakshatra::Vishakha),
    ("visakha", Nakshatra::Vishakha),
    ("vishaka", Nakshatra::Vishakha),
    ("visakam", Nakshatra::Vishakha),
    ("anuradha", Nakshatra::Anuradha),
    ("anusham", Nakshatra::Anuradha),
    ("jyeshtha", Nakshatra::Jyeshtha),
    ("jyestha", Nakshatra::Jyeshtha),
    ("jyeshta", Nakshatra::Jyeshtha),
    ("kettai", Nakshatra::Jyeshtha),
    ("mula", Nakshatra::Mula),
    ("moola", Nakshatra::Mula),
    ("moolam", Nakshatra::Mula),
    ("purvaashadha", Nakshatra::PurvaAshadha),
    ("purvashadha", Nakshatra::PurvaAshadha),
    ("poorvashadha", Nakshatra::PurvaAshadha),
    ("poorvaashadha", Nakshatra::PurvaAshadha),
    ("pashadha", Nakshatra::PurvaAshadha),
    ("pooradam", Nakshatra::PurvaAshadha),
    ("uttaraashadha", Nakshatra::UttaraAshadha),
    ("uttarashadha", Nakshatra::UttaraAshadha),
    ("utharashada", Nakshatra::UttaraAshadha),
    ("uashadha", Nakshatra::UttaraAshadha),
    ("uthiradam", Nakshatra::UttaraAshadha),
    ("shravana", Nakshatra::Shravana),
    ("sravana", Nakshatra::Shravana),
    ("shravan", Nakshatra::Shravana),
    ("thiruvonam", Nakshatra::Shravana),
    ("dhanishtha", Nakshatra::Dhanishtha),
    ("dhanishta", Nakshatra::Dhanishtha),
    ("dhanista", Nakshatra::Dhanishtha),
    ("shravishtha", Nakshatra::Dhanishtha),
    ("avittam", Nakshatra::Dhanishtha),
    ("shatabhisha", Nakshatra::Shatabhisha),
    ("satabhisha", Nakshatra::Shatabhisha),
    ("shatabhishak", Nakshatra::Shatabhisha),
    ("shatabhishaj", Nakshatra::Shatabhisha),
    ("sadayam", Nakshatra::Shatabhisha),
    ("purvabhadrapada", Nakshatra::PurvaBhadrapada),
    ("poorvabhadrapada", Nakshatra::PurvaBhadrapada),
    ("purvabhadra", Nakshatra::PurvaBhadrapada),
    ("pbhadra", Nakshatra::PurvaBhadrapada),
    ("pooratathi", Nakshatra::PurvaBhadrapada),
    ("uttarabhadrapada", Nakshatra::UttaraBhadrapada),
    ("utharabhadrapada", Nakshatra::UttaraBhadrapada),
    ("uttarabhadra", Nakshatra::UttaraBhadrapada),
    ("ubhadra", Nakshatra::UttaraBhadrapada),
    ("uthirattathi", Nakshatra::UttaraBhadrapada),
    ("revati", Nakshatra::Revati),
    ("revathi", Nakshatra::Revati),
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based id (Ashwini=1 .. Revati=27).
    pub const fn id(self) -> u8 {
        self.index() + 1
    }

    /// Nakshatra at a 0-based index. Returns None if index >= 27.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_NAKSHATRAS.get(index as usize).copied()
    }

    /// Nakshatra for a 1-based id. Returns None outside 1..=27.
    pub fn from_id(id: u8) -> Option<Self> {
        id.checked_sub(1).and_then(Self::from_index)
    }

    /// Parse a nakshatra name, tolerating case, spacing, punctuation and
    /// common regional spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        lookup_alias(NAKSHATRA_ALIASES, name)
    }

    /// Vimshottari lord of this nakshatra.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self as usize) % 9]
    }

    /// Start longitude of this nakshatra in degrees.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Vimshottari lord of a nakshatra.
pub const fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    nakshatra.lord()
}

/// Nakshatra position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraInfo {
    /// 1-based nakshatra id.
    pub fn id(&self) -> u8 {
        self.nakshatra.id()
    }
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nakshatra_index = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - nakshatra_index as f64 * NAKSHATRA_SPAN).max(0.0);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nakshatra_index as usize],
        nakshatra_index,
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_value() {
        assert!((NAKSHATRA_SPAN - 13.333_333_333_333_334).abs() < 1e-10);
        assert!((PADA_SPAN * 108.0 - 360.0).abs() < 1e-10);
    }

    #[test]
    fn vimshottari_lords_cycle() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Bharani.lord(), Graha::Shukra);
        assert_eq!(Nakshatra::Rohini.lord(), Graha::Chandra);
        assert_eq!(Nakshatra::Ardra.lord(), Graha::Rahu);
        assert_eq!(Nakshatra::Ashlesha.lord(), Graha::Buddh);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Chitra.lord(), Graha::Mangal);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
    }

    #[test]
    fn ashwini_start() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert_eq!(info.id(), 1);
    }

    #[test]
    fn revati_end() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
        assert_eq!(info.id(), 27);
    }

    #[test]
    fn pada_boundaries() {
        // Bharani starts at 13.3333, padas at +0, +3.33, +6.67, +10.0
        let base = NAKSHATRA_SPAN;
        assert_eq!(nakshatra_from_longitude(base + 0.1).pada, 1);
        assert_eq!(nakshatra_from_longitude(base + PADA_SPAN + 0.1).pada, 2);
        assert_eq!(nakshatra_from_longitude(base + 2.0 * PADA_SPAN + 0.1).pada, 3);
        assert_eq!(nakshatra_from_longitude(base + 3.0 * PADA_SPAN + 0.1).pada, 4);
    }

    #[test]
    fn chitra_at_182() {
        let info = nakshatra_from_longitude(182.0);
        assert_eq!(info.nakshatra, Nakshatra::Chitra);
        assert_eq!(info.nakshatra.lord(), Graha::Mangal);
    }

    #[test]
    fn negative_wraps() {
        let info = nakshatra_from_longitude(-1.0);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn regional_aliases() {
        assert_eq!(Nakshatra::from_name("Purva-Phalguni"), Some(Nakshatra::PurvaPhalguni));
        assert_eq!(Nakshatra::from_name("pubba"), Some(Nakshatra::PurvaPhalguni));
        assert_eq!(Nakshatra::from_name("Moola"), Some(Nakshatra::Mula));
        assert_eq!(Nakshatra::from_name("Thiruvonam"), Some(Nakshatra::Shravana));
        assert_eq!(Nakshatra::from_name("SATABHISHA"), Some(Nakshatra::Shatabhisha));
        assert_eq!(Nakshatra::from_name("Abhijit"), None);
        assert_eq!(Nakshatra::from_name(""), None);
    }

    #[test]
    fn every_name_round_trips() {
        for n in ALL_NAKSHATRAS {
            assert_eq!(Nakshatra::from_name(n.name()), Some(n), "{}", n.name());
            assert_eq!(Nakshatra::from_id(n.id()), Some(n));
        }
    }
}
