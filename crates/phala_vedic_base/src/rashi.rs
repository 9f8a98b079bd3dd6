//! Rashi (zodiac sign) classification and DMS formatting.
//!
//! The sidereal ecliptic is divided into 12 equal signs of 30 degrees,
//! starting from Mesha (Aries) at 0 deg. Sign ids exposed to callers are
//! 1-based (`floor(lon / 30) + 1`); indices used for table lookups are 0-based.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::util::{lookup_alias, normalize_360};

/// Width of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

const RASHI_ALIASES: &[(&str, Rashi)] = &[
    ("mesha", Rashi::Mesha),
    ("mesh", Rashi::Mesha),
    ("aries", Rashi::Mesha),
    ("vrishabha", Rashi::Vrishabha),
    ("vrushabha", Rashi::Vrishabha),
    ("vrishabh", Rashi::Vrishabha),
    ("rishabha", Rashi::Vrishabha),
    ("taurus", Rashi::Vrishabha),
    ("mithuna", Rashi::Mithuna),
    ("mithun", Rashi::Mithuna),
    ("gemini", Rashi::Mithuna),
    ("karka", Rashi::Karka),
    ("karkata", Rashi::Karka),
    ("karkataka", Rashi::Karka),
    ("kark", Rashi::Karka),
    ("cancer", Rashi::Karka),
    ("simha", Rashi::Simha),
    ("simh", Rashi::Simha),
    ("leo", Rashi::Simha),
    ("kanya", Rashi::Kanya),
    ("kanni", Rashi::Kanya),
    ("virgo", Rashi::Kanya),
    ("tula", Rashi::Tula),
    ("thula", Rashi::Tula),
    ("libra", Rashi::Tula),
    ("vrischika", Rashi::Vrischika),
    ("vrishchika", Rashi::Vrischika),
    ("vruschika", Rashi::Vrischika),
    ("scorpio", Rashi::Vrischika),
    ("dhanu", Rashi::Dhanu),
    ("dhanus", Rashi::Dhanu),
    ("dhanush", Rashi::Dhanu),
    ("sagittarius", Rashi::Dhanu),
    ("makara", Rashi::Makara),
    ("makar", Rashi::Makara),
    ("capricorn", Rashi::Makara),
    ("kumbha", Rashi::Kumbha),
    ("kumbh", Rashi::Kumbha),
    ("aquarius", Rashi::Kumbha),
    ("meena", Rashi::Meena),
    ("meen", Rashi::Meena),
    ("pisces", Rashi::Meena),
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign id (Mesha=1 .. Meena=12).
    pub const fn id(self) -> u8 {
        self.index() + 1
    }

    /// Rashi at a 0-based index. Returns None if index >= 12.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_RASHIS.get(index as usize).copied()
    }

    /// Rashi for a 1-based sign id. Returns None outside 1..=12.
    pub fn from_id(id: u8) -> Option<Self> {
        id.checked_sub(1).and_then(Self::from_index)
    }

    /// Parse a Sanskrit, regional or Western sign name.
    pub fn from_name(name: &str) -> Option<Self> {
        lookup_alias(RASHI_ALIASES, name)
    }

    /// Planetary lord of this rashi.
    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }

    /// The rashi `offset` signs after this one (0 = same sign).
    pub fn offset(self, offset: u8) -> Self {
        ALL_RASHIS[((self.index() as usize) + offset as usize) % 12]
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.western_name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:04.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Convert decimal degrees to degrees-minutes-seconds. Sign is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

impl RashiInfo {
    /// 1-based sign id.
    pub fn id(&self) -> u8 {
        self.rashi.id()
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_index = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_index as f64) * RASHI_SPAN;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
