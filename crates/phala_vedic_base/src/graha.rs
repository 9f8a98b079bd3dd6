//! Vedic planet (graha) enum, name parsing and rashi lordship.
//!
//! The nine grahas are the only bodies the prediction engine reasons about.
//! Rahu and Ketu are the lunar nodes: they never own a rashi and are always
//! exactly opposite each other.

use serde::{Deserialize, Serialize};

use crate::rashi::{ALL_RASHIS, Rashi};
use crate::util::lookup_alias;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas, excluding the lunar nodes.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

const GRAHA_ALIASES: &[(&str, Graha)] = &[
    ("sun", Graha::Surya),
    ("surya", Graha::Surya),
    ("ravi", Graha::Surya),
    ("moon", Graha::Chandra),
    ("chandra", Graha::Chandra),
    ("soma", Graha::Chandra),
    ("mars", Graha::Mangal),
    ("mangal", Graha::Mangal),
    ("kuja", Graha::Mangal),
    ("mercury", Graha::Buddh),
    ("buddh", Graha::Buddh),
    ("budha", Graha::Buddh),
    ("jupiter", Graha::Guru),
    ("guru", Graha::Guru),
    ("brihaspati", Graha::Guru),
    ("venus", Graha::Shukra),
    ("shukra", Graha::Shukra),
    ("saturn", Graha::Shani),
    ("shani", Graha::Shani),
    ("rahu", Graha::Rahu),
    ("northnode", Graha::Rahu),
    ("ketu", Graha::Ketu),
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for the shadow bodies Rahu and Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Parse an English or Sanskrit graha name (case and punctuation insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        lookup_alias(GRAHA_ALIASES, name)
    }

    /// Rashis owned by this graha. Empty for Rahu/Ketu.
    pub fn owned_rashis(self) -> impl Iterator<Item = Rashi> {
        ALL_RASHIS
            .into_iter()
            .filter(move |&r| rashi_lord(r) == self)
    }

    /// Whether `rashi` is ruled by this graha.
    pub fn owns(self, rashi: Rashi) -> bool {
        rashi_lord(rashi) == self
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}
