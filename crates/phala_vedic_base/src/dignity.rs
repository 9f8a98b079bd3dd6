//! Exaltation, debilitation, mooltrikona and own-sign tables, natural
//! friendship, and sign-level dignity determination.
//!
//! Exaltation and debilitation are judged by sign, not by exact degree.
//! Mooltrikona is the only check bounded to a degree span inside its sign.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_from_longitude};

/// Exaltation rashi for the sapta grahas. None for Rahu/Ketu.
///
/// Sun Mesha, Moon Vrishabha, Mars Makara, Mercury Kanya,
/// Jupiter Karka, Venus Meena, Saturn Tula.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi: the sign opposite exaltation. None for Rahu/Ketu.
pub fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    exaltation_rashi(graha).map(|r| r.offset(6))
}

/// Mooltrikona range as (rashi, start_deg_in_rashi, end_deg_in_rashi).
/// None for Rahu/Ketu.
pub const fn mooltrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 4.0, 20.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 16.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign rashis. Empty for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaturalRelation {
    Friend,
    Enemy,
    Neutral,
}

/// Natural (naisargika) friendship of `graha` towards `other`.
/// Neutral for any pairing involving Rahu/Ketu and for self-pairs.
pub const fn natural_relation(graha: Graha, other: Graha) -> NaturalRelation {
    use Graha::*;
    use NaturalRelation::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

/// Dignity of a graha at a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Mooltrikona,
    OwnSign,
    Friendly,
    Neutral,
    Enemy,
    Debilitated,
}

impl Dignity {
    /// Exalted, Mooltrikona or OwnSign.
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::Exalted | Self::Mooltrikona | Self::OwnSign)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Mooltrikona => "Mooltrikona",
            Self::OwnSign => "Own Sign",
            Self::Friendly => "Friendly",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::Debilitated => "Debilitated",
        }
    }
}

impl std::fmt::Display for Dignity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn is_in_mooltrikona(graha: Graha, rashi: Rashi, deg_in_rashi: f64) -> bool {
    match mooltrikona_range(graha) {
        Some((mt_rashi, start, end)) => {
            rashi == mt_rashi && deg_in_rashi >= start && deg_in_rashi < end
        }
        None => false,
    }
}

/// Dignity of `graha` at sidereal longitude `lon`.
///
/// Priority: exaltation > debilitation > mooltrikona > own sign >
/// natural friendship with the sign lord. Rahu/Ketu are always Neutral.
pub fn dignity(graha: Graha, lon: f64) -> Dignity {
    if graha.is_node() {
        return Dignity::Neutral;
    }

    let info = rashi_from_longitude(lon);
    let rashi = info.rashi;

    if exaltation_rashi(graha) == Some(rashi) {
        return Dignity::Exalted;
    }
    if debilitation_rashi(graha) == Some(rashi) {
        return Dignity::Debilitated;
    }
    if is_in_mooltrikona(graha, rashi, info.degrees_in_rashi) {
        return Dignity::Mooltrikona;
    }
    if own_signs(graha).contains(&rashi) {
        return Dignity::OwnSign;
    }

    match natural_relation(graha, rashi_lord(rashi)) {
        NaturalRelation::Friend => Dignity::Friendly,
        NaturalRelation::Enemy => Dignity::Enemy,
        NaturalRelation::Neutral => Dignity::Neutral,
    }
}
