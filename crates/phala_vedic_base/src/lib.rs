//! Celestial classification tables for the phala prediction engine.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra enums with lordship and name parsing
//! - Longitude to rashi / nakshatra + pada classification
//! - Sign-level dignity and natural friendship
//! - Panchang primitives (tithi, yoga, karana, vaar)
//!
//! Everything here is a pure function of its inputs.

pub mod dignity;
pub mod graha;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod util;

pub use dignity::{
    Dignity, NaturalRelation, debilitation_rashi, dignity, exaltation_rashi, mooltrikona_range,
    natural_relation, own_signs,
};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
    nakshatra_lord,
};
pub use panchang::{
    Karana, KaranaPosition, Paksha, PanchangInfo, Tithi, TithiPosition, Vaar, Yoga, YogaPosition,
    karana_from_elongation, panchang, tithi_from_elongation, vaar_from_jd, yoga_from_sum,
};
pub use rashi::{ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::{fold_name, normalize_360};
