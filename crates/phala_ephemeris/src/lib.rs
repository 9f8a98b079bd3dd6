//! Deterministic low-order ephemeris for the phala prediction engine.
//!
//! Converts a civil [`Moment`] into sidereal longitudes for the nine grahas,
//! the ascendant, and the ayanamsa applied. Precision is deliberately
//! modest; identical input always yields identical output.

pub mod ayanamsa;
pub mod engine;
pub mod error;
pub mod julian;
pub mod lagna;
pub mod moment;

pub use ayanamsa::{ALL_AYANAMSAS, Ayanamsa, ayanamsa_deg};
pub use engine::{EphemerisOutput, compute_positions, tropical_longitudes};
pub use error::EphemerisError;
pub use julian::{J2000_JD, calendar_to_jd, days_since_j2000};
pub use lagna::{ascendant_tropical_deg, gmst_deg, local_sidereal_time_deg};
pub use moment::{GeoLocation, Moment};
