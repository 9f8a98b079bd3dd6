//! Low-order mean-element positions for the nine grahas.
//!
//! Sun, Moon, Mars and Venus get a single equation-of-centre term; Mercury,
//! Jupiter and Saturn use mean longitude only. Rahu is the mean node and
//! Ketu is always derived from it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use phala_vedic_base::{Graha, normalize_360};

use crate::ayanamsa::ayanamsa_deg;
use crate::error::EphemerisError;
use crate::lagna::ascendant_tropical_deg;
use crate::moment::Moment;

/// Sidereal positions for one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EphemerisOutput {
    /// Sidereal longitudes in degrees, indexed by [`Graha::index`].
    pub longitudes: [f64; 9],
    /// Sidereal ascendant longitude in degrees.
    pub ascendant: f64,
    /// Ayanamsa applied, in degrees.
    pub ayanamsa: f64,
    /// UT days since J2000.0.
    pub days_since_j2000: f64,
}

impl EphemerisOutput {
    /// Sidereal longitude of one graha.
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }
}

fn with_centre(mean_lon: f64, anomaly: f64, amplitude: f64) -> f64 {
    mean_lon + amplitude * anomaly.to_radians().sin()
}

/// Tropical longitudes, indexed by [`Graha::index`], `d` UT days after J2000.0.
pub fn tropical_longitudes(d: f64) -> [f64; 9] {
    let sun = with_centre(280.460 + 0.985_647_4 * d, 357.528 + 0.985_600_3 * d, 1.915);
    let moon = with_centre(218.316 + 13.176_396 * d, 134.963 + 13.064_993 * d, 6.289);
    let mars = with_centre(355.433 + 0.524_020_8 * d, 19.373 + 0.524_020_8 * d, 10.691);
    let venus = with_centre(181.979 + 1.602_130_2 * d, 50.416 + 1.602_130_2 * d, 0.7758);
    let mercury = 252.251 + 4.092_334_4 * d;
    let jupiter = 34.351 + 0.083_085_3 * d;
    let saturn = 50.077 + 0.033_444_2 * d;
    let rahu = normalize_360(125.045 - 0.052_953_8 * d);
    let ketu = normalize_360(rahu + 180.0);

    let mut out = [0.0; 9];
    out[Graha::Surya.index() as usize] = normalize_360(sun);
    out[Graha::Chandra.index() as usize] = normalize_360(moon);
    out[Graha::Mangal.index() as usize] = normalize_360(mars);
    out[Graha::Buddh.index() as usize] = normalize_360(mercury);
    out[Graha::Guru.index() as usize] = normalize_360(jupiter);
    out[Graha::Shukra.index() as usize] = normalize_360(venus);
    out[Graha::Shani.index() as usize] = normalize_360(saturn);
    out[Graha::Rahu.index() as usize] = rahu;
    out[Graha::Ketu.index() as usize] = ketu;
    out
}

/// Sidereal positions of the nine grahas and the ascendant for a moment.
pub fn compute_positions(moment: &Moment) -> Result<EphemerisOutput, EphemerisError> {
    moment.validate()?;

    let d = moment.days_since_j2000();
    let ayanamsa = ayanamsa_deg(moment.ayanamsa, d);
    let tropical = tropical_longitudes(d);

    let mut longitudes = [0.0; 9];
    for (i, lon) in tropical.iter().enumerate() {
        longitudes[i] = normalize_360(lon - ayanamsa);
    }
    // Ketu is re-derived after the sidereal shift so the opposition is exact.
    let rahu = longitudes[Graha::Rahu.index() as usize];
    longitudes[Graha::Ketu.index() as usize] = normalize_360(rahu + 180.0);

    let asc_tropical = ascendant_tropical_deg(d, moment.latitude_deg, moment.longitude_deg);
    let ascendant = normalize_360(asc_tropical - ayanamsa);

    trace!(d, ayanamsa, ascendant, "computed positions");

    Ok(EphemerisOutput {
        longitudes,
        ascendant,
        ayanamsa,
        days_since_j2000: d,
    })
}
