//! Sidereal time and tropical ascendant (lagna).
//!
//! Standard spherical astronomy with a fixed J2000 obliquity:
//! `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps))`.

use phala_vedic_base::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0 in degrees.
pub const OBLIQUITY_DEG: f64 = 23.4393;

/// Greenwich mean sidereal time in degrees, `d` UT days after J2000.0.
pub fn gmst_deg(days_since_j2000: f64) -> f64 {
    normalize_360(280.460_618_37 + 360.985_647_366_29 * days_since_j2000)
}

/// Local sidereal time in degrees for an east-positive site longitude.
pub fn local_sidereal_time_deg(days_since_j2000: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(gmst_deg(days_since_j2000) + longitude_east_deg)
}

/// Tropical ecliptic longitude of the ascendant in degrees [0, 360).
pub fn ascendant_tropical_deg(
    days_since_j2000: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
) -> f64 {
    let lst = local_sidereal_time_deg(days_since_j2000, longitude_east_deg).to_radians();
    let eps = OBLIQUITY_DEG.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_epoch() {
        assert!((gmst_deg(0.0) - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn gmst_one_sidereal_day_later() {
        // 360.98564736629 deg/day: one solar day adds ~0.9856 deg
        let g = gmst_deg(1.0);
        assert!((g - normalize_360(280.460_618_37 + 0.985_647_366_29)).abs() < 1e-9);
    }

    #[test]
    fn equator_lst_zero_gives_270() {
        // LST = 0 at phi = 0: atan2(-1, 0) = -90 deg -> 270
        let d = 0.0;
        let lon = -gmst_deg(d);
        let asc = ascendant_tropical_deg(d, 0.0, lon);
        assert!((asc - 270.0).abs() < 1e-6, "asc = {asc}");
    }

    #[test]
    fn equator_lst_90_gives_0() {
        // LST = 90 at phi = 0: atan2(0, cos eps) = 0
        let d = 0.0;
        let lon = 90.0 - gmst_deg(d);
        let asc = ascendant_tropical_deg(d, 0.0, lon);
        assert!(asc < 1e-6 || (360.0 - asc) < 1e-6, "asc = {asc}");
    }

    #[test]
    fn ascendant_in_range() {
        for i in 0..48 {
            let asc = ascendant_tropical_deg(i as f64 / 48.0, 28.6, 77.2);
            assert!((0.0..360.0).contains(&asc));
        }
    }
}
