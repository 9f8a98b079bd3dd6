//! Property sweeps over arbitrary longitudes.

use phala_vedic_base::{
    NAKSHATRA_SPAN, PADA_SPAN, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sign_id_matches_band(lon in -1.0e4f64..1.0e4) {
        let n = normalize_360(lon);
        let info = rashi_from_longitude(lon);
        prop_assert!((1..=12).contains(&info.id()));
        prop_assert_eq!(info.rashi_index, ((n / 30.0).floor() as u8).min(11));
        prop_assert!(info.degrees_in_rashi >= 0.0 && info.degrees_in_rashi < 30.0 + 1e-9);
    }

    #[test]
    fn nakshatra_and_pada_in_range(lon in -1.0e4f64..1.0e4) {
        let info = nakshatra_from_longitude(lon);
        prop_assert!((1..=27).contains(&info.id()));
        prop_assert!((1..=4).contains(&info.pada));
        prop_assert!(info.degrees_in_nakshatra < NAKSHATRA_SPAN + 1e-9);
        let expected_pada = ((info.degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
        prop_assert_eq!(info.pada, expected_pada);
    }

    #[test]
    fn sweep_is_monotonic(a in 0.0f64..359.0, step in 0.0f64..1.0) {
        let b = a + step;
        prop_assert!(rashi_from_longitude(a).id() <= rashi_from_longitude(b).id());
        prop_assert!(nakshatra_from_longitude(a).id() <= nakshatra_from_longitude(b).id());
    }
}
