//! Gregorian calendar to Julian Day conversion.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Julian Day for a Gregorian calendar date with fractional day.
///
/// `day` may carry a fraction (and may fall outside 1..=31 after a UTC
/// shift); the formula is linear in the day term. Meeus, ch. 7.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Days elapsed since J2000.0 for a Julian Day.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
        assert!(days_since_j2000(jd).abs() < 1e-9);
    }

    #[test]
    fn meeus_examples() {
        // Meeus 7.a: 1957 Oct 4.81
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
        assert!((calendar_to_jd(1987, 1, 27.0) - 2_446_822.5).abs() < 1e-9);
        assert!((calendar_to_jd(1988, 6, 19.5) - 2_447_332.0).abs() < 1e-9);
    }

    #[test]
    fn negative_day_fraction_rolls_back() {
        // 2000-01-01 -0.25 day is 1999-12-31 18:00
        let a = calendar_to_jd(2000, 1, 0.75);
        let b = calendar_to_jd(1999, 12, 31.75);
        assert!((a - b).abs() < 1e-9);
    }
}
