//! Civil date/time plus observer location: the sole input to the engine.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::ayanamsa::Ayanamsa;
use crate::error::EphemerisError;
use crate::julian::{calendar_to_jd, days_since_j2000};

/// Widest UTC offset accepted, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check ranges: latitude [-90, 90], longitude [-180, 180], both finite.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemerisError::InvalidLocation(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemerisError::InvalidLocation(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        Ok(())
    }
}

/// A civil instant at a place, with the sidereal system to use.
///
/// Fields are public for transport; every engine entry point re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Local civil time minus UTC, in hours.
    pub utc_offset_hours: f64,
    #[serde(default)]
    pub ayanamsa: Ayanamsa,
}

impl Moment {
    /// Build and validate a moment. The ayanamsa defaults to Lahiri.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
        location: GeoLocation,
    ) -> Result<Self, EphemerisError> {
        let moment = Self {
            year,
            month,
            day,
            hour,
            minute,
            latitude_deg: location.latitude_deg,
            longitude_deg: location.longitude_deg,
            utc_offset_hours,
            ayanamsa: Ayanamsa::default(),
        };
        moment.validate()?;
        Ok(moment)
    }

    /// Build from a chrono instant; seconds are truncated to the minute.
    pub fn from_datetime(
        dt: DateTime<FixedOffset>,
        location: GeoLocation,
    ) -> Result<Self, EphemerisError> {
        use chrono::{Datelike, Timelike};

        let offset_secs = dt.offset().local_minus_utc();
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            offset_secs as f64 / 3600.0,
            location,
        )
    }

    /// Same instant and place under another sidereal system.
    pub fn with_ayanamsa(mut self, ayanamsa: Ayanamsa) -> Self {
        self.ayanamsa = ayanamsa;
        self
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg)
    }

    /// Reject out-of-range calendar fields, offsets and coordinates.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !(1..=12).contains(&self.month) {
            return Err(EphemerisError::InvalidMoment(format!(
                "month {} outside 1..=12",
                self.month
            )));
        }
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(EphemerisError::InvalidMoment(format!(
                "day {} does not exist in {}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 {
            return Err(EphemerisError::InvalidMoment(format!(
                "hour {} outside 0..=23",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(EphemerisError::InvalidMoment(format!(
                "minute {} outside 0..=59",
                self.minute
            )));
        }
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(EphemerisError::InvalidMoment(format!(
                "utc offset {} outside [-14, 14] hours",
                self.utc_offset_hours
            )));
        }
        self.location().validate()
    }

    /// Fixed offset of the civil clock.
    pub fn offset(&self) -> Result<FixedOffset, EphemerisError> {
        let secs = (self.utc_offset_hours * 3600.0).round() as i32;
        FixedOffset::east_opt(secs).ok_or_else(|| {
            EphemerisError::InvalidMoment(format!(
                "utc offset {} not representable",
                self.utc_offset_hours
            ))
        })
    }

    /// The civil instant as a chrono timestamp.
    pub fn local_datetime(&self) -> Result<DateTime<FixedOffset>, EphemerisError> {
        self.validate()?;
        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
            .ok_or_else(|| EphemerisError::InvalidMoment(format!("{self:?}")))?;
        naive
            .and_local_timezone(self.offset()?)
            .single()
            .ok_or_else(|| EphemerisError::InvalidMoment(format!("{self:?}")))
    }

    /// Advance by `minutes` (negative goes back), calendar-correct.
    pub fn plus_minutes(&self, minutes: i64) -> Result<Self, EphemerisError> {
        let delta = TimeDelta::try_minutes(minutes)
            .ok_or_else(|| EphemerisError::OutOfRange(format!("{minutes} minutes")))?;
        let dt = self
            .local_datetime()?
            .checked_add_signed(delta)
            .ok_or_else(|| EphemerisError::OutOfRange(format!("{minutes} minutes")))?;
        Ok(Self::from_datetime(dt, self.location())?.with_ayanamsa(self.ayanamsa))
    }

    /// Universal-time Julian Day.
    pub fn julian_day_ut(&self) -> f64 {
        let ut_hours = self.hour as f64 + self.minute as f64 / 60.0 - self.utc_offset_hours;
        calendar_to_jd(self.year, self.month, self.day as f64 + ut_hours / 24.0)
    }

    /// Julian Day of the local civil clock reading (used for the weekday).
    pub fn julian_day_local(&self) -> f64 {
        let hours = self.hour as f64 + self.minute as f64 / 60.0;
        calendar_to_jd(self.year, self.month, self.day as f64 + hours / 24.0)
    }

    /// UT days since J2000.0.
    pub fn days_since_j2000(&self) -> f64 {
        days_since_j2000(self.julian_day_ut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090)
    }

    #[test]
    fn j2000_in_utc() {
        let m = Moment::new(2000, 1, 1, 12, 0, 0.0, delhi()).unwrap();
        assert!(m.days_since_j2000().abs() < 1e-9);
    }

    #[test]
    fn offset_shifts_ut() {
        // 17:30 IST = 12:00 UTC
        let m = Moment::new(2000, 1, 1, 17, 30, 5.5, delhi()).unwrap();
        assert!(m.days_since_j2000().abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_calendar_fields() {
        assert!(matches!(
            Moment::new(2023, 13, 1, 0, 0, 0.0, delhi()),
            Err(EphemerisError::InvalidMoment(_))
        ));
        assert!(matches!(
            Moment::new(2023, 2, 29, 0, 0, 0.0, delhi()),
            Err(EphemerisError::InvalidMoment(_))
        ));
        assert!(Moment::new(2024, 2, 29, 0, 0, 0.0, delhi()).is_ok());
        assert!(Moment::new(2023, 1, 1, 24, 0, 0.0, delhi()).is_err());
        assert!(Moment::new(2023, 1, 1, 0, 60, 0.0, delhi()).is_err());
        assert!(Moment::new(2023, 1, 1, 0, 0, 15.0, delhi()).is_err());
        assert!(Moment::new(2023, 1, 1, 0, 0, f64::NAN, delhi()).is_err());
    }

    #[test]
    fn rejects_bad_location() {
        let bad_lat = GeoLocation::new(91.0, 0.0);
        let bad_lon = GeoLocation::new(0.0, f64::INFINITY);
        assert!(matches!(
            Moment::new(2023, 1, 1, 0, 0, 0.0, bad_lat),
            Err(EphemerisError::InvalidLocation(_))
        ));
        assert!(matches!(
            Moment::new(2023, 1, 1, 0, 0, 0.0, bad_lon),
            Err(EphemerisError::InvalidLocation(_))
        ));
    }

    #[test]
    fn plus_minutes_crosses_midnight_and_month() {
        let m = Moment::new(2024, 1, 31, 23, 50, 5.5, delhi()).unwrap();
        let later = m.plus_minutes(20).unwrap();
        assert_eq!((later.year, later.month, later.day), (2024, 2, 1));
        assert_eq!((later.hour, later.minute), (0, 10));
        assert!((later.utc_offset_hours - 5.5).abs() < 1e-12);
        let dt = (later.days_since_j2000() - m.days_since_j2000()) * 1440.0;
        assert!((dt - 20.0).abs() < 1e-6);
    }

    #[test]
    fn datetime_round_trip() {
        let m = Moment::new(2023, 6, 15, 19, 30, 5.5, delhi())
            .unwrap()
            .with_ayanamsa(Ayanamsa::Raman);
        let dt = m.local_datetime().unwrap();
        assert_eq!(dt.to_rfc3339(), "2023-06-15T19:30:00+05:30");
        let back = Moment::from_datetime(dt, m.location())
            .unwrap()
            .with_ayanamsa(Ayanamsa::Raman);
        assert_eq!(back, m);
    }
}
