use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Hours in a Thebian day.
pub const DEFAULT_DAY_LENGTH: f64 = 20.0;

/// Tracks colony time as an hour within the current day plus a day counter.
///
/// The hour always stays in `[0, day_length)`; advancing past the end of a
/// day rolls the surplus into whole days.
#[derive(Debug, Clone, PartialEq)]
pub struct ColonyClock {
    hour: f64,
    day: u32,
    day_length: f64,
}

impl Default for ColonyClock {
    fn default() -> Self {
        Self {
            hour: 0.0,
            day: 0,
            day_length: DEFAULT_DAY_LENGTH,
        }
    }
}

impl ColonyClock {
    /// Create a clock at day 0, hour 0 with the given day length.
    pub fn new(day_length: f64) -> CoreResult<Self> {
        if !day_length.is_finite() || day_length <= 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "day length must be positive, got {day_length}"
            )));
        }
        Ok(Self {
            hour: 0.0,
            day: 0,
            day_length,
        })
    }

    /// Current hour within the day.
    pub fn hour(&self) -> f64 {
        self.hour
    }

    /// Number of whole days elapsed.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Hours per day.
    pub fn day_length(&self) -> f64 {
        self.day_length
    }

    /// Advance by `hours`. Returns `true` when at least one new day began.
    ///
    /// Negative or non-finite values are rejected and leave the clock as it was.
    pub fn advance(&mut self, hours: f64) -> CoreResult<bool> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "cannot advance the clock by {hours} hours"
            )));
        }

        self.hour += hours;
        if self.hour < self.day_length {
            return Ok(false);
        }

        let days = (self.hour / self.day_length).floor();
        self.day = self.day.saturating_add(days as u32);
        self.hour %= self.day_length;
        tracing::info!(day = self.day, hour = self.hour, "new colony day");
        Ok(true)
    }

    /// Set the hour directly (debug tooling).
    pub fn set_hour(&mut self, hour: f64) -> CoreResult<()> {
        if !hour.is_finite() || hour < 0.0 || hour >= self.day_length {
            return Err(CoreError::InvalidArgument(format!(
                "hour must be in 0..{}, got {hour}",
                self.day_length
            )));
        }
        self.hour = hour;
        Ok(())
    }

    /// Set the day counter directly (debug tooling).
    pub fn set_day(&mut self, day: u32) {
        self.day = day;
    }

    /// Whether the current hour lies in the half-open window `[start, end)`.
    pub fn is_between(&self, start: f64, end: f64) -> bool {
        start <= self.hour && self.hour < end
    }
}

impl fmt::Display for ColonyClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = (self.hour * 60.0).round() as u32;
        write!(f, "Day {}, {:02}:{:02}", self.day, minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn clock_at(hour: f64) -> ColonyClock {
        let mut clock = ColonyClock::default();
        clock.set_hour(hour).unwrap();
        clock
    }

    #[test]
    fn starts_at_midnight_day_zero() {
        let clock = ColonyClock::default();
        assert_eq!(clock.hour(), 0.0);
        assert_eq!(clock.day(), 0);
        assert_eq!(clock.day_length(), 20.0);
    }

    #[test]
    fn advance_within_day() {
        let mut clock = clock_at(3.0);
        assert!(!clock.advance(0.5).unwrap());
        assert_eq!(clock.hour(), 3.5);
        assert_eq!(clock.day(), 0);
    }

    #[test]
    fn advance_wraps_past_day_end() {
        let mut clock = clock_at(19.0);
        assert!(clock.advance(2.0).unwrap());
        assert_eq!(clock.hour(), 1.0);
        assert_eq!(clock.day(), 1);
    }

    #[test]
    fn advance_full_day_keeps_hour() {
        let mut clock = clock_at(5.0);
        assert!(clock.advance(20.0).unwrap());
        assert_eq!(clock.hour(), 5.0);
        assert_eq!(clock.day(), 1);
    }

    #[test]
    fn advance_several_days() {
        let mut clock = clock_at(10.0);
        assert!(clock.advance(45.0).unwrap());
        assert_eq!(clock.hour(), 15.0);
        assert_eq!(clock.day(), 2);
    }

    #[test]
    fn negative_advance_rejected_and_unchanged() {
        let mut clock = clock_at(7.5);
        assert!(clock.advance(-1.0).is_err());
        assert_eq!(clock.hour(), 7.5);
        assert_eq!(clock.day(), 0);
    }

    #[test]
    fn non_finite_advance_rejected() {
        let mut clock = ColonyClock::default();
        assert!(clock.advance(f64::NAN).is_err());
        assert!(clock.advance(f64::INFINITY).is_err());
        assert_eq!(clock, ColonyClock::default());
    }

    #[test]
    fn set_hour_validates_range() {
        let mut clock = ColonyClock::default();
        assert!(clock.set_hour(20.0).is_err());
        assert!(clock.set_hour(-0.5).is_err());
        assert!(clock.set_hour(19.5).is_ok());
    }

    #[test]
    fn invalid_day_length_rejected() {
        assert!(ColonyClock::new(0.0).is_err());
        assert!(ColonyClock::new(-3.0).is_err());
        assert!(ColonyClock::new(24.0).is_ok());
    }

    #[test]
    fn window_is_half_open() {
        assert!(clock_at(15.0).is_between(15.0, 20.0));
        assert!(clock_at(19.5).is_between(15.0, 20.0));
        assert!(!clock_at(14.5).is_between(15.0, 20.0));
    }

    #[test]
    fn display_format() {
        let mut clock = clock_at(9.5);
        clock.set_day(2);
        assert_eq!(clock.to_string(), "Day 2, 09:30");
    }

    #[test]
    fn display_carries_rounded_minutes_into_the_hour() {
        assert_eq!(clock_at(9.9999).to_string(), "Day 0, 10:00");
        assert_eq!(clock_at(0.0).to_string(), "Day 0, 00:00");
    }

    proptest! {
        #[test]
        fn cumulative_advances_match_arithmetic(steps in prop::collection::vec(0u32..120, 0..40)) {
            let mut clock = ColonyClock::default();
            let mut total_half_hours = 0u32;
            for step in &steps {
                clock.advance(f64::from(*step) * 0.5).unwrap();
                total_half_hours += step;
            }
            let total = f64::from(total_half_hours) * 0.5;
            prop_assert_eq!(clock.day(), (total / 20.0).floor() as u32);
            prop_assert_eq!(clock.hour(), total % 20.0);
        }

        #[test]
        fn hour_stays_in_range(start in 0u32..40, step in 0u32..400) {
            let mut clock = clock_at(f64::from(start) * 0.5);
            clock.advance(f64::from(step) * 0.25).unwrap();
            prop_assert!(clock.hour() >= 0.0 && clock.hour() < 20.0);
        }

        #[test]
        fn negative_always_rejected(h in -1000.0f64..-0.0001) {
            let mut clock = clock_at(4.0);
            prop_assert!(clock.advance(h).is_err());
            prop_assert_eq!(clock.hour(), 4.0);
            prop_assert_eq!(clock.day(), 0);
        }
    }
}
