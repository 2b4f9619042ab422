use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use super::RuleViolation;

/// Half-open booking window `[starts_at, ends_at)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Window {
    pub fn new(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<Self, RuleViolation> {
        if ends_at <= starts_at {
            return Err(RuleViolation::EmptyWindow);
        }
        if ends_at - starts_at < Duration::minutes(1) {
            return Err(RuleViolation::WindowTooShort);
        }
        Ok(Self { starts_at, ends_at })
    }

    /// Back-to-back windows do not overlap
    pub fn overlaps(&self, other: &Window) -> bool {
        self.starts_at < other.ends_at && other.starts_at < self.ends_at
    }

    pub fn seconds(&self) -> i64 {
        (self.ends_at - self.starts_at).num_seconds()
    }

    /// Pro-rated by the second, rounded to cents
    pub fn price(&self, price_per_hour: Decimal) -> Decimal {
        (price_per_hour * Decimal::from(self.seconds()) / Decimal::from(3600)).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use std::str::FromStr;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
    }

    fn at_sec(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, second).unwrap()
    }

    #[test]
    fn rejects_empty_and_inverted_windows() {
        assert_eq!(Window::new(at(10, 0), at(10, 0)), Err(RuleViolation::EmptyWindow));
        assert_eq!(Window::new(at(11, 0), at(10, 0)), Err(RuleViolation::EmptyWindow));
    }

    #[test]
    fn rejects_windows_under_a_minute() {
        assert_eq!(
            Window::new(at_sec(10, 0, 0), at_sec(10, 0, 59)),
            Err(RuleViolation::WindowTooShort)
        );
        assert!(Window::new(at_sec(10, 0, 0), at_sec(10, 1, 0)).is_ok());
    }

    #[test]
    fn partial_minutes_are_charged() {
        let window = Window::new(at_sec(10, 0, 0), at_sec(10, 1, 30)).unwrap();
        assert_eq!(window.price(Decimal::from_str("40.00").unwrap()), Decimal::from_str("1.00").unwrap());
    }

    #[rstest]
    #[case((9, 0), (10, 0), false)]
    #[case((9, 0), (10, 1), true)]
    #[case((10, 30), (11, 30), true)]
    #[case((11, 0), (12, 0), false)]
    #[case((8, 0), (13, 0), true)]
    fn overlap_against_ten_to_eleven(#[case] start: (u32, u32), #[case] end: (u32, u32), #[case] expected: bool) {
        let booked = Window::new(at(10, 0), at(11, 0)).unwrap();
        let candidate = Window::new(at(start.0, start.1), at(end.0, end.1)).unwrap();
        assert_eq!(booked.overlaps(&candidate), expected);
        assert_eq!(candidate.overlaps(&booked), expected);
    }

    #[test]
    fn price_is_prorated() {
        let rate = Decimal::from_str("40.00").unwrap();
        let window = Window::new(at(10, 0), at(11, 30)).unwrap();
        assert_eq!(window.price(rate), Decimal::from_str("60.00").unwrap());

        let odd = Window::new(at(10, 0), at(10, 20)).unwrap();
        assert_eq!(odd.price(Decimal::from_str("25.00").unwrap()), Decimal::from_str("8.33").unwrap());
    }
}
