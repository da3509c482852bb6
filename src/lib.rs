mod calendar;
mod consts;
mod month;
pub mod picker;
mod prelude;
mod types;

pub use calendar::{CalendarEngine, Direction};
pub use consts::*;
pub use month::{MonthInfo, lookup_day, lookup_month};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year, weekday_of};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error type for every calendar operation.
///
/// All variants describe an invalid argument: a value that does not name a
/// real calendar date, or a transition that would leave the supported range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),
    #[error("Invalid month: {0}")]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[error("Invalid weekday: {0} (must be 0-6)")]
    InvalidWeekday(u8),
    #[error("Invalid month step: {0} (must be -1 or 1)")]
    InvalidDirection(i8),
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
    /// A neighbouring month of the requested active month is outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Month {year:04}-{month:02} has no neighbouring month within the supported years")]
    OutOfRange { year: u16, month: u8 },
}

impl CalendarError {
    /// Every calendar error is caused by a bad argument; none are transient.
    pub const fn is_invalid_argument(&self) -> bool {
        true
    }
}

/// A validated calendar day.
/// The weekday is always derived from the year, month and day, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "month.number()", "day.get()", "year.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Builds a date from already validated parts
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Builds a date from a year, a zero-based month index and a day of month
    ///
    /// # Errors
    /// Returns `CalendarError` if any component is out of range, including a
    /// day past the leap-corrected end of the month.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::new(year, month, day))
    }

    /// Today's date on the local wall clock, with the time of day discarded
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the host clock is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_now() -> Result<Self, CalendarError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    /// First day of the given month
    pub fn first_of(year: Year, month: Month) -> Self {
        Self::new(year, month, types::first_day())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Zero-based month index (0 = January)
    pub const fn month(&self) -> u8 {
        self.month.index()
    }

    /// Day of month (1-based)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub fn weekday(&self) -> Weekday {
        weekday_of(self.year, self.month, self.day)
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Descriptor of this date's month, leap-corrected for its year
    pub fn month_info(&self) -> MonthInfo {
        MonthInfo::new(self.year, self.month)
    }

    pub fn weekday_info(&self) -> &'static DayOfWeek {
        self.weekday().info()
    }

    /// Same month and day in another year
    ///
    /// # Errors
    /// Returns `CalendarError` if the year is invalid or the day does not
    /// exist in that year (29 February outside a leap year).
    pub fn with_year(&self, year: u16) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let day = Day::new(self.day.get(), year, self.month)?;
        Ok(Self::new(year, self.month, day))
    }

    /// Zero-padded `MM/DD/YYYY` rendering
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, CalendarError> {
        s.parse::<T>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses the `MM/DD/YYYY` display format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DISPLAY_SEPARATOR).map(str::trim).collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected MM{DISPLAY_SEPARATOR}DD{DISPLAY_SEPARATOR}YYYY, found {trimmed}"
            )));
        };

        let month_u8 = Self::parse_component::<u8>(month)?;
        let day_u8 = Self::parse_component::<u8>(day)?;
        let year_u16 = Self::parse_component::<u16>(year)?;

        let year = Year::new(year_u16)?;
        let month = Month::from_number(month_u8)?;
        let day = Day::new(day_u8, year, month)?;
        Ok(Self::new(year, month, day))
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = Year::try_from(date.year())?;
        // chrono guarantees month0 < 12 and day <= 31
        let month = Month::new(date.month0() as u8)?;
        let day = Day::new(date.day() as u8, year, month)?;
        Ok(Self::new(year, month, day))
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        match Self::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month_typed().number()),
            u32::from(date.day()),
        ) {
            Some(naive) => naive,
            None => unreachable!("CalendarDate is always a real date"),
        }
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_derives_weekday() {
        let date = CalendarDate::from_parts(2024, 1, 1).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
        assert_eq!(date.weekday(), Weekday::Thursday);
        assert_eq!(date.weekday_info().short_name, "Thu");
        assert_eq!(date.month_info().name(), "February");
    }

    #[test]
    fn test_from_parts_rejects_impossible_dates() {
        assert!(matches!(
            CalendarDate::from_parts(2023, 1, 29),
            Err(CalendarError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(CalendarDate::from_parts(2024, 1, 29).is_ok());
        assert!(matches!(
            CalendarDate::from_parts(2024, 12, 1),
            Err(CalendarError::InvalidMonth(12))
        ));
        assert!(matches!(
            CalendarDate::from_parts(2024, 3, 31),
            Err(CalendarError::InvalidDay { .. })
        ));
        assert!(matches!(
            CalendarDate::from_parts(0, 0, 1),
            Err(CalendarError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_display_zero_padded() {
        let date = CalendarDate::from_parts(2024, 2, 7).unwrap();
        assert_eq!(date.to_display_string(), "03/07/2024");
        let date = CalendarDate::from_parts(987, 11, 25).unwrap();
        assert_eq!(date.to_string(), "12/25/0987");
    }

    #[test]
    fn test_parse_display_format() {
        let date = "03/07/2024".parse::<CalendarDate>().unwrap();
        assert_eq!(date, CalendarDate::from_parts(2024, 2, 7).unwrap());

        let date = " 3 / 7 / 2024 ".parse::<CalendarDate>().unwrap();
        assert_eq!(date.to_string(), "03/07/2024");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<CalendarDate>(), Err(CalendarError::EmptyInput)));
        assert!(matches!(
            "2024-03-07".parse::<CalendarDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "03/2024".parse::<CalendarDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "ab/07/2024".parse::<CalendarDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "13/01/2024".parse::<CalendarDate>(),
            Err(CalendarError::InvalidMonth(13))
        ));
        assert!(matches!(
            "02/29/2023".parse::<CalendarDate>(),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_with_year() {
        let leap_day = CalendarDate::from_parts(2024, 1, 29).unwrap();
        assert!(matches!(
            leap_day.with_year(2023),
            Err(CalendarError::InvalidDay { .. })
        ));
        let moved = leap_day.with_year(2028).unwrap();
        assert_eq!(moved.to_string(), "02/29/2028");
        assert_eq!(moved.weekday(), Weekday::Tuesday);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = CalendarDate::from_parts(2023, 11, 31).unwrap();
        let b = CalendarDate::from_parts(2024, 0, 1).unwrap();
        let c = CalendarDate::from_parts(2024, 0, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_naive_date_conversions() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let date = CalendarDate::try_from(naive).unwrap();
        assert_eq!(date.to_string(), "02/29/2024");
        assert_eq!(NaiveDate::from(date), naive);

        let too_early = NaiveDate::from_ymd_opt(0, 6, 1).unwrap();
        assert!(matches!(
            CalendarDate::try_from(too_early),
            Err(CalendarError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_from_now_matches_local_clock() {
        let before = chrono::Local::now().date_naive();
        let today = CalendarDate::from_now().unwrap();
        let after = chrono::Local::now().date_naive();
        let naive = NaiveDate::from(today);
        assert!(before <= naive && naive <= after);
    }

    #[test]
    fn test_serde_as_display_string() {
        let date = CalendarDate::from_parts(2024, 2, 7).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"03/07/2024\"");
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
        assert!(serde_json::from_str::<CalendarDate>("\"02/30/2024\"").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CalendarDate::from_parts(2023, 1, 29).unwrap_err();
        assert_eq!(err.to_string(), "Invalid day 29 for month 2023-02");
        assert!(err.is_invalid_argument());
        assert_eq!(
            CalendarError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
    }
}
