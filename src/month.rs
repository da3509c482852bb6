use serde::Serialize;

use crate::{
    CalendarDate, CalendarError, DayOfWeek,
    types::{Month, Weekday, Year, days_in_month},
};

/// Descriptor of one month in one specific year.
///
/// `days` is already leap-corrected for `year`. Values are immutable; a new
/// descriptor replaces the old one whenever the month changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthInfo {
    name:       &'static str,
    short_name: &'static str,
    days:       u8,
    value:      u8,
    year:       u16,
}

impl MonthInfo {
    pub fn new(year: Year, month: Month) -> Self {
        let info = month.info();
        Self {
            name:       info.name,
            short_name: info.short_name,
            days:       days_in_month(year.get(), month),
            value:      month.index(),
            year:       year.get(),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn short_name(&self) -> &'static str {
        self.short_name
    }

    /// Number of days, 29 for February of a leap year
    pub const fn days(&self) -> u8 {
        self.days
    }

    /// Zero-based month index (0 = January)
    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    fn typed(&self) -> (Year, Month) {
        // Only ever built from validated parts in `new`
        match (Year::new(self.year), Month::new(self.value)) {
            (Ok(year), Ok(month)) => (year, month),
            _ => unreachable!("MonthInfo holds a validated year and month"),
        }
    }

    /// The month before this one, wrapping the year at January.
    /// Returns None before January of `MIN_YEAR`.
    pub fn previous(&self) -> Option<Self> {
        let (year, month) = self.typed();
        let (month, wrapped) = month.pred();
        let year = if wrapped { year.pred()? } else { year };
        Some(Self::new(year, month))
    }

    /// The month after this one, wrapping the year at December.
    /// Returns None after December of `MAX_YEAR`.
    pub fn next(&self) -> Option<Self> {
        let (year, month) = self.typed();
        let (month, wrapped) = month.succ();
        let year = if wrapped { year.succ()? } else { year };
        Some(Self::new(year, month))
    }

    pub fn first_date(&self) -> CalendarDate {
        let (year, month) = self.typed();
        CalendarDate::first_of(year, month)
    }

    /// Every day of the month in order
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        (1..=self.days).filter_map(move |day| CalendarDate::from_parts(self.year, self.value, day).ok())
    }

    /// Weekday of the first day of the month
    pub fn first_weekday(&self) -> Weekday {
        self.first_date().weekday()
    }

    /// Weekday of the last day of the month
    pub fn last_weekday(&self) -> Weekday {
        let offset = (self.first_weekday().index() + self.days - 1) % 7;
        match Weekday::from_index(offset) {
            Ok(weekday) => weekday,
            Err(_) => unreachable!("offset is reduced modulo 7"),
        }
    }
}

/// Static month descriptor for `index` (0 = January) with the day count
/// corrected for `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `index` > 11 and
/// `CalendarError::InvalidYear` if `year` is out of range.
pub fn lookup_month(index: u8, year: u16) -> Result<MonthInfo, CalendarError> {
    let month = Month::new(index)?;
    let year = Year::new(year)?;
    Ok(MonthInfo::new(year, month))
}

/// Static weekday descriptor for `index` (0 = Sunday).
///
/// # Errors
/// Returns `CalendarError::InvalidWeekday` if `index` > 6.
pub fn lookup_day(index: u8) -> Result<&'static DayOfWeek, CalendarError> {
    Ok(Weekday::from_index(index)?.info())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_month_leap_correction() {
        assert_eq!(lookup_month(1, 2024).unwrap().days(), 29);
        assert_eq!(lookup_month(1, 2023).unwrap().days(), 28);
        assert_eq!(lookup_month(1, 1900).unwrap().days(), 28);
        assert_eq!(lookup_month(1, 2000).unwrap().days(), 29);
        assert_eq!(lookup_month(0, 2024).unwrap().days(), 31);
        assert_eq!(lookup_month(10, 2024).unwrap().days(), 30);
    }

    #[test]
    fn test_lookup_month_fields() {
        let info = lookup_month(8, 2021).unwrap();
        assert_eq!(info.name(), "September");
        assert_eq!(info.short_name(), "Sep");
        assert_eq!(info.value(), 8);
        assert_eq!(info.year(), 2021);
    }

    #[test]
    fn test_lookup_month_rejects_bad_index() {
        assert!(matches!(lookup_month(12, 2024), Err(CalendarError::InvalidMonth(12))));
        assert!(matches!(lookup_month(0, 0), Err(CalendarError::InvalidYear(0))));
    }

    #[test]
    fn test_lookup_day() {
        let sunday = lookup_day(0).unwrap();
        assert_eq!(sunday.name, "Sunday");
        assert_eq!(sunday.short_name, "Sun");
        assert_eq!(lookup_day(6).unwrap().name, "Saturday");
        assert!(matches!(lookup_day(7), Err(CalendarError::InvalidWeekday(7))));
    }

    #[test]
    fn test_neighbours_wrap_year() {
        let january = lookup_month(0, 2025).unwrap();
        let december = january.previous().unwrap();
        assert_eq!((december.value(), december.year()), (11, 2024));
        assert_eq!(december.next().unwrap(), january);

        let january_2024 = lookup_month(0, 2024).unwrap();
        let february = january_2024.next().unwrap();
        assert_eq!(february.days(), 29, "neighbour uses its own leap correction");
    }

    #[test]
    fn test_neighbours_stop_at_supported_range() {
        assert_eq!(lookup_month(0, 1).unwrap().previous(), None);
        assert_eq!(lookup_month(11, 9999).unwrap().next(), None);
        assert!(lookup_month(1, 1).unwrap().previous().is_some());
    }

    #[test]
    fn test_first_and_last_weekday() {
        let february = lookup_month(1, 2024).unwrap();
        assert_eq!(february.first_weekday(), Weekday::Thursday);
        assert_eq!(february.last_weekday(), Weekday::Thursday);

        let september = lookup_month(8, 2024).unwrap();
        assert_eq!(september.first_weekday(), Weekday::Sunday);
        assert_eq!(september.last_weekday(), Weekday::Monday);
    }

    #[test]
    fn test_dates_cover_month() {
        let february = lookup_month(1, 2024).unwrap();
        let dates: Vec<_> = february.dates().collect();
        assert_eq!(dates.len(), 29);
        assert_eq!(dates[0].to_string(), "02/01/2024");
        assert_eq!(dates[28].to_string(), "02/29/2024");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(lookup_month(1, 2024).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "February",
                "short_name": "Feb",
                "days": 29,
                "value": 1,
                "year": 2024
            })
        );
    }
}
