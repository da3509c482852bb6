use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_OF_WEEK, DayOfWeek, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH_INDEX, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTHS_OF_YEAR,
    MonthOfYear,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        let non_zero =
            NonZeroU16::new(value).ok_or(CalendarError::InvalidYear(i32::from(value)))?;
        if value > MAX_YEAR {
            return Err(CalendarError::InvalidYear(i32::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// The following year, or `None` past `MAX_YEAR`
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }

    /// The preceding year, or `None` before `MIN_YEAR`
    pub fn pred(self) -> Option<Self> {
        if self.get() <= MIN_YEAR {
            return None;
        }
        Self::new(self.get() - 1).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let narrowed = u16::try_from(value).map_err(|_| CalendarError::InvalidYear(value))?;
        Self::new(narrowed)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A zero-based month index guaranteed to be in the range `0..=11`.
///
/// The external API of [`crate::CalendarEngine`] speaks 1-based month
/// numbers; [`Month::from_number`] converts at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Creates a new Month from a zero-based index
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the index is > 11.
    pub const fn new(index: u8) -> Result<Self, CalendarError> {
        if index > MAX_MONTH_INDEX {
            return Err(CalendarError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// Creates a new Month from a 1-based month number (1 = January)
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` with the caller's value if it is
    /// outside `1..=12`.
    pub const fn from_number(number: u8) -> Result<Self, CalendarError> {
        if number == 0 || number > MAX_MONTH_INDEX + 1 {
            return Err(CalendarError::InvalidMonth(number));
        }
        Ok(Self(number - 1))
    }

    /// Zero-based index (0 = January)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based month number (1 = January)
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    pub fn info(self) -> &'static MonthOfYear {
        &MONTHS_OF_YEAR[usize::from(self.0)]
    }

    /// The following month and whether the year wrapped
    pub const fn succ(self) -> (Self, bool) {
        if self.0 == DECEMBER {
            (Self(JANUARY), true)
        } else {
            (Self(self.0 + 1), false)
        }
    }

    /// The preceding month and whether the year wrapped
    pub const fn pred(self) -> (Self, bool) {
        if self.0 == JANUARY {
            (Self(DECEMBER), true)
        } else {
            (Self(self.0 - 1), false)
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the leap-corrected length of the month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidDay {
            year:  year.get(),
            month: month.number(),
            day:   value,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year.get(), month) {
            return Err(invalid());
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, numbered from Sunday like the month grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if the index is > 6.
    pub const fn from_index(index: u8) -> Result<Self, CalendarError> {
        Ok(match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => return Err(CalendarError::InvalidWeekday(index)),
        })
    }

    /// 0 = Sunday .. 6 = Saturday
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn info(self) -> &'static DayOfWeek {
        &DAYS_OF_WEEK[usize::from(self.index())]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Leap-corrected day count of `month` in `year`
pub fn days_in_month(year: u16, month: Month) -> u8 {
    if month.index() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        month.info().base_days
    }
}

/// Month offsets for Sakamoto's day-of-week method
const WEEKDAY_OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Proleptic Gregorian day of the week for a validated date
pub fn weekday_of(year: Year, month: Month, day: Day) -> Weekday {
    // January and February count as months of the previous year
    let y = u32::from(year.get()) - u32::from(month.index() < 2);
    let index = (y + y / 4 - y / 100 + y / 400
        + WEEKDAY_OFFSETS[usize::from(month.index())]
        + u32::from(day.get()))
        % 7;

    match Weekday::from_index(index as u8) {
        Ok(weekday) => weekday,
        Err(_) => unreachable!("index is reduced modulo 7"),
    }
}

/// First valid day of any month
pub(crate) fn first_day() -> Day {
    match NonZeroU8::new(MIN_DAY) {
        Some(d) => Day(d),
        None => unreachable!("MIN_DAY is non-zero"),
    }
}
