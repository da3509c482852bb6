use serde::Serialize;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Highest zero-based month index (December)
pub const MAX_MONTH_INDEX: u8 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Zero-based index of January
pub const JANUARY: u8 = 0;
/// Zero-based index of February
pub const FEBRUARY: u8 = 1;
/// Zero-based index of December
pub const DECEMBER: u8 = 11;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Number of columns in a month grid
pub const DAYS_PER_WEEK: u8 = 7;

/// Weekday index of Saturday, the last grid column
pub const LAST_WEEKDAY: u8 = 6;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator of the `MM/DD/YYYY` display format
pub const DISPLAY_SEPARATOR: char = '/';

/// Static descriptor of a day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayOfWeek {
    pub name:       &'static str,
    pub short_name: &'static str,
    /// 0 = Sunday .. 6 = Saturday, equal to the position in [`DAYS_OF_WEEK`]
    pub value:      u8,
}

/// Static descriptor of a month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthOfYear {
    pub name:       &'static str,
    pub short_name: &'static str,
    /// Non-leap day count; February must be corrected for leap years
    pub base_days:  u8,
    /// 0 = January .. 11 = December, equal to the position in [`MONTHS_OF_YEAR`]
    pub value:      u8,
}

const fn day(name: &'static str, short_name: &'static str, value: u8) -> DayOfWeek {
    DayOfWeek {
        name,
        short_name,
        value,
    }
}

const fn month(
    name: &'static str,
    short_name: &'static str,
    base_days: u8,
    value: u8,
) -> MonthOfYear {
    MonthOfYear {
        name,
        short_name,
        base_days,
        value,
    }
}

pub static DAYS_OF_WEEK: [DayOfWeek; 7] = [
    day("Sunday", "Sun", 0),
    day("Monday", "Mon", 1),
    day("Tuesday", "Tue", 2),
    day("Wednesday", "Wed", 3),
    day("Thursday", "Thu", 4),
    day("Friday", "Fri", 5),
    day("Saturday", "Sat", 6),
];

pub static MONTHS_OF_YEAR: [MonthOfYear; 12] = [
    month("January", "Jan", 31, 0),
    month("February", "Feb", 28, 1),
    month("March", "Mar", 31, 2),
    month("April", "Apr", 30, 3),
    month("May", "May", 31, 4),
    month("June", "Jun", 30, 5),
    month("July", "Jul", 31, 6),
    month("August", "Aug", 31, 7),
    month("September", "Sep", 30, 8),
    month("October", "Oct", 31, 9),
    month("November", "Nov", 30, 10),
    month("December", "Dec", 31, 11),
];
