//! Option lists and text state backing a year/month/day date picker.
//!
//! The picker edits dates as three free-text fields; [`DateParts`] holds them
//! until they form a complete date that converts into a [`CalendarDate`].

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, CalendarError, Day, MAX_YEAR, MONTHS_OF_YEAR, Month, Year};

/// How month options are labelled, derived from a display format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthLabelStyle {
    /// `01` .. `12`
    Numeric,
    /// `January` .. `December`
    Full,
    /// `Jan` .. `Dec`
    Short,
}

impl MonthLabelStyle {
    /// `MMMM` selects full names, `MMM` short names, `MM` numbers.
    /// Formats without a month token fall back to short names.
    pub fn from_format(format: &str) -> Self {
        if format.contains("MMMM") {
            Self::Full
        } else if format.contains("MMM") {
            Self::Short
        } else if format.contains("MM") {
            Self::Numeric
        } else {
            Self::Short
        }
    }
}

/// Month options for a picker rendering dates with `format`
pub fn month_labels(format: &str) -> Vec<String> {
    let style = MonthLabelStyle::from_format(format);
    MONTHS_OF_YEAR
        .iter()
        .map(|m| match style {
            MonthLabelStyle::Numeric => format!("{:02}", m.value + 1),
            MonthLabelStyle::Full => m.name.to_owned(),
            MonthLabelStyle::Short => m.short_name.to_owned(),
        })
        .collect()
}

/// Day options `01` .. `31`
pub fn day_labels() -> Vec<String> {
    (1..=31_u8).map(|d| format!("{d:02}")).collect()
}

/// `count` consecutive years starting at `first_year`, cut off at `MAX_YEAR`
pub fn year_labels(first_year: u16, count: u16) -> Vec<String> {
    (first_year..=MAX_YEAR)
        .take(usize::from(count))
        .map(|y| y.to_string())
        .collect()
}

/// Case-insensitive match against full and short month names
fn month_from_name(name: &str) -> Option<Month> {
    MONTHS_OF_YEAR
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name) || m.short_name.eq_ignore_ascii_case(name))
        .and_then(|m| Month::new(m.value).ok())
}

/// The three text fields of a date picker, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateParts {
    pub year:  String,
    pub month: String,
    pub day:   String,
}

impl DateParts {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year:  year.into(),
            month: month.into(),
            day:   day.into(),
        }
    }

    /// True once every field holds non-blank text
    pub fn is_complete(&self) -> bool {
        [&self.year, &self.month, &self.day]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// `YYYY-M-D` joined from the fields exactly as typed
    pub fn to_iso_string(&self) -> String {
        format!("{}-{}-{}", self.year.trim(), self.month.trim(), self.day.trim())
    }

    fn parse_number<T: std::str::FromStr>(field: &str) -> Result<T, CalendarError> {
        field
            .parse::<T>()
            .map_err(|_| CalendarError::InvalidFormat(field.to_owned()))
    }
}

impl TryFrom<&DateParts> for CalendarDate {
    type Error = CalendarError;

    /// Month may be a 1-based number or a full/short English name
    fn try_from(parts: &DateParts) -> Result<Self, Self::Error> {
        if !parts.is_complete() {
            return Err(CalendarError::EmptyInput);
        }

        let year = Year::new(DateParts::parse_number::<u16>(parts.year.trim())?)?;
        let month_text = parts.month.trim();
        let month = match month_from_name(month_text) {
            Some(month) => month,
            None => Month::from_number(DateParts::parse_number::<u8>(month_text)?)?,
        };
        let day = Day::new(DateParts::parse_number::<u8>(parts.day.trim())?, year, month)?;
        Ok(Self::new(year, month, day))
    }
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        Self {
            year:  format!("{:04}", date.year()),
            month: format!("{:02}", date.month_typed().number()),
            day:   format!("{:02}", date.day()),
        }
    }
}
