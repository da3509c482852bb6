use log::{debug, trace};

use crate::{CalendarDate, CalendarError, DAYS_PER_WEEK, LAST_WEEKDAY, MonthInfo};

/// Direction of a one-month step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl TryFrom<i8> for Direction {
    type Error = CalendarError;

    /// Accepts the `-1` / `+1` step convention
    fn try_from(step: i8) -> Result<Self, Self::Error> {
        match step {
            -1 => Ok(Self::Backward),
            1 => Ok(Self::Forward),
            _ => Err(CalendarError::InvalidDirection(step)),
        }
    }
}

/// Everything derived from the active date, rebuilt as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct View {
    active_date:    CalendarDate,
    active_month:   MonthInfo,
    previous_month: MonthInfo,
    next_month:     MonthInfo,
    grid_cells:     Vec<CalendarDate>,
}

impl View {
    fn build(active_date: CalendarDate) -> Result<Self, CalendarError> {
        let active_month = active_date.month_info();
        let out_of_range = || CalendarError::OutOfRange {
            year:  active_month.year(),
            month: active_date.month_typed().number(),
        };
        let previous_month = active_month.previous().ok_or_else(out_of_range)?;
        let next_month = active_month.next().ok_or_else(out_of_range)?;
        let grid_cells = build_grid(&previous_month, &active_month, &next_month);

        Ok(Self {
            active_date,
            active_month,
            previous_month,
            next_month,
            grid_cells,
        })
    }
}

/// Lays out the active month on a Sunday-first grid of complete weeks,
/// padded with the tail of the previous month and the head of the next.
fn build_grid(previous: &MonthInfo, active: &MonthInfo, next: &MonthInfo) -> Vec<CalendarDate> {
    // No leading cells when the previous month already ends on Saturday
    let leading = if previous.last_weekday().index() < LAST_WEEKDAY {
        active.first_weekday().index()
    } else {
        0
    };
    // A negative count falls back to six trailing days
    let trailing = LAST_WEEKDAY
        .checked_sub(active.last_weekday().index())
        .unwrap_or(LAST_WEEKDAY);

    trace!(
        "grid for {} {}: {leading} leading, {} days, {trailing} trailing",
        active.name(),
        active.year(),
        active.days()
    );

    let mut cells =
        Vec::with_capacity(usize::from(leading) + usize::from(active.days()) + usize::from(trailing));
    cells.extend(
        previous
            .dates()
            .skip(usize::from(previous.days().saturating_sub(leading))),
    );
    cells.extend(active.dates());
    cells.extend(next.dates().take(usize::from(trailing)));

    debug_assert_eq!(cells.len() % usize::from(DAYS_PER_WEEK), 0);
    cells
}

/// Month-view state machine: a fixed "today" plus a navigable active date
/// with its derived month descriptors and grid cells.
///
/// Every mutator validates first and then swaps in a fully rebuilt view, so a
/// failed call leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEngine {
    current_date: CalendarDate,
    view:         View,
}

impl CalendarEngine {
    /// Engine positioned on today's local date
    ///
    /// # Errors
    /// Returns `CalendarError` if the host clock is outside the supported years.
    pub fn new() -> Result<Self, CalendarError> {
        Self::with_today(CalendarDate::from_now()?)
    }

    /// Engine with an explicit "today", used as both current and active date
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` for January of year 1 or December of year 9999.
    pub fn with_today(today: CalendarDate) -> Result<Self, CalendarError> {
        let view = View::build(today)?;
        debug!("calendar initialised at {today}");
        Ok(Self {
            current_date: today,
            view,
        })
    }

    fn commit(&mut self, active_date: CalendarDate) -> Result<(), CalendarError> {
        let view = View::build(active_date)?;
        debug!(
            "active date {} -> {active_date} ({} grid cells)",
            self.view.active_date,
            view.grid_cells.len()
        );
        self.view = view;
        Ok(())
    }

    /// Moves the active date to the first day of the adjacent month
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` when the step would leave the supported years.
    pub fn navigate_month(&mut self, direction: Direction) -> Result<(), CalendarError> {
        let target = match direction {
            Direction::Backward => self.view.previous_month,
            Direction::Forward => self.view.next_month,
        };
        self.commit(target.first_date())
    }

    /// Replaces the active date; `month` is 1-based (1 = January)
    ///
    /// # Errors
    /// Returns `CalendarError` if the triple is not a real calendar date.
    pub fn jump_to(&mut self, year: u16, month: u8, day: u8) -> Result<(), CalendarError> {
        let month = crate::Month::from_number(month)?;
        self.commit(CalendarDate::from_parts(year, month.index(), day)?)
    }

    /// Replaces the active date from its `MM/DD/YYYY` rendering
    ///
    /// # Errors
    /// Returns `CalendarError` if the text is malformed or not a real date.
    pub fn set_active_date(&mut self, date: &str) -> Result<(), CalendarError> {
        self.commit(date.parse()?)
    }

    /// Changes only the year of the active date, keeping month and day
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` when the day does not exist in the
    /// new year (29 February); the active date is not clamped.
    pub fn set_active_year(&mut self, year: u16) -> Result<(), CalendarError> {
        self.commit(self.view.active_date.with_year(year)?)
    }

    /// Today, as captured at construction
    pub const fn current_date(&self) -> &CalendarDate {
        &self.current_date
    }

    pub fn current_month(&self) -> MonthInfo {
        self.current_date.month_info()
    }

    pub const fn active_date(&self) -> &CalendarDate {
        &self.view.active_date
    }

    pub const fn active_month(&self) -> &MonthInfo {
        &self.view.active_month
    }

    pub const fn previous_month(&self) -> &MonthInfo {
        &self.view.previous_month
    }

    pub const fn next_month(&self) -> &MonthInfo {
        &self.view.next_month
    }

    /// Grid cells in chronological order; always whole weeks
    pub fn grid_cells(&self) -> &[CalendarDate] {
        &self.view.grid_cells
    }

    /// Grid cells split into Sunday-first rows of seven
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDate]> {
        self.view.grid_cells.chunks_exact(usize::from(DAYS_PER_WEEK))
    }

    pub fn is_current(&self, date: &CalendarDate) -> bool {
        *date == self.current_date
    }

    pub fn is_active(&self, date: &CalendarDate) -> bool {
        *date == self.view.active_date
    }

    /// Whether a grid cell belongs to the active month rather than a neighbour
    pub fn is_in_active_month(&self, date: &CalendarDate) -> bool {
        date.year() == self.view.active_month.year() && date.month() == self.view.active_month.value()
    }
}
