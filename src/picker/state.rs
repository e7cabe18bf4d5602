use crate::dates;
use crate::entry::DateBuffer;
use thiserror::Error;
use time::{macros::date, Date, Duration};

/// Trigger label shown before anything has been typed or picked
const PLACEHOLDER: &str = "--/--/----";

/// Where the committed date came from, if anywhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Nothing typed, nothing committed
    Empty,
    /// A partial entry is in progress
    Typing,
    /// Committed from the typed entry (full entry or explicit confirm)
    Complete,
    /// Committed from the calendar grid
    Picked,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerInput {
    Digit(u8),
    Backspace,
    Confirm,
    PickCursor,
    Clear,
    Toggle,
    CursorBack,
    CursorForwards,
    CursorUp,
    CursorDown,
    MonthBackwards,
    MonthForwards,
    Today,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerResponse {
    Handled,
    Refused,
    Committed(Date),
    Cleared,
}

/// Pickable-date bounds.  Dates outside the range are grayed out on the
/// grid and refused as picks, but typed entries are never rejected by
/// them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DateRange {
    earliest: Date,
    latest: Date,
}

impl DateRange {
    pub(crate) const DEFAULT_EARLIEST: Date = date!(1900 - 01 - 01);

    pub(crate) fn new(earliest: Date, latest: Date) -> Result<DateRange, EmptyRangeError> {
        if earliest > latest {
            Err(EmptyRangeError(earliest, latest))
        } else {
            Ok(DateRange { earliest, latest })
        }
    }

    pub(crate) fn disables(&self, date: Date) -> bool {
        date < self.earliest || date > self.latest
    }

    // Both arguments are first-of-month dates.  A step that stays inside
    // the range's month span is allowed, as is one that moves back
    // towards it after the displayed month has drifted outside (a typed
    // preview is free to drift).
    fn step_allowed(&self, current: Date, target: Date) -> bool {
        let start = dates::first_of_month(self.earliest);
        let end = dates::first_of_month(self.latest);
        if target < start {
            target > current
        } else if target > end {
            target < current
        } else {
            true
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("empty date range: {0} is after {1}")]
pub(crate) struct EmptyRangeError(Date, Date);

/// The date-picker state machine.  One keystroke or pick event is one
/// `handle_input` call, and every transition mutates the buffer, the
/// committed selection, and the displayed month together before
/// returning, so observers never see them out of step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DatePicker {
    buffer: DateBuffer,
    phase: Phase,
    selected: Option<Date>,
    /// First day of the month the grid shows
    month: Date,
    cursor: Date,
    open: bool,
    range: DateRange,
    today: Date,
}

impl DatePicker {
    pub(crate) fn new(today: Date, range: DateRange) -> DatePicker {
        DatePicker {
            buffer: DateBuffer::new(),
            phase: Phase::Empty,
            selected: None,
            month: dates::first_of_month(today),
            cursor: today,
            open: false,
            range,
            today,
        }
    }

    /// Starts out with `date` already committed, as if it had been
    /// picked from the grid.
    pub(crate) fn with_selected(mut self, date: Date) -> DatePicker {
        self.selected = Some(date);
        self.buffer = DateBuffer::from_date(date);
        self.phase = Phase::Picked;
        self.show_month(date);
        self
    }

    pub(crate) fn selected_date(&self) -> Option<Date> {
        self.selected
    }

    pub(crate) fn displayed_month(&self) -> Date {
        self.month
    }

    pub(crate) fn cursor(&self) -> Date {
        self.cursor
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn range(&self) -> DateRange {
        self.range
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn buffer_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// Text for the panel's entry echo: the raw entry while it is
    /// partial, its normalized form once all ten characters are in.
    pub(crate) fn echo_text(&self) -> String {
        if self.buffer.is_full() {
            self.buffer.resolve(self.today).text
        } else {
            self.buffer.as_str().to_owned()
        }
    }

    /// Text for the trigger control: the in-progress entry while one is
    /// underway, the committed date once there is one, otherwise a
    /// placeholder.
    pub(crate) fn label(&self) -> String {
        if !self.buffer.is_empty() && !self.buffer.is_full() {
            self.buffer.as_str().to_owned()
        } else if let Some(date) = self.selected {
            dates::format_dmy(date)
        } else {
            PLACEHOLDER.to_owned()
        }
    }

    pub(crate) fn handle_input(&mut self, input: PickerInput) -> PickerResponse {
        match input {
            PickerInput::Toggle => self.toggle(),
            PickerInput::Clear => self.clear(),
            _ if !self.open => PickerResponse::Refused,
            PickerInput::Digit(digit) => self.type_digit(digit),
            PickerInput::Backspace => self.erase(),
            PickerInput::Confirm => self.confirm(),
            PickerInput::PickCursor => self.pick(self.cursor),
            PickerInput::CursorBack => self.move_cursor(-1),
            PickerInput::CursorForwards => self.move_cursor(1),
            PickerInput::CursorUp => self.move_cursor(-7),
            PickerInput::CursorDown => self.move_cursor(7),
            PickerInput::MonthBackwards => self.turn_month_backwards(),
            PickerInput::MonthForwards => self.turn_month_forwards(),
            PickerInput::Today => {
                self.show_month(self.today);
                PickerResponse::Handled
            }
        }
    }

    /// Commits `date` as if it had been clicked on the calendar grid:
    /// the entry text is rewritten to the date's `DD/MM/YYYY` form and
    /// the panel closes.  Dates disabled by the range are refused.
    pub(crate) fn pick(&mut self, date: Date) -> PickerResponse {
        if self.range.disables(date) {
            return PickerResponse::Refused;
        }
        self.selected = Some(date);
        self.buffer = DateBuffer::from_date(date);
        self.phase = Phase::Picked;
        self.open = false;
        self.show_month(date);
        PickerResponse::Committed(date)
    }

    fn toggle(&mut self) -> PickerResponse {
        self.open = !self.open;
        if self.open {
            let seed = self
                .selected
                .unwrap_or_else(|| self.buffer.resolve(self.today).date);
            self.show_month(seed);
        }
        PickerResponse::Handled
    }

    fn clear(&mut self) -> PickerResponse {
        if self.selected.take().is_none() {
            return PickerResponse::Refused;
        }
        self.buffer.clear();
        self.phase = Phase::Empty;
        PickerResponse::Cleared
    }

    fn type_digit(&mut self, digit: u8) -> PickerResponse {
        if !self.buffer.push_digit(digit) {
            return PickerResponse::Refused;
        }
        let resolved = self.buffer.resolve(self.today);
        self.show_month(resolved.date);
        if self.buffer.is_full() {
            self.selected = Some(resolved.date);
            self.phase = Phase::Complete;
            PickerResponse::Committed(resolved.date)
        } else {
            self.phase = Phase::Typing;
            PickerResponse::Handled
        }
    }

    fn erase(&mut self) -> PickerResponse {
        if !self.buffer.backspace() {
            // Erasing an empty entry changes nothing, selection included
            return PickerResponse::Handled;
        }
        let had_selection = self.selected.take().is_some();
        self.phase = if self.buffer.is_empty() {
            Phase::Empty
        } else {
            Phase::Typing
        };
        if had_selection {
            PickerResponse::Cleared
        } else {
            PickerResponse::Handled
        }
    }

    fn confirm(&mut self) -> PickerResponse {
        let resolved = self.buffer.resolve(self.today);
        self.selected = Some(resolved.date);
        self.phase = Phase::Complete;
        self.open = false;
        PickerResponse::Committed(resolved.date)
    }

    fn move_cursor(&mut self, days: i64) -> PickerResponse {
        let Some(target) = self.cursor.checked_add(Duration::days(days)) else {
            return PickerResponse::Refused;
        };
        if !self
            .range
            .step_allowed(self.month, dates::first_of_month(target))
        {
            return PickerResponse::Refused;
        }
        self.show_month(target);
        PickerResponse::Handled
    }

    fn turn_month_backwards(&mut self) -> PickerResponse {
        let Some(target) = dates::month_backwards(self.month) else {
            return PickerResponse::Refused;
        };
        self.turn_month(target)
    }

    fn turn_month_forwards(&mut self) -> PickerResponse {
        let Some(target) = dates::month_forwards(self.month) else {
            return PickerResponse::Refused;
        };
        self.turn_month(target)
    }

    fn turn_month(&mut self, target: Date) -> PickerResponse {
        if !self.range.step_allowed(self.month, target) {
            return PickerResponse::Refused;
        }
        self.month = target;
        let day = self
            .cursor
            .day()
            .min(dates::days_in_month(target.year(), target.month()));
        self.cursor = target
            .replace_day(day)
            .expect("day is clamped to the month's length");
        PickerResponse::Handled
    }

    fn show_month(&mut self, date: Date) {
        self.month = dates::first_of_month(date);
        self.cursor = date;
    }
}
