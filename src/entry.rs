use crate::dates;
use time::{Date, Month};

/// Length of a fully typed `DD/MM/YYYY` entry
const MAX_LEN: usize = 10;

const SEPARATOR: char = '/';

/// The in-progress typed date text: digits and slashes only, always a
/// valid prefix of `DD/MM/YYYY`, mutated only by appending digits and
/// erasing from the end.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct DateBuffer(String);

impl DateBuffer {
    pub(crate) fn new() -> DateBuffer {
        DateBuffer::default()
    }

    pub(crate) fn from_date(date: Date) -> DateBuffer {
        DateBuffer(dates::format_dmy(date))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.0.len() == MAX_LEN
    }

    /// Appends a digit, inserting the slash that follows a completed day
    /// or month fragment.  Returns `false` if the entry is already full
    /// or `digit` is not a decimal digit.
    pub(crate) fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 || self.0.len() >= MAX_LEN {
            return false;
        }
        self.0.push(char::from(b'0' + digit));
        if matches!(self.0.len(), 2 | 5) {
            self.0.push(SEPARATOR);
        }
        true
    }

    /// Erases the last character; erasing a slash consumes the digit
    /// before it as well.  Returns `false` if the entry was empty.
    pub(crate) fn backspace(&mut self) -> bool {
        match self.0.pop() {
            Some(SEPARATOR) => {
                self.0.pop();
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn resolve(&self, today: Date) -> Resolved {
        resolve(&self.0, today)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Resolved {
    pub(crate) date: Date,
    pub(crate) text: String,
}

/// Resolves any prefix of a `DD/MM/YYYY` entry into a full date.
///
/// Fragments out of range are clamped (day to [1, 31], month to
/// [1, 12], year upwards to 1), except that an oversized year is reset
/// to `today`'s year rather than clamped.  Fragments not yet typed
/// default to the corresponding fragment of `today`.  A day beyond the
/// end of the resolved month is pulled back to the month's last day, so
/// the result never crosses into the following month.  Pure: the same
/// input and `today` always resolve to the same date.
pub(crate) fn resolve(raw: &str, today: Date) -> Resolved {
    let mut fragments = raw.split(SEPARATOR);
    let day = fragment(fragments.next());
    let month = fragment(fragments.next());
    let year = fragment(fragments.next());

    let day = day.map_or(today.day(), |d| {
        u8::try_from(d.clamp(1, 31)).expect("day is clamped to 1..=31")
    });
    let month = month.map_or(today.month(), clamp_month);
    let year = match year {
        Some(y) if y > 9999 => today.year(),
        Some(y) => i32::try_from(y.max(1)).expect("year is clamped to 1..=9999"),
        None => today.year(),
    };

    let day = day.min(dates::days_in_month(year, month));
    let date =
        Date::from_calendar_date(year, month, day).expect("day is clamped to the month's length");
    Resolved {
        date,
        text: dates::format_dmy(date),
    }
}

fn fragment(s: Option<&str>) -> Option<u64> {
    s.filter(|frag| !frag.is_empty())
        .and_then(|frag| frag.parse::<u64>().ok())
}

fn clamp_month(m: u64) -> Month {
    let m = u8::try_from(m.clamp(1, 12)).expect("month is clamped to 1..=12");
    Month::try_from(m).expect("month is clamped to 1..=12")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2024 - 01 - 15);

    #[test]
    fn test_resolve_empty_defaults_to_today() {
        let r = resolve("", TODAY);
        assert_eq!(r.date, TODAY);
        assert_eq!(r.text, "15/01/2024");
    }

    #[test]
    fn test_resolve_day_clamps_high() {
        assert_eq!(resolve("32", TODAY).date, date!(2024 - 01 - 31));
    }

    #[test]
    fn test_resolve_day_clamps_low() {
        assert_eq!(resolve("00", TODAY).date, date!(2024 - 01 - 01));
    }

    #[test]
    fn test_resolve_partial_day() {
        assert_eq!(resolve("7", TODAY).date, date!(2024 - 01 - 07));
    }

    #[test]
    fn test_resolve_month_clamps_high() {
        assert_eq!(resolve("01/13", TODAY).date, date!(2024 - 12 - 01));
    }

    #[test]
    fn test_resolve_month_clamps_low() {
        assert_eq!(resolve("01/00", TODAY).date, date!(2024 - 01 - 01));
    }

    #[test]
    fn test_resolve_oversized_year_resets_to_current() {
        let r = resolve("01/01/99999", TODAY);
        assert_eq!(r.date, date!(2024 - 01 - 01));
        assert_eq!(r.text, "01/01/2024");
    }

    #[test]
    fn test_resolve_year_zero_clamps_to_one() {
        assert_eq!(resolve("01/01/0000", TODAY).date, date!(0001 - 01 - 01));
    }

    #[test]
    fn test_resolve_day_does_not_spill_into_next_month() {
        assert_eq!(resolve("31/04", TODAY).date, date!(2024 - 04 - 30));
        assert_eq!(resolve("29/02/2023", TODAY).date, date!(2023 - 02 - 28));
    }

    #[test]
    fn test_resolve_every_prefix_is_a_valid_date() {
        let full = "25/12/2023";
        for end in 0..=full.len() {
            let r = resolve(&full[..end], TODAY);
            assert!((1..=31).contains(&r.date.day()), "prefix {end}");
            assert!((1..=9999).contains(&r.date.year()), "prefix {end}");
        }
        assert_eq!(resolve(full, TODAY).date, date!(2023 - 12 - 25));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = resolve("29/02", TODAY);
        let second = resolve("29/02", TODAY);
        assert_eq!(first, second);
    }

    #[test]
    fn test_buffer_inserts_separators_while_typing() {
        let mut buffer = DateBuffer::new();
        for digit in [0, 1, 0, 1, 2, 0, 2, 4] {
            assert!(buffer.push_digit(digit));
        }
        assert_eq!(buffer.as_str(), "01/01/2024");
        assert!(buffer.is_full());
    }

    #[test]
    fn test_buffer_refuses_digits_when_full() {
        let mut buffer = DateBuffer::from_date(date!(2024 - 01 - 01));
        assert_eq!(buffer.as_str(), "01/01/2024");
        assert!(!buffer.push_digit(9));
        assert_eq!(buffer.as_str(), "01/01/2024");
    }

    #[test]
    fn test_backspace_consumes_separator_and_digit_together() {
        let mut buffer = DateBuffer::new();
        assert!(buffer.push_digit(0));
        assert!(buffer.push_digit(1));
        assert_eq!(buffer.as_str(), "01/");
        assert!(buffer.backspace());
        assert_eq!(buffer.as_str(), "0");
    }

    #[test]
    fn test_backspace_on_plain_digit() {
        let mut buffer = DateBuffer::new();
        for digit in [0, 1, 0] {
            assert!(buffer.push_digit(digit));
        }
        assert_eq!(buffer.as_str(), "01/0");
        assert!(buffer.backspace());
        assert_eq!(buffer.as_str(), "01/");
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut buffer = DateBuffer::new();
        assert!(!buffer.backspace());
        assert!(buffer.is_empty());
    }
}
