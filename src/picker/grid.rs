use super::state::DatePicker;
use crate::dates;
use crate::theme::{
    picker::{CURSOR_STYLE, DISABLED_STYLE, SELECTED_STYLE, TODAY_STYLE},
    BASE_STYLE, MONTH_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{StatefulWidget, Widget},
};
use time::Date;

/// Week starts on Monday, matching the `DD/MM/YYYY` entry convention
static HEADER: &str = "Mo Tu We Th Fr Sa Su";

const WEEK_ROWS: usize = 6;

const DAYS_IN_WEEK: usize = 7;

/// Lines the grid occupies: caption, weekday header, and six week rows
pub(super) const GRID_LINES: u16 = 8;

/// Columns the grid occupies
pub(super) const GRID_WIDTH: u16 = 20;

/// One month of the calendar: a caption, a weekday header, and a fixed
/// six rows of day cells styled by selection, cursor, today, and the
/// pickable range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct MonthGrid;

impl StatefulWidget for MonthGrid {
    type State = DatePicker;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        buf.set_style(area, BASE_STYLE);
        let first = state.displayed_month();
        let offset = usize::from(first.weekday().number_days_from_monday());
        let length = usize::from(dates::days_in_month(first.year(), first.month()));
        let caption = format!("{} {}", first.month(), first.year());
        let mut lines = vec![
            Line::styled(caption, MONTH_STYLE).centered(),
            Line::styled(HEADER, WEEKDAY_STYLE),
        ];
        for row in 0..WEEK_ROWS {
            let mut spans = Vec::new();
            for col in 0..DAYS_IN_WEEK {
                if col > 0 {
                    spans.push(Span::styled(" ", BASE_STYLE));
                }
                let slot = row * DAYS_IN_WEEK + col;
                if (offset..offset + length).contains(&slot) {
                    let day = u8::try_from(slot - offset + 1).expect("day fits in one byte");
                    let date = first
                        .replace_day(day)
                        .expect("day is within the month's length");
                    spans.push(Span::styled(
                        format!("{:2}", date.day()),
                        day_style(state, date),
                    ));
                } else {
                    spans.push(Span::styled("  ", BASE_STYLE));
                }
            }
            lines.push(Line::from_iter(spans));
        }
        Text::from(lines).render(area, buf);
    }
}

fn day_style(state: &DatePicker, date: Date) -> Style {
    if date == state.cursor() {
        CURSOR_STYLE
    } else if state.selected_date() == Some(date) {
        SELECTED_STYLE
    } else if state.range().disables(date) {
        DISABLED_STYLE
    } else if date == state.today() {
        TODAY_STYLE
    } else {
        BASE_STYLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::state::{DateRange, PickerInput};
    use time::macros::date;

    const TODAY: Date = date!(2024 - 06 - 15);

    fn open_picker(latest: Date) -> DatePicker {
        let range = DateRange::new(DateRange::DEFAULT_EARLIEST, latest).unwrap();
        let mut picker = DatePicker::new(TODAY, range);
        picker.handle_input(PickerInput::Toggle);
        picker
    }

    #[test]
    fn test_month_layout() {
        let mut picker = open_picker(date!(2024 - 12 - 31));
        let area = Rect::new(0, 0, 20, 8);
        let mut buffer = Buffer::empty(area);
        MonthGrid.render(area, &mut buffer, &mut picker);
        let mut expected = Buffer::with_lines([
            "     June 2024      ",
            "Mo Tu We Th Fr Sa Su",
            "                1  2",
            " 3  4  5  6  7  8  9",
            "10 11 12 13 14 15 16",
            "17 18 19 20 21 22 23",
            "24 25 26 27 28 29 30",
            "                    ",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(5, 0, 9, 1), MONTH_STYLE);
        expected.set_style(Rect::new(0, 1, 20, 1), WEEKDAY_STYLE);
        // The cursor sits on today, 15 June
        expected.set_style(Rect::new(15, 4, 2, 1), CURSOR_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_day_style_precedence() {
        let mut picker = open_picker(TODAY);
        assert_eq!(day_style(&picker, date!(2024 - 06 - 15)), CURSOR_STYLE);
        assert_eq!(day_style(&picker, date!(2024 - 06 - 16)), DISABLED_STYLE);
        assert_eq!(day_style(&picker, date!(2024 - 06 - 14)), BASE_STYLE);
        picker.pick(date!(2024 - 06 - 01));
        picker.handle_input(PickerInput::Toggle);
        picker.handle_input(PickerInput::CursorForwards);
        assert_eq!(day_style(&picker, date!(2024 - 06 - 01)), SELECTED_STYLE);
        assert_eq!(day_style(&picker, date!(2024 - 06 - 02)), CURSOR_STYLE);
        assert_eq!(day_style(&picker, date!(2024 - 06 - 15)), TODAY_STYLE);
    }
}
