use super::grid::{MonthGrid, GRID_LINES, GRID_WIDTH};
use super::state::DatePicker;
use crate::theme::{
    picker::{OPEN_TRIGGER_STYLE, PLACEHOLDER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

const OUTER_WIDTH: u16 = GRID_WIDTH + 4;
const OUTER_HEIGHT: u16 = GRID_LINES + 6;

/// Placeholder cells shown for characters not yet typed
static ENTRY_MASK: &str = "DD/MM/YYYY";

/// The clickable surface the panel anchors to, rendered as one line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PickerTrigger;

impl StatefulWidget for PickerTrigger {
    type State = DatePicker;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let bracket_style = if state.is_open() {
            OPEN_TRIGGER_STYLE
        } else {
            BASE_STYLE
        };
        let label = state.label();
        let label_style = if state.selected_date().is_none() && state.buffer_str().is_empty() {
            PLACEHOLDER_STYLE
        } else {
            BASE_STYLE
        };
        let mut spans = vec![
            Span::styled("[ ", bracket_style),
            Span::styled(label, label_style),
            Span::styled(" ]", bracket_style),
        ];
        if state.selected_date().is_some() {
            spans.push(Span::styled(" x", PLACEHOLDER_STYLE));
        }
        Line::from_iter(spans).centered().render(area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PickerPanel;

impl StatefulWidget for PickerPanel {
    type State = DatePicker;

    /*
     * ........................
     * .┌─── Pick a Date… ───┐.
     * .│     June 2024      │.
     * .│Mo Tu We Th Fr Sa Su│.
     * .│                1  2│.
     * .│ 3  4  5  6  7  8  9│.
     * .│10 11 12 13 14 15 16│.
     * .│17 18 19 20 21 22 23│.
     * .│24 25 26 27 28 29 30│.
     * .│                    │.
     * .│                    │.
     * .│     DD/MM/YYYY     │.
     * .└────────────────────┘.
     * ........................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Pick a Date… ")
            .title_alignment(Alignment::Center)
            .style(BASE_STYLE)
            .render(block_area, buf);
        let content_area = block_area.inner(Margin::new(1, 1));
        let [grid_area, _, echo_area] = Layout::vertical([
            Constraint::Length(GRID_LINES),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(content_area);
        MonthGrid.render(grid_area, buf, state);
        echo_line(&state.echo_text())
            .centered()
            .render(echo_area, buf);
    }
}

// Typed characters fill the mask left to right; the rest stay as dim
// placeholder cells.
fn echo_line(typed: &str) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, mask) in ENTRY_MASK.char_indices() {
        spans.push(match typed.as_bytes().get(i) {
            Some(&b) => Span::styled(String::from(char::from(b)), BASE_STYLE),
            None => Span::styled(String::from(mask), UNFILLED_CELL_STYLE),
        });
    }
    Line::from_iter(spans)
}
