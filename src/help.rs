use ratatui::{
    buffer::Buffer,
    layout::Flex,
    layout::{Alignment, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "With the calendar closed:\n",
    "  ENTER, o, SPACE  Open the calendar\n",
    "  x                Clear the picked date\n",
    "  q, ESC           Quit\n",
    "\n",
    "With the calendar open:\n",
    "  0-9              Type a date as DD/MM/YYYY\n",
    "  BACKSPACE, DEL   Erase the last character\n",
    "  ENTER            Commit the typed date\n",
    "  ARROWS, hjkl     Move the day cursor\n",
    "  SPACE            Pick the day under the cursor\n",
    "  w, PAGE UP       Previous month\n",
    "  z, PAGE DOWN     Next month\n",
    "  t, HOME          Go to today\n",
    "  x                Clear the picked date\n",
    "  q, ESC           Close the calendar\n",
    "\n",
    "Press the Any Key to dismiss.\n",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = TEXT.iter().map(|&s| Line::raw(s)).collect::<Vec<_>>();
        let text = Text::from(lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(self.0).render(outer_area, buf);
        para.render(help_area, buf);
    }
}
