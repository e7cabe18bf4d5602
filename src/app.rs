use crate::help::Help;
use crate::picker::{DatePicker, PickerInput, PickerPanel, PickerResponse, PickerTrigger};
use crate::theme::BASE_STYLE;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, read};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    picker: DatePicker,
    state: AppState,
}

impl App {
    pub(crate) fn new(picker: DatePicker) -> App {
        App {
            picker,
            state: AppState::Picking,
        }
    }

    /// Runs until the user quits and returns the date they settled on,
    /// if any.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<Option<Date>> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(self.picker.selected_date())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Picking => {
                if key == KeyCode::Char('?') {
                    self.state = AppState::Helping;
                    true
                } else if self.picker.is_open() {
                    self.handle_panel_key(key)
                } else {
                    self.handle_trigger_key(key)
                }
            }
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn handle_trigger_key(&mut self, key: KeyCode) -> bool {
        let input = match key {
            KeyCode::Enter | KeyCode::Char('o' | ' ') => PickerInput::Toggle,
            KeyCode::Char('x') => PickerInput::Clear,
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state = AppState::Quitting;
                return true;
            }
            _ => return false,
        };
        self.picker.handle_input(input) != PickerResponse::Refused
    }

    fn handle_panel_key(&mut self, key: KeyCode) -> bool {
        let input = match key {
            KeyCode::Char('0') => PickerInput::Digit(0),
            KeyCode::Char('1') => PickerInput::Digit(1),
            KeyCode::Char('2') => PickerInput::Digit(2),
            KeyCode::Char('3') => PickerInput::Digit(3),
            KeyCode::Char('4') => PickerInput::Digit(4),
            KeyCode::Char('5') => PickerInput::Digit(5),
            KeyCode::Char('6') => PickerInput::Digit(6),
            KeyCode::Char('7') => PickerInput::Digit(7),
            KeyCode::Char('8') => PickerInput::Digit(8),
            KeyCode::Char('9') => PickerInput::Digit(9),
            KeyCode::Backspace | KeyCode::Delete => PickerInput::Backspace,
            KeyCode::Enter => PickerInput::Confirm,
            KeyCode::Char(' ') => PickerInput::PickCursor,
            KeyCode::Char('h') | KeyCode::Left => PickerInput::CursorBack,
            KeyCode::Char('l') | KeyCode::Right => PickerInput::CursorForwards,
            KeyCode::Char('k') | KeyCode::Up => PickerInput::CursorUp,
            KeyCode::Char('j') | KeyCode::Down => PickerInput::CursorDown,
            KeyCode::Char('w') | KeyCode::PageUp => PickerInput::MonthBackwards,
            KeyCode::Char('z') | KeyCode::PageDown => PickerInput::MonthForwards,
            KeyCode::Char('t') | KeyCode::Home => PickerInput::Today,
            KeyCode::Char('x') => PickerInput::Clear,
            KeyCode::Char('q') | KeyCode::Esc => PickerInput::Toggle,
            _ => return false,
        };
        self.picker.handle_input(input) != PickerResponse::Refused
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [trigger_area, panel_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        PickerTrigger.render(trigger_area, buf, &mut self.picker);
        if self.picker.is_open() {
            PickerPanel.render(panel_area, buf, &mut self.picker);
        }
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Quitting,
}
