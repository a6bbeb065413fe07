//! Crossterm terminal driver for the knight board.
//!
//! [`TermDriver`] owns the terminal state (raw mode, alternate screen, mouse
//! capture), turns crossterm events into [`Msg`]s and paints the frames
//! produced by [`BoardModel::draw`].

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use knight_core::Point;

use crate::config::BoardConfig;
use crate::model::{Action, BoardModel, Line, Msg, Tone};

const COL_LIGHT: Color = Color::Rgb {
    r: 235,
    g: 220,
    b: 180,
};
const COL_DARK: Color = Color::Rgb {
    r: 180,
    g: 135,
    b: 100,
};
const COL_START: Color = Color::Rgb { r: 60, g: 170, b: 70 };
const COL_END: Color = Color::Rgb { r: 200, g: 50, b: 50 };
const COL_PATH: Color = Color::Rgb {
    r: 80,
    g: 150,
    b: 230,
};
const COL_CURSOR: Color = Color::Rgb {
    r: 240,
    g: 200,
    b: 60,
};
const COL_INK: Color = Color::Rgb { r: 20, g: 20, b: 30 };

/// Foreground and background for a [`Tone`].
fn colors(tone: Tone) -> (Color, Color) {
    match tone {
        Tone::Text => (Color::Reset, Color::Reset),
        Tone::Light => (COL_INK, COL_LIGHT),
        Tone::Dark => (COL_INK, COL_DARK),
        Tone::Start => (Color::White, COL_START),
        Tone::End => (Color::White, COL_END),
        Tone::Path => (Color::White, COL_PATH),
        Tone::Cursor => (COL_INK, COL_CURSOR),
    }
}

/// Maps a key to a board message.
fn key_msg(code: KeyCode) -> Option<Msg> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Char('r') => Some(Msg::Reset),
        KeyCode::Char('d') => Some(Msg::ToggleDistances),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::Select),
        KeyCode::Left | KeyCode::Char('h') => Some(Msg::MoveCursor(-1, 0)),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::MoveCursor(0, 1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::MoveCursor(0, -1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Msg::MoveCursor(1, 0)),
        _ => None,
    }
}

/// Maps a crossterm event to a board message.
fn event_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => key_msg(code),
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(Msg::Mouse(Point::new(me.column as i32, me.row as i32)))
            }
            _ => None,
        },
        Event::Resize(..) => Some(Msg::Redraw),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct TermDriver {
    mouse_enabled: bool,
}

impl TermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Wait briefly for input and append every pending message to `out`.
    pub fn poll_msgs(&mut self, out: &mut Vec<Msg>) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(Duration::from_millis(100))? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if let Some(msg) = event_msg(event::read()?) {
                out.push(msg);
            }
        }
        Ok(())
    }

    /// Paint a full frame.
    pub fn flush(&mut self, frame: &[Line]) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        for (row, line) in frame.iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, row as u16))?;
            for span in &line.spans {
                let (fg, bg) = colors(span.tone);
                queue!(
                    stdout,
                    SetForegroundColor(fg),
                    SetBackgroundColor(bg),
                    Print(&span.text),
                    ResetColor
                )?;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for TermDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Run an interactive board session until the user quits.
///
/// The terminal is restored even when the session fails.
pub fn run(config: BoardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut model = BoardModel::new(config)?;
    let mut driver = TermDriver::new().with_mouse(config.mouse);
    driver.init()?;
    let result = event_loop(&mut model, &mut driver);
    driver.close();
    result
}

fn event_loop(model: &mut BoardModel, driver: &mut TermDriver) -> Result<(), Box<dyn std::error::Error>> {
    driver.flush(&model.draw())?;
    let mut msgs = Vec::new();
    loop {
        driver.poll_msgs(&mut msgs)?;
        if msgs.is_empty() {
            continue;
        }
        // Any batch, including a lone resize redraw, ends with a repaint.
        for msg in msgs.drain(..) {
            if model.update(msg) == Action::Quit {
                return Ok(());
            }
        }
        driver.flush(&model.draw())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    #[test]
    fn keys() {
        assert_eq!(key_msg(KeyCode::Char('q')), Some(Msg::Quit));
        assert_eq!(key_msg(KeyCode::Esc), Some(Msg::Quit));
        assert_eq!(key_msg(KeyCode::Char('r')), Some(Msg::Reset));
        assert_eq!(key_msg(KeyCode::Char('d')), Some(Msg::ToggleDistances));
        assert_eq!(key_msg(KeyCode::Enter), Some(Msg::Select));
        assert_eq!(key_msg(KeyCode::Left), Some(Msg::MoveCursor(-1, 0)));
        assert_eq!(key_msg(KeyCode::Char('j')), Some(Msg::MoveCursor(0, 1)));
        assert_eq!(key_msg(KeyCode::Tab), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(event_msg(Event::Key(press)), Some(Msg::Quit));
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(event_msg(Event::Key(release)), None);
    }

    #[test]
    fn resize_requests_redraw() {
        assert_eq!(event_msg(Event::Resize(80, 24)), Some(Msg::Redraw));
        assert_eq!(event_msg(Event::FocusGained), None);
    }

    #[test]
    fn left_click_becomes_mouse_msg() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(event_msg(Event::Mouse(click)), Some(Msg::Mouse(Point::new(7, 3))));

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(event_msg(Event::Mouse(right)), None);
    }
}
