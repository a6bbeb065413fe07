//! The interactive board: cell selection, search results and the text frame
//! drawn by the terminal driver.

use knight_core::{Board, Point};
use knight_paths::{Components, DistanceMap, KnightPath, KnightPathFinder, PathError};

use crate::config::BoardConfig;

/// Screen position of the top-left board cell.
pub const BOARD_ORIGIN: Point = Point::new(2, 2);
/// Screen columns used by one board cell.
pub const CELL_WIDTH: i32 = 3;

const PROMPT: &str = "Please select a source and destination cell.";
const NO_PATH: &str = "No knight path exists between the selected cells.";
const HELP: &str = "click/enter: select  arrows/hjkl: move  d: distances  r: reset  q: quit";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Input understood by [`BoardModel::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// A click at a board cell.
    Click(Point),
    /// A click at a screen position, mapped with [`BoardModel::screen_to_cell`].
    Mouse(Point),
    /// Move the keyboard cursor by (dx, dy), clamped to the board.
    MoveCursor(i32, i32),
    /// Select the cell under the keyboard cursor.
    Select,
    /// Clear both selections and the result.
    Reset,
    /// Show or hide distances from the start cell.
    ToggleDistances,
    /// Repaint without changing state, e.g. after a terminal resize.
    Redraw,
    /// Leave the application.
    Quit,
}

/// What the driver should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// How a [`Span`] is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Text,
    Light,
    Dark,
    Start,
    End,
    Path,
    Cursor,
}

/// A run of text sharing one [`Tone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One screen row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// The row's text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// What a board cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Empty,
    Start,
    /// The destination, with its move number once a path was found.
    End(Option<usize>),
    /// An intermediate cell and its move number.
    Path(usize),
}

// ---------------------------------------------------------------------------
// BoardModel
// ---------------------------------------------------------------------------

/// Selection state of one board session.
///
/// The first selected cell becomes the start, the second the destination,
/// at which point the shortest path is computed. Further selections are
/// ignored until [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct BoardModel {
    finder: KnightPathFinder,
    start: Option<Point>,
    end: Option<Point>,
    outcome: Option<Result<KnightPath, PathError>>,
    distances: Option<DistanceMap>,
    components: Option<Components>,
    show_distances: bool,
    cursor: Point,
}

impl BoardModel {
    /// Create a model for a board of side `config.size`.
    pub fn new(config: BoardConfig) -> Result<Self, PathError> {
        let board = Board::new(config.size).ok_or(PathError::InvalidBoardSize(config.size))?;
        Ok(Self {
            finder: KnightPathFinder::new(board),
            start: None,
            end: None,
            outcome: None,
            distances: None,
            components: None,
            show_distances: false,
            cursor: Point::ZERO,
        })
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.finder.board()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[inline]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Result of the last search, once both cells are selected.
    pub fn outcome(&self) -> Option<&Result<KnightPath, PathError>> {
        self.outcome.as_ref()
    }

    /// Select `p` as start or destination. Off-board cells are ignored.
    pub fn click(&mut self, p: Point) {
        if !self.board().contains(p) {
            return;
        }
        if self.start.is_none() {
            self.start = Some(p);
            self.distances = DistanceMap::new(self.board(), p).ok();
        } else if let (Some(start), None) = (self.start, self.end) {
            self.end = Some(p);
            let outcome = self.finder.find(start, p);
            if let Err(e) = &outcome {
                log::warn!("search {start} -> {p} failed: {e}");
                if matches!(e, PathError::Unreachable { .. }) {
                    let cc = Components::new(self.board());
                    debug_assert!(!cc.connected(start, p));
                    log::debug!(
                        "{start} is in region {:?}, {p} in region {:?} of {}",
                        cc.label(start),
                        cc.label(p),
                        cc.count()
                    );
                    self.components = Some(cc);
                }
            }
            self.outcome = Some(outcome);
        }
    }

    /// Clear both selections and the result.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
        self.outcome = None;
        self.distances = None;
        self.components = None;
    }

    pub fn toggle_distances(&mut self) {
        self.show_distances = !self.show_distances;
    }

    /// Distance from the start cell to `p`, when the overlay is shown.
    pub fn distance_at(&self, p: Point) -> Option<usize> {
        if !self.show_distances {
            return None;
        }
        self.distances.as_ref().and_then(|dm| dm.at(p))
    }

    /// The status line.
    pub fn status(&self) -> String {
        match &self.outcome {
            Some(Ok(found)) => format!("Minimum hops required is: {}", found.distance),
            Some(Err(PathError::Unreachable { .. })) => match &self.components {
                Some(cc) => format!(
                    "{NO_PATH} The board splits into {} separate knight regions.",
                    cc.count()
                ),
                None => NO_PATH.to_string(),
            },
            Some(Err(e)) => e.to_string(),
            None => PROMPT.to_string(),
        }
    }

    /// What the cell `p` shows.
    pub fn marker_at(&self, p: Point) -> Marker {
        if self.start == Some(p) {
            return Marker::Start;
        }
        let found = match &self.outcome {
            Some(Ok(found)) => Some(found),
            _ => None,
        };
        if self.end == Some(p) {
            return Marker::End(found.map(|f| f.distance));
        }
        match found.and_then(|f| f.step_at(p)) {
            Some(n) => Marker::Path(n),
            None => Marker::Empty,
        }
    }

    /// Map a screen position to the board cell drawn there.
    pub fn screen_to_cell(&self, screen: Point) -> Option<Point> {
        let rel = screen - BOARD_ORIGIN;
        if rel.x < 0 || rel.y < 0 {
            return None;
        }
        let p = Point::new(rel.x / CELL_WIDTH, rel.y);
        self.board().contains(p).then_some(p)
    }

    /// Process a message.
    pub fn update(&mut self, msg: Msg) -> Action {
        match msg {
            Msg::Click(p) => self.click(p),
            Msg::Mouse(screen) => {
                if let Some(p) = self.screen_to_cell(screen) {
                    self.cursor = p;
                    self.click(p);
                }
            }
            Msg::MoveCursor(dx, dy) => {
                let max = self.board().size() - 1;
                let x = self.cursor.x.saturating_add(dx).clamp(0, max);
                let y = self.cursor.y.saturating_add(dy).clamp(0, max);
                self.cursor = Point::new(x, y);
            }
            Msg::Select => self.click(self.cursor),
            Msg::Reset => self.reset(),
            Msg::ToggleDistances => self.toggle_distances(),
            Msg::Redraw => {}
            Msg::Quit => return Action::Quit,
        }
        Action::Continue
    }

    /// Render the whole screen.
    pub fn draw(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(BOARD_ORIGIN.y as usize + self.board().size() as usize + 3);
        lines.push(Line {
            spans: vec![Span::new(
                format!("Knight's shortest path on a {} board", self.board()),
                Tone::Text,
            )],
        });
        while lines.len() < BOARD_ORIGIN.y as usize {
            lines.push(Line::default());
        }

        let size = self.board().size();
        let indent = " ".repeat(BOARD_ORIGIN.x as usize);
        for y in 0..size {
            let mut spans = vec![Span::new(indent.clone(), Tone::Text)];
            for x in 0..size {
                spans.push(self.draw_cell(Point::new(x, y)));
            }
            lines.push(Line { spans });
        }

        lines.push(Line::default());
        lines.push(Line {
            spans: vec![Span::new(self.status(), Tone::Text)],
        });
        lines.push(Line {
            spans: vec![Span::new(HELP, Tone::Text)],
        });
        lines
    }

    fn draw_cell(&self, p: Point) -> Span {
        let base = if p.x % 2 == p.y % 2 {
            Tone::Light
        } else {
            Tone::Dark
        };
        let (text, tone) = match self.marker_at(p) {
            Marker::Start if self.outcome.is_some() => (counter(0), Tone::Start),
            Marker::Start => (" S ".to_string(), Tone::Start),
            Marker::End(Some(n)) => (counter(n), Tone::End),
            Marker::End(None) => (" E ".to_string(), Tone::End),
            Marker::Path(n) => (counter(n), Tone::Path),
            Marker::Empty => match self.distance_at(p) {
                Some(d) => (counter(d), base),
                None => ("   ".to_string(), base),
            },
        };
        if p == self.cursor && tone == base {
            return Span::new(text, Tone::Cursor);
        }
        Span::new(text, tone)
    }
}

fn counter(n: usize) -> String {
    format!("{n:^width$}", width = CELL_WIDTH as usize)
}
