//! Interactive terminal front-end for the pathfinding visualizer.
//!
//! [`Visualizer`] is the application model: it owns the board, the start
//! and end markers and a [`PlaybackController`], handles mouse and keyboard
//! editing, and draws the board with the search overlay, a status line, a
//! legend and a help box.

use pathviz_core::{
    AttrMask, Board, Cell, Color, Glyph, Matrix, Point, Range, Style,
    app::{Effect, Model},
    messages::{Key, MouseAction, Msg},
    screen::Screen,
};
use pathviz_mazes::{MazeGen, MazeType};
use pathviz_paths::Algorithm;
use pathviz_ui::{PlaybackConfig, PlaybackController, PlaybackStatus};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 38;

/// Screen columns taken by one board cell.
pub const CELL_WIDTH: i32 = 2;
/// Screen row of the first board row; row 0 holds the status line.
pub const BOARD_TOP: i32 = 1;
/// Footer rows below the board.
const FOOTER_ROWS: i32 = 3;
const MIN_SCREEN_COLS: i32 = 80;

// Colours
const COL_BG: Color = Color::Rgb(20, 20, 30);
const COL_EMPTY: Color = Color::Rgb(36, 36, 48);
const COL_WALL: Color = Color::Rgb(110, 110, 135);
const COL_VISITED: Color = Color::Rgb(45, 90, 150);
const COL_CURRENT: Color = Color::Rgb(240, 200, 60);
const COL_PATH: Color = Color::Rgb(80, 200, 120);
const COL_START: Color = Color::Rgb(40, 150, 70);
const COL_END: Color = Color::Rgb(200, 60, 60);
const COL_MARKER_FG: Color = Color::Rgb(255, 255, 255);
const COL_CURSOR: Color = Color::Rgb(255, 220, 80);
const COL_STATUS_FG: Color = Color::Rgb(200, 200, 200);
const COL_STATUS_BG: Color = Color::Rgb(30, 30, 50);
const COL_HINT_FG: Color = Color::Rgb(150, 150, 170);
const COL_NO_PATH: Color = Color::Rgb(230, 90, 90);

const HELP_TEXT: &str = "\
Mouse:     click to toggle a wall, drag to paint walls
           drag S or E to move the start or end
           right click to erase a wall
Cursor:    arrows / hjkl to move, w to toggle a wall
Markers:   S / E to put the start / end under the cursor
Algorithm: TAB or a to cycle BFS / DFS / Greedy / A*
Maze:      m for the next maze type, g to regenerate
Search:    s or Enter to start, n to step, space to play / pause
           r to reset the search, c to clear the board
Help:      ? to show this screen
Quit:      q or ESC";

const KEY_HINTS: &str =
    "s start  n step  space play/pause  r reset  c clear  m maze  tab algorithm  ? help  q quit";

/// Settings for a new [`Visualizer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub rows: usize,
    pub cols: usize,
    pub algorithm: Algorithm,
    /// Pattern generated on start-up.
    pub maze: MazeType,
    /// Seed for maze generation; `None` seeds from the operating system.
    pub seed: Option<u64>,
    pub playback: PlaybackConfig,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            algorithm: Algorithm::default(),
            maze: MazeType::None,
            seed: None,
            playback: PlaybackConfig::default(),
        }
    }
}

/// What a held mouse button is doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Drag {
    None,
    Walls,
    Start,
    End,
}

/// The visualizer application model.
pub struct Visualizer {
    board: Board,
    start: Point,
    end: Point,
    algorithm: Algorithm,
    maze: MazeType,
    mazegen: MazeGen<StdRng>,
    playback: PlaybackController,
    cursor: Point,
    drag: Drag,
    show_help: bool,
}

impl Visualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        let rows = config.rows.max(2);
        let cols = config.cols.max(2);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let start = Point::ZERO;
        let end = Point::new(rows as i32 - 1, cols as i32 - 1);
        let mut mazegen = MazeGen::new(rng);
        let board = mazegen.generate(config.maze, rows, cols, start, end);
        Self {
            board,
            start,
            end,
            algorithm: config.algorithm,
            maze: config.maze,
            mazegen,
            playback: PlaybackController::new(config.playback),
            cursor: start,
            drag: Drag::None,
            show_help: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn maze(&self) -> MazeType {
        self.maze
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn help_open(&self) -> bool {
        self.show_help
    }

    /// Smallest screen showing the whole interface, as `(rows, cols)`.
    pub fn screen_size(&self) -> (i32, i32) {
        let rows = BOARD_TOP + self.board.rows() as i32 + FOOTER_ROWS;
        let cols = (self.board.cols() as i32 * CELL_WIDTH).max(MIN_SCREEN_COLS);
        (rows, cols)
    }

    /// The board is frozen while a search is underway.
    pub fn editable(&self) -> bool {
        !self.playback.status().is_active()
    }

    /// Board cell under a screen position.
    fn board_pos(&self, screen: Point) -> Option<Point> {
        let rel = self.board_area().relative(screen)?;
        Some(Point::new(rel.row, rel.col / CELL_WIDTH))
    }

    /// Screen area covered by the board.
    fn board_area(&self) -> Range {
        Range::new(
            BOARD_TOP,
            0,
            BOARD_TOP + self.board.rows() as i32,
            self.board.cols() as i32 * CELL_WIDTH,
        )
    }

    fn screen_pos(p: Point) -> Point {
        Point::new(BOARD_TOP + p.row, p.col * CELL_WIDTH)
    }

    /// Drop a finished run so its overlay does not outlive the board it was
    /// computed on.
    fn discard_run(&mut self) {
        if self.playback.status() != PlaybackStatus::Idle {
            self.playback.reset();
        }
    }

    fn is_marker(&self, p: Point) -> bool {
        p == self.start || p == self.end
    }

    fn toggle_wall(&mut self, p: Point) {
        if self.is_marker(p) || !self.board.in_bounds(p) {
            return;
        }
        self.discard_run();
        self.board.toggle_wall(p);
    }

    fn paint_wall(&mut self, p: Point) {
        if self.is_marker(p) || self.board.is_wall(p) || !self.board.in_bounds(p) {
            return;
        }
        self.discard_run();
        self.board.set(p, Cell::Wall);
    }

    fn erase_wall(&mut self, p: Point) {
        if self.board.is_wall(p) {
            self.discard_run();
            self.board.set(p, Cell::Empty);
        }
    }

    fn move_start(&mut self, p: Point) {
        if self.is_marker(p) || !self.board.in_bounds(p) {
            return;
        }
        self.discard_run();
        self.board.set(p, Cell::Empty);
        self.start = p;
    }

    fn move_end(&mut self, p: Point) {
        if self.is_marker(p) || !self.board.in_bounds(p) {
            return;
        }
        self.discard_run();
        self.board.set(p, Cell::Empty);
        self.end = p;
    }

    fn clear_board(&mut self) {
        self.discard_run();
        self.board.clear();
        log::debug!("board cleared");
    }

    fn generate_maze(&mut self, kind: MazeType) {
        self.discard_run();
        self.maze = kind;
        self.board = self.mazegen.generate(
            kind,
            self.board.rows(),
            self.board.cols(),
            self.start,
            self.end,
        );
    }

    fn start_search(&mut self) -> Option<Effect> {
        if !self.editable() {
            return None;
        }
        log::debug!(
            "starting {} from {} to {}",
            self.algorithm.id(),
            self.start,
            self.end
        );
        self.playback
            .start_search(self.algorithm, &self.board, self.start, self.end)
    }

    fn move_cursor(&mut self, drow: i32, dcol: i32) {
        let p = self.cursor.shift(drow, dcol);
        if self.board.in_bounds(p) {
            self.cursor = p;
        }
    }

    fn handle_key(&mut self, key: &Key) -> Option<Effect> {
        if self.show_help {
            if matches!(key, Key::Escape | Key::Char('q') | Key::Char('?')) {
                self.show_help = false;
            }
            return None;
        }

        match key {
            Key::Escape | Key::Char('q') | Key::Char('Q') => return Some(Effect::End),
            Key::Char('?') => self.show_help = true,
            Key::ArrowUp | Key::Char('k') => self.move_cursor(-1, 0),
            Key::ArrowDown | Key::Char('j') => self.move_cursor(1, 0),
            Key::ArrowLeft | Key::Char('h') => self.move_cursor(0, -1),
            Key::ArrowRight | Key::Char('l') => self.move_cursor(0, 1),
            Key::Char('s') | Key::Enter => return self.start_search(),
            Key::Char('n') => return self.playback.step(),
            Key::Space | Key::Char('p') => return self.playback.toggle_play(),
            Key::Char('r') => self.playback.reset(),
            _ if !self.editable() => {}
            Key::Char('w') => self.toggle_wall(self.cursor),
            Key::Char('S') => self.move_start(self.cursor),
            Key::Char('E') => self.move_end(self.cursor),
            Key::Tab | Key::Char('a') => {
                self.algorithm = self.algorithm.next();
                log::debug!("algorithm: {}", self.algorithm.id());
            }
            Key::Char('m') => self.generate_maze(self.maze.next()),
            Key::Char('g') => self.generate_maze(self.maze),
            Key::Char('c') => self.clear_board(),
            _ => {}
        }
        None
    }

    fn handle_mouse(&mut self, action: MouseAction, pos: Point) {
        if action == MouseAction::Release {
            self.drag = Drag::None;
            return;
        }
        if self.show_help || !self.editable() {
            self.drag = Drag::None;
            return;
        }
        let Some(p) = self.board_pos(pos) else {
            return;
        };
        match action {
            MouseAction::Main => {
                self.cursor = p;
                self.drag = if p == self.start {
                    Drag::Start
                } else if p == self.end {
                    Drag::End
                } else {
                    self.toggle_wall(p);
                    Drag::Walls
                };
            }
            MouseAction::Secondary => {
                self.cursor = p;
                self.erase_wall(p);
            }
            MouseAction::Move => match self.drag {
                Drag::Walls => self.paint_wall(p),
                Drag::Start => self.move_start(p),
                Drag::End => self.move_end(p),
                Drag::None => {}
            },
            MouseAction::Release => {}
        }
    }

    fn draw_status(&self, screen: &mut Screen) {
        let style = Style::default().with_fg(COL_STATUS_FG).with_bg(COL_STATUS_BG);
        fill_row(screen, 0, style);

        let status = self.playback.status();
        let mut text = format!(
            " {} | maze: {} | {} | steps: {}",
            self.algorithm.label(),
            self.maze.label(),
            status.label(),
            self.playback.steps_taken()
        );
        if let Some(path) = self.playback.path() {
            text.push_str(&format!(" | path: {}", path.len()));
        }
        let style = match status {
            PlaybackStatus::NoPath => style.with_fg(COL_NO_PATH).with_attrs(AttrMask::BOLD),
            PlaybackStatus::Found => style.with_attrs(AttrMask::BOLD),
            _ => style,
        };
        screen.text(Point::new(0, 0), &text, style);
    }

    fn draw_board(&self, screen: &mut Screen) {
        let visited = self.playback.visited();
        let current = self.playback.current();
        let mut on_path = Matrix::new(self.board.rows(), self.board.cols(), false);
        for &p in self.playback.revealed_path() {
            on_path.set(p, true);
        }

        for (p, cell) in self.board.iter() {
            let (ch, bg) = if p == self.start {
                ('S', COL_START)
            } else if p == self.end {
                ('E', COL_END)
            } else if cell == Cell::Wall {
                (' ', COL_WALL)
            } else if on_path.is_set(p) {
                (' ', COL_PATH)
            } else if current == Some(p) {
                (' ', COL_CURRENT)
            } else if visited.is_some_and(|v| v.is_set(p)) {
                (' ', COL_VISITED)
            } else {
                (' ', COL_EMPTY)
            };

            let mut style = Style::default().with_fg(COL_MARKER_FG).with_bg(bg);
            let (mut left, mut right) = (ch, ' ');
            if p == self.cursor {
                style = style.with_fg(COL_CURSOR).with_attrs(AttrMask::BOLD);
                if ch == ' ' {
                    left = '[';
                }
                right = ']';
            } else if ch != ' ' {
                style = style.with_attrs(AttrMask::BOLD);
            }

            let q = Self::screen_pos(p);
            screen.set(q, Glyph::new(left, style));
            screen.set(q.shift(0, 1), Glyph::new(right, style));
        }
    }

    fn draw_footer(&self, screen: &mut Screen) {
        let row = BOARD_TOP + self.board.rows() as i32;
        let text_style = Style::default().with_fg(COL_HINT_FG).with_bg(COL_BG);

        let legend = [
            ("start", COL_START),
            ("end", COL_END),
            ("wall", COL_WALL),
            ("visited", COL_VISITED),
            ("current", COL_CURRENT),
            ("path", COL_PATH),
        ];
        let mut col = 1;
        for (label, color) in legend {
            let swatch = Style::default().with_bg(color);
            col += screen.text(Point::new(row, col), "  ", swatch) as i32;
            col += screen.text(Point::new(row, col), &format!(" {label}   "), text_style) as i32;
        }

        screen.text(
            Point::new(row + 1, 1),
            self.algorithm.description(),
            text_style,
        );
        screen.text(Point::new(row + 2, 1), KEY_HINTS, text_style);
    }

    fn draw_help(&self, screen: &mut Screen) {
        let lines: Vec<&str> = HELP_TEXT.lines().collect();
        let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32 + 2;
        let height = lines.len() as i32 + 2;
        let (top, left) = (BOARD_TOP + 1, 2);
        let border = Style::default().with_fg(COL_CURSOR).with_bg(COL_STATUS_BG);
        let body = Style::default().with_fg(COL_STATUS_FG).with_bg(COL_STATUS_BG);

        for r in 0..height {
            for c in 0..inner + 2 {
                let last_row = r == height - 1;
                let last_col = c == inner + 1;
                let ch = match (r, c) {
                    (0, 0) => '┌',
                    (0, _) if last_col => '┐',
                    (_, 0) if last_row => '└',
                    _ if last_row && last_col => '┘',
                    (0, _) => '─',
                    _ if last_row => '─',
                    (_, 0) => '│',
                    _ if last_col => '│',
                    _ => ' ',
                };
                let style = if ch == ' ' { body } else { border };
                screen.set(Point::new(top + r, left + c), Glyph::new(ch, style));
            }
        }
        screen.text(Point::new(top, left + 2), " Help ", border);
        for (i, line) in lines.iter().enumerate() {
            screen.text(Point::new(top + 1 + i as i32, left + 2), line, body);
        }
    }
}

fn fill_row(screen: &mut Screen, row: i32, style: Style) {
    for p in screen.range().line(row) {
        screen.set(p, Glyph::new(' ', style));
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init | Msg::Screen { .. } => None,
            Msg::Quit => Some(Effect::End),
            Msg::KeyDown { ref key, .. } => self.handle_key(key),
            Msg::Mouse { action, pos, .. } => {
                self.handle_mouse(action, pos);
                None
            }
            Msg::Custom(_) => self.playback.update(&msg),
        }
    }

    fn draw(&self, screen: &mut Screen) {
        let bg = Glyph::new(' ', Style::default().with_bg(COL_BG));
        for p in screen.range() {
            screen.set(p, bg);
        }
        self.draw_status(screen);
        self.draw_board(screen);
        self.draw_footer(screen);
        if self.show_help {
            self.draw_help(screen);
        }
    }
}
