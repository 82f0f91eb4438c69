//! Interactive editor and animated runs.
//!
//! The UI thread owns the [`Viewer`]. A run clones the grid into a worker
//! thread that drives the engine; its render sink sends a snapshot per step
//! over a channel and the UI thread draws whatever arrived last.

use std::error::Error;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use pathviz_build::{Brush, Layout, MazeGen, clear_all, clear_path};
use pathviz_core::{ConfigError, Grid, Point};
use pathviz_paths::{Algorithm, MAX_SPEED, RunResult, SearchConfig, delay_for_speed, run};
use rand::rngs::StdRng;

use crate::Args;
use crate::term::{self, Terminal};

const SPEED_STEP: u32 = 10;

const HELP: &str =
    "enter run | tab algorithm | +/- speed | c clear path | x clear all | m maze | drag walls | q quit";

/// Something the user asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Run,
    NextAlgorithm,
    PrevAlgorithm,
    Faster,
    Slower,
    ClearPath,
    ClearAll,
    NewMaze,
    Press(Point),
    Drag(Point),
    Release,
    Redraw,
    Quit,
}

/// Map a terminal event to an action.
pub fn action_for(ev: &Event) -> Option<Action> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => {
            if modifiers.contains(KeyModifiers::CONTROL) && *code == KeyCode::Char('c') {
                return Some(Action::Quit);
            }
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Run),
                KeyCode::Tab => Some(Action::NextAlgorithm),
                KeyCode::BackTab => Some(Action::PrevAlgorithm),
                KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Faster),
                KeyCode::Char('-') => Some(Action::Slower),
                KeyCode::Char('c') => Some(Action::ClearPath),
                KeyCode::Char('x') => Some(Action::ClearAll),
                KeyCode::Char('m') => Some(Action::NewMaze),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            }
        }
        Event::Mouse(me) => {
            let p = term::to_grid(me.column, me.row);
            match me.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Action::Press(p)),
                MouseEventKind::Drag(MouseButton::Left) => Some(Action::Drag(p)),
                MouseEventKind::Up(MouseButton::Left) => Some(Action::Release),
                _ => None,
            }
        }
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}

/// Message from the search worker.
enum Frame {
    Step(Grid),
    Done {
        grid: Grid,
        outcome: Result<RunResult, ConfigError>,
    },
}

/// Session state: the grid being edited, the chosen algorithm and speed,
/// and the in-flight run if any.
pub struct Viewer {
    grid: Grid,
    layout: Layout,
    config: SearchConfig,
    speed: u32,
    brush: Brush,
    maze: MazeGen<StdRng>,
    /// The algorithm being run and the channel its frames arrive on.
    worker: Option<(Algorithm, Receiver<Frame>)>,
    message: String,
}

impl Viewer {
    pub fn new(args: &Args) -> Self {
        let mut maze = crate::maze_gen(args.seed);
        let grid = crate::initial_grid(args, &mut maze);
        Self {
            grid,
            layout: args.layout(),
            config: args.config(),
            speed: args.speed,
            brush: Brush::new(),
            maze,
            worker: None,
            message: String::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Apply `action`. Returns whether the screen needs redrawing.
    ///
    /// Edits and new runs are ignored while a run is in flight.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::NextAlgorithm => self.cycle_algorithm(1),
            Action::PrevAlgorithm => self.cycle_algorithm(Algorithm::ALL.len() - 1),
            Action::Faster => self.set_speed(self.speed.saturating_add(SPEED_STEP)),
            Action::Slower => self.set_speed(self.speed.saturating_sub(SPEED_STEP)),
            Action::Redraw => {}
            Action::Quit => return false,
            _ if self.is_running() => return false,
            Action::Run => self.start_run(),
            Action::ClearPath => clear_path(&mut self.grid),
            Action::ClearAll => clear_all(&mut self.grid, &self.layout),
            Action::NewMaze => {
                let walls = self.maze.fill(&mut self.grid, &self.layout);
                self.message = format!("New maze with {walls} walls");
            }
            Action::Press(p) => return self.brush.press(&mut self.grid, p),
            Action::Drag(p) => return self.brush.drag(&mut self.grid, p),
            Action::Release => {
                self.brush.release();
                return false;
            }
        }
        true
    }

    fn cycle_algorithm(&mut self, by: usize) {
        let all = Algorithm::ALL;
        let i = all.iter().position(|&a| a == self.config.algorithm).unwrap_or(0);
        self.config.algorithm = all[(i + by) % all.len()];
    }

    fn set_speed(&mut self, speed: u32) {
        self.speed = speed.min(MAX_SPEED);
        self.config.step_delay = delay_for_speed(self.speed);
    }

    fn start_run(&mut self) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut grid = self.grid.clone();
        let SearchConfig {
            algorithm,
            step_delay,
        } = self.config;
        log::info!("starting {algorithm} at speed {}", self.speed);

        thread::spawn(move || {
            let mut sink = |g: &Grid| {
                let _ = tx.send(Frame::Step(g.clone()));
            };
            let outcome = run(algorithm, &mut grid, &mut sink, step_delay);
            let _ = tx.send(Frame::Done { grid, outcome });
        });

        self.worker = Some((algorithm, rx));
        self.message = format!("Running {algorithm}...");
    }

    /// Take everything the worker has sent so far. Returns whether the
    /// screen needs redrawing.
    pub fn pump(&mut self) -> bool {
        let Some((algorithm, rx)) = &self.worker else {
            return false;
        };
        let algorithm = *algorithm;
        let mut changed = false;
        loop {
            match rx.try_recv() {
                Ok(Frame::Step(grid)) => {
                    self.grid = grid;
                    changed = true;
                }
                Ok(Frame::Done { grid, outcome }) => {
                    self.grid = grid;
                    self.finish(algorithm, outcome);
                    return true;
                }
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    self.worker = None;
                    self.message = "Search stopped unexpectedly".to_string();
                    return true;
                }
            }
        }
    }

    fn finish(&mut self, algorithm: Algorithm, outcome: Result<RunResult, ConfigError>) {
        self.worker = None;
        self.message = match outcome {
            Ok(result) => {
                log::info!("{algorithm}: {result}");
                format!("{algorithm}: {result}")
            }
            Err(err) => format!("Cannot run {algorithm}: {err}"),
        };
    }

    pub fn status_lines(&self) -> Vec<String> {
        vec![
            format!("{}  speed {}", self.config.algorithm, self.speed),
            self.message.clone(),
            HELP.to_string(),
        ]
    }

    /// Event loop: poll input, drain worker frames, redraw when dirty.
    pub fn run(mut self) -> Result<(), Box<dyn Error>> {
        let mut term = Terminal::new()?;
        term.draw(&self.grid, &self.status_lines())?;
        loop {
            let mut dirty = self.pump();
            if event::poll(Duration::from_millis(16))? {
                while event::poll(Duration::ZERO)? {
                    let Some(action) = action_for(&event::read()?) else {
                        continue;
                    };
                    match action {
                        Action::Quit => return Ok(()),
                        Action::Redraw => term.clear()?,
                        _ => {}
                    }
                    dirty |= self.apply(action);
                }
            }
            if dirty {
                term.draw(&self.grid, &self.status_lines())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use clap::Parser;
    use crossterm::event::MouseEvent;
    use pathviz_core::{CellKind, VisitStatus};

    fn viewer(extra: &[&str]) -> Viewer {
        let mut argv = vec!["pathviz", "--empty", "--size", "8"];
        argv.extend_from_slice(extra);
        if !extra.contains(&"--speed") {
            argv.extend_from_slice(&["--speed", "100"]);
        }
        let args = Args::try_parse_from(argv).unwrap_or_else(|e| panic!("{e}"));
        Viewer::new(&args)
    }

    fn wait(v: &mut Viewer) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while v.is_running() {
            v.pump();
            assert!(Instant::now() < deadline, "run did not finish");
            thread::sleep(Duration::from_millis(1));
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_bindings() {
        let key = |code| action_for(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        assert_eq!(key(KeyCode::Enter), Some(Action::Run));
        assert_eq!(key(KeyCode::Tab), Some(Action::NextAlgorithm));
        assert_eq!(key(KeyCode::Char('m')), Some(Action::NewMaze));
        assert_eq!(key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(key(KeyCode::Char('z')), None);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action_for(&ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn mouse_bindings() {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 5, 3);
        assert_eq!(action_for(&down), Some(Action::Press(Point::new(2, 3))));
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 6, 3);
        assert_eq!(action_for(&drag), Some(Action::Drag(Point::new(3, 3))));
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 6, 3);
        assert_eq!(action_for(&up), Some(Action::Release));
        let right = mouse(MouseEventKind::Down(MouseButton::Right), 0, 0);
        assert_eq!(action_for(&right), None);
    }

    #[test]
    fn painting_and_clearing() {
        let mut v = viewer(&[]);
        assert!(v.apply(Action::Press(Point::new(0, 0))));
        assert!(v.apply(Action::Drag(Point::new(1, 0))));
        assert!(!v.apply(Action::Release));
        assert_eq!(v.grid().count_kind(CellKind::Wall), 2);
        v.apply(Action::ClearAll);
        assert_eq!(v.grid().count_kind(CellKind::Wall), 0);
        v.apply(Action::NewMaze);
        assert!(v.grid().count_kind(CellKind::Wall) > 0);
        assert!(v.message().starts_with("New maze"));
    }

    #[test]
    fn algorithm_and_speed_controls() {
        let mut v = viewer(&["--algorithm", "dfs", "--speed", "95"]);
        assert_eq!(v.algorithm(), Algorithm::Dfs);
        v.apply(Action::NextAlgorithm);
        assert_eq!(v.algorithm(), Algorithm::GreedyBestFirst);
        v.apply(Action::NextAlgorithm);
        v.apply(Action::NextAlgorithm);
        assert_eq!(v.algorithm(), Algorithm::AStar);
        v.apply(Action::PrevAlgorithm);
        assert_eq!(v.algorithm(), Algorithm::BellmanFord);

        v.apply(Action::Faster);
        assert_eq!(v.speed(), 100);
        v.apply(Action::Slower);
        v.apply(Action::Slower);
        assert_eq!(v.speed(), 80);
        assert!(v.status_lines()[0].contains("Bellman-Ford"));
    }

    #[test]
    fn run_on_worker_thread() {
        let mut v = viewer(&["--algorithm", "bfs"]);
        v.apply(Action::Run);
        assert!(v.is_running());
        // Edits wait for the run to finish.
        assert!(!v.apply(Action::Press(Point::new(0, 0))));
        wait(&mut v);
        // Start (5, 5) to end (2, 2) on the default 8x8 layout.
        assert!(v.message().starts_with("BFS: Path found!"), "{}", v.message());
        assert!(v.message().ends_with("Path length: 6"));
        assert!(v.grid().count_status(VisitStatus::Path) > 0);

        v.apply(Action::ClearPath);
        assert_eq!(v.grid().count_status(VisitStatus::Path), 0);
    }

    #[test]
    fn result_names_the_algorithm_that_ran() {
        let mut v = viewer(&["--algorithm", "bfs"]);
        v.apply(Action::Run);
        // Changing the selection mid-run only affects the next run.
        assert!(v.apply(Action::NextAlgorithm));
        assert_eq!(v.algorithm(), Algorithm::Dfs);
        wait(&mut v);
        assert!(v.message().starts_with("BFS: Path found!"), "{}", v.message());
        assert!(v.message().ends_with("Path length: 6"));
    }

    #[test]
    fn unreachable_end_is_reported() {
        let mut v = viewer(&[]);
        // Wall off the end at (2, 2) on an 8x8 grid.
        let end = Point::new(2, 2);
        for p in end.neighbors_4() {
            v.apply(Action::Press(p));
            v.apply(Action::Release);
        }
        v.apply(Action::Run);
        wait(&mut v);
        assert!(v.message().starts_with("A*: No path found."));
    }
}
