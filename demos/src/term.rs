//! Crossterm rendering of a grid.
//!
//! Each cell is drawn as two blank columns with a background colour, which
//! makes cells roughly square in most terminal fonts.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};
use pathviz_core::{Cell, CellKind, Grid, Point, VisitStatus};

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 2;

const VISITED: Color = Color::Rgb {
    r: 135,
    g: 206,
    b: 250,
};

/// Background colour for a cell. Structural kinds win over run marks.
pub fn cell_color(cell: &Cell) -> Color {
    match cell.kind() {
        CellKind::Wall => Color::Black,
        CellKind::Start => Color::Green,
        CellKind::End => Color::Red,
        CellKind::Empty => match cell.status() {
            VisitStatus::Unvisited => Color::White,
            VisitStatus::Visited => VISITED,
            VisitStatus::Path => Color::Yellow,
        },
    }
}

/// Grid position under a terminal column and row.
pub fn to_grid(column: u16, row: u16) -> Point {
    Point::new(i32::from(column / CELL_WIDTH), i32::from(row))
}

/// Raw-mode alternate screen with mouse capture, restored on drop.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Drop disables raw mode from here on.
        let mut term = Self { out: io::stdout() };
        execute!(
            term.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            EnableMouseCapture
        )?;
        Ok(term)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::Clear(ClearType::All))
    }

    /// Draw `grid` from the top-left corner with `status` lines below it.
    pub fn draw(&mut self, grid: &Grid, status: &[String]) -> io::Result<()> {
        for y in 0..grid.height() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            for x in 0..grid.width() {
                if let Some(cell) = grid.cell(Point::new(x, y)) {
                    queue!(self.out, SetBackgroundColor(cell_color(cell)), Print("  "))?;
                }
            }
        }
        queue!(self.out, ResetColor)?;

        let top = grid.height() as u16 + 1;
        for (i, line) in status.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, top + i as u16),
                terminal::Clear(ClearType::CurrentLine),
                Print(line)
            )?;
        }
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_follow_kind_then_status() {
        let mut grid = Grid::parse("S.#E").unwrap();
        let at = |g: &Grid, x| cell_color(g.cell(Point::new(x, 0)).unwrap());
        assert_eq!(at(&grid, 0), Color::Green);
        assert_eq!(at(&grid, 1), Color::White);
        assert_eq!(at(&grid, 2), Color::Black);
        assert_eq!(at(&grid, 3), Color::Red);

        grid.set_status(Point::new(1, 0), VisitStatus::Visited);
        assert_eq!(at(&grid, 1), VISITED);
        grid.set_status(Point::new(1, 0), VisitStatus::Path);
        assert_eq!(at(&grid, 1), Color::Yellow);
    }

    #[test]
    fn screen_to_grid() {
        assert_eq!(to_grid(0, 0), Point::new(0, 0));
        assert_eq!(to_grid(1, 0), Point::new(0, 0));
        assert_eq!(to_grid(7, 4), Point::new(3, 4));
    }
}
