use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use maze::{
    Cell, DrawingSurface, Grid, Marker, Orientation,
    layout::{self, Block},
};

/// Animates generation and solving in place, one block per two terminal
/// columns, north side up.
pub struct TerminalSurface<W: Write> {
    out: W,
    height: usize,
    delay: Duration,
    error: Option<io::Error>, // First write failure; reported by `finish`.
}

impl<W: Write> TerminalSurface<W> {
    /// Clears the screen and draws `grid` as it is before any wall is opened.
    pub fn new(mut out: W, grid: &Grid, delay: Duration) -> io::Result<Self> {
        let height = layout::height(grid);
        let width = layout::width(grid);

        execute!(out, Hide, Clear(ClearType::All), MoveTo(0, 0))?;
        for y in (0..height).rev() {
            let line: String = (0..width)
                .map(|x| match layout::block_at(grid, y, x) {
                    Block::Wall => "██",
                    Block::Open | Block::Cell(_) => "  ",
                })
                .collect();
            queue!(out, Print(line), Print("\r\n"))?;
        }
        out.flush()?;

        Ok(Self {
            out,
            height,
            delay,
            error: None,
        })
    }

    /// Moves the cursor below the picture and shows it again.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        let below = u16::try_from(self.height).unwrap_or(u16::MAX);
        execute!(self.out, MoveTo(0, below), Show, ResetColor)?;
        Ok(self.out)
    }

    fn put(&mut self, block: Option<(usize, usize)>, text: &str, color: Color) {
        let Some((y, x)) = block else {
            return;
        };
        if self.error.is_some() || y >= self.height {
            return;
        }

        // Blocks past the terminal's coordinate range are clipped.
        let (Ok(row), Ok(col)) = (
            u16::try_from(self.height - 1 - y),
            u16::try_from(2 * x),
        ) else {
            return;
        };
        let result = queue!(
            self.out,
            MoveTo(col, row),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )
        .and_then(|()| self.out.flush());

        if let Err(error) = result {
            self.error = Some(error);
        }
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl<W: Write> DrawingSurface for TerminalSurface<W> {
    fn draw_wall(&mut self, cell: Cell, orientation: Orientation) {
        self.put(layout::wall_block(cell, orientation), "  ", Color::Reset);
        self.pause();
    }

    fn draw_marker(&mut self, cell: Cell, marker: Marker) {
        let (text, color) = match marker {
            Marker::Exploring => ("██", Color::Blue),
            Marker::PathSuccess => ("██", Color::Red),
            Marker::Abandoned => ("  ", Color::Reset),
            Marker::Entry | Marker::Exit => ("██", Color::Green),
        };
        self.put(layout::cell_block(cell), text, color);
    }

    fn visit(&mut self, _cell: Cell) {
        self.pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.finish().unwrap()).unwrap()
    }

    #[test]
    fn new_draws_every_wall_of_a_fresh_grid() {
        let grid = Grid::new(3, 3).unwrap();
        let surface = TerminalSurface::new(Vec::new(), &grid, Duration::ZERO).unwrap();
        let text = output(surface);

        // 5×5 blocks, of which the 4 cells are blank.
        assert_eq!(text.matches("██").count(), 21);
        assert_eq!(text.matches("\r\n").count(), 5);
    }

    #[test]
    fn markers_are_placed_with_north_at_the_top() {
        let grid = Grid::new(3, 3).unwrap();
        let mut surface = TerminalSurface::new(Vec::new(), &grid, Duration::ZERO).unwrap();
        let before = surface.out.len();

        // Cell (1, 1) is block (1, 1): fourth screen row, third column.
        surface.draw_marker(Cell::new(1, 1), Marker::PathSuccess);
        let drawn = String::from_utf8(surface.out[before..].to_vec()).unwrap();
        assert!(drawn.starts_with("\x1b[4;3H"), "{:?}", drawn);
        assert!(drawn.contains("██"));
    }

    #[test]
    fn blocks_beyond_the_terminal_coordinate_range_are_clipped() {
        // 65537 block rows: the south border lands on screen row 65536.
        let grid = Grid::new(32_769, 2).unwrap();
        let mut surface = TerminalSurface::new(Vec::new(), &grid, Duration::ZERO).unwrap();
        let before = surface.out.len();

        surface.draw_wall(Cell::new(0, 1), Orientation::North);
        assert_eq!(surface.out.len(), before);

        // The top row still fits and is drawn.
        surface.draw_marker(Cell::new(32_768, 1), Marker::Exit);
        let drawn = String::from_utf8(surface.out[before..].to_vec()).unwrap();
        assert!(drawn.starts_with("\x1b[2;3H"), "{:?}", drawn);
    }

    #[test]
    fn walls_outside_the_picture_are_ignored() {
        let grid = Grid::new(3, 3).unwrap();
        let mut surface = TerminalSurface::new(Vec::new(), &grid, Duration::ZERO).unwrap();
        let before = surface.out.len();

        surface.draw_wall(Cell::new(1, 0), Orientation::North);
        surface.draw_marker(Cell::new(0, 1), Marker::Exploring);
        assert_eq!(surface.out.len(), before);
    }
}
