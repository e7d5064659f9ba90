use std::fmt;

use log::debug;
use rand::Rng;

use crate::{
    draw::{DrawingSurface, Marker},
    error::MazeError,
    grid::{Cell, Grid, Orientation},
    layout::{self, Block},
    maker::{Backtrack, MazeMaker},
    solver::Solver,
};

/// A generated maze with its entry on the west side and its exit on the east
/// side of the playable region.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub entry: Cell,
    pub exit: Cell,
}

impl Maze {
    /// `rows` and `cols` include the sentinel border, so the maze has
    /// `(rows - 1) × (cols - 1)` cells.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
        surface: &mut dyn DrawingSurface,
    ) -> Result<Self, MazeError> {
        let mut grid = Grid::new(rows, cols)?;

        let mut maker = MazeMaker::new(&mut grid, &mut *rng);
        let start = maker.pick_cell();
        maker.backtrack(start, surface)?;

        let entry = Cell::new(rng.random_range(1..rows), 1);
        let exit = Cell::new(rng.random_range(1..rows), cols - 1);

        // The openings in the outer wall are drawn but not stored, so the
        // grid itself stays a spanning tree with closed borders.
        surface.draw_wall(Cell::new(entry.row, 0), Orientation::East);
        surface.draw_wall(exit, Orientation::East);
        surface.draw_marker(entry, Marker::Entry);
        surface.draw_marker(exit, Marker::Exit);

        debug!(
            "generated a {}x{} maze from {}, entry {}, exit {}",
            rows - 1,
            cols - 1,
            start,
            entry,
            exit
        );

        Ok(Maze { grid, entry, exit })
    }

    /// Resets the visited flags left over from any earlier pass and searches
    /// from the entry to the exit.
    pub fn solve<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        surface: &mut dyn DrawingSurface,
    ) -> Result<Option<Vec<Cell>>, MazeError> {
        self.grid.reset_visited();
        let path =
            Solver::new(&mut self.grid, &mut *rng).solve_path(self.entry, self.exit, surface)?;
        surface.draw_marker(self.entry, Marker::Entry);
        Ok(path)
    }

    pub fn log(&self) -> String {
        self.render(&[])
    }

    /// Draws the maze north side up, marking `path` cells.
    pub fn render(&self, path: &[Cell]) -> String {
        let height = layout::height(&self.grid);
        let width = layout::width(&self.grid);
        let entry_opening =
            layout::wall_block(Cell::new(self.entry.row, 0), Orientation::East);
        let exit_opening = layout::wall_block(self.exit, Orientation::East);

        (0..height)
            .rev()
            .map(|y| {
                (0..width)
                    .map(|x| {
                        if Some((y, x)) == entry_opening || Some((y, x)) == exit_opening {
                            return "  ";
                        }
                        match layout::block_at(&self.grid, y, x) {
                            Block::Wall => "██",
                            Block::Open => "  ",
                            Block::Cell(cell) if path.contains(&cell) => "░░",
                            Block::Cell(_) => "  ",
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
