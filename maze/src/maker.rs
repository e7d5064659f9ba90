pub mod backtrack;

pub use backtrack::Backtrack;

use rand::Rng;

use crate::{
    error::MazeError,
    grid::{Cell, Direction, Grid},
    shuffle::shuffle,
};

/// Carves passages into a freshly initialized grid. Walls are only ever
/// removed, never added back.
pub struct MazeMaker<'a, R: Rng + ?Sized> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> MazeMaker<'a, R> {
    pub fn new(grid: &'a mut Grid, rng: &'a mut R) -> Self {
        MazeMaker { grid, rng }
    }

    /// A uniformly random cell of the playable region.
    pub fn pick_cell(&mut self) -> Cell {
        let row = self.rng.random_range(1..self.grid.rows());
        let col = self.rng.random_range(1..self.grid.cols());
        Cell::new(row, col)
    }

    fn shuffled_directions(&mut self) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        shuffle(&mut directions, &mut *self.rng);
        directions
    }

    fn playable_neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.grid
            .step(cell, direction)
            .filter(|&neighbor| self.grid.is_playable(neighbor))
    }

    fn require_playable(&self, cell: Cell) -> Result<(), MazeError> {
        if self.grid.is_playable(cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            })
        }
    }
}
