use std::fmt;

use crate::error::MazeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// North increases the row index and east increases the column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

/// The two wall kinds a grid stores per cell. The south wall of a cell is the
/// north wall of the cell below it, and its west wall is the east wall of the
/// cell to its left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    North,
    East,
}

/// An R×C lattice of cells. Row 0 and column 0 form a sentinel border that is
/// permanently visited; the playable region is rows `[1, R)` × columns `[1, C)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    north_walls: Vec<Vec<bool>>,
    east_walls: Vec<Vec<bool>>,
    visited: Vec<Vec<bool>>,
    visited_count: usize, // Playable cells only.
    open_walls: usize,    // Removed since initialization, not counting the sentinel's.
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows < 2 || cols < 2 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let mut north_walls = vec![vec![true; cols]; rows];
        let mut east_walls = vec![vec![true; cols]; rows];
        let mut visited = vec![vec![false; cols]; rows];

        for c in 0..cols {
            east_walls[0][c] = false;
            visited[0][c] = true;
        }
        for r in 0..rows {
            north_walls[r][0] = false;
            visited[r][0] = true;
        }

        Ok(Grid {
            rows,
            cols,
            north_walls,
            east_walls,
            visited,
            visited_count: 0,
            open_walls: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn is_playable(&self, cell: Cell) -> bool {
        self.contains(cell) && cell.row > 0 && cell.col > 0
    }

    pub fn playable_count(&self) -> usize {
        (self.rows - 1) * (self.cols - 1)
    }

    pub fn playable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..self.rows).flat_map(move |r| (1..self.cols).map(move |c| Cell::new(r, c)))
    }

    pub fn open_wall_count(&self) -> usize {
        self.open_walls
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// The cell one step away in `direction`, if it lies inside the grid.
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if !self.contains(cell) {
            return None;
        }

        let Cell { row, col } = cell;
        let next = match direction {
            Direction::North => Cell::new(row + 1, col),
            Direction::South => Cell::new(row.checked_sub(1)?, col),
            Direction::East => Cell::new(row, col + 1),
            Direction::West => Cell::new(row, col.checked_sub(1)?),
        };

        self.contains(next).then_some(next)
    }

    /// Orthogonal neighbors in the order north, south, east, west.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(cell, direction))
    }

    /// Locates the single stored wall separating two edge-adjacent cells.
    pub fn wall_between(&self, from: Cell, to: Cell) -> Result<(Cell, Orientation), MazeError> {
        self.check(from)?;
        self.check(to)?;

        if from.col == to.col && from.row.abs_diff(to.row) == 1 {
            Ok((Cell::new(from.row.min(to.row), from.col), Orientation::North))
        } else if from.row == to.row && from.col.abs_diff(to.col) == 1 {
            Ok((Cell::new(from.row, from.col.min(to.col)), Orientation::East))
        } else {
            Err(MazeError::NotAdjacent { from, to })
        }
    }

    pub fn has_wall(&self, cell: Cell, orientation: Orientation) -> Result<bool, MazeError> {
        self.check(cell)?;
        let Cell { row, col } = cell;
        Ok(match orientation {
            Orientation::North => self.north_walls[row][col],
            Orientation::East => self.east_walls[row][col],
        })
    }

    pub fn has_path(&self, from: Cell, to: Cell) -> Result<bool, MazeError> {
        let (cell, orientation) = self.wall_between(from, to)?;
        Ok(!self.has_wall(cell, orientation)?)
    }

    /// Returns whether a wall was actually removed.
    pub fn remove_wall(&mut self, from: Cell, to: Cell) -> Result<bool, MazeError> {
        let (cell, orientation) = self.wall_between(from, to)?;
        let Cell { row, col } = cell;
        let wall = match orientation {
            Orientation::North => &mut self.north_walls[row][col],
            Orientation::East => &mut self.east_walls[row][col],
        };

        if !*wall {
            return Ok(false);
        }

        *wall = false;
        self.open_walls += 1;
        Ok(true)
    }

    pub fn is_visited(&self, cell: Cell) -> Result<bool, MazeError> {
        self.check(cell)?;
        Ok(self.visited[cell.row][cell.col])
    }

    pub fn mark_visited(&mut self, cell: Cell) -> Result<(), MazeError> {
        self.check(cell)?;
        let flag = &mut self.visited[cell.row][cell.col];
        if !*flag {
            *flag = true;
            self.visited_count += 1;
        }
        Ok(())
    }

    /// Clears the visited flag of every playable cell. The sentinel border
    /// stays visited.
    pub fn reset_visited(&mut self) {
        for row in self.visited.iter_mut().skip(1) {
            for flag in row.iter_mut().skip(1) {
                *flag = false;
            }
        }
        self.visited_count = 0;
    }

    fn check(&self, cell: Cell) -> Result<(), MazeError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_grids_smaller_than_two_by_two() {
        assert_eq!(
            Grid::new(1, 5),
            Err(MazeError::InvalidDimensions { rows: 1, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(MazeError::InvalidDimensions { rows: 5, cols: 0 })
        );
        assert!(Grid::new(2, 2).is_ok());
    }

    #[test]
    fn test_new_marks_sentinel_border_visited_and_clears_its_walls() {
        let grid = Grid::new(4, 5).unwrap();

        for r in 0..4 {
            for c in 0..5 {
                let cell = Cell::new(r, c);
                let on_border = r == 0 || c == 0;
                assert_eq!(grid.is_visited(cell).unwrap(), on_border, "{cell}");
            }
        }

        for c in 0..5 {
            assert!(!grid.has_wall(Cell::new(0, c), Orientation::East).unwrap());
        }
        for r in 0..4 {
            assert!(!grid.has_wall(Cell::new(r, 0), Orientation::North).unwrap());
        }

        // The border is still walled off from the playable region.
        assert!(grid.has_wall(Cell::new(0, 2), Orientation::North).unwrap());
        assert!(grid.has_wall(Cell::new(2, 0), Orientation::East).unwrap());
        assert_eq!(grid.open_wall_count(), 0);
        assert_eq!(grid.visited_count(), 0);
        assert_eq!(grid.playable_count(), 12);
    }

    #[test]
    fn test_has_path_rejects_cells_that_are_not_adjacent() {
        let grid = Grid::new(5, 5).unwrap();
        let from = Cell::new(1, 1);

        for to in [Cell::new(2, 2), Cell::new(1, 3), Cell::new(1, 1)] {
            assert_eq!(
                grid.has_path(from, to),
                Err(MazeError::NotAdjacent { from, to })
            );
        }
    }

    #[test]
    fn test_has_path_rejects_cells_outside_the_grid() {
        let grid = Grid::new(3, 3).unwrap();
        let outside = Cell::new(3, 2);
        assert_eq!(
            grid.has_path(Cell::new(2, 2), outside),
            Err(MazeError::OutOfBounds {
                cell: outside,
                rows: 3,
                cols: 3
            })
        );
    }

    #[test]
    fn test_remove_wall_uses_one_shared_wall_in_both_directions() {
        let mut grid = Grid::new(4, 4).unwrap();
        let a = Cell::new(2, 2);
        let b = Cell::new(3, 2);
        let c = Cell::new(2, 1);

        assert!(!grid.has_path(a, b).unwrap());
        assert!(grid.remove_wall(b, a).unwrap());
        assert!(grid.has_path(a, b).unwrap());
        assert!(grid.has_path(b, a).unwrap());
        assert!(!grid.has_wall(a, Orientation::North).unwrap());

        assert!(grid.remove_wall(a, c).unwrap());
        assert!(grid.has_path(c, a).unwrap());
        assert!(!grid.has_wall(c, Orientation::East).unwrap());
        assert_eq!(grid.open_wall_count(), 2);
    }

    #[test]
    fn test_remove_wall_is_idempotent() {
        let mut grid = Grid::new(4, 4).unwrap();
        let a = Cell::new(1, 1);
        let b = Cell::new(1, 2);

        assert!(grid.remove_wall(a, b).unwrap());
        let snapshot = grid.clone();

        assert!(!grid.remove_wall(a, b).unwrap());
        assert!(!grid.remove_wall(b, a).unwrap());
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_neighbors_follow_canonical_order_and_stay_inside_the_grid() {
        let grid = Grid::new(4, 4).unwrap();

        let inner: Vec<Cell> = grid.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            inner,
            vec![
                Cell::new(2, 1),
                Cell::new(0, 1),
                Cell::new(1, 2),
                Cell::new(1, 0)
            ]
        );

        let corner: Vec<Cell> = grid.neighbors(Cell::new(3, 3)).collect();
        assert_eq!(corner, vec![Cell::new(2, 3), Cell::new(3, 2)]);

        let origin: Vec<Cell> = grid.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(origin, vec![Cell::new(1, 0), Cell::new(0, 1)]);

        assert_eq!(grid.neighbors(Cell::new(4, 1)).count(), 0);
    }

    #[test]
    fn test_reset_visited_keeps_the_sentinel_border() {
        let mut grid = Grid::new(3, 3).unwrap();
        for cell in grid.playable_cells().collect::<Vec<_>>() {
            grid.mark_visited(cell).unwrap();
        }
        assert_eq!(grid.visited_count(), 4);

        grid.reset_visited();

        assert_eq!(grid.visited_count(), 0);
        assert!(grid.is_visited(Cell::new(0, 2)).unwrap());
        assert!(grid.is_visited(Cell::new(2, 0)).unwrap());
        assert!(!grid.is_visited(Cell::new(1, 1)).unwrap());
        assert!(!grid.is_visited(Cell::new(2, 2)).unwrap());
    }

    #[test]
    fn test_mark_visited_counts_each_playable_cell_once() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.mark_visited(Cell::new(1, 1)).unwrap();
        grid.mark_visited(Cell::new(1, 1)).unwrap();
        grid.mark_visited(Cell::new(0, 1)).unwrap();
        assert_eq!(grid.visited_count(), 1);
    }
}
