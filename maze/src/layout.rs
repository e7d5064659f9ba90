//! Block geometry shared by text and terminal renderers. A grid of R×C cells
//! becomes a picture of `(2(R-1)+1) × (2(C-1)+1)` blocks covering the playable
//! region and its outer walls: odd/odd blocks are cells, odd/even and even/odd
//! blocks are walls, even/even blocks are pillars. Block rows count upward
//! from the south edge, so renderers that draw top-down must flip them.

use crate::grid::{Cell, Grid, Orientation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Cell(Cell),
    Wall,
    Open,
}

pub fn height(grid: &Grid) -> usize {
    2 * (grid.rows() - 1) + 1
}

pub fn width(grid: &Grid) -> usize {
    2 * (grid.cols() - 1) + 1
}

/// `None` for sentinel cells, which have no block of their own.
pub fn cell_block(cell: Cell) -> Option<(usize, usize)> {
    Some((
        (2 * cell.row).checked_sub(1)?,
        (2 * cell.col).checked_sub(1)?,
    ))
}

/// `None` for the pre-cleared sentinel walls, which lie outside the picture.
pub fn wall_block(cell: Cell, orientation: Orientation) -> Option<(usize, usize)> {
    match orientation {
        Orientation::North => Some((2 * cell.row, (2 * cell.col).checked_sub(1)?)),
        Orientation::East => Some(((2 * cell.row).checked_sub(1)?, 2 * cell.col)),
    }
}

pub fn block_at(grid: &Grid, y: usize, x: usize) -> Block {
    let wall = |cell: Cell, orientation: Orientation| {
        if grid.has_wall(cell, orientation).unwrap_or(true) {
            Block::Wall
        } else {
            Block::Open
        }
    };

    match (y % 2, x % 2) {
        (1, 1) => Block::Cell(Cell::new((y + 1) / 2, (x + 1) / 2)),
        (0, 1) => wall(Cell::new(y / 2, (x + 1) / 2), Orientation::North),
        (1, 0) => wall(Cell::new((y + 1) / 2, x / 2), Orientation::East),
        _ => Block::Wall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_alternate_cells_walls_and_pillars() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.remove_wall(Cell::new(1, 1), Cell::new(1, 2)).unwrap();

        assert_eq!(height(&grid), 5);
        assert_eq!(width(&grid), 5);
        assert_eq!(block_at(&grid, 1, 1), Block::Cell(Cell::new(1, 1)));
        assert_eq!(block_at(&grid, 3, 3), Block::Cell(Cell::new(2, 2)));
        assert_eq!(block_at(&grid, 1, 2), Block::Open);
        assert_eq!(block_at(&grid, 2, 1), Block::Wall);
        assert_eq!(block_at(&grid, 0, 1), Block::Wall);
        assert_eq!(block_at(&grid, 1, 0), Block::Wall);
        assert_eq!(block_at(&grid, 2, 2), Block::Wall);
    }

    #[test]
    fn test_wall_and_cell_blocks_agree_with_block_at() {
        let mut grid = Grid::new(4, 4).unwrap();
        let a = Cell::new(2, 2);
        grid.remove_wall(a, Cell::new(3, 2)).unwrap();
        grid.remove_wall(a, Cell::new(2, 3)).unwrap();

        let (y, x) = wall_block(a, Orientation::North).unwrap();
        assert_eq!(block_at(&grid, y, x), Block::Open);
        let (y, x) = wall_block(a, Orientation::East).unwrap();
        assert_eq!(block_at(&grid, y, x), Block::Open);
        let (y, x) = cell_block(a).unwrap();
        assert_eq!(block_at(&grid, y, x), Block::Cell(a));

        assert_eq!(cell_block(Cell::new(0, 2)), None);
        assert_eq!(wall_block(Cell::new(2, 0), Orientation::North), None);
        assert_eq!(wall_block(Cell::new(2, 0), Orientation::East), Some((3, 0)));
    }
}
