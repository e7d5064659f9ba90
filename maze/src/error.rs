use std::fmt;

use thiserror::Error;

use crate::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    VisitedNotReset,
    Unbuilt,
    AlreadyCarved,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::VisitedNotReset => {
                write!(f, "visited flags must be reset before solving")
            }
            Precondition::Unbuilt => write!(f, "the maze has not been generated"),
            Precondition::AlreadyCarved => {
                write!(f, "walls can only be carved into a freshly initialized grid")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("a grid needs at least 2 rows and 2 columns, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell {cell} is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    #[error("cells {from} and {to} are not adjacent")]
    NotAdjacent { from: Cell, to: Cell },
    #[error("precondition violated: {0}")]
    PreconditionViolation(Precondition),
}
