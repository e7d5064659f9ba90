pub mod draw;
pub mod error;
pub mod grid;
pub mod layout;
pub mod maker;
pub mod maze;
pub mod shuffle;
pub mod solver;

pub use draw::{DrawingSurface, Event, Marker, Trace};
pub use error::{MazeError, Precondition};
pub use grid::{Cell, Direction, Grid, Orientation};
pub use maker::{Backtrack, MazeMaker};
pub use maze::Maze;
pub use solver::Solver;
