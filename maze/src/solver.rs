use log::{debug, trace};
use rand::Rng;

use crate::{
    draw::{DrawingSurface, Marker},
    error::{MazeError, Precondition},
    grid::{Cell, Direction, Grid},
    shuffle::shuffle,
};

/// Depth-first search with dead-end pruning over a generated grid. Walls are
/// read-only here; only the visited flags change.
pub struct Solver<'a, R: Rng + ?Sized> {
    grid: &'a mut Grid,
    rng: &'a mut R,
}

struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

enum Arrival {
    Found,
    Failed,
    Explore(Frame),
}

impl<'a, R: Rng + ?Sized> Solver<'a, R> {
    pub fn new(grid: &'a mut Grid, rng: &'a mut R) -> Self {
        Solver { grid, rng }
    }

    pub fn solve(
        &mut self,
        start: Cell,
        end: Cell,
        surface: &mut dyn DrawingSurface,
    ) -> Result<bool, MazeError> {
        Ok(self.solve_path(start, end, surface)?.is_some())
    }

    /// The path from `start` to `end` inclusive, or `None` if `end` cannot be
    /// reached. Every cell entered is reported to `surface`, and when the
    /// search succeeds each path cell is marked `PathSuccess`, `end` first.
    pub fn solve_path(
        &mut self,
        start: Cell,
        end: Cell,
        surface: &mut dyn DrawingSurface,
    ) -> Result<Option<Vec<Cell>>, MazeError> {
        self.check_preconditions(start, end)?;

        let mut stack = match self.enter(start, end, surface)? {
            Arrival::Found => return Ok(Some(vec![start])),
            Arrival::Failed => {
                debug!("no path from {} to {}: start is a dead end", start, end);
                return Ok(None);
            }
            Arrival::Explore(frame) => vec![frame],
        };

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.directions.len() {
                let abandoned = frame.cell;
                stack.pop();
                surface.draw_marker(abandoned, Marker::Abandoned);
                trace!("abandoned {}", abandoned);
                continue;
            }

            let curr = frame.cell;
            let direction = frame.directions[frame.next];
            frame.next += 1;

            let Some(next) = self.grid.step(curr, direction) else {
                continue;
            };
            if !self.grid.has_path(curr, next)? || self.grid.is_visited(next)? {
                continue;
            }

            match self.enter(next, end, surface)? {
                Arrival::Found => {
                    let mut path: Vec<Cell> = stack.iter().map(|frame| frame.cell).collect();
                    for &cell in path.iter().rev() {
                        surface.draw_marker(cell, Marker::PathSuccess);
                    }
                    path.push(next);
                    debug!(
                        "found a path of {} cells from {} to {}, entered {} cells",
                        path.len(),
                        start,
                        end,
                        self.grid.visited_count()
                    );
                    return Ok(Some(path));
                }
                Arrival::Failed => {}
                Arrival::Explore(frame) => stack.push(frame),
            }
        }

        debug!(
            "no path from {} to {}, entered {} cells",
            start,
            end,
            self.grid.visited_count()
        );
        Ok(None)
    }

    fn check_preconditions(&self, start: Cell, end: Cell) -> Result<(), MazeError> {
        for cell in [start, end] {
            if !self.grid.is_playable(cell) {
                return Err(MazeError::OutOfBounds {
                    cell,
                    rows: self.grid.rows(),
                    cols: self.grid.cols(),
                });
            }
        }

        if self.grid.visited_count() != 0 {
            return Err(MazeError::PreconditionViolation(
                Precondition::VisitedNotReset,
            ));
        }

        if self.grid.playable_count() > 1 && self.grid.open_wall_count() == 0 {
            return Err(MazeError::PreconditionViolation(Precondition::Unbuilt));
        }

        Ok(())
    }

    /// No neighbor is both reachable without crossing a wall and unvisited.
    fn is_dead_end(&self, cell: Cell) -> Result<bool, MazeError> {
        for neighbor in self.grid.neighbors(cell) {
            if self.grid.has_path(cell, neighbor)? && !self.grid.is_visited(neighbor)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn enter(
        &mut self,
        cell: Cell,
        end: Cell,
        surface: &mut dyn DrawingSurface,
    ) -> Result<Arrival, MazeError> {
        self.grid.mark_visited(cell)?;
        surface.visit(cell);

        if !self.grid.is_playable(cell) {
            return Ok(Arrival::Failed);
        }

        // Checked before the dead-end test: an exit that is a leaf of the
        // maze has no unvisited neighbors left when it is reached.
        if cell == end {
            surface.draw_marker(cell, Marker::PathSuccess);
            return Ok(Arrival::Found);
        }

        if self.is_dead_end(cell)? {
            trace!("dead end at {}", cell);
            return Ok(Arrival::Failed);
        }

        let mut directions = Direction::ALL;
        shuffle(&mut directions, &mut *self.rng);
        surface.draw_marker(cell, Marker::Exploring);

        Ok(Arrival::Explore(Frame {
            cell,
            directions,
            next: 0,
        }))
    }
}
