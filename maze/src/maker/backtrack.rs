use log::{debug, trace};
use rand::Rng;

use super::MazeMaker;
use crate::{
    draw::DrawingSurface,
    error::{MazeError, Precondition},
    grid::{Cell, Direction},
};

pub trait Backtrack {
    fn backtrack(
        &mut self,
        start: Cell,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), MazeError>;
}

struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

impl<R: Rng + ?Sized> MazeMaker<'_, R> {
    fn enter(&mut self, cell: Cell) -> Result<Frame, MazeError> {
        self.grid.mark_visited(cell)?;
        Ok(Frame {
            cell,
            directions: self.shuffled_directions(),
            next: 0,
        })
    }
}

impl<R: Rng + ?Sized> Backtrack for MazeMaker<'_, R> {
    /// Depth-first carving. Each frame tries its directions in the order they
    /// were shuffled on entry and descends into the first unvisited neighbor
    /// still walled off, so the result is the depth-first spanning tree rooted
    /// at `start`.
    fn backtrack(
        &mut self,
        start: Cell,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), MazeError> {
        self.require_playable(start)?;
        if self.grid.open_wall_count() != 0 || self.grid.visited_count() != 0 {
            return Err(MazeError::PreconditionViolation(
                Precondition::AlreadyCarved,
            ));
        }

        let mut stack = vec![self.enter(start)?];
        let mut carved = 1;
        let mut deepest = 1;

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.directions.len() {
                stack.pop();
                continue;
            }

            let curr = frame.cell;
            let direction = frame.directions[frame.next];
            frame.next += 1;

            let Some(next) = self.playable_neighbor(curr, direction) else {
                continue;
            };
            if self.grid.is_visited(next)? || self.grid.has_path(curr, next)? {
                continue;
            }

            let (cell, orientation) = self.grid.wall_between(curr, next)?;
            self.grid.remove_wall(curr, next)?;
            surface.draw_wall(cell, orientation);
            trace!("opened {} wall of {}", orientation, cell);

            stack.push(self.enter(next)?);
            carved += 1;
            deepest = deepest.max(stack.len());
        }

        debug!(
            "carved {} cells from {}, {} walls open, deepest backtrack {}",
            carved,
            start,
            self.grid.open_wall_count(),
            deepest
        );

        Ok(())
    }
}
