use std::{fmt, io};

use crossterm::terminal;
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};

use maze::{Cell, Grid, Maze, MazeError};

use crate::{config::Config, terminal::TerminalSurface};

#[derive(Debug)]
pub enum RunError {
    Maze(MazeError),
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Maze(e) => write!(f, "{}", e),
            RunError::Io(e) => write!(f, "terminal output failed: {}", e),
        }
    }
}

impl From<MazeError> for RunError {
    fn from(e: MazeError) -> Self {
        RunError::Maze(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}

pub fn run(config: &Config) -> Result<(), RunError> {
    let mut rng = match config.seed {
        Some(seed) => {
            info!("Seeding with {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let (maze, path) = if config.animate {
        animate(config, &mut rng)?
    } else {
        let mut maze = Maze::generate(config.rows, config.cols, &mut rng, &mut ())?;
        let path = maze.solve(&mut rng, &mut ())?;
        println!("{}", maze.render(path.as_deref().unwrap_or(&[])));
        (maze, path)
    };

    report(&maze, path.as_deref());
    Ok(())
}

fn animate(config: &Config, rng: &mut StdRng) -> Result<(Maze, Option<Vec<Cell>>), RunError> {
    let blank = Grid::new(config.rows, config.cols)?;
    warn_if_too_large(&blank);

    let mut surface = TerminalSurface::new(io::stdout(), &blank, config.delay)?;
    let mut maze = Maze::generate(config.rows, config.cols, rng, &mut surface)?;
    info!("Solving from {} to {}.", maze.entry, maze.exit);
    let path = maze.solve(rng, &mut surface)?;
    surface.finish()?;

    Ok((maze, path))
}

fn warn_if_too_large(grid: &Grid) {
    let needed_cols = 2 * maze::layout::width(grid);
    let needed_rows = maze::layout::height(grid);
    if let Ok((cols, rows)) = terminal::size() {
        if needed_cols > cols as usize || needed_rows > rows as usize {
            warn!(
                "The maze needs {}x{} characters but the terminal is {}x{}.",
                needed_cols, needed_rows, cols, rows
            );
        }
    }
}

fn report(maze: &Maze, path: Option<&[Cell]>) {
    match path {
        Some(path) => println!(
            "Found a path of {} steps from {} to {} through {} cells.",
            path.len() - 1,
            maze.entry,
            maze.exit,
            maze.grid.playable_count()
        ),
        None => println!("No path from {} to {}.", maze.entry, maze.exit),
    }
}
