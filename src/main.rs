use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use grid_util::point::Point;
use thiserror::Error;

use hex_pathfinding::{
    solve, solve_with_observer, HexMaze, MazeError, SearchError, SearchObserver, SearchOutcome,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Solves hexagonal-tile mazes with best-first search")]
struct Cli {
    /// Path of the maze description file.
    maze: Option<PathBuf>,

    /// Print the maze after every expansion step.
    #[arg(long)]
    trace: bool,

    /// Milliseconds to pause between traced steps.
    #[arg(long, default_value_t = 0)]
    delay: u64,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("no maze file was provided")]
    MissingArgument,

    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Re-renders the maze after each expansion, optionally throttled.
struct TraceObserver {
    delay: Duration,
}

impl SearchObserver for TraceObserver {
    fn on_expand(&mut self, maze: &HexMaze, _cell: Point) {
        println!("{maze}");
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run(Cli::parse()) {
        println!("{err}");
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let path = cli.maze.ok_or(RunError::MissingArgument)?;
    let mut maze = HexMaze::from_file(&path)?;

    let outcome = if cli.trace {
        let mut observer = TraceObserver {
            delay: Duration::from_millis(cli.delay),
        };
        solve_with_observer(&mut maze, &mut observer)?
    } else {
        solve(&mut maze)?
    };

    report(&outcome);
    Ok(())
}

fn report(outcome: &SearchOutcome) {
    if outcome.found {
        println!("Found the end of the maze!");
        println!("Steps taken: {}", outcome.steps);
        println!("Cells left in the queue: {}", outcome.frontier);
        if let Some(cost) = outcome.cost {
            println!("The shortest path takes {cost} moves.");
        }
    } else {
        println!("The end of the maze could not be reached.");
        println!("Cells left in the queue: {}", outcome.frontier);
        println!("Steps taken: {}", outcome.steps);
    }
}
