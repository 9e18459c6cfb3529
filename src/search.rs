//! Best-first traversal of a [HexMaze].
//!
//! The driver seeds the queue with the start cell, then repeatedly dequeues
//! the lowest-priority cell, tests it against the goal and prices every
//! unvisited neighbour with cost-so-far plus the hexagonal distance estimate.
//! Cells move through Unvisited → Open → Closed exactly once; a cell that is
//! already Open or Closed is never re-priced, so a closed cell is final even
//! when a cheaper path to it would be discovered later.

use grid_util::point::Point;
use log::{info, warn};

use crate::error::SearchError;
use crate::maze::{hex_distance, CellState, HexMaze, NEIGHBOUR_COUNT};
use crate::queue::LinkedPriorityQueue;

/// Statistics reported by one search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the end cell was dequeued.
    pub found: bool,
    /// Number of cells removed from the queue.
    pub steps: u32,
    /// Number of cells still pending in the queue when the loop stopped.
    pub frontier: u32,
    /// Cost of the path to the end cell, when found.
    pub cost: Option<u32>,
}

/// Observation hook invoked as the search progresses. Both callbacks are
/// fire-and-forget: they receive the maze read-only and their absence does
/// not change search results.
pub trait SearchObserver {
    /// Called after a cell has been removed from the queue.
    fn on_dequeue(&mut self, _maze: &HexMaze, _cell: Point) {}

    /// Called after all neighbour slots of a cell have been examined.
    fn on_expand(&mut self, _maze: &HexMaze, _cell: Point) {}
}

/// The no-op observer.
impl SearchObserver for () {}

/// Searches the maze from its start to its end cell.
pub fn solve(maze: &mut HexMaze) -> Result<SearchOutcome, SearchError> {
    solve_with_observer(maze, &mut ())
}

/// Like [solve], with an observer notified after each dequeue and each
/// completed expansion.
pub fn solve_with_observer<O: SearchObserver>(
    maze: &mut HexMaze,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError> {
    maze.reset();
    let start = maze.start();
    let goal = maze.end();

    let mut queue: LinkedPriorityQueue<Point, u32> = LinkedPriorityQueue::new();
    {
        let cell = maze.cell_mut(start);
        cell.cost = 0;
        cell.state = CellState::Open;
    }
    queue.enqueue(start);

    let mut steps: u32 = 0;
    let mut frontier: u32 = 1;
    let mut found = false;
    let mut cost = None;

    while !queue.is_empty() && !found {
        let current = match queue.dequeue() {
            Ok(point) => point,
            Err(err) => {
                // The loop condition just said non-empty; if this fires the
                // queue count and chain have come apart.
                warn!("queue reported empty although the frontier counter is {frontier}");
                return Err(err.into());
            }
        };
        steps += 1;
        frontier -= 1;
        observer.on_dequeue(maze, current);

        if maze.cell(current).end {
            found = true;
            cost = Some(maze.cell(current).cost);
            info!(
                "goal reached after {} steps with path cost {}",
                steps,
                maze.cell(current).cost
            );
        } else {
            let current_cost = maze.cell(current).cost;
            for index in 0..NEIGHBOUR_COUNT {
                if let Some(next) = maze.neighbour(current, index)? {
                    let cell = *maze.cell(next);
                    if !cell.wall && cell.state == CellState::Unvisited {
                        let next_cost = current_cost + 1;
                        let priority = next_cost + hex_distance(next, goal);
                        maze.cell_mut(next).cost = next_cost;
                        queue.enqueue_with_priority(next, priority);
                        maze.cell_mut(next).state = CellState::Open;
                        frontier += 1;
                    }
                }
                // The start cell is never closed. Re-marking once per
                // neighbour slot matches the reference behaviour; the write
                // is idempotent.
                if !maze.cell(current).start {
                    maze.cell_mut(current).state = CellState::Closed;
                }
            }
            observer.on_expand(maze, current);
        }
        debug_assert_eq!(frontier as usize, queue.len());
    }

    if !found {
        warn!("frontier exhausted after {steps} steps without reaching the goal");
    }
    Ok(SearchOutcome {
        found,
        steps,
        frontier,
        cost,
    })
}
