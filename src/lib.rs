//! # hex_pathfinding
//!
//! Best-first maze solving on grids of hexagonal cells. A maze is parsed
//! from a plain-text description into a grid with one start and one end
//! cell; the search prices each frontier cell with its cost-so-far plus an
//! exact hexagonal distance estimate and keeps the frontier in a singly
//! linked priority queue. The estimate never overestimates and is consistent
//! across adjacent cells, so the first time the end cell leaves the queue
//! its recorded cost is the length of a shortest path.
//!
//! ```
//! use hex_pathfinding::{solve, HexMaze};
//!
//! let mut maze: HexMaze = "S..\n.#.\n..E".parse().unwrap();
//! let outcome = solve(&mut maze).unwrap();
//! assert!(outcome.found);
//! assert_eq!(outcome.cost, Some(3));
//! ```

pub mod error;
pub mod maze;
pub mod queue;
pub mod search;

pub use error::{EmptyQueueError, InvalidNeighbourIndexError, MazeError, SearchError};
pub use maze::{hex_distance, Cell, CellState, HexMaze, NEIGHBOUR_COUNT};
pub use queue::LinkedPriorityQueue;
pub use search::{solve, solve_with_observer, SearchObserver, SearchOutcome};
