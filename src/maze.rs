//! Hexagonal maze grids parsed from a plain-text description.
//!
//! The text grammar is one line per row: `#` (or space) marks a wall, `.` an
//! open cell, `S` the single start cell and `E` the single end cell. Blank
//! lines are skipped and ragged rows are padded with walls to the widest row.
//! Rows use odd-r offset coordinates: odd rows are shifted half a cell to the
//! right, which is also how [Display](fmt::Display) renders them.

use core::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;

use crate::error::{InvalidNeighbourIndexError, MazeError};

/// Number of neighbour slots of a hexagonal cell.
pub const NEIGHBOUR_COUNT: usize = 6;

// Neighbour slot order: E, NE, NW, W, SW, SE. The row parity decides how the
// diagonal slots map to grid coordinates (odd rows are shifted right).
const EVEN_ROW_OFFSETS: [(i32, i32); NEIGHBOUR_COUNT] =
    [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)];
const ODD_ROW_OFFSETS: [(i32, i32); NEIGHBOUR_COUNT] =
    [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)];

/// Traversal state of a cell during a search. Transitions are monotonic:
/// Unvisited → Open → Closed, driven exclusively by the search loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Unvisited,
    Open,
    Closed,
}

/// One hexagonal cell. The wall and role flags are fixed once the maze is
/// parsed; only `state` and `cost` change during a search.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub wall: bool,
    pub start: bool,
    pub end: bool,
    pub state: CellState,
    pub cost: u32,
}

/// A parsed maze: a `width` x `height` grid of hexagonal cells with exactly
/// one start and one end cell. Cells are owned by the maze for its whole
/// lifetime and are identified by their [Point] position.
#[derive(Debug)]
pub struct HexMaze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
}

impl HexMaze {
    /// Reads and parses a maze description file.
    pub fn from_file(path: &Path) -> Result<HexMaze, MazeError> {
        let text = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                MazeError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                MazeError::Io(err)
            }
        })?;
        Self::parse(&text)
    }

    /// Parses a maze description, validating that every character is known
    /// and that exactly one start and one end cell are present.
    pub fn parse(text: &str) -> Result<HexMaze, MazeError> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.is_empty() {
            return Err(MazeError::Empty);
        }
        let width = rows.iter().map(|line| line.chars().count()).max().unwrap();
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut end = None;
        for (y, row) in rows.iter().enumerate() {
            let mut glyphs: Vec<char> = row.chars().collect();
            glyphs.resize(width, ' ');
            for (x, glyph) in glyphs.into_iter().enumerate() {
                let (wall, is_start, is_end) = match glyph {
                    '#' | ' ' => (true, false, false),
                    '.' => (false, false, false),
                    'S' => (false, true, false),
                    'E' => (false, false, true),
                    other => {
                        return Err(MazeError::UnknownCharacter {
                            character: other,
                            row: y,
                            column: x,
                        })
                    }
                };
                let position = Point::new(x as i32, y as i32);
                if is_start && start.replace(position).is_some() {
                    return Err(MazeError::DuplicateStart);
                }
                if is_end && end.replace(position).is_some() {
                    return Err(MazeError::DuplicateEnd);
                }
                cells.push(Cell {
                    wall,
                    start: is_start,
                    end: is_end,
                    state: CellState::Unvisited,
                    cost: 0,
                });
            }
        }
        let start = start.ok_or(MazeError::MissingStart)?;
        let end = end.ok_or(MazeError::MissingEnd)?;
        info!("parsed {}x{} hexagonal maze", width, height);
        Ok(HexMaze {
            width,
            height,
            cells,
            start,
            end,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn index(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// Read access to the cell at `p`. Panics when `p` is out of bounds.
    pub fn cell(&self, p: Point) -> &Cell {
        &self.cells[self.index(p)]
    }

    // State and cost writes stay inside the crate so only the search driver
    // can advance the cell state machine.
    pub(crate) fn cell_mut(&mut self, p: Point) -> &mut Cell {
        let index = self.index(p);
        &mut self.cells[index]
    }

    /// Clears traversal state and costs so the maze can be searched again.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.state = CellState::Unvisited;
            cell.cost = 0;
        }
    }

    /// Looks up the neighbour of `p` in the given slot. Returns [None] for
    /// slots pointing off the grid and an error for slots outside `0..6`.
    pub fn neighbour(
        &self,
        p: Point,
        index: usize,
    ) -> Result<Option<Point>, InvalidNeighbourIndexError> {
        if index >= NEIGHBOUR_COUNT {
            return Err(InvalidNeighbourIndexError { index });
        }
        let (dx, dy) = if p.y % 2 == 0 {
            EVEN_ROW_OFFSETS[index]
        } else {
            ODD_ROW_OFFSETS[index]
        };
        let q = Point::new(p.x + dx, p.y + dy);
        Ok(if self.in_bounds(q) { Some(q) } else { None })
    }

    /// All existing neighbours of `p`, walls included.
    pub fn neighbours(&self, p: Point) -> SmallVec<[Point; NEIGHBOUR_COUNT]> {
        (0..NEIGHBOUR_COUNT)
            .filter_map(|index| self.neighbour(p, index).ok().flatten())
            .collect()
    }

    /// Iterates over all cell positions, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }
}

/// Exact number of moves between two cells on an unobstructed hexagonal grid,
/// computed through cube coordinates. Never overestimates the move count on a
/// maze with walls and changes by at most one between adjacent cells, so it
/// is an admissible and consistent search heuristic.
pub fn hex_distance(a: Point, b: Point) -> u32 {
    let ax = a.x - (a.y - (a.y & 1)) / 2;
    let az = a.y;
    let ay = -ax - az;
    let bx = b.x - (b.y - (b.y & 1)) / 2;
    let bz = b.y;
    let by = -bx - bz;
    (((ax - bx).abs() + (ay - by).abs() + (az - bz).abs()) / 2) as u32
}

impl FromStr for HexMaze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i32 {
            if y % 2 == 1 {
                write!(f, " ")?;
            }
            for x in 0..self.width as i32 {
                let cell = self.cell(Point::new(x, y));
                let glyph = if cell.wall {
                    '#'
                } else if cell.start {
                    'S'
                } else if cell.end {
                    'E'
                } else {
                    match cell.state {
                        CellState::Unvisited => '.',
                        CellState::Open => 'o',
                        CellState::Closed => '*',
                    }
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_records_dimensions_and_roles() {
        let maze: HexMaze = "S.#\n..E".parse().unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 2);
        assert_eq!(maze.start(), Point::new(0, 0));
        assert_eq!(maze.end(), Point::new(2, 1));
        assert!(maze.cell(Point::new(2, 0)).wall);
        assert!(!maze.cell(Point::new(1, 1)).wall);
        assert_eq!(maze.cell(Point::new(1, 1)).state, CellState::Unvisited);
    }

    #[test]
    fn ragged_rows_are_padded_with_walls() {
        let maze: HexMaze = "S.\n..E".parse().unwrap();
        assert_eq!(maze.width(), 3);
        assert!(maze.cell(Point::new(2, 0)).wall);
    }

    #[test]
    fn unknown_character_is_reported_with_position() {
        let err = HexMaze::parse("S.\n.X\n.E").unwrap_err();
        assert!(matches!(
            err,
            MazeError::UnknownCharacter {
                character: 'X',
                row: 1,
                column: 1,
            }
        ));
    }

    #[test]
    fn start_and_end_cardinality_is_validated() {
        assert!(matches!(
            HexMaze::parse(".E").unwrap_err(),
            MazeError::MissingStart
        ));
        assert!(matches!(
            HexMaze::parse("S.").unwrap_err(),
            MazeError::MissingEnd
        ));
        assert!(matches!(
            HexMaze::parse("SS\n.E").unwrap_err(),
            MazeError::DuplicateStart
        ));
        assert!(matches!(
            HexMaze::parse("SE\nE.").unwrap_err(),
            MazeError::DuplicateEnd
        ));
        assert!(matches!(HexMaze::parse("\n\n").unwrap_err(), MazeError::Empty));
    }

    #[test]
    fn missing_file_is_distinguished_from_other_io_errors() {
        let err = HexMaze::from_file(Path::new("no/such/maze.txt")).unwrap_err();
        assert!(matches!(err, MazeError::FileNotFound { .. }));
    }

    #[test]
    fn neighbour_slots_follow_row_parity() {
        let maze: HexMaze = "S...\n....\n...E".parse().unwrap();
        // Even row: diagonals lean left.
        let even = Point::new(1, 0);
        assert_eq!(maze.neighbour(even, 0).unwrap(), Some(Point::new(2, 0)));
        assert_eq!(maze.neighbour(even, 3).unwrap(), Some(Point::new(0, 0)));
        assert_eq!(maze.neighbour(even, 4).unwrap(), Some(Point::new(0, 1)));
        assert_eq!(maze.neighbour(even, 5).unwrap(), Some(Point::new(1, 1)));
        assert_eq!(maze.neighbour(even, 1).unwrap(), None);
        // Odd row: diagonals lean right.
        let odd = Point::new(1, 1);
        assert_eq!(maze.neighbour(odd, 1).unwrap(), Some(Point::new(2, 0)));
        assert_eq!(maze.neighbour(odd, 2).unwrap(), Some(Point::new(1, 0)));
        assert_eq!(maze.neighbour(odd, 4).unwrap(), Some(Point::new(1, 2)));
        assert_eq!(maze.neighbour(odd, 5).unwrap(), Some(Point::new(2, 2)));
        // Corner cells fall off the grid.
        assert_eq!(maze.neighbour(Point::new(0, 0), 3).unwrap(), None);
    }

    #[test]
    fn neighbour_index_out_of_range_is_an_error() {
        let maze: HexMaze = "SE".parse().unwrap();
        let err = maze.neighbour(Point::new(0, 0), 6).unwrap_err();
        assert_eq!(err, InvalidNeighbourIndexError { index: 6 });
        assert!(maze.neighbour(Point::new(0, 0), usize::MAX).is_err());
    }

    #[test]
    fn neighbours_returns_only_cells_on_the_grid() {
        let maze: HexMaze = "S..\n...\n..E".parse().unwrap();
        let corner = maze.neighbours(Point::new(0, 0));
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&Point::new(1, 0)));
        assert!(corner.contains(&Point::new(0, 1)));
        let middle = maze.neighbours(Point::new(1, 1));
        assert_eq!(middle.len(), 6);
    }

    #[test]
    fn hex_distance_matches_known_cases() {
        assert_eq!(hex_distance(Point::new(2, 1), Point::new(2, 1)), 0);
        assert_eq!(hex_distance(Point::new(0, 0), Point::new(1, 0)), 1);
        assert_eq!(hex_distance(Point::new(0, 0), Point::new(0, 1)), 1);
        assert_eq!(hex_distance(Point::new(1, 0), Point::new(0, 1)), 1);
        assert_eq!(hex_distance(Point::new(0, 0), Point::new(2, 2)), 3);
        assert_eq!(hex_distance(Point::new(0, 0), Point::new(3, 0)), 3);
    }

    /// Consistency: the estimate changes by at most one between adjacent
    /// cells, and it is symmetric.
    #[test]
    fn hex_distance_is_consistent_across_adjacent_cells() {
        let maze: HexMaze = "S....\n.....\n.....\n.....\n....E".parse().unwrap();
        let goal = maze.end();
        for p in maze.points() {
            assert_eq!(hex_distance(p, goal), hex_distance(goal, p));
            for q in maze.neighbours(p) {
                assert_eq!(hex_distance(p, q), 1);
                let dp = hex_distance(p, goal) as i64;
                let dq = hex_distance(q, goal) as i64;
                assert!((dp - dq).abs() <= 1);
            }
        }
    }

    #[test]
    fn display_staggers_odd_rows() {
        let maze: HexMaze = "S.\n.E".parse().unwrap();
        let rendered = format!("{}", maze);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "S . ");
        assert_eq!(lines[1], " . E ");
    }
}
