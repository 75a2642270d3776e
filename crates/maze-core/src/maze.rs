//! The [`Maze`] grid and its [`Cell`]s.
//!
//! Walls live on the *source* side of a move: whether a step from `p` towards
//! `dir` is allowed depends only on the flag of the cell at `p`. Builders such
//! as [`Maze::carve`] and [`Maze::parse`] keep both sides of a shared wall in
//! agreement, but nothing enforces it for cells written through [`Maze::set`].

use std::fmt;

use crate::geom::{Direction, Point, Range};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A maze cell: four independent wall flags. `true` blocks movement out of
/// this cell in that direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Cell {
    /// A cell with no walls.
    pub const OPEN: Self = Self {
        north: false,
        east: false,
        south: false,
        west: false,
    };

    /// A cell walled on every side.
    pub const CLOSED: Self = Self {
        north: true,
        east: true,
        south: true,
        west: true,
    };

    /// Whether leaving this cell towards `dir` is blocked.
    #[inline]
    pub const fn blocks(self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Set or clear the wall towards `dir`.
    #[inline]
    pub fn set_wall(&mut self, dir: Direction, wall: bool) {
        match dir {
            Direction::North => self.north = wall,
            Direction::East => self.east = wall,
            Direction::South => self.south = wall,
            Direction::West => self.west = wall,
        }
    }

    /// Set or clear the wall towards `dir` (builder).
    #[inline]
    pub fn with_wall(mut self, dir: Direction, wall: bool) -> Self {
        self.set_wall(dir, wall);
        self
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A rectangular grid of [`Cell`]s stored row-major.
///
/// Deserialization goes through the same size check as construction, so a
/// `Maze` always holds exactly `width × height` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMaze"))]
pub struct Maze {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Maze {
    /// Create a maze with every wall of every cell closed.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Cell::CLOSED)
    }

    /// Create a maze with no internal walls; only the outer border is walled.
    pub fn open(width: i32, height: i32) -> Self {
        let mut maze = Self::filled(width, height, Cell::OPEN);
        for p in maze.bounds() {
            let cell = &mut maze.cells[(p.y * maze.width + p.x) as usize];
            cell.north = p.y == 0;
            cell.south = p.y == height - 1;
            cell.west = p.x == 0;
            cell.east = p.x == width - 1;
        }
        maze
    }

    fn filled(width: i32, height: i32, cell: Cell) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![cell; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Build a maze from rows addressed `rows[y][x]`.
    ///
    /// Zero rows, or a zero-length first row, yields an empty maze. Any later
    /// row whose length differs from the first is rejected.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Ok(Self::default()),
        };
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(MazeError::Ragged {
                row,
                expected,
                found: r.len(),
            });
        }
        let height = rows.len() as i32;
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        Ok(Self {
            cells,
            width: expected as i32,
            height,
        })
    }

    /// Parse a maze drawn in ASCII.
    ///
    /// A `w × h` maze takes `2h + 1` lines of `2w + 1` characters. Even lines
    /// hold `+` corners separated by `-` (wall) or space (open); odd lines
    /// hold `|` (wall) or space between cell interiors, which may contain
    /// any character.
    ///
    /// ```text
    /// +-+-+
    /// |   |
    /// + +-+
    /// | | |
    /// +-+-+
    /// ```
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let lines: Vec<Vec<char>> = s.lines().map(|l| l.chars().collect()).collect();
        if lines.is_empty() {
            return Ok(Self::default());
        }
        let line_len = lines[0].len();
        if let Some((line, l)) = lines.iter().enumerate().find(|(_, l)| l.len() != line_len) {
            return Err(MazeError::RaggedLine {
                line,
                expected: line_len,
                found: l.len(),
            });
        }
        if lines.len() % 2 == 0 || line_len % 2 == 0 {
            return Err(MazeError::EvenSize {
                lines: lines.len(),
                columns: line_len,
            });
        }

        let width = (line_len / 2) as i32;
        let height = (lines.len() / 2) as i32;
        let mut maze = Self::filled(width, height, Cell::OPEN);

        for (row, line) in lines.iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                let pos = Point::new(col as i32, row as i32);
                let x = (col / 2) as i32;
                let y = (row / 2) as i32;
                match (row % 2 == 0, col % 2 == 0) {
                    (true, true) => {
                        if ch != '+' {
                            return Err(MazeError::InvalidRune { ch, pos });
                        }
                    }
                    (true, false) => {
                        let wall = match ch {
                            '-' => true,
                            ' ' => false,
                            _ => return Err(MazeError::InvalidRune { ch, pos }),
                        };
                        // Segment between (x, y - 1) and (x, y).
                        maze.set_side(Point::new(x, y - 1), Direction::South, wall);
                        maze.set_side(Point::new(x, y), Direction::North, wall);
                    }
                    (false, true) => {
                        let wall = match ch {
                            '|' => true,
                            ' ' => false,
                            _ => return Err(MazeError::InvalidRune { ch, pos }),
                        };
                        // Segment between (x - 1, y) and (x, y).
                        maze.set_side(Point::new(x - 1, y), Direction::East, wall);
                        maze.set_side(Point::new(x, y), Direction::West, wall);
                    }
                    (false, false) => {}
                }
            }
        }
        Ok(maze)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    fn set_side(&mut self, p: Point, dir: Direction, wall: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i].set_wall(dir, wall);
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether the maze has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Replace the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Remove the wall between `p` and its neighbour towards `dir`, on both
    /// sides. Returns `false` if either cell is out of bounds.
    pub fn carve(&mut self, p: Point, dir: Direction) -> bool {
        self.set_shared(p, dir, false)
    }

    /// Put up the wall between `p` and its neighbour towards `dir`, on both
    /// sides. Returns `false` if either cell is out of bounds.
    pub fn wall(&mut self, p: Point, dir: Direction) -> bool {
        self.set_shared(p, dir, true)
    }

    fn set_shared(&mut self, p: Point, dir: Direction, wall: bool) -> bool {
        let q = p.step(dir);
        let (Some(i), Some(j)) = (self.index(p), self.index(q)) else {
            return false;
        };
        self.cells[i].set_wall(dir, wall);
        self.cells[j].set_wall(dir.opposite(), wall);
        true
    }

    /// Whether a single step from `p` towards `dir` is legal: `p` and its
    /// neighbour are both inside the maze and `p`'s own wall flag is clear.
    #[inline]
    pub fn can_move(&self, p: Point, dir: Direction) -> bool {
        match self.at(p) {
            Some(cell) => !cell.blocks(dir) && self.bounds().contains(p.step(dir)),
            None => false,
        }
    }

    /// Row-major iterator over every `(Point, Cell)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

/// Unchecked wire form of a [`Maze`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMaze {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMaze> for Maze {
    type Error = MazeError;

    fn try_from(raw: RawMaze) -> Result<Self, MazeError> {
        let area = usize::try_from(raw.width)
            .ok()
            .zip(usize::try_from(raw.height).ok())
            .and_then(|(w, h)| w.checked_mul(h));
        if area != Some(raw.cells.len()) {
            return Err(MazeError::BadDimensions {
                width: raw.width,
                height: raw.height,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        })
    }
}

impl Maze {
    fn blocked(&self, x: i32, y: i32, dir: Direction) -> bool {
        self.at(Point::new(x, y)).is_some_and(|c| c.blocks(dir))
    }

    /// One `+-+ +` line drawn from row `y`'s `dir` walls.
    fn fmt_edge(&self, f: &mut fmt::Formatter<'_>, y: i32, dir: Direction) -> fmt::Result {
        for x in 0..self.width {
            f.write_str(if self.blocked(x, y, dir) { "+-" } else { "+ " })?;
        }
        f.write_str("+\n")
    }
}

impl fmt::Display for Maze {
    /// Render in the format accepted by [`Maze::parse`], with blank cell
    /// interiors. Each shared segment is drawn from the north/west cell's
    /// point of view, plus the south and east borders.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let last = self.width - 1;
        for y in 0..self.height {
            self.fmt_edge(f, y, Direction::North)?;
            for x in 0..self.width {
                f.write_str(if self.blocked(x, y, Direction::West) { "| " } else { "  " })?;
            }
            f.write_str(if self.blocked(last, y, Direction::East) { "|\n" } else { " \n" })?;
        }
        self.fmt_edge(f, self.height - 1, Direction::South)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when building a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An ASCII line's character count differs from the first line's.
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// ASCII input has an even number of lines or of characters per line.
    EvenSize { lines: usize, columns: usize },
    /// Stored dimensions do not match the number of cells.
    BadDimensions {
        width: i32,
        height: i32,
        cells: usize,
    },
    /// A character not allowed at that position of the ASCII drawing.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "maze: row {row} has {found} cells, expected {expected}"),
            Self::RaggedLine {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze: line {line} has {found} characters, expected {expected}"
            ),
            Self::EvenSize { lines, columns } => write!(
                f,
                "maze: drawing is {lines} lines of {columns} characters, both must be odd"
            ),
            Self::BadDimensions {
                width,
                height,
                cells,
            } => write!(f, "maze: {cells} cells do not fill a {width}x{height} grid"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "maze: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
