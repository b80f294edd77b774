//! Maze layout: a rectangle of cells addressed by `(x, y)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::EnvError;

/// Contents of one maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Start,
    End,
}

impl Cell {
    /// Decode the numeric layout codes 0..=3.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Wall),
            2 => Some(Cell::Start),
            3 => Some(Cell::End),
            _ => None,
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '·',
            Cell::Wall => '█',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }
}

/// A cell coordinate: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`.
    #[must_use]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A step in the maze. `Up` decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(dx, dy)` offset.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dx, dy) = self.delta();
        write!(f, "({dx}, {dy})")
    }
}

/// Layout of the default training maze. 0 empty, 1 wall.
pub const DEFAULT_MAZE: [[u8; 8]; 8] = [
    [0, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 0, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 1, 1],
    [0, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 0, 1, 0],
    [0, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 1, 1, 0],
    [0, 1, 0, 1, 0, 0, 0, 0],
];

/// Start of the default maze.
pub const DEFAULT_START: GridPosition = GridPosition::new(0, 0);

/// Goal of the default maze.
pub const DEFAULT_END: GridPosition = GridPosition::new(5, 0);

/// A rectangular maze. Rows may not be ragged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of layout codes.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, EnvError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(EnvError::InvalidGrid("grid is empty".into()));
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(EnvError::InvalidGrid(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (x, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or_else(|| {
                    EnvError::InvalidGrid(format!("unknown cell code {code} at ({x}, {y})"))
                })?;
                cells.push(cell);
            }
        }
        Ok(Self { width, cells })
    }

    /// The default 8×8 maze.
    pub fn default_maze() -> Self {
        Self {
            width: 8,
            cells: DEFAULT_MAZE
                .iter()
                .flatten()
                .map(|&code| if code == 1 { Cell::Wall } else { Cell::Empty })
                .collect(),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    fn index(&self, pos: GridPosition) -> Option<usize> {
        let (x, y) = (usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?);
        (x < self.width && y < self.height()).then(|| y * self.width + x)
    }

    /// Cell at `pos`, `None` off the grid.
    #[must_use]
    pub fn get(&self, pos: GridPosition) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    #[must_use]
    pub fn is_wall(&self, pos: GridPosition) -> bool {
        self.get(pos) == Some(Cell::Wall)
    }

    /// On the grid and not a wall.
    #[must_use]
    pub fn is_open(&self, pos: GridPosition) -> bool {
        matches!(self.get(pos), Some(cell) if cell != Cell::Wall)
    }

    /// First cell of `kind` in row-major order.
    #[must_use]
    pub fn find_first(&self, kind: Cell) -> Option<GridPosition> {
        let i = self.cells.iter().position(|&c| c == kind)?;
        Some(GridPosition::new(
            (i % self.width) as i32,
            (i / self.width) as i32,
        ))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}
