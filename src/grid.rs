use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;
use tracing::trace;

use crate::cell::Cell;
use crate::rules;

/// Relative positions of the eight cells surrounding a cell, as `(row, col)` offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },

    #[error("Pattern contains no cells")]
    EmptyPattern,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid cell '{found}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },
}

/// A bounded `rows x cols` board of cells. Positions outside the board do not exist: there is no
/// wraparound, and cells on the edge simply have fewer neighbors.
///
/// Cells are stored row-major in a single buffer, so `(row, col)` lives at `row * cols + col`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell is dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimension { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Create a grid whose cells are independently alive or dead with equal probability.
    pub fn random<R>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        let mut grid = Self::new(rows, cols)?;
        grid.randomize(rng);

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`, or `None` if the position is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index_of(row, col)])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(row < self.rows, "row is out of bounds");
        assert!(col < self.cols, "col is out of bounds");

        let i = self.index_of(row, col);
        self.cells[i] = cell;
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Number of live cells on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Re-roll every cell, alive or dead with equal probability.
    pub fn randomize<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.random_bool(0.5));
        }

        trace!(
            rows = self.rows,
            cols = self.cols,
            population = self.population(),
            "seeded grid"
        );
    }

    /// Count the live cells among the (up to 8) in-bounds neighbors of `(row, col)`.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut n = 0;

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };

            if let Some(Cell::Alive) = self.get(r, c) {
                n += 1;
            }
        }

        n
    }

    /// Live neighbor count of every cell, laid out like the grid itself.
    pub fn neighbor_counts(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.live_neighbors(row, col))
                    .collect()
            })
            .collect()
    }

    /// Compute the following generation. `self` is left untouched.
    pub fn next_generation(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());

        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = self.cells[self.index_of(row, col)];
                cells.push(rules::transition(cell, self.live_neighbors(row, col)));
            }
        }

        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Whether both grids hold the same generation, cell for cell. Stops at the first mismatch.
    ///
    /// Grids of different dimensions are never the same generation.
    pub fn same_generation(&self, other: &Grid) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.cells.iter().zip(&other.cells).all(|(a, b)| a == b)
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.same_generation(other)
    }
}

impl Eq for Grid {}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows, "row is out of bounds");
        assert!(col < self.cols, "col is out of bounds");

        &self.cells[self.index_of(row, col)]
    }
}

/// One line per row, cells printed as `0`/`1` separated by a space. No trailing newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }

                write!(f, "{cell}")?;
            }
        }

        Ok(())
    }
}

/// Parse a plaintext pattern, one row per line. Whitespace inside a line is ignored, so the output
/// of [`Grid`]'s `Display` impl parses back to the same grid. Blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut rows = 0;

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut found = 0;
            for c in line.chars().filter(|c| !c.is_whitespace()) {
                let Some(cell) = Cell::from_char(c) else {
                    return Err(GridError::InvalidCell {
                        row: rows,
                        col: found,
                        found: c,
                    });
                };

                cells.push(cell);
                found += 1;
            }

            let expected = *cols.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRow {
                    row: rows,
                    expected,
                    found,
                });
            }

            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(GridError::EmptyPattern);
        };

        Ok(Grid { rows, cols, cells })
    }
}
