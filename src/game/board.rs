use std::fmt;

use super::player::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

/// Largest number of cells a board may hold
pub const MAX_CELLS: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    One,
    Two,
}

impl Occupant {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::One => Some(Player::One),
            Occupant::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::One => 'X',
            Occupant::Two => 'O',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Fixed-size grid of cells. Row 0 is the top; pieces settle toward the
/// highest row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Occupant>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` exceeds [`MAX_CELLS`]. Use
    /// [`Board::cell_count`] to check dimensions from untrusted input.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            Self::cell_count(rows, columns).is_some(),
            "board of {rows}x{columns} exceeds {MAX_CELLS} cells"
        );
        Board {
            rows,
            columns,
            cells: vec![Occupant::Empty; rows * columns],
        }
    }

    /// Number of cells in a `rows` x `columns` board, or `None` if it
    /// overflows or exceeds [`MAX_CELLS`].
    pub fn cell_count(rows: usize, columns: usize) -> Option<usize> {
        rows.checked_mul(columns).filter(|&n| n <= MAX_CELLS)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a position. Any coordinate outside the grid reads as
    /// `Empty`, so callers can probe past the edges freely.
    pub fn occupant_at(&self, row: isize, column: isize) -> Occupant {
        if row < 0 || column < 0 {
            return Occupant::Empty;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.rows || column >= self.columns {
            return Occupant::Empty;
        }
        self.cells[row * self.columns + column]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.columns {
            return true;
        }
        self.rows == 0 || self.cells[column] != Occupant::Empty
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, column: usize) -> usize {
        if column >= self.columns {
            return 0;
        }
        (0..self.rows)
            .filter(|&row| self.cells[row * self.columns + column] != Occupant::Empty)
            .count()
    }

    /// Columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// On error the board is left untouched.
    pub fn drop_column(&mut self, column: usize, occupant: Occupant) -> Result<usize, DropError> {
        if column >= self.columns {
            return Err(DropError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }

        // Lowest empty row in this column
        for row in (0..self.rows).rev() {
            let idx = row * self.columns + column;
            if self.cells[idx] == Occupant::Empty {
                self.cells[idx] = occupant;
                return Ok(row);
            }
        }

        Err(DropError::ColumnFull { column })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| self.is_column_full(column))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Occupant::Empty)
    }

    /// Reset every cell to `Empty`, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Occupant::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
