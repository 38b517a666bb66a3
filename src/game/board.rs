use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const MAX_PLIES: usize = ROWS * COLS;

/// A 6x7 binary matrix, indexed `[row][col]` with row 0 at the bottom.
pub type Grid = [[u8; COLS]; ROWS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The pair of per-player occupancy matrices derived from a move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    grids: [Grid; 2],
    heights: [usize; COLS],
}

impl Occupancy {
    /// Create an empty board
    pub fn new() -> Self {
        Occupancy {
            grids: [[[0; COLS]; ROWS]; 2],
            heights: [0; COLS],
        }
    }

    /// Drop a disc for `player` into `col`, returning the row where it landed.
    pub(crate) fn place(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }
        let row = self.heights[col];
        if row >= ROWS {
            return Err(MoveError::ColumnFull { column: col });
        }
        self.grids[player.index()][row][col] = 1;
        self.heights[col] += 1;
        Ok(row)
    }

    /// The occupancy matrix of one player.
    pub fn grid(&self, player: Player) -> &Grid {
        &self.grids[player.index()]
    }

    /// Get the cell at a specific position. Row 0 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if self.grids[0][row][col] == 1 {
            Cell::Red
        } else if self.grids[1][row][col] == 1 {
            Cell::Yellow
        } else {
            Cell::Empty
        }
    }

    /// Number of discs in a column.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || self.heights[col] >= ROWS
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of discs owned by `player`.
    pub fn disc_count(&self, player: Player) -> usize {
        self.grid(player)
            .iter()
            .flatten()
            .map(|&cell| cell as usize)
            .sum()
    }

    /// The same board with every Red disc turned Yellow and vice versa.
    pub fn swapped(&self) -> Self {
        Occupancy {
            grids: [self.grids[1], self.grids[0]],
            heights: self.heights,
        }
    }
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Red => 'X',
                    Cell::Yellow => 'O',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "0 1 2 3 4 5 6")
    }
}
