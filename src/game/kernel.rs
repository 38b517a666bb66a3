//! The four fixed 4-cell detection kernels and valid-mode sliding-window
//! counting over an occupancy matrix.
//!
//! A kernel is placed at every origin where it fits entirely on the board (no
//! padding) and the occupied cells under it are summed. A sum of 4 is a line
//! of four.

use std::fmt;

use super::board::{Grid, COLS, ROWS};

pub const WIN_LENGTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal, 1x4.
    Row,
    /// Vertical, 4x1.
    Column,
    /// Principal diagonal (4x4 identity), rising to the right.
    LeftDiag,
    /// Anti-diagonal (mirrored identity), falling to the right.
    RightDiag,
}

impl Orientation {
    /// Scan order used by every detector and the evaluator.
    pub const ALL: [Orientation; 4] = [
        Orientation::Row,
        Orientation::Column,
        Orientation::LeftDiag,
        Orientation::RightDiag,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Orientation::Row => "ROW",
            Orientation::Column => "COLUMN",
            Orientation::LeftDiag => "LEFTDIAG",
            Orientation::RightDiag => "RIGHTDIAG",
        }
    }

    pub fn kernel(self) -> &'static Kernel {
        &KERNELS[self as usize]
    }

    /// `(row, col)` step from one cell of a line to the next, walking
    /// left to right (bottom to top for columns).
    pub fn direction(self) -> (isize, isize) {
        match self {
            Orientation::Row => (0, 1),
            Orientation::Column => (1, 0),
            Orientation::LeftDiag => (1, 1),
            Orientation::RightDiag => (-1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(self, Orientation::LeftDiag | Orientation::RightDiag)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A binary pattern given by its bounding box and the offsets of its set
/// cells relative to the window origin (lowest row, leftmost column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    pub orientation: Orientation,
    pub height: usize,
    pub width: usize,
    pub cells: [(usize, usize); 4],
}

pub static KERNELS: [Kernel; 4] = [
    Kernel {
        orientation: Orientation::Row,
        height: 1,
        width: 4,
        cells: [(0, 0), (0, 1), (0, 2), (0, 3)],
    },
    Kernel {
        orientation: Orientation::Column,
        height: 4,
        width: 1,
        cells: [(0, 0), (1, 0), (2, 0), (3, 0)],
    },
    Kernel {
        orientation: Orientation::LeftDiag,
        height: 4,
        width: 4,
        cells: [(0, 0), (1, 1), (2, 2), (3, 3)],
    },
    Kernel {
        orientation: Orientation::RightDiag,
        height: 4,
        width: 4,
        cells: [(0, 3), (1, 2), (2, 1), (3, 0)],
    },
];

/// One placement of a kernel: its origin and the number of set cells under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub row: usize,
    pub col: usize,
    pub sum: u8,
}

impl Kernel {
    /// Number of valid origins vertically.
    pub fn window_rows(&self) -> usize {
        ROWS - self.height + 1
    }

    /// Number of valid origins horizontally.
    pub fn window_cols(&self) -> usize {
        COLS - self.width + 1
    }

    pub fn window_sum(&self, grid: &Grid, row: usize, col: usize) -> u8 {
        self.cells
            .iter()
            .map(|&(dr, dc)| grid[row + dr][col + dc])
            .sum()
    }

    /// Every valid window, column-major: all origins of column 0 from the
    /// bottom up, then column 1, and so on.
    pub fn windows<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = Window> + 'a {
        (0..self.window_cols()).flat_map(move |col| {
            (0..self.window_rows()).map(move |row| Window {
                row,
                col,
                sum: self.window_sum(grid, row, col),
            })
        })
    }

    /// First window (column-major) that is completely filled.
    pub fn find_line(&self, grid: &Grid) -> Option<Window> {
        self.windows(grid).find(|window| window.sum == WIN_LENGTH)
    }
}
