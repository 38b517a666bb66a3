use super::kernel::{Orientation, Window};
use super::{Occupancy, Player};

/// A board coordinate. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The first line of four found on the board, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub orientation: Orientation,
    /// First cell of the line walking along [`Orientation::direction`].
    pub anchor: Position,
    pub player: Player,
}

impl WinningLine {
    fn from_window(orientation: Orientation, window: Window, player: Player) -> Self {
        // The anti-diagonal window covers (row + 3, col) down to (row, col + 3);
        // its leftmost cell sits at the top of the window.
        let anchor = match orientation {
            Orientation::RightDiag => Position {
                row: window.row + 3,
                col: window.col,
            },
            _ => Position {
                row: window.row,
                col: window.col,
            },
        };
        WinningLine {
            orientation,
            anchor,
            player,
        }
    }

    /// The four cells of the line, starting at the anchor.
    pub fn cells(&self) -> [Position; 4] {
        let (dr, dc) = self.orientation.direction();
        std::array::from_fn(|i| Position {
            row: (self.anchor.row as isize + dr * i as isize) as usize,
            col: (self.anchor.col as isize + dc * i as isize) as usize,
        })
    }
}

/// Kernels outer, Red before Yellow inner: the first hit decides.
fn first_line(occupancy: &Occupancy) -> Option<WinningLine> {
    Orientation::ALL.iter().find_map(|&orientation| {
        let kernel = orientation.kernel();
        [Player::Red, Player::Yellow].into_iter().find_map(|player| {
            kernel
                .find_line(occupancy.grid(player))
                .map(|window| WinningLine::from_window(orientation, window, player))
        })
    })
}

/// True if either player has four aligned discs in any orientation.
pub fn has_win(occupancy: &Occupancy) -> bool {
    first_line(occupancy).is_some()
}

pub fn winner(occupancy: &Occupancy) -> Option<Player> {
    first_line(occupancy).map(|line| line.player)
}

pub fn winning_line(occupancy: &Occupancy) -> Option<WinningLine> {
    first_line(occupancy)
}
