use std::fmt;

use super::player::Player;

pub const COLS: usize = 7;
pub const LEVELS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Yellow,
    Red,
}

/// Terminal classification of a game. A board with neither a winner nor a
/// full grid is still in progress, represented as `None` by [`Board::winner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The 7x6 grid. Columns run 0..6 left to right, levels run 0..5 bottom to
/// top. Gravity invariant: within a column the non-empty cells form a
/// contiguous run starting at level 0.
///
/// `Board` is `Copy`; simulations duplicate it freely and mutate the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; LEVELS],
}

/// The four line directions checked for a win, as (col, level) steps.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; LEVELS],
        }
    }

    /// Get the cell at a position. Total over all integer coordinates:
    /// anything off the board yields `None`, which compares unequal to every
    /// `Some(cell)`. The win scanner relies on this to probe one step past
    /// the edge without any boundary special-casing.
    pub fn get(&self, col: i32, level: i32) -> Option<Cell> {
        if col < 0 || col >= COLS as i32 || level < 0 || level >= LEVELS as i32 {
            return None;
        }
        Some(self.cells[level as usize][col as usize])
    }

    /// Overwrite the cell at a position; no-op when out of range.
    pub fn set(&mut self, col: i32, level: i32, cell: Cell) {
        if col < 0 || col >= COLS as i32 || level < 0 || level >= LEVELS as i32 {
            return;
        }
        self.cells[level as usize][col as usize] = cell;
    }

    /// Reset every cell to Empty.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; LEVELS];
    }

    /// Check if a column is full (top level occupied).
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(col as i32, LEVELS as i32 - 1) != Some(Cell::Empty)
    }

    /// Drop a piece into a column: the piece lands on the lowest empty level.
    /// Returns false and leaves the board unchanged if the column is full (or
    /// out of range). Exactly one cell changes on success.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> bool {
        if col >= COLS {
            return false;
        }
        for level in 0..LEVELS {
            if self.cells[level][col] == Cell::Empty {
                self.cells[level][col] = cell;
                return true;
            }
        }
        false
    }

    /// Scan the whole board for a finished game.
    ///
    /// For every occupied cell and each of the four line directions, walk
    /// backward while the neighbor holds the same color to find the start of
    /// the run, then count forward from that start. A run only completes when
    /// counted from its true start, so the same line is never double-counted.
    /// Off-board probes hit the `None` sentinel from [`Board::get`] and stop
    /// the walk.
    ///
    /// Returns `Some(Winner(..))` for a run of four or more, `Some(Draw)` for
    /// a full board without one, and `None` while the game is in progress.
    pub fn winner(&self) -> Option<GameOutcome> {
        let mut saw_empty = false;

        for level in 0..LEVELS {
            for col in 0..COLS {
                let cell = self.cells[level][col];
                let player = match cell {
                    Cell::Empty => {
                        saw_empty = true;
                        continue;
                    }
                    Cell::Yellow => Player::Yellow,
                    Cell::Red => Player::Red,
                };

                for (dc, dl) in DIRECTIONS {
                    // Walk back to the start of the run.
                    let mut c = col as i32;
                    let mut l = level as i32;
                    while self.get(c - dc, l - dl) == Some(cell) {
                        c -= dc;
                        l -= dl;
                    }

                    // Count forward from the start.
                    let mut run = 0;
                    while self.get(c, l) == Some(cell) {
                        run += 1;
                        c += dc;
                        l += dl;
                    }

                    if run >= 4 {
                        return Some(GameOutcome::Winner(player));
                    }
                }
            }
        }

        if saw_empty {
            None
        } else {
            Some(GameOutcome::Draw)
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text rendering: one row per level from the top down, then a
/// column-index legend.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..LEVELS).rev() {
            for col in 0..COLS {
                let glyph = match self.cells[level][col] {
                    Cell::Empty => '.',
                    Cell::Yellow => 'Y',
                    Cell::Red => 'R',
                };
                write!(f, "[{glyph}]")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            write!(f, " {col} ")?;
        }
        writeln!(f)
    }
}
