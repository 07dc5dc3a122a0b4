//! Square-centric board state: an 8×8 grid of signed piece codes.
//!
//! The board is pure data. It does not know whose turn it is, does not
//! validate moves and keeps no history; all of that policy lives in
//! [`crate::session`]. The in-memory layout mirrors the wire form: each cell
//! holds a signed code (zero for empty, see [`Piece::code`]) and rows are
//! independently owned arrays.

use std::fmt::{self, Write};

use anyhow::bail;

use crate::core::{Piece, Player, Square, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Codes of the standard starting position: black's back rank on row 0,
/// white's on row 7.
const STARTING_CELLS: [[i8; WIDTH]; WIDTH] = [
    [-4, -3, -2, -5, -6, -2, -3, -4],
    [-1, -1, -1, -1, -1, -1, -1, -1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [4, 3, 2, 5, 6, 2, 3, 4],
];

/// An 8×8 grid of signed piece codes.
///
/// `Board` has a 1:1 relationship with the piece-placement field of FEN,
/// which [`Board::try_from`] parses and [`std::fmt::Display`] renders:
///
/// ```
/// use tabiya::board::Board;
///
/// let board = Board::starting();
/// assert_eq!(
///     board.to_string(),
///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[i8; WIDTH]; WIDTH],
}

impl Board {
    /// Creates the standard 32-piece starting position.
    #[must_use]
    pub const fn starting() -> Self {
        Self {
            cells: STARTING_CELLS,
        }
    }

    /// Creates a board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[0; WIDTH]; WIDTH],
        }
    }

    /// Returns the piece standing on `square`, if any.
    #[must_use]
    pub fn at(&self, square: Square) -> Option<Piece> {
        Piece::try_from(self.code_at(square)).ok()
    }

    /// Returns the raw signed code of `square` (zero for an empty cell).
    #[must_use]
    pub const fn code_at(&self, square: Square) -> i8 {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Places `piece` on `square`, replacing whatever stood there.
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.cells[square.row() as usize][square.col() as usize] = piece.code();
    }

    /// Empties `square`.
    pub fn clear(&mut self, square: Square) {
        self.cells[square.row() as usize][square.col() as usize] = 0;
    }

    /// Moves the piece standing on `from` to `to`, emptying `from`. The
    /// destination's previous occupant (if any) is overwritten: that is the
    /// whole of capturing. No validation happens here; the session only calls
    /// this with destinations the move generator produced.
    ///
    /// An empty `from` leaves the board untouched, so re-applying a move that
    /// already emptied its origin cannot wipe the destination.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let code = self.code_at(from);
        if code == 0 {
            return;
        }
        self.cells[to.row() as usize][to.col() as usize] = code;
        self.cells[from.row() as usize][from.col() as usize] = 0;
    }

    /// Number of pieces of `player` on the board.
    #[must_use]
    pub fn num_pieces(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&code| match player {
                Player::White => code > 0,
                Player::Black => code < 0,
            })
            .count()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Parses the piece-placement field of FEN: eight `/`-separated rank
    /// fields, row 0 (rank 8) first, digits for runs of empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] on a wrong number of rank fields, a rank not
    /// describing exactly eight cells or an unknown piece symbol.
    fn try_from(placement: &str) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != WIDTH {
            bail!(
                "placement should have {WIDTH} rank fields, got {}",
                ranks.len()
            );
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for symbol in rank.chars() {
                if let Some(run) = symbol.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                if col >= WIDTH {
                    bail!("rank {} describes more than {WIDTH} cells", WIDTH - row);
                }
                board.cells[row][col] = Piece::try_from(symbol)?.code();
                col += 1;
            }
            if col != WIDTH {
                bail!(
                    "rank {} should describe exactly {WIDTH} cells, got {col}",
                    WIDTH - row
                );
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Renders the piece-placement field of FEN.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                f.write_char('/')?;
            }
            let mut empty_run = 0;
            for &code in cells {
                match Piece::try_from(code) {
                    Ok(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    Err(_) => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
        }
        Ok(())
    }
}
