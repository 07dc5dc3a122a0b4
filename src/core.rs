//! Primitives shared by the board, the move generator and the session.

use std::fmt::{self, Write};

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A board coordinate: `(row, col)`, each within `0..BOARD_WIDTH`. Row 0 is
/// black's back rank in the unflipped orientation, so white's pawns start on
/// row 6.
///
/// The in-range invariant is enforced at construction: every `Square` that
/// exists addresses a real cell, which is what lets the move generator drop
/// off-board candidates by construction instead of raising errors.
///
/// Squares render in algebraic notation with rank 1 at the bottom (row 7):
///
/// ```
/// use tabiya::core::Square;
///
/// assert_eq!(Square::new(7, 0).to_string(), "a1");
/// assert_eq!(Square::new(0, 7).to_string(), "h8");
/// assert_eq!(Square::try_from("e2").unwrap(), Square::new(6, 4));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Connects row and column to form a full square.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..BOARD_WIDTH`. Use
    /// [`Square::try_from`] for untrusted input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_WIDTH && col < BOARD_WIDTH);
        Self { row, col }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square `delta_row` rows and `delta_col` columns away, or
    /// `None` when that lands outside the board. All candidate enumeration in
    /// the move generator goes through this bounds check.
    #[must_use]
    pub const fn offset(self, delta_row: i8, delta_col: i8) -> Option<Self> {
        let row = self.row as i8 + delta_row;
        let col = self.col as i8 + delta_col;
        if row < 0 || row >= BOARD_WIDTH as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some(Self {
            row: row as u8,
            col: col as u8,
        })
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = anyhow::Error;

    fn try_from((row, col): (u8, u8)) -> anyhow::Result<Self> {
        if row >= BOARD_WIDTH || col >= BOARD_WIDTH {
            bail!("square coordinates should be in 0..BOARD_WIDTH, got ({row}, {col})");
        }
        Ok(Self { row, col })
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses a square from algebraic notation, e.g. `"e2"`.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!("square should be two chars (file and rank), got \"{square}\"");
        };
        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let row = match rank {
            '1'..='8' => BOARD_WIDTH - 1 - (rank as u8 - b'1'),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Ok(Self { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            BOARD_WIDTH - self.row
        )
    }
}

/// The game is played between two players: White (moving first) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(match self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard chess piece kinds. The discriminants are the magnitudes of the
/// signed piece codes stored in [`crate::board::Board`] cells.
#[allow(missing_docs)]
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl TryFrom<u8> for PieceKind {
    type Error = anyhow::Error;

    fn try_from(magnitude: u8) -> anyhow::Result<Self> {
        match magnitude {
            1 => Ok(Self::Pawn),
            2 => Ok(Self::Bishop),
            3 => Ok(Self::Knight),
            4 => Ok(Self::Rook),
            5 => Ok(Self::Queen),
            6 => Ok(Self::King),
            _ => bail!("piece kind magnitude should be within 1..=6, got {magnitude}"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        })
    }
}

/// A specific piece owned by a player. The wire form is a signed code: the
/// kind's magnitude with a positive sign for White, negative for Black; zero
/// is reserved for an empty cell and is not a valid `Piece`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Returns the signed code stored in board cells.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self.owner {
            Player::White => self.kind as i8,
            Player::Black => -(self.kind as i8),
        }
    }
}

impl TryFrom<i8> for Piece {
    type Error = anyhow::Error;

    /// Decodes a signed piece code.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] for zero (an empty cell, not a piece) and
    /// for magnitudes outside `1..=6`.
    fn try_from(code: i8) -> anyhow::Result<Self> {
        if code == 0 {
            bail!("piece code should be nonzero (zero marks an empty cell)");
        }
        let owner = if code > 0 {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self {
            owner,
            kind: PieceKind::try_from(code.unsigned_abs())?,
        })
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses a piece from its FEN-style symbol: uppercase for White,
    /// lowercase for Black.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.owner {
            Player::White => write!(f, "{}", self.kind.to_string().to_ascii_uppercase()),
            Player::Black => write!(f, "{}", self.kind),
        }
    }
}

/// Which color sits at the bottom of the displayed board.
///
/// There is exactly one perspective value per [`crate::session::Session`] and
/// both the renderer and pawn generation read it, so the displayed flip and
/// the pawn advance direction can never disagree. Pawns advance toward
/// decreasing rows when their color sits at the bottom.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Perspective {
    #[default]
    WhiteBottom,
    BlackBottom,
}

impl Perspective {
    /// The opposite perspective.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::WhiteBottom => Self::BlackBottom,
            Self::BlackBottom => Self::WhiteBottom,
        }
    }

    /// Row increment a pawn of `player` advances by: `1` for the side moving
    /// down the stored grid, `-1` for the side moving up.
    #[must_use]
    pub const fn row_step(self, player: Player) -> i8 {
        match (self, player) {
            (Self::WhiteBottom, Player::Black) | (Self::BlackBottom, Player::White) => 1,
            _ => -1,
        }
    }

    /// The row a pawn of `player` double-steps from: row 1 for the side
    /// advancing toward increasing rows, row 6 for the other.
    #[must_use]
    pub const fn pawn_home_row(self, player: Player) -> u8 {
        if self.row_step(player) == 1 {
            1
        } else {
            BOARD_WIDTH - 2
        }
    }
}
