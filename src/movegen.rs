//! The move generator: pure, per-piece-kind destination computation.
//!
//! Each entry point takes the origin square and a read-only board snapshot
//! and returns the ordered list of squares the piece standing on the origin
//! may move to, honoring blocking and color-based capture rules. Nothing here
//! mutates state, retains the board or checks whose turn it is: turn
//! ownership is the session's single gate (see [`crate::session`]), and
//! whether a move would leave the mover's king attacked is deliberately not
//! considered.
//!
//! The emission order is not semantically meaningful but is deterministic:
//! fixed offset-table order for king and knight, right/left/down/up rays for
//! the rook, a fixed diagonal order for the bishop and rook-then-bishop
//! concatenation for the queen.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::core::{Perspective, PieceKind, Player, Square};

/// An upper bound on destinations a single piece can have: a queen in the
/// middle of an empty board reaches 27 squares.
pub const MAX_DESTINATIONS: usize = 27;

/// Destination squares of one piece, in generation order. Kept on the stack:
/// generation runs on every piece click.
pub type MoveList = ArrayVec<Square, MAX_DESTINATIONS>;

/// Tunable deviations from the reference movement rules.
///
/// The interactive board this engine reproduces allows a pawn to double-step
/// over an occupied square: only the landing square is checked for emptiness.
/// That is almost certainly a latent bug rather than a rule, so it is kept as
/// the default behavior but exposed as a knob instead of being silently
/// fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    /// Also require the square a double-stepping pawn jumps over to be
    /// empty, as standard chess does.
    pub strict_double_step: bool,
}

impl Rules {
    /// Rules with standard-chess double-step adjacency checking.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_double_step: true,
        }
    }
}

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (2, -1),
    (1, -2),
    (-2, 1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
];

// Scan order of the reference board: right, left, down, up.
const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Computes destinations for the piece standing on `origin`, dispatching on
/// its kind. `perspective` and `rules` only affect pawns.
///
/// An empty origin is a caller-side precondition; this entry point degrades
/// to an empty list rather than panicking.
#[must_use]
pub fn generate_moves(
    kind: PieceKind,
    origin: Square,
    board: &Board,
    perspective: Perspective,
    rules: Rules,
) -> MoveList {
    match kind {
        PieceKind::Pawn => pawn_moves(origin, board, perspective, rules),
        PieceKind::Bishop => bishop_moves(origin, board),
        PieceKind::Knight => knight_moves(origin, board),
        PieceKind::Rook => rook_moves(origin, board),
        PieceKind::Queen => queen_moves(origin, board),
        PieceKind::King => king_moves(origin, board),
    }
}

/// King destinations: the eight adjacent squares that are on the board and
/// not occupied by the mover's own color.
#[must_use]
pub fn king_moves(origin: Square, board: &Board) -> MoveList {
    step_moves(origin, board, &KING_OFFSETS)
}

/// Knight destinations: the eight (±1, ±2)/(±2, ±1) jumps, same occupancy
/// rule as the king. Blocking does not apply.
#[must_use]
pub fn knight_moves(origin: Square, board: &Board) -> MoveList {
    step_moves(origin, board, &KNIGHT_OFFSETS)
}

/// Rook destinations: four orthogonal rays. A ray ends before a same-color
/// piece and on an opposite-color piece (a capture).
#[must_use]
pub fn rook_moves(origin: Square, board: &Board) -> MoveList {
    ray_moves(origin, board, &ROOK_RAYS)
}

/// Bishop destinations: the rook's ray walk along the four diagonals.
#[must_use]
pub fn bishop_moves(origin: Square, board: &Board) -> MoveList {
    ray_moves(origin, board, &BISHOP_RAYS)
}

/// Queen destinations: rook rays followed by bishop rays. The two sets are
/// disjoint by construction, so plain concatenation suffices.
#[must_use]
pub fn queen_moves(origin: Square, board: &Board) -> MoveList {
    let mut moves = rook_moves(origin, board);
    moves.extend(bishop_moves(origin, board));
    moves
}

/// Pawn destinations. The advance direction is the color combined with the
/// session perspective (see [`Perspective::row_step`]): double-step from the
/// home rank, single-step onto an empty square ahead, and the two
/// diagonal-ahead squares only when occupied by the opponent.
///
/// Unless [`Rules::strict_double_step`] is set, the double-step checks only
/// its landing square, faithfully reproducing the reference behavior of
/// jumping over an occupied intermediate square.
#[must_use]
pub fn pawn_moves(origin: Square, board: &Board, perspective: Perspective, rules: Rules) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.at(origin) else {
        return moves;
    };
    let step = perspective.row_step(piece.owner);

    if origin.row() == perspective.pawn_home_row(piece.owner) {
        if let (Some(ahead), Some(landing)) = (origin.offset(step, 0), origin.offset(2 * step, 0))
        {
            let jumped_square_ok = !rules.strict_double_step || board.at(ahead).is_none();
            if board.at(landing).is_none() && jumped_square_ok {
                moves.push(landing);
            }
        }
    }

    if let Some(ahead) = origin.offset(step, 0) {
        if board.at(ahead).is_none() {
            moves.push(ahead);
        }
    }

    // The reference scans the minus file first for the side moving down the
    // grid and the plus file first for the other side.
    let diagonals = if step == 1 { [-1, 1] } else { [1, -1] };
    for delta_col in diagonals {
        if let Some(target) = origin.offset(step, delta_col) {
            if board.at(target).is_some_and(|other| other.owner != piece.owner) {
                moves.push(target);
            }
        }
    }

    moves
}

/// Single-step enumeration shared by the king and the knight.
fn step_moves(origin: Square, board: &Board, offsets: &[(i8, i8)]) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.at(origin) else {
        return moves;
    };
    for &(delta_row, delta_col) in offsets {
        if let Some(target) = origin.offset(delta_row, delta_col) {
            if !is_own(board, target, piece.owner) {
                moves.push(target);
            }
        }
    }
    moves
}

/// Ray walk shared by the sliding pieces: empty squares extend the ray, a
/// same-color piece ends it exclusively, an opposite-color piece ends it
/// inclusively.
fn ray_moves(origin: Square, board: &Board, rays: &[(i8, i8)]) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.at(origin) else {
        return moves;
    };
    for &(delta_row, delta_col) in rays {
        let mut current = origin;
        while let Some(target) = current.offset(delta_row, delta_col) {
            match board.at(target) {
                None => moves.push(target),
                Some(other) if other.owner == piece.owner => break,
                Some(_) => {
                    moves.push(target);
                    break;
                }
            }
            current = target;
        }
    }
    moves
}

fn is_own(board: &Board, square: Square, us: Player) -> bool {
    board.at(square).is_some_and(|piece| piece.owner == us)
}
