//! Game session: the owner of the canonical board, the turn and the
//! selection lifecycle.
//!
//! The session is the glue between the pure move generator and a rendering/
//! input host. The host reports pointer events translated into squares;
//! the session answers with candidate destinations to highlight and applies
//! committed moves. Everything is synchronous and single-threaded: each
//! operation completes before the next input event, so generation always
//! observes the latest committed board.
//!
//! Turn ownership is enforced here and only here ([`Session::grab`] ignores
//! pieces of the side not to move); the generators themselves never check it.

use crate::board::Board;
use crate::core::{Perspective, Piece, Player, Square};
use crate::movegen::{generate_moves, MoveList, Rules};

/// A pending piece selection: the grabbed origin, its candidate destinations
/// and whether the piece is currently being dragged.
#[derive(Clone, Debug)]
pub struct Selection {
    origin: Square,
    candidates: MoveList,
    dragging: bool,
}

impl Selection {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn origin(&self) -> Square {
        self.origin
    }

    /// Destinations to highlight, in generation order.
    #[must_use]
    pub fn candidates(&self) -> &[Square] {
        &self.candidates
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Two players on one board. Runs indefinitely: with check detection out of
/// scope there is no terminal state.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    turn: Player,
    perspective: Perspective,
    rules: Rules,
    selection: Option<Selection>,
}

impl Session {
    /// Starts a fresh game: starting position, White to move, white at the
    /// bottom of the display, reference movement rules.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_position(Board::starting(), Player::White)
    }

    /// Starts a game from an arbitrary position.
    #[must_use]
    pub const fn from_position(board: Board, turn: Player) -> Self {
        Self {
            board,
            turn,
            perspective: Perspective::WhiteBottom,
            rules: Rules {
                strict_double_step: false,
            },
            selection: None,
        }
    }

    /// Replaces the movement-rule knobs (see [`Rules`]).
    #[must_use]
    pub const fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// The single perspective value shared by the renderer and pawn
    /// generation.
    #[must_use]
    pub const fn perspective(&self) -> Perspective {
        self.perspective
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Candidate destinations of the pending selection (empty when idle).
    #[must_use]
    pub fn candidates(&self) -> &[Square] {
        self.selection
            .as_ref()
            .map_or(&[], Selection::candidates)
    }

    /// The piece on `square`, if any. Input handling uses this to decide
    /// whether a pointer-down starts a drag.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.at(square)
    }

    /// Pointer-down on a piece: starts a drag and computes its candidate
    /// destinations. Grabbing an empty square or a piece of the side not to
    /// move is ignored and leaves any pending selection untouched.
    pub fn grab(&mut self, square: Square) -> &[Square] {
        let Some(piece) = self.board.at(square) else {
            return &[];
        };
        if piece.owner != self.turn {
            return &[];
        }
        let candidates = generate_moves(
            piece.kind,
            square,
            &self.board,
            self.perspective,
            self.rules,
        );
        self.selection = Some(Selection {
            origin: square,
            candidates,
            dragging: true,
        });
        self.candidates()
    }

    /// Pointer-up anywhere: the drag ends but the selection (and its
    /// highlights) stays pending.
    pub fn release(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            selection.dragging = false;
        }
    }

    /// Pointer-down or drop on a square while a selection is pending.
    ///
    /// A candidate square commits the move (returns `true`); the selected
    /// square itself or any non-candidate square cancels the selection with
    /// no partial effects. With nothing pending this is a no-op: starting a
    /// selection goes through [`Session::grab`].
    pub fn click(&mut self, square: Square) -> bool {
        let Some(selection) = self.selection.as_ref() else {
            return false;
        };
        if square != selection.origin() && selection.candidates.contains(&square) {
            return self.commit(square);
        }
        self.selection = None;
        false
    }

    /// Commits the pending selection onto `destination` if it is one of the
    /// generated candidates: moves the piece, clears the selection and flips
    /// the turn. Any other destination changes nothing.
    pub fn commit(&mut self, destination: Square) -> bool {
        let Some(selection) = self.selection.as_ref() else {
            return false;
        };
        if !selection.candidates.contains(&destination) {
            return false;
        }
        let origin = selection.origin();
        self.apply_move(origin, destination);
        true
    }

    /// Applies a move without consulting the selection: `destination` takes
    /// the origin's piece, the origin empties and the turn flips. The caller
    /// is the gate — this does not re-validate the destination.
    ///
    /// The turn flips even when `origin` is empty and the placement no-ops;
    /// callers that bypass [`Session::commit`] own that policy.
    pub fn apply_move(&mut self, origin: Square, destination: Square) {
        self.board.apply_move(origin, destination);
        self.turn = self.turn.opponent();
        self.selection = None;
    }

    /// Flips which color sits at the bottom of the display. Pawn advance
    /// directions follow automatically, as both read the same value. Clears
    /// any pending selection: its candidates were generated under the old
    /// perspective.
    pub fn flip_perspective(&mut self) {
        self.perspective = self.perspective.flipped();
        self.selection = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
