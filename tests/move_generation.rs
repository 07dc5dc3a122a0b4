use itertools::Itertools;
use pretty_assertions::assert_eq;
use tabiya::{
    generate_moves,
    movegen::{bishop_moves, pawn_moves, queen_moves, rook_moves},
    Board, Perspective, PieceKind, Rules, Square,
};

fn setup(placement: &str) -> Board {
    Board::try_from(placement).expect("parsing a valid placement: {placement}")
}

fn sq(name: &str) -> Square {
    Square::try_from(name).expect("parsing a valid square: {name}")
}

fn squares(names: &[&str]) -> Vec<Square> {
    names.iter().map(|name| sq(name)).collect()
}

/// Destinations of the piece standing on `origin`, dispatched on its kind the
/// way the session does it.
fn moves_for(board: &Board, origin: &str) -> Vec<Square> {
    let origin = sq(origin);
    let piece = board.at(origin).expect("origin holds a piece");
    generate_moves(
        piece.kind,
        origin,
        board,
        Perspective::default(),
        Rules::default(),
    )
    .to_vec()
}

fn sorted(moves: Vec<Square>) -> Vec<Square> {
    moves.into_iter().sorted().collect()
}

// Initial board, white pawn on its home rank: double advance first, then the
// single step, no diagonals onto empty squares.
#[test]
fn starting_pawn_advances() {
    let board = Board::starting();
    assert_eq!(moves_for(&board, "a2"), squares(&["a4", "a3"]));
    assert_eq!(moves_for(&board, "e7"), squares(&["e5", "e6"]));
}

#[test]
fn starting_knight_jumps() {
    let board = Board::starting();
    assert_eq!(
        sorted(moves_for(&board, "b1")),
        sorted(squares(&["a3", "c3"]))
    );
    assert_eq!(
        sorted(moves_for(&board, "g8")),
        sorted(squares(&["f6", "h6"]))
    );
}

// Every other piece is boxed in at the start.
#[test]
fn starting_back_rank_is_stuck() {
    let board = Board::starting();
    for origin in ["a1", "c1", "d1", "e1", "a8", "c8", "d8", "e8"] {
        assert_eq!(moves_for(&board, origin), vec![], "piece on {origin}");
    }
}

#[test]
fn lone_rook_covers_rank_and_file() {
    let board = setup("8/8/8/8/4R3/8/8/8");
    let moves = moves_for(&board, "e4");
    assert_eq!(moves.len(), 14);
    assert!(!moves.contains(&sq("e4")));
    let expected = (0..8u8)
        .flat_map(|i| [Square::new(4, i), Square::new(i, 4)])
        .filter(|square| *square != sq("e4"))
        .collect_vec();
    assert_eq!(sorted(moves), sorted(expected));
}

#[test]
fn rook_ray_ends_on_an_enemy_piece() {
    let board = setup("8/8/8/8/4R1p1/8/8/8");
    // The rightward ray includes the capture square and nothing beyond it.
    assert_eq!(
        moves_for(&board, "e4"),
        squares(&[
        "f4", "g4", // right, capture ends the ray
        "d4", "c4", "b4", "a4", // left
        "e3", "e2", "e1", // down
        "e5", "e6", "e7", "e8", // up
    ])
    );
}

#[test]
fn rook_ray_ends_before_an_own_piece() {
    let board = setup("8/8/8/8/4R1P1/8/8/8");
    assert_eq!(
        moves_for(&board, "e4"),
        squares(&["f4", "d4", "c4", "b4", "a4", "e3", "e2", "e1", "e5", "e6", "e7", "e8"])
    );
}

#[test]
fn queen_concatenates_rook_and_bishop() {
    let board = setup("r3k3/5p2/2p5/p2Q4/P3r3/2N2n2/1PP2P2/2K2B2");
    let origin = sq("d5");
    let mut expected = rook_moves(origin, &board).to_vec();
    expected.extend(bishop_moves(origin, &board).iter().copied());
    assert_eq!(queen_moves(origin, &board).to_vec(), expected);
    // Disjoint by construction: concatenation introduces no duplicates.
    assert_eq!(
        expected.len(),
        expected.iter().unique().count(),
        "queen destinations overlap"
    );
}

#[test]
fn every_destination_is_reachable_and_distinct_from_origin() {
    for board in [
        Board::starting(),
        setup("r3k3/5p2/2p5/p2Q4/P3r3/2N2n2/1PP2P2/2K2B2"),
        setup("8/8/8/8/2q5/8/5N2/K6k"),
    ] {
        for row in 0..8 {
            for col in 0..8 {
                let origin = Square::new(row, col);
                let Some(piece) = board.at(origin) else {
                    continue;
                };
                let moves = moves_for(&board, &origin.to_string());
                assert!(!moves.contains(&origin), "{piece} on {origin} stays put");
                for destination in &moves {
                    // Same-color occupancy is never a destination.
                    assert_ne!(
                        board.at(*destination).map(|other| other.owner),
                        Some(piece.owner),
                        "{piece} on {origin} captures its own piece on {destination}"
                    );
                }
                if matches!(piece.kind, PieceKind::King | PieceKind::Knight) {
                    assert!(moves.len() <= 8);
                }
                assert_eq!(moves.iter().unique().count(), moves.len());
            }
        }
    }
}

#[test]
fn pawn_double_step_requires_the_home_rank() {
    // Both squares ahead are empty, but e3 is not a home rank.
    let board = setup("8/8/8/8/8/4P3/8/8");
    assert_eq!(moves_for(&board, "e3"), squares(&["e4"]));
    // Black's home rank for the unflipped orientation is row 1 (rank 7).
    let board = setup("8/4p3/8/8/8/8/8/8");
    assert_eq!(moves_for(&board, "e7"), squares(&["e5", "e6"]));
}

#[test]
fn pawn_captures_diagonally_only() {
    // Enemy pieces on both diagonals and one straight ahead.
    let board = setup("8/8/8/8/3ppp2/4P3/8/8");
    assert_eq!(sorted(moves_for(&board, "e3")), sorted(squares(&["d4", "f4"])));
    // Own pieces on the diagonals are never capture targets.
    let board = setup("8/8/8/8/3P1P2/4P3/8/8");
    assert_eq!(moves_for(&board, "e3"), squares(&["e4"]));
}

#[test]
fn strict_double_step_checks_the_jumped_square() {
    let board = setup("8/8/8/8/8/4n3/4P3/8");
    let origin = sq("e2");
    // Reference behavior: the blocked intermediate square is ignored...
    assert_eq!(
        pawn_moves(origin, &board, Perspective::default(), Rules::default()).to_vec(),
        squares(&["e4"])
    );
    // ...strict rules forbid the jump.
    assert!(pawn_moves(origin, &board, Perspective::default(), Rules::strict()).is_empty());
}

#[test]
fn flipped_perspective_reverses_pawn_advance() {
    let flipped = Perspective::default().flipped();
    // Under the flipped display white pawns advance toward increasing rows
    // of the stored grid.
    let lone = setup("8/8/8/8/4P3/8/8/8");
    assert_eq!(
        pawn_moves(sq("e4"), &lone, flipped, Rules::default()).to_vec(),
        squares(&["e3"])
    );
    // Black pawns on row 1 are no longer on their home rank when flipped.
    let board = setup("8/4p3/8/8/8/8/8/8");
    assert_eq!(
        pawn_moves(sq("e7"), &board, flipped, Rules::default()).to_vec(),
        squares(&["e8"])
    );
}

#[test]
fn king_and_knight_respect_the_border() {
    let board = setup("8/8/8/8/8/8/8/N6K");
    assert_eq!(
        sorted(moves_for(&board, "a1")),
        sorted(squares(&["b3", "c2"]))
    );
    assert_eq!(
        sorted(moves_for(&board, "h1")),
        sorted(squares(&["g1", "g2", "h2"]))
    );
}
