//! Move-legality engine for an interactive chessboard.
//!
//! Two local players move pieces by selecting a piece and then one of its
//! highlighted destination squares. The crate computes those destinations
//! ([`movegen`]) over a plain 8×8 board of signed piece codes ([`board`]) and
//! tracks the turn, perspective and selection lifecycle ([`session`]).
//! Rendering and pointer-to-square translation are the host's job: the host
//! calls [`Session::grab`], highlights the returned candidates, and commits
//! the follow-up click through [`Session::click`].
//!
//! Deliberately out of scope: check and checkmate detection, castling,
//! en passant, promotion and draw rules. A move that leaves one's own king
//! attacked is not rejected.
//!
//! [`Session::grab`]: session::Session::grab
//! [`Session::click`]: session::Session::click

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    variant_size_differences
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
// The move generator sits on the input-event hot path.
#![deny(clippy::perf)]

pub mod board;
pub mod core;
pub mod movegen;
pub mod session;

pub use self::board::Board;
pub use self::core::{Perspective, Piece, PieceKind, Player, Square};
pub use self::movegen::{generate_moves, MoveList, Rules};
pub use self::session::Session;
