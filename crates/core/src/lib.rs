//! Core chess logic - board model, move generation and interaction state
//!
//! This crate has **no dependencies** on UI, terminal or I/O. Everything in it
//! is a plain synchronous computation over a [`Board`] the caller owns
//! exclusively; hosts that share a board between threads must serialize
//! mutating calls themselves.
//!
//! # Module Structure
//!
//! - [`piece`]: piece records and their stable roster ids
//! - [`tile`]: board squares with parity and hover/selected/potential-move flags
//! - [`board`]: the 8x8 grid, standard layout, lookups and move application
//! - [`movegen`]: pseudo-legal destinations per piece role
//! - [`interaction`]: pointer-to-tile resolution and exclusive hover/selection
//! - [`clock`]: countdown clock
//! - [`game`]: session wiring for the terminal front end
//!
//! # Example
//!
//! ```
//! use tui_chess_core::{moves_for, Board};
//! use tui_chess_types::Position;
//!
//! let mut board = Board::new();
//! let e2: Position = "e2".parse().unwrap();
//!
//! let pawn = board.piece_at(e2).unwrap();
//! let moves: Vec<String> = moves_for(pawn, &board).iter().map(|p| p.to_string()).collect();
//! assert_eq!(moves, ["e3", "e4"]);
//!
//! board.apply_move(e2, "e4".parse().unwrap()).unwrap();
//! assert!(board.piece_at(e2).is_err());
//! ```

pub mod board;
pub mod clock;
pub mod game;
pub mod interaction;
pub mod movegen;
pub mod piece;
pub mod tile;

pub use tui_chess_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome, Player};
pub use clock::GameClock;
pub use game::Game;
pub use interaction::BoardGeometry;
pub use movegen::{moves_for, Moves};
pub use piece::{Piece, PieceId};
pub use tile::Tile;
