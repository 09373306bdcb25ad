//! Chess rules model: board representation, move generation, attack coverage.
//!
//! This crate owns everything about how chess pieces move; it knows nothing
//! about searching or evaluating. Engines consume it through a small surface:
//! occupant queries, legal/pseudo-legal move lists, coverage masks, and
//! make/unmake simulation on their own clones.

pub mod attacks;
pub mod board;
pub mod movegen;
pub mod types;

pub use attacks::{attack_mask, side_coverage};
pub use board::{CastleRights, Position, Undo};
pub use movegen::{capture_moves, legal_moves, legal_moves_into, perft, piece_moves_into};
pub use types::*;
