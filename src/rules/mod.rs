//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so any host (GUI, terminal, test harness) can apply a
//! move and query the outcome as independent steps.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
