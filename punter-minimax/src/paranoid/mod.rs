//! There are multiple multiplayer variations to minimax, this module is for
//! the `paranoid` variant.
//!
//! This variant assumes all opponents are working together to minimize your
//! score: nodes are always scored from the acting punter's own perspective,
//! and when propagating scores up the tree we take the highest score on our
//! turns and the lowest score on everyone else's. Alpha-Beta pruning keeps
//! the search tractable.

mod score;
pub use score::{Scorable, WrappedScore};

mod minimax_return;
pub use minimax_return::MinMaxReturn;

mod eval;
pub use eval::MinimaxPunter;
