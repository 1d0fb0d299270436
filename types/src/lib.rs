//! Game-domain types for the lambda-punter simulator.
//!
//! The graph model, BFS traversal, game state plus scoring, the wire-shaped
//! map/move types, and the error taxonomy live here so that both the
//! strategies crate and the minimax crate can share them.

pub mod error;
pub mod game;
pub mod graph;
pub mod traversal;
pub mod wire;

pub use error::GameError;
pub use game::{projected_score, score, GameState, Memory, MineDistances};
pub use graph::{Graph, PunterId, River, RiverId, Site, SiteId};
pub use traversal::{shortest_path, shortest_paths, Distance};
