use std::fmt;

use crate::graph::{PunterId, RiverId};

/// Everything that can go wrong inside the core. Every variant is fatal to
/// the operation that produced it; there is no retry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The map referenced a site that does not exist.
    Construction(String),
    /// No river or site matches the given original ids.
    NotFound(String),
    /// A claim landed on a river that already has an owner.
    AlreadyClaimed { river: RiverId, owner: PunterId },
    /// A strategy returned a river outside the unclaimed set.
    InvalidMove { punter: PunterId, river: RiverId },
    /// A claim named an endpoint pair with no matching river.
    UnknownEdge { source: u64, target: u64 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Construction(what) => write!(f, "malformed map: {}", what),
            GameError::NotFound(what) => write!(f, "not found: {}", what),
            GameError::AlreadyClaimed { river, owner } => {
                write!(f, "river {} is already owned by punter {}", river, owner)
            }
            GameError::InvalidMove { punter, river } => {
                write!(f, "punter {} chose river {} which is not claimable", punter, river)
            }
            GameError::UnknownEdge { source, target } => {
                write!(f, "no river connects {} and {}", source, target)
            }
        }
    }
}

impl std::error::Error for GameError {}
