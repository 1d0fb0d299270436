use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::GameError;
use crate::graph::{Graph, PunterId, SiteId};
use crate::traversal::{shortest_paths, Distance};
use crate::wire::Claim;

/// Opaque per-strategy state. The simulator threads this through `step`
/// calls but never looks inside. A `BTreeMap` keeps iteration (and thus
/// serialization) deterministic.
pub type Memory = BTreeMap<String, String>;

/// Distance tables keyed by mine site id.
pub type MineDistances = FxHashMap<SiteId, Vec<Distance>>;

/// The state a strategy sees on its turn: the current graph snapshot, which
/// punter it is playing as, and its own memory from the previous turn.
#[derive(Debug, Clone)]
pub struct GameState {
    pub graph: Graph,
    pub me: PunterId,
    pub memory: Memory,
}

impl GameState {
    pub fn new(graph: Graph, me: PunterId) -> Self {
        GameState {
            graph,
            me,
            memory: Memory::new(),
        }
    }

    /// Apply a claim given in original map ids, producing the next state.
    /// The caller supplies the memory to install, usually whatever the
    /// acting strategy just returned.
    pub fn apply_claim(&self, claim: &Claim, memory: Memory) -> Result<GameState, GameError> {
        let river = self
            .graph
            .from_original_ends((claim.source, claim.target))
            .map_err(|_| GameError::UnknownEdge {
                source: claim.source,
                target: claim.target,
            })?;
        let river = river.id;

        debug!(punter = claim.punter, river, "applying claim");
        let graph = self.graph.claim(claim.punter, river)?;

        Ok(GameState {
            graph,
            me: self.me,
            memory,
        })
    }
}

/// The punter score for one coloring: for every (mine, site) pair the owner
/// subgraph can connect, the squared full-graph distance. `full` must come
/// from the unfiltered graph and `owned` from `subgraph(graph, punter)`.
pub fn score(full: &MineDistances, owned: &MineDistances) -> u64 {
    let mut total = 0u64;

    for (mine, owned_row) in owned {
        let Some(full_row) = full.get(mine) else {
            continue;
        };

        for (site, distance) in owned_row.iter().enumerate() {
            if !distance.is_reachable() {
                continue;
            }
            if let Some(steps) = full_row[site].steps() {
                total += (steps as u64) * (steps as u64);
            }
        }
    }

    total
}

/// Score `punter` as if the current coloring were final. Strategies use this
/// as their search heuristic; `full` is the mine distance table of the
/// unfiltered graph, which never changes over a game and so can be computed
/// once and reused.
pub fn projected_score(graph: &Graph, punter: PunterId, full: &MineDistances) -> u64 {
    let owned = shortest_paths(&graph.subgraph(punter));
    score(full, &owned)
}
