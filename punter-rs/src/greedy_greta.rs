use tracing::debug;
use types::{projected_score, shortest_paths, GameError, GameState, Memory, River};

use crate::Strategy;

/// Depth-1 brute force that ignores opponents entirely: tentatively claim
/// every unclaimed river, evaluate the projected own score as if the
/// coloring were final, keep the best. Ties go to the lower river id.
pub struct GreedyGreta {}

impl Strategy for GreedyGreta {
    fn name(&self) -> String {
        "greedy-greta".to_owned()
    }

    fn step(&self, state: &GameState) -> Result<(River, Memory), GameError> {
        // Full-graph distances never change over a game, one BFS per mine
        // covers every candidate below.
        let full = shortest_paths(&state.graph);

        let mut best: Option<(u64, River)> = None;
        for river in state.graph.unclaimed() {
            let claimed = state.graph.claim(state.me, river.id)?;
            let projection = projected_score(&claimed, state.me, &full);

            if best.map_or(true, |(top, _)| projection > top) {
                best = Some((projection, *river));
            }
        }

        let (projection, river) = best
            .ok_or_else(|| GameError::NotFound("no unclaimed river left".to_owned()))?;
        debug!(river = river.id, projection, "greta chose");

        let mut memory = state.memory.clone();
        memory.insert("projection".to_owned(), projection.to_string());

        Ok((river, memory))
    }
}
