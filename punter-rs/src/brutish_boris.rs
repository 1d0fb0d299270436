use tracing::debug;
use types::{
    projected_score, shortest_paths, GameError, GameState, Graph, Memory, MineDistances,
    PunterId, River,
};

use crate::{memory_usize, Strategy};

/// Bounded-depth brute force. Every ply the moving punter tries each
/// unclaimed river and keeps the line that maximizes their own projected
/// score, rotating through punters round robin. No pruning; the lookahead
/// stays shallow.
pub struct BrutishBoris {
    pub depth: usize,
}

impl Default for BrutishBoris {
    fn default() -> Self {
        BrutishBoris { depth: 3 }
    }
}

impl Strategy for BrutishBoris {
    fn name(&self) -> String {
        "brutish-boris".to_owned()
    }

    fn initialize(&self, _graph: &Graph, punters: usize) -> Memory {
        let mut memory = Memory::new();
        memory.insert("punters".to_owned(), punters.to_string());
        memory.insert("depth".to_owned(), self.depth.to_string());
        memory
    }

    fn step(&self, state: &GameState) -> Result<(River, Memory), GameError> {
        let punters = memory_usize(&state.memory, "punters").unwrap_or(2);
        let depth = memory_usize(&state.memory, "depth").unwrap_or(self.depth);
        let full = shortest_paths(&state.graph);

        let mut best: Option<(u64, River)> = None;
        for river in state.graph.unclaimed() {
            let child = state.graph.claim(state.me, river.id)?;
            let outcome = play_out(
                &child,
                (state.me + 1) % punters,
                punters,
                depth.saturating_sub(1),
                &full,
            );
            let value = projected_score(&outcome, state.me, &full);

            if best.map_or(true, |(top, _)| value > top) {
                best = Some((value, *river));
            }
        }

        let (value, river) = best
            .ok_or_else(|| GameError::NotFound("no unclaimed river left".to_owned()))?;
        debug!(river = river.id, value, depth, "boris chose");

        Ok((river, state.memory.clone()))
    }
}

/// Play `remaining` claims forward, each mover greedy for their own final
/// projection, and return the position reached.
fn play_out(
    graph: &Graph,
    mover: PunterId,
    punters: usize,
    remaining: usize,
    full: &MineDistances,
) -> Graph {
    if remaining == 0 {
        return graph.clone();
    }
    let unclaimed: Vec<_> = graph.unclaimed().iter().map(|r| r.id).collect();
    if unclaimed.is_empty() {
        return graph.clone();
    }

    let mut best: Option<(u64, Graph)> = None;
    for river in unclaimed {
        let child = graph
            .claim(mover, river)
            .expect("unclaimed rivers are claimable");
        let outcome = play_out(&child, (mover + 1) % punters, punters, remaining - 1, full);
        let value = projected_score(&outcome, mover, full);

        if best.as_ref().map_or(true, |(top, _)| value > *top) {
            best = Some((value, outcome));
        }
    }

    best.expect("at least one river was unclaimed").1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph {
        let map = serde_json::from_str(include_str!("../fixtures/line_map.json")).unwrap();
        Graph::from_map(&map).unwrap()
    }

    #[test]
    fn initialize_records_the_table_stakes() {
        let boris = BrutishBoris { depth: 2 };
        let memory = boris.initialize(&line_graph(), 3);

        assert_eq!(memory.get("punters").map(String::as_str), Some("3"));
        assert_eq!(memory.get("depth").map(String::as_str), Some("2"));
    }

    #[test]
    fn secures_the_mine_connection() {
        let boris = BrutishBoris { depth: 2 };
        let mut state = GameState::new(line_graph(), 0);
        state.memory = boris.initialize(&state.graph, 2);

        // An opponent who gets to answer will grab 0-1 if we do not.
        let (river, _) = boris.step(&state).unwrap();
        assert_eq!(river.id, 0);
    }

    #[test]
    fn falls_back_to_defaults_without_initialize() {
        let boris = BrutishBoris::default();
        let (river, _) = boris.step(&GameState::new(line_graph(), 0)).unwrap();

        assert_eq!(river.id, 0);
    }
}
