use punter_minimax::paranoid::MinimaxPunter;
use tracing::info_span;
use types::{
    projected_score, shortest_paths, GameError, GameState, Graph, Memory, PunterId, River,
};

use crate::{memory_usize, Strategy};

/// The minimax strategy: paranoid alpha-beta search from `punter-minimax`,
/// scoring the partially claimed graph as if it were final. All opponents
/// are modeled jointly as one minimizing adversary.
pub struct ParanoidPetra {
    /// How many of our own claims deep to search.
    pub depth: usize,
}

impl Default for ParanoidPetra {
    fn default() -> Self {
        ParanoidPetra { depth: 2 }
    }
}

impl Strategy for ParanoidPetra {
    fn name(&self) -> String {
        "paranoid-petra".to_owned()
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

        // One BFS per mine on the full graph, shared by every leaf
        // evaluation below.
        let full = shortest_paths(&state.graph);
        let scorer = move |graph: &Graph, punter: PunterId| -> i64 {
            projected_score(graph, punter, &full) as i64
        };

        let searcher = MinimaxPunter::from_fn(
            state.graph.clone(),
            state.me,
            punters,
            scorer,
            "paranoid-petra",
        );

        let chosen = info_span!("petra_step", me = state.me, depth)
            .in_scope(|| searcher.choose_claim(depth))
            .ok_or_else(|| GameError::NotFound("no unclaimed river left".to_owned()))?;

        let river = *state
            .graph
            .river(chosen)
            .expect("the search only returns rivers from this graph");

        Ok((river, state.memory.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph {
        let map = serde_json::from_str(include_str!("../fixtures/line_map.json")).unwrap();
        Graph::from_map(&map).unwrap()
    }

    #[test]
    fn refuses_to_be_cut_off() {
        let petra = ParanoidPetra::default();
        let mut state = GameState::new(line_graph(), 0);
        state.memory = petra.initialize(&state.graph, 2);

        // 0-1 keeps a guaranteed point; 1-2 lets the adversary take 0-1.
        let (river, _) = petra.step(&state).unwrap();
        assert_eq!(river.id, 0);
    }

    #[test]
    fn errors_on_an_exhausted_graph() {
        let graph = line_graph().claim(0, 0).unwrap().claim(1, 1).unwrap();
        let petra = ParanoidPetra::default();

        assert!(petra.step(&GameState::new(graph, 0)).is_err());
    }
}
