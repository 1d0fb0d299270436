use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use types::{GameError, GameState, Memory, River};

use crate::Strategy;

/// Claims a random unclaimed river. The RNG is seeded from the number of
/// rivers still unclaimed, so a whole simulation replays identically.
pub struct RecklessRhoda {}

impl Strategy for RecklessRhoda {
    fn name(&self) -> String {
        "reckless-rhoda".to_owned()
    }

    fn step(&self, state: &GameState) -> Result<(River, Memory), GameError> {
        let unclaimed = state.graph.unclaimed();
        let mut rng = StdRng::seed_from_u64(unclaimed.len() as u64);

        let river = unclaimed
            .choose(&mut rng)
            .map(|river| **river)
            .ok_or_else(|| GameError::NotFound("no unclaimed river left".to_owned()))?;

        Ok((river, state.memory.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Graph;

    fn sample_graph() -> Graph {
        let map = serde_json::from_str(include_str!("../fixtures/sample_map.json")).unwrap();
        Graph::from_map(&map).unwrap()
    }

    #[test]
    fn picks_from_the_unclaimed_set() {
        let graph = sample_graph();
        let (river, _) = RecklessRhoda {}.step(&GameState::new(graph.clone(), 0)).unwrap();

        assert!(graph.unclaimed().iter().any(|r| r.id == river.id));
    }

    #[test]
    fn same_position_same_pick() {
        let graph = sample_graph();
        let rhoda = RecklessRhoda {};

        let (first, _) = rhoda.step(&GameState::new(graph.clone(), 0)).unwrap();
        let (second, _) = rhoda.step(&GameState::new(graph, 0)).unwrap();

        assert_eq!(first, second);
    }
}
