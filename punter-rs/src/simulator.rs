//! The round-robin scheduler that plays strategies against each other until
//! every river is claimed, then scores the final coloring.

use itertools::Itertools;
use tracing::{info, info_span};
use types::{
    score, shortest_paths,
    wire::{Claim, PunterScore},
    GameError, GameState, Graph, Memory, PunterId,
};

use crate::BoxedStrategy;

/// One turn of the log: who moved and what they claimed.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub step: usize,
    pub punter: PunterId,
    pub name: String,
    pub claim: Claim,
}

/// Final standing for one strategy.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub punter: PunterId,
    pub name: String,
    pub score: u64,
}

impl Outcome {
    pub fn as_wire(&self) -> PunterScore {
        PunterScore {
            punter: self.punter,
            score: self.score,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub turns: Vec<TurnRecord>,
    pub outcomes: Vec<Outcome>,
}

/// Run a full game. Strategy list order fixes punter identities for the
/// whole run: turn `k` belongs to `strategies[k % len]`. Exactly one turn
/// per river; there is no pass and no early termination.
pub fn simulate(
    graph: &Graph,
    strategies: &[BoxedStrategy],
) -> Result<SimulationResult, GameError> {
    assert!(
        !strategies.is_empty() || graph.river_count() == 0,
        "a game with rivers needs at least one strategy"
    );

    let span = info_span!("simulate", punters = strategies.len(), rivers = graph.river_count());
    let _guard = span.enter();

    let mut memories: Vec<Memory> = strategies
        .iter()
        .map(|strategy| strategy.initialize(graph, strategies.len()))
        .collect();

    let mut current = graph.clone();
    let mut turns = Vec::with_capacity(graph.river_count());

    for step in 0..graph.river_count() {
        let punter = step % strategies.len();
        let strategy = &strategies[punter];

        let state = GameState {
            graph: current.clone(),
            me: punter,
            memory: memories[punter].clone(),
        };
        let (river, memory) = strategy.step(&state)?;

        if !current.unclaimed().iter().any(|r| r.id == river.id) {
            return Err(GameError::InvalidMove {
                punter,
                river: river.id,
            });
        }

        let (source, target) = current.original_ends(&river);
        let claim = Claim {
            punter,
            source,
            target,
        };
        let next = state.apply_claim(&claim, memory)?;

        info!(step, punter, river = river.id, "turn");
        turns.push(TurnRecord {
            step,
            punter,
            name: strategy.name(),
            claim,
        });

        memories[punter] = next.memory.clone();
        current = next.graph;
    }

    let full = shortest_paths(&current);
    let outcomes: Vec<Outcome> = strategies
        .iter()
        .enumerate()
        .map(|(punter, strategy)| {
            let owned = shortest_paths(&current.subgraph(punter));
            Outcome {
                punter,
                name: strategy.name(),
                score: score(&full, &owned),
            }
        })
        .collect();

    let standings = outcomes
        .iter()
        .map(|outcome| format!("{} {}", outcome.name, outcome.score))
        .join(", ");
    info!(%standings, "game over");

    Ok(SimulationResult { turns, outcomes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        eager_edgar::EagerEdgar, greedy_greta::GreedyGreta, paranoid_petra::ParanoidPetra,
        BoxedStrategy, Strategy,
    };
    use types::{GameState, Memory, River};

    fn graph(fixture: &str) -> Graph {
        let map = serde_json::from_str(fixture).unwrap();
        Graph::from_map(&map).unwrap()
    }

    fn line_graph() -> Graph {
        graph(include_str!("../fixtures/line_map.json"))
    }

    fn sample_graph() -> Graph {
        graph(include_str!("../fixtures/sample_map.json"))
    }

    #[test]
    fn reference_scenario_scores_one_and_zero() {
        let strategies: Vec<BoxedStrategy> = vec![Box::new(EagerEdgar {}), Box::new(EagerEdgar {})];

        let result = simulate(&line_graph(), &strategies).unwrap();

        assert_eq!(result.turns.len(), 2);
        assert_eq!(result.turns[0].punter, 0);
        assert_eq!(result.turns[1].punter, 1);

        let scores: Vec<u64> = result.outcomes.iter().map(|o| o.score).collect();
        assert_eq!(scores, vec![1, 0]);
    }

    #[test]
    fn zero_rivers_means_zero_turns_and_zero_scores() {
        let empty = graph(r#"{"sites":[{"id":0},{"id":1}],"rivers":[],"mines":[0]}"#);
        let strategies: Vec<BoxedStrategy> = vec![Box::new(EagerEdgar {}), Box::new(GreedyGreta {})];

        let result = simulate(&empty, &strategies).unwrap();

        assert!(result.turns.is_empty());
        assert!(result.outcomes.iter().all(|o| o.score == 0));
    }

    #[test]
    fn runs_are_reproducible() {
        let make = || -> Vec<BoxedStrategy> {
            vec![Box::new(GreedyGreta {}), Box::new(ParanoidPetra::default())]
        };

        let first = simulate(&sample_graph(), &make()).unwrap();
        let second = simulate(&sample_graph(), &make()).unwrap();

        let claims = |r: &SimulationResult| {
            r.turns.iter().map(|t| t.claim).collect::<Vec<_>>()
        };
        let scores = |r: &SimulationResult| {
            r.outcomes.iter().map(|o| o.score).collect::<Vec<_>>()
        };

        assert_eq!(claims(&first), claims(&second));
        assert_eq!(scores(&first), scores(&second));
    }

    #[test]
    fn every_river_ends_up_claimed() {
        let strategies: Vec<BoxedStrategy> = vec![Box::new(EagerEdgar {}), Box::new(GreedyGreta {})];

        let result = simulate(&sample_graph(), &strategies).unwrap();

        assert_eq!(result.turns.len(), sample_graph().river_count());
        let mut claimed: Vec<(u64, u64)> = result
            .turns
            .iter()
            .map(|t| (t.claim.source.min(t.claim.target), t.claim.source.max(t.claim.target)))
            .collect();
        claimed.sort_unstable();
        claimed.dedup();
        assert_eq!(claimed.len(), sample_graph().river_count());
    }

    #[test]
    fn a_cheating_strategy_aborts_the_run() {
        struct Cheater {}
        impl Strategy for Cheater {
            fn name(&self) -> String {
                "cheater".to_owned()
            }
            fn step(&self, state: &GameState) -> Result<(River, Memory), GameError> {
                // always returns river 0, claimed or not
                Ok((state.graph.rivers()[0], state.memory.clone()))
            }
        }

        let strategies: Vec<BoxedStrategy> = vec![Box::new(Cheater {}), Box::new(Cheater {})];

        let err = simulate(&line_graph(), &strategies).unwrap_err();
        assert_eq!(err, GameError::InvalidMove { punter: 1, river: 0 });
    }

    #[test]
    fn strategy_memory_survives_between_turns() {
        // claims the river whose position in the unclaimed list equals the
        // number of turns it has already taken, so the turn log shows
        // whether the memory really came back each turn
        struct Counter {}
        impl Strategy for Counter {
            fn name(&self) -> String {
                "counter".to_owned()
            }
            fn step(&self, state: &GameState) -> Result<(River, Memory), GameError> {
                let taken = crate::memory_usize(&state.memory, "taken").unwrap_or(0);
                let unclaimed = state.graph.unclaimed();
                let river = *unclaimed[taken.min(unclaimed.len() - 1)];

                let mut memory = state.memory.clone();
                memory.insert("taken".to_owned(), (taken + 1).to_string());
                Ok((river, memory))
            }
        }

        let triangle = graph(
            r#"{"sites":[{"id":0},{"id":1},{"id":2}],
                "rivers":[{"source":0,"target":1},{"source":1,"target":2},{"source":0,"target":2}],
                "mines":[]}"#,
        );
        let strategies: Vec<BoxedStrategy> = vec![Box::new(Counter {})];

        let result = simulate(&triangle, &strategies).unwrap();

        let order: Vec<_> = result.turns.iter().map(|t| t.claim).collect();
        let sources: Vec<(u64, u64)> = order.iter().map(|c| (c.source, c.target)).collect();
        // turn 0 takes river 0, turn 1 skips over river 1, turn 2 takes it
        assert_eq!(sources, vec![(0, 1), (0, 2), (1, 2)]);
    }
}
