//! Strategies and the turn-by-turn simulator for the lambda-punter game.

pub use types::wire::{Claim, Map, Move, Pass, PunterScore};
pub use types::{GameError, GameState, Graph, Memory, PunterId, River, RiverId};

pub mod brutish_boris;
pub mod eager_edgar;
pub mod greedy_greta;
pub mod paranoid_petra;
pub mod reckless_rhoda;

pub mod simulator;

use crate::{
    brutish_boris::BrutishBoris, eager_edgar::EagerEdgar, greedy_greta::GreedyGreta,
    paranoid_petra::ParanoidPetra, reckless_rhoda::RecklessRhoda,
};

/// A competitor. Strategies are stateless code: whatever they want to
/// remember between turns goes into the [Memory] they return, and the
/// simulator hands it back on their next turn without looking inside.
pub trait Strategy {
    /// Name used in turn and score reporting.
    fn name(&self) -> String;

    /// Called once before the first turn. `punters` is how many competitors
    /// take part, as a setup message would announce it.
    fn initialize(&self, _graph: &Graph, _punters: usize) -> Memory {
        Memory::new()
    }

    /// Pick one river out of `unclaimed(state.graph)` and return it together
    /// with the memory to carry into the next turn. Returning a claimed
    /// river is a contract violation that aborts the whole run.
    fn step(&self, state: &GameState) -> Result<(River, Memory), GameError>;
}

pub type BoxedStrategy = Box<dyn Strategy + Send + Sync>;

/// Read a numeric entry out of a strategy memory.
pub(crate) fn memory_usize(memory: &Memory, key: &str) -> Option<usize> {
    memory.get(key).and_then(|value| value.parse().ok())
}

/// Every strategy this crate ships, under its reporting name.
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(EagerEdgar {}),
        Box::new(RecklessRhoda {}),
        Box::new(GreedyGreta {}),
        Box::new(BrutishBoris::default()),
        Box::new(ParanoidPetra::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_are_unique() {
        let mut names: Vec<String> = all_strategies().iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all_strategies().len());
    }
}
