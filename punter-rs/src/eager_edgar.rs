use types::{GameError, GameState, Memory, River};

use crate::Strategy;

/// Claims the lowest-id unclaimed river, every turn. The reference trivial
/// strategy, and a useful punching bag in tests.
pub struct EagerEdgar {}

impl Strategy for EagerEdgar {
    fn name(&self) -> String {
        "eager-edgar".to_owned()
    }

    fn step(&self, state: &GameState) -> Result<(River, Memory), GameError> {
        let river = state
            .graph
            .unclaimed()
            .first()
            .map(|river| **river)
            .ok_or_else(|| GameError::NotFound("no unclaimed river left".to_owned()))?;

        Ok((river, state.memory.clone()))
    }
}
