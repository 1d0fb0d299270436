use std::fmt::Debug;

use types::{Graph, PunterId};

/// The wrapped score type. It lifts the score produced by the scoring
/// function into an ordering with explicit bottom and top elements, so
/// alpha and beta need no numeric infinities regardless of the score type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WrappedScore<ScoreType>
where
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// Lower than any scored node. The initial alpha.
    Worst,
    /// An actual evaluation of a position.
    Scored(ScoreType),
    /// Higher than any scored node. The initial beta.
    Best,
}

impl<ScoreType> WrappedScore<ScoreType>
where
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// The score no node can beat, used to seed beta.
    pub fn best_possible_score() -> Self {
        WrappedScore::Best
    }

    /// The score every node beats, used to seed alpha.
    pub fn worst_possible_score() -> Self {
        WrappedScore::Worst
    }
}

/// Something that can evaluate a graph coloring from one punter's point of
/// view. The paranoid search always evaluates for the punter running it.
pub trait Scorable<ScoreType> {
    /// Evaluate `graph` as it stands for `punter`, treating the current
    /// coloring as if it were final.
    fn score(&self, graph: &Graph, punter: PunterId) -> ScoreType;
}

impl<ScoreType, FnLike: Fn(&Graph, PunterId) -> ScoreType> Scorable<ScoreType> for FnLike {
    fn score(&self, graph: &Graph, punter: PunterId) -> ScoreType {
        (self)(graph, punter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_bound_every_scored_value() {
        for value in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert!(WrappedScore::worst_possible_score() < WrappedScore::Scored(value));
            assert!(WrappedScore::Scored(value) < WrappedScore::best_possible_score());
        }
    }

    #[test]
    fn scored_values_order_by_inner_score() {
        assert!(WrappedScore::Scored(3) < WrappedScore::Scored(7));
    }
}
