use std::{borrow::Cow, fmt::Debug, marker::PhantomData};

use derivative::Derivative;
use itertools::Itertools;
use tracing::info_span;
use types::{Graph, PunterId, RiverId};

use super::{score::Scorable, MinMaxReturn, WrappedScore};

/// Wraps a graph snapshot and a scoring function and runs the paranoid
/// minimax over it for one punter.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct MinimaxPunter<ScoreType, ScorableType>
where
    ScoreType: Debug + PartialOrd + Ord + Copy,
    ScorableType: Scorable<ScoreType> + Clone,
{
    /// The position to search from.
    pub graph: Graph,
    /// The punter we are choosing a claim for.
    pub me: PunterId,
    /// How many punters take turns, fixing the round-robin rotation.
    pub punter_count: usize,
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    /// Used in tracing output.
    pub name: &'static str,
    _phantom: PhantomData<ScoreType>,
}

impl<ScoreType, ScorableType> MinimaxPunter<ScoreType, ScorableType>
where
    ScoreType: Debug + PartialOrd + Ord + Copy,
    ScorableType: Scorable<ScoreType> + Clone,
{
    /// Construct a searcher from a scoring function.
    ///
    /// ```rust
    /// use punter_minimax::paranoid::MinimaxPunter;
    /// use types::{wire::Map, Graph, PunterId};
    ///
    /// let map: Map = serde_json::from_str(
    ///     r#"{"sites":[{"id":0},{"id":1},{"id":2}],
    ///         "rivers":[{"source":0,"target":1},{"source":1,"target":2}],
    ///         "mines":[0]}"#,
    /// )
    /// .unwrap();
    /// let graph = Graph::from_map(&map).unwrap();
    ///
    /// let searcher = MinimaxPunter::from_fn(
    ///     graph,
    ///     0,
    ///     2,
    ///     |graph: &Graph, _punter: PunterId| graph.rivers().len() as i64,
    ///     "doc-punter",
    /// );
    /// let claim = searcher.choose_claim(2);
    /// assert!(claim.is_some());
    /// ```
    pub fn from_fn(
        graph: Graph,
        me: PunterId,
        punter_count: usize,
        score_function: ScorableType,
        name: &'static str,
    ) -> Self {
        Self {
            graph,
            me,
            punter_count,
            score_function,
            name,
            _phantom: PhantomData,
        }
    }

    /// Run minimax `max_turns` of our own claims deep and return the river
    /// we should take. `None` only when no river is left unclaimed.
    pub fn choose_claim(&self, max_turns: usize) -> Option<RiverId> {
        info_span!(
            "paranoid_minimax",
            punter_name = self.name,
            me = self.me,
            max_turns,
        )
        .in_scope(|| self.single_minimax(max_turns).best_claim(self.me))
    }

    /// Run the minimax algorithm to the given number of our own turns and
    /// return the whole searched tree. Each of our turns is followed by one
    /// claim from every modeled opponent.
    pub fn single_minimax(&self, max_turns: usize) -> MinMaxReturn<ScoreType> {
        self.minimax(
            Cow::Borrowed(&self.graph),
            0,
            WrappedScore::worst_possible_score(),
            WrappedScore::best_possible_score(),
            max_turns * self.punter_count,
        )
    }

    fn minimax(
        &self,
        node: Cow<Graph>,
        depth: usize,
        alpha: WrappedScore<ScoreType>,
        beta: WrappedScore<ScoreType>,
        max_depth: usize,
    ) -> MinMaxReturn<ScoreType> {
        let mut alpha = alpha;
        let mut beta = beta;

        let unclaimed = node.unclaimed().iter().map(|r| r.id).collect_vec();

        if unclaimed.is_empty() || depth >= max_depth {
            return MinMaxReturn::Leaf {
                score: WrappedScore::Scored(self.score_function.score(&node, self.me)),
            };
        }

        let moving_punter = (self.me + depth) % self.punter_count;
        let is_maximizing = moving_punter == self.me;

        let mut options: Vec<(RiverId, MinMaxReturn<ScoreType>)> = vec![];

        for river in unclaimed {
            let child = node
                .claim(moving_punter, river)
                .expect("unclaimed rivers are claimable");
            let result = self.minimax(Cow::Owned(child), depth + 1, alpha, beta, max_depth);
            let value = *result.score();
            options.push((river, result));

            if is_maximizing {
                if value > beta {
                    break;
                }
                alpha = std::cmp::max(alpha, value);
            } else {
                if value < alpha {
                    break;
                }
                beta = std::cmp::min(beta, value);
            }
        }

        // Stable sort: equal scores keep river-id order, which makes the
        // search deterministic.
        options.sort_by_cached_key(|(_, result)| *result.score());
        if is_maximizing {
            options.reverse();
        }
        let chosen_score = *options[0].1.score();

        MinMaxReturn::Node {
            options,
            is_maximizing,
            moving_punter,
            score: chosen_score,
        }
    }
}
