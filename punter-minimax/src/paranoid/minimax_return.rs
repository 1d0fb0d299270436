use std::fmt::Debug;

use text_trees::StringTreeNode;
use types::{PunterId, RiverId};

use super::WrappedScore;

/// One iteration of the minimax algorithm returns this tree. It records
/// everything we learned about the positions we searched.
#[derive(Debug, Clone)]
pub enum MinMaxReturn<ScoreType>
where
    ScoreType: Clone + Debug + PartialOrd + Ord + Copy,
{
    /// A non-leaf node in the game tree.
    Node {
        /// Whether the punter moving here was maximizing or minimizing.
        is_maximizing: bool,
        /// The claims we looked at, sorted best-first for the moving
        /// punter. The first element is always the chosen one and its score
        /// equals this node's `score`.
        options: Vec<(RiverId, Self)>,
        /// Which punter was claiming at this node.
        moving_punter: PunterId,
        /// The chosen score.
        score: WrappedScore<ScoreType>,
    },
    /// A leaf: all rivers claimed, or the depth cutoff.
    Leaf {
        #[allow(missing_docs)]
        score: WrappedScore<ScoreType>,
    },
}

impl<ScoreType> MinMaxReturn<ScoreType>
where
    ScoreType: Clone + Debug + PartialOrd + Ord + Copy,
{
    /// The score for this node.
    pub fn score(&self) -> &WrappedScore<ScoreType> {
        match self {
            MinMaxReturn::Node { score, .. } => score,
            MinMaxReturn::Leaf { score } => score,
        }
    }

    /// The river the searching punter should claim, taken from the first
    /// node in the tree where that punter is the one moving. `None` for a
    /// bare leaf.
    pub fn best_claim(&self, me: PunterId) -> Option<RiverId> {
        self.first_options_for_punter(me)
            .and_then(|options| options.first().map(|(river, _)| *river))
    }

    /// The first set of options belonging to the given punter, walking the
    /// principal variation downwards.
    pub fn first_options_for_punter(&self, punter: PunterId) -> Option<&Vec<(RiverId, Self)>> {
        match self {
            MinMaxReturn::Leaf { .. } => None,
            MinMaxReturn::Node {
                moving_punter,
                options,
                ..
            } => {
                if *moving_punter == punter {
                    Some(options)
                } else {
                    options.first()?.1.first_options_for_punter(punter)
                }
            }
        }
    }

    /// The claims along the route minimax chose, in turn order. Useful for
    /// debugging what the search expects every punter to do.
    pub fn chosen_route(&self) -> Vec<(PunterId, RiverId)> {
        match self {
            MinMaxReturn::Leaf { .. } => vec![],
            MinMaxReturn::Node {
                moving_punter,
                options,
                ..
            } => {
                if let Some((river, rest)) = options.first() {
                    let mut tail = rest.chosen_route();
                    tail.insert(0, (*moving_punter, *river));
                    tail
                } else {
                    vec![]
                }
            }
        }
    }

    /// A text rendering of the searched tree: the moving punter, the claim
    /// and the score at every level.
    pub fn to_text_tree(&self) -> Option<String> {
        let tree_node = self.to_text_tree_node("".to_owned())?;
        Some(format!("{}", tree_node))
    }

    fn to_text_tree_node(&self, label: String) -> Option<StringTreeNode> {
        match self {
            MinMaxReturn::Leaf { .. } => None,
            MinMaxReturn::Node {
                moving_punter,
                options,
                score,
                ..
            } => {
                let mut node = StringTreeNode::new(format!("{} {:?}", label, score));
                for (river, result) in options {
                    if let Some(next_node) = result
                        .to_text_tree_node(format!("river {} punter {}", river, moving_punter))
                    {
                        node.push_node(next_node);
                    }
                }

                Some(node)
            }
        }
    }
}
