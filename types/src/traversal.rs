use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::graph::{Graph, SiteId};

/// Distance from a BFS source. Unreachable is an explicit variant so it can
/// never leak into arithmetic as a finite-looking sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    Reachable(u32),
    Unreachable,
}

impl Distance {
    pub fn steps(&self) -> Option<u32> {
        match self {
            Distance::Reachable(steps) => Some(*steps),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

/// Unweighted BFS from `source` over the rivers this graph retains. On a
/// full graph that means every river; on an owner subgraph only the owned
/// ones.
pub fn shortest_path(graph: &Graph, source: SiteId) -> Vec<Distance> {
    let mut distances = vec![Distance::Unreachable; graph.site_count()];
    let mut queue = VecDeque::new();

    distances[source] = Distance::Reachable(0);
    queue.push_back(source);

    while let Some(site) = queue.pop_front() {
        let steps = match distances[site] {
            Distance::Reachable(steps) => steps,
            Distance::Unreachable => unreachable!("queued sites always have a distance"),
        };

        for neighbor in graph.adjacent(site) {
            if distances[neighbor] == Distance::Unreachable {
                distances[neighbor] = Distance::Reachable(steps + 1);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// One independent BFS per mine, keyed by the mine's internal site id.
pub fn shortest_paths(graph: &Graph) -> FxHashMap<SiteId, Vec<Distance>> {
    graph
        .mines()
        .iter()
        .map(|&mine| (mine, shortest_path(graph, mine)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{Map, RiverSpec, SiteSpec};

    fn line_graph() -> Graph {
        // 0 - 1 - 2, with 3 off on its own
        let map = Map {
            sites: (0..4).map(|id| SiteSpec { id, x: None, y: None }).collect(),
            rivers: vec![
                RiverSpec { source: 0, target: 1 },
                RiverSpec { source: 1, target: 2 },
            ],
            mines: vec![0],
        };
        Graph::from_map(&map).unwrap()
    }

    #[test]
    fn source_is_at_distance_zero() {
        let distances = shortest_path(&line_graph(), 0);
        assert_eq!(distances[0], Distance::Reachable(0));
    }

    #[test]
    fn walks_the_line() {
        let distances = shortest_path(&line_graph(), 0);
        assert_eq!(distances[1], Distance::Reachable(1));
        assert_eq!(distances[2], Distance::Reachable(2));
    }

    #[test]
    fn disconnected_site_is_marked_unreachable() {
        let distances = shortest_path(&line_graph(), 0);
        assert_eq!(distances[3], Distance::Unreachable);
        assert_eq!(distances[3].steps(), None);
    }

    #[test]
    fn subgraph_restricts_traversal() {
        let graph = line_graph().claim(0, 0).unwrap().claim(1, 1).unwrap();
        let owned = graph.subgraph(0);

        let distances = shortest_path(&owned, 0);
        assert_eq!(distances[1], Distance::Reachable(1));
        assert_eq!(distances[2], Distance::Unreachable);
    }

    #[test]
    fn shortest_paths_is_idempotent() {
        let graph = line_graph();
        assert_eq!(shortest_paths(&graph), shortest_paths(&graph));
    }

    #[test]
    fn shortest_paths_matches_independent_runs() {
        let graph = line_graph();
        let all = shortest_paths(&graph);

        for &mine in graph.mines() {
            assert_eq!(all[&mine], shortest_path(&graph, mine));
        }
    }
}
