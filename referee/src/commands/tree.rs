use color_eyre::eyre::Result;

use punter_minimax::paranoid::MinimaxPunter;
use types::{projected_score, shortest_paths, Graph, PunterId};

use crate::Tree;

pub fn run(args: Tree) -> Result<()> {
    let graph = crate::commands::load_graph(&args.map)?;

    let full = shortest_paths(&graph);
    let scorer = move |graph: &Graph, punter: PunterId| -> i64 {
        projected_score(graph, punter, &full) as i64
    };

    let searcher = MinimaxPunter::from_fn(graph, 0, args.punters as usize, scorer, "referee");
    let result = searcher.single_minimax(args.depth);

    match result.to_text_tree() {
        Some(tree) => println!("{tree}"),
        None => println!("nothing to search: every river is already claimed"),
    }

    Ok(())
}
