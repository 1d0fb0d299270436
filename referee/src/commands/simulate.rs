use color_eyre::eyre::{eyre, Result};
use itertools::Itertools;

use punter_rs::{all_strategies, simulator, BoxedStrategy};

use crate::Simulate;

pub fn run(args: Simulate) -> Result<()> {
    let graph = crate::commands::load_graph(&args.map)?;
    let strategies = resolve(&args.strategies)?;

    let result = simulator::simulate(&graph, &strategies)?;

    for turn in &result.turns {
        println!("Step {}: {}", turn.step, turn.name);
    }
    for outcome in &result.outcomes {
        println!("{} {}", outcome.name, outcome.score);
    }

    Ok(())
}

fn resolve(names: &[String]) -> Result<Vec<BoxedStrategy>> {
    if names.is_empty() {
        return Err(eyre!(
            "no strategies given; known strategies: {}",
            known_names()
        ));
    }

    names
        .iter()
        .map(|name| {
            all_strategies()
                .into_iter()
                .find(|strategy| &strategy.name() == name)
                .ok_or_else(|| {
                    eyre!("unknown strategy {name}; known strategies: {}", known_names())
                })
        })
        .collect()
}

fn known_names() -> String {
    all_strategies().iter().map(|s| s.name()).join(", ")
}
