#![deny(warnings, missing_debug_implementations, missing_docs)]
//! Adversarial search for the lambda-punter game. You provide a scoring
//! function that turns a graph coloring into anything implementing `Ord`,
//! and this crate runs a bounded-depth minimax over the unclaimed rivers.
//!
//! We lean on the `types` crate for the game logic, in particular for the
//! copy-on-write `claim` that generates child positions.

pub mod paranoid;
