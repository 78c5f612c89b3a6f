//! examples of usage of RustedPlotter
/// Expression parsing, sampling and plotting examples
pub mod plotting_examples;
