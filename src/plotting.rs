#![allow(non_snake_case)]
/// a module turns user-facing notation into the evaluator's expected syntax
///
///# Example
/// ```
/// use RustedPlotter::plotting::normalizer::normalize;
/// assert_eq!(normalize(" x ** 2 + 1 "), "x^2+1");
/// ```
pub mod normalizer;
///________________________________________________________________________________________________________________________________
/// # Sampler/Evaluator
/// a module
/// 1) generates an evenly spaced x-mesh over `[min_x, max_x]` with a fixed step
/// 2) evaluates a normalized expression at every mesh point
/// 3) rejects invalid expressions and points where the expression is undefined
///# Example#
/// ```
/// use RustedPlotter::plotting::sampler::sample;
/// let (x, y) = sample("x^2", -2.0, 2.0, 0.1).unwrap();
/// assert_eq!(x.len(), y.len());
/// ```
pub mod sampler;
mod sampler_tests;
