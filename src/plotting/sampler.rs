//! # Sampler/Evaluator Module
//!
//! Turns a normalized expression string and a numeric domain into a pair of
//! parallel vectors (x-mesh, y-values). The expression is parsed into a
//! symbolic tree, lambdified once, and evaluated at every mesh point; any
//! point where the result is not a finite number fails the whole request.
//! Single-shot and stateless: nothing is cached between calls.

use crate::plotting::normalizer::normalize;
use crate::symbolic::symbolic_engine::Expr;
use log::info;
use nalgebra::DVector;
use std::fmt;

/// The only free variable an expression may reference.
pub const ARGUMENT: &str = "x";

/// Step size between sample points, matching the plotter's fixed resolution.
pub const DEFAULT_STEP: f64 = 0.1;

/// Everything that can go wrong on the way from user text to a rendered curve.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    /// empty expression or bounds fields
    MissingInput(String),
    /// non-numeric bounds, min >= max, or a non-positive step
    InvalidBounds(String),
    /// unparseable expression or reference to an unknown symbol
    InvalidExpression(String),
    /// evaluation undefined (non-finite) at some sampled point
    DomainError(String),
    /// plotting backend failure while writing the image
    Render(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlotError::MissingInput(msg) => write!(f, "missing input: {}", msg),
            PlotError::InvalidBounds(msg) => write!(f, "invalid bounds: {}", msg),
            PlotError::InvalidExpression(msg) => write!(f, "invalid expression: {}", msg),
            PlotError::DomainError(msg) => write!(f, "domain error: {}", msg),
            PlotError::Render(msg) => write!(f, "render failure: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {}

/// The closed interval `[min_x, max_x]` over which an expression is sampled,
/// plus the mesh step. Invariants `min_x < max_x` and `step > 0` are checked
/// at construction, so every `Domain` value can generate a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min_x: f64,
    pub max_x: f64,
    pub step: f64,
}

impl Domain {
    pub fn new(min_x: f64, max_x: f64) -> Result<Domain, PlotError> {
        Domain::with_step(min_x, max_x, DEFAULT_STEP)
    }

    pub fn with_step(min_x: f64, max_x: f64, step: f64) -> Result<Domain, PlotError> {
        if !min_x.is_finite() || !max_x.is_finite() {
            return Err(PlotError::InvalidBounds(
                "Invalid min or max value for x.".to_string(),
            ));
        }
        if min_x >= max_x {
            return Err(PlotError::InvalidBounds(
                "Min X must be less than Max X.".to_string(),
            ));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(PlotError::InvalidBounds(format!(
                "step must be positive, got {}",
                step
            )));
        }
        Ok(Domain { min_x, max_x, step })
    }

    /// Generates the evenly spaced mesh `x_i = min_x + i * step`.
    ///
    /// Inclusive-endpoint semantics: points are produced while
    /// `x_i < max_x + step`, so the last point lands at `max_x` or past it by
    /// less than one step and the endpoint is never silently dropped.
    pub fn x_mesh(&self) -> DVector<f64> {
        let mut values = Vec::new();
        let mut i: usize = 0;
        loop {
            let x = self.min_x + (i as f64) * self.step;
            if x >= self.max_x + self.step {
                break;
            }
            values.push(x);
            i += 1;
        }
        DVector::from_vec(values)
    }
}

/// Samples an expression over `[min_x, max_x]` with the given step.
///
/// The expression is normalized first, so raw user text is acceptable here.
/// Preconditions are checked in order: non-empty expression (`MissingInput`),
/// then bounds and step (`InvalidBounds`); evaluation errors come after.
///
/// Returns the parallel pair (x-mesh, y-values) of equal length.
pub fn sample(
    expr: &str,
    min_x: f64,
    max_x: f64,
    step: f64,
) -> Result<(DVector<f64>, DVector<f64>), PlotError> {
    let normalized = normalize(expr);
    if normalized.is_empty() {
        return Err(PlotError::MissingInput(
            "Please enter a function.".to_string(),
        ));
    }
    let domain = Domain::with_step(min_x, max_x, step)?;
    sample_over(&normalized, &domain)
}

/// Evaluates an already normalized expression over a validated domain.
///
/// Fails with `InvalidExpression` when the text does not parse or references
/// any symbol other than the plot variable, and with `DomainError` when the
/// value at any mesh point is NaN or infinite (division by zero, logarithm of
/// a non-positive number, square root of a negative number). Infinities are
/// never passed through as plottable values; there are no partial results.
pub fn sample_over(
    normalized: &str,
    domain: &Domain,
) -> Result<(DVector<f64>, DVector<f64>), PlotError> {
    let parsed = Expr::parse_expression(normalized).map_err(PlotError::InvalidExpression)?;

    let vars = parsed.all_arguments_are_variables();
    if let Some(unknown) = vars.iter().find(|name| name.as_str() != ARGUMENT) {
        return Err(PlotError::InvalidExpression(format!(
            "unknown symbol '{}': the only free variable is '{}'",
            unknown, ARGUMENT
        )));
    }

    let function = parsed.lambdify1D();
    let x_mesh = domain.x_mesh();
    let mut y_values = Vec::with_capacity(x_mesh.len());
    for &x in x_mesh.iter() {
        let y = function(x);
        if !y.is_finite() {
            return Err(PlotError::DomainError(format!(
                "'{}' is undefined at x = {} (evaluated to {})",
                parsed, x, y
            )));
        }
        y_values.push(y);
    }
    info!(
        "sampled '{}' at {} points over [{}, {}]",
        parsed, x_mesh.len(), domain.min_x, domain.max_x
    );
    Ok((x_mesh, DVector::from_vec(y_values)))
}
