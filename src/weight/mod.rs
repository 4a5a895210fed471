//! # Weight Resolution
//!
//! Turns an edge into a finite `f64` cost. The default rule reads the
//! edge's `weight` payload and accepts only numeric values; anything else
//! goes through a caller-supplied [`CostStrategy`].
//!
//! Resolution accepts either a bare edge or a whole adjacency bucket.
//! A bucket stands in for its first edge; both inputs are normalized to
//! one edge before any strategy runs, so strategies never see buckets.

use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::model::Edge;
use crate::{Error, Result};

// ============================================================================
// Cost strategies
// ============================================================================

/// Pluggable rule mapping an edge to its cost.
///
/// Any `Fn(&Edge) -> Result<f64>` qualifies, so closures work directly:
///
/// ```rust
/// use edgewise::{Edge, WeightMode, Error};
///
/// let mode = WeightMode::with_strategy(|edge: &Edge| {
///     edge.weight
///         .get("toll")
///         .and_then(|v| v.as_float())
///         .ok_or_else(|| Error::Strategy(format!("edge '{}' has no toll", edge.name)))
/// });
/// assert!(mode.is_weighted());
/// ```
///
/// Errors returned by a strategy propagate to the caller unchanged; the
/// resolver only adds its own error when the result is non-finite.
pub trait CostStrategy: Send + Sync {
    fn compute_cost(&self, edge: &Edge) -> Result<f64>;
}

impl<F> CostStrategy for F
where
    F: Fn(&Edge) -> Result<f64> + Send + Sync,
{
    fn compute_cost(&self, edge: &Edge) -> Result<f64> {
        self(edge)
    }
}

// ============================================================================
// Weight mode
// ============================================================================

/// Whether a graph resolves edge costs at all, and with which rule.
///
/// Unweighted graphs skip cost resolution entirely: every path query
/// answers [`crate::route::NO_WEIGHT`] and edge weights are never read.
#[derive(Clone, Default)]
pub enum WeightMode {
    #[default]
    Unweighted,
    Weighted {
        /// `None` selects the default numeric rule.
        strategy: Option<Arc<dyn CostStrategy>>,
    },
}

impl WeightMode {
    /// Weighted with the default numeric rule.
    pub fn weighted() -> Self {
        WeightMode::Weighted { strategy: None }
    }

    /// Weighted with a custom cost rule.
    pub fn with_strategy(strategy: impl CostStrategy + 'static) -> Self {
        WeightMode::Weighted { strategy: Some(Arc::new(strategy)) }
    }

    /// Interpret a raw JSON flag the way loosely-typed configs do:
    /// `false`, `null`, `""` and `0` are unweighted, everything else
    /// (including `{}` and `[]`) is weighted with the default rule.
    pub fn from_flag(flag: &JsonValue) -> Self {
        if flag_is_truthy(flag) { WeightMode::weighted() } else { WeightMode::Unweighted }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, WeightMode::Weighted { .. })
    }

    /// The resolver for this mode; `None` when unweighted.
    pub(crate) fn resolver(&self) -> Option<WeightResolver> {
        match self {
            WeightMode::Unweighted => None,
            WeightMode::Weighted { strategy } => Some(WeightResolver::new(strategy.clone())),
        }
    }
}

impl fmt::Debug for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightMode::Unweighted => write!(f, "Unweighted"),
            WeightMode::Weighted { strategy: None } => write!(f, "Weighted(default)"),
            WeightMode::Weighted { strategy: Some(_) } => write!(f, "Weighted(custom)"),
        }
    }
}

fn flag_is_truthy(flag: &JsonValue) -> bool {
    match flag {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Input to [`WeightResolver::resolve`]: one edge, or the adjacency bucket
/// it came from.
#[derive(Debug, Clone, Copy)]
pub enum EdgeInput<'a> {
    Edge(&'a Edge),
    Bucket(&'a [Edge]),
}

impl<'a> EdgeInput<'a> {
    /// Normalize to a single edge. A bucket stands in for its first edge.
    fn edge(self) -> Option<&'a Edge> {
        match self {
            EdgeInput::Edge(edge) => Some(edge),
            EdgeInput::Bucket(bucket) => bucket.first(),
        }
    }
}

impl<'a> From<&'a Edge> for EdgeInput<'a> {
    fn from(edge: &'a Edge) -> Self {
        EdgeInput::Edge(edge)
    }
}

impl<'a> From<&'a [Edge]> for EdgeInput<'a> {
    fn from(bucket: &'a [Edge]) -> Self {
        EdgeInput::Bucket(bucket)
    }
}

impl<'a> From<&'a Vec<Edge>> for EdgeInput<'a> {
    fn from(bucket: &'a Vec<Edge>) -> Self {
        EdgeInput::Bucket(bucket)
    }
}

/// Resolves edges to finite costs with the default rule or a custom strategy.
#[derive(Clone, Default)]
pub struct WeightResolver {
    strategy: Option<Arc<dyn CostStrategy>>,
}

impl WeightResolver {
    pub fn new(strategy: Option<Arc<dyn CostStrategy>>) -> Self {
        Self { strategy }
    }

    /// Resolve one edge (or the first edge of a bucket) to its cost.
    ///
    /// Default rule: the weight payload must be numeric. With a strategy
    /// installed the payload can be anything the strategy understands.
    /// Either way the result must be finite; NaN and infinities are
    /// rejected because the distance index would silently corrupt.
    pub fn resolve<'a>(&self, input: impl Into<EdgeInput<'a>>) -> Result<f64> {
        let Some(edge) = input.into().edge() else {
            return Err(Error::InvalidWeight("adjacency bucket holds no edge".into()));
        };

        let cost = match &self.strategy {
            Some(strategy) => strategy.compute_cost(edge)?,
            None => edge.weight.as_float().ok_or_else(|| {
                Error::InvalidWeight(format!(
                    "edge '{}' carries a {} weight where a number is required",
                    edge.name,
                    edge.weight.type_name(),
                ))
            })?,
        };

        if !cost.is_finite() {
            return Err(Error::InvalidWeight(format!(
                "edge '{}' resolved to a non-finite cost ({cost})",
                edge.name,
            )));
        }
        Ok(cost)
    }
}

impl fmt::Debug for WeightResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightResolver")
            .field("strategy", &if self.strategy.is_some() { "custom" } else { "default" })
            .finish()
    }
}
