//! # Structure Validation
//!
//! Gatekeeper for graph construction. Checks run in a fixed order and the
//! first failing check ends the run, but within a check every offender is
//! collected before reporting:
//!
//! 1. shape of the raw JSON (untyped path only, see [`shape`])
//! 2. node-name uniqueness
//! 3. edge-name uniqueness
//! 4. referential integrity: every edge endpoint names a declared node
//!
//! A failed run surfaces as a [`ValidationFailure`] carrying one
//! [`Violation`] per offender, so a caller fixing a structure sees the
//! whole blast radius of the check that failed, not just the first hit.

pub mod shape;

use std::fmt;

use hashbrown::HashSet;
use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::model::GraphSpec;
use shape::{ShapeValidator, ShapeViolation};

// ============================================================================
// Violations
// ============================================================================

/// One offender found by a validation check.
///
/// Serializes as `{"kind": ..., "details": ...}` so failures can be
/// reported over the wire or logged structurally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "details")]
pub enum Violation {
    /// Raw structure diverges from the expected shape.
    Shape(ShapeViolation),
    /// A node name declared more than once.
    DuplicateNodeName(String),
    /// An edge name declared more than once.
    DuplicateEdgeName(String),
    /// An edge whose `from` or `to` names no declared node.
    HangingEdge(String),
}

impl Violation {
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::Shape(_) => "Shape",
            Violation::DuplicateNodeName(_) => "DuplicateNodeName",
            Violation::DuplicateEdgeName(_) => "DuplicateEdgeName",
            Violation::HangingEdge(_) => "HangingEdge",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Shape(v) => write!(f, "shape at '{}': {}", v.path, v.message),
            Violation::DuplicateNodeName(name) => write!(f, "duplicate node name '{name}'"),
            Violation::DuplicateEdgeName(name) => write!(f, "duplicate edge name '{name}'"),
            Violation::HangingEdge(name) => write!(f, "edge '{name}' points to an undeclared node"),
        }
    }
}

/// Why a structure was rejected: one failed check plus all its offenders.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationFailure {
    pub message: String,
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self { message: message.into(), violations }
    }
}

// ============================================================================
// Checks
// ============================================================================

/// Validate an already-typed structure (checks 2 through 4).
pub fn validate(spec: &GraphSpec) -> Result<(), ValidationFailure> {
    let duplicates = duplicated_names(spec.nodes.iter().map(|n| n.name.as_str()));
    if !duplicates.is_empty() {
        return Err(ValidationFailure::new(
            "node names must be unique",
            duplicates.into_iter().map(Violation::DuplicateNodeName).collect(),
        ));
    }

    let duplicates = duplicated_names(spec.edges.iter().map(|e| e.name.as_str()));
    if !duplicates.is_empty() {
        return Err(ValidationFailure::new(
            "edge names must be unique",
            duplicates.into_iter().map(Violation::DuplicateEdgeName).collect(),
        ));
    }

    let hanging = hanging_edge_names(spec);
    if !hanging.is_empty() {
        return Err(ValidationFailure::new(
            "edges must reference declared nodes",
            hanging.into_iter().map(Violation::HangingEdge).collect(),
        ));
    }

    Ok(())
}

/// Validate a raw JSON structure (check 1, then 2 through 4) and type it.
///
/// Shape violations come from the supplied [`ShapeValidator`]. If a custom
/// validator admits a structure the typed form cannot represent, the
/// deserialization error is reported as a single shape violation at the
/// root rather than a panic.
pub fn validate_value(
    structure: &JsonValue,
    shape: &dyn ShapeValidator,
) -> Result<GraphSpec, ValidationFailure> {
    let violations = shape.validate_shape(structure);
    if !violations.is_empty() {
        return Err(ValidationFailure::new(
            "graph structure does not match the declared shape",
            violations.into_iter().map(Violation::Shape).collect(),
        ));
    }

    let spec: GraphSpec = serde_json::from_value(structure.clone()).map_err(|err| {
        ValidationFailure::new(
            "graph structure does not match the declared shape",
            vec![Violation::Shape(ShapeViolation::new("", err.to_string()))],
        )
    })?;

    validate(&spec)?;
    Ok(spec)
}

/// Names that occur more than once, in order of first repeat, each once.
fn duplicated_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for name in names {
        if !seen.insert(name) && !duplicates.iter().any(|d| d.as_str() == name) {
            duplicates.push(name.to_owned());
        }
    }
    duplicates
}

/// Edges whose `from` or `to` is not a declared node, in declaration order.
fn hanging_edge_names(spec: &GraphSpec) -> Vec<String> {
    let declared: HashSet<&str> = spec.nodes.iter().map(|n| n.name.as_str()).collect();
    spec.edges
        .iter()
        .filter(|e| !declared.contains(e.from.as_str()) || !declared.contains(e.to.as_str()))
        .map(|e| e.name.clone())
        .collect()
}
