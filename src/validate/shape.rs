//! Shape checking for raw JSON structures.
//!
//! Runs before deserialization on the untyped path ([`crate::Graph::from_value`]).
//! The typed path skips it: a [`crate::GraphSpec`] is well-shaped by construction.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// One spot where a raw structure diverges from the expected shape.
///
/// `path` is a JSON-pointer-style locator (`/edges/1/from`); the whole
/// structure is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeViolation {
    pub path: String,
    pub message: String,
}

impl ShapeViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

/// Pluggable shape check over the raw JSON structure.
///
/// Returns every violation found, not only the first. An empty vec means
/// the structure is safe to deserialize into a [`crate::GraphSpec`].
pub trait ShapeValidator {
    fn validate_shape(&self, structure: &JsonValue) -> Vec<ShapeViolation>;
}

/// The built-in shape check.
///
/// Requires an object with `nodes` and `edges` arrays. Every node needs a
/// string `name`; every edge needs string `name`, `from` and `to`. The
/// `weight` field is free-form and unknown fields are ignored, so callers
/// can carry extra annotations without tripping the check.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultShapeValidator;

impl ShapeValidator for DefaultShapeValidator {
    fn validate_shape(&self, structure: &JsonValue) -> Vec<ShapeViolation> {
        let mut violations = Vec::new();

        let Some(root) = structure.as_object() else {
            violations.push(ShapeViolation::new("", "graph structure must be an object"));
            return violations;
        };

        check_section(root, "nodes", &["name"], &mut violations);
        check_section(root, "edges", &["name", "from", "to"], &mut violations);
        violations
    }
}

fn check_section(
    root: &serde_json::Map<String, JsonValue>,
    section: &str,
    required: &[&str],
    violations: &mut Vec<ShapeViolation>,
) {
    let Some(value) = root.get(section) else {
        violations.push(ShapeViolation::new(
            format!("/{section}"),
            format!("missing required array '{section}'"),
        ));
        return;
    };

    let Some(items) = value.as_array() else {
        violations.push(ShapeViolation::new(
            format!("/{section}"),
            format!("'{section}' must be an array"),
        ));
        return;
    };

    for (i, item) in items.iter().enumerate() {
        let Some(fields) = item.as_object() else {
            violations.push(ShapeViolation::new(
                format!("/{section}/{i}"),
                "entry must be an object",
            ));
            continue;
        };

        for field in required {
            match fields.get(*field) {
                None => violations.push(ShapeViolation::new(
                    format!("/{section}/{i}/{field}"),
                    format!("missing required field '{field}'"),
                )),
                Some(v) if !v.is_string() => violations.push(ShapeViolation::new(
                    format!("/{section}/{i}/{field}"),
                    format!("'{field}' must be a string"),
                )),
                Some(_) => {}
            }
        }
    }
}
