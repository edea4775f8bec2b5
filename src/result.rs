//! Presentation-layer result object.
//!
//! Mirrors the JSON payload the surrounding application's graph view
//! consumes: one node per task with rounded timings, one edge per
//! dependency, the ordered critical path, and a summary block. Values are
//! rounded to one decimal here only; the engine keeps full precision
//! internally.

use serde::{Deserialize, Serialize};

use crate::error::PertError;

/// One scheduled task, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PertNode {
    pub id: String,
    pub label: String,
    pub duration: f64,
    pub es: f64,
    pub ef: f64,
    pub ls: f64,
    pub lf: f64,
    pub slack: f64,
    pub critical: bool,
}

/// One dependency edge, flagged when both endpoints are critical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PertEdge {
    pub from: String,
    pub to: String,
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PertSummary {
    pub total_tasks: usize,
    pub total_dependencies: usize,
    pub critical_tasks: usize,
}

/// The complete result object handed to the presentation layer.
///
/// Either a full internally consistent schedule, or (via [`from_error`]) an
/// error-shaped payload with empty collections, never a partial schedule.
///
/// [`from_error`]: PertResult::from_error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PertResult {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub nodes: Vec<PertNode>,
    pub edges: Vec<PertEdge>,
    pub critical_path: Vec<String>,
    pub project_duration: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<PertSummary>,
}

impl PertResult {
    /// The error-shaped payload: message plus empty collections.
    pub fn from_error(err: &PertError) -> Self {
        Self {
            error: Some(err.to_string()),
            nodes: Vec::new(),
            edges: Vec::new(),
            critical_path: Vec::new(),
            project_duration: 0.0,
            summary: None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Presentation rounding: one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
