//! Slack and critical-path extraction from the pass results.

use std::collections::HashMap;

use tracing::debug;

use crate::task::Dependency;

/// Slack below this is treated as zero. Absorbs floating rounding from the
/// three-point-estimate division.
pub const EPSILON: f64 = 0.001;

/// Per-task slack and the derived critical sets.
#[derive(Debug, Clone)]
pub struct CriticalPathAnalysis {
    /// `task_id -> late_start - early_start`.
    pub slack: HashMap<i32, f64>,
    /// Critical task ids in the order the tasks were supplied.
    pub critical_tasks: Vec<i32>,
    /// One flag per input dependency, in input order.
    pub critical_edges: Vec<bool>,
}

impl CriticalPathAnalysis {
    pub fn is_critical(&self, task_id: i32) -> bool {
        self.slack
            .get(&task_id)
            .map(|s| s.abs() < EPSILON)
            .unwrap_or(false)
    }
}

/// Derives slack, critical tasks, and critical edges.
///
/// An edge is flagged critical when both endpoints are critical. With
/// several parallel zero-slack subpaths this overmarks: both endpoints being
/// critical is necessary but not sufficient for the edge to lie on a single
/// end-to-end longest path. The approximation is kept because the
/// presentation layer highlights critical regions, not one specific path.
pub fn analyze(
    task_order: &[i32],
    dependencies: &[Dependency],
    early: &HashMap<i32, (f64, f64)>,
    late: &HashMap<i32, (f64, f64)>,
) -> CriticalPathAnalysis {
    let mut slack: HashMap<i32, f64> = HashMap::with_capacity(task_order.len());
    let mut critical_tasks = Vec::new();

    for &task_id in task_order {
        let es = early.get(&task_id).map(|&(es, _)| es).unwrap_or(0.0);
        let ls = late.get(&task_id).map(|&(ls, _)| ls).unwrap_or(0.0);
        let task_slack = ls - es;
        slack.insert(task_id, task_slack);
        if task_slack.abs() < EPSILON {
            critical_tasks.push(task_id);
        }
    }

    let critical_edges = dependencies
        .iter()
        .map(|dep| {
            critical_tasks.contains(&dep.predecessor_task_id)
                && critical_tasks.contains(&dep.successor_task_id)
        })
        .collect();

    debug!(critical = critical_tasks.len(), "critical path extracted");

    CriticalPathAnalysis {
        slack,
        critical_tasks,
        critical_edges,
    }
}
