use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::calculations::{BackwardPass, ForwardPass};
use crate::critical_path;
use crate::duration::{self, ResolvedDuration};
use crate::error::PertError;
use crate::graph::{DependencyGraph, ScheduleDag};
use crate::result::{PertEdge, PertNode, PertResult, PertSummary, round1};
use crate::task::{Dependency, Task};

/// A PERT analysis needs at least this many tasks.
pub const MIN_TASKS: usize = 2;

/// One fully scheduled task. Full precision; rounding happens only when the
/// presentation result is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub id: i32,
    pub name: String,
    pub duration: f64,
    pub early_start: f64,
    pub early_finish: f64,
    pub late_start: f64,
    pub late_finish: f64,
    pub slack: f64,
    pub is_critical: bool,
}

/// A dependency edge with its computed critical flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEdge {
    pub predecessor_task_id: i32,
    pub successor_task_id: i32,
    pub critical: bool,
}

/// Per-task duration resolution report, for inspecting why the engine chose
/// the effective duration it did.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDiagnostics {
    pub task_id: i32,
    pub name: String,
    #[serde(flatten)]
    pub resolution: ResolvedDuration,
}

/// The computed schedule for one invocation of the engine.
///
/// Produced whole by [`Schedule::generate`] and immutable afterwards: the
/// engine is a pure function of its inputs, recomputed from scratch on every
/// call, with no state carried between invocations.
#[derive(Debug)]
pub struct Schedule {
    rows: Vec<ScheduleRow>,
    edges: Vec<ScheduleEdge>,
    critical_path: Vec<i32>,
    project_duration: f64,
    diagnostics: Vec<TaskDiagnostics>,
}

impl Schedule {
    /// Runs the full pipeline: duration resolution, graph validation,
    /// forward and backward passes, critical path extraction.
    ///
    /// Fails with [`PertError::InsufficientData`] below 2 tasks or 1
    /// dependency, and with the structural errors from
    /// [`DependencyGraph::build`] on a broken edge set. Rows are kept in the
    /// order the tasks were supplied.
    pub fn generate(tasks: &[Task], dependencies: &[Dependency]) -> Result<Self, PertError> {
        if tasks.len() < MIN_TASKS || dependencies.is_empty() {
            return Err(PertError::InsufficientData {
                tasks: tasks.len(),
                dependencies: dependencies.len(),
            });
        }

        debug!(
            tasks = tasks.len(),
            dependencies = dependencies.len(),
            "generating PERT schedule"
        );

        let resolved: Vec<ResolvedDuration> = tasks.iter().map(duration::resolve).collect();
        let durations: HashMap<i32, f64> = tasks
            .iter()
            .zip(&resolved)
            .map(|(task, r)| (task.id, r.effective))
            .collect();

        let task_ids: Vec<i32> = tasks.iter().map(|t| t.id).collect();
        let graph = DependencyGraph::build(&task_ids, dependencies)?;
        let dag = ScheduleDag::build(&graph, &durations);

        let early = ForwardPass::new(&dag).execute()?;
        let project_duration = early.values().map(|&(_, ef)| ef).fold(0.0, f64::max);
        debug!(project_duration, "forward pass complete");

        let late = BackwardPass::new(&dag).execute(project_duration)?;
        let analysis = critical_path::analyze(&task_ids, dependencies, &early, &late);

        let rows = tasks
            .iter()
            .map(|task| {
                let (es, ef) = early.get(&task.id).copied().unwrap_or((0.0, 0.0));
                let (ls, lf) = late.get(&task.id).copied().unwrap_or((0.0, 0.0));
                ScheduleRow {
                    id: task.id,
                    name: task.name.clone(),
                    duration: durations.get(&task.id).copied().unwrap_or(0.0),
                    early_start: es,
                    early_finish: ef,
                    late_start: ls,
                    late_finish: lf,
                    slack: analysis.slack.get(&task.id).copied().unwrap_or(0.0),
                    is_critical: analysis.is_critical(task.id),
                }
            })
            .collect();

        let edges = dependencies
            .iter()
            .zip(&analysis.critical_edges)
            .map(|(dep, &critical)| ScheduleEdge {
                predecessor_task_id: dep.predecessor_task_id,
                successor_task_id: dep.successor_task_id,
                critical,
            })
            .collect();

        let diagnostics = tasks
            .iter()
            .zip(&resolved)
            .map(|(task, &resolution)| TaskDiagnostics {
                task_id: task.id,
                name: task.name.clone(),
                resolution,
            })
            .collect();

        Ok(Self {
            rows,
            edges,
            critical_path: analysis.critical_tasks,
            project_duration,
            diagnostics,
        })
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn edges(&self) -> &[ScheduleEdge] {
        &self.edges
    }

    /// Critical task ids, in input order.
    pub fn critical_path(&self) -> &[i32] {
        &self.critical_path
    }

    /// Maximum early finish over all tasks.
    pub fn project_duration(&self) -> f64 {
        self.project_duration
    }

    /// How each task's duration was resolved.
    pub fn diagnostics(&self) -> &[TaskDiagnostics] {
        &self.diagnostics
    }

    pub fn default_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("id".into(), DataType::Int32),
            Field::new("name".into(), DataType::String),
            Field::new("duration".into(), DataType::Float64),
            Field::new("early_start".into(), DataType::Float64),
            Field::new("early_finish".into(), DataType::Float64),
            Field::new("late_start".into(), DataType::Float64),
            Field::new("late_finish".into(), DataType::Float64),
            Field::new("slack".into(), DataType::Float64),
            Field::new("is_critical".into(), DataType::Boolean),
        ])
    }

    /// Materializes the schedule as a `DataFrame` for tabular analysis.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let ids: Vec<i32> = self.rows.iter().map(|r| r.id).collect();
        let names: Vec<&str> = self.rows.iter().map(|r| r.name.as_str()).collect();
        let f64_col = |f: fn(&ScheduleRow) -> f64| -> Vec<f64> { self.rows.iter().map(f).collect() };
        let criticals: Vec<bool> = self.rows.iter().map(|r| r.is_critical).collect();

        let columns: Vec<Column> = vec![
            Series::new(PlSmallStr::from_static("id"), ids).into_column(),
            Series::new(PlSmallStr::from_static("name"), names).into_column(),
            Series::new(PlSmallStr::from_static("duration"), f64_col(|r| r.duration)).into_column(),
            Series::new(
                PlSmallStr::from_static("early_start"),
                f64_col(|r| r.early_start),
            )
            .into_column(),
            Series::new(
                PlSmallStr::from_static("early_finish"),
                f64_col(|r| r.early_finish),
            )
            .into_column(),
            Series::new(
                PlSmallStr::from_static("late_start"),
                f64_col(|r| r.late_start),
            )
            .into_column(),
            Series::new(
                PlSmallStr::from_static("late_finish"),
                f64_col(|r| r.late_finish),
            )
            .into_column(),
            Series::new(PlSmallStr::from_static("slack"), f64_col(|r| r.slack)).into_column(),
            Series::new(PlSmallStr::from_static("is_critical"), criticals).into_column(),
        ];

        DataFrame::new(columns)
    }

    /// Builds the presentation result: rounded node timings, edge flags, the
    /// ordered critical path, and the summary block.
    pub fn to_result(&self) -> PertResult {
        let nodes = self
            .rows
            .iter()
            .map(|row| {
                let es = round1(row.early_start);
                let ls = round1(row.late_start);
                PertNode {
                    id: row.id.to_string(),
                    label: row.name.clone(),
                    duration: round1(row.duration),
                    es,
                    ef: round1(row.early_finish),
                    ls,
                    lf: round1(row.late_finish),
                    slack: round1(ls - es),
                    critical: row.is_critical,
                }
            })
            .collect();

        let edges: Vec<PertEdge> = self
            .edges
            .iter()
            .map(|edge| PertEdge {
                from: edge.predecessor_task_id.to_string(),
                to: edge.successor_task_id.to_string(),
                critical: edge.critical,
            })
            .collect();

        let summary = PertSummary {
            total_tasks: self.rows.len(),
            total_dependencies: edges.len(),
            critical_tasks: self.critical_path.len(),
        };

        PertResult {
            error: None,
            nodes,
            edges,
            critical_path: self.critical_path.iter().map(|id| id.to_string()).collect(),
            project_duration: round1(self.project_duration),
            summary: Some(summary),
        }
    }
}
