use petgraph::Direction;
use std::collections::HashMap;
use tracing::trace;

use crate::error::PertError;
use crate::graph::ScheduleDag;

/// Computes Early Start / Early Finish for every task.
///
/// Walks the DAG in topological order so every predecessor is resolved
/// before its successors; each node is computed exactly once. ES is the
/// maximum predecessor EF (0 for entry tasks), EF is ES plus the task's
/// effective duration.
pub struct ForwardPass<'a> {
    dag: &'a ScheduleDag,
}

impl<'a> ForwardPass<'a> {
    pub fn new(dag: &'a ScheduleDag) -> Self {
        Self { dag }
    }

    /// Returns `task_id -> (early_start, early_finish)`.
    pub fn execute(&self) -> Result<HashMap<i32, (f64, f64)>, PertError> {
        let order = self.dag.topo_order()?;
        let mut results: HashMap<i32, (f64, f64)> = HashMap::with_capacity(order.len());

        for node_ix in order {
            let task_id = self.dag.graph[node_ix];

            let mut early_start = 0.0;
            for pred_ix in self.dag.graph.neighbors_directed(node_ix, Direction::Incoming) {
                let pred_id = self.dag.graph[pred_ix];
                if let Some(&(_, pred_finish)) = results.get(&pred_id) {
                    if pred_finish > early_start {
                        early_start = pred_finish;
                    }
                }
            }

            let early_finish = early_start + self.dag.duration(task_id);
            trace!(task_id, early_start, early_finish, "forward pass");
            results.insert(task_id, (early_start, early_finish));
        }

        Ok(results)
    }
}
