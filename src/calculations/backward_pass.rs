use petgraph::Direction;
use std::collections::HashMap;
use tracing::trace;

use crate::error::PertError;
use crate::graph::ScheduleDag;

/// Computes Late Start / Late Finish for every task.
///
/// Walks the DAG in reverse topological order so every successor is
/// resolved before its predecessors. LF is the minimum successor LS, seeded
/// with the project duration for terminal tasks; LS is LF minus the task's
/// effective duration.
pub struct BackwardPass<'a> {
    dag: &'a ScheduleDag,
}

impl<'a> BackwardPass<'a> {
    pub fn new(dag: &'a ScheduleDag) -> Self {
        Self { dag }
    }

    /// Returns `task_id -> (late_start, late_finish)`.
    pub fn execute(&self, project_duration: f64) -> Result<HashMap<i32, (f64, f64)>, PertError> {
        let mut order = self.dag.topo_order()?;
        order.reverse();

        let mut results: HashMap<i32, (f64, f64)> = HashMap::with_capacity(order.len());

        for node_ix in order {
            let task_id = self.dag.graph[node_ix];

            let mut late_finish = f64::INFINITY;
            let mut has_successor = false;
            for succ_ix in self.dag.graph.neighbors_directed(node_ix, Direction::Outgoing) {
                let succ_id = self.dag.graph[succ_ix];
                if let Some(&(succ_start, _)) = results.get(&succ_id) {
                    has_successor = true;
                    if succ_start < late_finish {
                        late_finish = succ_start;
                    }
                }
            }
            if !has_successor {
                late_finish = project_duration;
            }

            let late_start = late_finish - self.dag.duration(task_id);
            trace!(task_id, late_start, late_finish, "backward pass");
            results.insert(task_id, (late_start, late_finish));
        }

        Ok(results)
    }
}
