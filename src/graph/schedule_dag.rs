use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use crate::error::PertError;
use crate::graph::DependencyGraph;

/// Node-index arena over a validated dependency graph.
///
/// Both passes traverse the same structure: petgraph supplies the
/// topological order and neighbor lookups, the `durations` map supplies the
/// per-task effective duration from the resolver.
pub struct ScheduleDag {
    pub graph: DiGraph<i32, ()>,
    pub id_to_index: HashMap<i32, NodeIndex>,
    pub durations: HashMap<i32, f64>,
}

impl ScheduleDag {
    pub fn build(deps: &DependencyGraph, durations: &HashMap<i32, f64>) -> Self {
        let mut graph: DiGraph<i32, ()> = DiGraph::new();
        let mut id_to_index: HashMap<i32, NodeIndex> = HashMap::new();

        // Insert nodes in sorted id order so the arena layout is stable.
        let mut task_ids: Vec<i32> = deps.task_ids().collect();
        task_ids.sort_unstable();

        for &task_id in &task_ids {
            let node_ix = graph.add_node(task_id);
            id_to_index.insert(task_id, node_ix);
        }

        // Edges: pred -> succ
        for &task_id in &task_ids {
            for &succ_id in deps.successors(task_id) {
                if let (Some(&u), Some(&v)) = (id_to_index.get(&task_id), id_to_index.get(&succ_id))
                {
                    graph.add_edge(u, v, ());
                }
            }
        }

        Self {
            graph,
            id_to_index,
            durations: durations.clone(),
        }
    }

    /// Topological order over the arena.
    ///
    /// The builder has already rejected cyclic input; a failure here means
    /// the graph was mutated out from under us and is still surfaced as a
    /// cycle rather than a panic or an endless traversal.
    pub fn topo_order(&self) -> Result<Vec<NodeIndex>, PertError> {
        petgraph::algo::toposort(&self.graph, None).map_err(|_| PertError::CyclicDependency)
    }

    pub fn duration(&self, task_id: i32) -> f64 {
        self.durations.get(&task_id).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Dependency;

    #[test]
    fn build_mirrors_dependency_graph() {
        let deps = [Dependency::new(1, 2), Dependency::new(1, 3)];
        let graph = DependencyGraph::build(&[1, 2, 3], &deps).unwrap();
        let durations = HashMap::from([(1, 2.0), (2, 3.0), (3, 1.0)]);

        let dag = ScheduleDag::build(&graph, &durations);
        assert_eq!(dag.graph.node_count(), 3);
        assert_eq!(dag.graph.edge_count(), 2);
        assert_eq!(dag.duration(2), 3.0);
        assert_eq!(dag.duration(99), 0.0);
        assert!(dag.topo_order().is_ok());
    }
}
