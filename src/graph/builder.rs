use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::PertError;
use crate::task::Dependency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Validated forward and reverse adjacency over a project's task set.
///
/// Every task id maps to an entry in both directions; tasks without edges
/// map to empty lists. Construction fails on self-loops, edges referencing
/// tasks outside the supplied set, and cycles: a broken graph is rejected
/// whole, never partially.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    forward: HashMap<i32, Vec<i32>>,
    reverse: HashMap<i32, Vec<i32>>,
}

impl DependencyGraph {
    pub fn build(task_ids: &[i32], dependencies: &[Dependency]) -> Result<Self, PertError> {
        let mut forward: HashMap<i32, Vec<i32>> = HashMap::with_capacity(task_ids.len());
        let mut reverse: HashMap<i32, Vec<i32>> = HashMap::with_capacity(task_ids.len());

        for &task_id in task_ids {
            forward.insert(task_id, Vec::new());
            reverse.insert(task_id, Vec::new());
        }

        for dep in dependencies {
            let (pred, succ) = (dep.predecessor_task_id, dep.successor_task_id);

            if pred == succ {
                return Err(PertError::InvalidDependency { task_id: pred });
            }
            if !forward.contains_key(&pred) || !forward.contains_key(&succ) {
                return Err(PertError::CrossProjectReference {
                    predecessor_task_id: pred,
                    successor_task_id: succ,
                });
            }

            forward.entry(pred).or_default().push(succ);
            reverse.entry(succ).or_default().push(pred);
        }

        let graph = Self { forward, reverse };
        graph.check_acyclic()?;

        debug!(
            tasks = task_ids.len(),
            edges = dependencies.len(),
            "dependency graph built"
        );
        Ok(graph)
    }

    /// Successor ids of a task (empty for unknown ids).
    pub fn successors(&self, task_id: i32) -> &[i32] {
        self.forward.get(&task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Predecessor ids of a task (empty for unknown ids).
    pub fn predecessors(&self, task_id: i32) -> &[i32] {
        self.reverse.get(&task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn task_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.forward.keys().copied()
    }

    /// Whether inserting `predecessor -> successor` would create a cycle.
    ///
    /// Used to validate a single proposed edge before it is persisted: the
    /// edge closes a cycle exactly when the successor already reaches the
    /// predecessor through existing edges (or the edge is a self-loop).
    pub fn would_create_cycle(&self, predecessor: i32, successor: i32) -> bool {
        if predecessor == successor {
            return true;
        }

        let mut stack = vec![successor];
        let mut seen = HashSet::from([successor]);
        while let Some(node) = stack.pop() {
            if node == predecessor {
                return true;
            }
            for &next in self.successors(node) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        false
    }

    /// Depth-first cycle check over the full adjacency.
    ///
    /// Iterative with an explicit frame stack so pathological graphs cannot
    /// exhaust the call stack. A node encountered while still in progress is
    /// a back edge.
    fn check_acyclic(&self) -> Result<(), PertError> {
        let mut state: HashMap<i32, VisitState> = self
            .forward
            .keys()
            .map(|&id| (id, VisitState::Unvisited))
            .collect();

        let roots: Vec<i32> = self.forward.keys().copied().collect();
        for root in roots {
            if state[&root] != VisitState::Unvisited {
                continue;
            }
            state.insert(root, VisitState::InProgress);
            let mut stack: Vec<(i32, usize)> = vec![(root, 0)];

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                let child = frame.1;
                frame.1 += 1;

                let succs = self.forward.get(&node).map(Vec::as_slice).unwrap_or(&[]);
                if child < succs.len() {
                    let next = succs[child];
                    match state.get(&next).copied() {
                        Some(VisitState::InProgress) => return Err(PertError::CyclicDependency),
                        Some(VisitState::Unvisited) => {
                            state.insert(next, VisitState::InProgress);
                            stack.push((next, 0));
                        }
                        _ => {}
                    }
                } else {
                    stack.pop();
                    state.insert(node, VisitState::Done);
                }
            }
        }

        Ok(())
    }
}
