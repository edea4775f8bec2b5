use thiserror::Error;

/// Errors the scheduling engine can surface to its caller.
///
/// Structural problems (cycles, invalid edges) abort the whole computation;
/// no partial schedule is ever returned because early/late dates are
/// undefined on a broken graph. Malformed duration values are not an error:
/// the resolver repairs them silently (see [`crate::duration`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PertError {
    /// Fewer than 2 tasks or no dependencies; there is nothing to analyze.
    #[error("need at least 2 tasks and 1 dependency for PERT analysis (got {tasks} tasks, {dependencies} dependencies)")]
    InsufficientData { tasks: usize, dependencies: usize },

    /// A dependency pointing a task at itself.
    #[error("task {task_id} cannot depend on itself")]
    InvalidDependency { task_id: i32 },

    /// A dependency endpoint that is not part of the supplied task set.
    #[error("dependency {predecessor_task_id} -> {successor_task_id} references a task outside this project")]
    CrossProjectReference {
        predecessor_task_id: i32,
        successor_task_id: i32,
    },

    /// The dependency graph contains a cycle.
    #[error("circular dependency detected in task graph")]
    CyclicDependency,
}
