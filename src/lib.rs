//! PERT/CPM scheduling engine.
//!
//! Given a project's tasks (with possibly messy duration fields) and
//! finish-to-start dependencies, computes early/late start and finish times,
//! slack, the critical path, and the total project duration. Pure and
//! synchronous: each invocation owns its working memory and returns either a
//! complete schedule or a structured error, never a partial one.
//!
//! Pipeline: duration resolution ([`duration`]) → graph construction and
//! validation ([`graph`]) → forward/backward passes ([`calculations`]) →
//! critical path extraction ([`critical_path`]) → presentation result
//! ([`result`]). Orchestrated by [`Schedule::generate`].

pub mod calculations;
pub mod critical_path;
pub mod duration;
pub mod error;
pub mod graph;
pub mod result;
pub mod schedule;
pub mod store;
pub mod task;

pub use critical_path::{CriticalPathAnalysis, EPSILON};
pub use duration::{
    MIN_DURATION, RECONCILE_TOLERANCE, ResolvedDuration, WORKDAY_HOURS, clean_number, resolve,
};
pub use error::PertError;
pub use graph::{DependencyGraph, ScheduleDag};
pub use result::{PertEdge, PertNode, PertResult, PertSummary};
pub use schedule::{MIN_TASKS, Schedule, ScheduleEdge, ScheduleRow, TaskDiagnostics};
pub use store::{InMemoryTaskStore, StoreError, TaskStore, generate_for_project};
pub use task::{Dependency, RawValue, Task};
