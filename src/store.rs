//! Seam to the external task/dependency store.
//!
//! The engine never talks to a database itself; a collaborator hands it the
//! task and edge lists for a project. This module defines that contract and
//! a map-backed implementation for embedding and tests.

use std::collections::HashMap;

use crate::result::PertResult;
use crate::schedule::Schedule;
use crate::task::{Dependency, Task};

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies the raw inputs for one scheduling scope.
pub trait TaskStore {
    fn list_tasks(&self, project_id: i32) -> Result<Vec<Task>, StoreError>;
    fn list_dependencies(&self, project_id: i32) -> Result<Vec<Dependency>, StoreError>;
}

/// In-memory store keyed by project id.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: HashMap<i32, Vec<Task>>,
    dependencies: HashMap<i32, Vec<Dependency>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_project(&mut self, project_id: i32, tasks: Vec<Task>, deps: Vec<Dependency>) {
        self.tasks.insert(project_id, tasks);
        self.dependencies.insert(project_id, deps);
    }
}

impl TaskStore for InMemoryTaskStore {
    fn list_tasks(&self, project_id: i32) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.get(&project_id).cloned().unwrap_or_default())
    }

    fn list_dependencies(&self, project_id: i32) -> Result<Vec<Dependency>, StoreError> {
        Ok(self
            .dependencies
            .get(&project_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Fetches a project's inputs and runs the engine.
///
/// Engine failures become the error-shaped result the presentation layer
/// expects; only store failures propagate as errors.
pub fn generate_for_project<S: TaskStore>(
    store: &S,
    project_id: i32,
) -> Result<PertResult, StoreError> {
    let tasks = store.list_tasks(project_id)?;
    let dependencies = store.list_dependencies(project_id)?;

    Ok(match Schedule::generate(&tasks, &dependencies) {
        Ok(schedule) => schedule.to_result(),
        Err(err) => PertResult::from_error(&err),
    })
}
