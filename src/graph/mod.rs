pub mod builder;
pub mod schedule_dag;

pub use builder::DependencyGraph;
pub use schedule_dag::ScheduleDag;
