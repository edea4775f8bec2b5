use pert_engine::{Dependency, DependencyGraph, PertError, Schedule, Task};

fn tasks(n: i32) -> Vec<Task> {
    (1..=n).map(|i| Task::new(i, format!("T{i}"), 2)).collect()
}

#[test]
fn self_referencing_edge_is_rejected() {
    let deps = vec![Dependency::new(1, 1)];
    let err = Schedule::generate(&tasks(2), &deps).unwrap_err();
    assert_eq!(err, PertError::InvalidDependency { task_id: 1 });
}

#[test]
fn edge_outside_task_scope_is_rejected() {
    let deps = vec![Dependency::new(1, 2), Dependency::new(2, 50)];
    let err = Schedule::generate(&tasks(3), &deps).unwrap_err();
    assert_eq!(
        err,
        PertError::CrossProjectReference {
            predecessor_task_id: 2,
            successor_task_id: 50
        }
    );
}

#[test]
fn mutual_dependency_is_a_cycle() {
    let deps = vec![Dependency::new(1, 2), Dependency::new(2, 1)];
    let err = Schedule::generate(&tasks(2), &deps).unwrap_err();
    assert_eq!(err, PertError::CyclicDependency);
}

#[test]
fn longer_cycle_aborts_whole_computation() {
    // 1 -> 2 -> 3 -> 4 -> 2: no schedule at all, not a partial one.
    let deps = vec![
        Dependency::new(1, 2),
        Dependency::new(2, 3),
        Dependency::new(3, 4),
        Dependency::new(4, 2),
    ];
    let err = Schedule::generate(&tasks(4), &deps).unwrap_err();
    assert_eq!(err, PertError::CyclicDependency);
}

#[test]
fn incremental_edge_validation_flags_closing_edges() {
    let deps = vec![Dependency::new(1, 2), Dependency::new(2, 3)];
    let graph = DependencyGraph::build(&[1, 2, 3, 4], &deps).unwrap();

    // 3 -> 1 would close the chain into a cycle; 1 -> 4 would not.
    assert!(graph.would_create_cycle(3, 1));
    assert!(graph.would_create_cycle(1, 1));
    assert!(!graph.would_create_cycle(1, 4));
    assert!(!graph.would_create_cycle(4, 1));
}

#[test]
fn adjacency_covers_every_task() {
    let deps = vec![Dependency::new(1, 2)];
    let graph = DependencyGraph::build(&[1, 2, 3], &deps).unwrap();
    assert_eq!(graph.len(), 3);
    assert!(graph.successors(3).is_empty());
    assert!(graph.predecessors(3).is_empty());
}
