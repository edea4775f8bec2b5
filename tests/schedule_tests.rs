use pert_engine::{
    Dependency, InMemoryTaskStore, PertError, PertResult, Schedule, Task, generate_for_project,
};

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Design", 2),
        Task::new(2, "Build", 3),
        Task::new(3, "Test", 5),
    ]
}

fn sample_deps() -> Vec<Dependency> {
    vec![Dependency::new(1, 2), Dependency::new(2, 3)]
}

#[test]
fn empty_task_set_is_insufficient() {
    let err = Schedule::generate(&[], &[]).unwrap_err();
    assert_eq!(
        err,
        PertError::InsufficientData {
            tasks: 0,
            dependencies: 0
        }
    );
}

#[test]
fn single_task_is_insufficient() {
    let tasks = vec![Task::new(1, "Lonely", 3)];
    let err = Schedule::generate(&tasks, &[]).unwrap_err();
    assert!(matches!(err, PertError::InsufficientData { tasks: 1, .. }));
}

#[test]
fn two_tasks_without_dependencies_are_insufficient() {
    let tasks = vec![Task::new(1, "A", 2), Task::new(2, "B", 3)];
    let err = Schedule::generate(&tasks, &[]).unwrap_err();
    assert_eq!(
        err,
        PertError::InsufficientData {
            tasks: 2,
            dependencies: 0
        }
    );
}

#[test]
fn result_carries_nodes_edges_and_summary() {
    let s = Schedule::generate(&sample_tasks(), &sample_deps()).unwrap();
    let result = s.to_result();

    assert!(result.error.is_none());
    assert_eq!(result.nodes.len(), 3);
    assert_eq!(result.edges.len(), 2);
    assert_eq!(result.critical_path, vec!["1", "2", "3"]);
    assert_eq!(result.project_duration, 10.0);

    let summary = result.summary.unwrap();
    assert_eq!(summary.total_tasks, 3);
    assert_eq!(summary.total_dependencies, 2);
    assert_eq!(summary.critical_tasks, 3);

    let node = &result.nodes[1];
    assert_eq!(node.id, "2");
    assert_eq!(node.label, "Build");
    assert_eq!((node.es, node.ef, node.ls, node.lf), (2.0, 5.0, 2.0, 5.0));
    assert_eq!(node.slack, 0.0);
    assert!(node.critical);
}

#[test]
fn node_values_are_rounded_for_presentation() {
    let tasks = vec![
        Task::new(1, "Estimated", 1).with_estimates(2, 3, 5),
        Task::new(2, "Plain", 2),
    ];
    let s = Schedule::generate(&tasks, &[Dependency::new(1, 2)]).unwrap();
    let result = s.to_result();

    // (2 + 12 + 5) / 6 = 3.1666... rounds to 3.2.
    assert_eq!(result.nodes[0].duration, 3.2);
    assert_eq!(result.nodes[0].ef, 3.2);
    assert_eq!(result.nodes[1].es, 3.2);
    assert_eq!(result.project_duration, 5.2);
}

#[test]
fn identical_inputs_produce_byte_identical_output() {
    let first = Schedule::generate(&sample_tasks(), &sample_deps())
        .unwrap()
        .to_result()
        .to_json()
        .unwrap();
    let second = Schedule::generate(&sample_tasks(), &sample_deps())
        .unwrap()
        .to_result()
        .to_json()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn error_result_round_trips_as_json() {
    let err = Schedule::generate(&[], &[]).unwrap_err();
    let result = PertResult::from_error(&err);
    let json = result.to_json().unwrap();

    let parsed: PertResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
    assert_eq!(parsed.project_duration, 0.0);
}

#[test]
fn cyclic_input_never_yields_a_schedule_through_the_store() {
    let mut store = InMemoryTaskStore::new();
    store.insert_project(
        1,
        vec![Task::new(1, "A", 2), Task::new(2, "B", 3)],
        vec![Dependency::new(1, 2), Dependency::new(2, 1)],
    );

    let result = generate_for_project(&store, 1).unwrap();
    assert!(result.error.as_deref().unwrap().contains("circular"));
    assert!(result.nodes.is_empty());
    assert!(result.critical_path.is_empty());
}

#[test]
fn store_backed_generation_matches_direct_generation() {
    let mut store = InMemoryTaskStore::new();
    store.insert_project(9, sample_tasks(), sample_deps());

    let via_store = generate_for_project(&store, 9).unwrap();
    let direct = Schedule::generate(&sample_tasks(), &sample_deps())
        .unwrap()
        .to_result();
    assert_eq!(via_store, direct);
}
