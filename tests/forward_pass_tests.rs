use pert_engine::{Dependency, Schedule, ScheduleRow, Task};
use std::collections::HashMap;

fn rows_by_id(schedule: &Schedule) -> HashMap<i32, ScheduleRow> {
    schedule.rows().iter().map(|r| (r.id, r.clone())).collect()
}

#[test]
fn linear_chain_accumulates_early_dates() {
    // A(2) -> B(3) -> C(5)
    let tasks = vec![
        Task::new(1, "A", 2),
        Task::new(2, "B", 3),
        Task::new(3, "C", 5),
    ];
    let deps = vec![Dependency::new(1, 2), Dependency::new(2, 3)];
    let s = Schedule::generate(&tasks, &deps).unwrap();
    let m = rows_by_id(&s);

    assert_eq!((m[&1].early_start, m[&1].early_finish), (0.0, 2.0));
    assert_eq!((m[&2].early_start, m[&2].early_finish), (2.0, 5.0));
    assert_eq!((m[&3].early_start, m[&3].early_finish), (5.0, 10.0));
    assert_eq!(s.project_duration(), 10.0);
}

#[test]
fn parallel_branches_join_on_latest_finish() {
    // A(4) and B(2) both precede C(3).
    let tasks = vec![
        Task::new(1, "A", 4),
        Task::new(2, "B", 2),
        Task::new(3, "C", 3),
    ];
    let deps = vec![Dependency::new(1, 3), Dependency::new(2, 3)];
    let s = Schedule::generate(&tasks, &deps).unwrap();
    let m = rows_by_id(&s);

    assert_eq!(m[&3].early_start, 4.0);
    assert_eq!(m[&3].early_finish, 7.0);
    assert_eq!(s.project_duration(), 7.0);
}

#[test]
fn early_finish_minus_start_equals_duration() {
    let tasks = vec![
        Task::new(1, "A", 2).with_estimates(2, 3, 5),
        Task::new(2, "B", "0004"),
        Task::new(3, "C", 16),
        Task::new(4, "D", 3),
    ];
    let deps = vec![
        Dependency::new(1, 2),
        Dependency::new(1, 3),
        Dependency::new(2, 4),
        Dependency::new(3, 4),
    ];
    let s = Schedule::generate(&tasks, &deps).unwrap();

    for row in s.rows() {
        assert!(
            (row.early_finish - row.early_start - row.duration).abs() < 1e-9,
            "EF - ES != duration for task {}",
            row.id
        );
    }
}

#[test]
fn entry_tasks_start_at_zero() {
    let tasks = vec![
        Task::new(1, "A", 4),
        Task::new(2, "B", 2),
        Task::new(3, "C", 3),
    ];
    let deps = vec![Dependency::new(1, 3), Dependency::new(2, 3)];
    let s = Schedule::generate(&tasks, &deps).unwrap();
    let m = rows_by_id(&s);

    assert_eq!(m[&1].early_start, 0.0);
    assert_eq!(m[&2].early_start, 0.0);
}
