mod common;

use common::{chain4, diamond};
use curriplan::report;
use curriplan::types::CourseStatus;

#[test]
fn test_diamond_layout() {
    let layout = diamond().layout();

    let placed: Vec<(&str, u32, usize, bool)> = layout
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.column, n.row, n.on_critical_path))
        .collect();
    assert_eq!(
        placed,
        vec![
            ("A", 1, 0, true),
            ("B", 2, 0, true),
            ("C", 2, 1, false),
            ("D", 3, 0, true),
        ]
    );

    let edges: Vec<(&str, &str, bool)> = layout
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str(), e.on_critical_path))
        .collect();
    assert_eq!(
        edges,
        vec![
            ("A", "B", true),
            ("A", "C", false),
            ("B", "D", true),
            ("C", "D", false),
        ]
    );
}

#[test]
fn test_layout_rows_follow_dependent_count() {
    // Both in term 1; Z unlocks two courses, Y none.
    let engine = common::CatalogBuilder::new()
        .with_course(common::CourseBuilder::new("Y").term(1).build())
        .with_course(common::CourseBuilder::new("Z").term(1).build())
        .with_course(common::CourseBuilder::new("P").term(2).after("Z").build())
        .with_course(common::CourseBuilder::new("Q").term(2).after("Z").build())
        .build();

    let layout = engine.layout();
    let z = layout.nodes.iter().find(|n| n.id == "Z").unwrap();
    let y = layout.nodes.iter().find(|n| n.id == "Y").unwrap();
    assert_eq!((z.row, z.dependents), (0, 2));
    assert_eq!((y.row, y.dependents), (1, 0));
}

#[test]
fn test_report_contains_path_and_schedule() {
    let mut engine = diamond();
    engine.set_status("A", CourseStatus::Approved).unwrap();
    let schedule = engine.optimal_schedule(8).unwrap();

    let text = report::render(&engine, Some(&schedule));
    assert!(text.contains("courses: 4 (1 approved, 0 failed, 3 not taken)"));
    assert!(text.contains("critical path (3 courses"));
    assert!(text.contains("A -> B -> D"));
    assert!(text.contains("available now: B, C"));
    assert!(text.contains("schedule: 1 term(s)"));
    assert!(text.contains("term  1 [  8 cr]: B, C"));
}

#[test]
fn test_report_marks_unreachable() {
    let engine = chain4();
    let schedule = engine.optimal_schedule(3).unwrap();

    let text = report::render(&engine, Some(&schedule));
    assert!(text.contains("schedule: unreachable"));
    assert!(text.contains("courses above the credit cap: A, B, C, D"));
}

#[test]
fn test_dry_run_report_has_no_schedule() {
    let text = report::render(&chain4(), None);
    assert!(text.contains("critical path (4 courses"));
    assert!(!text.contains("schedule:"));
}
