mod common;

use common::{CatalogBuilder, CourseBuilder, chain4, diamond};
use curriplan::types::CourseStatus;

#[test]
fn test_diamond_critical_path_has_three_courses() {
    let engine = diamond();
    let path = engine.critical_path();

    // Ties between A->B->D and A->C->D go to the course processed first.
    assert_eq!(path.courses, vec!["A", "B", "D"]);
    assert_eq!(path.len(), 3);
    // Two steps of 1 + 4/4 each.
    assert_eq!(path.length, 4.0);
}

#[test]
fn test_chain_critical_path_is_whole_chain() {
    let path = chain4().critical_path();
    assert_eq!(path.courses, vec!["A", "B", "C", "D"]);
    assert_eq!(path.length, 6.0);
}

#[test]
fn test_heavier_prerequisite_wins() {
    let engine = CatalogBuilder::new()
        .with_course(CourseBuilder::new("A").credits(8).build())
        .with_course(CourseBuilder::new("B").credits(4).build())
        .with_course(CourseBuilder::new("C").after("A").after("B").build())
        .build();

    let path = engine.critical_path();
    assert_eq!(path.courses, vec!["A", "C"]);
    assert_eq!(path.length, 3.0);
}

#[test]
fn test_isolated_courses_give_single_course_path() {
    let engine = CatalogBuilder::new()
        .with_course(CourseBuilder::new("X").build())
        .with_course(CourseBuilder::new("Y").build())
        .build();

    let path = engine.critical_path();
    assert_eq!(path.courses, vec!["X"]);
    assert_eq!(path.length, 0.0);
}

#[test]
fn test_critical_path_ignores_status() {
    let mut engine = diamond();
    let before = engine.critical_path();

    engine.set_status("A", CourseStatus::Approved).unwrap();
    engine.set_status("B", CourseStatus::Failed).unwrap();

    assert_eq!(engine.critical_path(), before);
}

#[test]
fn test_critical_path_helpers() {
    let path = diamond().critical_path();
    assert!(path.contains("B"));
    assert!(!path.contains("C"));
    assert!(path.has_step("A", "B"));
    assert!(path.has_step("B", "D"));
    assert!(!path.has_step("A", "D"));
}
