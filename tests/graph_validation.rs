mod common;

use common::{CatalogBuilder, CourseBuilder, init_tracing};
use curriplan::engine::Engine;
use curriplan::errors::PlanError;
use curriplan::graph::{CourseGraph, RejectReason, compute_order, screen_courses};

#[test]
fn test_two_course_cycle_is_reported() {
    init_tracing();

    let courses = CatalogBuilder::new()
        .with_course(CourseBuilder::new("A").after("B").build())
        .with_course(CourseBuilder::new("B").after("A").build())
        .courses();

    match Engine::build(courses) {
        Err(PlanError::CycleDetected { cycles }) => {
            assert_eq!(cycles.len(), 1);
            assert!(cycles[0].contains(&"A".to_string()));
            assert!(cycles[0].contains(&"B".to_string()));
        }
        Err(e) => panic!("Expected CycleDetected, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_cycle_is_listed_prerequisite_first() {
    // A needs C, C needs B, B needs A.
    let courses = CatalogBuilder::new()
        .with_course(CourseBuilder::new("A").after("C").build())
        .with_course(CourseBuilder::new("B").after("A").build())
        .with_course(CourseBuilder::new("C").after("B").build())
        .courses();

    let err = Engine::build(courses).unwrap_err();
    let PlanError::CycleDetected { cycles } = err else {
        panic!("Expected CycleDetected");
    };
    assert_eq!(cycles, vec![vec!["B".to_string(), "C".to_string(), "A".to_string()]]);
}

#[test]
fn test_every_independent_cycle_is_reported() {
    let courses = CatalogBuilder::new()
        .with_course(CourseBuilder::new("A").after("B").build())
        .with_course(CourseBuilder::new("B").after("A").build())
        .with_course(CourseBuilder::new("C").after("D").build())
        .with_course(CourseBuilder::new("D").after("C").build())
        .with_course(CourseBuilder::new("E").build())
        .courses();

    let err = Engine::build(courses).unwrap_err();
    let msg = err.to_string();
    let PlanError::CycleDetected { cycles } = err else {
        panic!("Expected CycleDetected");
    };
    assert_eq!(cycles.len(), 2);
    assert!(cycles[0].contains(&"A".to_string()) && cycles[0].contains(&"B".to_string()));
    assert!(cycles[1].contains(&"C".to_string()) && cycles[1].contains(&"D".to_string()));
    assert!(msg.contains("cycle"));
}

#[test]
fn test_topological_order_puts_prerequisites_first() {
    let engine = CatalogBuilder::new()
        .with_course(CourseBuilder::new("D").after("B").after("C").build())
        .with_course(CourseBuilder::new("C").after("A").build())
        .with_course(CourseBuilder::new("B").after("A").build())
        .with_course(CourseBuilder::new("A").build())
        .build();

    let order = engine.topological_order();
    let pos = |id: &str| order.iter().position(|c| c == id).unwrap();
    assert_eq!(order.len(), 4);
    assert!(pos("A") < pos("B"));
    assert!(pos("A") < pos("C"));
    assert!(pos("B") < pos("D"));
    assert!(pos("C") < pos("D"));
}

#[test]
fn test_invalid_entries_are_dropped_not_fatal() {
    init_tracing();

    let engine = CatalogBuilder::new()
        .with_course(CourseBuilder::new("A").build())
        .with_course(CourseBuilder::new("SELF").after("SELF").build())
        .with_course(CourseBuilder::new("NEEDS_SELF").after("SELF").build())
        .with_course(CourseBuilder::new("GHOST_DEP").after("NOPE").build())
        .with_course(CourseBuilder::new("ZERO").credits(0).build())
        .with_course(CourseBuilder::new("B").after("A").build())
        .build();

    let ids: Vec<String> = engine.courses().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn test_screen_courses_reports_reasons() {
    let courses = CatalogBuilder::new()
        .with_course(CourseBuilder::new("A").build())
        .with_course(CourseBuilder::new("A").credits(3).build())
        .with_course(CourseBuilder::new("").build())
        .with_course(CourseBuilder::new("X").after("X").build())
        .with_course(CourseBuilder::new("Y").after("X").build())
        .with_course(CourseBuilder::new("Z").after("Y").build())
        .with_course(CourseBuilder::new("U").after("MISSING").build())
        .courses();

    let (accepted, rejected) = screen_courses(courses);

    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].id, "A");
    assert_eq!(accepted[0].credits, 4, "first occurrence of a duplicate wins");

    let reason_of = |id: &str| {
        rejected
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.reason.clone())
            .unwrap()
    };
    assert_eq!(reason_of("A"), RejectReason::DuplicateId);
    assert_eq!(reason_of(""), RejectReason::EmptyId);
    assert_eq!(reason_of("X"), RejectReason::SelfReference);
    assert_eq!(reason_of("Y"), RejectReason::RejectedPrerequisite("X".into()));
    assert_eq!(reason_of("Z"), RejectReason::RejectedPrerequisite("Y".into()));
    assert_eq!(reason_of("U"), RejectReason::UnknownPrerequisite("MISSING".into()));
}

#[test]
fn test_empty_catalog_builds() {
    let engine = CatalogBuilder::new().build();
    assert!(engine.is_empty());
    assert!(engine.topological_order().is_empty());
    assert!(engine.critical_path().is_empty());
}

#[test]
fn test_compute_order_puts_prerequisites_first() {
    // Listed dependents-first so catalog order is not already valid.
    let courses = CatalogBuilder::new()
        .with_course(CourseBuilder::new("D").after("B").after("C").build())
        .with_course(CourseBuilder::new("C").after("A").build())
        .with_course(CourseBuilder::new("B").after("A").build())
        .with_course(CourseBuilder::new("A").build())
        .courses();
    let graph = CourseGraph::new(courses).unwrap();

    assert_eq!(compute_order(&graph).unwrap(), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_compute_order_fails_on_cycle() {
    let courses = CatalogBuilder::new()
        .with_course(CourseBuilder::new("A").after("B").build())
        .with_course(CourseBuilder::new("B").after("A").build())
        .with_course(CourseBuilder::new("C").build())
        .courses();
    let graph = CourseGraph::new(courses).unwrap();

    assert!(matches!(
        compute_order(&graph),
        Err(PlanError::CycleDetected { .. })
    ));
}
