#![allow(dead_code)]

pub use curriplan_test_utils::builders::{CatalogBuilder, CourseBuilder};
pub use curriplan_test_utils::init_tracing;

use curriplan::engine::Engine;

/// A -> {B, C} -> D, all 4 credits.
pub fn diamond() -> Engine {
    CatalogBuilder::new()
        .with_course(CourseBuilder::new("A").term(1).build())
        .with_course(CourseBuilder::new("B").term(2).after("A").build())
        .with_course(CourseBuilder::new("C").term(2).after("A").build())
        .with_course(CourseBuilder::new("D").term(3).after("B").after("C").build())
        .build()
}

/// A -> B -> C -> D, 4 credits each.
pub fn chain4() -> Engine {
    CatalogBuilder::new().chain(&["A", "B", "C", "D"], 4).build()
}
