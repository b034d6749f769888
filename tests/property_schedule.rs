use std::collections::HashSet;

use curriplan::engine::Engine;
use curriplan::graph::Course;
use curriplan::types::CourseStatus;
use curriplan_test_utils::builders::{CatalogBuilder, CourseBuilder};
use proptest::prelude::*;

// Acyclic by construction: course N may only depend on courses 0..N-1.
fn catalog_strategy(max_courses: usize) -> impl Strategy<Value = Vec<Course>> {
    (1..=max_courses).prop_flat_map(|num_courses| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..3),
            num_courses,
        );
        let credits_strat = proptest::collection::vec(1u32..=6, num_courses);

        (deps_strat, credits_strat).prop_map(move |(raw_deps, credits)| {
            let mut builder = CatalogBuilder::new();
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                let name = format!("course_{}", i);
                let mut course = CourseBuilder::new(&name).credits(credits[i]);

                let mut valid_deps = HashSet::new();
                for dep_idx in potential_deps {
                    if i > 0 {
                        valid_deps.insert(dep_idx % i);
                    }
                }
                let mut valid_deps: Vec<usize> = valid_deps.into_iter().collect();
                valid_deps.sort_unstable();
                for dep_idx in valid_deps {
                    course = course.after(&format!("course_{}", dep_idx));
                }
                builder = builder.with_course(course.build());
            }
            builder.courses()
        })
    })
}

fn terms_or_infinite(engine: &Engine, cap: u32) -> Option<u32> {
    engine.optimal_schedule(cap).unwrap().term_count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_raising_credit_cap_never_adds_terms(
        courses in catalog_strategy(5),
        cap in 1u32..=12,
        extra in 0u32..=6,
    ) {
        let engine = Engine::build(courses).unwrap();
        let tight = terms_or_infinite(&engine, cap);
        let loose = terms_or_infinite(&engine, cap + extra);

        if let Some(tight) = tight {
            let loose = loose.expect("a larger cap cannot make the catalog unreachable");
            prop_assert!(loose <= tight, "cap {} -> {} terms, cap {} -> {} terms", cap, tight, cap + extra, loose);
        }
    }

    #[test]
    fn test_plan_respects_prerequisites_and_cap(
        courses in catalog_strategy(5),
        cap in 6u32..=12,
    ) {
        let engine = Engine::build(courses).unwrap();
        let result = engine.optimal_schedule(cap).unwrap();

        // Every course fits under a cap of 6 or more, so the plan always exists.
        prop_assert!(result.is_reachable());
        prop_assert_eq!(result.term_count(), Some(result.steps.len() as u32));

        let mut approved: HashSet<String> = HashSet::new();
        for step in &result.steps {
            prop_assert!(step.credits <= cap);
            for planned in &step.courses {
                let course = engine.course(&planned.id).unwrap();
                for dep in &course.prerequisites {
                    prop_assert!(approved.contains(dep), "{} planned before {}", planned.id, dep);
                }
            }
            approved.extend(step.courses.iter().map(|c| c.id.clone()));
        }
        prop_assert_eq!(approved.len(), engine.len());
    }

    #[test]
    fn test_topological_order_respects_every_edge(courses in catalog_strategy(8)) {
        let engine = Engine::build(courses).unwrap();
        let order = engine.topological_order();
        prop_assert_eq!(order.len(), engine.len());

        for course in engine.courses() {
            let pos = order.iter().position(|c| *c == course.id).unwrap();
            for dep in &course.prerequisites {
                let dep_pos = order.iter().position(|c| c == dep).unwrap();
                prop_assert!(dep_pos < pos);
            }
            prop_assert_eq!(course.status, CourseStatus::NotTaken);
        }
    }
}
