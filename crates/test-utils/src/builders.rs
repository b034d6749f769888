#![allow(dead_code)]

use curriplan::engine::Engine;
use curriplan::graph::Course;
use curriplan::types::CourseStatus;

/// Builder for a course list / engine to simplify test setup.
pub struct CatalogBuilder {
    courses: Vec<Course>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Linear chain `ids[0] -> ids[1] -> ...`, each the prerequisite of the
    /// next, all with the same credit weight.
    pub fn chain(mut self, ids: &[&str], credits: u32) -> Self {
        for (i, id) in ids.iter().enumerate() {
            let mut course = CourseBuilder::new(id).credits(credits).term(i as u32 + 1);
            if i > 0 {
                course = course.after(ids[i - 1]);
            }
            self.courses.push(course.build());
        }
        self
    }

    pub fn courses(self) -> Vec<Course> {
        self.courses
    }

    pub fn build(self) -> Engine {
        Engine::build(self.courses).expect("Failed to build engine from builder")
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Course`. Defaults: 4 credits, term 1, not taken.
pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            course: Course {
                id: id.to_string(),
                name: id.to_string(),
                credits: 4,
                origin_term: 1,
                prerequisites: vec![],
                status: CourseStatus::NotTaken,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.course.name = name.to_string();
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.course.credits = credits;
        self
    }

    pub fn term(mut self, term: u32) -> Self {
        self.course.origin_term = term;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.course.prerequisites.push(dep.to_string());
        self
    }

    pub fn status(mut self, status: CourseStatus) -> Self {
        self.course.status = status;
        self
    }

    pub fn approved(self) -> Self {
        self.status(CourseStatus::Approved)
    }

    pub fn build(self) -> Course {
        self.course
    }
}
