//! Course aggregate. Enforces role constraints at mutation time.
//!
//! `SharedCourse` is the handle the catalog and running classrooms hold: one lock per course,
//! so a participant snapshot never sees a half-applied mutation.

use crate::domain::{DomainError, Identity, Role};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Course {
    code: String,
    name: String,
    instructor: Option<Arc<Identity>>,
    students: Vec<Arc<Identity>>,
}

impl Course {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            instructor: None,
            students: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assign the instructor. Last write wins. Returns the instructor it replaced, if any.
    pub fn set_instructor(
        &mut self,
        identity: Arc<Identity>,
    ) -> Result<Option<Arc<Identity>>, DomainError> {
        require_role(&identity, Role::Instructor)?;
        Ok(self.instructor.replace(identity))
    }

    /// Enroll a student. Re-enrolling the same id is a no-op; returns whether it was newly added.
    pub fn add_student(&mut self, identity: Arc<Identity>) -> Result<bool, DomainError> {
        require_role(&identity, Role::Student)?;
        if self.students.iter().any(|s| s.id() == identity.id()) {
            return Ok(false);
        }
        self.students.push(identity);
        Ok(true)
    }

    pub fn instructor(&self) -> Option<&Arc<Identity>> {
        self.instructor.as_ref()
    }

    pub fn students(&self) -> &[Arc<Identity>] {
        &self.students
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

fn require_role(identity: &Identity, expected: Role) -> Result<(), DomainError> {
    if identity.role() == expected {
        Ok(())
    } else {
        Err(DomainError::InvalidRole {
            id: identity.id().to_string(),
            expected,
            actual: identity.role(),
        })
    }
}

/// Who is in a class right now. Taken under a single read of the course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participants {
    pub instructor: Option<Arc<Identity>>,
    pub students: Vec<Arc<Identity>>,
}

impl Participants {
    pub fn instructor_name(&self) -> Option<&str> {
        self.instructor.as_deref().map(Identity::name)
    }

    pub fn student_names(&self) -> Vec<&str> {
        self.students.iter().map(|s| s.name()).collect()
    }
}

/// Lock-guarded, cheaply clonable course handle.
#[derive(Debug, Clone)]
pub struct SharedCourse {
    code: Arc<str>,
    inner: Arc<RwLock<Course>>,
}

impl SharedCourse {
    pub fn new(course: Course) -> Self {
        Self {
            code: Arc::from(course.code()),
            inner: Arc::new(RwLock::new(course)),
        }
    }

    /// Course code. Immutable, so readable without taking the lock.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> String {
        self.inner.read().name().to_string()
    }

    pub fn set_instructor(
        &self,
        identity: Arc<Identity>,
    ) -> Result<Option<Arc<Identity>>, DomainError> {
        self.inner.write().set_instructor(identity)
    }

    pub fn add_student(&self, identity: Arc<Identity>) -> Result<bool, DomainError> {
        self.inner.write().add_student(identity)
    }

    pub fn instructor(&self) -> Option<Arc<Identity>> {
        self.inner.read().instructor().cloned()
    }

    pub fn students(&self) -> Vec<Arc<Identity>> {
        self.inner.read().students().to_vec()
    }

    pub fn participants(&self) -> Participants {
        let course = self.inner.read();
        Participants {
            instructor: course.instructor().cloned(),
            students: course.students().to_vec(),
        }
    }

    pub fn same_course(&self, other: &SharedCourse) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for SharedCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dr_x() -> Arc<Identity> {
        Arc::new(Identity::instructor("i1", "Dr. X"))
    }

    fn amy() -> Arc<Identity> {
        Arc::new(Identity::student("s1", "Amy"))
    }

    #[test]
    fn test_set_instructor_rejects_student() {
        let mut course = Course::new("CS101", "Intro");
        let err = course.set_instructor(amy()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidRole {
                id: "s1".into(),
                expected: Role::Instructor,
                actual: Role::Student,
            }
        );
        assert!(course.instructor().is_none());
    }

    #[test]
    fn test_set_instructor_last_write_wins() {
        let mut course = Course::new("CS101", "Intro");
        assert!(course.set_instructor(dr_x()).unwrap().is_none());

        let dr_y = Arc::new(Identity::instructor("i2", "Dr. Y"));
        let replaced = course.set_instructor(dr_y).unwrap();
        assert_eq!(replaced.unwrap().id(), "i1");
        assert_eq!(course.instructor().unwrap().name(), "Dr. Y");

        // Same instructor again is fine too.
        course.set_instructor(dr_x()).unwrap();
        course.set_instructor(dr_x()).unwrap();
        assert_eq!(course.instructor().unwrap().id(), "i1");
    }

    #[test]
    fn test_add_student_rejects_instructor() {
        let mut course = Course::new("CS101", "Intro");
        let err = course.add_student(dr_x()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidRole {
                expected: Role::Student,
                ..
            }
        ));
        assert!(course.students().is_empty());
    }

    #[test]
    fn test_add_student_twice_is_idempotent() {
        let mut course = Course::new("CS101", "Intro");
        assert!(course.add_student(amy()).unwrap());
        assert!(!course.add_student(amy()).unwrap());
        assert_eq!(course.students().len(), 1);
        assert_eq!(course.students()[0].id(), "s1");
    }

    #[test]
    fn test_students_keep_enrollment_order() {
        let mut course = Course::new("CS101", "Intro");
        course
            .add_student(Arc::new(Identity::student("s2", "Bob")))
            .unwrap();
        course.add_student(amy()).unwrap();
        let names: Vec<_> = course.students().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_course_display() {
        let course = Course::new("CS101", "Intro");
        assert_eq!(course.to_string(), "Intro (CS101)");
        assert_eq!(SharedCourse::new(course).to_string(), "Intro (CS101)");
    }

    #[test]
    fn test_shared_course_clones_see_same_state() {
        let course = SharedCourse::new(Course::new("CS101", "Intro"));
        let view = course.clone();
        course.set_instructor(dr_x()).unwrap();
        course.add_student(amy()).unwrap();

        let participants = view.participants();
        assert_eq!(participants.instructor_name(), Some("Dr. X"));
        assert_eq!(participants.student_names(), vec!["Amy"]);
        assert!(view.same_course(&course));
    }

    #[test]
    fn test_snapshot_is_consistent_under_concurrent_enrollment() {
        let course = SharedCourse::new(Course::new("CS101", "Intro"));
        course.set_instructor(dr_x()).unwrap();

        let writer = {
            let course = course.clone();
            std::thread::spawn(move || {
                for n in 0..200 {
                    let s = Arc::new(Identity::student(format!("s{n}"), format!("S{n}")));
                    course.add_student(s).unwrap();
                }
            })
        };

        let mut last_len = 0;
        for _ in 0..200 {
            let p = course.participants();
            assert_eq!(p.instructor_name(), Some("Dr. X"));
            assert!(p.students.len() >= last_len);
            last_len = p.students.len();
        }
        writer.join().unwrap();
        assert_eq!(course.students().len(), 200);
    }
}
