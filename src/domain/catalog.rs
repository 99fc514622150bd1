//! Registry of courses, keyed by code.

use crate::domain::{Course, DomainError, SharedCourse};
use indexmap::IndexMap;
use indexmap::map::Entry;

#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: IndexMap<String, SharedCourse>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course. A second course with the same code is rejected with `DuplicateCode`.
    pub fn add(&mut self, course: Course) -> Result<SharedCourse, DomainError> {
        match self.courses.entry(course.code().to_string()) {
            Entry::Occupied(e) => Err(DomainError::DuplicateCode {
                code: e.key().clone(),
            }),
            Entry::Vacant(e) => Ok(e.insert(SharedCourse::new(course)).clone()),
        }
    }

    pub fn find(&self, code: &str) -> Option<SharedCourse> {
        self.courses.get(code).cloned()
    }

    /// All courses in registration order.
    pub fn all(&self) -> impl Iterator<Item = &SharedCourse> + '_ {
        self.courses.values()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_code_rejected() {
        let mut catalog = CourseCatalog::new();
        catalog.add(Course::new("CS101", "Intro")).unwrap();

        let err = catalog.add(Course::new("CS101", "Shadow")).unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateCode {
                code: "CS101".into()
            }
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("CS101").unwrap().name(), "Intro");
    }

    #[test]
    fn test_all_in_insertion_order() {
        let mut catalog = CourseCatalog::new();
        catalog.add(Course::new("MA200", "Calculus")).unwrap();
        catalog.add(Course::new("CS101", "Intro")).unwrap();
        let codes: Vec<_> = catalog.all().map(|c| c.code().to_string()).collect();
        assert_eq!(codes, vec!["MA200", "CS101"]);
    }

    #[test]
    fn test_find_returns_live_handle() {
        let mut catalog = CourseCatalog::new();
        let added = catalog.add(Course::new("CS101", "Intro")).unwrap();
        let found = catalog.find("CS101").unwrap();
        assert!(found.same_course(&added));
        assert!(catalog.find("CS999").is_none());
    }
}
