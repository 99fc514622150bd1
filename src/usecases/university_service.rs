//! University commands: register people and courses, staff and enroll, start classes.
//!
//! Owns the roster and the catalog; the presentation layer gets this at startup and never
//! touches the registries directly.

use crate::domain::{Course, CourseCatalog, DomainError, Identity, Role, Roster, SharedCourse};
use crate::ports::ClassroomEventPort;
use crate::usecases::classroom_service::LiveClassroom;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

pub struct UniversityService {
    roster: RwLock<Roster>,
    catalog: RwLock<CourseCatalog>,
    events: Arc<dyn ClassroomEventPort>,
}

impl UniversityService {
    pub fn new(events: Arc<dyn ClassroomEventPort>) -> Self {
        Self {
            roster: RwLock::new(Roster::new()),
            catalog: RwLock::new(CourseCatalog::new()),
            events,
        }
    }

    pub fn add_student(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Arc<Identity>, DomainError> {
        self.add_identity(Identity::new(id, name, Role::Student))
    }

    pub fn add_instructor(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Arc<Identity>, DomainError> {
        self.add_identity(Identity::new(id, name, Role::Instructor))
    }

    fn add_identity(&self, identity: Identity) -> Result<Arc<Identity>, DomainError> {
        let added = self.roster.write().add(identity)?;
        info!(id = added.id(), role = %added.role(), "{} added: {}", added.role(), added.name());
        Ok(added)
    }

    pub fn add_course(
        &self,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<SharedCourse, DomainError> {
        let course = self.catalog.write().add(Course::new(code, name))?;
        info!(code = course.code(), "course added: {}", course.name());
        Ok(course)
    }

    /// Staff a course. Replaces any current instructor.
    pub fn assign_instructor(
        &self,
        instructor_id: &str,
        course_code: &str,
    ) -> Result<(Arc<Identity>, SharedCourse), DomainError> {
        let instructor = self.identity(instructor_id)?;
        let course = self.course(course_code)?;
        if let Some(previous) = course.set_instructor(Arc::clone(&instructor))? {
            debug!(
                code = course.code(),
                previous = previous.id(),
                "instructor replaced"
            );
        }
        info!(
            code = course.code(),
            instructor = instructor.id(),
            "assigned {} to {}",
            instructor.name(),
            course.name()
        );
        Ok((instructor, course))
    }

    /// Enroll a student. Returns false when the student was already enrolled.
    pub fn enroll_student(&self, student_id: &str, course_code: &str) -> Result<bool, DomainError> {
        let student = self.identity(student_id)?;
        let course = self.course(course_code)?;
        let added = course.add_student(Arc::clone(&student))?;
        if added {
            info!(
                code = course.code(),
                student = student.id(),
                "enrolled {} in {}",
                student.name(),
                course.name()
            );
        } else {
            debug!(code = course.code(), student = student.id(), "already enrolled");
        }
        Ok(added)
    }

    pub fn start_class(&self, course_code: &str) -> Result<LiveClassroom, DomainError> {
        let course = self.course(course_code)?;
        info!(code = course.code(), "started virtual class for {}", course.name());
        Ok(LiveClassroom::start(course, Arc::clone(&self.events)))
    }

    pub fn find_identity(&self, id: &str) -> Option<Arc<Identity>> {
        self.roster.read().find(id)
    }

    pub fn find_course(&self, code: &str) -> Option<SharedCourse> {
        self.catalog.read().find(code)
    }

    /// Identities with `role`, in registration order. Owned list; no lock is held afterwards.
    pub fn identities(&self, role: Role) -> Vec<Arc<Identity>> {
        self.roster.read().by_role(role).cloned().collect()
    }

    pub fn courses(&self) -> Vec<SharedCourse> {
        self.catalog.read().all().cloned().collect()
    }

    fn identity(&self, id: &str) -> Result<Arc<Identity>, DomainError> {
        self.find_identity(id)
            .ok_or_else(|| DomainError::UnknownIdentity(id.to_string()))
    }

    fn course(&self, code: &str) -> Result<SharedCourse, DomainError> {
        self.find_course(code)
            .ok_or_else(|| DomainError::UnknownCourse(code.to_string()))
    }
}
