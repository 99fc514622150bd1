//! Virtual classroom state machine: Open -> Closed.
//!
//! Pure local simulation. Raise-hand and screen-share produce `ClassroomEvent`s for the caller to
//! publish; they never touch session state.

use crate::domain::{ChatEntry, ClassroomEvent, DomainError, Identity, Participants, SharedCourse};
use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed,
}

/// A running class bound to one course for its whole lifetime.
#[derive(Debug)]
pub struct ClassroomSession {
    course: SharedCourse,
    state: SessionState,
    audio_on: bool,
    video_on: bool,
    chat_log: Vec<ChatEntry>,
}

impl ClassroomSession {
    /// Sessions only exist started; there is no idle state.
    pub fn open(course: SharedCourse) -> Self {
        Self {
            course,
            state: SessionState::Open,
            audio_on: false,
            video_on: false,
            chat_log: Vec::new(),
        }
    }

    pub fn course(&self) -> &SharedCourse {
        &self.course
    }

    pub fn title(&self) -> String {
        format!("Virtual Class: {}", self.course.name())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn audio_on(&self) -> bool {
        self.audio_on
    }

    pub fn video_on(&self) -> bool {
        self.video_on
    }

    pub fn chat_log(&self) -> &[ChatEntry] {
        &self.chat_log
    }

    /// Returns the new audio state.
    pub fn toggle_audio(&mut self) -> Result<bool, DomainError> {
        self.ensure_open()?;
        self.audio_on = !self.audio_on;
        Ok(self.audio_on)
    }

    /// Returns the new video state.
    pub fn toggle_video(&mut self) -> Result<bool, DomainError> {
        self.ensure_open()?;
        self.video_on = !self.video_on;
        Ok(self.video_on)
    }

    pub fn post_chat_message(
        &mut self,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<ChatEntry, DomainError> {
        self.ensure_open()?;
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        let entry = ChatEntry {
            sender: sender.into(),
            text,
            posted_at: Utc::now(),
        };
        self.chat_log.push(entry.clone());
        Ok(entry)
    }

    pub fn raise_hand(&self, identity: &Identity) -> Result<ClassroomEvent, DomainError> {
        self.ensure_open()?;
        Ok(ClassroomEvent::HandRaised {
            course_code: self.course.code().to_string(),
            identity_id: identity.id().to_string(),
            name: identity.name().to_string(),
            at: Utc::now(),
        })
    }

    pub fn share_screen(&self, identity: &Identity) -> Result<ClassroomEvent, DomainError> {
        self.ensure_open()?;
        Ok(ClassroomEvent::ScreenShareStarted {
            course_code: self.course.code().to_string(),
            identity_id: identity.id().to_string(),
            name: identity.name().to_string(),
            at: Utc::now(),
        })
    }

    /// Idempotent. Returns true only on the Open -> Closed transition.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = SessionState::Closed;
        was_open
    }

    /// Live view of the course roster; never cached.
    pub fn participants(&self) -> Participants {
        self.course.participants()
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::Closed => Err(DomainError::SessionClosed {
                course_code: self.course.code().to_string(),
            }),
        }
    }
}

/// Button label for a media toggle, e.g. `Audio: ON`.
pub fn toggle_label(control: &str, on: bool) -> String {
    format!("{control}: {}", if on { "ON" } else { "OFF" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Course;
    use std::sync::Arc;

    fn intro() -> SharedCourse {
        SharedCourse::new(Course::new("CS101", "Intro"))
    }

    #[test]
    fn test_starts_open_with_media_off() {
        let session = ClassroomSession::open(intro());
        assert!(session.is_open());
        assert!(!session.audio_on());
        assert!(!session.video_on());
        assert!(session.chat_log().is_empty());
        assert_eq!(session.title(), "Virtual Class: Intro");
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut session = ClassroomSession::open(intro());
        assert!(session.toggle_audio().unwrap());
        assert!(!session.video_on());
        assert!(session.toggle_video().unwrap());
        assert!(!session.toggle_audio().unwrap());
        assert!(session.video_on());
    }

    #[test]
    fn test_closed_session_rejects_operations() {
        let mut session = ClassroomSession::open(intro());
        assert!(session.close());

        let closed = DomainError::SessionClosed {
            course_code: "CS101".into(),
        };
        assert_eq!(session.toggle_audio().unwrap_err(), closed);
        assert_eq!(session.toggle_video().unwrap_err(), closed);
        assert_eq!(
            session.post_chat_message("Alice", "hi").unwrap_err(),
            closed
        );
        let amy = Identity::student("s1", "Amy");
        assert_eq!(session.raise_hand(&amy).unwrap_err(), closed);
        assert_eq!(session.share_screen(&amy).unwrap_err(), closed);
        assert!(!session.audio_on());
        assert!(session.chat_log().is_empty());
    }

    #[test]
    fn test_close_twice_is_noop() {
        let mut session = ClassroomSession::open(intro());
        assert!(session.close());
        assert!(!session.close());
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_empty_or_blank_message_rejected() {
        let mut session = ClassroomSession::open(intro());
        assert_eq!(
            session.post_chat_message("Alice", "").unwrap_err(),
            DomainError::EmptyMessage
        );
        assert_eq!(
            session.post_chat_message("Alice", " \t\n").unwrap_err(),
            DomainError::EmptyMessage
        );
        assert!(session.chat_log().is_empty());
    }

    #[test]
    fn test_chat_appends_in_order() {
        let mut session = ClassroomSession::open(intro());
        session.post_chat_message("Bob", "hello").unwrap();
        let entry = session.post_chat_message("Alice", "hi").unwrap();
        assert_eq!((entry.sender.as_str(), entry.text.as_str()), ("Alice", "hi"));
        assert_eq!(session.chat_log().last(), Some(&entry));

        let log: Vec<_> = session
            .chat_log()
            .iter()
            .map(|e| (e.sender.as_str(), e.text.as_str()))
            .collect();
        assert_eq!(log, vec![("Bob", "hello"), ("Alice", "hi")]);
    }

    #[test]
    fn test_raise_hand_and_share_screen_leave_state_alone() {
        let mut session = ClassroomSession::open(intro());
        session.toggle_audio().unwrap();
        let amy = Identity::student("s1", "Amy");

        let hand = session.raise_hand(&amy).unwrap();
        let share = session.share_screen(&amy).unwrap();

        assert!(matches!(
            hand,
            ClassroomEvent::HandRaised { ref identity_id, .. } if identity_id == "s1"
        ));
        assert!(matches!(share, ClassroomEvent::ScreenShareStarted { .. }));
        assert_eq!(share.course_code(), "CS101");
        assert!(session.audio_on());
        assert!(!session.video_on());
        assert!(session.chat_log().is_empty());
    }

    #[test]
    fn test_participants_follow_live_course() {
        let course = intro();
        let session = ClassroomSession::open(course.clone());
        assert!(session.participants().instructor.is_none());

        course
            .set_instructor(Arc::new(Identity::instructor("i1", "Dr. X")))
            .unwrap();
        course
            .add_student(Arc::new(Identity::student("s1", "Amy")))
            .unwrap();

        let participants = session.participants();
        assert_eq!(participants.instructor_name(), Some("Dr. X"));
        assert_eq!(participants.student_names(), vec!["Amy"]);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label("Audio", false), "Audio: OFF");
        assert_eq!(toggle_label("Video", true), "Video: ON");
    }
}
