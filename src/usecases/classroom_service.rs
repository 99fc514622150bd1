//! A running virtual class: the session state machine plus event publishing and logging.

use crate::domain::{
    ChatEntry, ClassroomEvent, ClassroomSession, DomainError, Identity, Participants, SharedCourse,
};
use crate::ports::ClassroomEventPort;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct LiveClassroom {
    session: ClassroomSession,
    events: Arc<dyn ClassroomEventPort>,
}

impl LiveClassroom {
    pub fn start(course: SharedCourse, events: Arc<dyn ClassroomEventPort>) -> Self {
        Self {
            session: ClassroomSession::open(course),
            events,
        }
    }

    /// Read access to flags, chat log and state.
    pub fn session(&self) -> &ClassroomSession {
        &self.session
    }

    pub fn course_code(&self) -> &str {
        self.session.course().code()
    }

    pub fn toggle_audio(&mut self) -> Result<bool, DomainError> {
        let on = self.session.toggle_audio()?;
        debug!(code = self.course_code(), on, "audio toggled");
        Ok(on)
    }

    pub fn toggle_video(&mut self) -> Result<bool, DomainError> {
        let on = self.session.toggle_video()?;
        debug!(code = self.course_code(), on, "video toggled");
        Ok(on)
    }

    pub fn post_chat_message(
        &mut self,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<ChatEntry, DomainError> {
        let entry = self.session.post_chat_message(sender, text)?;
        debug!(
            code = self.session.course().code(),
            sender = %entry.sender,
            len = entry.text.len(),
            "chat message posted"
        );
        Ok(entry)
    }

    pub fn raise_hand(&self, identity: &Identity) -> Result<ClassroomEvent, DomainError> {
        let event = self.session.raise_hand(identity)?;
        self.emit(event)
    }

    pub fn share_screen(&self, identity: &Identity) -> Result<ClassroomEvent, DomainError> {
        let event = self.session.share_screen(identity)?;
        self.emit(event)
    }

    pub fn participants(&self) -> Participants {
        self.session.participants()
    }

    /// Idempotent.
    pub fn close(&mut self) {
        if self.session.close() {
            info!(
                code = self.course_code(),
                messages = self.session.chat_log().len(),
                "virtual class closed"
            );
        }
    }

    fn emit(&self, event: ClassroomEvent) -> Result<ClassroomEvent, DomainError> {
        if let Err(e) = self.events.publish(&event) {
            warn!(code = self.course_code(), error = %e, "classroom event not delivered");
            return Err(e);
        }
        Ok(event)
    }
}
