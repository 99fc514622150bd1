//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Presentation only: every rule lives in the domain; this file gathers input, calls
//! `UniversityService` / `LiveClassroom`, and prints outcomes and errors.

use crate::domain::{DomainError, Identity, Participants, Role, SharedCourse, toggle_label};
use crate::ports::InputPort;
use crate::usecases::{LiveClassroom, UniversityService};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::validator::ValueRequiredValidator;
use inquire::{Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Chat lines shown above the classroom menu.
const CHAT_TAIL: usize = 8;

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("»").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainAction {
    AddStudent,
    AddCourse,
    AddInstructor,
    AssignInstructor,
    EnrollStudent,
    StartClass,
    Exit,
}

impl MainAction {
    const ALL: [MainAction; 7] = [
        MainAction::AddStudent,
        MainAction::AddCourse,
        MainAction::AddInstructor,
        MainAction::AssignInstructor,
        MainAction::EnrollStudent,
        MainAction::StartClass,
        MainAction::Exit,
    ];
}

impl fmt::Display for MainAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MainAction::AddStudent => "Add Student",
            MainAction::AddCourse => "Add Course",
            MainAction::AddInstructor => "Add Instructor",
            MainAction::AssignInstructor => "Assign Instructor to Course",
            MainAction::EnrollStudent => "Enroll Student in Course",
            MainAction::StartClass => "Start Virtual Class",
            MainAction::Exit => "Exit",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassAction {
    Chat,
    Audio(bool),
    Video(bool),
    ShareScreen,
    RaiseHand,
    Leave,
}

impl fmt::Display for ClassAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassAction::Chat => f.write_str("Send Chat Message"),
            ClassAction::Audio(on) => f.write_str(&toggle_label("Audio", *on)),
            ClassAction::Video(on) => f.write_str(&toggle_label("Video", *on)),
            ClassAction::ShareScreen => f.write_str("Share Screen"),
            ClassAction::RaiseHand => f.write_str("Raise Hand"),
            ClassAction::Leave => f.write_str("Leave Class"),
        }
    }
}

/// What happened to a prompt, beyond a plain answer.
#[derive(Debug, PartialEq, Eq)]
enum Flow<T> {
    Value(T),
    /// Esc: back to the enclosing menu.
    Back,
    /// Ctrl-C: leave the program.
    Quit,
}

fn flow<T>(res: Result<T, InquireError>) -> Result<Flow<T>, DomainError> {
    match res {
        Ok(v) => Ok(Flow::Value(v)),
        Err(InquireError::OperationCanceled) => Ok(Flow::Back),
        Err(InquireError::OperationInterrupted) => Ok(Flow::Quit),
        Err(e) => Err(DomainError::Prompt(e.to_string())),
    }
}

/// Unwraps a prompt step inside a menu command: Esc returns to the menu, Ctrl-C quits.
macro_rules! answer {
    ($step:expr) => {
        match $step? {
            Flow::Value(v) => v,
            Flow::Back => return Ok(true),
            Flow::Quit => return Ok(false),
        }
    };
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<UniversityService>,
    chat_sender: String,
}

impl TuiInputPort {
    pub fn new(service: Arc<UniversityService>, chat_sender: impl Into<String>) -> Self {
        Self {
            service,
            chat_sender: chat_sender.into(),
        }
    }

    /// One main-menu command. `Ok(false)` means the operator asked to quit.
    fn dispatch(&self, action: MainAction) -> Result<bool, DomainError> {
        match action {
            MainAction::AddStudent => self.add_identity(Role::Student),
            MainAction::AddInstructor => self.add_identity(Role::Instructor),
            MainAction::AddCourse => self.add_course(),
            MainAction::AssignInstructor => self.assign_instructor(),
            MainAction::EnrollStudent => self.enroll_student(),
            MainAction::StartClass => self.start_class(),
            MainAction::Exit => Ok(false),
        }
    }

    fn add_identity(&self, role: Role) -> Result<bool, DomainError> {
        let id = answer!(flow(required_text(&format!("Enter {role} ID:"))));
        let name = answer!(flow(required_text(&format!("Enter {role} name:"))));
        let added = match role {
            Role::Student => self.service.add_student(id, name)?,
            Role::Instructor => self.service.add_instructor(id, name)?,
        };
        println!("{}", identity_added(&added));
        Ok(true)
    }

    fn add_course(&self) -> Result<bool, DomainError> {
        let code = answer!(flow(required_text("Enter course code:")));
        let name = answer!(flow(required_text("Enter course name:")));
        let course = self.service.add_course(code, name)?;
        println!("{}", course_added(&course));
        Ok(true)
    }

    fn assign_instructor(&self) -> Result<bool, DomainError> {
        let instructor = answer!(self.pick_identity(Role::Instructor, "Select an instructor:"));
        let course = answer!(self.pick_course("Select a course:"));
        let (instructor, course) = self
            .service
            .assign_instructor(instructor.id(), course.code())?;
        println!("{}", instructor_assigned(&instructor, &course));
        Ok(true)
    }

    fn enroll_student(&self) -> Result<bool, DomainError> {
        let student = answer!(self.pick_identity(Role::Student, "Select a student:"));
        let course = answer!(self.pick_course("Select a course:"));
        let newly = self.service.enroll_student(student.id(), course.code())?;
        println!("{}", student_enrolled(&student, &course, newly));
        Ok(true)
    }

    fn start_class(&self) -> Result<bool, DomainError> {
        let course = answer!(self.pick_course("Select a course to start:"));
        let mut class = self.service.start_class(course.code())?;
        println!("{}", class_started(&course));
        let keep_running = self.run_class(&mut class);
        class.close();
        keep_running
    }

    /// Classroom loop. Domain errors are shown and the class keeps running.
    fn run_class(&self, class: &mut LiveClassroom) -> Result<bool, DomainError> {
        loop {
            println!();
            println!("== {} ==", class.session().title());
            for line in participant_lines(&class.participants()) {
                println!("{line}");
            }
            let log = class.session().chat_log();
            for entry in &log[log.len().saturating_sub(CHAT_TAIL)..] {
                println!("  {}: {}", entry.sender, entry.text);
            }

            let actions = vec![
                ClassAction::Chat,
                ClassAction::Audio(class.session().audio_on()),
                ClassAction::Video(class.session().video_on()),
                ClassAction::ShareScreen,
                ClassAction::RaiseHand,
                ClassAction::Leave,
            ];
            let action = match flow(Select::new("Classroom", actions).prompt())? {
                Flow::Value(a) => a,
                Flow::Back => ClassAction::Leave,
                Flow::Quit => return Ok(false),
            };

            let result = match action {
                ClassAction::Chat => match flow(Text::new("Message:").prompt())? {
                    Flow::Value(text) => class
                        .post_chat_message(self.chat_sender.as_str(), text)
                        .map(|_| ()),
                    Flow::Back => Ok(()),
                    Flow::Quit => return Ok(false),
                },
                ClassAction::Audio(_) => class.toggle_audio().map(|_| ()),
                ClassAction::Video(_) => class.toggle_video().map(|_| ()),
                ClassAction::ShareScreen | ClassAction::RaiseHand => {
                    let who = match pick_participant(&class.participants())? {
                        Flow::Value(who) => who,
                        Flow::Back => continue,
                        Flow::Quit => return Ok(false),
                    };
                    let event = if action == ClassAction::ShareScreen {
                        class.share_screen(&who)
                    } else {
                        class.raise_hand(&who)
                    };
                    event.map(|e| println!("{}", e.notice()))
                }
                ClassAction::Leave => return Ok(true),
            };
            if let Err(e) = result {
                println!("Error: {e}");
            }
        }
    }

    fn pick_identity(
        &self,
        role: Role,
        prompt: &str,
    ) -> Result<Flow<Arc<Identity>>, DomainError> {
        let options = self.service.identities(role);
        if options.is_empty() {
            println!("No {role}s registered yet.");
            return Ok(Flow::Back);
        }
        flow(Select::new(prompt, options).prompt())
    }

    fn pick_course(&self, prompt: &str) -> Result<Flow<SharedCourse>, DomainError> {
        let options = self.service.courses();
        if options.is_empty() {
            println!("No courses registered yet.");
            return Ok(Flow::Back);
        }
        flow(Select::new(prompt, options).prompt())
    }
}

fn required_text(prompt: &str) -> Result<String, InquireError> {
    Text::new(prompt)
        .with_validator(ValueRequiredValidator::default())
        .prompt()
}

fn pick_participant(participants: &Participants) -> Result<Flow<Arc<Identity>>, DomainError> {
    let options: Vec<Arc<Identity>> = participants
        .instructor
        .iter()
        .chain(participants.students.iter())
        .cloned()
        .collect();
    if options.is_empty() {
        println!("Nobody is in this class yet.");
        return Ok(Flow::Back);
    }
    flow(Select::new("Who?", options).prompt())
}

fn identity_added(identity: &Identity) -> String {
    format!("{} added: {}", identity.role(), identity.name())
}

fn course_added(course: &SharedCourse) -> String {
    format!("Course added: {}", course.name())
}

fn instructor_assigned(instructor: &Identity, course: &SharedCourse) -> String {
    format!("Assigned {} to {}", instructor.name(), course.name())
}

fn student_enrolled(student: &Identity, course: &SharedCourse, newly: bool) -> String {
    if newly {
        format!("Enrolled {} in {}", student.name(), course.name())
    } else {
        format!("{} is already enrolled in {}", student.name(), course.name())
    }
}

fn class_started(course: &SharedCourse) -> String {
    format!("Started virtual class for {}", course.name())
}

/// Participants panel: instructor line, then one line per student.
fn participant_lines(participants: &Participants) -> Vec<String> {
    let mut lines = Vec::with_capacity(participants.students.len() + 2);
    lines.push(format!(
        "Instructor: {}",
        participants.instructor_name().unwrap_or("(none)")
    ));
    lines.push("Students:".to_string());
    lines.extend(participants.students.iter().map(|s| format!("- {}", s.name())));
    lines
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let menu = Select::new("Virtual University", MainAction::ALL.to_vec());
            let action = match flow(menu.prompt())? {
                Flow::Value(a) => a,
                Flow::Back => continue,
                Flow::Quit => return Ok(()),
            };
            match self.dispatch(action) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e @ DomainError::Prompt(_)) => return Err(e),
                Err(e) => {
                    warn!(action = %action, error = %e, "command rejected");
                    println!("Error: {e}");
                }
            }
        }
    }
}
