// frontend/src/messages.rs
//
// Everything that can happen in the UI, and the side effects the reducers
// ask for in return.
//
use crate::errors::ApiError;
use crate::models::ExportFormat;
use crate::router::Route;
use crate::toast::ToastKind;
use crate::workflow::{SelectedFile, Ticket};

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(Route),                     // User-initiated navigation (push)
    LocationChanged(String),             // Browser back/forward or initial load (raw path)

    // Auth forms
    LoginSubmitted { email: String, password: String },
    LoginSucceeded { ticket: Ticket, token: String },
    LoginFailed { ticket: Ticket, error: ApiError },
    SignupSubmitted { email: String, password: String, confirm: String },
    SignupSucceeded { ticket: Ticket },
    SignupFailed { ticket: Ticket, error: ApiError },
    Logout,

    // Workflow
    FileSelected(Option<SelectedFile>),
    UploadRequested,
    UploadSucceeded { ticket: Ticket, file_name: String, extracted_text: String },
    UploadFailed { ticket: Ticket, error: ApiError },

    ScoreRequested,
    ScoreSucceeded { ticket: Ticket, score: f64, recorded_at_ms: i64 },
    ScoreFailed { ticket: Ticket, error: ApiError },

    EnhanceRequested,
    EnhanceSucceeded { ticket: Ticket, enhanced_text: String },
    EnhanceFailed { ticket: Ticket, error: ApiError },

    ExportRequested(ExportFormat),
    ExportSucceeded { ticket: Ticket, generated_path: Option<String> },
    ExportFailed { ticket: Ticket, error: ApiError },

    HistoryEntrySelected(i64),

    // Display
    ToggleTheme,
}

/// Side effects to run after the state update.  Keeps reducers free of
/// network and DOM access.
#[derive(Debug, Clone)]
pub enum Command {
    /// Chain another message to be processed
    SendMessage(Box<Message>),

    /// Reflect the active route in the address bar
    SyncLocation { route: Route, replace: bool },

    /// Show a transient notification
    Notify { kind: ToastKind, message: String },

    Login { ticket: Ticket, email: String, password: String },
    Signup { ticket: Ticket, email: String, password: String },
    UploadResume { ticket: Ticket, file: SelectedFile },
    ScoreResume { ticket: Ticket, resume_text: String },
    EnhanceResume { ticket: Ticket, resume_text: String },
    ExportResume { ticket: Ticket, format: ExportFormat, resume_text: String },
}

impl Command {
    /// Helper to create a SendMessage command
    pub fn send(msg: Message) -> Self {
        Command::SendMessage(Box::new(msg))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Command::Notify { kind: ToastKind::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Command::Notify { kind: ToastKind::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Command::Notify { kind: ToastKind::Info, message: message.into() }
    }
}
