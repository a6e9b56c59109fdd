//! In-memory resume workflow: the current record, score history, and the
//! bookkeeping of in-flight remote operations.
//!
//! Every remote call is started through [`InFlight::begin`], which hands out
//! a [`Ticket`].  At most one ticket per [`Operation`] exists at a time, so a
//! second trigger of the same operation is refused instead of racing the
//! first.  Tickets also remember the *document epoch* they were issued under;
//! replacing the resume text (new upload, history restore) bumps the epoch so
//! late score / enhance responses for the old text are dropped.

use std::collections::HashMap;
use std::fmt;

use crate::constants::SUPPORTED_UPLOAD_EXTENSIONS;
use crate::errors::GuardError;
use crate::models::{AtsScore, ExportFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SignIn,
    SignUp,
    Upload,
    Score,
    Enhance,
    Export(ExportFormat),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::SignIn => write!(f, "sign-in"),
            Operation::SignUp => write!(f, "sign-up"),
            Operation::Upload => write!(f, "upload"),
            Operation::Score => write!(f, "ATS scoring"),
            Operation::Enhance => write!(f, "enhancement"),
            Operation::Export(format) => write!(f, "{} export", format.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub op: Operation,
    pub id: u64,
    pub document: u64,
}

/// Outcome of handing a response's ticket back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Ticket was current; apply the response.
    Current,
    /// Ticket was cancelled or superseded; discard the response.
    Stale,
}

#[derive(Debug, Default)]
pub struct InFlight {
    tickets: HashMap<Operation, Ticket>,
    next_id: u64,
}

impl InFlight {
    pub fn begin(&mut self, op: Operation, document: u64) -> Result<Ticket, GuardError> {
        if self.tickets.contains_key(&op) {
            return Err(GuardError::AlreadyRunning(op));
        }
        self.next_id += 1;
        let ticket = Ticket { op, id: self.next_id, document };
        self.tickets.insert(op, ticket);
        Ok(ticket)
    }

    /// Release the slot held by `ticket`.  A ticket that no longer owns its
    /// slot (cancelled) is reported stale and leaves the slot untouched.
    pub fn finish(&mut self, ticket: &Ticket) -> Completion {
        match self.tickets.get(&ticket.op) {
            Some(current) if current.id == ticket.id => {
                self.tickets.remove(&ticket.op);
                Completion::Current
            }
            _ => Completion::Stale,
        }
    }

    pub fn is_running(&self, op: Operation) -> bool {
        self.tickets.contains_key(&op)
    }

    pub fn is_busy(&self) -> bool {
        !self.tickets.is_empty()
    }

    pub fn cancel_all(&mut self) {
        self.tickets.clear();
    }
}

/// File picked in the upload control.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub file: Option<web_sys::File>,
}

impl SelectedFile {
    pub fn new(file: web_sys::File) -> Self {
        Self { name: file.name(), file: Some(file) }
    }

    /// A selection known only by name (no browser handle behind it).
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), file: None }
    }

    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    pub fn is_supported(&self) -> bool {
        self.extension()
            .map(|ext| SUPPORTED_UPLOAD_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeRecord {
    pub raw_text: String,
    pub enhanced_text: Option<String>,
    pub ats_score: Option<AtsScore>,
    pub uploaded_file: Option<String>,
}

impl ResumeRecord {
    pub fn has_text(&self) -> bool {
        !self.raw_text.is_empty()
    }

    /// Text shown and exported: the rewrite when present, else the upload.
    pub fn current_text(&self) -> &str {
        match self.enhanced_text.as_deref() {
            Some(enhanced) if !enhanced.is_empty() => enhanced,
            _ => &self.raw_text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Milliseconds since the epoch at which the score arrived.
    pub id: i64,
    pub date: String,
    pub score: AtsScore,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Empty,
    Uploaded,
    Scored,
    Enhanced,
}

#[derive(Debug, Default)]
pub struct Workflow {
    pub record: ResumeRecord,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
    pub selected_file: Option<SelectedFile>,
    pub in_flight: InFlight,
    document_epoch: u64,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        if self.record.enhanced_text.is_some() {
            Stage::Enhanced
        } else if self.record.ats_score.is_some() {
            Stage::Scored
        } else if self.record.uploaded_file.is_some() || self.record.has_text() {
            Stage::Uploaded
        } else {
            Stage::Empty
        }
    }

    pub fn document_epoch(&self) -> u64 {
        self.document_epoch
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Score / enhance / export all need extracted text.
    pub fn can_process(&self) -> bool {
        self.record.has_text()
    }

    pub fn begin_upload(&mut self) -> Result<(Ticket, SelectedFile), GuardError> {
        let selected = self.selected_file.clone().ok_or(GuardError::NoFileSelected)?;
        if !selected.is_supported() {
            return Err(GuardError::UnsupportedFile(selected.name));
        }
        let ticket = self.in_flight.begin(Operation::Upload, self.document_epoch)?;
        Ok((ticket, selected))
    }

    /// Start an operation that works on the extracted text.  Returns the
    /// ticket together with the text the request must carry.
    pub fn begin_text_operation(&mut self, op: Operation) -> Result<(Ticket, String), GuardError> {
        if !self.can_process() {
            return Err(GuardError::NoResumeText);
        }
        let text = match op {
            Operation::Export(_) => self.record.current_text().to_string(),
            _ => self.record.raw_text.clone(),
        };
        let ticket = self.in_flight.begin(op, self.document_epoch)?;
        Ok((ticket, text))
    }

    /// Release a ticket and report whether its response still applies to the
    /// current document.
    pub fn complete(&mut self, ticket: &Ticket) -> Completion {
        match self.in_flight.finish(ticket) {
            Completion::Current if ticket.document == self.document_epoch => Completion::Current,
            _ => Completion::Stale,
        }
    }

    /// A new upload replaces the document and invalidates score / rewrite.
    pub fn apply_upload(&mut self, file_name: String, extracted_text: String) {
        self.record = ResumeRecord {
            raw_text: extracted_text,
            enhanced_text: None,
            ats_score: None,
            uploaded_file: Some(file_name),
        };
        self.document_epoch += 1;
    }

    pub fn apply_score(&mut self, score: AtsScore, recorded_at_ms: i64, date: String) {
        self.record.ats_score = Some(score);
        self.history.insert(
            0,
            HistoryEntry { id: recorded_at_ms, date, score, text: self.record.raw_text.clone() },
        );
    }

    pub fn apply_enhancement(&mut self, enhanced: String) {
        self.record.enhanced_text = Some(enhanced);
    }

    /// Restore a history snapshot.  Returns false when `id` is unknown.
    pub fn restore(&mut self, id: i64) -> bool {
        let Some(entry) = self.history.iter().find(|h| h.id == id).cloned() else {
            return false;
        };
        self.record.raw_text = entry.text;
        self.record.ats_score = Some(entry.score);
        self.record.enhanced_text = None;
        self.document_epoch += 1;
        true
    }

    /// Drop every in-flight ticket and forget the document.
    pub fn reset(&mut self) {
        self.in_flight.cancel_all();
        self.record = ResumeRecord::default();
        self.history.clear();
        self.selected_file = None;
        self.document_epoch += 1;
    }
}
