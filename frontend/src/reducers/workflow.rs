//! Workflow reducer: upload, score, enhance, export and history restore.
//!
//! Request messages go through the guard in [`crate::workflow::Workflow`];
//! response messages are applied only while their ticket is still current.

use crate::constants::{
    MSG_ENHANCE_FAILED, MSG_NO_TEXT_EXTRACTED, MSG_SCORE_FAILED, MSG_UPLOAD_FAILED,
};
use crate::errors::GuardError;
use crate::messages::{Command, Message};
use crate::models::AtsScore;
use crate::state::AppState;
use crate::utils::format_local_timestamp;
use crate::workflow::{Completion, Operation, Ticket};
use crate::{debug_log, log_info, log_warn};

/// Handles workflow messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let wf = &mut state.workflow;
    match msg {
        Message::FileSelected(file) => {
            wf.selected_file = file.clone();
            true
        }

        // ---------------------------------------------------------------
        // Upload
        // ---------------------------------------------------------------
        Message::UploadRequested => {
            match wf.begin_upload() {
                Ok((ticket, file)) => commands.push(Command::UploadResume { ticket, file }),
                Err(e) => reject(e, commands),
            }
            true
        }
        Message::UploadSucceeded { ticket, file_name, extracted_text } => {
            // Uploads replace the document, so they are never stale against
            // the epoch - only a cancelled ticket is ignored.
            if wf.in_flight.finish(ticket) == Completion::Stale {
                debug_log!("Dropping cancelled upload response");
                return true;
            }
            wf.apply_upload(file_name.clone(), extracted_text.clone());
            if extracted_text.trim().is_empty() {
                commands.push(Command::info(MSG_NO_TEXT_EXTRACTED));
            }
            true
        }
        Message::UploadFailed { ticket, error } => {
            if wf.in_flight.finish(ticket) == Completion::Current {
                log_warn!("Upload failed: {}", error);
                commands.push(Command::error(MSG_UPLOAD_FAILED));
            }
            true
        }

        // ---------------------------------------------------------------
        // Score
        // ---------------------------------------------------------------
        Message::ScoreRequested => {
            match wf.begin_text_operation(Operation::Score) {
                Ok((ticket, resume_text)) => {
                    commands.push(Command::ScoreResume { ticket, resume_text })
                }
                Err(e) => reject(e, commands),
            }
            true
        }
        Message::ScoreSucceeded { ticket, score, recorded_at_ms } => {
            if is_stale(wf.complete(ticket), ticket) {
                return true;
            }
            let score = AtsScore::from_raw(*score);
            wf.apply_score(score, *recorded_at_ms, format_local_timestamp(*recorded_at_ms));
            true
        }
        Message::ScoreFailed { ticket, error } => {
            if wf.in_flight.finish(ticket) == Completion::Current {
                log_warn!("ATS analysis failed: {}", error);
                commands.push(Command::error(MSG_SCORE_FAILED));
            }
            true
        }

        // ---------------------------------------------------------------
        // Enhance
        // ---------------------------------------------------------------
        Message::EnhanceRequested => {
            match wf.begin_text_operation(Operation::Enhance) {
                Ok((ticket, resume_text)) => {
                    commands.push(Command::EnhanceResume { ticket, resume_text })
                }
                Err(e) => reject(e, commands),
            }
            true
        }
        Message::EnhanceSucceeded { ticket, enhanced_text } => {
            if is_stale(wf.complete(ticket), ticket) {
                return true;
            }
            wf.apply_enhancement(enhanced_text.clone());
            true
        }
        Message::EnhanceFailed { ticket, error } => {
            if wf.in_flight.finish(ticket) == Completion::Current {
                log_warn!("Enhancement failed: {}", error);
                commands.push(Command::error(MSG_ENHANCE_FAILED));
            }
            true
        }

        // ---------------------------------------------------------------
        // Export
        // ---------------------------------------------------------------
        Message::ExportRequested(format) => {
            match wf.begin_text_operation(Operation::Export(*format)) {
                Ok((ticket, resume_text)) => commands.push(Command::ExportResume {
                    ticket,
                    format: *format,
                    resume_text,
                }),
                Err(e) => reject(e, commands),
            }
            true
        }
        Message::ExportSucceeded { ticket, generated_path } => {
            // Export is read-only: report it even if the document moved on,
            // but not once logout cancelled the ticket.
            if wf.in_flight.finish(ticket) == Completion::Stale {
                debug_log!("Dropping cancelled {} response", ticket.op);
                return true;
            }
            if let Operation::Export(format) = ticket.op {
                if let Some(path) = generated_path {
                    log_info!("{} written to {}", format.label(), path);
                }
                commands.push(Command::success(format.success_message()));
            }
            true
        }
        Message::ExportFailed { ticket, error } => {
            if wf.in_flight.finish(ticket) == Completion::Stale {
                debug_log!("Dropping cancelled {} failure: {}", ticket.op, error);
                return true;
            }
            if let Operation::Export(format) = ticket.op {
                log_warn!("{} export failed: {}", format.label(), error);
                commands.push(Command::error(format.failure_message()));
            }
            true
        }

        Message::HistoryEntrySelected(id) => {
            if !wf.restore(*id) {
                debug_log!("History entry {} not found", id);
            }
            true
        }
        _ => false,
    }
}

fn reject(err: GuardError, commands: &mut Vec<Command>) {
    debug_log!("Operation refused: {}", err);
    if let Some(text) = err.user_message() {
        commands.push(Command::error(text));
    }
}

fn is_stale(completion: Completion, ticket: &Ticket) -> bool {
    if completion == Completion::Stale {
        debug_log!("Dropping stale {} response (ticket {})", ticket.op, ticket.id);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::models::{ExportFormat, ScoreBand};
    use crate::reducers::test_support::{notices, signed_in_state};
    use crate::workflow::{SelectedFile, Stage};

    fn single_ticket(cmds: &[Command]) -> Ticket {
        match cmds {
            [Command::UploadResume { ticket, .. }]
            | [Command::ScoreResume { ticket, .. }]
            | [Command::EnhanceResume { ticket, .. }]
            | [Command::ExportResume { ticket, .. }] => *ticket,
            other => panic!("expected one request command, got {:?}", other),
        }
    }

    fn upload(state: &mut AppState, text: &str) {
        state.dispatch(Message::FileSelected(Some(SelectedFile::named("cv.pdf"))));
        let ticket = single_ticket(&state.dispatch(Message::UploadRequested));
        state.dispatch(Message::UploadSucceeded {
            ticket,
            file_name: "cv.pdf".into(),
            extracted_text: text.into(),
        });
    }

    fn score(state: &mut AppState, value: f64, at: i64) {
        let ticket = single_ticket(&state.dispatch(Message::ScoreRequested));
        state.dispatch(Message::ScoreSucceeded { ticket, score: value, recorded_at_ms: at });
    }

    #[test]
    fn upload_without_file_is_a_validation_error() {
        let mut state = signed_in_state();
        let cmds = state.dispatch(Message::UploadRequested);
        assert_eq!(notices(&cmds), vec!["Please select a resume file".to_string()]);
        assert!(!cmds.iter().any(|c| matches!(c, Command::UploadResume { .. })));
        assert!(!state.is_busy());
    }

    #[test]
    fn score_twice_builds_history_newest_first() {
        let mut state = signed_in_state();
        upload(&mut state, "Experienced engineer...");
        assert_eq!(state.workflow.stage(), Stage::Uploaded);

        score(&mut state, 82.0, 1_000);
        let current = state.workflow.record.ats_score.unwrap();
        assert_eq!(current.percent(), "82%");
        assert_eq!(current.band(), ScoreBand::Good);
        assert_eq!(state.workflow.history.len(), 1);

        score(&mut state, 40.0, 2_000);
        let current = state.workflow.record.ats_score.unwrap();
        assert_eq!(current.percent(), "40%");
        assert_eq!(current.band(), ScoreBand::Poor);

        let history = &state.workflow.history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, 2_000);
        assert_eq!(history[0].score.value(), 40);
        assert_eq!(history[1].score.value(), 82);
        assert!(history.iter().all(|h| h.text == "Experienced engineer..."));
    }

    #[test]
    fn new_upload_clears_score_and_rewrite() {
        let mut state = signed_in_state();
        upload(&mut state, "first");
        score(&mut state, 70.0, 1);
        let ticket = single_ticket(&state.dispatch(Message::EnhanceRequested));
        state.dispatch(Message::EnhanceSucceeded { ticket, enhanced_text: "better".into() });
        assert_eq!(state.workflow.stage(), Stage::Enhanced);

        upload(&mut state, "second");
        let record = &state.workflow.record;
        assert_eq!(record.raw_text, "second");
        assert_eq!(record.ats_score, None);
        assert_eq!(record.enhanced_text, None);
        // History survives a new upload.
        assert_eq!(state.workflow.history.len(), 1);
    }

    #[test]
    fn export_sends_rewritten_text() {
        let mut state = signed_in_state();
        upload(&mut state, "Original resume");
        let ticket = single_ticket(&state.dispatch(Message::EnhanceRequested));
        state.dispatch(Message::EnhanceSucceeded {
            ticket,
            enhanced_text: "Rewritten: Original resume".into(),
        });

        let cmds = state.dispatch(Message::ExportRequested(ExportFormat::Pdf));
        match cmds.as_slice() {
            [Command::ExportResume { format, resume_text, .. }] => {
                assert_eq!(*format, ExportFormat::Pdf);
                assert_eq!(resume_text, "Rewritten: Original resume");
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn export_reports_outcome() {
        let mut state = signed_in_state();
        upload(&mut state, "text");
        let ticket = single_ticket(&state.dispatch(Message::ExportRequested(ExportFormat::Docx)));
        let cmds = state.dispatch(Message::ExportFailed {
            ticket,
            error: ApiError::Network("offline".into()),
        });
        assert_eq!(notices(&cmds), vec!["DOCX export failed".to_string()]);
        assert!(!state.is_busy());

        let ticket = single_ticket(&state.dispatch(Message::ExportRequested(ExportFormat::Pdf)));
        let cmds = state.dispatch(Message::ExportSucceeded {
            ticket,
            generated_path: Some("generated/a.pdf".into()),
        });
        assert_eq!(notices(&cmds), vec!["PDF generated (check backend/generated)".to_string()]);
    }

    #[test]
    fn export_after_logout_stays_silent() {
        let mut state = signed_in_state();
        upload(&mut state, "text");
        let pdf = single_ticket(&state.dispatch(Message::ExportRequested(ExportFormat::Pdf)));
        let docx = single_ticket(&state.dispatch(Message::ExportRequested(ExportFormat::Docx)));
        state.dispatch(Message::Logout);

        let cmds = state.dispatch(Message::ExportSucceeded {
            ticket: pdf,
            generated_path: Some("generated/a.pdf".into()),
        });
        assert!(notices(&cmds).is_empty());
        let cmds = state.dispatch(Message::ExportFailed {
            ticket: docx,
            error: ApiError::Network("offline".into()),
        });
        assert!(notices(&cmds).is_empty());
        assert!(!state.is_busy());
    }

    #[test]
    fn export_survives_a_new_upload() {
        let mut state = signed_in_state();
        upload(&mut state, "first");
        let ticket = single_ticket(&state.dispatch(Message::ExportRequested(ExportFormat::Pdf)));
        upload(&mut state, "second");
        let cmds = state.dispatch(Message::ExportSucceeded { ticket, generated_path: None });
        assert_eq!(notices(&cmds), vec!["PDF generated (check backend/generated)".to_string()]);
    }

    #[test]
    fn actions_without_text_issue_no_requests() {
        let mut state = signed_in_state();
        for msg in [
            Message::ScoreRequested,
            Message::EnhanceRequested,
            Message::ExportRequested(ExportFormat::Pdf),
            Message::ExportRequested(ExportFormat::Docx),
        ] {
            assert!(state.dispatch(msg).is_empty());
        }
        assert!(!state.is_busy());
    }

    #[test]
    fn selecting_history_restores_snapshot() {
        let mut state = signed_in_state();
        upload(&mut state, "version one");
        score(&mut state, 55.0, 10);
        upload(&mut state, "version two");
        score(&mut state, 90.0, 20);
        let ticket = single_ticket(&state.dispatch(Message::EnhanceRequested));
        state.dispatch(Message::EnhanceSucceeded { ticket, enhanced_text: "v2 rewrite".into() });

        state.dispatch(Message::HistoryEntrySelected(10));
        let record = &state.workflow.record;
        assert_eq!(record.raw_text, "version one");
        assert_eq!(record.ats_score.map(|s| s.value()), Some(55));
        assert_eq!(record.enhanced_text, None);
    }

    #[test]
    fn response_for_replaced_document_is_dropped() {
        let mut state = signed_in_state();
        upload(&mut state, "old text");
        let score_ticket = single_ticket(&state.dispatch(Message::ScoreRequested));

        // A new upload lands while the score is still in flight.
        upload(&mut state, "new text");
        state.dispatch(Message::ScoreSucceeded { ticket: score_ticket, score: 99.0, recorded_at_ms: 5 });

        assert_eq!(state.workflow.record.ats_score, None);
        assert!(state.workflow.history.is_empty());
        assert!(!state.is_busy());
    }

    #[test]
    fn reentrant_trigger_is_rejected() {
        let mut state = signed_in_state();
        upload(&mut state, "text");
        let first = state.dispatch(Message::EnhanceRequested);
        assert_eq!(first.len(), 1);
        let second = state.dispatch(Message::EnhanceRequested);
        assert!(second.is_empty());
    }

    #[test]
    fn failed_upload_keeps_previous_document() {
        let mut state = signed_in_state();
        upload(&mut state, "kept");
        state.dispatch(Message::FileSelected(Some(SelectedFile::named("next.docx"))));
        let ticket = single_ticket(&state.dispatch(Message::UploadRequested));
        let cmds = state.dispatch(Message::UploadFailed {
            ticket,
            error: ApiError::Status { status: 422, status_text: "Unprocessable".into() },
        });
        assert_eq!(notices(&cmds), vec!["Upload failed".to_string()]);
        assert_eq!(state.workflow.record.raw_text, "kept");
    }

    #[test]
    fn empty_extraction_is_reported() {
        let mut state = signed_in_state();
        state.dispatch(Message::FileSelected(Some(SelectedFile::named("scan.pdf"))));
        let ticket = single_ticket(&state.dispatch(Message::UploadRequested));
        let cmds = state.dispatch(Message::UploadSucceeded {
            ticket,
            file_name: "scan.pdf".into(),
            extracted_text: String::new(),
        });
        assert_eq!(notices(&cmds), vec!["No text could be extracted from this file".to_string()]);
        assert!(!state.workflow.can_process());
    }
}
