//! Auth reducer: sign-in, sign-up and logout.

use crate::constants::{MSG_INVALID_CREDENTIALS, MSG_SIGNUP_FAILED};
use crate::errors::GuardError;
use crate::messages::{Command, Message};
use crate::router::Route;
use crate::state::AppState;
use crate::workflow::{Completion, Operation};
use crate::{debug_log, log_error, log_warn};

/// Handles auth-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoginSubmitted { email, password } => {
            match state.auth_requests.begin(Operation::SignIn, 0) {
                Ok(ticket) => commands.push(Command::Login {
                    ticket,
                    email: email.clone(),
                    password: password.clone(),
                }),
                Err(e) => debug_log!("Login ignored: {}", e),
            }
            true
        }
        Message::LoginSucceeded { ticket, token } => {
            if state.auth_requests.finish(ticket) == Completion::Stale {
                return true;
            }
            if let Err(e) = state.session.sign_in(token) {
                log_error!("Failed to persist credential token: {:?}", e);
                commands.push(Command::error(MSG_INVALID_CREDENTIALS));
                return true;
            }
            commands.push(Command::send(Message::Navigate(Route::Resume)));
            true
        }
        Message::LoginFailed { ticket, error } => {
            if state.auth_requests.finish(ticket) == Completion::Current {
                log_warn!("Login failed: {}", error);
                commands.push(Command::error(MSG_INVALID_CREDENTIALS));
            }
            true
        }
        Message::SignupSubmitted { email, password, confirm } => {
            if password != confirm {
                if let Some(text) = GuardError::PasswordMismatch.user_message() {
                    commands.push(Command::error(text));
                }
                return true;
            }
            match state.auth_requests.begin(Operation::SignUp, 0) {
                Ok(ticket) => commands.push(Command::Signup {
                    ticket,
                    email: email.clone(),
                    password: password.clone(),
                }),
                Err(e) => debug_log!("Signup ignored: {}", e),
            }
            true
        }
        Message::SignupSucceeded { ticket } => {
            if state.auth_requests.finish(ticket) == Completion::Current {
                commands.push(Command::send(Message::Navigate(Route::Login)));
            }
            true
        }
        Message::SignupFailed { ticket, error } => {
            if state.auth_requests.finish(ticket) == Completion::Current {
                log_warn!("Signup failed: {}", error);
                commands.push(Command::error(MSG_SIGNUP_FAILED));
            }
            true
        }
        Message::Logout => {
            if let Err(e) = state.session.sign_out() {
                log_error!("Failed to clear credential token: {:?}", e);
            }
            state.workflow.reset();
            state.auth_requests.cancel_all();
            commands.push(Command::send(Message::Navigate(Route::Login)));
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::reducers::test_support::{anonymous_state, notices, signed_in_state};
    use crate::workflow::Ticket;

    fn submit_login(state: &mut AppState) -> Ticket {
        let cmds = state.dispatch(Message::LoginSubmitted {
            email: "a@b.c".into(),
            password: "pw".into(),
        });
        match cmds.as_slice() {
            [Command::Login { ticket, email, .. }] => {
                assert_eq!(email, "a@b.c");
                *ticket
            }
            other => panic!("expected a login command, got {:?}", other),
        }
    }

    #[test]
    fn successful_login_stores_token_and_opens_workspace() {
        let mut state = anonymous_state();
        let ticket = submit_login(&mut state);
        assert!(state.is_busy());

        let cmds = state.dispatch(Message::LoginSucceeded { ticket, token: "jwt-1".into() });
        assert_eq!(state.session.token().as_deref(), Some("jwt-1"));
        assert!(!state.is_busy());
        match cmds.as_slice() {
            [Command::SendMessage(msg)] => {
                assert!(matches!(**msg, Message::Navigate(Route::Resume)))
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn failed_login_shows_generic_message() {
        let mut state = anonymous_state();
        let ticket = submit_login(&mut state);
        let cmds = state.dispatch(Message::LoginFailed {
            ticket,
            error: ApiError::Rejected("Invalid credentials".into()),
        });
        assert_eq!(notices(&cmds), vec!["Invalid credentials".to_string()]);
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn double_submit_sends_one_request() {
        let mut state = anonymous_state();
        submit_login(&mut state);
        let cmds = state.dispatch(Message::LoginSubmitted {
            email: "a@b.c".into(),
            password: "pw".into(),
        });
        assert!(cmds.is_empty());
    }

    #[test]
    fn signup_checks_confirmation_locally() {
        let mut state = anonymous_state();
        let cmds = state.dispatch(Message::SignupSubmitted {
            email: "a@b.c".into(),
            password: "one".into(),
            confirm: "two".into(),
        });
        assert_eq!(notices(&cmds), vec!["Passwords do not match".to_string()]);
        assert!(!cmds.iter().any(|c| matches!(c, Command::Signup { .. })));
        assert!(!state.is_busy());
    }

    #[test]
    fn signup_success_goes_to_login() {
        let mut state = anonymous_state();
        let cmds = state.dispatch(Message::SignupSubmitted {
            email: "a@b.c".into(),
            password: "same".into(),
            confirm: "same".into(),
        });
        let ticket = match cmds.as_slice() {
            [Command::Signup { ticket, .. }] => *ticket,
            other => panic!("expected a signup command, got {:?}", other),
        };
        let cmds = state.dispatch(Message::SignupSucceeded { ticket });
        assert!(matches!(
            cmds.as_slice(),
            [Command::SendMessage(m)] if matches!(**m, Message::Navigate(Route::Login))
        ));
    }

    #[test]
    fn signup_failure_is_generic() {
        let mut state = anonymous_state();
        let cmds = state.dispatch(Message::SignupSubmitted {
            email: "a@b.c".into(),
            password: "same".into(),
            confirm: "same".into(),
        });
        let ticket = match cmds.as_slice() {
            [Command::Signup { ticket, .. }] => *ticket,
            other => panic!("expected a signup command, got {:?}", other),
        };
        let cmds = state.dispatch(Message::SignupFailed {
            ticket,
            error: ApiError::Status { status: 500, status_text: "oops".into() },
        });
        assert_eq!(notices(&cmds), vec!["Signup failed".to_string()]);
    }

    #[test]
    fn logout_clears_token_and_workflow() {
        let mut state = signed_in_state();
        state.workflow.apply_upload("cv.pdf".into(), "text".into());
        state.dispatch(Message::Logout);
        assert!(!state.session.is_authenticated());
        assert!(!state.workflow.record.has_text());
        assert!(state.workflow.history.is_empty());
    }
}
