//! Runs the side effects the reducers ask for.  Network calls are spawned on
//! the browser event loop and report back through `dispatch_global_message`.

use crate::errors::ApiError;
use crate::messages::{Command, Message};
use crate::models::Credentials;
use crate::network::ApiClient;
use crate::router::Route;
use crate::state::dispatch_global_message;
use crate::utils::now_ms;
use crate::{debug_log, log_warn, toast};

pub fn execute(cmd: Command) {
    match cmd {
        Command::SendMessage(msg) => dispatch_global_message(*msg),
        Command::SyncLocation { route, replace } => sync_location(route, replace),
        Command::Notify { kind, message } => toast::show(&message, kind),

        Command::Login { ticket, email, password } => {
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_current_config();
                let msg = match client.login(&Credentials { email, password }).await {
                    Ok(token) => Message::LoginSucceeded { ticket, token },
                    Err(error) => Message::LoginFailed { ticket, error },
                };
                dispatch_global_message(msg);
            });
        }
        Command::Signup { ticket, email, password } => {
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_current_config();
                let msg = match client.signup(&Credentials { email, password }).await {
                    Ok(()) => Message::SignupSucceeded { ticket },
                    Err(error) => Message::SignupFailed { ticket, error },
                };
                dispatch_global_message(msg);
            });
        }
        Command::UploadResume { ticket, file } => {
            wasm_bindgen_futures::spawn_local(async move {
                let Some(handle) = file.file else {
                    dispatch_global_message(Message::UploadFailed {
                        ticket,
                        error: ApiError::Network(format!("no browser file behind '{}'", file.name)),
                    });
                    return;
                };
                let client = ApiClient::from_current_config();
                let msg = match client.upload_resume(&handle).await {
                    Ok(out) => Message::UploadSucceeded {
                        ticket,
                        file_name: out.filename.unwrap_or(file.name),
                        extracted_text: out.extracted_text,
                    },
                    Err(error) => Message::UploadFailed { ticket, error },
                };
                dispatch_global_message(msg);
            });
        }
        Command::ScoreResume { ticket, resume_text } => {
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_current_config();
                let msg = match client.ats_score(&resume_text).await {
                    Ok(out) => {
                        if let (Some(m), Some(t)) = (out.matched_keywords, out.total_keywords) {
                            debug_log!("ATS keywords matched: {}/{}", m, t);
                        }
                        Message::ScoreSucceeded { ticket, score: out.score, recorded_at_ms: now_ms() }
                    }
                    Err(error) => Message::ScoreFailed { ticket, error },
                };
                dispatch_global_message(msg);
            });
        }
        Command::EnhanceResume { ticket, resume_text } => {
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_current_config();
                let msg = match client.enhance(&resume_text).await {
                    Ok(out) => Message::EnhanceSucceeded { ticket, enhanced_text: out.enhanced_resume },
                    Err(error) => Message::EnhanceFailed { ticket, error },
                };
                dispatch_global_message(msg);
            });
        }
        Command::ExportResume { ticket, format, resume_text } => {
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_current_config();
                let msg = match client.export(format, &resume_text).await {
                    Ok(out) => Message::ExportSucceeded {
                        ticket,
                        generated_path: out.generated_path(format).map(str::to_string),
                    },
                    Err(error) => Message::ExportFailed { ticket, error },
                };
                dispatch_global_message(msg);
            });
        }
    }
}

fn sync_location(route: Route, replace: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let current = window.location().pathname().unwrap_or_default();
    if current == route.path() {
        return;
    }
    let history = match window.history() {
        Ok(h) => h,
        Err(e) => {
            log_warn!("History API unavailable: {:?}", e);
            return;
        }
    };
    let result = if replace {
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()))
    } else {
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()))
    };
    if let Err(e) = result {
        log_warn!("Failed to update location to {}: {:?}", route.path(), e);
    }
    if let Some(document) = window.document() {
        document.set_title(route.title());
    }
}
