//! Navigation reducer: runs every route change through the session guard.

use crate::debug_log;
use crate::messages::{Command, Message};
use crate::router::{guard, guard_path};
use crate::state::AppState;

/// Handles navigation messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::Navigate(requested) => {
            let decision = guard(*requested, &state.session);
            if decision.is_redirect() {
                debug_log!("Guard redirected {:?} -> {:?}", requested, decision.route());
            }
            state.route = decision.route();
            commands.push(Command::SyncLocation {
                route: decision.route(),
                replace: decision.is_redirect(),
            });
            true
        }
        Message::LocationChanged(path) => {
            let decision = guard_path(path, &state.session);
            state.route = decision.route();
            // The address bar already shows `path`; only rewrite it when the
            // guard sent us elsewhere.
            if decision.is_redirect() {
                commands.push(Command::SyncLocation { route: decision.route(), replace: true });
            }
            true
        }
        _ => false,
    }
}
