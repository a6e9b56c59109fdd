// frontend/src/update.rs
//
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    // Domain reducers consume the messages they own and report whether they
    // did.  Order does not matter; no message belongs to two reducers.
    if crate::reducers::navigation::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::auth::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::workflow::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::theme::update(state, &msg, &mut commands) {
        return commands;
    }

    debug_log!("Unhandled message: {:?}", msg);
    commands
}
