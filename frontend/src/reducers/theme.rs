//! Theme reducer.

use crate::log_warn;
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, _commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            // Persist to localStorage
            let store = state.session.store();
            if let Err(e) = state.theme.save(store.as_ref()) {
                log_warn!("Failed to persist theme preference: {:?}", e);
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::test_support::anonymous_state;
    use crate::theme::DARK;

    #[test]
    fn toggle_flips_and_persists() {
        let mut state = anonymous_state();
        assert!(!state.theme.dark);
        state.dispatch(Message::ToggleTheme);
        assert_eq!(state.theme.palette(), DARK);
        assert_eq!(state.session.store().get("darkMode").as_deref(), Some("true"));
    }

    #[test]
    fn theme_is_independent_of_session() {
        let mut state = anonymous_state();
        state.dispatch(Message::ToggleTheme);
        state.dispatch(Message::Logout);
        assert!(state.theme.dark);
    }
}
