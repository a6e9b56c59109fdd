use std::cell::RefCell;
use std::rc::Rc;

use crate::messages::{Command, Message};
use crate::router::Route;
use crate::session::Session;
use crate::storage::{BrowserStorage, KeyValueStore, MemoryStorage};
use crate::theme::Theme;
use crate::update::update;
use crate::workflow::{InFlight, Workflow};
use crate::{log_warn, views};

// Store global application state
pub struct AppState {
    // Credential token holder, passed to whoever needs it
    pub session: Session,
    // Display preference (persisted independently of the session)
    pub theme: Theme,
    // Currently rendered page (always the guarded route)
    pub route: Route,
    // Resume record, history and in-flight operations
    pub workflow: Workflow,
    // Pending sign-in / sign-up requests
    pub auth_requests: InFlight,
}

impl AppState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let theme = Theme::load(store.as_ref());
        Self {
            session: Session::new(store),
            theme,
            route: Route::Login,
            workflow: Workflow::new(),
            auth_requests: InFlight::default(),
        }
    }

    /// State backed by `window.localStorage`, or by a volatile store when the
    /// browser refuses storage access.
    pub fn for_browser() -> Self {
        let store: Rc<dyn KeyValueStore> = if BrowserStorage::is_available() {
            Rc::new(BrowserStorage)
        } else {
            log_warn!("localStorage unavailable; session will not survive a reload");
            Rc::new(MemoryStorage::new())
        };
        Self::new(store)
    }

    /// Busy indicator: any remote request outstanding.
    pub fn is_busy(&self) -> bool {
        self.workflow.is_busy() || self.auth_requests.is_busy()
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::for_browser());
}

// Global helper function for dispatching messages with proper UI refresh handling
pub fn dispatch_global_message(msg: Message) {
    // Update state, then release the borrow before running side effects so
    // executors and renderers can borrow again.
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    for cmd in commands {
        crate::command_executors::execute(cmd);
    }

    if let Err(e) = views::refresh_ui() {
        log_warn!("Failed to refresh UI after action: {:?}", e);
    }
}
