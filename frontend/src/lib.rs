use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod command_executors;
pub mod constants;
pub mod dom_utils;
pub mod errors;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod reducers;
pub mod router;
pub mod session;
pub mod state;
pub mod storage;
pub mod theme;
pub mod toast;
pub mod update;
pub mod utils;
pub mod views;
pub mod workflow;

pub use network::init_api_config_js;

use messages::Message;
use state::dispatch_global_message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    log_info!("Resume client starting against {}", network::config::current().base_url());

    // Back / forward buttons re-run the guard against the new path.
    {
        let location = window.location();
        let on_popstate = Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
            let path = location.pathname().unwrap_or_default();
            dispatch_global_message(Message::LocationChanged(path));
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())?;
        on_popstate.forget();
    }

    let path = window.location().pathname().unwrap_or_default();
    dispatch_global_message(Message::LocationChanged(path));

    Ok(())
}
