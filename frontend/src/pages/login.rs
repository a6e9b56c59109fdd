// frontend/src/pages/login.rs
//
// Sign-in form.  Built once per visit so typed values survive re-renders;
// later renders only refresh the submit button.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

use super::{auth_card, labelled_input, mount, nav_link};
use crate::dom_utils;
use crate::messages::Message;
use crate::router::Route;
use crate::state::AppState;
use crate::workflow::Operation;

const EMAIL_ID: &str = "login-email";
const PASSWORD_ID: &str = "login-password";
const SUBMIT_ID: &str = "login-submit";

pub fn render(document: &Document, app: &Element, state: &AppState) -> Result<(), JsValue> {
    let (container, fresh) = mount(document, app, Route::Login)?;
    if fresh {
        build(document, &container)?;
        dom_utils::focus_first_input(&container);
    }

    let running = state.auth_requests.is_running(Operation::SignIn);
    if let Some(btn) = dom_utils::by_id::<HtmlButtonElement>(document, SUBMIT_ID) {
        btn.set_disabled(running);
        btn.set_text_content(Some(if running { "Signing in…" } else { "Continue" }));
    }
    Ok(())
}

fn build(document: &Document, container: &Element) -> Result<(), JsValue> {
    let card = auth_card(document, "Sign in", "Access your resume workspace")?;

    let form = dom_utils::element(document, "form", "auth-form", None)?;
    labelled_input(document, &form, EMAIL_ID, "Email", "email")?;
    labelled_input(document, &form, PASSWORD_ID, "Password", "password")?;

    let submit = dom_utils::button(document, "Continue", "btn-primary", false)?;
    submit.set_id(SUBMIT_ID);
    submit.set_type("submit");
    form.append_child(&submit)?;

    {
        let document = document.clone();
        let cb = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            evt.prevent_default();
            crate::state::dispatch_global_message(Message::LoginSubmitted {
                email: dom_utils::input_value(&document, EMAIL_ID),
                password: dom_utils::input_value(&document, PASSWORD_ID),
            });
        }) as Box<dyn FnMut(_)>);
        form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    card.append_child(&form)?;

    let footer = dom_utils::element(document, "p", "auth-footer", None)?;
    let link = nav_link(document, "New here? Create an account", Route::Signup)?;
    footer.append_child(&link)?;
    card.append_child(&footer)?;

    container.append_child(&card)?;
    Ok(())
}
