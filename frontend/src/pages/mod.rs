// frontend/src/pages/mod.rs
//
// One module per route.  Each page owns a container under `#app-container`
// and is unmounted when another route becomes active.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom_utils;
use crate::router::Route;

pub mod login;
pub mod resume;
pub mod signup;

pub fn container_id(route: Route) -> &'static str {
    match route {
        Route::Login => "login-page",
        Route::Signup => "signup-page",
        Route::Resume => "resume-page",
    }
}

/// Existing page container for `route`, or a freshly created one and a flag
/// telling the caller it has to build the content.
pub(crate) fn mount(document: &Document, app: &Element, route: Route) -> Result<(Element, bool), JsValue> {
    if let Some(el) = document.get_element_by_id(container_id(route)) {
        return Ok((el, false));
    }
    let el = dom_utils::element(document, "div", "page", None)?;
    el.set_id(container_id(route));
    app.append_child(&el)?;
    Ok((el, true))
}

/// Remove every page container except the one for `active`.
pub fn unmount_others(document: &Document, active: Route) -> Result<(), JsValue> {
    for route in [Route::Login, Route::Signup, Route::Resume] {
        if route == active {
            continue;
        }
        if let Some(el) = document.get_element_by_id(container_id(route)) {
            if let Some(parent) = el.parent_node() {
                parent.remove_child(&el)?;
            }
        }
    }
    Ok(())
}

/// Card with a heading and subtitle shared by the two auth forms.
pub(crate) fn auth_card(document: &Document, title: &str, subtitle: &str) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "div", "card auth-card", None)?;
    let heading = dom_utils::element(document, "h2", "", Some(title))?;
    let sub = dom_utils::element(document, "p", "subtitle", Some(subtitle))?;
    card.append_child(&heading)?;
    card.append_child(&sub)?;
    Ok(card)
}

pub(crate) fn labelled_input(
    document: &Document,
    form: &Element,
    id: &str,
    label: &str,
    input_type: &str,
) -> Result<(), JsValue> {
    let lbl = dom_utils::element(document, "label", "", Some(label))?;
    lbl.set_attribute("for", id)?;
    let input = document.create_element("input")?;
    input.set_id(id);
    input.set_attribute("type", input_type)?;
    input.set_attribute("required", "")?;
    form.append_child(&lbl)?;
    form.append_child(&input)?;
    Ok(())
}

/// `<a>` that dispatches a navigation instead of reloading the page.
pub(crate) fn nav_link(document: &Document, text: &str, target: Route) -> Result<Element, JsValue> {
    let link = dom_utils::element(document, "a", "nav-link", Some(text))?;
    link.set_attribute("href", target.path())?;
    let cb = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        evt.prevent_default();
        crate::state::dispatch_global_message(crate::messages::Message::Navigate(target));
    }) as Box<dyn FnMut(_)>);
    link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(link)
}
