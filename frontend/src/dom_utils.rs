//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! The page builders create a lot of small elements and wire a lot of click
//! handlers; these wrappers keep that code readable.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

pub fn set_visible(el: &Element, visible: bool) {
    if visible {
        show(el)
    } else {
        hide(el)
    }
}

/// Drop every child node so the element can be rebuilt from scratch.
pub fn clear_children(el: &Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}

/// `<tag class="...">text</tag>`
pub fn element(document: &Document, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

pub fn button(document: &Document, label: &str, class: &str, disabled: bool) -> Result<HtmlButtonElement, JsValue> {
    let btn: HtmlButtonElement = element(document, "button", class, Some(label))?.dyn_into()?;
    btn.set_type("button");
    btn.set_disabled(disabled);
    Ok(btn)
}

/// Dispatch the message produced by `make` whenever `el` is clicked.
pub fn on_click<F>(el: &Element, make: F) -> Result<(), JsValue>
where
    F: Fn() -> Message + 'static,
{
    let cb = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        dispatch_global_message(make());
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Element by id, cast to the requested type.  `None` when it is missing or
/// of a different type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// Value of an `<input id=...>`, or an empty string when it is missing.
pub fn input_value(document: &Document, id: &str) -> String {
    by_id::<HtmlInputElement>(document, id)
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Focus the first enabled input inside `container`, if there is one.
pub fn focus_first_input(container: &Element) {
    if let Ok(Some(el)) = container.query_selector("input:not([disabled])") {
        if let Ok(html) = el.dyn_into::<HtmlElement>() {
            let _ = html.focus();
        }
    }
}
