// frontend/src/views.rs
//
// Render the page for the active route from the current application state.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::pages;
use crate::router::Route;
use crate::state::{AppState, APP_STATE};
use crate::theme::Palette;

const APP_CONTAINER_ID: &str = "app-container";

/// Re-render against the global state.  Must not be called while
/// `APP_STATE` is mutably borrowed.
pub fn refresh_ui() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    APP_STATE.with(|cell| render_active_view(&cell.borrow(), &document))
}

pub fn render_active_view(state: &AppState, document: &Document) -> Result<(), JsValue> {
    ensure_styles(document)?;
    let app = ensure_app_container(document)?;
    apply_palette(document, &app, state.theme.palette())?;

    pages::unmount_others(document, state.route)?;
    match state.route {
        Route::Login => pages::login::render(document, &app, state)?,
        Route::Signup => pages::signup::render(document, &app, state)?,
        Route::Resume => pages::resume::render(document, &app, state)?,
    }

    document.set_title(state.route.title());
    Ok(())
}

fn ensure_app_container(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(APP_CONTAINER_ID) {
        return Ok(el);
    }
    let el = document.create_element("div")?;
    el.set_id(APP_CONTAINER_ID);
    el.set_class_name("app-container");
    let body = document.body().ok_or_else(|| JsValue::from_str("<body> element missing"))?;
    body.append_child(&el)?;
    Ok(el)
}

fn apply_palette(document: &Document, app: &Element, palette: Palette) -> Result<(), JsValue> {
    if let Some(body) = document.body() {
        let style = body.style();
        style.set_property("background-color", palette.background)?;
        style.set_property("color", palette.text)?;
    }
    // Cards pick up the card colour through a custom property.
    app.set_attribute(
        "style",
        &format!("--card-bg: {}; --text-color: {};", palette.card, palette.text),
    )?;
    Ok(())
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("app-styles").is_some() {
        return Ok(());
    }

    let css = "
body{margin:0;font-family:Inter,system-ui,sans-serif;transition:background-color .2s,color .2s}
.app-container{max-width:1100px;margin:0 auto;padding:24px}
.hidden{display:none}
.card{background:var(--card-bg);color:var(--text-color);border-radius:8px;padding:16px;box-shadow:0 1px 3px rgba(0,0,0,.1);margin-bottom:16px}
.auth-card{max-width:380px;margin:80px auto}
.auth-form{display:flex;flex-direction:column;gap:8px}
.subtitle,.hint{opacity:.7}
.resume-header{display:flex;justify-content:space-between;align-items:center}
.header-controls,.action-bar{display:flex;gap:8px;flex-wrap:wrap}
.resume-grid{display:grid;grid-template-columns:320px 1fr;gap:16px}
.resume-text{width:100%;min-height:480px;background:transparent;color:inherit}
.progress{height:8px;background:#e5e7eb;border-radius:4px;overflow:hidden}
.progress-fill{height:100%}
.history-list{list-style:none;padding:0;margin:0}
.history-row{display:flex;justify-content:space-between;padding:6px 0;cursor:pointer}
.processing{font-style:italic;margin:8px 0}
";

    let style = document.create_element("style")?;
    style.set_id("app-styles");
    style.set_text_content(Some(css));
    match document.query_selector("head")? {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("<body> element missing"))?
            .append_child(&style)?,
    };
    Ok(())
}
