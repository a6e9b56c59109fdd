// frontend/src/pages/resume.rs
//
// The protected workspace: upload, score, rewrite, export and the score
// history.  The skeleton and its handlers are built once per visit; every
// render afterwards only refreshes text, visibility and disabled states.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

use super::mount;
use crate::dom_utils::{self, by_id};
use crate::messages::Message;
use crate::models::ExportFormat;
use crate::router::Route;
use crate::state::{dispatch_global_message, AppState};
use crate::utils::truncate_chars;
use crate::workflow::{Operation, SelectedFile, Workflow};

const THEME_TOGGLE_ID: &str = "theme-toggle";
const BUSY_ID: &str = "resume-busy";
const FILE_INPUT_ID: &str = "resume-file";
const FILE_LABEL_ID: &str = "selected-file";
const UPLOAD_BUTTON_ID: &str = "upload-button";
const SCORE_PANEL_ID: &str = "score-panel";
const SCORE_VALUE_ID: &str = "score-value";
const SCORE_FILL_ID: &str = "score-fill";
const HISTORY_EMPTY_ID: &str = "history-empty";
const HISTORY_LIST_ID: &str = "history-list";
const CONTENT_EMPTY_ID: &str = "content-empty";
const CONTENT_TEXT_ID: &str = "resume-text";

const FILE_LABEL_MAX_CHARS: usize = 40;
const HISTORY_ID_ATTR: &str = "data-entry-id";

/// Workspace buttons that act on the extracted text.
fn actions() -> [(&'static str, String, Operation, Message); 4] {
    let export = |format: ExportFormat, id: &'static str| {
        (id, format!("Download {}", format.label()), Operation::Export(format), Message::ExportRequested(format))
    };
    [
        ("action-score", "ATS Score".to_string(), Operation::Score, Message::ScoreRequested),
        ("action-enhance", "Enhance with AI".to_string(), Operation::Enhance, Message::EnhanceRequested),
        export(ExportFormat::Pdf, "action-export-pdf"),
        export(ExportFormat::Docx, "action-export-docx"),
    ]
}

pub fn render(document: &Document, app: &Element, state: &AppState) -> Result<(), JsValue> {
    let (container, fresh) = mount(document, app, Route::Resume)?;
    if fresh {
        build(document, &container)?;
    }
    refresh(document, state)
}

// ---------------------------------------------------------------------------
// Skeleton (once per visit)
// ---------------------------------------------------------------------------

fn build(document: &Document, container: &Element) -> Result<(), JsValue> {
    let header = build_header(document)?;
    container.append_child(&header)?;

    let busy = dom_utils::element(document, "div", "processing hidden", Some("Processing…"))?;
    busy.set_id(BUSY_ID);
    container.append_child(&busy)?;

    let bar = dom_utils::element(document, "div", "card action-bar", None)?;
    for (id, label, _, msg) in actions() {
        let btn = dom_utils::button(document, &label, "btn-primary", true)?;
        btn.set_id(id);
        dom_utils::on_click(&btn, move || msg.clone())?;
        bar.append_child(&btn)?;
    }
    container.append_child(&bar)?;

    let grid = dom_utils::element(document, "div", "resume-grid", None)?;
    let side = dom_utils::element(document, "div", "resume-side", None)?;
    let upload = build_upload_panel(document)?;
    let score = build_score_panel(document)?;
    let history = build_history_panel(document)?;
    side.append_child(&upload)?;
    side.append_child(&score)?;
    side.append_child(&history)?;
    grid.append_child(&side)?;
    let content = build_content_panel(document)?;
    grid.append_child(&content)?;
    container.append_child(&grid)?;

    Ok(())
}

fn build_header(document: &Document) -> Result<Element, JsValue> {
    let header = dom_utils::element(document, "header", "resume-header", None)?;
    let title = dom_utils::element(document, "h1", "", Some(Route::Resume.title()))?;
    header.append_child(&title)?;

    let controls = dom_utils::element(document, "div", "header-controls", None)?;
    let theme_btn = dom_utils::button(document, "", "btn-secondary", false)?;
    theme_btn.set_id(THEME_TOGGLE_ID);
    dom_utils::on_click(&theme_btn, || Message::ToggleTheme)?;
    controls.append_child(&theme_btn)?;

    let logout_btn = dom_utils::button(document, "Logout", "btn-secondary", false)?;
    dom_utils::on_click(&logout_btn, || Message::Logout)?;
    controls.append_child(&logout_btn)?;

    header.append_child(&controls)?;
    Ok(header)
}

fn build_upload_panel(document: &Document) -> Result<Element, JsValue> {
    let panel = dom_utils::element(document, "div", "card upload-panel", None)?;
    let title = dom_utils::element(document, "h3", "", Some("Upload Resume"))?;
    let hint = dom_utils::element(document, "p", "hint", Some("PDF or DOCX only"))?;
    panel.append_child(&title)?;
    panel.append_child(&hint)?;

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(FILE_INPUT_ID);
    input.set_type("file");
    input.set_accept(".pdf,.docx");
    {
        let cb = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            let selected = evt
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(SelectedFile::new);
            dispatch_global_message(Message::FileSelected(selected));
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    panel.append_child(&input)?;

    let label = dom_utils::element(document, "p", "selected-file hidden", None)?;
    label.set_id(FILE_LABEL_ID);
    panel.append_child(&label)?;

    let upload_btn = dom_utils::button(document, "Upload", "btn-primary", false)?;
    upload_btn.set_id(UPLOAD_BUTTON_ID);
    dom_utils::on_click(&upload_btn, || Message::UploadRequested)?;
    panel.append_child(&upload_btn)?;

    Ok(panel)
}

fn build_score_panel(document: &Document) -> Result<Element, JsValue> {
    let panel = dom_utils::element(document, "div", "card score-panel hidden", None)?;
    panel.set_id(SCORE_PANEL_ID);
    let title = dom_utils::element(document, "h3", "", Some("ATS Score"))?;
    panel.append_child(&title)?;

    let value = dom_utils::element(document, "div", "score-value", None)?;
    value.set_id(SCORE_VALUE_ID);
    panel.append_child(&value)?;

    let track = dom_utils::element(document, "div", "progress", None)?;
    let fill = dom_utils::element(document, "div", "progress-fill", None)?;
    fill.set_id(SCORE_FILL_ID);
    track.append_child(&fill)?;
    panel.append_child(&track)?;

    Ok(panel)
}

fn build_history_panel(document: &Document) -> Result<Element, JsValue> {
    let panel = dom_utils::element(document, "div", "card history-panel", None)?;
    let title = dom_utils::element(document, "h3", "", Some("Resume History"))?;
    panel.append_child(&title)?;

    let empty = dom_utils::element(document, "p", "hint", Some("No scores yet."))?;
    empty.set_id(HISTORY_EMPTY_ID);
    panel.append_child(&empty)?;

    let list = dom_utils::element(document, "ul", "history-list", None)?;
    list.set_id(HISTORY_LIST_ID);
    // Rows come and go with every score, so one listener on the list
    // resolves the clicked row through its id attribute.
    {
        let cb = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let id = evt
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&format!("li[{}]", HISTORY_ID_ATTR)).ok().flatten())
                .and_then(|row| row.get_attribute(HISTORY_ID_ATTR))
                .and_then(|raw| raw.parse::<i64>().ok());
            if let Some(id) = id {
                dispatch_global_message(Message::HistoryEntrySelected(id));
            }
        }) as Box<dyn FnMut(_)>);
        list.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    panel.append_child(&list)?;

    Ok(panel)
}

fn build_content_panel(document: &Document) -> Result<Element, JsValue> {
    let panel = dom_utils::element(document, "div", "card content-panel", None)?;
    let title = dom_utils::element(document, "h3", "", Some("Resume Content"))?;
    panel.append_child(&title)?;

    let empty = dom_utils::element(document, "p", "hint", Some("Upload a resume to view content here."))?;
    empty.set_id(CONTENT_EMPTY_ID);
    panel.append_child(&empty)?;

    let area: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    area.set_id(CONTENT_TEXT_ID);
    area.set_class_name("resume-text hidden");
    area.set_read_only(true);
    panel.append_child(&area)?;

    Ok(panel)
}

// ---------------------------------------------------------------------------
// Refresh (every render)
// ---------------------------------------------------------------------------

fn refresh(document: &Document, state: &AppState) -> Result<(), JsValue> {
    let workflow = &state.workflow;

    if let Some(btn) = document.get_element_by_id(THEME_TOGGLE_ID) {
        btn.set_text_content(Some(state.theme.toggle_label()));
    }
    if let Some(busy) = document.get_element_by_id(BUSY_ID) {
        dom_utils::set_visible(&busy, state.is_busy());
    }

    for (id, _, op, _) in actions() {
        if let Some(btn) = by_id::<HtmlButtonElement>(document, id) {
            btn.set_disabled(!workflow.can_process() || workflow.in_flight.is_running(op));
        }
    }

    refresh_upload(document, workflow);
    refresh_score(document, workflow)?;
    refresh_history(document, workflow)?;
    refresh_content(document, workflow);
    Ok(())
}

fn refresh_upload(document: &Document, workflow: &Workflow) {
    if let Some(label) = document.get_element_by_id(FILE_LABEL_ID) {
        let name = workflow
            .selected_file
            .as_ref()
            .map(|f| f.name.as_str())
            .or(workflow.record.uploaded_file.as_deref());
        dom_utils::set_visible(&label, name.is_some());
        let text = name.map(|n| truncate_chars(n, FILE_LABEL_MAX_CHARS)).unwrap_or_default();
        label.set_text_content(Some(&text));
    }

    if let Some(btn) = by_id::<HtmlButtonElement>(document, UPLOAD_BUTTON_ID) {
        let uploading = workflow.in_flight.is_running(Operation::Upload);
        btn.set_disabled(uploading);
        btn.set_text_content(Some(if uploading { "Uploading…" } else { "Upload" }));
    }
}

fn refresh_score(document: &Document, workflow: &Workflow) -> Result<(), JsValue> {
    let Some(panel) = document.get_element_by_id(SCORE_PANEL_ID) else {
        return Ok(());
    };
    let Some(score) = workflow.record.ats_score else {
        dom_utils::hide(&panel);
        return Ok(());
    };
    dom_utils::show(&panel);

    let color = score.band().color();
    if let Some(value) = document.get_element_by_id(SCORE_VALUE_ID) {
        value.set_text_content(Some(&score.percent()));
        value.set_attribute("style", &format!("color: {};", color))?;
    }
    if let Some(fill) = document.get_element_by_id(SCORE_FILL_ID) {
        fill.set_attribute("style", &format!("width: {}; background-color: {};", score.percent(), color))?;
    }
    Ok(())
}

fn refresh_history(document: &Document, workflow: &Workflow) -> Result<(), JsValue> {
    if let Some(empty) = document.get_element_by_id(HISTORY_EMPTY_ID) {
        dom_utils::set_visible(&empty, workflow.history.is_empty());
    }
    let Some(list) = document.get_element_by_id(HISTORY_LIST_ID) else {
        return Ok(());
    };

    dom_utils::clear_children(&list);
    for entry in &workflow.history {
        let row = dom_utils::element(document, "li", "history-row", None)?;
        row.set_attribute(HISTORY_ID_ATTR, &entry.id.to_string())?;

        let date = dom_utils::element(document, "span", "history-date", Some(&entry.date))?;
        let score = dom_utils::element(document, "span", "history-score", Some(&entry.score.percent()))?;
        score.set_attribute("style", &format!("color: {};", entry.score.band().color()))?;
        row.append_child(&date)?;
        row.append_child(&score)?;
        list.append_child(&row)?;
    }
    Ok(())
}

fn refresh_content(document: &Document, workflow: &Workflow) {
    let has_text = workflow.record.has_text();
    if let Some(empty) = document.get_element_by_id(CONTENT_EMPTY_ID) {
        dom_utils::set_visible(&empty, !has_text);
    }
    if let Some(area) = by_id::<HtmlTextAreaElement>(document, CONTENT_TEXT_ID) {
        dom_utils::set_visible(&area, has_text);
        let text = workflow.record.current_text();
        if area.value() != text {
            area.set_value(text);
        }
    }
}
