//! Browser tests: localStorage persistence and page rendering against a
//! real DOM.  Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen_test::*;

use resume_builder_frontend::messages::Message;
use resume_builder_frontend::models::AtsScore;
use resume_builder_frontend::router::Route;
use resume_builder_frontend::session::Session;
use resume_builder_frontend::state::AppState;
use resume_builder_frontend::storage::{BrowserStorage, KeyValueStore, MemoryStorage};
use resume_builder_frontend::theme::Theme;
use resume_builder_frontend::views::render_active_view;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn token_survives_in_local_storage() {
    assert!(BrowserStorage::is_available());
    let store: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
    let session = Session::new(store.clone());

    session.sign_in("jwt-from-browser").unwrap();
    assert_eq!(store.get("token").as_deref(), Some("jwt-from-browser"));
    assert!(Session::new(store.clone()).is_authenticated());

    session.sign_out().unwrap();
    assert_eq!(store.get("token"), None);
}

#[wasm_bindgen_test]
fn dark_mode_flag_is_stored_as_text() {
    let store = BrowserStorage;
    Theme { dark: true }.save(&store).unwrap();
    assert_eq!(store.get("darkMode").as_deref(), Some("true"));
    assert!(Theme::load(&store).dark);
    Theme::default().save(&store).unwrap();
}

#[wasm_bindgen_test]
fn login_page_renders_form() {
    let state = AppState::new(Rc::new(MemoryStorage::new()));
    let doc = document();
    render_active_view(&state, &doc).unwrap();

    assert!(doc.get_element_by_id("login-page").is_some());
    assert!(doc.get_element_by_id("login-email").is_some());
    assert!(doc.get_element_by_id("login-password").is_some());
    assert!(doc.get_element_by_id("resume-page").is_none());

    let page = doc.get_element_by_id("login-page").unwrap();
    let text = page.text_content().unwrap_or_default();
    assert!(text.contains("Access your resume workspace"));
    assert!(text.contains("New here? Create an account"));
}

#[wasm_bindgen_test]
fn resume_page_shows_score_and_history() {
    let mut state = AppState::new(Rc::new(MemoryStorage::with_item("token", "jwt")));
    state.dispatch(Message::Navigate(Route::Resume));
    state.workflow.apply_upload("cv.pdf".into(), "Python SQL".into());
    state.workflow.apply_score(
        AtsScore::new(82),
        1_700_000_000_000,
        "11/14/2023, 10:13:20 PM".into(),
    );

    let doc = document();
    render_active_view(&state, &doc).unwrap();

    assert!(doc.get_element_by_id("login-page").is_none());
    let page = doc.get_element_by_id("resume-page").unwrap();
    let text = page.text_content().unwrap_or_default();
    assert!(text.contains("82%"));
    assert!(text.contains("11/14/2023"));
    assert!(text.contains("Resume History"));

    let area = page.query_selector("textarea").unwrap().unwrap();
    let area: web_sys::HtmlTextAreaElement = wasm_bindgen::JsCast::dyn_into(area).unwrap();
    assert_eq!(area.value(), "Python SQL");
}

#[wasm_bindgen_test]
fn resume_page_refreshes_in_place() {
    let mut state = AppState::new(Rc::new(MemoryStorage::with_item("token", "jwt")));
    state.dispatch(Message::Navigate(Route::Resume));
    let doc = document();
    render_active_view(&state, &doc).unwrap();
    let area_before = doc.get_element_by_id("resume-text").unwrap();
    let input_before = doc.get_element_by_id("resume-file").unwrap();

    state.workflow.apply_upload("cv.pdf".into(), "first draft".into());
    state.workflow.apply_score(AtsScore::new(40), 1, "1/1/2024, 9:00:00 AM".into());
    state.workflow.apply_score(AtsScore::new(90), 2, "1/2/2024, 9:00:00 AM".into());
    render_active_view(&state, &doc).unwrap();

    let area_after = doc.get_element_by_id("resume-text").unwrap();
    assert!(area_before.is_same_node(Some(&*area_after)));
    assert!(input_before.is_same_node(doc.get_element_by_id("resume-file").as_deref()));

    let list = doc.get_element_by_id("history-list").unwrap();
    assert_eq!(list.child_element_count(), 2);
    let newest = list.first_element_child().unwrap();
    assert_eq!(newest.get_attribute("data-entry-id").as_deref(), Some("2"));
    assert!(newest.text_content().unwrap_or_default().contains("90%"));

    let score = doc.get_element_by_id("score-panel").unwrap();
    assert!(!score.class_list().contains("hidden"));
}
