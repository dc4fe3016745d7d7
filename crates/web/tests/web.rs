//! Browser tests. Run with `wasm-pack test --headless --firefox crates/web`.

#![cfg(target_arch = "wasm32")]

use deck_web::{is_pulse_running, mount, mount_deck, unmount, PulseTimer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fresh_root(id: &str) -> Element {
    let document = document();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn set_hash(value: &str) {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(value))
        .unwrap();
}

fn current_hash() -> String {
    web_sys::window().unwrap().location().hash().unwrap()
}

/// Dispatch a keydown on `target`. Returns false if a listener prevented it.
fn press_on(target: &EventTarget, key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

fn press(key: &str) -> bool {
    press_on(&web_sys::window().unwrap(), key)
}

fn fire_hashchange() {
    let event = Event::new("hashchange").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

/// Append a fresh element of `tag` to the body.
fn body_child(tag: &str, id: &str) -> HtmlElement {
    let document = document();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element.dyn_into::<HtmlElement>().unwrap()
}

/// Wrap `setInterval`/`clearInterval` and return the set of live handles.
fn track_intervals() -> js_sys::Set {
    let install = js_sys::Function::new_no_args(
        r#"
        const active = new Set();
        const set = window.setInterval.bind(window);
        const clear = window.clearInterval.bind(window);
        window.setInterval = (cb, ms, ...rest) => {
            const id = set(cb, ms, ...rest);
            active.add(id);
            return id;
        };
        window.clearInterval = (id) => {
            active.delete(id);
            clear(id);
        };
        return active;
        "#,
    );
    install.call0(&JsValue::NULL).unwrap().unchecked_into()
}

const THREE_SLIDES: &str = r#"[
    {"section": "A", "title": "One", "line": "First"},
    {"section": "A", "title": "Two", "line": "Second"},
    {"section": "B", "title": "Three", "line": "Third"}
]"#;

fn no_pulse() -> JsValue {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"pulseEnabled".into(), &JsValue::FALSE).unwrap();
    options.into()
}

#[wasm_bindgen_test]
fn mounts_at_fragment_and_renders() {
    set_hash("#3");
    let root = fresh_root("deck-fragment");

    mount("#deck-fragment", JsValue::UNDEFINED, no_pulse()).unwrap();

    let html = root.inner_html();
    assert!(html.contains("03 / 20"));
    assert!(html.contains("Data Waste"));
    assert_eq!(current_hash(), "#3");
}

#[wasm_bindgen_test]
fn invalid_fragment_starts_at_first_slide() {
    set_hash("#99");
    let root = fresh_root("deck-invalid");

    mount("#deck-invalid", JsValue::UNDEFINED, no_pulse()).unwrap();

    assert!(root.inner_html().contains("01 / 20"));
    assert_eq!(current_hash(), "#1");
}

#[wasm_bindgen_test]
fn keyboard_moves_cursor_and_fragment() {
    set_hash("#1");
    let root = fresh_root("deck-keys");
    let json = r#"[
        {"section": "A", "title": "One", "line": "First"},
        {"section": "B", "title": "Two", "line": "Second"}
    ]"#;
    mount_deck("#deck-keys", json, JsValue::UNDEFINED, no_pulse()).unwrap();

    press("ArrowRight");
    assert!(root.inner_html().contains("02 / 02"));
    assert_eq!(current_hash(), "#2");

    press("ArrowRight");
    assert!(root.inner_html().contains("02 / 02"));

    press("ArrowLeft");
    assert!(root.inner_html().contains("01 / 02"));
}

#[wasm_bindgen_test]
fn missing_root_is_an_error() {
    assert!(mount("#does-not-exist", JsValue::UNDEFINED, no_pulse()).is_err());
}

#[wasm_bindgen_test]
fn pulse_overlay_is_created() {
    set_hash("#1");
    fresh_root("deck-pulse");
    mount("#deck-pulse", JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap();

    let pulse = document()
        .query_selector(".bg-pulse")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert!(pulse.class_list().contains("is-active"));
    assert!(pulse.style().get_property_value("--pulse-x").unwrap().ends_with('%'));
}

#[wasm_bindgen_test]
fn handled_keys_prevent_default() {
    set_hash("#1");
    fresh_root("deck-prevent");
    mount_deck("#deck-prevent", THREE_SLIDES, JsValue::UNDEFINED, no_pulse()).unwrap();

    assert!(!press("ArrowRight"));
    assert!(!press(" "));
    assert!(press("a"));
    assert!(press("Shift"));
}

#[wasm_bindgen_test]
fn keys_typed_into_form_controls_are_ignored() {
    set_hash("#1");
    let root = fresh_root("deck-input");
    mount_deck("#deck-input", THREE_SLIDES, JsValue::UNDEFINED, no_pulse()).unwrap();

    let input = body_child("input", "deck-input-field");
    assert!(press_on(&input, "ArrowRight"));
    assert!(root.inner_html().contains("01 / 03"));

    let textarea = body_child("textarea", "deck-input-area");
    assert!(press_on(&textarea, "ArrowRight"));
    assert!(root.inner_html().contains("01 / 03"));

    let plain = body_child("div", "deck-input-plain");
    assert!(!press_on(&plain, "ArrowRight"));
    assert!(root.inner_html().contains("02 / 03"));
}

#[wasm_bindgen_test]
fn clicks_advance_unless_on_button_or_link() {
    set_hash("#1");
    let root = fresh_root("deck-click");
    mount_deck("#deck-click", THREE_SLIDES, JsValue::UNDEFINED, no_pulse()).unwrap();

    let button = body_child("button", "deck-click-button");
    button.click();
    assert!(root.inner_html().contains("01 / 03"));

    let link = body_child("a", "deck-click-link");
    let label = document().create_element("span").unwrap();
    link.append_child(&label).unwrap();
    label.dyn_into::<HtmlElement>().unwrap().click();
    assert!(root.inner_html().contains("01 / 03"));

    let plain = body_child("div", "deck-click-plain");
    plain.click();
    assert!(root.inner_html().contains("02 / 03"));
}

#[wasm_bindgen_test]
fn hashchange_follows_valid_fragments_only() {
    set_hash("#1");
    let root = fresh_root("deck-hash");
    mount_deck("#deck-hash", THREE_SLIDES, JsValue::UNDEFINED, no_pulse()).unwrap();

    set_hash("#3");
    fire_hashchange();
    assert!(root.inner_html().contains("03 / 03"));

    for fragment in ["#0", "#abc", "#4", "#"] {
        set_hash(fragment);
        fire_hashchange();
        assert!(root.inner_html().contains("03 / 03"), "moved on {}", fragment);
    }

    set_hash("#2");
    fire_hashchange();
    assert!(root.inner_html().contains("02 / 03"));
}

#[wasm_bindgen_test]
fn remount_replaces_previous_listeners() {
    set_hash("#1");
    let first = fresh_root("deck-first");
    let second = fresh_root("deck-second");
    mount_deck("#deck-first", THREE_SLIDES, JsValue::UNDEFINED, no_pulse()).unwrap();
    mount_deck("#deck-second", THREE_SLIDES, JsValue::UNDEFINED, no_pulse()).unwrap();

    press("ArrowRight");

    assert!(first.inner_html().contains("01 / 03"));
    assert!(second.inner_html().contains("02 / 03"));
    assert_eq!(current_hash(), "#2");

    unmount();
    press("ArrowRight");
    assert!(second.inner_html().contains("02 / 03"));
}

#[wasm_bindgen_test]
fn rescheduling_keeps_a_single_interval() {
    let active = track_intervals();
    let mut timer = PulseTimer::new(web_sys::window().unwrap());
    assert!(!timer.is_running());

    timer.schedule(10_000).unwrap();
    timer.schedule(10_000).unwrap();
    assert_eq!(active.size(), 1);
    assert!(timer.is_running());

    timer.cancel();
    assert_eq!(active.size(), 0);
    assert!(!timer.is_running());
}

#[wasm_bindgen_test]
fn mounting_twice_shares_one_page_pulse() {
    set_hash("#1");
    let active = track_intervals();
    fresh_root("deck-pulse-a");
    fresh_root("deck-pulse-b");

    mount("#deck-pulse-a", JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap();
    mount("#deck-pulse-b", JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap();

    assert!(is_pulse_running());
    assert_eq!(active.size(), 1);
    assert_eq!(document().query_selector_all(".bg-pulse").unwrap().length(), 1);

    mount("#deck-pulse-b", JsValue::UNDEFINED, no_pulse()).unwrap();
    assert!(!is_pulse_running());
    assert_eq!(active.size(), 0);

    mount("#deck-pulse-a", JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap();
    unmount();
    assert!(!is_pulse_running());
    assert_eq!(active.size(), 0);
}
