//! WASM front end for the slide deck.
//!
//! This crate mounts a deck into a page element and wires the browser
//! events that drive it. Bundlers call `mount` (built-in deck) or
//! `mountDeck` (deck supplied as JSON) with a map of slide images.

mod app;
mod events;
mod logger;
mod measure;
mod pulse;

pub use app::App;
pub use events::Listeners;
pub use pulse::PulseTimer;

use deck_core::{builtin_deck, AssetMap, Deck, PresenterConfig};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// The deck currently driving the page, with the listeners feeding it.
struct Mounted {
    app: Rc<App>,
    _listeners: Listeners,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

/// Detach the mounted deck's listeners, if any.
fn take_mounted() -> Option<Rc<App>> {
    // Take first so the listeners drop outside the borrow
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
    mounted.map(|m| m.app)
}

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init(level);
}

/// Summary of a mounted deck, returned to JavaScript.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountResult {
    /// Number of slides in the deck.
    pub slide_count: usize,
    /// Section labels in timeline order.
    pub sections: Vec<String>,
    /// 1-based number of the slide shown first.
    pub current_slide: usize,
}

/// Mount the built-in deck.
///
/// # Arguments
/// * `root_selector` - CSS selector of the element that receives the slides
/// * `assets` - Optional object mapping slide numbers to image URLs
/// * `options` - Optional partial `PresenterConfig`
///
/// # Returns
/// A JavaScript object describing the mounted deck, or throws on error.
#[wasm_bindgen]
pub fn mount(root_selector: &str, assets: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let assets = parse_assets(assets).map_err(|e| JsValue::from_str(&e))?;
    let deck = build_deck(None, assets).map_err(|e| JsValue::from_str(&e))?;
    mount_impl(root_selector, deck, options)
}

/// Mount a deck described by a JSON array of slide records.
#[wasm_bindgen(js_name = mountDeck)]
pub fn mount_deck(
    root_selector: &str,
    deck_json: &str,
    assets: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let assets = parse_assets(assets).map_err(|e| JsValue::from_str(&e))?;
    let deck = build_deck(Some(deck_json), assets).map_err(|e| JsValue::from_str(&e))?;
    mount_impl(root_selector, deck, options)
}

fn mount_impl(root_selector: &str, deck: Deck, options: JsValue) -> Result<JsValue, JsValue> {
    let config = parse_options(options).map_err(|e| JsValue::from_str(&e))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Window has no document"))?;
    let root = document
        .query_selector(root_selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No element matches {}", root_selector)))?;

    if take_mounted().is_some() {
        log::info!("Replacing previously mounted deck");
    }

    let app = App::new(window, root, deck, config);
    app.render();
    let listeners = events::attach(&app)?;
    MOUNTED.with(|slot| {
        *slot.borrow_mut() = Some(Mounted {
            app: Rc::clone(&app),
            _listeners: listeners,
        });
    });
    app.start_pulse()?;

    let result = MountResult {
        slide_count: app.deck().len(),
        sections: app.deck().sections().to_vec(),
        current_slide: app.presenter().ordinal(),
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Detach the mounted deck and stop the background pulse.
///
/// The rendered slide stays in place; it just no longer responds to input.
#[wasm_bindgen]
pub fn unmount() {
    if take_mounted().is_some() {
        log::info!("Unmounted deck");
    }
    pulse::stop();
}

/// Whether the background pulse timer is armed.
#[wasm_bindgen(js_name = isPulseRunning)]
pub fn is_pulse_running() -> bool {
    pulse::is_page_pulse_running()
}

fn parse_assets(assets: JsValue) -> Result<BTreeMap<String, String>, String> {
    if assets.is_undefined() || assets.is_null() {
        return Ok(BTreeMap::new());
    }
    serde_wasm_bindgen::from_value(assets).map_err(|e| format!("Invalid asset map: {}", e))
}

fn parse_options(options: JsValue) -> Result<PresenterConfig, String> {
    if options.is_undefined() || options.is_null() {
        return Ok(PresenterConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| format!("Invalid options: {}", e))
}

/// Assemble a deck from optional JSON and a string-keyed asset map.
fn build_deck(deck_json: Option<&str>, assets: BTreeMap<String, String>) -> Result<Deck, String> {
    let deck = match deck_json {
        Some(json) => Deck::from_json(json).map_err(|e| e.to_string())?,
        None => builtin_deck(),
    };
    let assets = AssetMap::from_string_keys(assets).map_err(|e| e.to_string())?;
    deck.with_assets(&assets).map_err(|e| e.to_string())
}
