//! Repeating background pulse.

use crate::measure::set_style;
use deck_core::pulse::{PULSE_ACTIVE_CLASS, PULSE_CLASS};
use deck_core::PulseParams;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Find the overlay element, creating it under `<body>` if missing.
fn ensure_pulse_element(document: &Document) -> Result<HtmlElement, JsValue> {
    let selector = format!(".{}", PULSE_CLASS);
    if let Some(existing) = document.query_selector(&selector)? {
        return existing.dyn_into::<HtmlElement>().map_err(JsValue::from);
    }

    let pulse = document.create_element("div")?;
    pulse.set_class_name(PULSE_CLASS);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;
    body.append_child(&pulse)?;

    pulse.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// Move the pulse somewhere new and restart its animation.
fn trigger_pulse(document: &Document, rng: &mut SmallRng) -> Result<(), JsValue> {
    let pulse = ensure_pulse_element(document)?;
    let params = PulseParams::random(rng);

    for (name, value) in params.style_properties() {
        set_style(&pulse, name, &value);
    }

    let classes = pulse.class_list();
    classes.remove_1(PULSE_ACTIVE_CLASS)?;
    // Reading layout forces a reflow so re-adding the class restarts the animation
    let _ = pulse.offset_width();
    classes.add_1(PULSE_ACTIVE_CLASS)?;

    Ok(())
}

thread_local! {
    /// The page's single pulse timer, shared by every mount.
    static PAGE_PULSE: RefCell<Option<PulseTimer>> = const { RefCell::new(None) };
}

/// Arm the page's pulse timer, replacing any interval already running.
pub fn rearm(window: &Window, interval_ms: u32) -> Result<(), JsValue> {
    PAGE_PULSE.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| PulseTimer::new(window.clone()))
            .schedule(interval_ms)
    })
}

/// Stop the page's pulse timer if it is running.
pub fn stop() {
    PAGE_PULSE.with(|slot| {
        if let Some(timer) = slot.borrow_mut().as_mut() {
            timer.cancel();
        }
    });
}

/// Whether the page's pulse timer is armed.
pub fn is_page_pulse_running() -> bool {
    PAGE_PULSE.with(|slot| slot.borrow().as_ref().is_some_and(PulseTimer::is_running))
}

/// Owns the interval driving the pulse.
///
/// Re-arming clears the previous interval. Dropping the timer stops it.
pub struct PulseTimer {
    window: Window,
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl PulseTimer {
    /// Create an idle timer.
    pub fn new(window: Window) -> Self {
        Self {
            window,
            handle: None,
            callback: None,
        }
    }

    /// Fire one pulse now and then every `interval_ms`.
    pub fn schedule(&mut self, interval_ms: u32) -> Result<(), JsValue> {
        self.cancel();

        let document = self
            .window
            .document()
            .ok_or_else(|| JsValue::from_str("Window has no document"))?;
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);

        trigger_pulse(&document, &mut rng)?;

        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = trigger_pulse(&document, &mut rng) {
                log::warn!("Background pulse failed: {:?}", e);
            }
        });
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )?;

        log::debug!("Background pulse every {} ms", interval_ms);
        self.handle = Some(handle);
        self.callback = Some(callback);
        Ok(())
    }

    /// Stop the pulse.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
        self.callback = None;
    }

    /// Whether an interval is armed.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for PulseTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
