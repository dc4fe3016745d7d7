//! DOM event wiring.
//!
//! Listeners are owned by a [`Listeners`] set and removed from their
//! targets when it is dropped, so remounting replaces the previous deck's
//! handlers instead of adding to them.

use crate::app::App;
use deck_core::NavAction;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    KeyboardEvent,
};

/// Whether key presses on `target` belong to a form control.
fn is_text_entry(target: Option<&EventTarget>) -> bool {
    target.is_some_and(|t| {
        t.dyn_ref::<HtmlInputElement>().is_some()
            || t.dyn_ref::<HtmlTextAreaElement>().is_some()
            || t.dyn_ref::<HtmlSelectElement>().is_some()
    })
}

/// Whether a click on `target` landed inside a button or link.
fn is_interactive(target: Option<&EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<Element>())
        .and_then(|el| el.closest("button, a").ok().flatten())
        .is_some()
}

struct Registration {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Event listeners registered for one mounted deck.
#[derive(Default)]
pub struct Listeners {
    registrations: Vec<Registration>,
}

impl Listeners {
    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.registrations.push(Registration {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for registration in self.registrations.drain(..) {
            let callback = registration.closure.as_ref().unchecked_ref();
            if let Err(e) = registration
                .target
                .remove_event_listener_with_callback(registration.event, callback)
            {
                log::debug!("Could not remove {} listener: {:?}", registration.event, e);
            }
        }
    }
}

/// Register keyboard, pointer, fragment, resize and font listeners.
pub fn attach(app: &Rc<App>) -> Result<Listeners, JsValue> {
    let window = app.window().clone();
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Window has no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;

    let mut listeners = Listeners::default();

    let keyboard_app = Rc::clone(app);
    let on_key = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if is_text_entry(event.target().as_ref()) {
            return;
        }
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if let Some(action) = NavAction::from_key(&key) {
            event.prevent_default();
            keyboard_app.navigate(action);
        }
    });
    listeners.listen(&window, "keydown", on_key)?;

    let click_app = Rc::clone(app);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if is_interactive(event.target().as_ref()) {
            return;
        }
        click_app.navigate(NavAction::Next);
    });
    listeners.listen(&body, "click", on_click)?;

    let hash_app = Rc::clone(app);
    let on_hash = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        hash_app.follow_fragment();
    });
    listeners.listen(&window, "hashchange", on_hash)?;

    let resize_app = Rc::clone(app);
    let on_resize = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        resize_app.schedule_measurement();
    });
    listeners.listen(&window, "resize", on_resize)?;

    // Font metrics move the dots, so measure again once fonts are in.
    if let Ok(ready) = document.fonts().ready() {
        let fonts_app: Weak<App> = Rc::downgrade(app);
        let on_ready = Closure::once(move |_: JsValue| {
            if let Some(app) = fonts_app.upgrade() {
                app.schedule_measurement();
            }
        });
        let on_error = Closure::once(|_: JsValue| {});
        // Only the handlers matter; the chained promise is not awaited
        let _ = ready.then(&on_ready).catch(&on_error);
        on_ready.forget();
        on_error.forget();
    }

    log::debug!("Attached {} deck listeners", listeners.len());
    Ok(listeners)
}
