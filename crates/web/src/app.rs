//! A deck mounted into a page.

use crate::measure::measure_timeline;
use crate::pulse;
use deck_core::render::{active_section_index, TIMELINE_LIST_SELECTOR};
use deck_core::{Deck, NavAction, Presenter, PresenterConfig, SlideRenderer, Transition};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

/// Everything the event listeners share.
///
/// Held in an `Rc` captured by each listener; the page keeps at most one
/// mounted at a time. The cursor sits behind a `RefCell`; borrows end
/// before any DOM call so a listener fired synchronously from inside one
/// never finds it borrowed.
pub struct App {
    window: Window,
    root: Element,
    deck: Deck,
    renderer: SlideRenderer,
    config: PresenterConfig,
    presenter: RefCell<Presenter>,
}

impl App {
    /// Create an app for `deck` rendering into `root`, starting at the slide
    /// named by the current URL fragment.
    pub fn new(window: Window, root: Element, deck: Deck, config: PresenterConfig) -> Rc<Self> {
        let fragment = window.location().hash().unwrap_or_default();
        let presenter = Presenter::from_fragment(deck.len(), &fragment);
        log::info!(
            "Mounting deck of {} slides at slide {}",
            deck.len(),
            presenter.ordinal()
        );

        Rc::new(Self {
            renderer: SlideRenderer::with_config(config.clone()),
            presenter: RefCell::new(presenter),
            window,
            root,
            deck,
            config,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current cursor, copied out of the cell.
    pub fn presenter(&self) -> Presenter {
        self.presenter.borrow().clone()
    }

    /// Replace the root's content with the current slide.
    pub fn render(self: &Rc<Self>) {
        let markup = {
            let presenter = self.presenter.borrow();
            self.renderer.render(&self.deck, &presenter)
        };
        self.root.set_inner_html(&markup);

        self.schedule_measurement();
        if self.config.sync_fragment {
            self.sync_fragment();
        }
    }

    /// Apply a keyboard or pointer action, re-rendering if the cursor moved.
    pub fn navigate(self: &Rc<Self>, action: NavAction) -> Transition {
        let transition = self.presenter.borrow_mut().apply(action);
        if transition.is_moved() {
            self.render();
        }
        transition
    }

    /// Follow the URL fragment after a `hashchange`.
    pub fn follow_fragment(self: &Rc<Self>) -> Transition {
        let fragment = self.window.location().hash().unwrap_or_default();
        let transition = self.presenter.borrow_mut().jump_to_fragment(&fragment);
        if transition.is_moved() {
            self.render();
        }
        transition
    }

    /// Measure the timeline on the next animation frame.
    pub fn schedule_measurement(self: &Rc<Self>) {
        let Ok(Some(list)) = self.root.query_selector(TIMELINE_LIST_SELECTOR) else {
            return;
        };

        let app = Rc::clone(self);
        let callback = Closure::once_into_js(move || {
            let active = active_section_index(&app.deck, &app.presenter.borrow());
            measure_timeline(&list, active);
        });
        if let Err(e) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            log::debug!("requestAnimationFrame failed: {:?}", e);
        }
    }

    /// Write the current slide's fragment without adding a history entry.
    fn sync_fragment(&self) {
        let target = self.presenter.borrow().fragment();
        let current = self.window.location().hash().unwrap_or_default();
        if current == target {
            return;
        }

        let result = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&target)));
        if let Err(e) = result {
            log::debug!("Could not update fragment: {:?}", e);
        }
    }

    /// Arm the page's background pulse with this deck's settings, or stop
    /// it if this deck disables it.
    pub fn start_pulse(&self) -> Result<(), JsValue> {
        if !self.config.pulse_enabled {
            pulse::stop();
            return Ok(());
        }
        pulse::rearm(&self.window, self.config.pulse_interval_ms)
    }
}
