//! Core domain for the browser slide deck: slide records, cursor
//! navigation, markup rendering and timeline geometry.

pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod pulse;
pub mod render;
pub mod timeline;
pub mod types;

pub use config::PresenterConfig;
pub use content::{builtin_deck, builtin_slides};
pub use error::{Error, Result};
pub use navigation::{parse_fragment, NavAction, Presenter, Transition};
pub use pulse::PulseParams;
pub use render::{SlideRenderer, StageState};
pub use timeline::{Span, TimelineGeometry};
pub use types::{AssetMap, Deck, SectionSpan, Slide};
