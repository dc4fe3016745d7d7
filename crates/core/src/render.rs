//! Slide markup rendering.
//!
//! Produces the complete markup for one slide. The browser layer swaps it
//! into the app root wholesale on every transition; there is no diffing.

use crate::config::PresenterConfig;
use crate::navigation::Presenter;
use crate::types::{Deck, Slide};

/// Fixed call-to-action block shown on slides flagged `cta`.
const CTA_MARKUP: &str = r#"<div class="cta-content">
  <div class="cta-qr">
    <img src="https://api.qrserver.com/v1/create-qr-code/?size=300x300&color=36b5c7&bgcolor=ffffff&data=https://www.sas-am.com/services/ai-ml-for-smarter-asset-management?utm_source=MaximoLive2025%26utm_medium=presentation%26utm_campaign=EdgeAI" alt="QR Code to SAS-AM AI/ML Services" class="qr-code" />
    <p class="qr-label">Scan to learn more about our AI/ML services</p>
  </div>
  <div class="search-pill">
    <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor" class="search-icon">
      <path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/>
    </svg>
    <span class="search-text">Edge AI Asset Management SAS-AM</span>
  </div>
  <div class="cta-contact">
    <svg width="40" height="40" viewBox="0 0 24 24" fill="currentColor" class="email-icon">
      <path d="M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z"/>
    </svg>
    <span class="email-address">EdgeAI@SAS-AM.com</span>
  </div>
</div>"#;

/// Selector of the timeline list, measured after layout.
pub const TIMELINE_LIST_SELECTOR: &str = ".timeline__list";

/// Selector of the dots inside the timeline list.
pub const TIMELINE_DOT_SELECTOR: &str = ".timeline__dot";

/// Selector of the slide container.
pub const SLIDE_SELECTOR: &str = ".slide";

/// Position of a timeline stage relative to the current section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    /// A section already passed.
    Complete,
    /// The section of the current slide.
    Active,
    /// A section still ahead.
    Upcoming,
}

impl StageState {
    fn class(self) -> &'static str {
        match self {
            Self::Complete => "is-complete",
            Self::Active => "is-active",
            Self::Upcoming => "",
        }
    }
}

/// Index of the current slide's section, falling back to the first.
pub fn active_section_index(deck: &Deck, presenter: &Presenter) -> usize {
    deck.slide(presenter.index())
        .and_then(|slide| deck.section_index(&slide.section))
        .unwrap_or(0)
}

/// State of every timeline stage for the current slide.
pub fn stage_states(deck: &Deck, presenter: &Presenter) -> Vec<StageState> {
    let active = active_section_index(deck, presenter);
    (0..deck.sections().len())
        .map(|idx| match idx.cmp(&active) {
            std::cmp::Ordering::Less => StageState::Complete,
            std::cmp::Ordering::Equal => StageState::Active,
            std::cmp::Ordering::Greater => StageState::Upcoming,
        })
        .collect()
}

/// Escape text for use inside a double-quoted HTML attribute.
///
/// Slide text fields are trusted markup and inserted as-is; only values
/// placed in attributes are escaped.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders slide markup for a deck.
#[derive(Debug, Clone, Default)]
pub struct SlideRenderer {
    config: PresenterConfig,
}

impl SlideRenderer {
    /// Create a renderer with default placeholder text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer using the placeholder settings in `config`.
    pub fn with_config(config: PresenterConfig) -> Self {
        Self { config }
    }

    /// Render the slide under the cursor.
    ///
    /// Returns an empty string if the cursor is past the deck, which only
    /// happens when the presenter was built for a different deck.
    pub fn render(&self, deck: &Deck, presenter: &Presenter) -> String {
        let Some(slide) = deck.slide(presenter.index()) else {
            log::warn!(
                "Cursor {} is outside a deck of {} slides",
                presenter.index(),
                deck.len()
            );
            return String::new();
        };

        let classes = if slide.hero {
            "slide slide--hero"
        } else {
            "slide slide--with-media"
        };
        let body_classes = if slide.hero {
            "slide__body"
        } else {
            "slide__body slide__body--split"
        };

        let timeline = if slide.hero {
            String::new()
        } else {
            self.render_timeline(deck, presenter)
        };

        let subtitle = slide
            .subtitle
            .as_deref()
            .map(|s| format!(r#"<p class="slide__subtitle">{}</p>"#, s))
            .unwrap_or_default();

        let cta = if slide.cta { CTA_MARKUP } else { "" };

        format!(
            r#"<div class="{classes}" role="presentation" aria-live="polite">
  <div class="progress" style="--progress:{progress}%"></div>
  {timeline}
  {header}
  <main class="{body_classes}">
    <div class="slide__content">
      <h1>{line}</h1>
      {subtitle}
      {cta}
    </div>
    {media}
  </main>
  <footer class="slide__footer">
    <span>{notes}</span>
  </footer>
</div>"#,
            progress = presenter.progress(),
            header = self.render_header(slide, presenter),
            line = slide.line,
            media = self.render_media(slide),
            notes = slide.notes.as_deref().unwrap_or(""),
        )
    }

    fn render_timeline(&self, deck: &Deck, presenter: &Presenter) -> String {
        let items: Vec<String> = deck
            .sections()
            .iter()
            .zip(stage_states(deck, presenter))
            .map(|(section, state)| {
                let current = if state == StageState::Active {
                    r#" aria-current="step""#
                } else {
                    ""
                };
                format!(
                    r#"<li class="timeline__item {}"{}>
        <span class="timeline__dot" aria-hidden="true"></span>
        <span class="timeline__label">{}</span>
      </li>"#,
                    state.class(),
                    current,
                    section
                )
            })
            .collect();

        format!(
            r#"<nav class="timeline" role="navigation" aria-label="Presentation sections">
    <ol class="timeline__list">
      {}
    </ol>
  </nav>"#,
            items.join("\n      ")
        )
    }

    fn render_header(&self, slide: &Slide, presenter: &Presenter) -> String {
        if slide.hero {
            format!(
                r#"<header class="slide__header slide__header--hero">
    <div class="slide__meta">{}</div>
  </header>"#,
                presenter.counter()
            )
        } else {
            format!(
                r#"<header class="slide__header">
    <div class="slide__title">{}</div>
    <div class="slide__meta">{}</div>
  </header>"#,
                slide.title,
                presenter.counter()
            )
        }
    }

    fn render_media(&self, slide: &Slide) -> String {
        if let Some(src) = slide.image.as_deref() {
            return format!(
                r#"<figure class="slide__media">
      <img src="{}" alt="{}" loading="lazy" />
    </figure>"#,
                escape_attr(src),
                escape_attr(slide.image_alt.as_deref().unwrap_or(""))
            );
        }

        if slide.hero {
            return String::new();
        }

        format!(
            r#"<figure class="slide__media slide__media--fallback">
      <div class="slide__media-card">
        <span class="slide__media-label">{}</span>
        <p>{}</p>
      </div>
    </figure>"#,
            self.config.placeholder_label,
            slide
                .visual
                .as_deref()
                .unwrap_or(&self.config.placeholder_text)
        )
    }
}
