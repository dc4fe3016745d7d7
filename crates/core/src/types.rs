//! Domain types for representing a slide deck.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single slide record.
///
/// Slides are immutable once the deck is built. Field names serialize in
/// camelCase so deck files read the same as the records the page was
/// originally authored with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slide {
    /// Grouping label shown as a timeline stage.
    pub section: String,

    /// Short title shown in the slide header.
    pub title: String,

    /// Headline markup. May contain inline HTML such as `<br />`.
    pub line: String,

    /// Optional line under the headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Image URL for the media panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Alt text for `image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,

    /// Caption for the placeholder card shown when there is no image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<String>,

    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Full-bleed layout without timeline or media placeholder.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hero: bool,

    /// Render the call-to-action block.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cta: bool,
}

impl Slide {
    /// Create a slide with the required fields.
    pub fn new(
        section: impl Into<String>,
        title: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            title: title.into(),
            line: line.into(),
            ..Self::default()
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the placeholder caption.
    pub fn with_visual(mut self, visual: impl Into<String>) -> Self {
        self.visual = Some(visual.into());
        self
    }

    /// Set an image and its alt text directly.
    pub fn with_image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self.image_alt = Some(alt.into());
        self
    }

    /// Set the footer notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Mark as a hero slide.
    pub fn hero(mut self) -> Self {
        self.hero = true;
        self
    }

    /// Mark as carrying the call-to-action block.
    pub fn with_cta(mut self) -> Self {
        self.cta = true;
        self
    }
}

/// A contiguous run of slides sharing a section label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Section label.
    pub name: String,

    /// 1-based number of the first slide in the run.
    pub first: usize,

    /// 1-based number of the last slide in the run.
    pub last: usize,
}

/// An ordered, non-empty list of slides with its derived section list.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    sections: Vec<String>,
}

impl Deck {
    /// Build a deck, deriving the section list in first-seen order.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyDeck);
        }

        let mut sections: Vec<String> = Vec::new();
        for slide in &slides {
            if !sections.contains(&slide.section) {
                sections.push(slide.section.clone());
            }
        }

        log::debug!(
            "Built deck with {} slides in {} sections",
            slides.len(),
            sections.len()
        );

        Ok(Self { slides, sections })
    }

    /// Parse a deck from a JSON array of slide records.
    pub fn from_json(json: &str) -> Result<Self> {
        let slides: Vec<Slide> = serde_json::from_str(json)?;
        Self::new(slides)
    }

    /// Serialize the slide records back to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.slides)?)
    }

    /// Number of slides. Never zero.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// All slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at a 0-based index.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Distinct section labels in first-seen order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Position of a section label in the section list.
    pub fn section_index(&self, section: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == section)
    }

    /// Runs of consecutive slides sharing a section.
    ///
    /// A section that reappears later in the deck yields a second span.
    pub fn section_spans(&self) -> Vec<SectionSpan> {
        let mut spans: Vec<SectionSpan> = Vec::new();

        for (idx, slide) in self.slides.iter().enumerate() {
            let number = idx + 1;
            match spans.last_mut() {
                Some(span) if span.name == slide.section => span.last = number,
                _ => spans.push(SectionSpan {
                    name: slide.section.clone(),
                    first: number,
                    last: number,
                }),
            }
        }

        spans
    }

    /// Attach host-supplied images to the slides.
    ///
    /// Non-hero slide `N` takes `assets[N]`, falling back to any image it
    /// already had. Hero slides never take a mapped asset. Every slide
    /// without alt text gets a numbered default.
    pub fn with_assets(mut self, assets: &AssetMap) -> Result<Self> {
        let total = self.slides.len();
        if let Some(ordinal) = assets.ordinals().find(|&n| n == 0 || n > total) {
            return Err(Error::AssetOrdinalOutOfRange { ordinal, total });
        }

        for (idx, slide) in self.slides.iter_mut().enumerate() {
            let number = idx + 1;

            if !slide.hero {
                if let Some(src) = assets.get(number) {
                    slide.image = Some(src.to_string());
                }
            }

            if slide.image_alt.is_none() {
                slide.image_alt = Some(format!("Slide {} visual concept placeholder.", number));
            }
        }

        log::debug!("Applied {} assets to deck", assets.len());

        Ok(self)
    }
}

/// Mapping from 1-based slide number to an image reference.
///
/// Supplied by whatever bundles the page, so the renderer does not care how
/// assets are located.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetMap {
    entries: BTreeMap<usize, String>,
}

impl AssetMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from string keys, as found in a JS object or JSON file.
    pub fn from_string_keys<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            let key = key.as_ref();
            let ordinal = key
                .trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidAssetKey(key.to_string()))?;
            map.insert(ordinal, value);
        }
        Ok(map)
    }

    /// Map slide `ordinal` to `src`, replacing any previous entry.
    pub fn insert(&mut self, ordinal: usize, src: impl Into<String>) {
        self.entries.insert(ordinal, src.into());
    }

    /// Image for slide `ordinal`.
    pub fn get(&self, ordinal: usize) -> Option<&str> {
        self.entries.get(&ordinal).map(String::as_str)
    }

    /// Slide numbers that have an entry, ascending.
    pub fn ordinals(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for AssetMap {
    fn from_iter<T: IntoIterator<Item = (usize, S)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (ordinal, src) in iter {
            map.insert(ordinal, src);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slides() -> Vec<Slide> {
        vec![
            Slide::new("Opening", "Intro", "Hello").hero(),
            Slide::new("The Setup", "One", "First point"),
            Slide::new("The Setup", "Two", "Second point"),
            Slide::new("The Problem", "Three", "Third point"),
            Slide::new("Connect", "Bye", "Thanks").hero().with_cta(),
        ]
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(Error::EmptyDeck)));
    }

    #[test]
    fn test_sections_first_seen_order() {
        let mut slides = sample_slides();
        slides.push(Slide::new("The Setup", "Again", "Back to setup"));
        let deck = Deck::new(slides).unwrap();

        assert_eq!(
            deck.sections(),
            &["Opening", "The Setup", "The Problem", "Connect"]
        );
        assert_eq!(deck.section_index("The Problem"), Some(2));
        assert_eq!(deck.section_index("Missing"), None);
    }

    #[test]
    fn test_section_spans() {
        let deck = Deck::new(sample_slides()).unwrap();
        let spans = deck.section_spans();

        assert_eq!(spans.len(), 4);
        assert_eq!(
            spans[1],
            SectionSpan {
                name: "The Setup".to_string(),
                first: 2,
                last: 3,
            }
        );
        assert_eq!(spans[3].first, 5);
        assert_eq!(spans[3].last, 5);
    }

    #[test]
    fn test_assets_skip_hero_slides() {
        let assets: AssetMap = vec![(1, "one.png"), (2, "two.png")].into_iter().collect();
        let deck = Deck::new(sample_slides())
            .unwrap()
            .with_assets(&assets)
            .unwrap();

        assert_eq!(deck.slide(0).unwrap().image, None);
        assert_eq!(deck.slide(1).unwrap().image.as_deref(), Some("two.png"));
        assert_eq!(deck.slide(2).unwrap().image, None);
    }

    #[test]
    fn test_assets_fill_default_alt() {
        let mut slides = sample_slides();
        slides[2].image_alt = Some("Custom alt".to_string());
        let deck = Deck::new(slides)
            .unwrap()
            .with_assets(&AssetMap::new())
            .unwrap();

        assert_eq!(
            deck.slide(0).unwrap().image_alt.as_deref(),
            Some("Slide 1 visual concept placeholder.")
        );
        assert_eq!(deck.slide(2).unwrap().image_alt.as_deref(), Some("Custom alt"));
    }

    #[test]
    fn test_hero_keeps_manual_image() {
        let mut slides = sample_slides();
        slides[0] = slides[0].clone().with_image("hero.png", "Hero");
        let assets: AssetMap = vec![(1, "auto.png")].into_iter().collect();
        let deck = Deck::new(slides).unwrap().with_assets(&assets).unwrap();

        assert_eq!(deck.slide(0).unwrap().image.as_deref(), Some("hero.png"));
    }

    #[test]
    fn test_unmapped_slide_keeps_manual_image() {
        let mut slides = sample_slides();
        slides[1] = slides[1].clone().with_image("manual.png", "Manual");
        slides[2] = slides[2].clone().with_image("replaced.png", "Replaced");
        let assets: AssetMap = vec![(3, "auto.png")].into_iter().collect();
        let deck = Deck::new(slides).unwrap().with_assets(&assets).unwrap();

        assert_eq!(deck.slide(1).unwrap().image.as_deref(), Some("manual.png"));
        assert_eq!(deck.slide(2).unwrap().image.as_deref(), Some("auto.png"));
        assert_eq!(deck.slide(3).unwrap().image, None);
    }

    #[test]
    fn test_asset_ordinal_out_of_range() {
        let deck = Deck::new(sample_slides()).unwrap();

        let too_high: AssetMap = vec![(6, "x.png")].into_iter().collect();
        assert!(matches!(
            deck.clone().with_assets(&too_high),
            Err(Error::AssetOrdinalOutOfRange { ordinal: 6, total: 5 })
        ));

        let zero: AssetMap = vec![(0, "x.png")].into_iter().collect();
        assert!(deck.with_assets(&zero).is_err());
    }

    #[test]
    fn test_asset_map_from_string_keys() {
        let map = AssetMap::from_string_keys(vec![("3", "c.png"), (" 10 ", "j.png")]).unwrap();
        assert_eq!(map.get(3), Some("c.png"));
        assert_eq!(map.get(10), Some("j.png"));
        assert_eq!(map.len(), 2);

        let bad = AssetMap::from_string_keys(vec![("three", "c.png")]);
        assert!(matches!(bad, Err(Error::InvalidAssetKey(k)) if k == "three"));
    }

    #[test]
    fn test_deck_from_json() {
        let json = r#"[
            {"section": "Opening", "title": "Hi", "line": "Welcome", "hero": true},
            {"section": "Body", "title": "Point", "line": "Detail", "imageAlt": "A chart", "visual": "Chart"}
        ]"#;
        let deck = Deck::from_json(json).unwrap();

        assert_eq!(deck.len(), 2);
        assert!(deck.slide(0).unwrap().hero);
        assert_eq!(deck.slide(1).unwrap().image_alt.as_deref(), Some("A chart"));
        assert_eq!(deck.slide(1).unwrap().visual.as_deref(), Some("Chart"));
    }

    #[test]
    fn test_deck_from_invalid_json() {
        assert!(matches!(Deck::from_json("{"), Err(Error::InvalidDeck(_))));
        assert!(matches!(Deck::from_json("[]"), Err(Error::EmptyDeck)));
    }
}
