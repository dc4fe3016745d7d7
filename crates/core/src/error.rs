//! Error types for loading and assembling a slide deck.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a deck.
///
/// Navigation and rendering never fail; these only surface while a deck is
/// being assembled from content and assets.
#[derive(Error, Debug)]
pub enum Error {
    /// A deck needs at least one slide for the cursor to point at.
    #[error("Deck has no slides")]
    EmptyDeck,

    /// An asset was keyed to a slide number the deck does not have.
    #[error("Asset ordinal {ordinal} is outside the deck (1..={total})")]
    AssetOrdinalOutOfRange { ordinal: usize, total: usize },

    /// An asset key that is not a slide number.
    #[error("Asset key {0:?} is not a slide number")]
    InvalidAssetKey(String),

    /// The deck description could not be parsed.
    #[error("Invalid deck description: {0}")]
    InvalidDeck(#[from] serde_json::Error),
}
