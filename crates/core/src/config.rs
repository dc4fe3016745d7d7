//! Presenter configuration.

use serde::{Deserialize, Deserializer, Serialize};

/// Default time between background pulses.
pub const DEFAULT_PULSE_INTERVAL_MS: u32 = 20_000;

/// Default caption for the media placeholder card.
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Visual to be provided.";

/// Default label above the placeholder caption.
pub const DEFAULT_PLACEHOLDER_LABEL: &str = "Concept Visual";

/// Settings for a mounted deck.
///
/// Every field has a default, so hosts only pass what they want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresenterConfig {
    /// Milliseconds between background pulses. Never zero.
    #[serde(deserialize_with = "deserialize_interval")]
    pub pulse_interval_ms: u32,

    /// Whether the decorative background pulse runs at all.
    pub pulse_enabled: bool,

    /// Whether the URL fragment follows the current slide.
    pub sync_fragment: bool,

    /// Caption used when a slide has neither an image nor a `visual`.
    pub placeholder_text: String,

    /// Label shown on the placeholder card.
    pub placeholder_label: String,
}

/// Read an interval, raising zero to one millisecond.
fn deserialize_interval<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    u32::deserialize(deserializer).map(|ms| ms.max(1))
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            pulse_interval_ms: DEFAULT_PULSE_INTERVAL_MS,
            pulse_enabled: true,
            sync_fragment: true,
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            placeholder_label: DEFAULT_PLACEHOLDER_LABEL.to_string(),
        }
    }
}

impl PresenterConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pulse interval.
    pub fn with_pulse_interval_ms(mut self, interval_ms: u32) -> Self {
        self.pulse_interval_ms = interval_ms.max(1); // Zero would spin the timer
        self
    }

    /// Enable or disable the background pulse.
    pub fn with_pulse_enabled(mut self, enabled: bool) -> Self {
        self.pulse_enabled = enabled;
        self
    }

    /// Enable or disable URL fragment sync.
    pub fn with_sync_fragment(mut self, sync: bool) -> Self {
        self.sync_fragment = sync;
        self
    }

    /// Set the placeholder caption.
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PresenterConfig::new();
        assert_eq!(config.pulse_interval_ms, 20_000);
        assert!(config.pulse_enabled);
        assert!(config.sync_fragment);
        assert_eq!(config.placeholder_text, "Visual to be provided.");
        assert_eq!(config.placeholder_label, "Concept Visual");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PresenterConfig =
            serde_json::from_str(r#"{"pulseIntervalMs": 5000, "pulseEnabled": false}"#).unwrap();

        assert_eq!(config.pulse_interval_ms, 5000);
        assert!(!config.pulse_enabled);
        assert!(config.sync_fragment);
        assert_eq!(config.placeholder_text, DEFAULT_PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_zero_interval_from_json_raised_to_one() {
        let config: PresenterConfig = serde_json::from_str(r#"{"pulseIntervalMs": 0}"#).unwrap();
        assert_eq!(config.pulse_interval_ms, 1);
    }

    #[test]
    fn test_pulse_interval_at_least_one() {
        let config = PresenterConfig::new().with_pulse_interval_ms(0);
        assert_eq!(config.pulse_interval_ms, 1);
    }
}
