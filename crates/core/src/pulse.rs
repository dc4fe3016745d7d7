//! Decorative background pulse placement.

use rand::Rng;

/// Class of the full-page overlay element.
pub const PULSE_CLASS: &str = "bg-pulse";

/// Class toggled to restart the pulse animation.
pub const PULSE_ACTIVE_CLASS: &str = "is-active";

/// Custom properties written on the overlay.
pub const PULSE_X_VAR: &str = "--pulse-x";
pub const PULSE_Y_VAR: &str = "--pulse-y";
pub const PULSE_ROTATION_VAR: &str = "--pulse-rotation";

/// Position and angle for one pulse.
///
/// Coordinates are percentages kept in `20..=80` so the glow never hugs an
/// edge; rotation is degrees in `0..=360`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseParams {
    pub x: u32,
    pub y: u32,
    pub rotation: u32,
}

impl PulseParams {
    /// Pick a random placement.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(20..=80),
            y: rng.random_range(20..=80),
            rotation: rng.random_range(0..=360),
        }
    }

    /// `(property, value)` pairs ready to set on the overlay element.
    pub fn style_properties(&self) -> [(&'static str, String); 3] {
        [
            (PULSE_X_VAR, format!("{}%", self.x)),
            (PULSE_Y_VAR, format!("{}%", self.y)),
            (PULSE_ROTATION_VAR, format!("{}deg", self.rotation)),
        ]
    }
}
