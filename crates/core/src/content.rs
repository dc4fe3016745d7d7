//! The built-in "Maximo Edge Intelligence" deck.

use crate::types::{Deck, Slide};

/// Slide records for the built-in deck, in presentation order.
pub fn builtin_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "Opening",
            "Maximo Edge Intelligence",
            "Intelligent Maximo Integration:<br />Edge AI That Works Where Your Assets Do",
        )
        .with_subtitle("Shane Scriven - Founder+Managing Director SAS-AM")
        .hero(),
        Slide::new(
            "The Setup",
            "Reframing Maximo",
            "Your million-dollar Maximo system might be your most expensive filing cabinet.",
        )
        .with_visual("Overstuffed filing cabinet blended with a Maximo dashboard screenshot."),
        Slide::new(
            "The Setup",
            "Data Waste",
            "Every sensor reading in your CMMS represents a missed opportunity.",
        )
        .with_visual("Stream of sensor data falling into a drain labelled \u{201c}unused\u{201d}."),
        Slide::new(
            "The Setup",
            "Collective Intelligence",
            "What if your assets could learn from each other without sharing secrets?",
        )
        .with_visual("Connected network of trams exchanging light beams while data stays local."),
        Slide::new(
            "The Problem",
            "Siloed Failures",
            "Bus 120 breaks down, but Bus 89 learned nothing from it.",
        )
        .with_visual("Broken bus isolated from others still running."),
        Slide::new(
            "The Problem",
            "Depot Silos",
            "Your condition monitoring data sits in silos across sites.",
        )
        .with_visual("Multiple depots each guarding their own server racks."),
        Slide::new(
            "The Problem",
            "Latency Limits",
            "Cloud analytics can't make split-second maintenance decisions.",
        )
        .with_visual("Cloud icon struggling to reach a flashing warning light."),
        Slide::new(
            "The Problem",
            "Privacy Lockdown",
            "Privacy concerns keep your best asset data locked away.",
        )
        .with_visual("Padlock overlaid on maintenance telemetry lines."),
        Slide::new(
            "The Solution",
            "Edge Federated ML",
            "Edge federated ML: Intelligence at the asset, learning across the fleet.",
        )
        .with_visual("Distributed nodes sharing model weights via arrows."),
        Slide::new(
            "The Solution",
            "Local Training",
            "Train the model where the asset lives, share the learning everywhere.",
        )
        .with_visual("Tram with onboard processor broadcasting anonymised insights."),
        Slide::new(
            "The Solution",
            "Zero Leakage",
            "Local decisions, global intelligence, zero data exposure.",
        )
        .with_visual("Shielded data packets with outward arrows."),
        Slide::new(
            "The Solution",
            "Pantograph Wisdom",
            "Your pantograph learns from every other pantograph without leaving home.",
        )
        .with_visual("Pantographs linked in a neural network pattern."),
        Slide::new(
            "The Solution",
            "Real-Time Detection",
            "Real-time anomaly detection where milliseconds matter.",
        )
        .with_visual("Oscilloscope trace highlighting an anomaly with a millisecond timer."),
        Slide::new(
            "The Solution",
            "Assets as Scientists",
            "Edge computing makes every asset a data scientist.",
        )
        .with_visual("Assets wearing \u{201c}data scientist\u{201d} badges analysing charts."),
        Slide::new(
            "Implementation",
            "Pilot Focus",
            "Start small: One asset type, one failure mode, one depot.",
        )
        .with_visual("Spotlight highlighting a single asset in a depot."),
        Slide::new(
            "Implementation",
            "Speaking Maximo",
            "Edge devices speak Maximo's language: REST APIs, MQTT, and message queues.",
        )
        .with_visual("Protocol icons linking edge devices to Maximo logo."),
        Slide::new(
            "Implementation",
            "Workflow Friendly",
            "Integration patterns that don't break your existing workflows.",
        )
        .with_visual("Puzzle pieces fitting seamlessly into a process diagram."),
        Slide::new(
            "The Future",
            "Self-Writing Schedules",
            "Maintenance schedules that write themselves based on fleet wisdom.",
        )
        .with_visual("Calendar auto-populating maintenance tasks."),
        Slide::new(
            "The Future",
            "Intelligent Era",
            "Welcome to the era of truly intelligent asset management.",
        )
        .with_visual("Smart city transit network glowing with connected intelligence."),
        Slide::new(
            "Connect",
            "Let's Connect",
            "Ready to Transform Your Asset Management?",
        )
        .hero()
        .with_cta(),
    ]
}

/// The built-in deck.
pub fn builtin_deck() -> Deck {
    Deck::new(builtin_slides()).expect("built-in deck has slides")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_deck_shape() {
        let deck = builtin_deck();

        assert_eq!(deck.len(), 20);
        assert_eq!(deck.sections().len(), 7);
        assert_eq!(deck.sections()[0], "Opening");
        assert_eq!(deck.sections()[1], "The Setup");
        assert_eq!(deck.sections()[6], "Connect");
    }

    #[test]
    fn test_builtin_hero_slides() {
        let deck = builtin_deck();
        let heroes: Vec<usize> = deck
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.hero)
            .map(|(i, _)| i)
            .collect();

        assert_eq!(heroes, vec![0, 19]);
        assert!(deck.slide(19).unwrap().cta);
        assert!(deck.slides().iter().filter(|s| !s.hero).all(|s| s.visual.is_some()));
    }
}
