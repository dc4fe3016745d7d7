//! Timeline connector geometry.
//!
//! The stylesheet draws the lines between timeline dots from a handful of
//! pixel offsets. Those depend on laid-out dot positions, so the browser
//! layer measures the rectangles and this module turns them into values.

/// Custom property holding the gap before the first dot.
pub const START_OFFSET_VAR: &str = "--timeline-start-offset";
/// Custom property holding the gap after the last dot.
pub const END_OFFSET_VAR: &str = "--timeline-end-offset";
/// Custom property holding the width from the first dot to the active dot.
pub const ACTIVE_WIDTH_VAR: &str = "--timeline-active-width";
/// Custom property on the slide holding its right edge past the last dot.
pub const RIGHT_EDGE_OFFSET_VAR: &str = "--timeline-right-edge-offset";

/// Horizontal extent of a laid-out box, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Offsets published on the timeline list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineGeometry {
    pub start_offset: f64,
    pub end_offset: f64,
    pub active_width: f64,
}

impl TimelineGeometry {
    /// Compute offsets for `dots` laid out inside `list`.
    ///
    /// Returns `None` when there are no dots or `active` is not one of them.
    pub fn measure(list: Span, dots: &[Span], active: usize) -> Option<Self> {
        let first = dots.first()?;
        let last = dots.last()?;
        let active = dots.get(active)?;

        Some(Self {
            start_offset: (first.center() - list.left).max(0.0),
            end_offset: (list.right() - last.center()).max(0.0),
            active_width: (active.center() - first.center()).max(0.0),
        })
    }

    /// `(property, value)` pairs ready to set on the list element.
    pub fn style_properties(&self) -> [(&'static str, String); 3] {
        [
            (START_OFFSET_VAR, to_pixels(self.start_offset)),
            (END_OFFSET_VAR, to_pixels(self.end_offset)),
            (ACTIVE_WIDTH_VAR, to_pixels(self.active_width)),
        ]
    }
}

/// Distance from the last dot's right edge to the slide's right edge.
pub fn right_edge_offset(slide: Span, dots: &[Span]) -> Option<f64> {
    let last = dots.last()?;
    Some((slide.right() - last.right()).max(0.0))
}

/// Format a length as CSS pixels with two decimals, clamped at zero.
pub fn to_pixels(value: f64) -> String {
    format!("{:.2}px", value.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dots() -> Vec<Span> {
        // Four 10px dots spaced 100px apart, starting 20px into the list
        (0..4).map(|i| Span::new(20.0 + 100.0 * i as f64, 10.0)).collect()
    }

    #[test]
    fn test_measure_offsets() {
        let list = Span::new(0.0, 400.0);
        let geometry = TimelineGeometry::measure(list, &dots(), 2).unwrap();

        assert_eq!(geometry.start_offset, 25.0);
        assert_eq!(geometry.end_offset, 400.0 - 325.0);
        assert_eq!(geometry.active_width, 200.0);
    }

    #[test]
    fn test_first_dot_active_has_zero_width() {
        let geometry = TimelineGeometry::measure(Span::new(0.0, 400.0), &dots(), 0).unwrap();
        assert_eq!(geometry.active_width, 0.0);
    }

    #[test]
    fn test_negative_offsets_clamped() {
        // List narrower than the dots it contains
        let list = Span::new(100.0, 50.0);
        let geometry = TimelineGeometry::measure(list, &dots(), 1).unwrap();

        assert_eq!(geometry.start_offset, 0.0);
        assert_eq!(geometry.end_offset, 0.0);
    }

    #[test]
    fn test_skips_without_dots_or_active() {
        let list = Span::new(0.0, 400.0);
        assert_eq!(TimelineGeometry::measure(list, &[], 0), None);
        assert_eq!(TimelineGeometry::measure(list, &dots(), 4), None);
    }

    #[test]
    fn test_style_properties() {
        let geometry = TimelineGeometry {
            start_offset: 12.5,
            end_offset: 3.0,
            active_width: 140.256,
        };
        let props = geometry.style_properties();

        assert_eq!(props[0], (START_OFFSET_VAR, "12.50px".to_string()));
        assert_eq!(props[1], (END_OFFSET_VAR, "3.00px".to_string()));
        assert_eq!(props[2], (ACTIVE_WIDTH_VAR, "140.26px".to_string()));
    }

    #[test]
    fn test_right_edge_offset() {
        let slide = Span::new(0.0, 500.0);
        assert_eq!(right_edge_offset(slide, &dots()), Some(170.0));
        assert_eq!(right_edge_offset(Span::new(0.0, 100.0), &dots()), Some(0.0));
        assert_eq!(right_edge_offset(slide, &[]), None);
    }

    #[test]
    fn test_to_pixels() {
        assert_eq!(to_pixels(0.0), "0.00px");
        assert_eq!(to_pixels(-4.0), "0.00px");
        assert_eq!(to_pixels(7.126), "7.13px");
    }
}
