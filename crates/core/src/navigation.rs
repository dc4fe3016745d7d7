//! Cursor state and navigation.
//!
//! The cursor is the only mutable state of a running deck. It lives in a
//! [`Presenter`] so the renderer and the event layer share one explicit
//! value instead of a global.

/// Navigation request derived from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Advance one slide.
    Next,
    /// Go back one slide.
    Prev,
}

impl NavAction {
    /// Map a `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" | " " | "Enter" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" | "Backspace" => Some(Self::Prev),
            _ => None,
        }
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The cursor moved; the slide must be re-rendered.
    Moved { from: usize, to: usize },
    /// The request was clamped or ignored.
    Unchanged,
}

impl Transition {
    /// Whether the cursor changed.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Holds the cursor over a deck of `total` slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presenter {
    index: usize,
    total: usize,
}

impl Presenter {
    /// Start at the first slide. `total` is clamped to at least one.
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total: total.max(1),
        }
    }

    /// Start at the slide named by `fragment`, or the first slide if the
    /// fragment is missing or invalid.
    pub fn from_fragment(total: usize, fragment: &str) -> Self {
        let mut presenter = Self::new(total);
        presenter.jump_to_fragment(fragment);
        presenter
    }

    /// Zero-based index of the current slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based number of the current slide.
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }

    /// Overall progress through the deck, in percent.
    pub fn progress(&self) -> f64 {
        self.ordinal() as f64 * 100.0 / self.total as f64
    }

    /// URL fragment for the current slide, e.g. `#3`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.ordinal())
    }

    /// `NN / NN` counter shown in the slide header.
    pub fn counter(&self) -> String {
        format!("{:02} / {:02}", self.ordinal(), self.total)
    }

    /// Advance one slide, stopping at the last.
    pub fn next(&mut self) -> Transition {
        if self.is_last() {
            return Transition::Unchanged;
        }
        self.move_to(self.index + 1)
    }

    /// Go back one slide, stopping at the first.
    pub fn prev(&mut self) -> Transition {
        if self.is_first() {
            return Transition::Unchanged;
        }
        self.move_to(self.index - 1)
    }

    /// Apply a keyboard or pointer action.
    pub fn apply(&mut self, action: NavAction) -> Transition {
        match action {
            NavAction::Next => self.next(),
            NavAction::Prev => self.prev(),
        }
    }

    /// Jump to a 1-based slide number. Out of range numbers are ignored.
    pub fn jump(&mut self, ordinal: usize) -> Transition {
        if ordinal < 1 || ordinal > self.total {
            log::debug!("Ignoring jump to slide {} of {}", ordinal, self.total);
            return Transition::Unchanged;
        }
        self.move_to(ordinal - 1)
    }

    /// Jump to the slide named by a URL fragment such as `#4`.
    pub fn jump_to_fragment(&mut self, fragment: &str) -> Transition {
        match parse_fragment(fragment) {
            Some(ordinal) => self.jump(ordinal),
            None => Transition::Unchanged,
        }
    }

    fn move_to(&mut self, to: usize) -> Transition {
        let from = self.index;
        if from == to {
            return Transition::Unchanged;
        }
        self.index = to;
        Transition::Moved { from, to }
    }
}

/// Parse a URL fragment into a 1-based slide number.
///
/// Accepts `#N` or `N` with optional surrounding whitespace. Empty,
/// negative, fractional or non-numeric fragments yield `None`.
pub fn parse_fragment(fragment: &str) -> Option<usize> {
    let value = fragment.strip_prefix('#').unwrap_or(fragment).trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<usize>().ok()
}
