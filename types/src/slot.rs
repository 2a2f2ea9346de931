//! Slot values and input normalization.
//!
//! A slot holds zero or one decimal digit. Every mutation goes through
//! [`normalize`], so the "empty or exactly one digit" invariant holds no
//! matter what text arrives (typed, programmatic, or IME garbage).

/// Value of a single code slot: empty, or exactly one ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotValue {
    #[default]
    Empty,
    Digit(char),
}

impl SlotValue {
    /// Build a value from a digit character. Non-digits become `Empty`.
    #[must_use]
    pub fn from_digit(c: char) -> Self {
        if c.is_ascii_digit() {
            SlotValue::Digit(c)
        } else {
            SlotValue::Empty
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, SlotValue::Empty)
    }

    #[must_use]
    pub fn is_filled(self) -> bool {
        !self.is_empty()
    }

    /// The held digit, if any.
    #[must_use]
    pub fn digit(self) -> Option<char> {
        match self {
            SlotValue::Empty => None,
            SlotValue::Digit(c) => Some(c),
        }
    }

    /// Render as a string fragment ("" or one digit).
    #[must_use]
    pub fn as_str_fragment(self) -> String {
        match self {
            SlotValue::Empty => String::new(),
            SlotValue::Digit(c) => c.to_string(),
        }
    }
}

/// Normalize raw text into a slot value: strip every non-digit, keep at
/// most the first remaining digit.
///
/// Idempotent: normalizing the rendered result of a previous
/// normalization yields the same value.
#[must_use]
pub fn normalize(raw: &str) -> SlotValue {
    raw.chars()
        .find(char::is_ascii_digit)
        .map_or(SlotValue::Empty, SlotValue::Digit)
}
