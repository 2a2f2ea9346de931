//! Key pre-filter for the code row.
//!
//! Every key event is classified before it can touch a slot: decimal
//! digits and a short list of navigation/control keys pass, everything
//! else (letters, symbols, multi-character IME input) is rejected
//! outright with no effect on the row.

/// A key event as delivered by the host UI, before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Tab,
    /// Anything the row has no use for (function keys, Esc, modifiers).
    Other,
}

/// A key that survived the pre-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    /// A decimal digit keystroke.
    Digit(char),
    Backspace,
    Delete,
    Left,
    Right,
    Tab,
}

/// Outcome of the pre-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyVerdict {
    Accept(RowKey),
    /// Suppressed: no mutation, no default action.
    Reject,
}

/// Classify a key event against the row's allow-list.
///
/// Accepted: decimal digits and Backspace/Delete/Left/Right/Tab.
/// Everything else is rejected at this gate, so no later stage has to
/// re-check.
#[must_use]
pub fn classify_key(press: KeyPress) -> KeyVerdict {
    match press {
        KeyPress::Char(c) if c.is_ascii_digit() => KeyVerdict::Accept(RowKey::Digit(c)),
        KeyPress::Char(_) | KeyPress::Other => KeyVerdict::Reject,
        KeyPress::Backspace => KeyVerdict::Accept(RowKey::Backspace),
        KeyPress::Delete => KeyVerdict::Accept(RowKey::Delete),
        KeyPress::Left => KeyVerdict::Accept(RowKey::Left),
        KeyPress::Right => KeyVerdict::Accept(RowKey::Right),
        KeyPress::Tab => KeyVerdict::Accept(RowKey::Tab),
    }
}
