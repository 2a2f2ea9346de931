//! Reveal computation for the code row.
//!
//! Which slots render their digit in the clear is a pure function of
//! (focus target, slot values, mask override) and is recomputed on every
//! cycle rather than stored, so it can never go stale.

use crate::slot::SlotValue;

/// Rendered mode of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Digit shown as-is.
    Clear,
    /// Digit hidden behind the mask glyph.
    Masked,
}

/// Compute the render mode of every slot.
///
/// Policy:
/// - No slot focused (or the mask override is in force): all masked.
/// - The focused slot is always clear.
/// - If the focused slot is empty, the highest-index non-empty slot is
///   also clear, so the digit the user just typed stays visible after
///   focus auto-advances past it.
/// - If the focused slot is non-empty, no other slot is revealed.
///
/// A focus index outside the row is treated as no focus.
#[must_use]
pub fn compute_reveal(
    focused: Option<usize>,
    values: &[SlotValue],
    mask_override: bool,
) -> Vec<RenderMode> {
    let mut modes = vec![RenderMode::Masked; values.len()];

    let Some(focus) = focused.filter(|&i| i < values.len()) else {
        return modes;
    };
    if mask_override {
        return modes;
    }

    modes[focus] = RenderMode::Clear;

    if values[focus].is_empty()
        && let Some(last_filled) = values.iter().rposition(|v| v.is_filled())
    {
        modes[last_filled] = RenderMode::Clear;
    }

    modes
}
