//! Focus host abstraction and the focus director.
//!
//! The engine never assumes it owns the host UI's focus; it queries and
//! sets it through [`FocusHost`]. That keeps the director testable with
//! the plain in-memory [`Focus`] and lets a real UI back the trait with
//! whatever focus mechanism it has.
//!
//! Director policy, applied as a reaction to row events:
//! - fill: advance to the first empty slot after the filled one.
//! - focus arriving on an empty slot: redirect to the first empty slot
//!   in index order, enforcing left-to-right completion while still
//!   allowing direct re-focus of any filled slot for editing.
//! - delete landing on an already-empty slot: retreat to the nearest
//!   filled slot before it (clearing a filled slot keeps focus put).
//!
//! No reaction ever moves focus outside the row; leaving the row is
//! always an explicit host-level act (Tab past the last slot).

use crate::row::Row;

/// The host UI capability the engine uses to observe and steer focus.
///
/// `None` means no slot in the row holds focus (focus is elsewhere in
/// the host UI, or nowhere).
pub trait FocusHost {
    fn focused_slot(&self) -> Option<usize>;
    fn set_focused_slot(&mut self, index: Option<usize>);
}

/// In-memory focus host. The TUI uses it directly (the terminal has no
/// native focus notion per widget); engine tests use it as the fake.
#[derive(Debug, Clone, Copy, Default)]
pub struct Focus {
    slot: Option<usize>,
}

impl FocusHost for Focus {
    fn focused_slot(&self) -> Option<usize> {
        self.slot
    }

    fn set_focused_slot(&mut self, index: Option<usize>) {
        self.slot = index;
    }
}

/// Reaction after a slot transitioned empty -> filled: move focus to
/// the first empty slot after it, or stay put when the code is
/// complete.
pub(crate) fn react_to_fill(row: &Row, host: &mut impl FocusHost, index: usize) {
    if let Some(next) = row.first_empty_after(index) {
        host.set_focused_slot(Some(next));
    }
}

/// Reaction to focus arriving at `index` (click, arrow, Tab). Empty
/// targets are redirected to the first empty slot overall; filled
/// targets keep the focus they were given. Indices outside the row are
/// ignored.
pub(crate) fn react_to_focus(row: &Row, host: &mut impl FocusHost, index: usize) {
    if index >= row.len() {
        return;
    }
    if row.value(index).is_empty() {
        host.set_focused_slot(Some(row.first_empty().unwrap_or(index)));
    } else {
        host.set_focused_slot(Some(index));
    }
}

/// Reaction to a delete key landing on an already-empty `index`:
/// retreat to the nearest filled slot before it, or stay when there is
/// none.
pub(crate) fn react_to_delete(row: &Row, host: &mut impl FocusHost, index: usize) {
    if let Some(prev) = row.nearest_filled_before(index) {
        host.set_focused_slot(Some(prev));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_from(spec: &str) -> Row {
        let mut row = Row::new(spec.len());
        for (i, c) in spec.chars().enumerate() {
            if c != '.' {
                row.set_slot_value(i, &c.to_string());
            }
        }
        row
    }

    fn focused_at(index: usize) -> Focus {
        let mut focus = Focus::default();
        focus.set_focused_slot(Some(index));
        focus
    }

    #[test]
    fn fill_advances_to_next_empty() {
        let row = row_from("12..");
        let mut focus = focused_at(1);
        react_to_fill(&row, &mut focus, 1);
        assert_eq!(focus.focused_slot(), Some(2));
    }

    #[test]
    fn fill_on_last_slot_stays() {
        let row = row_from("1234");
        let mut focus = focused_at(3);
        react_to_fill(&row, &mut focus, 3);
        assert_eq!(focus.focused_slot(), Some(3));
    }

    #[test]
    fn focus_on_empty_slot_redirects_to_first_empty() {
        let row = row_from("1...");
        let mut focus = Focus::default();
        react_to_focus(&row, &mut focus, 3);
        assert_eq!(focus.focused_slot(), Some(1));
    }

    #[test]
    fn focus_on_first_empty_is_a_no_op_redirect() {
        let row = row_from("1...");
        let mut focus = Focus::default();
        react_to_focus(&row, &mut focus, 1);
        assert_eq!(focus.focused_slot(), Some(1));
    }

    #[test]
    fn focus_on_filled_slot_sticks() {
        let row = row_from("12..");
        let mut focus = Focus::default();
        react_to_focus(&row, &mut focus, 0);
        assert_eq!(focus.focused_slot(), Some(0));
    }

    #[test]
    fn focus_outside_the_row_is_ignored() {
        let row = row_from("12..");
        let mut focus = focused_at(1);
        react_to_focus(&row, &mut focus, 7);
        assert_eq!(focus.focused_slot(), Some(1));
    }

    #[test]
    fn delete_retreats_to_nearest_filled() {
        let mut row = row_from("123.");
        row.clear_slot(2);
        let mut focus = focused_at(2);
        react_to_delete(&row, &mut focus, 2);
        assert_eq!(focus.focused_slot(), Some(1));
    }

    #[test]
    fn delete_at_leftmost_stays() {
        let mut row = row_from("1...");
        row.clear_slot(0);
        let mut focus = focused_at(0);
        react_to_delete(&row, &mut focus, 0);
        assert_eq!(focus.focused_slot(), Some(0));
    }
}
