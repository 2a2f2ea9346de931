//! The slot registry: an ordered, fixed-length sequence of digit slots.
//!
//! Every mutation funnels through [`Row::set_slot_value`], which
//! normalizes the incoming text and enforces the positional rule: a
//! digit written at index `i` invalidates every slot after `i`, because
//! a changed prefix makes the old suffix meaningless.

use pinpad_types::{SlotValue, normalize};

/// Ordered sequence of single-digit slots. Length is fixed at
/// construction and never changes.
#[derive(Debug, Clone)]
pub struct Row {
    slots: Vec<SlotValue>,
}

impl Row {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![SlotValue::Empty; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value at `index`; out-of-range indices read as empty.
    #[must_use]
    pub fn value(&self, index: usize) -> SlotValue {
        self.slots.get(index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn values(&self) -> &[SlotValue] {
        &self.slots
    }

    /// Normalize `raw` and store the result at `index`, returning the
    /// applied value.
    ///
    /// When the applied value is non-empty, every slot at a greater
    /// index is forced empty. Out-of-range indices are ignored.
    pub fn set_slot_value(&mut self, index: usize, raw: &str) -> SlotValue {
        if index >= self.slots.len() {
            return SlotValue::Empty;
        }

        let applied = normalize(raw);
        self.slots[index] = applied;

        if applied.is_filled() {
            for slot in &mut self.slots[index + 1..] {
                *slot = SlotValue::Empty;
            }
        }

        applied
    }

    /// Empty the slot at `index`. Later slots are left alone: clearing
    /// a digit does not invalidate the suffix, only writing one does.
    pub fn clear_slot(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = SlotValue::Empty;
        }
    }

    /// First empty slot in index order.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|v| v.is_empty())
    }

    /// First empty slot strictly after `index`.
    #[must_use]
    pub fn first_empty_after(&self, index: usize) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, v)| v.is_empty())
            .map(|(i, _)| i)
    }

    /// Nearest filled slot strictly before `index`.
    #[must_use]
    pub fn nearest_filled_before(&self, index: usize) -> Option<usize> {
        self.slots[..index.min(self.slots.len())]
            .iter()
            .rposition(|v| v.is_filled())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|v| v.is_filled())
    }

    /// The code entered so far: slot values concatenated in index order.
    #[must_use]
    pub fn code(&self) -> String {
        self.slots.iter().filter_map(|v| v.digit()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(row: &Row) -> Vec<bool> {
        row.values().iter().map(|v| v.is_filled()).collect()
    }

    #[test]
    fn starts_empty() {
        let row = Row::new(4);
        assert_eq!(row.len(), 4);
        assert!(!row.is_complete());
        assert_eq!(row.code(), "");
        assert_eq!(row.first_empty(), Some(0));
    }

    #[test]
    fn set_normalizes_raw_text() {
        let mut row = Row::new(4);
        assert_eq!(row.set_slot_value(0, "a7b"), SlotValue::Digit('7'));
        assert_eq!(row.set_slot_value(1, "xyz"), SlotValue::Empty);
        assert_eq!(row.value(0), SlotValue::Digit('7'));
        assert_eq!(row.value(1), SlotValue::Empty);
    }

    #[test]
    fn writing_a_digit_invalidates_the_suffix() {
        let mut row = Row::new(4);
        for (i, raw) in ["1", "2", "3", "4"].iter().enumerate() {
            row.set_slot_value(i, raw);
        }
        assert!(row.is_complete());

        row.set_slot_value(1, "9");
        assert_eq!(row.code(), "19");
        assert_eq!(filled(&row), vec![true, true, false, false]);
    }

    #[test]
    fn clearing_leaves_the_suffix_alone() {
        let mut row = Row::new(4);
        for (i, raw) in ["1", "2", "3", "4"].iter().enumerate() {
            row.set_slot_value(i, raw);
        }

        row.clear_slot(1);
        assert_eq!(filled(&row), vec![true, false, true, true]);
        assert_eq!(row.code(), "134");
    }

    #[test]
    fn applying_an_empty_value_does_not_invalidate() {
        let mut row = Row::new(3);
        row.set_slot_value(0, "1");
        row.set_slot_value(1, "2");
        row.set_slot_value(0, "junk");
        assert_eq!(filled(&row), vec![false, true, false]);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut row = Row::new(2);
        assert_eq!(row.set_slot_value(5, "9"), SlotValue::Empty);
        assert_eq!(row.code(), "");
    }

    #[test]
    fn set_slot_value_is_idempotent() {
        let mut row = Row::new(3);
        let first = row.set_slot_value(1, "a5b7");
        let second = row.set_slot_value(1, &first.as_str_fragment());
        assert_eq!(first, second);
        assert_eq!(row.value(1), SlotValue::Digit('5'));
    }

    #[test]
    fn navigation_queries() {
        let mut row = Row::new(5);
        row.set_slot_value(0, "1");
        row.set_slot_value(1, "2");
        row.set_slot_value(3, "4");

        assert_eq!(row.first_empty(), Some(2));
        assert_eq!(row.first_empty_after(0), Some(2));
        assert_eq!(row.first_empty_after(3), Some(4));
        assert_eq!(row.nearest_filled_before(3), Some(1));
        assert_eq!(row.nearest_filled_before(0), None);
    }

    #[test]
    fn code_skips_gaps() {
        let mut row = Row::new(4);
        row.set_slot_value(0, "1");
        row.set_slot_value(2, "3");
        assert_eq!(row.code(), "13");
        assert!(!row.is_complete());
    }
}
