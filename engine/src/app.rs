//! The pinpad application state machine.
//!
//! `App` owns the row, the focus host, and the visibility state, and
//! reacts to filtered key events. Within one key event the reaction
//! chain runs synchronously in a fixed order: normalize the mutation,
//! update focus, update visibility bookkeeping. The only asynchrony is
//! deferred to [`App::tick`]: the blur verification (focus of the new
//! target is not known at the instant the row loses it) and the
//! auto-mask deadline. Both are cancellable; races resolve
//! last-writer-wins via cancel-then-rearm.

use std::time::{Duration, Instant};

use pinpad_types::{RenderMode, RowKey, compute_reveal};

use crate::config::PinpadConfig;
use crate::focus::{self, Focus, FocusHost};
use crate::row::Row;
use crate::timer::MaskTimer;

pub struct App<F: FocusHost = Focus> {
    row: Row,
    focus: F,
    reveal_delay: Duration,
    mask_timer: MaskTimer,
    /// Set when the auto-mask timer expires; masks everything despite
    /// focus until the next qualifying activity.
    mask_override: bool,
    /// Deferred focus-leave verification, resolved on the next tick.
    pending_blur: bool,
    /// The submit affordance below the row holds focus.
    submit_focused: bool,
    should_quit: bool,
    submitted: Option<String>,
}

impl<F: FocusHost> App<F> {
    #[must_use]
    pub fn new(config: &PinpadConfig, focus: F) -> Self {
        Self {
            row: Row::new(config.code_length()),
            focus,
            reveal_delay: config.reveal_delay(),
            mask_timer: MaskTimer::default(),
            mask_override: false,
            pending_blur: false,
            submit_focused: false,
            should_quit: false,
            submitted: None,
        }
    }

    // ------------------------------------------------------------------
    // Key handling
    // ------------------------------------------------------------------

    /// Apply one filtered key event. Keys arriving while no slot holds
    /// focus are ignored; the row only ever acts on itself.
    pub fn handle_key(&mut self, key: RowKey, now: Instant) {
        match key {
            RowKey::Digit(c) => self.apply_digit(c, now),
            RowKey::Backspace | RowKey::Delete => self.apply_delete(now),
            RowKey::Left => self.move_left(now),
            RowKey::Right => self.move_right(now),
            RowKey::Tab => self.tab_forward(now),
        }
    }

    fn apply_digit(&mut self, c: char, now: Instant) {
        let Some(index) = self.focus.focused_slot() else {
            return;
        };

        // Overwrite rule: typing into a filled slot replaces its digit.
        if self.row.value(index).is_filled() {
            self.row.clear_slot(index);
        }

        let applied = self.row.set_slot_value(index, &c.to_string());
        if applied.is_filled() {
            focus::react_to_fill(&self.row, &mut self.focus, index);
        }
        self.note_activity(now);
    }

    fn apply_delete(&mut self, now: Instant) {
        let Some(index) = self.focus.focused_slot() else {
            return;
        };

        // A filled slot takes one press to clear, with focus staying
        // put; retreat only happens when the key lands on a slot that
        // is already empty.
        if self.row.value(index).is_filled() {
            self.row.clear_slot(index);
        } else {
            focus::react_to_delete(&self.row, &mut self.focus, index);
        }
        self.note_activity(now);
    }

    fn move_left(&mut self, now: Instant) {
        if let Some(index) = self.focus.focused_slot()
            && index > 0
        {
            self.focus_slot(index - 1, now);
        }
    }

    fn move_right(&mut self, now: Instant) {
        if let Some(index) = self.focus.focused_slot()
            && index + 1 < self.row.len()
        {
            self.focus_slot(index + 1, now);
        }
    }

    /// Tab cycles slots left to right, then the submit affordance, then
    /// back into the row.
    fn tab_forward(&mut self, now: Instant) {
        match self.focus.focused_slot() {
            Some(index) if index + 1 < self.row.len() => self.focus_slot(index + 1, now),
            Some(_) => self.focus_submit(now),
            None => self.focus_slot(0, now),
        }
    }

    /// Shift+Tab: the reverse cycle.
    pub fn tab_backward(&mut self, now: Instant) {
        match self.focus.focused_slot() {
            Some(index) if index > 0 => self.focus_slot(index - 1, now),
            Some(_) => self.focus_submit(now),
            None => self.focus_slot(self.row.len() - 1, now),
        }
    }

    // ------------------------------------------------------------------
    // Focus transitions
    // ------------------------------------------------------------------

    /// Give a slot focus (click, arrows, Tab). The director redirects
    /// empty targets to the first empty slot.
    pub fn focus_slot(&mut self, index: usize, now: Instant) {
        self.submit_focused = false;
        focus::react_to_focus(&self.row, &mut self.focus, index);
        self.note_activity(now);
    }

    /// Move focus off the row onto the submit affordance. The flush of
    /// reveal state is deferred to the next tick, after the new focus
    /// target has settled.
    pub fn focus_submit(&mut self, now: Instant) {
        self.focus.set_focused_slot(None);
        self.submit_focused = true;
        self.pending_blur = true;
        self.note_activity(now);
    }

    /// Activate the submit affordance: a complete code finishes the
    /// session; an incomplete one sends focus to the first missing
    /// digit instead.
    pub fn activate_submit(&mut self, now: Instant) {
        if self.row.is_complete() {
            tracing::debug!("code complete, submitting");
            self.submitted = Some(self.row.code());
            self.should_quit = true;
        } else if let Some(first_empty) = self.row.first_empty() {
            self.focus_slot(first_empty, now);
        }
    }

    /// Record user activity: lift the mask override and rearm the
    /// auto-mask countdown while the row holds focus, cancel it when it
    /// does not.
    fn note_activity(&mut self, now: Instant) {
        self.mask_override = false;
        if self.focus.focused_slot().is_some() {
            self.mask_timer.arm(now, self.reveal_delay);
        } else {
            self.mask_timer.cancel();
        }
    }

    // ------------------------------------------------------------------
    // Deferred work
    // ------------------------------------------------------------------

    /// Advance the two suspension points: the deferred blur check and
    /// the auto-mask deadline.
    pub fn tick(&mut self, now: Instant) {
        if self.pending_blur {
            self.pending_blur = false;
            if self.focus.focused_slot().is_none() {
                // Focus really left the row: mask everything and drop
                // the pending countdown.
                self.mask_timer.cancel();
                self.mask_override = false;
            }
        }

        if self.mask_timer.fire(now) {
            tracing::debug!("auto-mask timer expired");
            self.mask_override = true;
        }
    }

    // ------------------------------------------------------------------
    // Observed state
    // ------------------------------------------------------------------

    /// Render mode of every slot, recomputed from the current state.
    #[must_use]
    pub fn render_modes(&self) -> Vec<RenderMode> {
        compute_reveal(
            self.focus.focused_slot(),
            self.row.values(),
            self.mask_override,
        )
    }

    #[must_use]
    pub fn row(&self) -> &Row {
        &self.row
    }

    #[must_use]
    pub fn focused_slot(&self) -> Option<usize> {
        self.focus.focused_slot()
    }

    #[must_use]
    pub fn submit_focused(&self) -> bool {
        self.submit_focused
    }

    #[must_use]
    pub fn code(&self) -> String {
        self.row.code()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.row.is_complete()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The completed code, if the session ended via submit.
    #[must_use]
    pub fn submitted(&self) -> Option<&str> {
        self.submitted.as_deref()
    }
}
