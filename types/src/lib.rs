//! Core domain types for pinpad - no IO, no async.
//!
//! Pure data types shared by the engine (state ownership) and tui
//! (rendering/input): slot values, key classification, and the reveal
//! computation. Nothing in this crate touches a terminal or a clock.

mod key;
mod reveal;
mod slot;

pub use key::{KeyPress, KeyVerdict, RowKey, classify_key};
pub use reveal::{RenderMode, compute_reveal};
pub use slot::{SlotValue, normalize};
