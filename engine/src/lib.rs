//! Core engine for pinpad - the code-row state machine, without TUI
//! dependencies.
//!
//! The engine owns the row of digit slots and everything that reacts to
//! it: input normalization, the focus director, the visibility governor
//! with its auto-mask timer, and the TOML configuration layer. Rendering
//! and terminal input live in `pinpad-tui`; the engine is exercised in
//! tests with nothing but an in-memory focus host and injected
//! timestamps.

mod app;
mod config;
mod focus;
mod row;
mod timer;

pub use app::App;
pub use config::{CodeConfig, ConfigError, PinpadConfig, UiConfig};
pub use focus::{Focus, FocusHost};
pub use row::Row;
pub use timer::MaskTimer;

// Re-export the pure types the UI layer needs alongside the engine.
pub use pinpad_types::{
    KeyPress, KeyVerdict, RenderMode, RowKey, SlotValue, classify_key, compute_reveal, normalize,
};
