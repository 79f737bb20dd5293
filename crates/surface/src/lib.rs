//! Event-driving layer for the suggestion engine.
//!
//! The engine in `stache-engine` is pure; this crate owns everything that
//! persists across keystrokes and everything the embedding UI talks to:
//! the popup state machine, the keyboard guards, the bracket conveniences,
//! and the atomic buffer-edit commands.
//!
//! The embedding layer adapts its toolkit's events into [`SuggestDriver`]
//! calls and applies the returned [`PopupCommand`]s and [`BufferEdit`]s to
//! its widgets. No UI framework types appear here.

pub mod brackets;
pub mod driver;
pub mod edit;
pub mod key;
pub mod popup;

pub use driver::{DriverOptions, PopupCommand, SuggestDriver};
pub use edit::{BufferEdit, EditError, apply_edit};
pub use key::{KeyInput, Modifiers};
pub use popup::{CandidateRow, PopupState};

pub use stache_engine as engine;
