//! Token classification and suggestion resolution for Handlebars-style
//! template expressions.
//!
//! Given buffer text and a caret offset, the engine decides whether the
//! caret sits inside an active `{{ ... }}` expression, which sub-grammar
//! applies (data path, helper invocation, block helper, partial reference),
//! and which catalog entries complete the identifier being typed. Accepting
//! a candidate produces an exact text splice plus the new caret position.
//!
//! Everything here is pure: each call derives its result from
//! `(text, caret, catalog)` alone, so a keystroke fully supersedes the
//! previous computation. The embedding layer (see `stache-surface`) owns
//! event plumbing and popup state.

pub mod apply;
pub mod catalog;
pub mod resolve;
pub mod token;

pub use apply::{TokenEdit, apply};
pub use catalog::{Catalog, EntryKind, KindSet, SuggestionEntry};
pub use resolve::{ActiveSegment, Resolution, ResolveConfig, SegmentRole, resolve};
pub use token::{Token, extract};
