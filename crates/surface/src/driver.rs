//! The suggestion driver: adapts input events into engine calls and popup
//! commands.
//!
//! Every operation runs synchronously on the caller's event thread and
//! derives its result from the current `(text, caret)` pair, so each
//! keystroke fully supersedes the previous computation. The popup state
//! owned here is the only thing persisted across calls.

use tracing::trace;

use stache_engine::{Catalog, ResolveConfig, apply, extract, resolve};

use crate::brackets;
use crate::edit::BufferEdit;
use crate::key::{KeyInput, Modifiers};
use crate::popup::{CandidateRow, PopupState};

/// What the popup widget should do after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupCommand {
	/// Open (or refresh) the popup with these rows.
	Show(Vec<CandidateRow>),
	/// Close the popup.
	Hide,
	/// The popup was closed and stays closed.
	NoChange,
}

/// Configurable surface behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOptions {
	/// Insert `}}` when the user types the second `{` of a `{{` pair.
	pub auto_close_brackets: bool,
	/// Consume Tab inside `{{...}}` and jump past the closer.
	pub tab_to_exit_brackets: bool,
	/// Suppress suggestions while the caret is before this offset.
	///
	/// Superseded by the bracket-presence check and off by default; kept
	/// as configuration for embedders matching the earliest surface
	/// variant.
	pub min_caret: Option<usize>,
}

impl Default for DriverOptions {
	fn default() -> Self {
		Self {
			auto_close_brackets: true,
			tab_to_exit_brackets: true,
			min_caret: None,
		}
	}
}

/// Drives suggestion resolution for one text surface.
pub struct SuggestDriver {
	catalog: Catalog,
	resolve_config: ResolveConfig,
	options: DriverOptions,
	popup: PopupState,
}

impl SuggestDriver {
	/// Creates a driver over the given catalog with default configuration.
	pub fn new(catalog: Catalog) -> Self {
		Self {
			catalog,
			resolve_config: ResolveConfig::default(),
			options: DriverOptions::default(),
			popup: PopupState::default(),
		}
	}

	/// Replaces the eligibility configuration.
	pub fn with_resolve_config(mut self, config: ResolveConfig) -> Self {
		self.resolve_config = config;
		self
	}

	/// Replaces the surface options.
	pub fn with_options(mut self, options: DriverOptions) -> Self {
		self.options = options;
		self
	}

	/// Read access to the popup state, for rendering.
	pub fn popup(&self) -> &PopupState {
		&self.popup
	}

	/// Handles a caret-move or text-change event.
	///
	/// Applies the event guards (modifiers, Enter/Escape, non-empty
	/// selection), then extracts and resolves the token under the caret.
	/// Returns the command the popup widget should execute.
	pub fn on_input(
		&mut self,
		text: &str,
		caret: usize,
		selection_len: usize,
		modifiers: Modifiers,
		key: KeyInput,
	) -> PopupCommand {
		if !modifiers.is_empty()
			|| selection_len > 0
			|| matches!(key, KeyInput::Enter | KeyInput::Escape)
		{
			return self.hide();
		}
		if let Some(min) = self.options.min_caret
			&& caret < min
		{
			return self.hide();
		}

		let Some(token) = extract(text, caret) else {
			trace!(caret, "no live token");
			return self.hide();
		};
		let Some(resolution) = resolve(&token, &self.catalog, &self.resolve_config) else {
			trace!(token = token.text, "nothing to suggest");
			return self.hide();
		};

		let rows: Vec<CandidateRow> = resolution
			.candidates
			.iter()
			.map(|entry| CandidateRow {
				name: entry.name.clone(),
				kind: entry.kind,
			})
			.collect();
		trace!(
			candidates = rows.len(),
			prefix = %resolution.match_prefix,
			role = ?resolution.role,
			"showing suggestions"
		);
		self.popup.show(rows.clone());
		PopupCommand::Show(rows)
	}

	/// Moves the popup highlight, clamped to the list bounds.
	pub fn move_selection(&mut self, delta: isize) {
		self.popup.move_selection(delta);
	}

	/// The currently highlighted candidate, if the popup is open.
	pub fn selected(&self) -> Option<&CandidateRow> {
		self.popup.selected()
	}

	/// Accepts the highlighted candidate.
	///
	/// Returns the atomic buffer edit to apply, or `None` when nothing is
	/// highlighted or no token is live anymore, in which case the popup
	/// simply closes with no text change.
	pub fn accept(&mut self, text: &str, caret: usize) -> Option<BufferEdit> {
		let Some(row) = self.popup.selected() else {
			self.popup.hide();
			return None;
		};
		let chosen = row.name.clone();
		let Some(token) = extract(text, caret) else {
			trace!("accept skipped: token no longer live");
			self.popup.hide();
			return None;
		};

		let edit = apply(&token, &chosen);
		trace!(chosen = %chosen, start = edit.start, caret = edit.caret, "suggestion accepted");
		self.popup.hide();
		Some(BufferEdit {
			start: edit.start,
			len: edit.old_len,
			text: edit.new_text,
			caret: edit.caret,
		})
	}

	/// Handles a typed character for bracket auto-closing.
	///
	/// Call only from the text-input event itself; the check is a pure
	/// function of that event, so it cannot re-fire on a re-scan.
	pub fn on_char_typed(&self, text: &str, caret: usize, typed: char) -> Option<BufferEdit> {
		if !self.options.auto_close_brackets {
			return None;
		}
		brackets::auto_close(text, caret, typed)
	}

	/// Handles a Tab key-down.
	///
	/// Returns the caret offset past the enclosing `}}` when the keystroke
	/// should be consumed.
	pub fn on_tab(&self, text: &str, caret: usize) -> Option<usize> {
		if !self.options.tab_to_exit_brackets {
			return None;
		}
		brackets::tab_to_exit(text, caret)
	}

	fn hide(&mut self) -> PopupCommand {
		if self.popup.active {
			self.popup.hide();
			PopupCommand::Hide
		} else {
			PopupCommand::NoChange
		}
	}
}

#[cfg(test)]
mod tests;
