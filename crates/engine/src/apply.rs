//! Applying a chosen candidate: the exact text splice and caret move.
//!
//! Only the active segment is rewritten. Sigils stay attached, dotted
//! paths keep every component but the last, and sibling segments are left
//! untouched so the caret can land mid-token when further arguments
//! follow.

use crate::resolve::locate_active_segment;
use crate::token::Token;

/// A splice of the token's span in the buffer, plus the caret position
/// after the edit.
///
/// The embedding layer should apply the range replacement and the caret
/// move as one atomic edit so no listener observes an inconsistent
/// text/caret pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEdit {
	/// Buffer offset where the replaced span begins.
	pub start: usize,
	/// Length of the replaced span (the old token).
	pub old_len: usize,
	/// Replacement text (the rebuilt token).
	pub new_text: String,
	/// Caret offset after the edit: immediately past the inserted
	/// identifier and its sigil, not past the whole token.
	pub caret: usize,
}

impl TokenEdit {
	/// Applies the splice to `text`, returning the new text and caret.
	///
	/// `text` must be the same buffer state the token was extracted from;
	/// the surrounding `{{`/`}}` are untouched.
	pub fn apply_to(&self, text: &str) -> (String, usize) {
		let mut out = String::with_capacity(text.len() - self.old_len + self.new_text.len());
		out.push_str(&text[..self.start]);
		out.push_str(&self.new_text);
		out.push_str(&text[self.start + self.old_len..]);
		(out, self.caret)
	}
}

/// Rebuilds the active segment of `token` with `chosen` and computes the
/// resulting splice.
///
/// A `>` or `#` sigil on the segment is preserved; otherwise only the last
/// dot-separated path component is replaced. The token must come from the
/// same keystroke cycle as the resolution that produced `chosen`.
pub fn apply(token: &Token<'_>, chosen: &str) -> TokenEdit {
	let active = locate_active_segment(token.text, token.caret);
	let mut segments: Vec<String> = token.text.split(' ').map(str::to_string).collect();
	let segment = segments.get(active.index).cloned().unwrap_or_default();

	let rebuilt = if segment.starts_with('>') {
		format!(">{chosen}")
	} else if segment.starts_with('#') {
		format!("#{chosen}")
	} else {
		let mut parts: Vec<&str> = segment.split('.').collect();
		if let Some(last) = parts.last_mut() {
			*last = chosen;
		}
		parts.join(".")
	};

	let caret = token.start + active.start + rebuilt.len();
	if let Some(slot) = segments.get_mut(active.index) {
		*slot = rebuilt;
	}

	TokenEdit {
		start: token.start,
		old_len: token.text.len(),
		new_text: segments.join(" "),
		caret,
	}
}
