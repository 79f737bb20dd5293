//! Bracket conveniences: auto-closing `{{` and Tab-to-exit.
//!
//! Both are pure functions of a single input event, so neither can re-fire
//! from a buffer re-scan. The driver invokes [`auto_close`] only from a
//! text-input event and [`tab_to_exit`] only from a Tab key-down.

use crate::edit::BufferEdit;

/// Auto-closes a freshly typed `{{` pair.
///
/// When the typed character is `{` and the two characters ending at the
/// caret now form `{{`, returns an edit inserting `}}` at the caret with
/// the caret left between the pairs. Returns `None` otherwise.
pub fn auto_close(text: &str, caret: usize, typed: char) -> Option<BufferEdit> {
	if typed != '{' || caret < 2 || caret > text.len() || !text.is_char_boundary(caret) {
		return None;
	}
	if &text[caret - 2..caret] != "{{" {
		return None;
	}
	Some(BufferEdit {
		start: caret,
		len: 0,
		text: "}}".to_string(),
		caret,
	})
}

/// Tab-to-exit: jumps past the closing `}}` of the enclosing expression.
///
/// Returns the new caret offset when an enclosing span exists (opener
/// strictly before the caret, closer at or after it); the caller then
/// consumes the Tab keystroke. Returns `None` when the caret is not inside
/// an expression.
pub fn tab_to_exit(text: &str, caret: usize) -> Option<usize> {
	if caret > text.len() || !text.is_char_boundary(caret) {
		return None;
	}
	text[..caret].rfind("{{")?;
	let close = caret + text[caret..].find("}}")?;
	Some(close + 2)
}

#[cfg(test)]
mod tests;
