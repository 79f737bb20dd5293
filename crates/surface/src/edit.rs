//! Atomic buffer-edit commands issued to the text surface.

use thiserror::Error;

/// A single logical edit: replace a range, then set the caret.
///
/// The text surface must apply both parts atomically so other listeners
/// never observe the new text with the old caret (or vice versa). A
/// zero-length range with empty text is a pure caret move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferEdit {
	/// Byte offset where the replaced range begins.
	pub start: usize,
	/// Length of the replaced range.
	pub len: usize,
	/// Replacement text.
	pub text: String,
	/// Caret offset after the edit, collapsing any selection.
	pub caret: usize,
}

/// Failure to apply a [`BufferEdit`] to a buffer.
///
/// These only arise when the edit was computed against a different buffer
/// state than the one it is applied to.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
	#[error("edit range {start}..{end} exceeds buffer length {len}")]
	OutOfBounds { start: usize, end: usize, len: usize },
	#[error("edit offset {offset} is not a char boundary")]
	NotCharBoundary { offset: usize },
}

/// Applies an edit to a plain `String` buffer.
///
/// Reference implementation of the text-surface side of the contract; also
/// used by the scenario tests.
pub fn apply_edit(buffer: &mut String, edit: &BufferEdit) -> Result<(), EditError> {
	let end = edit.start + edit.len;
	if end > buffer.len() {
		return Err(EditError::OutOfBounds {
			start: edit.start,
			end,
			len: buffer.len(),
		});
	}
	for offset in [edit.start, end] {
		if !buffer.is_char_boundary(offset) {
			return Err(EditError::NotCharBoundary { offset });
		}
	}
	buffer.replace_range(edit.start..end, &edit.text);
	Ok(())
}
