//! Popup state: the only thing that persists across keystrokes.
//!
//! The engine recomputes candidates from scratch on every input event; the
//! popup merely remembers whether it is open, which row is highlighted,
//! and how far the viewport has scrolled.

use stache_engine::EntryKind;

/// One row of the candidate list, owned by the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
	/// Display and insertion text, case-preserving.
	pub name: String,
	/// The entry's syntactic role, for iconography or grouping.
	pub kind: EntryKind,
}

/// State for managing the suggestion popup.
#[derive(Debug, Clone, Default)]
pub struct PopupState {
	/// Visible candidate rows, in catalog order.
	pub items: Vec<CandidateRow>,
	/// Index of the currently highlighted row, if any.
	pub selected_idx: Option<usize>,
	/// Whether the popup is open.
	pub active: bool,
	/// Scroll offset for the popup viewport.
	pub scroll_offset: usize,
}

impl PopupState {
	/// Maximum number of visible rows in the popup viewport.
	pub const MAX_VISIBLE: usize = 10;

	/// Replaces the candidate list and opens the popup.
	///
	/// If the previously highlighted name survives re-filtering the
	/// highlight follows it; otherwise the first row is highlighted.
	pub fn show(&mut self, items: Vec<CandidateRow>) {
		let carried = self
			.selected_name()
			.and_then(|name| items.iter().position(|row| row.name == name));
		self.items = items;
		self.selected_idx = match carried {
			Some(idx) => Some(idx),
			None if self.items.is_empty() => None,
			None => Some(0),
		};
		self.active = true;
		self.ensure_selected_visible();
	}

	/// Closes the popup and clears its rows.
	pub fn hide(&mut self) {
		self.items.clear();
		self.selected_idx = None;
		self.active = false;
		self.scroll_offset = 0;
	}

	/// The currently highlighted row, if the popup is open.
	pub fn selected(&self) -> Option<&CandidateRow> {
		if !self.active {
			return None;
		}
		self.selected_idx.and_then(|idx| self.items.get(idx))
	}

	fn selected_name(&self) -> Option<String> {
		self.selected().map(|row| row.name.clone())
	}

	/// Moves the highlight by `delta`, clamped to the list bounds (no
	/// wrapping).
	pub fn move_selection(&mut self, delta: isize) {
		if !self.active || self.items.is_empty() {
			return;
		}
		let current = self.selected_idx.unwrap_or(0) as isize;
		let last = (self.items.len() - 1) as isize;
		let next = (current + delta).clamp(0, last);
		self.selected_idx = Some(next as usize);
		self.ensure_selected_visible();
	}

	/// Ensures the highlighted row is inside the viewport.
	pub fn ensure_selected_visible(&mut self) {
		let Some(selected) = self.selected_idx else {
			return;
		};
		if selected < self.scroll_offset {
			self.scroll_offset = selected;
		}
		let visible_end = self.scroll_offset + Self::MAX_VISIBLE;
		if selected >= visible_end {
			self.scroll_offset = selected.saturating_sub(Self::MAX_VISIBLE - 1);
		}
	}

	/// Returns the range of visible rows (start..end indices).
	pub fn visible_range(&self) -> std::ops::Range<usize> {
		let end = (self.scroll_offset + Self::MAX_VISIBLE).min(self.items.len());
		self.scroll_offset..end
	}
}
