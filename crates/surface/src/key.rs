//! The minimal input vocabulary the driver consumes.
//!
//! The embedding layer maps its toolkit's key events onto these types;
//! anything the driver does not care about collapses to [`KeyInput::Other`].

/// Key modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

/// The key that triggered an input event, as far as the driver cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
	/// A printable character was typed.
	Char(char),
	Enter,
	Escape,
	Tab,
	Up,
	Down,
	/// Any other key (arrows the driver ignores, backspace, etc.).
	Other,
}
