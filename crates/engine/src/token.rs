//! Token extraction: locating the live `{{ ... }}` expression at the caret.
//!
//! All offsets are byte offsets into the buffer string. The caller is
//! expected to pass a caret it obtained from the same string; a caret past
//! the end of the buffer or off a character boundary is treated as "no
//! token" rather than a fault, so extraction can never panic on
//! unanticipated text/offset combinations.

/// A live token: the raw text between the nearest enclosing `{{` and `}}`
/// (or the caret, for an unclosed expression).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	/// Raw token text, without the surrounding braces.
	pub text: &'a str,
	/// Byte offset in the buffer where the token starts (just after `{{`).
	pub start: usize,
	/// Caret position relative to `start`. Always within `0..=text.len()`.
	pub caret: usize,
}

/// Extracts the token enclosing `caret`, if the caret sits inside an
/// active expression.
///
/// Returns `None` when the caret is outside any `{{ ... }}`, when a stray
/// `{` or `}` appears between the caret and the expression end (malformed
/// or ambiguous nesting), or when the caret is inside a quoted string
/// literal argument.
///
/// For a closed expression the token spans up to the `}}`; for an unclosed
/// one it spans up to the caret; text after the caret is not part of the
/// live token.
pub fn extract(text: &str, caret: usize) -> Option<Token<'_>> {
	if caret > text.len() || !text.is_char_boundary(caret) {
		return None;
	}

	// Nearest opener fully before the caret.
	let open = text[..caret].rfind("{{")?;
	let start = open + 2;

	let token = match text[start..].find("}}") {
		Some(rel) => {
			let close = start + rel;
			// Caret must lie within the expression, up to the boundary
			// immediately before the closer.
			if caret > close {
				return None;
			}
			if has_stray_brace(&text[caret..close]) {
				return None;
			}
			&text[start..close]
		}
		None => {
			if has_stray_brace(&text[caret..]) {
				return None;
			}
			&text[start..caret]
		}
	};

	let caret_in_token = caret - start;
	if caret_in_token > token.len() {
		return None;
	}
	if in_quoted_literal(token, caret_in_token) {
		return None;
	}

	Some(Token {
		text: token,
		start,
		caret: caret_in_token,
	})
}

fn has_stray_brace(s: &str) -> bool {
	s.bytes().any(|b| b == b'{' || b == b'}')
}

/// Whether the caret sits inside a single- or double-quoted literal.
///
/// Quotes of one kind are inert while the other kind is open, matching
/// plain string-literal scanning without escape handling.
fn in_quoted_literal(token: &str, caret_in_token: usize) -> bool {
	let mut in_single = false;
	let mut in_double = false;
	for ch in token[..caret_in_token].chars() {
		match ch {
			'\'' if !in_double => in_single = !in_single,
			'"' if !in_single => in_double = !in_double,
			_ => {}
		}
	}
	in_single || in_double
}
