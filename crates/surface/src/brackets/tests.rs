use pretty_assertions::assert_eq;

use super::{auto_close, tab_to_exit};
use crate::edit::apply_edit;

#[test]
fn typing_second_brace_inserts_closer() {
	// Buffer state after the '{' landed: "{{", caret after it.
	let mut buffer = String::from("{{");
	let edit = auto_close(&buffer, 2, '{').unwrap();
	apply_edit(&mut buffer, &edit).unwrap();
	assert_eq!(buffer, "{{}}");
	assert_eq!(edit.caret, 2);
}

#[test]
fn auto_close_works_mid_buffer() {
	let mut buffer = String::from("a {{ b");
	let edit = auto_close(&buffer, 4, '{').unwrap();
	apply_edit(&mut buffer, &edit).unwrap();
	assert_eq!(buffer, "a {{}} b");
	assert_eq!(edit.caret, 4);
}

#[test]
fn single_brace_does_not_fire() {
	assert!(auto_close("{", 1, '{').is_none());
	assert!(auto_close("a{", 2, '{').is_none());
}

#[test]
fn other_characters_do_not_fire() {
	// Re-scanning existing text must not re-trigger; only the insertion
	// event for '{' does.
	assert!(auto_close("{{}}", 2, '}').is_none());
	assert!(auto_close("{{}}", 2, 'x').is_none());
}

#[test]
fn tab_inside_expression_exits_past_closer() {
	assert_eq!(tab_to_exit("{{abc}}", 4), Some(7));
	assert_eq!(tab_to_exit("{{}}", 2), Some(4));
}

#[test]
fn tab_outside_expression_is_ignored() {
	assert_eq!(tab_to_exit("plain text", 5), None);
	assert_eq!(tab_to_exit("{{done}} after", 10), None);
	assert_eq!(tab_to_exit("before {{open", 3), None);
}

#[test]
fn tab_with_unclosed_expression_is_ignored() {
	assert_eq!(tab_to_exit("{{open", 4), None);
}
