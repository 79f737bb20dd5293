use pretty_assertions::assert_eq;

use super::{DriverOptions, PopupCommand, SuggestDriver};
use crate::key::{KeyInput, Modifiers};
use stache_engine::{Catalog, SuggestionEntry};

fn driver() -> SuggestDriver {
	SuggestDriver::new(Catalog::new(vec![
		SuggestionEntry::data("Order").with_children(vec![SuggestionEntry::data("OrderNum")]),
		SuggestionEntry::data("Customer"),
		SuggestionEntry::partial("MyPartial"),
	]))
}

fn keyup(driver: &mut SuggestDriver, text: &str, caret: usize) -> PopupCommand {
	driver.on_input(text, caret, 0, Modifiers::NONE, KeyInput::Other)
}

fn shown_names(command: &PopupCommand) -> Vec<&str> {
	match command {
		PopupCommand::Show(rows) => rows.iter().map(|row| row.name.as_str()).collect(),
		other => panic!("expected Show, got {other:?}"),
	}
}

#[test]
fn typing_inside_brackets_shows_candidates() {
	let mut driver = driver();
	let command = keyup(&mut driver, "{{Or}}", 4);
	assert_eq!(shown_names(&command), vec!["Order"]);
	assert!(driver.popup().active);
	assert_eq!(driver.selected().unwrap().name, "Order");
}

#[test]
fn caret_outside_brackets_leaves_popup_closed() {
	let mut driver = driver();
	assert_eq!(keyup(&mut driver, "plain", 3), PopupCommand::NoChange);
}

#[test]
fn losing_the_token_hides_an_open_popup() {
	let mut driver = driver();
	keyup(&mut driver, "{{Or}}", 4);
	assert_eq!(keyup(&mut driver, "{{Or}} ", 7), PopupCommand::Hide);
	assert!(!driver.popup().active);
}

#[test]
fn modifier_keys_hide() {
	let mut driver = driver();
	keyup(&mut driver, "{{Or}}", 4);
	let ctrl = Modifiers { ctrl: true, ..Modifiers::NONE };
	assert_eq!(
		driver.on_input("{{Or}}", 4, 0, ctrl, KeyInput::Other),
		PopupCommand::Hide
	);
}

#[test]
fn enter_and_escape_hide() {
	let mut driver = driver();
	keyup(&mut driver, "{{Or}}", 4);
	assert_eq!(
		driver.on_input("{{Or}}", 4, 0, Modifiers::NONE, KeyInput::Escape),
		PopupCommand::Hide
	);
	keyup(&mut driver, "{{Or}}", 4);
	assert_eq!(
		driver.on_input("{{Or}}", 4, 0, Modifiers::NONE, KeyInput::Enter),
		PopupCommand::Hide
	);
}

#[test]
fn non_empty_selection_hides() {
	let mut driver = driver();
	keyup(&mut driver, "{{Or}}", 4);
	assert_eq!(
		driver.on_input("{{Or}}", 4, 2, Modifiers::NONE, KeyInput::Other),
		PopupCommand::Hide
	);
}

#[test]
fn min_caret_guard_applies_when_configured() {
	let options = DriverOptions {
		min_caret: Some(3),
		..DriverOptions::default()
	};
	let mut driver = driver().with_options(options);
	// Caret 2 is inside "{{" but below the configured minimum.
	assert_eq!(keyup(&mut driver, "{{}}", 2), PopupCommand::NoChange);
	let command = keyup(&mut driver, "{{C}}", 3);
	assert_eq!(shown_names(&command), vec!["Customer"]);
}

#[test]
fn accept_replaces_segment_and_hides() {
	let mut driver = driver();
	let text = "{{Order.}}";
	keyup(&mut driver, text, 8);
	let edit = driver.accept(text, 8).unwrap();
	assert_eq!(edit.text, "Order.OrderNum");
	assert_eq!(edit.start, 2);
	assert_eq!(edit.len, 6);
	assert_eq!(edit.caret, 16);
	assert!(!driver.popup().active);
}

#[test]
fn accept_with_nothing_highlighted_is_a_no_op() {
	let mut driver = driver();
	assert!(driver.accept("{{Or}}", 4).is_none());
}

#[test]
fn accept_with_stale_context_is_a_no_op() {
	let mut driver = driver();
	keyup(&mut driver, "{{Or}}", 4);
	// The expression is gone by the time the candidate is activated.
	assert!(driver.accept("plain", 3).is_none());
	assert!(!driver.popup().active);
}

#[test]
fn selection_navigation_is_clamped() {
	let mut driver = driver();
	keyup(&mut driver, "{{}}", 2);
	assert_eq!(driver.selected().unwrap().name, "Order");
	driver.move_selection(-1);
	assert_eq!(driver.selected().unwrap().name, "Order");
	driver.move_selection(1);
	assert_eq!(driver.selected().unwrap().name, "Customer");
	driver.move_selection(5);
	assert_eq!(driver.selected().unwrap().name, "Customer");
}

#[test]
fn bracket_options_gate_the_conveniences() {
	let all_off = DriverOptions {
		auto_close_brackets: false,
		tab_to_exit_brackets: false,
		min_caret: None,
	};
	let off = driver().with_options(all_off);
	assert!(off.on_char_typed("{{", 2, '{').is_none());
	assert!(off.on_tab("{{x}}", 3).is_none());

	let on = driver();
	assert!(on.on_char_typed("{{", 2, '{').is_some());
	assert_eq!(on.on_tab("{{x}}", 3), Some(5));
}
