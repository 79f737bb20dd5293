//! Token classification and candidate resolution.
//!
//! A token is split into whitespace-delimited segments; the segment under
//! the caret is classified by its leading sigil (`#` block helper, `>`
//! partial, otherwise a dotted data/helper path) and matched against the
//! catalog. Which entry kinds are eligible in path contexts differs across
//! the historical surface variants, so it is carried as explicit
//! configuration rather than hardcoded.

use crate::catalog::{Catalog, EntryKind, KindSet, SuggestionEntry, starts_with_ci};
use crate::token::Token;

/// Syntactic role of the segment under the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
	/// `>name`: completing a partial reference.
	PartialRef,
	/// `#name`: completing a block-helper reference.
	BlockHelperRef,
	/// A dotted data path or helper name.
	PathOrHelper,
}

/// Location of the active segment within the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSegment {
	/// Index into the space-split segment list.
	pub index: usize,
	/// Byte offset of the segment start within the token.
	pub start: usize,
}

/// Per-context entry-kind eligibility.
///
/// Block-helper and partial contexts always match their own kinds; the two
/// path-shaped contexts varied across the reference implementations and
/// are configurable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveConfig {
	/// Kinds eligible in a plain path context.
	pub path_kinds: KindSet,
	/// Kinds eligible for an argument of a recognized helper invocation.
	pub helper_argument_kinds: KindSet,
}

impl Default for ResolveConfig {
	fn default() -> Self {
		Self {
			path_kinds: KindSet::DATA.union(KindSet::HELPER),
			helper_argument_kinds: KindSet::DATA,
		}
	}
}

impl ResolveConfig {
	/// The broadened variant: helpers are eligible in both path contexts.
	pub fn broadened() -> Self {
		let kinds = KindSet::DATA.union(KindSet::HELPER);
		Self {
			path_kinds: kinds,
			helper_argument_kinds: kinds,
		}
	}
}

/// Outcome of resolving a token against the catalog: the ordered candidate
/// list, the prefix being completed, and where the active segment sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
	/// Matching entries, in catalog order.
	pub candidates: Vec<&'a SuggestionEntry>,
	/// The identifier prefix being typed, sigil stripped.
	pub match_prefix: String,
	/// The segment the caret occupies.
	pub segment: ActiveSegment,
	/// How the active segment was classified.
	pub role: SegmentRole,
}

/// Finds the segment containing `caret` among the space-split segments of
/// `text`.
///
/// Segment spans are boundary-inclusive on both sides, so a caret exactly
/// between two segments belongs to the earlier one. A caret past every
/// span (trailing space) falls back to the last segment.
pub(crate) fn locate_active_segment(text: &str, caret: usize) -> ActiveSegment {
	let mut start = 0;
	let mut last = ActiveSegment { index: 0, start: 0 };
	for (i, segment) in text.split(' ').enumerate() {
		let end = start + segment.len();
		last = ActiveSegment { index: i, start };
		if caret >= start && caret <= end {
			return last;
		}
		start = end + 1;
	}
	// Caret past every span; fall back to the last segment.
	last
}

/// Resolves the token into a filtered candidate list.
///
/// Returns `None` when nothing is left to suggest: the filter produced no
/// candidates, or exactly one candidate whose name already equals the
/// typed prefix (case-insensitive), in which case there is nothing left to
/// complete.
pub fn resolve<'a>(token: &Token<'_>, catalog: &'a Catalog, config: &ResolveConfig) -> Option<Resolution<'a>> {
	let segment_loc = locate_active_segment(token.text, token.caret);
	let segment = token
		.text
		.split(' ')
		.nth(segment_loc.index)
		.unwrap_or_default();

	if let Some(prefix) = segment.strip_prefix('#') {
		let candidates = filter_top_level(catalog, EntryKind::BlockHelper, prefix);
		return finish(candidates, prefix, segment_loc, SegmentRole::BlockHelperRef);
	}

	// The partial sigil marks the whole token, even when the caret sits in
	// a later segment.
	if token.text.trim_start().starts_with('>') {
		let prefix = segment.strip_prefix('>').unwrap_or(segment);
		let candidates = filter_top_level(catalog, EntryKind::Partial, prefix);
		return finish(candidates, prefix, segment_loc, SegmentRole::PartialRef);
	}

	// A token whose first segment names a configured helper restricts its
	// argument completions.
	let first_segment = token.text.split(' ').next().unwrap_or_default();
	let is_helper_context = catalog.has_top_level(EntryKind::Helper, first_segment);
	let kinds = if is_helper_context {
		config.helper_argument_kinds
	} else {
		config.path_kinds
	};

	let path_parts: Vec<&str> = segment.split('.').collect();
	let (&prefix, ancestors) = path_parts.split_last().unwrap_or((&"", &[]));
	let scope = catalog.descend(ancestors).unwrap_or_default();
	let candidates: Vec<&SuggestionEntry> = scope
		.iter()
		.filter(|e| kinds.admits(e.kind) && e.name_starts_with(prefix))
		.collect();
	finish(candidates, prefix, segment_loc, SegmentRole::PathOrHelper)
}

fn filter_top_level<'a>(catalog: &'a Catalog, kind: EntryKind, prefix: &str) -> Vec<&'a SuggestionEntry> {
	catalog
		.top_level()
		.iter()
		.filter(|e| e.kind == kind && starts_with_ci(&e.name, prefix))
		.collect()
}

fn finish<'a>(
	candidates: Vec<&'a SuggestionEntry>,
	prefix: &str,
	segment: ActiveSegment,
	role: SegmentRole,
) -> Option<Resolution<'a>> {
	if candidates.is_empty() {
		return None;
	}
	// A single candidate the user has already fully typed leaves nothing
	// to complete.
	if candidates.len() == 1 && candidates[0].name_eq(prefix) {
		return None;
	}
	Some(Resolution {
		candidates,
		match_prefix: prefix.to_string(),
		segment,
		role,
	})
}
