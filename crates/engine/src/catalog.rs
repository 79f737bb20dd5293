//! The suggestion catalog: a tree of named, typed entries.
//!
//! The embedding application builds the catalog once at configuration time;
//! the engine only reads it. The root's children form the top-level
//! namespace, and `Data` entries may nest children for dotted-path
//! completion (`Order.OrderNum`). The structure is always a tree: every
//! child is owned by exactly one parent.

use bitflags::bitflags;

/// Syntactic role of a catalog entry.
///
/// The kind decides which contexts an entry can complete in: `Partial`
/// entries only after a `>` sigil, `BlockHelper` only after `#`, and
/// `Data`/`Helper` in path positions subject to the configured
/// eligibility table (see [`crate::resolve::ResolveConfig`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryKind {
	/// A value reachable by a dotted data path.
	Data,
	/// An inline helper invoked as the first segment of an expression.
	Helper,
	/// A block helper referenced as `{{#name}}`.
	BlockHelper,
	/// A partial template referenced as `{{>name}}`.
	Partial,
}

bitflags! {
	/// A set of [`EntryKind`]s, used for per-context eligibility rules.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct KindSet: u8 {
		const DATA = 1 << 0;
		const HELPER = 1 << 1;
		const BLOCK_HELPER = 1 << 2;
		const PARTIAL = 1 << 3;
	}
}

impl KindSet {
	/// Whether this set admits the given kind.
	pub fn admits(self, kind: EntryKind) -> bool {
		self.contains(match kind {
			EntryKind::Data => KindSet::DATA,
			EntryKind::Helper => KindSet::HELPER,
			EntryKind::BlockHelper => KindSet::BLOCK_HELPER,
			EntryKind::Partial => KindSet::PARTIAL,
		})
	}
}

/// One node of the catalog tree.
///
/// Names are matched case-insensitively but inserted with the case they
/// were configured with. Sibling names need not be unique; duplicates are
/// matched independently and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuggestionEntry {
	/// Display and insertion text.
	pub name: String,
	/// Syntactic role.
	pub kind: EntryKind,
	/// Nested entries for dotted-path completion. Only meaningful for
	/// `Data` nesting; empty by default.
	#[cfg_attr(feature = "serde", serde(default))]
	pub children: Vec<SuggestionEntry>,
}

impl SuggestionEntry {
	/// Creates an entry of the given kind with no children.
	pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
		Self {
			name: name.into(),
			kind,
			children: Vec::new(),
		}
	}

	/// Creates a `Data` entry.
	pub fn data(name: impl Into<String>) -> Self {
		Self::new(name, EntryKind::Data)
	}

	/// Creates a `Helper` entry.
	pub fn helper(name: impl Into<String>) -> Self {
		Self::new(name, EntryKind::Helper)
	}

	/// Creates a `BlockHelper` entry.
	pub fn block_helper(name: impl Into<String>) -> Self {
		Self::new(name, EntryKind::BlockHelper)
	}

	/// Creates a `Partial` entry.
	pub fn partial(name: impl Into<String>) -> Self {
		Self::new(name, EntryKind::Partial)
	}

	/// Attaches children, consuming and returning the entry.
	pub fn with_children(mut self, children: Vec<SuggestionEntry>) -> Self {
		self.children = children;
		self
	}

	/// Case-insensitive name equality.
	pub fn name_eq(&self, other: &str) -> bool {
		self.name.eq_ignore_ascii_case(other)
	}

	/// Case-insensitive prefix match against the name.
	pub fn name_starts_with(&self, prefix: &str) -> bool {
		starts_with_ci(&self.name, prefix)
	}
}

/// The configured top-level namespace.
///
/// Conceptually the unnamed root of the entry tree; `entries` are its
/// children. Read-only for the engine's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
	/// Top-level entries, in configured order.
	pub entries: Vec<SuggestionEntry>,
}

impl Catalog {
	/// Creates a catalog from its top-level entries.
	pub fn new(entries: Vec<SuggestionEntry>) -> Self {
		Self { entries }
	}

	/// Top-level entries in configured order.
	pub fn top_level(&self) -> &[SuggestionEntry] {
		&self.entries
	}

	/// Whether some top-level entry of the given kind has exactly this
	/// name (case-insensitive).
	pub fn has_top_level(&self, kind: EntryKind, name: &str) -> bool {
		self.entries.iter().any(|e| e.kind == kind && e.name_eq(name))
	}

	/// Walks a dotted path through the tree, returning the children of the
	/// node reached by the final component.
	///
	/// The walk is case-insensitive and takes the first matching child at
	/// each step. The first unmatched component aborts the walk and yields
	/// `None`. That is not an error, just an empty scope for the caller.
	pub fn descend(&self, components: &[&str]) -> Option<&[SuggestionEntry]> {
		let mut scope = self.entries.as_slice();
		for component in components {
			let node = scope.iter().find(|e| e.name_eq(component))?;
			scope = &node.children;
		}
		Some(scope)
	}
}

/// Case-insensitive (ASCII) prefix test.
pub(crate) fn starts_with_ci(name: &str, prefix: &str) -> bool {
	name.len() >= prefix.len()
		&& name
			.as_bytes()
			.iter()
			.zip(prefix.as_bytes())
			.all(|(a, b)| a.eq_ignore_ascii_case(b))
}
