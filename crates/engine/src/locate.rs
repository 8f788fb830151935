//! Literal, case-insensitive occurrence search over the visible ranges.

use std::collections::HashSet;

use acejump_primitives::{Position, Range};
use regex::{Regex, RegexBuilder};
use tracing::{trace, warn};

use crate::document::Document;

/// One occurrence of the needle in the visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchInfo {
	/// Where the occurrence starts; the jump target.
	pub start: Position,
	/// The covered text.
	pub range: Range,
	/// Uppercased character right after the match, `None` at a line end.
	pub next_char: Option<char>,
	/// Uppercased character after `next_char`, `None` at a line end.
	pub next_next_char: Option<char>,
}

/// Result of a search: matches in document order plus the cap flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Located {
	/// Matches in ascending start order.
	pub matches: Vec<MatchInfo>,
	/// True when scanning stopped at the cap with more occurrences remaining.
	pub truncated: bool,
}

/// Uppercase-normalizes a character for label comparisons.
pub(crate) fn fold(c: char) -> char {
	c.to_uppercase().next().unwrap_or(c)
}

fn literal_regex(needle: &str) -> Option<Regex> {
	match RegexBuilder::new(&regex::escape(needle)).case_insensitive(true).build() {
		Ok(re) => Some(re),
		Err(e) => {
			warn!(error = %e, "needle does not compile as a literal pattern");
			None
		}
	}
}

/// Finds up to `cap` occurrences of `needle` inside `doc`'s visible ranges.
///
/// Matching is literal and case-insensitive. An occurrence counts only when
/// it lies entirely inside one visible range. An occurrence seen through two
/// overlapping ranges counts once, and only distinct occurrences count toward
/// `cap`. An empty needle finds nothing.
pub fn locate<D: Document + ?Sized>(doc: &D, needle: &str, cap: usize) -> Located {
	let mut located = Located::default();
	if needle.is_empty() || cap == 0 {
		return located;
	}
	let Some(re) = literal_regex(needle) else {
		return located;
	};

	let mut ranges = doc.visible_ranges();
	ranges.sort_by_key(|r| r.start);
	let mut seen = HashSet::new();

	'ranges: for visible in ranges {
		let text = doc.text_of_range(visible);
		let base = doc.offset_at(visible.start);

		let mut byte_cursor = 0;
		let mut char_cursor = 0;
		for m in re.find_iter(&text) {
			char_cursor += text[byte_cursor..m.start()].chars().count();
			byte_cursor = m.start();
			let start_char = base + char_cursor;
			let end_char = start_char + m.as_str().chars().count();

			let start = doc.position_at(start_char);
			let end = doc.position_at(end_char);
			let range = Range::new(start, end);
			if !visible.contains_range(&range) || seen.contains(&start) {
				continue;
			}
			if located.matches.len() == cap {
				located.truncated = true;
				break 'ranges;
			}
			seen.insert(start);

			located.matches.push(MatchInfo {
				start,
				range,
				next_char: doc.character_at(end).map(fold),
				next_next_char: doc.character_at(end.shifted(1)).map(fold),
			});
		}
	}

	located.matches.sort_by_key(|m| m.start);
	trace!(needle, found = located.matches.len(), truncated = located.truncated, "located matches");
	located
}
