//! Label assignment.
//!
//! Every match gets the shortest label that cannot be mistaken for the text
//! following it. If a label's first letter equalled a match's next character,
//! typing that letter would be ambiguous between "jump" and "keep searching".
//! The same holds for the second letter of a two-letter label and the
//! character after that.
//!
//! First letters are dealt round-robin, in document order, from the alphabet
//! minus every next character. Only when matches outnumber those letters do
//! labels grow a second letter, and only inside buckets sharing a first
//! letter. Labels never grow past two letters; a batch that cannot be labeled
//! fails as a whole.

use std::fmt;

use acejump_config::Alphabet;
use smallvec::{SmallVec, smallvec};
use thiserror::Error;
use tracing::trace;

use crate::locate::MatchInfo;

/// A non-empty sequence of uppercase alphabet letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
	chars: SmallVec<[char; 2]>,
}

impl Label {
	/// Creates a one-letter label.
	pub fn single(first: char) -> Self {
		Self { chars: smallvec![first] }
	}

	/// Creates a two-letter label.
	pub fn pair(first: char, second: char) -> Self {
		Self {
			chars: smallvec![first, second],
		}
	}

	/// Returns the letters in typing order.
	pub fn chars(&self) -> &[char] {
		&self.chars
	}

	/// Returns the first letter.
	pub fn first(&self) -> char {
		self.chars[0]
	}

	/// Returns the number of letters.
	#[allow(clippy::len_without_is_empty, reason = "labels are never empty")]
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	/// Returns true if this label is exactly the single letter `c`.
	pub fn is(&self, c: char) -> bool {
		self.chars.len() == 1 && self.chars[0] == c
	}

	/// Returns true if this label is longer than one letter and starts with `c`.
	pub fn is_proper_prefix(&self, c: char) -> bool {
		self.chars.len() > 1 && self.chars[0] == c
	}

	/// Returns the label without its first letter, or `None` if nothing remains.
	pub fn strip_first(&self) -> Option<Self> {
		(self.chars.len() > 1).then(|| Self {
			chars: self.chars[1..].iter().copied().collect(),
		})
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.chars.iter().try_for_each(|c| write!(f, "{c}"))
	}
}

/// The alphabet cannot produce unambiguous labels for every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot label {matches} matches without ambiguity")]
pub struct LabelSpaceExhausted {
	/// Number of matches that needed labels.
	pub matches: usize,
}

/// Assigns one label per match, in the same order as `matches`.
///
/// `matches` must be in document order; the assignment is deterministic for
/// a given input. Labels are pairwise distinct, no label starts with its
/// match's `next_char`, and in a bucket of two-letter labels no second letter
/// equals any member's `next_next_char`.
pub fn assign_labels(matches: &[MatchInfo], alphabet: &Alphabet) -> Result<Vec<Label>, LabelSpaceExhausted> {
	let n = matches.len();
	if n == 0 {
		return Ok(Vec::new());
	}
	let exhausted = LabelSpaceExhausted { matches: n };

	let firsts: Vec<char> = alphabet
		.letters()
		.iter()
		.copied()
		.filter(|&c| !matches.iter().any(|m| m.next_char == Some(c)))
		.collect();
	let k = firsts.len();
	trace!(matches = n, letters = alphabet.len(), first_letters = k, "assigning labels");
	if k == 0 {
		return Err(exhausted);
	}

	if n <= k {
		return Ok(firsts[..n].iter().map(|&c| Label::single(c)).collect());
	}

	// Bucket j holds matches j, j + k, j + 2k, ... and shares first letter firsts[j].
	let mut labels: Vec<Option<Label>> = vec![None; n];
	for (j, &first) in firsts.iter().enumerate() {
		let members: Vec<usize> = (j..n).step_by(k).collect();
		if members.len() == 1 {
			labels[j] = Some(Label::single(first));
			continue;
		}

		let mut seconds = alphabet
			.letters()
			.iter()
			.copied()
			.filter(|&c| !members.iter().any(|&i| matches[i].next_next_char == Some(c)));
		for &i in &members {
			let Some(second) = seconds.next() else {
				trace!(first = %first, members = members.len(), "label bucket exhausted");
				return Err(exhausted);
			};
			labels[i] = Some(Label::pair(first, second));
		}
	}

	labels.into_iter().collect::<Option<Vec<_>>>().ok_or(exhausted)
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use acejump_primitives::{Position, Range};
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	fn info(column: usize, next: Option<char>, next_next: Option<char>) -> MatchInfo {
		let start = Position::new(0, column);
		MatchInfo {
			start,
			range: Range::new(start, start.shifted(1)),
			next_char: next,
			next_next_char: next_next,
		}
	}

	fn plain(n: usize) -> Vec<MatchInfo> {
		(0..n).map(|i| info(i * 2, None, None)).collect()
	}

	fn strings(labels: &[Label]) -> Vec<String> {
		labels.iter().map(Label::to_string).collect()
	}

	#[test]
	fn no_matches_no_labels() {
		assert_eq!(assign_labels(&[], &Alphabet::default()), Ok(Vec::new()));
	}

	#[test]
	fn few_matches_get_single_letters_in_priority_order() {
		let matches = vec![info(1, Some(' '), None), info(5, Some(' '), None), info(9, None, None)];
		let labels = assign_labels(&matches, &Alphabet::default()).unwrap();
		assert_eq!(strings(&labels), vec!["J", "F", "K"]);
	}

	#[test]
	fn next_chars_are_skipped_for_every_match() {
		let matches = vec![info(0, Some('J'), None), info(4, Some('K'), None), info(8, None, None)];
		let labels = assign_labels(&matches, &Alphabet::default()).unwrap();
		assert_eq!(strings(&labels), vec!["F", "D", "L"]);
	}

	#[test]
	fn thirty_matches_over_26_letters() {
		let alphabet = Alphabet::default();
		let labels = assign_labels(&plain(30), &alphabet).unwrap();
		let letters = alphabet.letters();

		for i in 4..26 {
			assert_eq!(labels[i], Label::single(letters[i]), "match {i}");
		}
		for j in 0..4 {
			assert_eq!(labels[j], Label::pair(letters[j], letters[0]));
			assert_eq!(labels[j + 26], Label::pair(letters[j], letters[1]));
		}
	}

	#[test]
	fn second_letters_skip_bucket_next_next_chars() {
		let alphabet = Alphabet::new("AB").unwrap();
		let matches = vec![
			info(0, None, Some('A')),
			info(2, None, None),
			info(4, None, None),
		];
		// Bucket A = {0, 2}; 'A' is excluded as a second letter, leaving only 'B'.
		assert_eq!(assign_labels(&matches, &alphabet), Err(LabelSpaceExhausted { matches: 3 }));

		let alphabet = Alphabet::new("ABC").unwrap();
		let matches = vec![
			info(0, None, Some('A')),
			info(2, None, None),
			info(4, None, None),
			info(6, None, None),
		];
		let labels = assign_labels(&matches, &alphabet).unwrap();
		assert_eq!(strings(&labels), vec!["AB", "B", "C", "AC"]);
	}

	#[test]
	fn every_letter_blocked_fails_closed() {
		let alphabet = Alphabet::default();
		let matches: Vec<MatchInfo> = alphabet
			.letters()
			.iter()
			.enumerate()
			.map(|(i, &c)| info(i * 3, Some(c), None))
			.collect();
		assert_eq!(assign_labels(&matches, &alphabet), Err(LabelSpaceExhausted { matches: 26 }));
	}

	#[rstest]
	#[case(1, 1)]
	#[case(3, 9)]
	#[case(3, 10)]
	#[case(26, 676)]
	fn capacity_boundary(#[case] letters: usize, #[case] n: usize) {
		let alphabet = Alphabet::new(&acejump_config::DEFAULT_ALPHABET[..letters]).unwrap();
		let result = assign_labels(&plain(n), &alphabet);
		if n <= letters * letters || n <= letters {
			let labels = result.unwrap();
			assert_eq!(labels.iter().collect::<HashSet<_>>().len(), n);
		} else {
			assert_eq!(result, Err(LabelSpaceExhausted { matches: n }));
		}
	}

	#[test]
	fn label_helpers() {
		let label = Label::pair('J', 'F');
		assert!(label.is_proper_prefix('J'));
		assert!(!label.is('J'));
		assert_eq!(label.strip_first(), Some(Label::single('F')));
		assert_eq!(Label::single('K').strip_first(), None);
		assert!(Label::single('K').is('K'));
	}

	fn arb_matches() -> impl Strategy<Value = Vec<MatchInfo>> {
		let next = proptest::option::of(proptest::char::range('A', 'Z'));
		prop::collection::vec((next.clone(), next), 0..120).prop_map(|nexts| {
			nexts
				.into_iter()
				.enumerate()
				.map(|(i, (a, b))| info(i * 3, a, b))
				.collect()
		})
	}

	proptest! {
		#[test]
		fn prop_labels_are_distinct_and_unambiguous(matches in arb_matches()) {
			let alphabet = Alphabet::default();
			let Ok(labels) = assign_labels(&matches, &alphabet) else {
				return Ok(());
			};
			prop_assert_eq!(labels.len(), matches.len());

			let unique: HashSet<&Label> = labels.iter().collect();
			prop_assert_eq!(unique.len(), labels.len());

			for (m, label) in matches.iter().zip(&labels) {
				prop_assert!(label.len() <= 2);
				prop_assert_ne!(Some(label.first()), m.next_char);
			}
			for (i, (mi, li)) in matches.iter().zip(&labels).enumerate() {
				for (mj, lj) in matches.iter().zip(&labels).skip(i + 1) {
					if li.first() == lj.first() {
						prop_assert_eq!(li.len(), 2);
						prop_assert_eq!(lj.len(), 2);
						prop_assert_ne!(li.chars()[1], lj.chars()[1]);
						prop_assert_ne!(Some(li.chars()[1]), mi.next_next_char);
						prop_assert_ne!(Some(lj.chars()[1]), mj.next_next_char);
					}
				}
			}
		}

		#[test]
		fn prop_single_letters_when_enough_candidates(matches in arb_matches()) {
			let alphabet = Alphabet::default();
			let candidates = alphabet
				.letters()
				.iter()
				.filter(|&&c| !matches.iter().any(|m| m.next_char == Some(c)))
				.count();
			if candidates > 0 && matches.len() <= candidates {
				let labels = assign_labels(&matches, &alphabet).unwrap();
				prop_assert!(labels.iter().all(|l| l.len() == 1));
			}
		}

		#[test]
		fn prop_assignment_is_deterministic(matches in arb_matches()) {
			let alphabet = Alphabet::default();
			prop_assert_eq!(assign_labels(&matches, &alphabet), assign_labels(&matches, &alphabet));
		}
	}
}
