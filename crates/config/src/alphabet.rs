//! Label alphabet: the ordered letters labels are drawn from.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// Home-row-first priority order used when no alphabet is configured.
pub const DEFAULT_ALPHABET: &str = "JFKDLSHGAYTNBURMVIECOXWPZQ";

/// An ordered set of distinct uppercase ASCII letters.
///
/// Order is priority: earlier letters are handed out first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
	letters: Vec<char>,
}

impl Alphabet {
	/// Validates and normalizes `letters` to uppercase.
	pub fn new(letters: &str) -> Result<Self> {
		let mut out: Vec<char> = Vec::with_capacity(letters.len());
		for c in letters.chars() {
			if !c.is_ascii_alphabetic() {
				return Err(ConfigError::InvalidAlphabetChar(c));
			}
			let upper = c.to_ascii_uppercase();
			if out.contains(&upper) {
				return Err(ConfigError::DuplicateAlphabetChar(upper));
			}
			out.push(upper);
		}
		if out.is_empty() {
			return Err(ConfigError::EmptyAlphabet);
		}
		Ok(Self { letters: out })
	}

	/// Returns the letters in priority order.
	pub fn letters(&self) -> &[char] {
		&self.letters
	}

	/// Returns the number of letters.
	#[allow(clippy::len_without_is_empty, reason = "an alphabet holds at least one letter")]
	pub fn len(&self) -> usize {
		self.letters.len()
	}
}

impl Default for Alphabet {
	fn default() -> Self {
		Self {
			letters: DEFAULT_ALPHABET.chars().collect(),
		}
	}
}

impl FromStr for Alphabet {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self> {
		Self::new(s)
	}
}

impl fmt::Display for Alphabet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.letters.iter().try_for_each(|c| write!(f, "{c}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_26_distinct_letters() {
		let alphabet = Alphabet::default();
		assert_eq!(alphabet.len(), 26);
		assert_eq!(alphabet.to_string(), DEFAULT_ALPHABET);
		assert_eq!(Alphabet::new(DEFAULT_ALPHABET).unwrap(), alphabet);
	}

	#[test]
	fn lowercase_is_normalized() {
		let alphabet: Alphabet = "asdf".parse().unwrap();
		assert_eq!(alphabet.letters(), &['A', 'S', 'D', 'F']);
		assert_eq!(alphabet.len(), 4);
	}

	#[test]
	fn rejects_empty() {
		assert!(matches!(Alphabet::new(""), Err(ConfigError::EmptyAlphabet)));
	}

	#[test]
	fn rejects_non_letters() {
		assert!(matches!(Alphabet::new("ab1"), Err(ConfigError::InvalidAlphabetChar('1'))));
		assert!(matches!(Alphabet::new("a b"), Err(ConfigError::InvalidAlphabetChar(' '))));
	}

	#[test]
	fn rejects_case_insensitive_duplicates() {
		assert!(matches!(Alphabet::new("abA"), Err(ConfigError::DuplicateAlphabetChar('A'))));
	}
}
