//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or field types.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The label alphabet has no characters.
	#[error("label alphabet must not be empty")]
	EmptyAlphabet,

	/// The label alphabet contains something other than an ASCII letter.
	#[error("invalid label character {0:?} (expected an ASCII letter)")]
	InvalidAlphabetChar(char),

	/// The label alphabet repeats a letter.
	#[error("label alphabet repeats {0:?}")]
	DuplicateAlphabetChar(char),

	/// The match cap must allow at least one match.
	#[error("match-cap must be at least 1, got {0}")]
	InvalidMatchCap(usize),
}

/// Non-fatal issue found while parsing; the offending entry is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
	/// A top-level key that no option recognizes.
	#[error("unknown key '{0}' will be ignored")]
	UnknownKey(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
