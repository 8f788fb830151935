//! Configuration for jump sessions.
//!
//! Configuration is written in TOML. Every key is optional; missing keys fall
//! back to the defaults of [`JumpConfig`].
//!
//! ```toml
//! # Letters labels are drawn from, in priority order.
//! alphabet = "JFKDLSHGAYTNBURMVIECOXWPZQ"
//!
//! # "avoid-collisions" places labels beside matches without overlap,
//! # "inline" overlays every label on its match start.
//! placement = "avoid-collisions"
//!
//! # Stop scanning after this many matches.
//! match-cap = 300
//! ```
//!
//! # Configuration Files
//!
//! The default location is `$XDG_CONFIG_HOME/acejump/config.toml`
//! (or `~/.config/acejump/config.toml`). See [`default_path`].
//!
//! Unknown keys do not fail parsing; they are collected in
//! [`Config::warnings`].

pub mod alphabet;
pub mod error;

use std::path::{Path, PathBuf};

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use error::{ConfigError, ConfigWarning, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// Default number of matches scanned before a search is reported as truncated.
pub const DEFAULT_MATCH_CAP: usize = 300;

const KNOWN_KEYS: &[&str] = &["alphabet", "placement", "match-cap"];

/// How labels are positioned relative to their matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementMode {
	/// Labels sit before or after their match and never overlap each other.
	#[default]
	AvoidCollisions,
	/// Labels always overlay the match start.
	Inline,
}

/// Resolved settings consumed by the jump engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpConfig {
	/// Letters labels are drawn from.
	pub alphabet: Alphabet,
	/// Label placement strategy.
	pub placement: PlacementMode,
	/// Maximum number of matches located per search.
	pub match_cap: usize,
}

impl Default for JumpConfig {
	fn default() -> Self {
		Self {
			alphabet: Alphabet::default(),
			placement: PlacementMode::default(),
			match_cap: DEFAULT_MATCH_CAP,
		}
	}
}

/// One parsed configuration layer.
///
/// Fields left unset defer to earlier layers or the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	/// Label alphabet override.
	pub alphabet: Option<Alphabet>,
	/// Placement mode override.
	pub placement: Option<PlacementMode>,
	/// Match cap override.
	pub match_cap: Option<usize>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
	alphabet: Option<String>,
	placement: Option<PlacementMode>,
	match_cap: Option<usize>,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let table: toml::Table = toml::from_str(input)?;
		let warnings = table
			.keys()
			.filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
			.map(|key| ConfigWarning::UnknownKey(key.clone()))
			.collect();

		let raw: RawConfig = toml::from_str(input)?;
		let alphabet = raw.alphabet.as_deref().map(Alphabet::new).transpose()?;
		if let Some(cap) = raw.match_cap
			&& cap == 0
		{
			return Err(ConfigError::InvalidMatchCap(cap));
		}

		Ok(Config {
			alphabet,
			placement: raw.placement,
			match_cap: raw.match_cap,
			warnings,
		})
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Merge another config into this one.
	///
	/// Values set in `other` override values in `self`.
	pub fn merge(&mut self, other: Config) {
		if other.alphabet.is_some() {
			self.alphabet = other.alphabet;
		}
		if other.placement.is_some() {
			self.placement = other.placement;
		}
		if other.match_cap.is_some() {
			self.match_cap = other.match_cap;
		}
		self.warnings.extend(other.warnings);
	}

	/// Resolves this layer over the defaults.
	pub fn resolve(&self) -> JumpConfig {
		let defaults = JumpConfig::default();
		JumpConfig {
			alphabet: self.alphabet.clone().unwrap_or(defaults.alphabet),
			placement: self.placement.unwrap_or(defaults.placement),
			match_cap: self.match_cap.unwrap_or(defaults.match_cap),
		}
	}
}

/// Returns the default config file location, if a config directory is known.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("acejump").join("config.toml"))
}

/// Loads `path` (or [`default_path`]) and resolves it, falling back to defaults.
///
/// A missing file is silent; unreadable or invalid files are logged and ignored.
pub fn load_or_default(path: Option<&Path>) -> JumpConfig {
	let Some(path) = path.map(Path::to_path_buf).or_else(default_path) else {
		return JumpConfig::default();
	};
	if !path.exists() {
		debug!(path = %path.display(), "no config file, using defaults");
		return JumpConfig::default();
	}

	match Config::load(&path) {
		Ok(config) => {
			for warning in &config.warnings {
				warn!(path = %path.display(), "{warning}");
			}
			config.resolve()
		}
		Err(e) => {
			warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
			JumpConfig::default()
		}
	}
}
