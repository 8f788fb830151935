//! CLI schema and key script parsing for the acejump binary.

use std::path::PathBuf;

use clap::Parser;


#[derive(Parser, Debug)]
#[command(name = "acejump")]
#[command(about = "Replay jump keystrokes against a file and print the labeled view")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// File to search
	pub file: PathBuf,

	/// Keys to replay; `<BS>` is backspace, `<ESC>` cancels, `<START>` toggles the session
	#[arg(long, short = 'k', value_name = "SCRIPT", default_value = "")]
	pub keys: String,

	/// First visible line (0-indexed)
	#[arg(long, value_name = "N")]
	pub top: Option<usize>,

	/// Number of visible lines
	#[arg(long, value_name = "N")]
	pub height: Option<usize>,

	/// Config file (defaults to the user config directory)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Overlay labels on match starts instead of avoiding collisions
	#[arg(long)]
	pub inline: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

/// One replayed keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	/// A typed character.
	Char(char),
	/// Backspace.
	Backspace,
	/// Escape: cancel the session.
	Escape,
	/// The jump command: start a session, or stop the active one.
	Start,
}

const NAMED_KEYS: &[(&str, Key)] = &[("<BS>", Key::Backspace), ("<ESC>", Key::Escape), ("<START>", Key::Start)];

/// Splits a key script into keystrokes.
///
/// Named keys are matched exactly; any other `<` is a literal character.
pub fn parse_keys(script: &str) -> Vec<Key> {
	let mut keys = Vec::new();
	let mut rest = script;
	while let Some(c) = rest.chars().next() {
		if c == '<'
			&& let Some((name, key)) = NAMED_KEYS.iter().find(|(name, _)| rest.starts_with(name))
		{
			keys.push(*key);
			rest = &rest[name.len()..];
			continue;
		}
		keys.push(Key::Char(c));
		rest = &rest[c.len_utf8()..];
	}
	keys
}
