//! Loads the file and config, replays the key script, and formats the result.

use std::path::Path;

use acejump_config::{Config, JumpConfig};
use acejump_engine::{Document, JumpController, JumpEvent, LastFrame, PlacementMode, RopeDocument};
use anyhow::Context;
use tracing::{debug, warn};

use crate::cli::{Cli, Key, parse_keys};
use crate::render::render_view;

/// Resolves the jump configuration.
///
/// An explicit path must load; the default location falls back to defaults.
pub fn load_config(path: Option<&Path>, inline: bool) -> anyhow::Result<JumpConfig> {
	let mut config = match path {
		Some(path) => {
			let config = Config::load(path).with_context(|| format!("loading config {}", path.display()))?;
			for warning in &config.warnings {
				warn!(path = %path.display(), "{warning}");
			}
			config.resolve()
		}
		None => acejump_config::load_or_default(None),
	};
	if inline {
		config.placement = PlacementMode::Inline;
	}
	Ok(config)
}

/// Feeds `keys` to a freshly started controller.
pub fn replay(
	jumper: &mut JumpController,
	doc: &mut RopeDocument,
	presenter: &mut LastFrame,
	keys: &[Key],
) -> Vec<JumpEvent> {
	let mut events = vec![jumper.start_session(Some(&*doc), presenter)];
	for &key in keys {
		let event = match key {
			Key::Char(c) => jumper.handle_char(doc, presenter, c),
			Key::Backspace => jumper.handle_backspace(&*doc, presenter),
			Key::Escape => jumper.cancel(presenter),
			Key::Start => jumper.start_session(Some(&*doc), presenter),
		};
		debug!(?key, ?event, mode = jumper.mode_name(), "replayed key");
		events.push(event);
	}
	events
}

/// Formats the view, status, and cursor after a replay.
pub fn report(jumper: &JumpController, doc: &RopeDocument, presenter: &LastFrame) -> String {
	let mut lines = render_view(doc, presenter.frame());
	lines.push(String::new());

	let status = jumper.status_text();
	if status.is_empty() {
		lines.push("status: idle".to_string());
	} else {
		lines.push(format!("status: [{}] {status}", jumper.mode_name()));
	}

	let selection = doc.selection();
	let cursor = selection.head;
	if selection.is_empty() {
		lines.push(format!("cursor: {}:{}", cursor.line + 1, cursor.column + 1));
	} else {
		let anchor = selection.anchor;
		lines.push(format!(
			"selection: {}:{} -> {}:{}",
			anchor.line + 1,
			anchor.column + 1,
			cursor.line + 1,
			cursor.column + 1
		));
	}
	lines.join("\n")
}

/// Runs one invocation and returns the text to print.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
	let text =
		std::fs::read_to_string(&cli.file).with_context(|| format!("reading {}", cli.file.display()))?;
	let config = load_config(cli.config.as_deref(), cli.inline)?;

	let mut doc = RopeDocument::new(&text);
	if cli.top.is_some() || cli.height.is_some() {
		doc.set_viewport(cli.top.unwrap_or(0), cli.height.unwrap_or(usize::MAX));
	}

	let mut jumper = JumpController::new(config);
	let mut presenter = LastFrame::default();
	let keys = parse_keys(&cli.keys);
	replay(&mut jumper, &mut doc, &mut presenter, &keys);

	Ok(report(&jumper, &doc, &presenter))
}
