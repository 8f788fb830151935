use acejump_config::{JumpConfig, PlacementMode};
use acejump_primitives::Range;
use tracing::trace;

use crate::document::Document;
use crate::label::{Label, assign_labels};
use crate::locate::{MatchInfo, locate};
use crate::placement::resolve_placements;
use crate::presenter::RenderFrame;


/// A match paired with the label letters still to be typed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMatch {
	/// The located occurrence.
	pub info: MatchInfo,
	/// Remaining label letters.
	pub label: Label,
}

/// Why the current search shows fewer labels than it could.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
	/// Scanning stopped at the cap; the first `cap` matches are highlighted without labels.
	Truncated {
		/// The configured match cap.
		cap: usize,
	},
	/// No unambiguous labeling exists; matches are highlighted without labels.
	LabelSpaceExhausted {
		/// Number of matches located.
		matches: usize,
	},
}

/// Label letters typed so far, with the match set before each one.
#[derive(Debug, Clone, Default)]
pub(crate) struct Disambiguation {
	consumed: String,
	snapshots: Vec<Vec<LabeledMatch>>,
}

#[derive(Debug, Clone)]
pub(crate) enum Phase {
	Searching,
	Disambiguating(Disambiguation),
}

/// How a typed key relates to the current labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyMatch {
	/// The key is the whole remaining label of the match at this index.
	Exact(usize),
	/// The key starts at least one longer label.
	Prefix,
	/// No label starts with the key.
	Miss,
}

/// State of one jump interaction, from start to commit or cancel.
#[derive(Debug, Clone)]
pub struct Session {
	search: String,
	matches: Vec<LabeledMatch>,
	unlabeled: Vec<Range>,
	located: usize,
	overflow: Option<Overflow>,
	phase: Phase,
}

impl Default for Session {
	fn default() -> Self {
		Self::new()
	}
}

impl Session {
	/// Creates a session with an empty search.
	pub fn new() -> Self {
		Self {
			search: String::new(),
			matches: Vec::new(),
			unlabeled: Vec::new(),
			located: 0,
			overflow: None,
			phase: Phase::Searching,
		}
	}

	/// The literal needle typed so far.
	pub fn search_text(&self) -> &str {
		&self.search
	}

	/// Labeled matches still in play, in document order.
	pub fn matches(&self) -> &[LabeledMatch] {
		&self.matches
	}

	/// Why labels are limited, if they are.
	pub fn overflow(&self) -> Option<Overflow> {
		self.overflow
	}

	/// True when the last search hit the match cap or ran out of labels.
	///
	/// No labels are shown while this holds.
	pub fn matches_exceeded(&self) -> bool {
		self.overflow.is_some()
	}

	/// True once at least one label letter has been consumed.
	pub fn is_disambiguating(&self) -> bool {
		matches!(self.phase, Phase::Disambiguating(_))
	}

	/// Label letters consumed so far.
	pub fn consumed(&self) -> &str {
		match &self.phase {
			Phase::Searching => "",
			Phase::Disambiguating(d) => &d.consumed,
		}
	}

	/// Number of matches located by the last search, labeled or not.
	pub fn located_count(&self) -> usize {
		self.located
	}

	pub(crate) fn classify(&self, key: char) -> KeyMatch {
		if let Some(i) = self.matches.iter().position(|m| m.label.is(key)) {
			return KeyMatch::Exact(i);
		}
		if self.matches.iter().any(|m| m.label.is_proper_prefix(key)) {
			KeyMatch::Prefix
		} else {
			KeyMatch::Miss
		}
	}

	/// Keeps only matches whose label starts with `key`, stripping that letter.
	pub(crate) fn narrow(&mut self, key: char) {
		let narrowed = self
			.matches
			.iter()
			.filter(|m| m.label.is_proper_prefix(key))
			.filter_map(|m| {
				m.label.strip_first().map(|label| LabeledMatch {
					info: m.info,
					label,
				})
			})
			.collect();
		let previous = std::mem::replace(&mut self.matches, narrowed);

		if matches!(self.phase, Phase::Searching) {
			self.phase = Phase::Disambiguating(Disambiguation::default());
		}
		if let Phase::Disambiguating(d) = &mut self.phase {
			d.consumed.push(key);
			d.snapshots.push(previous);
		}
	}

	/// Undoes the most recent [`Self::narrow`]. Returns false when nothing was consumed.
	pub(crate) fn undo_narrow(&mut self) -> bool {
		let Phase::Disambiguating(d) = &mut self.phase else {
			return false;
		};
		let Some(previous) = d.snapshots.pop() else {
			return false;
		};
		d.consumed.pop();
		self.matches = previous;
		if d.snapshots.is_empty() {
			self.phase = Phase::Searching;
		}
		true
	}

	pub(crate) fn push_search_char(&mut self, c: char) {
		self.search.push(c);
	}

	/// Removes the last needle character. Returns false when the needle was already empty.
	pub(crate) fn pop_search_char(&mut self) -> bool {
		self.search.pop().is_some()
	}

	/// Drops every match and overflow flag, leaving the needle alone.
	pub(crate) fn clear_results(&mut self) {
		self.matches.clear();
		self.unlabeled.clear();
		self.located = 0;
		self.overflow = None;
		self.phase = Phase::Searching;
	}

	/// Re-runs locate and labeling for the current needle and returns to searching.
	pub(crate) fn run_search<D: Document + ?Sized>(&mut self, doc: &D, config: &JumpConfig) {
		self.clear_results();
		if self.search.is_empty() {
			return;
		}

		let located = locate(doc, &self.search, config.match_cap);
		self.located = located.matches.len();
		if located.truncated {
			trace!(cap = config.match_cap, "match cap reached, labels suppressed");
			self.overflow = Some(Overflow::Truncated { cap: config.match_cap });
			self.unlabeled = located.matches.iter().map(|m| m.range).collect();
			return;
		}

		match assign_labels(&located.matches, &config.alphabet) {
			Ok(labels) => {
				self.matches = located
					.matches
					.into_iter()
					.zip(labels)
					.map(|(info, label)| LabeledMatch { info, label })
					.collect();
			}
			Err(e) => {
				trace!(error = %e, "labels suppressed");
				self.overflow = Some(Overflow::LabelSpaceExhausted { matches: e.matches });
				self.unlabeled = located.matches.iter().map(|m| m.range).collect();
			}
		}
	}

	/// Builds the render frame for the current matches.
	///
	/// An overflowing search highlights its matches and draws no labels.
	pub fn frame(&self, mode: PlacementMode, line_len: impl Fn(usize) -> usize) -> RenderFrame {
		if self.overflow.is_some() {
			return RenderFrame {
				highlights: self.unlabeled.clone(),
				labels: Vec::new(),
			};
		}

		let labels = resolve_placements(&self.matches, mode, line_len);
		let highlights = labels.iter().map(|p| self.matches[p.match_index].info.range).collect();
		RenderFrame { highlights, labels }
	}
}
