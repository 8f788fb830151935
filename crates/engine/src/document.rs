//! Document collaborator: the host's view of text, viewport, and cursor.

use acejump_primitives::{Position, Range, Selection, line_len, offset_at, position_at};
use ropey::Rope;

/// Read access to the active view plus the single mutation a jump needs.
///
/// Lookups past the end of a line or the document never fail; they return
/// `None` or clamp.
pub trait Document {
	/// Currently rendered ranges, in document order.
	fn visible_ranges(&self) -> Vec<Range>;

	/// Text covered by `range`.
	fn text_of_range(&self, range: Range) -> String;

	/// Character offset of `pos` from the document start.
	fn offset_at(&self, pos: Position) -> usize;

	/// Position of the character offset `offset`.
	fn position_at(&self, offset: usize) -> Position;

	/// Character at `pos`, or `None` at a line end or outside the document.
	fn character_at(&self, pos: Position) -> Option<char>;

	/// Length of `line` in characters, excluding the line terminator.
	fn line_len(&self, line: usize) -> usize;

	/// The active selection. A bare cursor is an empty selection.
	fn selection(&self) -> Selection;

	/// Moves the cursor to `target`.
	///
	/// With `anchor` set, the selection keeps that anchor and only its head moves.
	fn commit_jump(&mut self, target: Position, anchor: Option<Position>);
}

/// A [`Rope`]-backed document with a line-window viewport.
#[derive(Debug, Clone)]
pub struct RopeDocument {
	text: Rope,
	top: usize,
	height: Option<usize>,
	selection: Selection,
}

impl RopeDocument {
	/// Creates a document whose whole text is visible, cursor at the start.
	pub fn new(text: &str) -> Self {
		Self {
			text: Rope::from(text),
			top: 0,
			height: None,
			selection: Selection::default(),
		}
	}

	/// Restricts the viewport to `height` lines starting at line `top`.
	pub fn with_viewport(mut self, top: usize, height: usize) -> Self {
		self.set_viewport(top, height);
		self
	}

	/// Moves the viewport to `height` lines starting at line `top`.
	pub fn set_viewport(&mut self, top: usize, height: usize) {
		self.top = top;
		self.height = Some(height);
	}

	/// Replaces the active selection.
	pub fn set_selection(&mut self, selection: Selection) {
		self.selection = selection;
	}

	/// Returns the cursor (selection head).
	pub fn cursor(&self) -> Position {
		self.selection.head
	}

	/// Returns the visible line indices.
	pub fn visible_lines(&self) -> std::ops::Range<usize> {
		let total = self.text.len_lines();
		let top = self.top.min(total);
		let bottom = match self.height {
			Some(height) => top.saturating_add(height).min(total),
			None => total,
		};
		top..bottom
	}

	/// Returns the text of `line` without its terminator.
	pub fn line_text(&self, line: usize) -> String {
		let len = Document::line_len(self, line);
		if len == 0 {
			return String::new();
		}
		let start = self.text.line_to_char(line);
		self.text.slice(start..start + len).to_string()
	}
}

impl Document for RopeDocument {
	fn visible_ranges(&self) -> Vec<Range> {
		let lines = self.visible_lines();
		if lines.is_empty() {
			return Vec::new();
		}
		let last = lines.end - 1;
		vec![Range::lines(lines.start, last, Document::line_len(self, last))]
	}

	fn text_of_range(&self, range: Range) -> String {
		let start = Document::offset_at(self, range.start);
		let end = Document::offset_at(self, range.end);
		self.text.slice(start..end).to_string()
	}

	fn offset_at(&self, pos: Position) -> usize {
		offset_at(self.text.slice(..), pos)
	}

	fn position_at(&self, offset: usize) -> Position {
		position_at(self.text.slice(..), offset)
	}

	fn character_at(&self, pos: Position) -> Option<char> {
		if pos.column >= Document::line_len(self, pos.line) {
			return None;
		}
		Some(self.text.char(Document::offset_at(self, pos)))
	}

	fn line_len(&self, line: usize) -> usize {
		line_len(self.text.slice(..), line)
	}

	fn selection(&self) -> Selection {
		self.selection
	}

	fn commit_jump(&mut self, target: Position, anchor: Option<Position>) {
		self.selection = match anchor {
			Some(anchor) => Selection::new(anchor, target),
			None => Selection::point(target),
		};
	}
}
