//! Rope conversions between character offsets and line/column positions.

use ropey::RopeSlice;

use crate::range::Position;

/// Returns the length of `line` in characters, excluding its line terminator.
///
/// Lines past the end of the text have length zero.
pub fn line_len(text: RopeSlice, line: usize) -> usize {
	if line >= text.len_lines() {
		return 0;
	}
	let slice = text.line(line);
	let mut len = slice.len_chars();
	if len > 0 && slice.char(len - 1) == '\n' {
		len -= 1;
		if len > 0 && slice.char(len - 1) == '\r' {
			len -= 1;
		}
	}
	len
}

/// Converts a position to a character offset, clamping to the line and text bounds.
pub fn offset_at(text: RopeSlice, pos: Position) -> usize {
	if pos.line >= text.len_lines() {
		return text.len_chars();
	}
	text.line_to_char(pos.line) + pos.column.min(line_len(text, pos.line))
}

/// Converts a character offset to a position, clamping to the end of the text.
pub fn position_at(text: RopeSlice, offset: usize) -> Position {
	let offset = offset.min(text.len_chars());
	let line = text.char_to_line(offset);
	Position::new(line, offset - text.line_to_char(line))
}
