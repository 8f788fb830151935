//! Plain-text rendering of a frame over the visible lines.
//!
//! Labels are written over the text at the columns a graphical presenter
//! would draw them. Lines with highlighted matches get a `^` marker row.

use acejump_engine::{LabelPlacement, Range, RenderFrame, RopeDocument};

/// Columns a label covers once its shift is applied.
fn label_columns(placement: &LabelPlacement) -> std::ops::Range<usize> {
	let width = placement.text.chars().count();
	let start = if placement.display_before {
		placement.position.column.saturating_sub(width)
	} else {
		placement.position.column
	};
	let start = start.saturating_sub(placement.horizontal_shift);
	start..start + width
}

/// Columns of `line` covered by `range`, given the line's length.
fn highlighted_columns(range: &Range, line: usize, len: usize) -> Option<std::ops::Range<usize>> {
	if line < range.start.line || line > range.end.line {
		return None;
	}
	let start = if line == range.start.line { range.start.column } else { 0 };
	let end = if line == range.end.line { range.end.column } else { len };
	(start < end).then_some(start..end)
}

/// Writes every label on `line` over `text`.
pub fn overlay_line(text: &str, line: usize, labels: &[LabelPlacement]) -> String {
	let mut cells: Vec<char> = text.chars().collect();
	for placement in labels.iter().filter(|p| p.position.line == line) {
		let columns = label_columns(placement);
		if cells.len() < columns.end {
			cells.resize(columns.end, ' ');
		}
		for (cell, c) in cells[columns].iter_mut().zip(placement.text.chars()) {
			*cell = c;
		}
	}
	cells.into_iter().collect()
}

/// Returns a `^` row under the highlighted columns of `line`, if any.
pub fn marker_line(line: usize, len: usize, highlights: &[Range]) -> Option<String> {
	let mut cells = vec![' '; len];
	let mut any = false;
	for columns in highlights.iter().filter_map(|r| highlighted_columns(r, line, len)) {
		for cell in cells.iter_mut().take(columns.end).skip(columns.start) {
			*cell = '^';
			any = true;
		}
	}
	any.then(|| cells.into_iter().collect::<String>().trim_end().to_string())
}

/// Renders the visible lines of `doc` with `frame` drawn over them.
pub fn render_view(doc: &RopeDocument, frame: &RenderFrame) -> Vec<String> {
	let mut out = Vec::new();
	for line in doc.visible_lines() {
		let text = doc.line_text(line);
		let len = text.chars().count();
		out.push(overlay_line(&text, line, &frame.labels));
		if let Some(markers) = marker_line(line, len, &frame.highlights) {
			out.push(markers);
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use acejump_engine::Position;
	use pretty_assertions::assert_eq;

	use super::*;

	fn placement(column: usize, text: &str, display_before: bool, horizontal_shift: usize) -> LabelPlacement {
		LabelPlacement {
			match_index: 0,
			position: Position::new(0, column),
			text: text.to_string(),
			display_before,
			horizontal_shift,
		}
	}

	#[test]
	fn label_before_match_overwrites_preceding_column() {
		let labels = vec![placement(5, "F", true, 0)];
		assert_eq!(overlay_line("cat bat hat", 0, &labels), "cat Fat hat");
	}

	#[test]
	fn label_after_match_starts_at_its_end() {
		let labels = vec![placement(2, "JK", false, 0)];
		assert_eq!(overlay_line("xx ab", 0, &labels), "xxJKb");
	}

	#[test]
	fn shifted_label_stays_inside_the_line() {
		let labels = vec![placement(3, "JF", false, 2)];
		assert_eq!(overlay_line("abc", 0, &labels), "aJF");
	}

	#[test]
	fn label_past_line_end_pads() {
		let labels = vec![placement(3, "J", false, 0)];
		assert_eq!(overlay_line("abc", 0, &labels), "abcJ");
	}

	#[test]
	fn labels_on_other_lines_are_skipped() {
		let labels = vec![placement(0, "J", false, 0)];
		assert_eq!(overlay_line("abc", 1, &labels), "abc");
	}

	#[test]
	fn markers_cover_highlighted_columns() {
		let highlights = vec![
			Range::new(Position::new(0, 1), Position::new(0, 3)),
			Range::new(Position::new(0, 5), Position::new(0, 7)),
		];
		assert_eq!(marker_line(0, 11, &highlights), Some(" ^^  ^^".to_string()));
		assert_eq!(marker_line(1, 11, &highlights), None);
	}

	#[test]
	fn multi_line_highlight_covers_each_line_part() {
		let highlights = vec![Range::new(Position::new(0, 2), Position::new(1, 1))];
		assert_eq!(marker_line(0, 3, &highlights), Some("  ^".to_string()));
		assert_eq!(marker_line(1, 3, &highlights), Some("^".to_string()));
	}

	#[test]
	fn render_view_interleaves_markers() {
		let doc = RopeDocument::new("cat\ndog");
		let frame = RenderFrame {
			highlights: vec![Range::new(Position::new(1, 0), Position::new(1, 1))],
			labels: vec![LabelPlacement {
				match_index: 0,
				position: Position::new(1, 1),
				text: "J".to_string(),
				display_before: false,
				horizontal_shift: 0,
			}],
		};
		assert_eq!(render_view(&doc, &frame), vec!["cat", "dJg", "^"]);
	}
}
