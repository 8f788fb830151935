//! Label placement.
//!
//! In [`PlacementMode::AvoidCollisions`] each line is swept left to right
//! with a `next_free` column. A label goes immediately before its match when
//! it fits in the gap, otherwise immediately after. A match starting inside
//! space already claimed by an earlier match or label is left out of the
//! render set; its label stays valid. [`PlacementMode::Inline`] overlays
//! every label on its match start.

use acejump_config::PlacementMode;
use acejump_primitives::Position;

use crate::session::LabeledMatch;

/// Where and how one label is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPlacement {
	/// Index of the labeled match in the session's match list.
	pub match_index: usize,
	/// Logical anchor: the match start when drawn before or inline, the match end when drawn after.
	pub position: Position,
	/// Label letters still to be typed.
	pub text: String,
	/// True when the label is drawn ending at `position`, false when starting at it.
	pub display_before: bool,
	/// Columns to shift the label left so it is not clipped at the line end.
	pub horizontal_shift: usize,
}

/// Leftward shift keeping a label occupying `start..start + width` inside `line_len`.
///
/// Never shifts past column zero.
fn clip_shift(start: usize, width: usize, line_len: usize) -> usize {
	(start + width).saturating_sub(line_len).min(start)
}

/// Computes label placements for `matches`, which must be in document order.
///
/// `line_len` reports a line's length in characters.
pub fn resolve_placements(
	matches: &[LabeledMatch],
	mode: PlacementMode,
	line_len: impl Fn(usize) -> usize,
) -> Vec<LabelPlacement> {
	match mode {
		PlacementMode::Inline => matches
			.iter()
			.enumerate()
			.map(|(i, m)| {
				let start = m.info.start;
				LabelPlacement {
					match_index: i,
					position: start,
					text: m.label.to_string(),
					display_before: false,
					horizontal_shift: clip_shift(start.column, m.label.len(), line_len(start.line)),
				}
			})
			.collect(),
		PlacementMode::AvoidCollisions => avoid_collisions(matches, line_len),
	}
}

fn avoid_collisions(matches: &[LabeledMatch], line_len: impl Fn(usize) -> usize) -> Vec<LabelPlacement> {
	let mut placements = Vec::with_capacity(matches.len());
	let mut line = None;
	let mut next_free = 0;

	for (i, m) in matches.iter().enumerate() {
		let start = m.info.start;
		let end = m.info.range.end;
		if line != Some(start.line) {
			line = Some(start.line);
			next_free = 0;
		}
		if start.column < next_free {
			continue;
		}

		let width = m.label.len();
		let display_before = start.column >= next_free + width;
		let (position, label_start) = if display_before {
			(start, start.column - width)
		} else {
			(end, end.column)
		};

		placements.push(LabelPlacement {
			match_index: i,
			position,
			text: m.label.to_string(),
			display_before,
			horizontal_shift: clip_shift(label_start, width, line_len(position.line)),
		});

		if end.line != start.line {
			line = Some(end.line);
		}
		next_free = if display_before { end.column } else { end.column + width };
	}

	placements
}

#[cfg(test)]
mod tests {
	use acejump_primitives::Range;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::label::Label;
	use crate::locate::MatchInfo;

	fn labeled(line: usize, start: usize, end: usize, label: &str) -> LabeledMatch {
		let chars: Vec<char> = label.chars().collect();
		let label = match chars.as_slice() {
			[a] => Label::single(*a),
			[a, b] => Label::pair(*a, *b),
			_ => unreachable!("test labels have one or two letters"),
		};
		let start = Position::new(line, start);
		LabeledMatch {
			info: MatchInfo {
				start,
				range: Range::new(start, Position::new(line, end)),
				next_char: None,
				next_next_char: None,
			},
			label,
		}
	}

	fn summary(placements: &[LabelPlacement]) -> Vec<(usize, &str, bool, usize)> {
		placements
			.iter()
			.map(|p| (p.match_index, p.text.as_str(), p.display_before, p.horizontal_shift))
			.collect()
	}

	#[test]
	fn labels_go_before_when_there_is_room() {
		// "cat bat hat", needle "at"
		let matches = vec![labeled(0, 1, 3, "J"), labeled(0, 5, 7, "F"), labeled(0, 9, 11, "K")];
		let placements = resolve_placements(&matches, PlacementMode::AvoidCollisions, |_| 11);
		assert_eq!(summary(&placements), vec![(0, "J", true, 0), (1, "F", true, 0), (2, "K", true, 0)]);
		assert_eq!(placements[1].position, Position::new(0, 5));
	}

	#[test]
	fn label_goes_after_when_gap_is_too_small() {
		// "xx ab" with needles at 0..2 and 3..5; second match has a 1-column gap for a 2-letter label.
		let matches = vec![labeled(0, 0, 2, "J"), labeled(0, 3, 5, "FK")];
		let placements = resolve_placements(&matches, PlacementMode::AvoidCollisions, |_| 40);
		assert_eq!(summary(&placements), vec![(0, "J", false, 0), (1, "FK", false, 0)]);
		assert_eq!(placements[0].position, Position::new(0, 2));
		assert_eq!(placements[1].position, Position::new(0, 5));
	}

	#[test]
	fn match_inside_claimed_space_is_dropped() {
		// First label goes after 0..2, claiming columns 2..3; a match at 2 is dropped.
		let matches = vec![labeled(0, 0, 2, "J"), labeled(0, 2, 4, "F"), labeled(0, 8, 10, "K")];
		let placements = resolve_placements(&matches, PlacementMode::AvoidCollisions, |_| 40);
		assert_eq!(summary(&placements), vec![(0, "J", false, 0), (2, "K", true, 0)]);
	}

	#[test]
	fn next_free_resets_per_line() {
		let matches = vec![labeled(0, 0, 3, "J"), labeled(1, 0, 3, "F")];
		let placements = resolve_placements(&matches, PlacementMode::AvoidCollisions, |_| 3);
		assert_eq!(placements.len(), 2);
		assert!(placements.iter().all(|p| !p.display_before));
	}

	#[test]
	fn trailing_label_is_shifted_inside_the_line() {
		let matches = vec![labeled(0, 0, 3, "JF")];
		let placements = resolve_placements(&matches, PlacementMode::AvoidCollisions, |_| 3);
		assert_eq!(summary(&placements), vec![(0, "JF", false, 2)]);
		// The anchor does not move.
		assert_eq!(placements[0].position, Position::new(0, 3));
	}

	#[test]
	fn shift_never_passes_column_zero() {
		assert_eq!(clip_shift(1, 2, 0), 1);
		assert_eq!(clip_shift(5, 2, 10), 0);
		assert_eq!(clip_shift(9, 2, 10), 1);
	}

	#[test]
	fn inline_mode_keeps_every_match() {
		let matches = vec![labeled(0, 0, 2, "J"), labeled(0, 2, 4, "F"), labeled(0, 3, 4, "KD")];
		let placements = resolve_placements(&matches, PlacementMode::Inline, |_| 4);
		assert_eq!(summary(&placements), vec![(0, "J", false, 0), (1, "F", false, 0), (2, "KD", false, 1)]);
		assert!(placements.iter().zip(&matches).all(|(p, m)| p.position == m.info.start));
	}
}
