/// A position in the text, addressed by zero-based line and column.
///
/// Columns count characters, not bytes. Positions order lexicographically,
/// line first, which is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based character offset in the line.
	pub column: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}

	/// Returns the position `delta` columns to the right on the same line.
	#[inline]
	pub const fn shifted(self, delta: usize) -> Self {
		Self {
			line: self.line,
			column: self.column + delta,
		}
	}
}

/// An ordered span of text between two positions.
///
/// `start` is inclusive, `end` exclusive, and `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
	/// Start position (inclusive).
	pub start: Position,
	/// End position (exclusive).
	pub end: Position,
}

impl Range {
	/// Creates a new range, swapping the endpoints if given out of order.
	pub fn new(a: Position, b: Position) -> Self {
		if a <= b { Self { start: a, end: b } } else { Self { start: b, end: a } }
	}

	/// Creates a range covering whole lines `first..=last`, ending at column `end_column` of `last`.
	pub fn lines(first: usize, last: usize, end_column: usize) -> Self {
		Self::new(Position::new(first, 0), Position::new(last, end_column))
	}

	/// Returns true if `other` lies entirely within this range.
	pub fn contains_range(&self, other: &Range) -> bool {
		other.start >= self.start && other.end <= self.end
	}
}
