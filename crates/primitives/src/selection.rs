use crate::range::Position;

/// A selection defined by anchor and head positions.
///
/// The anchor is the fixed end, and the head moves during selection extension.
/// A selection whose anchor equals its head is a bare cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
	/// The fixed end of the selection.
	pub anchor: Position,
	/// The moving end of the selection (cursor position).
	pub head: Position,
}

impl Selection {
	/// Creates a new selection from anchor to head.
	pub const fn new(anchor: Position, head: Position) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width selection (cursor) at the given position.
	pub const fn point(pos: Position) -> Self {
		Self::new(pos, pos)
	}

	/// Returns true if anchor equals head.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}
}
