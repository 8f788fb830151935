//! Core coordinate types for jump sessions: positions, ranges, and selections.

/// Line/column positions and ordered ranges.
pub mod range;
/// Rope conversions between character offsets and positions.
pub mod rope;
/// Anchor/head selections.
pub mod selection;

pub use range::{Position, Range};
pub use rope::{line_len, offset_at, position_at};
pub use selection::Selection;
