//! Presenter collaborator: receives complete render instructions.

use acejump_primitives::Range;

use crate::placement::LabelPlacement;

/// Everything to draw for the current session state.
///
/// Each frame fully replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFrame {
	/// Match ranges to highlight.
	pub highlights: Vec<Range>,
	/// Labels to draw.
	pub labels: Vec<LabelPlacement>,
}

impl RenderFrame {
	/// Returns true if nothing is drawn.
	pub fn is_empty(&self) -> bool {
		self.highlights.is_empty() && self.labels.is_empty()
	}
}

/// Draws frames produced by the jump controller.
pub trait Presenter {
	/// Replaces whatever is drawn with `frame`.
	fn render(&mut self, frame: &RenderFrame);

	/// Removes all highlights and labels.
	fn clear(&mut self) {
		self.render(&RenderFrame::default());
	}
}

/// Presenter that keeps only the most recent frame.
#[derive(Debug, Clone, Default)]
pub struct LastFrame {
	frame: RenderFrame,
	renders: usize,
}

impl LastFrame {
	/// The most recently rendered frame.
	pub fn frame(&self) -> &RenderFrame {
		&self.frame
	}

	/// Number of frames rendered so far.
	pub fn renders(&self) -> usize {
		self.renders
	}
}

impl Presenter for LastFrame {
	fn render(&mut self, frame: &RenderFrame) {
		self.frame = frame.clone();
		self.renders += 1;
	}
}
