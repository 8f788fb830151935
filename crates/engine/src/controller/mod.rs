//! Keystroke state machine driving a jump session.
//!
//! Characters are compared uppercased. In [`JumpMode::Searching`] a key that
//! is a whole label jumps, a key that starts longer labels narrows into
//! [`JumpMode::Disambiguating`], and anything else extends the needle. In
//! [`JumpMode::Disambiguating`] the needle is frozen and keys only select
//! among the remaining labels.

use acejump_config::JumpConfig;
use acejump_primitives::Position;
use tracing::debug;

use crate::document::Document;
use crate::locate::fold;
use crate::presenter::Presenter;
use crate::session::{KeyMatch, Overflow, Session};


/// Externally visible state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpMode {
	/// No session.
	Idle,
	/// Typing the needle.
	Searching,
	/// Typing a multi-letter label.
	Disambiguating,
}

/// Outcome of one controller call, for the host to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpEvent {
	/// A session was requested with no active view.
	NoActiveDocument,
	/// A new session started.
	Started,
	/// A start request toggled the active session off.
	Stopped,
	/// Matches, labels, or the needle changed and a new frame was rendered.
	Updated,
	/// The cursor moved and the session ended.
	Jumped {
		/// Where the cursor (selection head) landed.
		target: Position,
		/// The preserved selection anchor, if a selection was extended.
		anchor: Option<Position>,
	},
	/// The session was torn down without jumping.
	Cancelled,
	/// The input had no effect.
	Ignored,
}

/// Owns at most one [`Session`] for one view and interprets keystrokes.
#[derive(Debug, Clone, Default)]
pub struct JumpController {
	config: JumpConfig,
	session: Option<Session>,
}

impl JumpController {
	/// Creates an idle controller.
	pub fn new(config: JumpConfig) -> Self {
		Self { config, session: None }
	}

	/// Returns the active session, if any.
	pub fn session(&self) -> Option<&Session> {
		self.session.as_ref()
	}

	/// Returns the current mode.
	pub fn mode(&self) -> JumpMode {
		match &self.session {
			None => JumpMode::Idle,
			Some(s) if s.is_disambiguating() => JumpMode::Disambiguating,
			Some(_) => JumpMode::Searching,
		}
	}

	/// Returns a short display label for the current mode.
	pub fn mode_name(&self) -> &'static str {
		match self.mode() {
			JumpMode::Idle => "",
			JumpMode::Searching => "JUMP",
			JumpMode::Disambiguating => "LABEL",
		}
	}

	/// Starts a session, or stops the active one.
	///
	/// Without an active document this is a no-op.
	pub fn start_session<D, P>(&mut self, doc: Option<&D>, presenter: &mut P) -> JumpEvent
	where
		D: Document + ?Sized,
		P: Presenter + ?Sized,
	{
		if self.session.is_some() {
			self.teardown(presenter);
			debug!("jump session toggled off");
			return JumpEvent::Stopped;
		}
		if doc.is_none() {
			debug!("jump requested without an active document");
			return JumpEvent::NoActiveDocument;
		}

		self.session = Some(Session::new());
		presenter.clear();
		debug!("jump session started");
		JumpEvent::Started
	}

	/// Handles one typed character.
	pub fn handle_char<D, P>(&mut self, doc: &mut D, presenter: &mut P, c: char) -> JumpEvent
	where
		D: Document + ?Sized,
		P: Presenter + ?Sized,
	{
		let Some(session) = self.session.as_mut() else {
			return JumpEvent::Ignored;
		};

		let key = fold(c);
		match session.classify(key) {
			KeyMatch::Exact(i) => {
				let target = session.matches()[i].info.start;
				self.commit(doc, presenter, target)
			}
			KeyMatch::Prefix => {
				session.narrow(key);
				debug!(consumed = session.consumed(), remaining = session.matches().len(), "narrowed labels");
				self.render(doc, presenter)
			}
			KeyMatch::Miss if session.is_disambiguating() => JumpEvent::Ignored,
			KeyMatch::Miss => {
				session.push_search_char(c);
				session.run_search(&*doc, &self.config);
				self.render(doc, presenter)
			}
		}
	}

	/// Handles a shrinking input buffer.
	///
	/// Undoes the last label letter while disambiguating, otherwise drops the
	/// last needle character. An emptied needle clears the matches and keeps
	/// the session searching.
	pub fn handle_backspace<D, P>(&mut self, doc: &D, presenter: &mut P) -> JumpEvent
	where
		D: Document + ?Sized,
		P: Presenter + ?Sized,
	{
		let Some(session) = self.session.as_mut() else {
			return JumpEvent::Ignored;
		};

		if session.undo_narrow() {
			debug!(consumed = session.consumed(), "restored labels");
			return self.render(doc, presenter);
		}
		if !session.pop_search_char() {
			return JumpEvent::Ignored;
		}
		session.run_search(doc, &self.config);
		self.render(doc, presenter)
	}

	/// Re-runs the search after the viewport scrolled or the text changed.
	///
	/// Consumed label letters are discarded since labels are reassigned.
	pub fn refresh<D, P>(&mut self, doc: &D, presenter: &mut P) -> JumpEvent
	where
		D: Document + ?Sized,
		P: Presenter + ?Sized,
	{
		let Some(session) = self.session.as_mut() else {
			return JumpEvent::Ignored;
		};
		session.run_search(doc, &self.config);
		self.render(doc, presenter)
	}

	/// Tears down the session and its rendering. Safe to call in any state.
	pub fn cancel<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> JumpEvent {
		if self.session.is_none() {
			return JumpEvent::Ignored;
		}
		self.teardown(presenter);
		debug!("jump session cancelled");
		JumpEvent::Cancelled
	}

	/// The view was hidden or lost focus; same as [`Self::cancel`].
	pub fn viewport_lost<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> JumpEvent {
		self.cancel(presenter)
	}

	/// Status line text: match count, overflow notice, or empty when idle.
	pub fn status_text(&self) -> String {
		let Some(session) = &self.session else {
			return String::new();
		};
		if session.is_disambiguating() {
			return format!("{} candidates", session.matches().len());
		}
		if session.search_text().is_empty() {
			return "Type to search".to_string();
		}
		match session.overflow() {
			Some(Overflow::LabelSpaceExhausted { matches }) => format!("Too many matches ({matches}), keep typing"),
			Some(Overflow::Truncated { cap }) => format!("{cap}+ matches"),
			None => match session.matches().len() {
				0 => "No matches".to_string(),
				1 => "1 match".to_string(),
				n => format!("{n} matches"),
			},
		}
	}

	fn commit<D, P>(&mut self, doc: &mut D, presenter: &mut P, target: Position) -> JumpEvent
	where
		D: Document + ?Sized,
		P: Presenter + ?Sized,
	{
		let selection = doc.selection();
		let anchor = (!selection.is_empty()).then_some(selection.anchor);
		doc.commit_jump(target, anchor);
		self.teardown(presenter);
		debug!(line = target.line, column = target.column, extend = anchor.is_some(), "jumped");
		JumpEvent::Jumped { target, anchor }
	}

	fn render<D, P>(&self, doc: &D, presenter: &mut P) -> JumpEvent
	where
		D: Document + ?Sized,
		P: Presenter + ?Sized,
	{
		if let Some(session) = &self.session {
			let frame = session.frame(self.config.placement, |line| doc.line_len(line));
			presenter.render(&frame);
		}
		JumpEvent::Updated
	}

	fn teardown<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
		self.session = None;
		presenter.clear();
	}
}
