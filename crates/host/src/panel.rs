//! Favorites panel model.
//!
//! [`PanelView`] is the data a front-end needs to draw the favorites panel:
//! a header with the add and clean buttons, then one row per favorite with a
//! button that jumps to it and a button that removes it.

use std::fmt;

use faves_list::{EntryState, ResourceResolver};

use crate::actions::Action;
use crate::session::Session;

/// One favorite in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
	/// Position in the favorites list, passed back to remove/set actions.
	pub index: usize,
	/// Current image name, or the stored reference when the image is gone.
	pub label: String,
	pub state: EntryState,
}

/// Snapshot of the favorites panel for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
	pub title: String,
	pub category: String,
	pub header_split: f32,
	pub row_split: f32,
	/// Whether the add button is enabled.
	pub can_add: bool,
	/// Whether the clean button is enabled.
	pub can_clean: bool,
	pub rows: Vec<PanelRow>,
}

impl PanelView {
	/// Builds the panel from the session's current state.
	///
	/// Resolves every favorite once to label it.
	pub fn build(session: &Session) -> Self {
		let panel = &session.config().panel;
		let images = &session.document.images;
		let rows = session
			.document
			.favorites
			.iter()
			.enumerate()
			.map(|(index, entry)| match images.resolve(&entry.reference) {
				Some(handle) => PanelRow {
					index,
					label: images
						.name_of(handle)
						.map_or_else(|| entry.reference.to_string(), str::to_owned),
					state: EntryState::Resolvable,
				},
				None => PanelRow {
					index,
					label: entry.reference.to_string(),
					state: EntryState::Broken,
				},
			})
			.collect();

		Self {
			title: panel.title.clone(),
			category: panel.category.clone(),
			header_split: panel.header_split,
			row_split: panel.row_split,
			can_add: Action::AddCurrent.poll(session),
			can_clean: Action::Clean.poll(session),
			rows,
		}
	}

	/// Number of rows whose image is gone.
	pub fn broken_count(&self) -> usize {
		self.rows
			.iter()
			.filter(|row| row.state == EntryState::Broken)
			.count()
	}
}

impl fmt::Display for PanelView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{} [{}]", self.title, self.category)?;
		let add = if self.can_add { "+" } else { "-" };
		let clean = if self.can_clean { "+" } else { "-" };
		writeln!(
			f,
			"  ({add}) {}  ({clean}) Clean",
			Action::AddCurrent.label()
		)?;
		if self.rows.is_empty() {
			return writeln!(f, "  (no favorites)");
		}
		for row in &self.rows {
			match row.state {
				EntryState::Resolvable => writeln!(f, "  {:>2}: {}", row.index, row.label)?,
				EntryState::Broken => writeln!(f, "  {:>2}: {} (missing)", row.index, row.label)?,
			}
		}
		Ok(())
	}
}
