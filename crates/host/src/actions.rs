//! User actions on the favorites list.
//!
//! Each [`Action`] maps to exactly one registry call. Before running, the
//! action's [`poll`](Action::poll) precondition is checked against the
//! session; a failed check is reported as [`ActionError::Unavailable`] and
//! nothing changes.
//!
//! | Action        | Available when                                   |
//! |---------------|--------------------------------------------------|
//! | `AddCurrent`  | the view is an image editor showing an image     |
//! | `Remove(i)`   | the view is an image editor                      |
//! | `SetActive(i)`| the view is an image editor and favorites exist  |
//! | `Clean`       | the view is an image editor                      |

use faves_list::{FavoriteEntry, ImageHandle, ImageRef, SetActive};
use tracing::debug;

use crate::error::ActionError;
use crate::session::Session;

/// A user action on the favorites list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// Add the editor's current image.
	AddCurrent,
	/// Remove the favorite at this index.
	Remove(usize),
	/// Show the favorite at this index in the editor.
	SetActive(usize),
	/// Drop favorites whose image is gone.
	Clean,
}

/// What a successful action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
	/// A favorite was appended at `index`.
	Added { index: usize, reference: ImageRef },
	/// This favorite was removed.
	Removed(FavoriteEntry),
	/// The editor now shows this image.
	Activated(ImageHandle),
	/// The favorite's image is gone; the editor was not changed.
	Unresolved(ImageRef),
	/// Broken favorites were dropped.
	Cleaned { removed: usize },
}

impl Action {
	/// Button label for this action.
	pub fn label(&self) -> &'static str {
		match self {
			Self::AddCurrent => "Add to Fave Images",
			Self::Remove(_) => "Remove from Fave Images",
			Self::SetActive(_) => "Set Current Image",
			Self::Clean => "Clean Fave Images",
		}
	}

	/// Returns `true` if this action can run in `session`.
	pub fn poll(&self, session: &Session) -> bool {
		if !session.editor.is_image_editor() {
			return false;
		}
		match self {
			Self::AddCurrent => session.current_reference().is_some(),
			Self::Remove(_) | Self::Clean => true,
			Self::SetActive(_) => !session.document.favorites.is_empty(),
		}
	}
}

impl Session {
	/// Runs `action` if its precondition holds.
	pub fn run(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
		if !action.poll(self) {
			debug!(?action, "action unavailable");
			return Err(ActionError::Unavailable {
				action: action.label(),
			});
		}
		debug!(?action, "running action");

		let outcome = match action {
			Action::AddCurrent => {
				let reference = self
					.current_reference()
					.ok_or(ActionError::Unavailable {
						action: action.label(),
					})?;
				let index = self.document.favorites.add(reference.clone());
				ActionOutcome::Added { index, reference }
			}
			Action::Remove(index) => {
				ActionOutcome::Removed(self.document.favorites.remove_at(index)?)
			}
			Action::SetActive(index) => {
				let favorites = &self.document.favorites;
				match favorites.set_active(index, &self.document.images, &mut self.editor)? {
					SetActive::Activated(handle) => ActionOutcome::Activated(handle),
					SetActive::Unresolved(reference) => ActionOutcome::Unresolved(reference),
				}
			}
			Action::Clean => ActionOutcome::Cleaned {
				removed: self.document.favorites.clean(&self.document.images),
			},
		};
		Ok(outcome)
	}
}
