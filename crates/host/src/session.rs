use std::path::PathBuf;

use faves_list::{ActiveImageHost, ImageHandle, ImageRef};
use tracing::debug;

use crate::config::{Config, ReferenceMode};
use crate::document::Document;
use crate::editor::ImageEditor;
use crate::error::ImageError;

/// The focused document and view.
///
/// Actions run against a session via [`Session::run`](crate::Session::run).
/// The image helpers here stand in for the rest of the host, which loads,
/// renames and deletes images independently of the favorites list.
#[derive(Debug)]
pub struct Session {
	pub document: Document,
	pub editor: ImageEditor,
	config: Config,
}

impl Session {
	/// Creates a session with an empty document and an empty image editor.
	pub fn new(config: Config) -> Self {
		Self::with_document(Document::new(), config)
	}

	/// Creates a session for an existing document.
	pub fn with_document(document: Document, config: Config) -> Self {
		let editor = ImageEditor::new(config.notifications.auto_dismiss());
		Self {
			document,
			editor,
			config,
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Adds an image to the document.
	pub fn load_image(
		&mut self,
		name: impl Into<String>,
		filepath: Option<PathBuf>,
	) -> Result<ImageHandle, ImageError> {
		self.document.images.insert_with_path(name, filepath)
	}

	/// Shows the image called `name` in the editor.
	pub fn open_image(&mut self, name: &str) -> Result<ImageHandle, ImageError> {
		let handle = self.handle_of(name)?;
		self.editor.set_active_image(handle);
		Ok(handle)
	}

	/// Renames the image called `old`.
	pub fn rename_image(&mut self, old: &str, new: &str) -> Result<ImageHandle, ImageError> {
		let handle = self.handle_of(old)?;
		self.document.images.rename(handle, new)?;
		Ok(handle)
	}

	/// Deletes the image called `name`. The editor stops showing it if it was active.
	///
	/// Favorites pointing at the image are left alone and become broken.
	pub fn delete_image(&mut self, name: &str) -> Result<ImageHandle, ImageError> {
		let (handle, _) = self
			.document
			.images
			.remove_named(name)
			.ok_or_else(|| ImageError::UnknownName(name.to_owned()))?;
		if self.editor.active_image() == Some(handle) {
			debug!(%handle, "active image deleted");
			self.editor.clear_active_image();
		}
		Ok(handle)
	}

	/// Reference to the editor's current image, in the configured form.
	pub fn current_reference(&self) -> Option<ImageRef> {
		let handle = self.editor.active_image()?;
		let name = self.document.images.name_of(handle)?;
		Some(match self.config.reference_mode {
			ReferenceMode::Name => ImageRef::name(name),
			ReferenceMode::Handle => ImageRef::Handle(handle),
		})
	}

	fn handle_of(&self, name: &str) -> Result<ImageHandle, ImageError> {
		self.document
			.images
			.handle_of(name)
			.ok_or_else(|| ImageError::UnknownName(name.to_owned()))
	}
}

impl Default for Session {
	fn default() -> Self {
		Self::new(Config::default())
	}
}
