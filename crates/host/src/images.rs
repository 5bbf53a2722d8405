//! The host's image table.
//!
//! Images are keyed by [`ImageHandle`] and listed in insertion order. Names
//! are unique and indexed separately so both kinds of [`ImageRef`] resolve in
//! constant time. Handles come from a per-table counter and are never reused.

use std::path::{Path, PathBuf};

use faves_list::{ImageHandle, ImageRef, ResourceResolver};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::ImageError;

/// An image known to the host. Pixel data lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
	/// Unique display name.
	pub name: String,
	/// File the image was loaded from, if any.
	pub filepath: Option<PathBuf>,
}

/// All images of one document.
#[derive(Debug, Default)]
pub struct ImageTable {
	images: IndexMap<ImageHandle, Image>,
	by_name: FxHashMap<String, ImageHandle>,
	next_handle: u64,
}

impl ImageTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an image without a backing file.
	pub fn insert(&mut self, name: impl Into<String>) -> Result<ImageHandle, ImageError> {
		self.insert_with_path(name, None)
	}

	/// Adds an image and returns its new handle.
	pub fn insert_with_path(
		&mut self,
		name: impl Into<String>,
		filepath: Option<PathBuf>,
	) -> Result<ImageHandle, ImageError> {
		let name = name.into();
		self.check_name_free(&name)?;

		let handle = ImageHandle(self.next_handle);
		self.next_handle += 1;
		trace!(%handle, name = %name, "image inserted");
		self.by_name.insert(name.clone(), handle);
		self.images.insert(handle, Image { name, filepath });
		Ok(handle)
	}

	/// Renames an image. Handles stay valid; name references to the old name break.
	pub fn rename(
		&mut self,
		handle: ImageHandle,
		new_name: impl Into<String>,
	) -> Result<(), ImageError> {
		let new_name = new_name.into();
		let current = self
			.images
			.get(&handle)
			.ok_or(ImageError::NotFound(handle))?;
		if current.name == new_name {
			return Ok(());
		}
		self.check_name_free(&new_name)?;

		let Some(image) = self.images.get_mut(&handle) else {
			return Err(ImageError::NotFound(handle));
		};
		let old_name = std::mem::replace(&mut image.name, new_name.clone());
		self.by_name.remove(&old_name);
		self.by_name.insert(new_name.clone(), handle);
		trace!(%handle, from = %old_name, to = %new_name, "image renamed");
		Ok(())
	}

	/// Deletes an image, keeping the order of the rest.
	pub fn remove(&mut self, handle: ImageHandle) -> Option<Image> {
		let image = self.images.shift_remove(&handle)?;
		self.by_name.remove(&image.name);
		trace!(%handle, name = %image.name, "image removed");
		Some(image)
	}

	/// Deletes the image called `name`.
	pub fn remove_named(&mut self, name: &str) -> Option<(ImageHandle, Image)> {
		let handle = self.handle_of(name)?;
		self.remove(handle).map(|image| (handle, image))
	}

	pub fn get(&self, handle: ImageHandle) -> Option<&Image> {
		self.images.get(&handle)
	}

	pub fn contains(&self, handle: ImageHandle) -> bool {
		self.images.contains_key(&handle)
	}

	/// Returns the handle of the image called `name`.
	pub fn handle_of(&self, name: &str) -> Option<ImageHandle> {
		self.by_name.get(name).copied()
	}

	/// Returns the current name of `handle`.
	pub fn name_of(&self, handle: ImageHandle) -> Option<&str> {
		self.images.get(&handle).map(|image| image.name.as_str())
	}

	/// Returns the backing file of `handle`, if it has one.
	pub fn filepath_of(&self, handle: ImageHandle) -> Option<&Path> {
		self.images.get(&handle)?.filepath.as_deref()
	}

	pub fn len(&self) -> usize {
		self.images.len()
	}

	pub fn is_empty(&self) -> bool {
		self.images.is_empty()
	}

	/// Iterates images in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (ImageHandle, &Image)> {
		self.images.iter().map(|(handle, image)| (*handle, image))
	}

	fn check_name_free(&self, name: &str) -> Result<(), ImageError> {
		if name.is_empty() {
			return Err(ImageError::EmptyName);
		}
		if self.by_name.contains_key(name) {
			return Err(ImageError::NameTaken(name.to_owned()));
		}
		Ok(())
	}
}

impl ResourceResolver for ImageTable {
	type Resource = ImageHandle;

	fn resolve(&self, reference: &ImageRef) -> Option<ImageHandle> {
		match reference {
			ImageRef::Name(name) => self.handle_of(name),
			ImageRef::Handle(handle) => self.contains(*handle).then_some(*handle),
		}
	}
}
