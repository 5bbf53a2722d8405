//! The favorites registry.
//!
//! [`FavoritesRegistry`] owns an ordered list of [`FavoriteEntry`] values for
//! one document. It never dereferences an entry on its own: resolution only
//! happens in [`set_active`], [`state`] and [`clean`], always through the
//! resolver passed to that call.
//!
//! An entry is either [`Resolvable`] or [`Broken`]. The state is derived from
//! the resolver each time it is asked for and is never stored, so it follows
//! deletions and renames in the host between calls.
//!
//! [`set_active`]: FavoritesRegistry::set_active
//! [`state`]: FavoritesRegistry::state
//! [`clean`]: FavoritesRegistry::clean
//! [`Resolvable`]: EntryState::Resolvable
//! [`Broken`]: EntryState::Broken

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::entry::{FavoriteEntry, ImageRef};
use crate::error::{RegistryError, Result};
use crate::notify::Notification;
use crate::resolver::{ActiveImageHost, ResourceResolver};

/// Derived state of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryState {
	/// The host currently has the referenced image.
	Resolvable,
	/// The referenced image was deleted (or renamed, for name references).
	Broken,
}

/// Outcome of [`FavoritesRegistry::set_active`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetActive<R> {
	/// The host view now shows this image.
	Activated(R),
	/// The image is gone; the host view was left unchanged.
	Unresolved(ImageRef),
}

impl<R> SetActive<R> {
	/// Returns `true` if the host view was switched.
	pub fn is_activated(&self) -> bool {
		matches!(self, Self::Activated(_))
	}
}

/// Ordered list of favorite images.
///
/// Insertion order is kept, duplicates are allowed, and removal shifts later
/// entries down by one. Serializes as a plain list of entries so hosts can
/// persist it with the rest of their document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesRegistry {
	entries: Vec<FavoriteEntry>,
}

impl FavoritesRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding `entries` in order.
	pub fn from_entries(entries: impl IntoIterator<Item = FavoriteEntry>) -> Self {
		Self {
			entries: entries.into_iter().collect(),
		}
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns all entries in order.
	pub fn entries(&self) -> &[FavoriteEntry] {
		&self.entries
	}

	/// Iterates entries in order.
	pub fn iter(&self) -> std::slice::Iter<'_, FavoriteEntry> {
		self.entries.iter()
	}

	/// Appends a favorite and returns its index.
	///
	/// The reference is stored as given; it is not checked against the host.
	pub fn add(&mut self, reference: impl Into<ImageRef>) -> usize {
		let entry = FavoriteEntry::new(reference);
		trace!(reference = %entry.reference, index = self.entries.len(), "favorite added");
		self.entries.push(entry);
		self.entries.len() - 1
	}

	/// Returns the entry at `index`.
	pub fn get(&self, index: usize) -> Result<&FavoriteEntry> {
		self.entries
			.get(index)
			.ok_or_else(|| self.out_of_range(index))
	}

	/// Removes and returns the entry at `index`.
	///
	/// Later entries shift down by one. The registry is left untouched when
	/// `index` is out of range.
	pub fn remove_at(&mut self, index: usize) -> Result<FavoriteEntry> {
		if index >= self.entries.len() {
			return Err(self.out_of_range(index));
		}
		let entry = self.entries.remove(index);
		trace!(
			reference = %entry.reference,
			index,
			remaining = self.entries.len(),
			"favorite removed"
		);
		Ok(entry)
	}

	/// Looks up `entry` through `resolver`.
	///
	/// `None` means the image is gone, which is an expected state rather than
	/// a failure.
	pub fn resolve<R: ResourceResolver>(
		&self,
		entry: &FavoriteEntry,
		resolver: &R,
	) -> Option<R::Resource> {
		resolver.resolve(&entry.reference)
	}

	/// Returns the current state of the entry at `index`.
	pub fn state<R: ResourceResolver>(&self, index: usize, resolver: &R) -> Result<EntryState> {
		let entry = self.get(index)?;
		Ok(match self.resolve(entry, resolver) {
			Some(_) => EntryState::Resolvable,
			None => EntryState::Broken,
		})
	}

	/// Switches `host` to the image of the entry at `index`.
	///
	/// A broken entry leaves `host` unchanged, sends it an error notification
	/// and returns [`SetActive::Unresolved`].
	pub fn set_active<R, H>(
		&self,
		index: usize,
		resolver: &R,
		host: &mut H,
	) -> Result<SetActive<R::Resource>>
	where
		R: ResourceResolver,
		R::Resource: Clone,
		H: ActiveImageHost<Resource = R::Resource>,
	{
		let entry = self.get(index)?;
		match self.resolve(entry, resolver) {
			Some(image) => {
				trace!(reference = %entry.reference, index, "favorite activated");
				host.set_active_image(image.clone());
				Ok(SetActive::Activated(image))
			}
			None => {
				warn!(reference = %entry.reference, index, "favorite image not found");
				host.notify(Notification::error(format!(
					"{} is not in images",
					entry.reference
				)));
				Ok(SetActive::Unresolved(entry.reference.clone()))
			}
		}
	}

	/// Removes every entry whose image is gone and returns how many were removed.
	///
	/// Survivors keep their relative order. Each entry is resolved exactly
	/// once, so adjacent broken entries are all removed in a single pass and a
	/// second call with an unchanged host removes nothing.
	pub fn clean<R: ResourceResolver>(&mut self, resolver: &R) -> usize {
		let before = self.entries.len();
		self.entries
			.retain(|entry| resolver.resolve(&entry.reference).is_some());
		let removed = before - self.entries.len();
		trace!(removed, remaining = self.entries.len(), "favorites cleaned");
		removed
	}

	fn out_of_range(&self, index: usize) -> RegistryError {
		RegistryError::IndexOutOfRange {
			index,
			len: self.entries.len(),
		}
	}
}
