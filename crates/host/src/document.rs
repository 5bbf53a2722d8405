use std::sync::atomic::{AtomicU64, Ordering};

use faves_list::FavoritesRegistry;

use crate::images::ImageTable;

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

impl DocumentId {
	/// Generates a new unique document ID.
	pub fn next() -> Self {
		Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// An open document: its images and its favorites.
///
/// The favorites list is created with the document and dropped with it.
#[derive(Debug)]
pub struct Document {
	id: DocumentId,
	/// Images owned by this document.
	pub images: ImageTable,
	/// Favorite images of this document.
	pub favorites: FavoritesRegistry,
}

impl Document {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self::with_favorites(FavoritesRegistry::new())
	}

	/// Creates a document around a previously saved favorites list.
	pub fn with_favorites(favorites: FavoritesRegistry) -> Self {
		Self {
			id: DocumentId::next(),
			images: ImageTable::new(),
			favorites,
		}
	}

	pub fn id(&self) -> DocumentId {
		self.id
	}
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}
