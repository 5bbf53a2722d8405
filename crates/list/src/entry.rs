use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier issued by the host for one image.
///
/// Hosts never reuse a handle value, so the handle of a deleted image stays
/// dangling instead of aliasing a newer image.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ImageHandle(pub u64);

impl fmt::Display for ImageHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Reference from a favorite to a host image.
///
/// Name references break as soon as the image is renamed. Handle references
/// survive renames and only break when the image is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRef {
	/// Lookup key into the host's image table.
	Name(String),
	/// Tracked handle issued by the host.
	Handle(ImageHandle),
}

impl ImageRef {
	/// Creates a name-keyed reference.
	pub fn name(name: impl Into<String>) -> Self {
		Self::Name(name.into())
	}
}

impl fmt::Display for ImageRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Name(name) => f.write_str(name),
			Self::Handle(handle) => fmt::Display::fmt(handle, f),
		}
	}
}

impl From<ImageHandle> for ImageRef {
	fn from(handle: ImageHandle) -> Self {
		Self::Handle(handle)
	}
}

impl From<&str> for ImageRef {
	fn from(name: &str) -> Self {
		Self::Name(name.to_owned())
	}
}

impl From<String> for ImageRef {
	fn from(name: String) -> Self {
		Self::Name(name)
	}
}

/// One favorite slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteEntry {
	/// The image this favorite points at.
	pub reference: ImageRef,
}

impl FavoriteEntry {
	/// Creates an entry for `reference`.
	pub fn new(reference: impl Into<ImageRef>) -> Self {
		Self {
			reference: reference.into(),
		}
	}
}
