//! Traits the host implements for the registry.
//!
//! ```text
//! FavoritesRegistry              host
//! ┌──────────────────┐           ┌────────────────────────────┐
//! │ clean()          │──────────►│ ResourceResolver::resolve  │
//! │ set_active()     │──────────►│ ActiveImageHost            │
//! │ state()          │           │   set_active_image()       │
//! └──────────────────┘           │   notify()                 │
//!                                └────────────────────────────┘
//! ```

use crate::entry::ImageRef;
use crate::notify::Notification;

/// Host lookup from a favorite's reference to a live image.
///
/// Called once per entry per clean pass, so implementations must be cheap and
/// synchronous. The answer may change between calls as the host's images are
/// deleted or renamed.
pub trait ResourceResolver {
	/// Handle the host uses to switch its active image.
	type Resource;

	/// Returns the live image for `reference`, or `None` if it no longer exists.
	fn resolve(&self, reference: &ImageRef) -> Option<Self::Resource>;
}

impl<T: ResourceResolver + ?Sized> ResourceResolver for &T {
	type Resource = T::Resource;

	fn resolve(&self, reference: &ImageRef) -> Option<Self::Resource> {
		(**self).resolve(reference)
	}
}

/// Host view whose active image a favorite can be jumped to.
pub trait ActiveImageHost {
	/// Image handle accepted by [`set_active_image`](Self::set_active_image).
	type Resource;

	/// Makes `image` the active image of this view.
	fn set_active_image(&mut self, image: Self::Resource);

	/// Shows a message to the user.
	fn notify(&mut self, notification: Notification);
}
