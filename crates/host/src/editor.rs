//! Image editor views.

use faves_list::{ActiveImageHost, AutoDismiss, ImageHandle, Notification};
use tracing::debug;

/// What kind of area a view occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaKind {
	/// An image-capable editor; favorites actions are available here.
	#[default]
	ImageEditor,
	/// Any other area (3D view, text editor, ...).
	Other,
}

/// A view showing at most one image.
#[derive(Debug, Default)]
pub struct ImageEditor {
	/// Area kind of this view.
	pub area: AreaKind,
	active: Option<ImageHandle>,
	notifications: Vec<Notification>,
	auto_dismiss: AutoDismiss,
}

impl ImageEditor {
	/// Creates an empty image editor whose messages use `auto_dismiss`.
	pub fn new(auto_dismiss: AutoDismiss) -> Self {
		Self {
			auto_dismiss,
			..Self::default()
		}
	}

	/// Returns `true` if this view can show images.
	pub fn is_image_editor(&self) -> bool {
		self.area == AreaKind::ImageEditor
	}

	/// Returns the image currently shown.
	pub fn active_image(&self) -> Option<ImageHandle> {
		self.active
	}

	/// Stops showing any image.
	pub fn clear_active_image(&mut self) {
		self.active = None;
	}

	/// Messages shown so far, oldest first.
	pub fn notifications(&self) -> &[Notification] {
		&self.notifications
	}

	/// Removes and returns all pending messages.
	pub fn take_notifications(&mut self) -> Vec<Notification> {
		std::mem::take(&mut self.notifications)
	}
}

impl ActiveImageHost for ImageEditor {
	type Resource = ImageHandle;

	fn set_active_image(&mut self, image: ImageHandle) {
		debug!(from = ?self.active, to = %image, "active image changed");
		self.active = Some(image);
	}

	fn notify(&mut self, notification: Notification) {
		self.notifications
			.push(notification.with_auto_dismiss(self.auto_dismiss));
	}
}
