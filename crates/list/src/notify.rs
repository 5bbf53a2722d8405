use std::time::Duration;

/// Severity level for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
	/// Informational message (default).
	#[default]
	Info,
	/// Warning message.
	Warn,
	/// Error message.
	Error,
	/// Success message.
	Success,
}

/// Controls automatic dismissal of notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDismiss {
	/// Notification remains visible until manually dismissed.
	Never,
	/// Notification automatically dismisses after the specified duration.
	After(Duration),
}

impl AutoDismiss {
	/// Default auto-dismiss duration (4 seconds).
	pub const DEFAULT: Self = Self::After(Duration::from_secs(4));
}

impl Default for AutoDismiss {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Message shown to the user by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	/// Severity level.
	pub level: Level,
	/// The formatted message content.
	pub message: String,
	/// Auto-dismiss behavior.
	pub auto_dismiss: AutoDismiss,
}

impl Notification {
	/// Creates a notification with the default dismissal.
	pub fn new(level: Level, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
			auto_dismiss: AutoDismiss::default(),
		}
	}

	/// Creates an error-level notification.
	pub fn error(message: impl Into<String>) -> Self {
		Self::new(Level::Error, message)
	}

	/// Replaces the dismissal behavior.
	pub fn with_auto_dismiss(mut self, auto_dismiss: AutoDismiss) -> Self {
		self.auto_dismiss = auto_dismiss;
		self
	}
}
