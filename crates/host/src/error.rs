//! Error types for the host.

use std::path::PathBuf;

use faves_list::{ImageHandle, RegistryError};
use thiserror::Error;

/// Errors from image table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
	/// Image names must be non-empty.
	#[error("image name must not be empty")]
	EmptyName,
	/// Another image already uses this name.
	#[error("an image named {0:?} already exists")]
	NameTaken(String),
	/// No image with this handle.
	#[error("no image {0}")]
	NotFound(ImageHandle),
	/// No image with this name.
	#[error("no image named {0:?}")]
	UnknownName(String),
}

/// Errors from running an [`Action`](crate::Action).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
	/// The action's precondition does not hold in the current context.
	#[error("{action} is not available here")]
	Unavailable {
		/// Label of the rejected action.
		action: &'static str,
	},
	/// The registry rejected the call.
	#[error(transparent)]
	Registry(#[from] RegistryError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A panel split factor is outside `(0, 1)`.
	#[error("invalid {field}: {value} (expected a value between 0 and 1)")]
	InvalidSplit {
		/// Config key of the split.
		field: &'static str,
		/// The rejected value.
		value: f32,
	},
}
