//! Configuration for the favorites host.
//!
//! Configuration is written in TOML. Every key is optional:
//!
//! ```toml
//! # What "add" stores: "handle" survives renames, "name" does not.
//! reference-mode = "handle"
//!
//! [panel]
//! title = "Favorite Images"
//! category = "Faves"
//! header-split = 0.6
//! row-split = 0.9
//!
//! [notifications]
//! auto-dismiss-secs = 4   # 0 keeps messages until dismissed
//! ```
//!
//! The default location is `$XDG_CONFIG_HOME/faves/config.toml`
//! (or the platform equivalent).

use std::path::{Path, PathBuf};
use std::time::Duration;

use faves_list::AutoDismiss;
use serde::Deserialize;

use crate::error::ConfigError;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Which kind of reference "add" stores for the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceMode {
	/// Store the image name. Breaks when the image is renamed.
	Name,
	/// Store the image handle. Breaks only when the image is deleted.
	#[default]
	Handle,
}

/// Favorites panel layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PanelConfig {
	pub title: String,
	/// Sidebar tab the panel lives in.
	pub category: String,
	/// Width share of the add button next to the clean button.
	pub header_split: f32,
	/// Width share of the favorite button next to its remove button.
	pub row_split: f32,
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			title: "Favorite Images".into(),
			category: "Faves".into(),
			header_split: 0.6,
			row_split: 0.9,
		}
	}
}

/// Notification timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NotificationConfig {
	/// Seconds before a message disappears; `0` means never.
	pub auto_dismiss_secs: u64,
}

impl Default for NotificationConfig {
	fn default() -> Self {
		Self {
			auto_dismiss_secs: 4,
		}
	}
}

impl NotificationConfig {
	pub fn auto_dismiss(&self) -> AutoDismiss {
		match self.auto_dismiss_secs {
			0 => AutoDismiss::Never,
			secs => AutoDismiss::After(Duration::from_secs(secs)),
		}
	}
}

/// Host configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
	pub reference_mode: ReferenceMode,
	pub panel: PanelConfig,
	pub notifications: NotificationConfig,
}

impl Config {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads configuration from `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}

	/// Returns the default config file location, if the platform has one.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("faves").join("config.toml"))
	}

	/// Loads the default config file, or defaults if there is none.
	pub fn load_default() -> Result<Self> {
		match Self::default_path() {
			Some(path) if path.is_file() => Self::load(&path),
			_ => Ok(Self::default()),
		}
	}

	fn validate(&self) -> Result<()> {
		for (field, value) in [
			("panel.header-split", self.panel.header_split),
			("panel.row-split", self.panel.row_split),
		] {
			if !(value > 0.0 && value < 1.0) {
				return Err(ConfigError::InvalidSplit { field, value });
			}
		}
		Ok(())
	}
}
