#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Reference host for the favorites list.
//!
//! Provides everything around a [`FavoritesRegistry`] that a real image
//! editor would own: the image table the favorites point into, the view
//! whose active image a favorite switches, the document that owns both, and
//! the user actions with their availability checks.
//!
//! # Main Types
//!
//! - [`Session`] - A document plus the focused view; runs [`Action`]s
//! - [`Document`] - Owns the [`ImageTable`] and the document's favorites
//! - [`ImageEditor`] - View with an active image and a message log
//! - [`PanelView`] - What the favorites panel shows
//! - [`Config`] - Reference mode, panel layout, notification timing
//!
//! ```text
//! Session
//! ├── document: Document
//! │   ├── images: ImageTable          // ResourceResolver
//! │   └── favorites: FavoritesRegistry
//! ├── editor: ImageEditor             // ActiveImageHost
//! └── config: Config
//! ```
//!
//! [`FavoritesRegistry`]: faves_list::FavoritesRegistry

/// User actions and their preconditions.
pub mod actions;
/// Configuration loading.
pub mod config;
/// Documents owning images and favorites.
pub mod document;
/// Image editor views.
pub mod editor;
/// Host error types.
pub mod error;
/// Host image table.
pub mod images;
/// Favorites panel model.
pub mod panel;
/// Focused document and view.
pub mod session;

pub use actions::{Action, ActionOutcome};
pub use config::{Config, NotificationConfig, PanelConfig, ReferenceMode};
pub use document::{Document, DocumentId};
pub use editor::{AreaKind, ImageEditor};
pub use error::{ActionError, ConfigError, ImageError};
pub use images::{Image, ImageTable};
pub use panel::{PanelRow, PanelView};
pub use session::Session;
