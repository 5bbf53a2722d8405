#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Favorites list for image-editing hosts.
//!
//! A [`FavoritesRegistry`] is an ordered list of references to images that
//! the host owns. The registry never loads or caches images: every lookup
//! goes through a [`ResourceResolver`] supplied by the host at call time, so
//! an entry's state follows the host's image table as it changes.
//!
//! # Main Types
//!
//! - [`FavoritesRegistry`] - Ordered entries with add/remove/jump/clean
//! - [`ImageRef`] - Name-keyed or handle-based reference to a host image
//! - [`ResourceResolver`] - Host lookup from reference to live image
//! - [`ActiveImageHost`] - Host view that can switch its active image
//!
//! # Architecture
//!
//! ```text
//! UI action ──► FavoritesRegistry ──► ResourceResolver (host image table)
//!                      │
//!                      └──────────► ActiveImageHost (host view + messages)
//! ```

/// Favorite entries and image references.
pub mod entry;
/// Registry error types.
pub mod error;
/// User-facing notifications.
pub mod notify;
/// Ordered favorites registry.
pub mod registry;
/// Host seams used by the registry.
pub mod resolver;

pub use entry::{FavoriteEntry, ImageHandle, ImageRef};
pub use error::{RegistryError, Result};
pub use notify::{AutoDismiss, Level, Notification};
pub use registry::{EntryState, FavoritesRegistry, SetActive};
pub use resolver::{ActiveImageHost, ResourceResolver};
