use thiserror::Error;

/// Errors raised by [`FavoritesRegistry`](crate::FavoritesRegistry).
///
/// Unresolvable images are not errors; see [`SetActive`](crate::SetActive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// The caller passed an index outside `0..len`.
	#[error("favorite index {index} out of range (len {len})")]
	IndexOutOfRange {
		/// The rejected index.
		index: usize,
		/// Registry length at the time of the call.
		len: usize,
	},
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
