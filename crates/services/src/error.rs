//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `LanguageService`.
///
/// The quiz engine itself has no error type: invalid-state actions are
/// silent no-ops by design, so only the storage-backed surface can fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LanguageServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
