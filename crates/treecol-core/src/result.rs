//! Convenience result type alias for Treecol.

use crate::error::ColumnError;

/// A specialized `Result` type for Treecol operations.
///
/// Defined as a convenience so that every crate does not need to write
/// `Result<T, ColumnError>` explicitly.
pub type ColumnResult<T> = Result<T, ColumnError>;
