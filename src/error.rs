//! Error type for point and rectangle construction.

/// Errors raised when a point or rectangle is built from invalid values.
///
/// Once a [`Point`](crate::Point) or [`Rect`](crate::Rect) exists it is valid,
/// so no tree operation can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A coordinate was NaN or infinite, or rectangle bounds were inverted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
