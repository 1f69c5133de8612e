//! Defines [`PointArrayError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
///
/// The container operations themselves never fail. Errors only arise when converting from
/// floating-point [`geo`] geometries whose coordinates have no exact `i32` representation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PointArrayError {
    /// A coordinate is NaN, infinite, fractional, or outside the `i32` range.
    #[error("Coordinate {0} cannot be represented as an i32")]
    InvalidCoordinate(f64),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, PointArrayError>;
