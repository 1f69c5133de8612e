//! Algorithms implemented on point arrays using georust/geo algorithms.

/// Calculate the length of the path through an array's points.
pub mod euclidean_length;
pub use euclidean_length::EuclideanLength;

/// Translate every point of an array along its axes.
pub mod translate;
pub use translate::Translate;
