//! Contains the [`Point`] scalar stored by [`PointArray`](crate::array::PointArray).

pub use point::Point;

pub mod point;
