//! Algorithms implemented on [`PointArray`](crate::array::PointArray).

pub mod geo;
