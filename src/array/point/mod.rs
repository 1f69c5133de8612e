//! Contains the [`PointArray`], an exactly-sized owned sequence of Points.

pub use array::PointArray;

mod array;
