//! Contains the array types of this crate.

pub use point::PointArray;

pub mod point;
