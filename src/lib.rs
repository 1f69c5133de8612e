//! A resizable array of 2D integer points.
//!
//! [`PointArray`](array::PointArray) owns an exactly-sized buffer of
//! [`Point`](scalar::Point)s and supports positional edits plus computing the length of the path
//! through its points. Interop with [`geo`] types and a few [`geo`]-backed algorithms live in
//! [`algorithm::geo`].

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use array::PointArray;
pub use scalar::Point;

pub mod algorithm;
pub mod array;
pub mod error;
pub mod scalar;
