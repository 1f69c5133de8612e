pub use scalar::Point;

mod scalar;
