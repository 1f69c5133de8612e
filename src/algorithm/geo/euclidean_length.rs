use crate::array::PointArray;
use geo::EuclideanLength as _EuclideanLength;

pub trait EuclideanLength {
    type Output;

    /// Calculation of the length of the path through every point, in order
    ///
    /// # Examples
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use point_array::algorithm::geo::EuclideanLength;
    /// use point_array::array::PointArray;
    /// use point_array::scalar::Point;
    ///
    /// let arr = PointArray::from([Point::new(0, 0), Point::new(2, 2)]);
    ///
    /// assert_relative_eq!(arr.euclidean_length(), 8f64.sqrt());
    /// ```
    fn euclidean_length(&self) -> Self::Output;
}

impl EuclideanLength for PointArray {
    type Output = f64;

    fn euclidean_length(&self) -> Self::Output {
        let line: geo::LineString = self.into();
        line.euclidean_length()
    }
}
