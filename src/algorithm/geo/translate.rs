use crate::array::PointArray;

pub trait Translate {
    /// Translate every point along its axes by the given offsets
    ///
    /// Coordinates wrap on overflow, as with [`Point::shift_xy`](crate::scalar::Point::shift_xy).
    ///
    /// # Examples
    ///
    /// ```
    /// use point_array::algorithm::geo::Translate;
    /// use point_array::array::PointArray;
    /// use point_array::scalar::Point;
    ///
    /// let arr = PointArray::from([Point::new(0, 0), Point::new(5, 5)]);
    ///
    /// let translated = arr.translate(1, -3);
    ///
    /// assert_eq!(translated, PointArray::from([Point::new(1, -3), Point::new(6, 2)]));
    /// ```
    #[must_use]
    fn translate(&self, x_offset: i32, y_offset: i32) -> Self;

    /// Translate every point along its axes, but in place.
    fn translate_mut(&mut self, x_offset: i32, y_offset: i32);
}

impl Translate for PointArray {
    fn translate(&self, x_offset: i32, y_offset: i32) -> Self {
        let mut output = self.clone();
        output.translate_mut(x_offset, y_offset);
        output
    }

    fn translate_mut(&mut self, x_offset: i32, y_offset: i32) {
        self.iter_mut()
            .for_each(|pt| pt.shift_xy(x_offset, y_offset));
    }
}
