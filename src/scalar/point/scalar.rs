use crate::error::{PointArrayError, Result};

/// A 2D location with integer coordinates.
///
/// `Point` is a plain value: copying it duplicates its coordinates. The default point is the
/// origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Add `delta` to both coordinates.
    ///
    /// Coordinate arithmetic wraps on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use point_array::scalar::Point;
    ///
    /// let mut pt = Point::new(1, -2);
    /// pt.shift(3);
    /// assert_eq!(pt, Point::new(4, 1));
    /// ```
    pub fn shift(&mut self, delta: i32) {
        self.shift_xy(delta, delta);
    }

    /// Add `dx` to x and `dy` to y.
    pub fn shift_xy(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    /// Translate by the coordinates of `other`.
    pub fn shift_by(&mut self, other: &Point) {
        self.shift_xy(other.x, other.y);
    }

    /// Euclidean distance to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use point_array::scalar::Point;
    ///
    /// let a = Point::new(0, 0);
    /// let b = Point::new(3, 4);
    /// assert_eq!(a.dist(&b), 5.0);
    /// ```
    pub fn dist(&self, other: &Point) -> f64 {
        // Differences are taken in f64 so that extreme coordinates do not overflow.
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }
}

fn coord_to_i32(value: f64) -> Result<i32> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX)
    {
        Ok(value as i32)
    } else {
        Err(PointArrayError::InvalidCoordinate(value))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}

impl From<geo::Coord<i32>> for Point {
    fn from(value: geo::Coord<i32>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<geo::Point<i32>> for Point {
    fn from(value: geo::Point<i32>) -> Self {
        value.0.into()
    }
}

impl From<Point> for geo::Coord<i32> {
    fn from(value: Point) -> Self {
        geo::Coord {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<Point> for geo::Point<i32> {
    fn from(value: Point) -> Self {
        geo::Point(value.into())
    }
}

impl From<Point> for geo::Coord {
    fn from(value: Point) -> Self {
        geo::Coord {
            x: f64::from(value.x),
            y: f64::from(value.y),
        }
    }
}

impl From<Point> for geo::Point {
    fn from(value: Point) -> Self {
        geo::Point(value.into())
    }
}

impl TryFrom<geo::Coord> for Point {
    type Error = PointArrayError;

    fn try_from(value: geo::Coord) -> Result<Self> {
        Ok(Point::new(coord_to_i32(value.x)?, coord_to_i32(value.y)?))
    }
}

impl TryFrom<geo::Point> for Point {
    type Error = PointArrayError;

    fn try_from(value: geo::Point) -> Result<Self> {
        value.0.try_into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{coord, point};

    #[test]
    fn default_is_origin() {
        let pt = Point::default();
        assert_eq!(pt.x(), 0);
        assert_eq!(pt.y(), 0);
    }

    #[test]
    fn shift_variants() {
        let mut pt = Point::new(1, 2);
        pt.shift(10);
        assert_eq!(pt, Point::new(11, 12));

        pt.shift_xy(-1, 3);
        assert_eq!(pt, Point::new(10, 15));

        pt.shift_by(&Point::new(5, -15));
        assert_eq!(pt, Point::new(15, 0));
    }

    #[test]
    fn shift_wraps_on_overflow() {
        let mut pt = Point::new(i32::MAX, i32::MIN);
        pt.shift_xy(1, -1);
        assert_eq!(pt, Point::new(i32::MIN, i32::MAX));
    }

    #[test]
    fn setters() {
        let mut pt = Point::new(0, 0);
        pt.set_x(-7);
        pt.set_y(9);
        assert_eq!((pt.x(), pt.y()), (-7, 9));
    }

    #[test]
    fn dist_is_euclidean() {
        let a = Point::new(-1, -1);
        let b = Point::new(1, 1);
        assert_relative_eq!(a.dist(&b), 8f64.sqrt());
        assert_eq!(a.dist(&a), 0.0);
        assert_eq!(a.dist(&b), b.dist(&a));
    }

    #[test]
    fn dist_extreme_coordinates() {
        let a = Point::new(i32::MIN, 0);
        let b = Point::new(i32::MAX, 0);
        assert_relative_eq!(a.dist(&b), f64::from(u32::MAX));
    }

    #[test]
    fn geo_roundtrip_i32() {
        let pt = Point::new(3, -4);
        let geo_pt: geo::Point<i32> = pt.into();
        assert_eq!(geo_pt, point!(x: 3, y: -4));
        assert_eq!(Point::from(geo_pt), pt);
    }

    #[test]
    fn try_from_float_coord() {
        let pt: Point = coord! { x: 2.0, y: -5.0 }.try_into().unwrap();
        assert_eq!(pt, Point::new(2, -5));

        let err = Point::try_from(coord! { x: 0.5, y: 0.0 }).unwrap_err();
        assert_eq!(err, PointArrayError::InvalidCoordinate(0.5));

        assert!(Point::try_from(point!(x: f64::NAN, y: 0.0)).is_err());
        assert!(Point::try_from(point!(x: 0.0, y: 1e12)).is_err());
    }
}
