use crate::error::{PointArrayError, Result};
use crate::scalar::Point;

/// An owned, contiguous sequence of [`Point`]s that is reallocated to its exact size on every
/// structural change.
///
/// The buffer is a boxed slice, so its capacity is always equal to [`len`](Self::len): no spare
/// capacity is retained between operations. This makes every [`append`](Self::append),
/// [`insert`](Self::insert) and [`remove`](Self::remove) `O(len)`, and `n` appends `O(n²)`.
///
/// Positions are signed. Positional edits with an out-of-range position are silently ignored and
/// lookups with an out-of-range position return `None`; callers that need to detect whether an
/// edit happened compare [`len`](Self::len) before and after.
///
/// Cloning deep-copies the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointArray {
    points: Box<[Point]>,
}

impl PointArray {
    /// Create a new empty PointArray.
    /// # Implementation
    /// This function does not allocate.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of points in this array.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the array contains no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Map a signed position onto an index into the buffer, if it is in bounds.
    fn index(&self, pos: isize) -> Option<usize> {
        usize::try_from(pos).ok().filter(|&i| i < self.len())
    }

    /// Add `pt` to the end of this array.
    ///
    /// # Implementation
    /// This reallocates the buffer to `len + 1` and is `O(len)`.
    pub fn append(&mut self, pt: Point) {
        let last = self.len();
        self.resize(last + 1);
        self.points[last] = pt;
    }

    /// Insert `pt` at `pos`, shifting every following point one position to the right.
    ///
    /// A `pos` at or past the end appends. A negative `pos` leaves the array unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use point_array::array::PointArray;
    /// use point_array::scalar::Point;
    ///
    /// let mut arr = PointArray::new();
    /// arr.append(Point::new(1, 1));
    /// arr.append(Point::new(2, 2));
    /// arr.insert(Point::new(0, 0), 0);
    /// assert_eq!(arr.get(0), Some(&Point::new(0, 0)));
    /// assert_eq!(arr.len(), 3);
    ///
    /// arr.insert(Point::new(9, 9), -1);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn insert(&mut self, pt: Point, pos: isize) {
        let Ok(pos) = usize::try_from(pos) else {
            return;
        };
        if pos >= self.len() {
            self.append(pt);
            return;
        }

        self.resize(self.len() + 1);
        for i in (pos + 1..self.len()).rev() {
            self.points[i] = self.points[i - 1];
        }
        self.points[pos] = pt;
    }

    /// Remove the point at `pos`, shifting every following point one position to the left.
    ///
    /// An out-of-range `pos` leaves the array unchanged.
    pub fn remove(&mut self, pos: isize) {
        let Some(pos) = self.index(pos) else {
            return;
        };

        for i in pos..self.len() - 1 {
            self.points[i] = self.points[i + 1];
        }
        self.resize(self.len() - 1);
    }

    /// Release the buffer. Calling this on an empty array is a no-op.
    pub fn clear(&mut self) {
        self.points = Box::default();
    }

    /// Reallocate the buffer to exactly `n` points.
    ///
    /// The first `min(len, n)` points keep their positions. When growing, the new trailing
    /// points are [`Point::default`].
    pub fn resize(&mut self, n: usize) {
        let kept = self.len().min(n);
        let mut points = Vec::with_capacity(n);
        points.extend_from_slice(&self.points[..kept]);
        points.resize(n, Point::default());
        self.points = points.into_boxed_slice();
    }

    /// The point at `pos`, or `None` if `pos` is out of bounds.
    pub fn get(&self, pos: isize) -> Option<&Point> {
        self.index(pos).map(|i| &self.points[i])
    }

    /// A mutable reference to the point at `pos`, or `None` if `pos` is out of bounds.
    pub fn get_mut(&mut self, pos: isize) -> Option<&mut Point> {
        self.index(pos).map(|i| &mut self.points[i])
    }

    /// Total length of the path visiting every point in array order.
    ///
    /// Arrays with fewer than two points have a path length of exactly `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use point_array::array::PointArray;
    /// use point_array::scalar::Point;
    ///
    /// let arr = PointArray::from([Point::new(0, 0), Point::new(3, 4), Point::new(3, 0)]);
    /// assert_eq!(arr.compute_path(), 9.0);
    /// ```
    pub fn compute_path(&self) -> f64 {
        self.points
            .windows(2)
            .fold(0.0, |sum, pair| sum + pair[0].dist(&pair[1]))
    }

    /// View the underlying buffer.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Point> {
        self.points.iter_mut()
    }
}

impl From<&[Point]> for PointArray {
    fn from(points: &[Point]) -> Self {
        Self {
            points: points.into(),
        }
    }
}

impl From<Vec<Point>> for PointArray {
    fn from(points: Vec<Point>) -> Self {
        Self {
            points: points.into_boxed_slice(),
        }
    }
}

impl<const N: usize> From<[Point; N]> for PointArray {
    fn from(points: [Point; N]) -> Self {
        Self {
            points: Box::new(points),
        }
    }
}

impl FromIterator<Point> for PointArray {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointArray {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PointArray {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_vec().into_iter()
    }
}

impl From<&PointArray> for geo::LineString {
    fn from(value: &PointArray) -> Self {
        geo::LineString(value.iter().map(|pt| geo::Coord::<f64>::from(*pt)).collect())
    }
}

impl From<&PointArray> for geo::MultiPoint<i32> {
    fn from(value: &PointArray) -> Self {
        geo::MultiPoint(value.iter().map(|pt| geo::Point::<i32>::from(*pt)).collect())
    }
}

impl From<geo::LineString<i32>> for PointArray {
    fn from(value: geo::LineString<i32>) -> Self {
        value.0.into_iter().map(Point::from).collect()
    }
}

impl TryFrom<&geo::LineString> for PointArray {
    type Error = PointArrayError;

    fn try_from(value: &geo::LineString) -> Result<Self> {
        let points = value
            .coords()
            .map(|coord| Point::try_from(*coord))
            .collect::<Result<Box<[Point]>>>()?;
        Ok(Self { points })
    }
}
