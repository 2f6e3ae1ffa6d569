use nalgebra::{Scalar, Vector2};
use num_traits::Float;

/// A point in 2d cartesian coordinate space.
///
/// Segment and containment algorithms of the crate are written against this trait, so they work for
/// [`Point`](crate::Point) as well as for coordinates of other geometry libraries.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Float + Scalar;

    /// X coordinate (longitude for geographic data).
    fn x(&self) -> Self::Num;
    /// Y coordinate (latitude for geographic data).
    fn y(&self) -> Self::Num;

    /// Exact coordinate equality.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }

    /// Euclidean distance between the points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        self.distance_sq(other).sqrt()
    }

    /// Returns true if a horizontal ray cast from this point towards positive infinity crosses the segment `a-b`.
    ///
    /// The segment counts as crossed only if the Y coordinate of the point lies in the half-open interval
    /// `[min(a.y, b.y), max(a.y, b.y))`. Thanks to that a ray passing exactly through a vertex shared by two edges is
    /// counted once, and horizontal edges are never counted.
    fn ray_intersects(
        &self,
        a: &impl CartesianPoint2d<Num = Self::Num>,
        b: &impl CartesianPoint2d<Num = Self::Num>,
    ) -> bool {
        let y = self.y();
        if (a.y() > y) == (b.y() > y) {
            return false;
        }

        let x_cross = a.x() + (y - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
        self.x() < x_cross
    }
}
