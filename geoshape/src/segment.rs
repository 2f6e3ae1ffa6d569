use crate::cartesian::{CartesianPoint2d, Orientation};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Returns true if the point lies exactly on the segment, endpoints included.
    ///
    /// Points outside the bounding box of the segment are rejected first, the rest are checked for exact collinearity
    /// with the endpoints. A zero-length segment contains only its own endpoint.
    pub fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        if self.0.equal(point) || self.1.equal(point) {
            return true;
        }

        let (x_min, x_max) = min_max(self.0.x(), self.1.x());
        let (y_min, y_max) = min_max(self.0.y(), self.1.y());
        if point.x() < x_min || point.x() > x_max || point.y() < y_min || point.y() > y_max {
            return false;
        }

        !self.0.equal(self.1)
            && Orientation::triplet(self.0, point, self.1) == Some(Orientation::Collinear)
    }

    /// Returns true if a horizontal ray from the point towards positive infinity crosses the segment.
    ///
    /// See [`CartesianPoint2d::ray_intersects`] for the treatment of vertices.
    pub fn crosses_ray<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        point.ray_intersects(self.0, self.1)
    }
}

fn min_max<N: PartialOrd>(a: N, b: N) -> (N, N) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
