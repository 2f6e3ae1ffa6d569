//! Behavior shared by all geometries: containment, extent and coordinate traversal.

use crate::cartesian::Rect;
use crate::Point;

/// Replaces coordinates of a geometry, see [`Shape::transform`].
///
/// Implemented for every `FnMut(Point) -> Point`.
pub trait Transformer {
    /// Returns the replacement of the point.
    fn transform(&mut self, point: Point) -> Point;
}

impl<F: FnMut(Point) -> Point> Transformer for F {
    fn transform(&mut self, point: Point) -> Point {
        self(point)
    }
}

/// Receives coordinates of a geometry, see [`Shape::visit`].
///
/// Implemented for every `FnMut(&Point)`.
pub trait Visitor {
    /// Called once for every point.
    fn visit(&mut self, point: &Point);
}

impl<F: FnMut(&Point)> Visitor for F {
    fn visit(&mut self, point: &Point) {
        self(point)
    }
}

/// Common geometry behavior.
pub trait Shape {
    /// Returns true if the point belongs to the geometry.
    ///
    /// Exact meaning depends on the geometry type:
    /// * areas (polygons, multi-lines and multi-polygons) use the even-odd rule, points on the boundary are inside,
    /// * lines contain points lying exactly on one of their segments,
    /// * points and multi-points contain only the equal points,
    /// * circles use their [`CircleContainment`](crate::CircleContainment) strategy,
    /// * collections contain a point if they are not empty and every member does.
    fn contains(&self, point: &Point) -> bool;

    /// Bounding rectangle of all points of the geometry. `None` if the geometry has no points.
    fn bounding_rect(&self) -> Option<Rect>;

    /// Replaces every point of the geometry by the result of the transformer.
    ///
    /// Structure of the geometry (number of members, rings and points) is preserved.
    fn transform(&mut self, transformer: &mut impl Transformer);

    /// Calls the visitor once for every point of the geometry, in order.
    fn visit(&self, visitor: &mut impl Visitor);
}

pub(crate) fn transform_points(points: &mut [Point], transformer: &mut impl Transformer) {
    for point in points {
        *point = transformer.transform(*point);
    }
}

pub(crate) fn visit_points(points: &[Point], visitor: &mut impl Visitor) {
    for point in points {
        visitor.visit(point);
    }
}

/// Merged bounding rectangle of the shapes.
pub(crate) fn merged_rect<'a, S: Shape + 'a>(
    shapes: impl IntoIterator<Item = &'a S>,
) -> Option<Rect> {
    shapes
        .into_iter()
        .filter_map(Shape::bounding_rect)
        .reduce(|a, b| a.merge(b))
}
