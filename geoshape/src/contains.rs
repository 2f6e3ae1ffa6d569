//! Point containment shared by polygons, multi-lines and multi-polygons.
//!
//! Regions are tested with the even-odd rule: a horizontal ray is cast from the query point towards positive
//! infinity and crossings with the edges of all rings are counted. Every ring is implicitly closed by an edge from
//! its last point back to the first one. All rings contribute to the same parity, so a ring lying inside another one
//! acts as a hole regardless of its role in the geometry.
//!
//! A point lying exactly on an edge or a vertex of any ring is considered to be inside.

use crate::segment::Segment;
use crate::Point;

/// Even-odd containment test over a set of rings.
pub(crate) fn rings_contain<'a>(
    rings: impl IntoIterator<Item = &'a [Point]>,
    point: &Point,
) -> bool {
    let mut inside = false;
    for ring in rings {
        let mut crossings = 0usize;
        for edge in ring_edges(ring) {
            if edge.contains_point(point) {
                return true;
            }

            if edge.crosses_ray(point) {
                crossings += 1;
            }
        }

        if crossings % 2 == 1 {
            inside = !inside;
        }
    }

    inside
}

/// Returns true if the point equals one of the vertices of the open polyline or lies on one of its segments.
pub(crate) fn polyline_contains(points: &[Point], point: &Point) -> bool {
    points.iter().any(|p| p == point)
        || points
            .windows(2)
            .any(|pair| Segment(&pair[0], &pair[1]).contains_point(point))
}

fn ring_edges(ring: &[Point]) -> impl Iterator<Item = Segment<'_, Point>> {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| Segment(a, b))
}
