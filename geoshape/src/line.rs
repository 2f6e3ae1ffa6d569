use crate::cartesian::Rect;
use crate::codec::json::write_object;
use crate::codec::points::{points_from_positions, scan_points, write_json_points, write_points};
use crate::codec::wkt::{strip_tag, unwrap_parens, Tagged};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::contains::polyline_contains;
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::segment::Segment;
use crate::shape::{transform_points, visit_points, Shape, Transformer, Visitor};
use crate::Point;

/// Open polyline: a sequence of points connected by straight segments.
///
/// A line contains a point only if the point lies exactly on one of its segments:
///
/// ```
/// use geoshape::{Line, Point, Shape};
///
/// let line = Line::new(vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
/// assert!(line.contains(&Point::new(1.0, 1.0)));
/// assert!(!line.contains(&Point::new(1.0, 0.0)));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Line {
    points: Vec<Point>,
}

impl Line {
    /// Creates a new line.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the line.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the line returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns true if the line has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over segments of the line.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_, Point>> {
        self.points.windows(2).map(|pair| Segment(&pair[0], &pair[1]))
    }
}

impl From<Vec<Point>> for Line {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl Shape for Line {
    fn contains(&self, point: &Point) -> bool {
        polyline_contains(&self.points, point)
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Rect::from_points(self.points.iter())
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        transform_points(&mut self.points, transformer);
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        visit_points(&self.points, visitor);
    }
}

impl ToWkt for Line {
    fn write_wkt(&self, out: &mut String) {
        if self.points.is_empty() {
            out.push_str("LINESTRING EMPTY");
        } else {
            write_points(out, &self.points, "LINESTRING(", ")");
        }
    }
}

impl FromWkt for Line {
    fn from_wkt_with(input: &str, _options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        match strip_tag(input, GeometryType::LineString)? {
            Tagged::Empty => Ok(Self::default()),
            Tagged::Body(body) => Ok(Self::new(scan_points(unwrap_parens(
                body,
                "LineString",
            )?)?)),
        }
    }
}

impl ToGeoJson for Line {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::LineString, "coordinates", |out| {
            write_json_points(out, &self.points)
        })
    }
}

impl FromGeoJson for Line {
    fn from_envelope(
        mut envelope: Envelope,
        _options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::LineString)?;
        let positions: Vec<Vec<f64>> = envelope.take_coordinates(GeometryType::LineString)?;
        Ok(Self::new(points_from_positions(&positions)?))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
