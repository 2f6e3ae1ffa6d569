use crate::cartesian::Rect;
use crate::codec::json::write_object;
use crate::codec::points::{points_from_positions, write_json_list, write_json_points, write_points};
use crate::codec::wkt::{scan_point_lists, strip_tag, Tagged};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::contains::rings_contain;
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{transform_points, visit_points, Shape, Transformer, Visitor};
use crate::Point;

/// Polygon made of one or more rings.
///
/// The first ring is usually the outer boundary and the rest are holes, but containment does not rely on that: the
/// even-odd rule is applied to all rings together, so any ring lying inside another one cuts a hole. Rings are
/// implicitly closed, the last point does not have to repeat the first one.
///
/// ```
/// use geoshape::{Point, Polygon, Shape};
///
/// let square = Polygon::new(vec![vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
///     Point::new(0.0, 0.0),
/// ]]);
///
/// assert!(square.contains(&Point::new(1.0, 1.0)));
/// assert!(!square.contains(&Point::new(4.0, 1.0)));
/// // Points on the boundary are inside.
/// assert!(square.contains(&Point::new(2.0, 1.0)));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<Vec<Point>>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(rings: Vec<Vec<Point>>) -> Self {
        Self { rings }
    }

    /// Rings of the polygon.
    pub fn rings(&self) -> &[Vec<Point>] {
        &self.rings
    }

    /// Consumes the polygon returning its rings.
    pub fn into_rings(self) -> Vec<Vec<Point>> {
        self.rings
    }

    /// First ring of the polygon.
    pub fn exterior(&self) -> Option<&[Point]> {
        self.rings.first().map(Vec::as_slice)
    }

    /// All rings except the first one.
    pub fn interiors(&self) -> &[Vec<Point>] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// Returns true if the polygon has no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub(crate) fn write_rings_wkt(&self, out: &mut String, separator: &str) {
        for (i, ring) in self.rings.iter().enumerate() {
            if i != 0 {
                out.push_str(separator);
            }
            write_points(out, ring, "(", ")");
        }
    }

    pub(crate) fn write_rings_json(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_json_list(out, &self.rings, |out, ring| write_json_points(out, ring))
    }

    pub(crate) fn from_positions(
        rings: &[Vec<Vec<f64>>],
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        let rings = rings
            .iter()
            .map(|ring| points_from_positions(ring))
            .collect::<Result<Vec<_>, _>>()?;
        Self::validated(rings, options)
    }

    pub(crate) fn validated(
        rings: Vec<Vec<Point>>,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        options.ring_validation.check(&rings)?;
        Ok(Self::new(rings))
    }
}

impl From<Vec<Vec<Point>>> for Polygon {
    fn from(rings: Vec<Vec<Point>>) -> Self {
        Self::new(rings)
    }
}

impl Shape for Polygon {
    fn contains(&self, point: &Point) -> bool {
        self.bounding_rect().is_some_and(|rect| rect.contains(point))
            && rings_contain(self.rings.iter().map(Vec::as_slice), point)
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Rect::from_points(self.rings.iter().flatten())
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        for ring in &mut self.rings {
            transform_points(ring, transformer);
        }
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        for ring in &self.rings {
            visit_points(ring, visitor);
        }
    }
}

impl ToWkt for Polygon {
    fn write_wkt(&self, out: &mut String) {
        if self.rings.is_empty() {
            out.push_str("POLYGON EMPTY");
        } else {
            out.push_str("POLYGON(");
            self.write_rings_wkt(out, ", ");
            out.push(')');
        }
    }
}

impl FromWkt for Polygon {
    fn from_wkt_with(input: &str, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        match strip_tag(input, GeometryType::Polygon)? {
            Tagged::Empty => Ok(Self::default()),
            Tagged::Body(body) => Self::validated(scan_point_lists(body, "Polygon")?, options),
        }
    }
}

impl ToGeoJson for Polygon {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::Polygon, "coordinates", |out| {
            self.write_rings_json(out)
        })
    }
}

impl FromGeoJson for Polygon {
    fn from_envelope(
        mut envelope: Envelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::Polygon)?;
        let rings: Vec<Vec<Vec<f64>>> = envelope.take_coordinates(GeometryType::Polygon)?;
        Self::from_positions(&rings, options)
    }
}

impl std::fmt::Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::options::RingValidation;

    fn square(x0: f64, y0: f64, side: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x0, y0 + side),
            Point::new(x0 + side, y0 + side),
            Point::new(x0 + side, y0),
            Point::new(x0, y0),
        ]
    }

    #[test]
    fn wkt() {
        let polygon = Polygon::new(vec![square(-4.0, -4.0, 8.0), square(0.0, 0.0, 1.0)]);
        let wkt = polygon.to_wkt();
        assert_eq!(
            wkt,
            "POLYGON((-4 -4, -4 4, 4 4, 4 -4, -4 -4), (0 0, 0 1, 1 1, 1 0, 0 0))"
        );
        assert_eq!(Polygon::from_wkt(&wkt).ok(), Some(polygon.clone()));
        assert_eq!(
            Polygon::from_wkt("POLYGON((-4 -4,-4 4,4 4,4 -4,-4 -4),(0 0,0 1,1 1,1 0,0 0))").ok(),
            Some(polygon)
        );

        assert_eq!(Polygon::default().to_wkt(), "POLYGON EMPTY");
        assert_eq!(Polygon::from_wkt("POLYGON EMPTY").ok(), Some(Polygon::default()));
    }

    #[test]
    fn wkt_fails() {
        assert_matches!(
            Polygon::from_wkt("POLYGON((1.2, 3.4, 5.6, 7.8))"),
            Err(GeoShapeError::Malformed { .. })
        );
        assert_matches!(
            Polygon::from_wkt("POLYGON(1.2 3.4, 5.6 7.8)"),
            Err(GeoShapeError::Malformed { .. })
        );
        assert_matches!(
            Polygon::from_wkt("POLYGON((1.2 3.4, 5.6 7.8)"),
            Err(GeoShapeError::Malformed { .. })
        );
        assert_matches!(
            Polygon::from_wkt("POLYGON((1.2 3.4, 5.6 7.8)),((1 2, a 2))"),
            Err(GeoShapeError::Malformed { .. })
        );
    }

    #[test]
    fn geojson() {
        let polygon = Polygon::new(vec![vec![
            Point::new(1.2, 3.4),
            Point::new(5.6, 7.8),
            Point::new(2.0, 6.0),
        ]]);
        let json = polygon.to_geojson().expect("finite");
        assert_eq!(
            json,
            r#"{"type":"Polygon","coordinates":[[[1.2,3.4],[5.6,7.8],[2,6]]]}"#
        );
        assert_eq!(Polygon::from_geojson(&json).ok(), Some(polygon));
        assert_eq!(
            Polygon::default().to_geojson().ok().as_deref(),
            Some(r#"{"type":"Polygon","coordinates":[]}"#)
        );
        assert_matches!(
            Polygon::from_geojson(r#"{"type":"Polygon","coordinates":[[1.2,3.4]]}"#),
            Err(GeoShapeError::Json(_))
        );
    }

    #[test]
    fn ring_validation() {
        let strict = DecodeOptions::default().with_ring_validation(RingValidation::Strict);

        assert!(Polygon::from_wkt("POLYGON((0 0, 1 1))").is_ok());
        assert_matches!(
            Polygon::from_wkt_with("POLYGON((0 0, 1 1))", &strict),
            Err(GeoShapeError::InvalidRing { ring: 0, points: 2 })
        );

        let json = r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,0]],[[0,0]]]}"#;
        assert!(Polygon::from_geojson(json).is_ok());
        assert_matches!(
            Polygon::from_geojson_with(json, &strict),
            Err(GeoShapeError::InvalidRing { ring: 1, points: 1 })
        );
        assert_matches!(
            Polygon::from_geojson(r#"{"type":"Polygon","coordinates":[[]]}"#),
            Err(GeoShapeError::InvalidRing { ring: 0, points: 0 })
        );
    }

    #[test]
    fn contains() {
        let square = Polygon::new(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 0.0),
        ]]);

        assert!(square.contains(&Point::new(1.0, 1.0)));
        assert!(!square.contains(&Point::new(4.0, 1.0)));
        assert!(square.contains(&Point::new(0.0, 0.0)));
        assert!(square.contains(&Point::new(1.0, 2.0)));
        assert!(!square.contains(&Point::new(1.0, 2.0000001)));
    }

    #[test]
    fn contains_with_hole() {
        let polygon = Polygon::new(vec![square(-4.0, -4.0, 8.0), square(0.0, 0.0, 1.0)]);

        assert!(polygon.contains(&Point::new(-2.0, -2.0)));
        assert!(!polygon.contains(&Point::new(0.5, 0.5)));
        assert!(polygon.contains(&Point::new(0.0, 0.5)));
        assert!(!polygon.contains(&Point::new(5.0, 0.5)));
    }

    #[test]
    fn contains_outside_bounding_rect() {
        let polygon = Polygon::new(vec![square(0.0, 0.0, 2.0)]);

        assert!(polygon.contains(&Point::new(0.0, 0.0)));
        assert!(polygon.contains(&Point::new(2.0, 2.0)));
        assert!(!polygon.contains(&Point::new(-1.0, 1.0)));
        assert!(!polygon.contains(&Point::new(1.0, 2.5)));
        assert!(!polygon.contains(&Point::new(f64::NAN, 1.0)));
        assert!(!Polygon::default().contains(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn contains_concave() {
        let polygon = Polygon::new(vec![vec![
            Point::new(-113.14448537305, 33.4192544895836),
            Point::new(-113.140408415347, 33.4192634445438),
            Point::new(-113.140419144183, 33.4209917345629),
            Point::new(-113.142, 33.4201),
            Point::new(-113.144506830722, 33.4210096441239),
            Point::new(-113.14448537305, 33.4192544895836),
        ]]);

        assert!(polygon.contains(&Point::new(-113.1425, 33.4195)));
        assert!(!polygon.contains(&Point::new(-113.142, 33.4207)));
        assert!(!polygon.contains(&Point::new(-113.139, 33.4195)));
    }

    #[test]
    fn accessors() {
        let polygon = Polygon::new(vec![square(-4.0, -4.0, 8.0), square(0.0, 0.0, 1.0)]);
        assert_eq!(polygon.exterior().map(<[Point]>::len), Some(5));
        assert_eq!(polygon.interiors().len(), 1);
        assert_eq!(polygon.bounding_rect(), Some(Rect::new(-4.0, -4.0, 4.0, 4.0)));

        assert_eq!(Polygon::default().exterior(), None);
        assert!(Polygon::default().interiors().is_empty());
        assert_eq!(Polygon::default().bounding_rect(), None);
    }

    #[test]
    fn transform_preserves_structure() {
        let mut polygon = Polygon::new(vec![square(0.0, 0.0, 2.0), square(0.5, 0.5, 1.0)]);
        polygon.transform(&mut |p: Point| Point::new(p.x() * 2.0, p.y() * 2.0));
        assert_eq!(
            polygon,
            Polygon::new(vec![square(0.0, 0.0, 4.0), square(1.0, 1.0, 2.0)])
        );

        let mut visited = vec![];
        polygon.visit(&mut |p: &Point| visited.push(*p));
        assert_eq!(visited.len(), 10);
        assert_eq!(visited[5], Point::new(1.0, 1.0));
    }
}
