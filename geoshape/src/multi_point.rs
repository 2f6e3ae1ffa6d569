use crate::cartesian::Rect;
use crate::codec::json::write_object;
use crate::codec::points::{points_from_positions, scan_points, write_json_points, write_points};
use crate::codec::wkt::{strip_tag, unwrap_parens, Tagged};
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{transform_points, visit_points, Shape, Transformer, Visitor};
use crate::Point;

/// A set of points.
///
/// The points are stored and compared in order, but they do not form segments: a multi-point contains only the points
/// that are equal to one of its members.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    /// Creates a new multi-point.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Members of the multi-point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the multi-point returning its members.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Shape for MultiPoint {
    fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
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

impl ToWkt for MultiPoint {
    fn write_wkt(&self, out: &mut String) {
        if self.points.is_empty() {
            out.push_str("MULTIPOINT EMPTY");
        } else {
            write_points(out, &self.points, "MULTIPOINT(", ")");
        }
    }
}

impl FromWkt for MultiPoint {
    /// Accepts both `MULTIPOINT(x y, ...)` and `MULTIPOINT((x y), ...)`.
    fn from_wkt_with(input: &str, _options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        match strip_tag(input, GeometryType::MultiPoint)? {
            Tagged::Empty => Ok(Self::default()),
            Tagged::Body(body) => Ok(Self::new(scan_points(unwrap_parens(
                body,
                "MultiPoint",
            )?)?)),
        }
    }
}

impl ToGeoJson for MultiPoint {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::MultiPoint, "coordinates", |out| {
            write_json_points(out, &self.points)
        })
    }
}

impl FromGeoJson for MultiPoint {
    fn from_envelope(
        mut envelope: Envelope,
        _options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::MultiPoint)?;
        let positions: Vec<Vec<f64>> = envelope.take_coordinates(GeometryType::MultiPoint)?;
        Ok(Self::new(points_from_positions(&positions)?))
    }
}

impl std::fmt::Display for MultiPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::Line;

    fn multi_point() -> MultiPoint {
        MultiPoint::new(vec![Point::new(1.2, 3.4), Point::new(5.6, 7.8)])
    }

    #[test]
    fn wkt() {
        let mp = multi_point();
        assert_eq!(mp.to_wkt(), "MULTIPOINT(1.2 3.4, 5.6 7.8)");
        assert_eq!(MultiPoint::from_wkt(&mp.to_wkt()).ok(), Some(mp.clone()));
        assert_eq!(
            MultiPoint::from_wkt("MULTIPOINT((1.2 3.4), (5.6 7.8))").ok(),
            Some(mp)
        );

        assert_eq!(MultiPoint::default().to_wkt(), "MULTIPOINT EMPTY");
        assert_eq!(
            MultiPoint::from_wkt("MULTIPOINT EMPTY").ok(),
            Some(MultiPoint::default())
        );
        assert_matches!(
            MultiPoint::from_wkt("MULTIPOINT(1.2 3.4 5.6)"),
            Err(GeoShapeError::Malformed { .. })
        );
    }

    #[test]
    fn geojson() {
        let mp = multi_point();
        let json = mp.to_geojson().expect("finite");
        assert_eq!(json, r#"{"type":"MultiPoint","coordinates":[[1.2,3.4],[5.6,7.8]]}"#);
        assert_eq!(MultiPoint::from_geojson(&json).ok(), Some(mp));
        assert_eq!(
            MultiPoint::default().to_geojson().ok().as_deref(),
            Some(r#"{"type":"MultiPoint","coordinates":[]}"#)
        );
        assert_matches!(
            MultiPoint::from_geojson(r#"{"type":"LineString","coordinates":[[1.2,3.4]]}"#),
            Err(GeoShapeError::TypeMismatch { expected: GeometryType::MultiPoint, .. })
        );
    }

    #[test]
    fn contains_members_only() {
        let mp = MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
        assert!(mp.contains(&Point::new(0.0, 0.0)));
        assert!(mp.contains(&Point::new(2.0, 2.0)));
        assert!(!mp.contains(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn not_equal_to_line() {
        let points = vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)];
        let mp = crate::Geometry::from(MultiPoint::new(points.clone()));
        let line = crate::Geometry::from(Line::new(points));
        assert_ne!(mp, line);
    }

    #[test]
    fn collect() {
        let mp: MultiPoint = (0..3).map(|i| Point::new(i as f64, 0.0)).collect();
        assert_eq!(mp.points().len(), 3);
        assert_eq!(mp.bounding_rect(), Some(Rect::new(0.0, 0.0, 2.0, 0.0)));
    }
}
