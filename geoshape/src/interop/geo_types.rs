use geo_types::{Coord, LineString};

use crate::error::GeoShapeError;
use crate::{
    Geometry, GeometryCollection, Line, MultiLine, MultiPoint, MultiPolygon, Point, Polygon,
};

impl From<Coord<f64>> for Point {
    fn from(value: Coord<f64>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        value.0.into()
    }
}

impl From<Point> for Coord<f64> {
    fn from(value: Point) -> Self {
        Coord {
            x: value.x(),
            y: value.y(),
        }
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(value: Point) -> Self {
        geo_types::Point(value.into())
    }
}

fn to_line_string(points: &[Point]) -> LineString<f64> {
    LineString(points.iter().map(|&p| p.into()).collect())
}

/// Points of a ring without the closing point, rings are implicitly closed.
fn ring_points(ring: &LineString<f64>) -> Vec<Point> {
    let coords = if ring.is_closed() {
        &ring.0[..ring.0.len().max(1) - 1]
    } else {
        &ring.0[..]
    };
    coords.iter().map(|&c| c.into()).collect()
}

impl From<&Line> for LineString<f64> {
    fn from(value: &Line) -> Self {
        to_line_string(value.points())
    }
}

impl From<LineString<f64>> for Line {
    fn from(value: LineString<f64>) -> Self {
        Line::new(value.0.into_iter().map(Point::from).collect())
    }
}

impl From<&MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(value: &MultiPoint) -> Self {
        geo_types::MultiPoint(value.points().iter().map(|&p| p.into()).collect())
    }
}

impl From<geo_types::MultiPoint<f64>> for MultiPoint {
    fn from(value: geo_types::MultiPoint<f64>) -> Self {
        value.0.into_iter().map(Point::from).collect()
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        let exterior = value.exterior().map(to_line_string).unwrap_or_else(|| LineString(vec![]));
        let interiors = value.interiors().iter().map(|ring| to_line_string(ring)).collect();
        geo_types::Polygon::new(exterior, interiors)
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = value.into_inner();
        if exterior.0.is_empty() && interiors.is_empty() {
            return Polygon::default();
        }

        Polygon::new(
            std::iter::once(&exterior)
                .chain(&interiors)
                .map(ring_points)
                .collect(),
        )
    }
}

impl From<&MultiLine> for geo_types::MultiLineString<f64> {
    fn from(value: &MultiLine) -> Self {
        geo_types::MultiLineString(value.lines().iter().map(LineString::from).collect())
    }
}

impl From<geo_types::MultiLineString<f64>> for MultiLine {
    fn from(value: geo_types::MultiLineString<f64>) -> Self {
        value.0.into_iter().map(Line::from).collect()
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        geo_types::MultiPolygon(value.polygons().iter().map(geo_types::Polygon::from).collect())
    }
}

impl From<geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(value: geo_types::MultiPolygon<f64>) -> Self {
        value.0.into_iter().map(Polygon::from).collect()
    }
}

/// Circles have no counterpart and fail with [`GeoShapeError::Conversion`]. Features are converted into their
/// geometry, feature collections into a collection of the feature geometries, and bounding box decorations are
/// dropped.
impl TryFrom<&Geometry> for geo_types::Geometry<f64> {
    type Error = GeoShapeError;

    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        Ok(match value {
            Geometry::Point(v) => geo_types::Geometry::Point((*v).into()),
            Geometry::Line(v) => geo_types::Geometry::LineString(v.into()),
            Geometry::MultiPoint(v) => geo_types::Geometry::MultiPoint(v.into()),
            Geometry::Polygon(v) => geo_types::Geometry::Polygon(v.into()),
            Geometry::MultiLine(v) => geo_types::Geometry::MultiLineString(v.into()),
            Geometry::MultiPolygon(v) => geo_types::Geometry::MultiPolygon(v.into()),
            Geometry::Circle(_) => {
                return Err(GeoShapeError::Conversion(
                    "circles cannot be represented by geo-types".to_string(),
                ))
            }
            Geometry::GeometryCollection(v) => {
                geo_types::Geometry::GeometryCollection(collect_geo_types(v.geometries())?)
            }
            Geometry::Feature(v) => v.geometry().try_into()?,
            Geometry::FeatureCollection(v) => geo_types::Geometry::GeometryCollection(
                collect_geo_types(v.features().map(|feature| feature.geometry()))?,
            ),
            Geometry::BoundingBox(v) => v.geometry().try_into()?,
        })
    }
}

fn collect_geo_types<'a>(
    geometries: impl IntoIterator<Item = &'a Geometry>,
) -> Result<geo_types::GeometryCollection<f64>, GeoShapeError> {
    Ok(geo_types::GeometryCollection(
        geometries
            .into_iter()
            .map(geo_types::Geometry::try_from)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

/// Two-point lines become [`Line`]s, rectangles and triangles become [`Polygon`]s.
impl From<geo_types::Geometry<f64>> for Geometry {
    fn from(value: geo_types::Geometry<f64>) -> Self {
        match value {
            geo_types::Geometry::Point(v) => Point::from(v).into(),
            geo_types::Geometry::Line(v) => {
                Line::new(vec![v.start.into(), v.end.into()]).into()
            }
            geo_types::Geometry::LineString(v) => Line::from(v).into(),
            geo_types::Geometry::Polygon(v) => Polygon::from(v).into(),
            geo_types::Geometry::MultiPoint(v) => MultiPoint::from(v).into(),
            geo_types::Geometry::MultiLineString(v) => MultiLine::from(v).into(),
            geo_types::Geometry::MultiPolygon(v) => MultiPolygon::from(v).into(),
            geo_types::Geometry::GeometryCollection(v) => {
                v.0.into_iter().map(Geometry::from).collect::<GeometryCollection>().into()
            }
            geo_types::Geometry::Rect(v) => Polygon::from(v.to_polygon()).into(),
            geo_types::Geometry::Triangle(v) => Polygon::from(v.to_polygon()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geo_types::{coord, line_string, point, polygon, Rect};

    use super::*;
    use crate::{BoundingBox, Circle, Feature, FeatureCollection};

    fn square() -> Polygon {
        Polygon::new(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ]])
    }

    #[test]
    fn point() {
        let converted: geo_types::Point<f64> = Point::new(1.0, 2.0).into();
        assert_eq!(converted, point!(x: 1.0, y: 2.0));
        assert_eq!(Point::from(converted), Point::new(1.0, 2.0));
        assert_eq!(Point::from(coord! {x: 3.0, y: 4.0}), Point::new(3.0, 4.0));
    }

    #[test]
    fn line() {
        let line = Line::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let converted = LineString::from(&line);
        assert_eq!(converted, line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]);
        assert_eq!(Line::from(converted), line);
    }

    #[test]
    fn polygon_rings_are_closed() {
        let converted = geo_types::Polygon::from(&square());
        assert_eq!(
            converted,
            polygon![
                (x: 0.0, y: 0.0),
                (x: 2.0, y: 0.0),
                (x: 2.0, y: 2.0),
                (x: 0.0, y: 2.0),
                (x: 0.0, y: 0.0),
            ]
        );
        assert_eq!(Polygon::from(converted), square());
        assert_eq!(
            Polygon::from(geo_types::Polygon::from(&Polygon::default())),
            Polygon::default()
        );
    }

    #[test]
    fn geometry() {
        let geometries: Vec<Geometry> = vec![
            Point::new(1.0, 2.0).into(),
            square().into(),
            MultiPoint::new(vec![Point::new(1.0, 2.0)]).into(),
            MultiLine::new(vec![Line::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
            ])])
            .into(),
            MultiPolygon::new(vec![square()]).into(),
            GeometryCollection::new(vec![Point::new(1.0, 2.0).into(), square().into()]).into(),
        ];

        for geometry in geometries {
            let converted = geo_types::Geometry::try_from(&geometry).expect("convertible");
            assert_eq!(Geometry::from(converted), geometry);
        }
    }

    #[test]
    fn decorations_are_dropped() {
        let feature = Geometry::from(Feature::new(Point::new(1.0, 2.0)));
        assert_eq!(
            geo_types::Geometry::try_from(&feature).ok(),
            Some(geo_types::Geometry::Point(point!(x: 1.0, y: 2.0)))
        );

        let decorated = Geometry::from(BoundingBox::new(vec![1.0, 2.0], Point::new(1.0, 2.0)));
        assert_eq!(
            geo_types::Geometry::try_from(&decorated).ok(),
            Some(geo_types::Geometry::Point(point!(x: 1.0, y: 2.0)))
        );

        let collection =
            Geometry::from(FeatureCollection::new(vec![Feature::new(Point::new(1.0, 2.0))]));
        assert_eq!(
            geo_types::Geometry::try_from(&collection).ok(),
            Some(geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection(vec![
                geo_types::Geometry::Point(point!(x: 1.0, y: 2.0))
            ])))
        );
    }

    #[test]
    fn circle_fails() {
        let circle = Geometry::from(Circle::new(Point::new(0.0, 0.0), 1.0));
        assert_matches!(
            geo_types::Geometry::try_from(&circle),
            Err(GeoShapeError::Conversion(_))
        );

        let nested = Geometry::from(GeometryCollection::new(vec![circle]));
        assert_matches!(
            geo_types::Geometry::try_from(&nested),
            Err(GeoShapeError::Conversion(_))
        );
    }

    #[test]
    fn other_geo_types() {
        let line = geo_types::Geometry::Line(geo_types::Line::new(
            coord! {x: 0.0, y: 0.0},
            coord! {x: 1.0, y: 1.0},
        ));
        assert_eq!(
            Geometry::from(line),
            Geometry::Line(Line::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]))
        );

        let rect = geo_types::Geometry::Rect(Rect::new(
            coord! {x: 0.0, y: 0.0},
            coord! {x: 2.0, y: 2.0},
        ));
        let converted = Geometry::from(rect);
        assert_matches!(&converted, Geometry::Polygon(polygon) if polygon.rings()[0].len() == 4);
        assert!(crate::Shape::contains(&converted, &Point::new(1.0, 1.0)));
    }
}
