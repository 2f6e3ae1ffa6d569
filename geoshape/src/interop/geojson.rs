use geojson::{Bbox, JsonObject, PolygonType, Position};
use serde_json::Value;

use crate::codec::points::{point_from_position, points_from_positions};
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::{
    Feature, FeatureCollection, Geometry, GeometryCollection, Line, MultiLine, MultiPoint,
    MultiPolygon, Point, Polygon,
};

fn position(point: &Point) -> Position {
    vec![point.x(), point.y()]
}

fn positions(points: &[Point]) -> Vec<Position> {
    points.iter().map(position).collect()
}

fn polygon_type(polygon: &Polygon) -> PolygonType {
    polygon.rings().iter().map(|ring| positions(ring)).collect()
}

fn polygon_from(rings: &PolygonType) -> Result<Polygon, GeoShapeError> {
    Ok(Polygon::new(
        rings
            .iter()
            .map(|ring| points_from_positions(ring))
            .collect::<Result<_, _>>()?,
    ))
}

fn with_bbox(geometry: Geometry, bbox: Option<Bbox>) -> Geometry {
    match bbox {
        Some(bbox) if !bbox.is_empty() => geometry.with_bbox(bbox),
        _ => geometry,
    }
}

/// Converts the geometry value. A non-empty `bbox` is kept as a [`Geometry::BoundingBox`] decoration.
impl TryFrom<geojson::Geometry> for Geometry {
    type Error = GeoShapeError;

    fn try_from(value: geojson::Geometry) -> Result<Self, Self::Error> {
        let geometry: Geometry = match value.value {
            geojson::Value::Point(p) => point_from_position(&p)?.into(),
            geojson::Value::MultiPoint(points) => {
                MultiPoint::new(points_from_positions(&points)?).into()
            }
            geojson::Value::LineString(points) => Line::new(points_from_positions(&points)?).into(),
            geojson::Value::MultiLineString(lines) => lines
                .iter()
                .map(|line| points_from_positions(line).map(Line::new))
                .collect::<Result<MultiLine, _>>()?
                .into(),
            geojson::Value::Polygon(rings) => polygon_from(&rings)?.into(),
            geojson::Value::MultiPolygon(polygons) => polygons
                .iter()
                .map(polygon_from)
                .collect::<Result<MultiPolygon, _>>()?
                .into(),
            geojson::Value::GeometryCollection(geometries) => geometries
                .into_iter()
                .enumerate()
                .map(|(i, geometry)| {
                    Geometry::try_from(geometry).map_err(|err| {
                        GeoShapeError::nested(GeometryType::GeometryCollection, Some(i), err)
                    })
                })
                .collect::<Result<GeometryCollection, _>>()?
                .into(),
        };

        Ok(with_bbox(geometry, value.bbox))
    }
}

/// Circles, features and feature collections are not geometry values and fail with
/// [`GeoShapeError::Conversion`].
impl TryFrom<&Geometry> for geojson::Geometry {
    type Error = GeoShapeError;

    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        let value = match value {
            Geometry::Point(p) => geojson::Value::Point(position(p)),
            Geometry::Line(line) => geojson::Value::LineString(positions(line.points())),
            Geometry::MultiPoint(points) => geojson::Value::MultiPoint(positions(points.points())),
            Geometry::Polygon(polygon) => geojson::Value::Polygon(polygon_type(polygon)),
            Geometry::MultiLine(lines) => geojson::Value::MultiLineString(
                lines.lines().iter().map(|line| positions(line.points())).collect(),
            ),
            Geometry::MultiPolygon(polygons) => geojson::Value::MultiPolygon(
                polygons.polygons().iter().map(polygon_type).collect(),
            ),
            Geometry::GeometryCollection(collection) => geojson::Value::GeometryCollection(
                collection
                    .geometries()
                    .iter()
                    .map(geojson::Geometry::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Geometry::BoundingBox(decorated) => {
                let mut geometry = geojson::Geometry::try_from(decorated.geometry())?;
                geometry.bbox = Some(decorated.bbox().to_vec());
                return Ok(geometry);
            }
            Geometry::Circle(_) | Geometry::Feature(_) | Geometry::FeatureCollection(_) => {
                return Err(GeoShapeError::Conversion(format!(
                    "{} is not a GeoJSON geometry",
                    value.kind()
                )))
            }
        };

        Ok(geojson::Geometry::new(value))
    }
}

/// The feature must have a geometry. Its `id` and foreign members are dropped.
impl TryFrom<geojson::Feature> for Feature {
    type Error = GeoShapeError;

    fn try_from(value: geojson::Feature) -> Result<Self, Self::Error> {
        let geometry = value
            .geometry
            .ok_or_else(|| GeoShapeError::Conversion("feature without geometry".to_string()))?;
        let feature = Feature::new(Geometry::try_from(geometry)?);

        Ok(match value.properties {
            Some(properties) => feature.with_properties(Value::Object(properties)),
            None => feature,
        })
    }
}

/// Properties must be a JSON object or `null`.
impl TryFrom<&Feature> for geojson::Feature {
    type Error = GeoShapeError;

    fn try_from(value: &Feature) -> Result<Self, Self::Error> {
        let properties: Option<JsonObject> = match value.properties() {
            None | Some(Value::Null) => None,
            Some(Value::Object(properties)) => Some(properties.clone()),
            Some(other) => {
                return Err(GeoShapeError::Conversion(format!(
                    "feature properties must be an object, got {other}"
                )))
            }
        };

        Ok(geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::try_from(value.geometry())?),
            id: None,
            properties,
            foreign_members: None,
        })
    }
}

/// Bounding boxes of the features are kept as member decorations.
impl TryFrom<geojson::FeatureCollection> for FeatureCollection {
    type Error = GeoShapeError;

    fn try_from(value: geojson::FeatureCollection) -> Result<Self, Self::Error> {
        let members = value
            .features
            .into_iter()
            .enumerate()
            .map(|(i, mut feature)| {
                let bbox = feature.bbox.take();
                Feature::try_from(feature)
                    .map(|feature| with_bbox(feature.into(), bbox))
                    .map_err(|err| {
                        GeoShapeError::nested(GeometryType::FeatureCollection, Some(i), err)
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        FeatureCollection::from_members(members)
    }
}

impl TryFrom<&FeatureCollection> for geojson::FeatureCollection {
    type Error = GeoShapeError;

    fn try_from(value: &FeatureCollection) -> Result<Self, Self::Error> {
        let features = value
            .members()
            .iter()
            .filter_map(|member| match member {
                Geometry::Feature(feature) => Some((feature, None)),
                Geometry::BoundingBox(decorated) => match decorated.geometry() {
                    Geometry::Feature(feature) => Some((feature, Some(decorated.bbox().to_vec()))),
                    _ => None,
                },
                _ => None,
            })
            .map(|(feature, bbox)| {
                let mut converted = geojson::Feature::try_from(feature)?;
                converted.bbox = bbox;
                Ok(converted)
            })
            .collect::<Result<_, GeoShapeError>>()?;

        Ok(geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::codec::{FromGeoJson, ToGeoJson};
    use crate::Circle;

    fn square() -> Polygon {
        Polygon::new(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ]])
    }

    #[test]
    fn geometry() {
        let geometries: Vec<Geometry> = vec![
            Point::new(1.0, 2.0).into(),
            Line::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).into(),
            MultiPoint::new(vec![Point::new(1.0, 2.0)]).into(),
            square().into(),
            MultiLine::new(vec![Line::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
            ])])
            .into(),
            MultiPolygon::new(vec![square()]).into(),
            GeometryCollection::new(vec![Point::new(1.0, 2.0).into(), square().into()]).into(),
            Geometry::from(square()).with_computed_bbox(),
        ];

        for geometry in geometries {
            let converted = geojson::Geometry::try_from(&geometry).expect("convertible");
            assert_eq!(Geometry::try_from(converted).ok(), Some(geometry));
        }
    }

    #[test]
    fn not_geometries() {
        let circle = Geometry::from(Circle::new(Point::new(0.0, 0.0), 1.0));
        assert_matches!(geojson::Geometry::try_from(&circle), Err(GeoShapeError::Conversion(_)));

        let feature = Geometry::from(Feature::new(Point::new(0.0, 0.0)));
        assert_matches!(geojson::Geometry::try_from(&feature), Err(GeoShapeError::Conversion(_)));
    }

    #[test]
    fn feature() {
        let feature = Feature::new(Point::new(1.0, 2.0)).with_properties(json!({"name": "a"}));
        let converted = geojson::Feature::try_from(&feature).expect("convertible");
        assert_eq!(converted.property("name"), Some(&json!("a")));

        let back = Feature::try_from(converted).expect("convertible");
        assert_eq!(back, feature);
        assert_eq!(back.properties(), feature.properties());

        let scalar = Feature::new(Point::new(1.0, 2.0)).with_properties(json!(5));
        assert_matches!(geojson::Feature::try_from(&scalar), Err(GeoShapeError::Conversion(_)));

        let without_geometry = geojson::Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };
        assert_matches!(Feature::try_from(without_geometry), Err(GeoShapeError::Conversion(_)));
    }

    #[test]
    fn feature_collection() {
        let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":null,"bbox":[1,2,1,2]},{"type":"Feature","geometry":{"type":"Point","coordinates":[3,4]},"properties":{"a":1}}]}"#;
        let ours = FeatureCollection::from_geojson(json).expect("valid collection");

        let converted = geojson::FeatureCollection::try_from(&ours).expect("convertible");
        assert_eq!(converted.features.len(), 2);
        assert_eq!(converted.features[0].bbox, Some(vec![1.0, 2.0, 1.0, 2.0]));

        let back = FeatureCollection::try_from(converted).expect("convertible");
        assert_eq!(back, ours);
        assert_eq!(back.to_geojson().ok().as_deref(), Some(json));
    }
}
