use crate::cartesian::Rect;
use crate::codec::json::{missing_member, write_object};
use crate::codec::points::write_json_list;
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{merged_rect, Shape, Transformer, Visitor};
use crate::{Feature, Geometry, GeometryCollection, Point};

/// Ordered collection of features.
///
/// Members of a decoded collection may carry their own bounding box, so they are stored as geometries that are
/// either a [`Feature`] or a [`BoundingBox`](crate::BoundingBox) wrapping a feature.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureCollection {
    members: Vec<Geometry>,
}

impl FeatureCollection {
    /// Creates a new collection.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            members: features.into_iter().map(Geometry::Feature).collect(),
        }
    }

    /// Creates a collection from members that may be decorated with a bounding box.
    ///
    /// Fails with [`GeoShapeError::TypeMismatch`] if a member is not a feature.
    pub fn from_members(members: Vec<Geometry>) -> Result<Self, GeoShapeError> {
        for (i, member) in members.iter().enumerate() {
            check_member(member).map_err(|err| {
                GeoShapeError::nested(GeometryType::FeatureCollection, Some(i), err)
            })?;
        }

        Ok(Self { members })
    }

    /// Members as they are stored, including bounding box decorations.
    pub fn members(&self) -> &[Geometry] {
        &self.members
    }

    /// Iterates over the features of the collection.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.members.iter().filter_map(|member| match member.undecorated() {
            Geometry::Feature(feature) => Some(feature),
            _ => None,
        })
    }

    /// Appends a feature.
    pub fn push(&mut self, feature: Feature) {
        self.members.push(Geometry::Feature(feature));
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if there are no features.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

fn check_member(member: &Geometry) -> Result<(), GeoShapeError> {
    match member.kind() {
        GeometryType::Feature => Ok(()),
        other => Err(GeoShapeError::TypeMismatch {
            expected: GeometryType::Feature,
            got: other.to_string(),
        }),
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Shape for FeatureCollection {
    fn contains(&self, point: &Point) -> bool {
        !self.members.is_empty() && self.members.iter().all(|member| member.contains(point))
    }

    fn bounding_rect(&self) -> Option<Rect> {
        merged_rect(&self.members)
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        for member in &mut self.members {
            member.transform(transformer);
        }
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        for member in &self.members {
            member.visit(visitor);
        }
    }
}

/// Written as a `GEOMETRYCOLLECTION` of the feature geometries.
impl ToWkt for FeatureCollection {
    fn write_wkt(&self, out: &mut String) {
        GeometryCollection::write_members_wkt(out, self.features().map(Feature::geometry));
    }
}

/// Decodes a `GEOMETRYCOLLECTION` into features without properties.
impl FromWkt for FeatureCollection {
    fn from_wkt_with(input: &str, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        Ok(GeometryCollection::from_wkt_with(input, options)?
            .into_geometries()
            .into_iter()
            .map(Feature::new)
            .collect())
    }
}

impl ToGeoJson for FeatureCollection {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        write_object(out, GeometryType::FeatureCollection, "features", |out| {
            write_json_list(out, &self.members, |out, member| member.write_geojson(out))
        })
    }
}

impl FromGeoJson for FeatureCollection {
    fn from_envelope(
        mut envelope: Envelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        envelope.expect_type(GeometryType::FeatureCollection)?;
        let members = envelope
            .features
            .take()
            .ok_or_else(|| missing_member(GeometryType::FeatureCollection, "features"))?
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                Geometry::from_json_value_with(value, options)
                    .and_then(|member| check_member(&member).map(|_| member))
                    .map_err(|err| {
                        GeoShapeError::nested(GeometryType::FeatureCollection, Some(i), err)
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { members })
    }
}

impl std::fmt::Display for FeatureCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::{Line, Polygon};

    fn collection() -> FeatureCollection {
        FeatureCollection::new(vec![
            Feature::new(Point::new(1.0, 2.0)).with_properties(json!({"name": "a"})),
            Feature::new(Line::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])),
        ])
    }

    #[test]
    fn geojson() {
        let collection = collection();
        let json = collection.to_geojson().expect("finite");
        assert_eq!(
            json,
            r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"name":"a"}},{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]},"properties":null}]}"#
        );

        let decoded = FeatureCollection::from_geojson(&json).expect("valid collection");
        assert_eq!(decoded, collection);
        assert_eq!(decoded.to_geojson().ok(), Some(json));
        assert_eq!(
            decoded.features().next().and_then(|f| f.property("name")),
            Some(&json!("a"))
        );

        assert_eq!(
            FeatureCollection::default().to_geojson().ok().as_deref(),
            Some(r#"{"type":"FeatureCollection","features":[]}"#)
        );
    }

    #[test]
    fn decorated_members() {
        let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":null,"bbox":[1,2,1,2]}]}"#;
        let collection = FeatureCollection::from_geojson(json).expect("valid collection");

        assert_eq!(collection.len(), 1);
        assert_matches!(collection.members()[0], Geometry::BoundingBox(_));
        assert_eq!(
            collection.features().collect::<Vec<_>>(),
            vec![&Feature::new(Point::new(1.0, 2.0))]
        );
        assert_eq!(collection.to_geojson().ok().as_deref(), Some(json));
    }

    #[test]
    fn geojson_fails() {
        assert_matches!(
            FeatureCollection::from_geojson(
                r#"{"type":"FeatureCollection","features":[{"type":"Point","coordinates":[1,2]}]}"#
            ),
            Err(GeoShapeError::Nested {
                kind: GeometryType::FeatureCollection,
                index: Some(0),
                source,
            }) if matches!(
                *source,
                GeoShapeError::TypeMismatch { expected: GeometryType::Feature, .. }
            )
        );
        assert_matches!(
            FeatureCollection::from_geojson(r#"{"type":"FeatureCollection"}"#),
            Err(GeoShapeError::Malformed { .. })
        );
        assert_matches!(
            FeatureCollection::from_members(vec![Point::new(1.0, 2.0).into()]),
            Err(GeoShapeError::Nested { index: Some(0), .. })
        );
    }

    #[test]
    fn wkt() {
        let collection = collection();
        assert_eq!(
            collection.to_wkt(),
            "GEOMETRYCOLLECTION(POINT(1 2), LINESTRING(0 0, 1 1))"
        );
        assert_eq!(
            FeatureCollection::from_wkt(&collection.to_wkt()).ok(),
            Some(collection)
        );
        assert_eq!(
            FeatureCollection::default().to_wkt(),
            "GEOMETRYCOLLECTION EMPTY"
        );
    }

    #[test]
    fn shape() {
        let mut collection = FeatureCollection::new(vec![
            Feature::new(Polygon::new(vec![vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ]])),
            Feature::new(Point::new(1.0, 1.0)),
        ]);
        assert!(collection.contains(&Point::new(1.0, 1.0)));
        assert!(!collection.contains(&Point::new(0.5, 0.5)));
        assert!(!collection.contains(&Point::new(3.0, 3.0)));
        assert!(!FeatureCollection::default().contains(&Point::new(0.0, 0.0)));
        assert_eq!(collection.bounding_rect(), Some(Rect::new(0.0, 0.0, 2.0, 2.0)));

        collection.transform(&mut |p: Point| Point::new(-p.x(), p.y()));
        assert!(collection.contains(&Point::new(-1.0, 1.0)));
        assert!(!collection.contains(&Point::new(1.0, 1.0)));

        let mut count = 0;
        collection.visit(&mut |_: &Point| count += 1);
        assert_eq!(count, 5);
    }
}
