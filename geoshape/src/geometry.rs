use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::cartesian::Rect;
use crate::codec::{Envelope, FromGeoJson, FromWkt, ToGeoJson, ToWkt};
use crate::error::GeoShapeError;
use crate::geometry_type::GeometryType;
use crate::options::DecodeOptions;
use crate::shape::{Shape, Transformer, Visitor};
use crate::{
    BoundingBox, Circle, Feature, FeatureCollection, GeometryCollection, Line, MultiLine,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// Any geometry supported by the crate.
///
/// Use this type to decode input of unknown type: both [`FromWkt`] and [`FromGeoJson`] dispatch on the type tag of
/// the input. Geometries of different variants are never equal.
///
/// ```
/// use geoshape::{FromWkt, Geometry, GeometryType, Point};
///
/// let geometry = Geometry::from_wkt("POINT(1 2)").unwrap();
/// assert_eq!(geometry.kind(), GeometryType::Point);
/// assert_eq!(geometry, Geometry::Point(Point::new(1.0, 2.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Single point.
    Point(Point),
    /// Line string.
    Line(Line),
    /// Multi point.
    MultiPoint(MultiPoint),
    /// Polygon.
    Polygon(Polygon),
    /// Multi line string.
    MultiLine(MultiLine),
    /// Multi polygon.
    MultiPolygon(MultiPolygon),
    /// Circle.
    Circle(Circle),
    /// Collection of geometries.
    GeometryCollection(GeometryCollection),
    /// Geometry with properties.
    Feature(Feature),
    /// Collection of features.
    FeatureCollection(FeatureCollection),
    /// Geometry decorated with a bounding box.
    BoundingBox(Box<BoundingBox>),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Geometry::Point($inner) => $body,
            Geometry::Line($inner) => $body,
            Geometry::MultiPoint($inner) => $body,
            Geometry::Polygon($inner) => $body,
            Geometry::MultiLine($inner) => $body,
            Geometry::MultiPolygon($inner) => $body,
            Geometry::Circle($inner) => $body,
            Geometry::GeometryCollection($inner) => $body,
            Geometry::Feature($inner) => $body,
            Geometry::FeatureCollection($inner) => $body,
            Geometry::BoundingBox($inner) => $body,
        }
    };
}

impl Geometry {
    /// Type tag of the geometry. For a decorated geometry this is the type of the inner geometry.
    pub fn kind(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Line(_) => GeometryType::LineString,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiLine(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::Circle(_) => GeometryType::Circle,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::Feature(_) => GeometryType::Feature,
            Geometry::FeatureCollection(_) => GeometryType::FeatureCollection,
            Geometry::BoundingBox(decorated) => decorated.geometry().kind(),
        }
    }

    /// The geometry without its bounding box decoration.
    pub fn undecorated(&self) -> &Geometry {
        match self {
            Geometry::BoundingBox(decorated) => decorated.geometry(),
            other => other,
        }
    }

    /// Bounding box decoration of the geometry.
    pub fn bbox(&self) -> Option<&[f64]> {
        match self {
            Geometry::BoundingBox(decorated) => Some(decorated.bbox()),
            _ => None,
        }
    }

    /// Decorates the geometry with the given box, replacing an existing decoration.
    pub fn with_bbox(self, bbox: Vec<f64>) -> Self {
        BoundingBox::new(bbox, self).into()
    }

    /// Decorates the geometry with its own bounding rectangle. A geometry without points is returned unchanged.
    pub fn with_computed_bbox(self) -> Self {
        match self.bounding_rect() {
            Some(rect) => self.with_bbox(rect.to_bbox()),
            None => self,
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<Line> for Geometry {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiLine> for Geometry {
    fn from(value: MultiLine) -> Self {
        Self::MultiLine(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<Circle> for Geometry {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

impl From<Feature> for Geometry {
    fn from(value: Feature) -> Self {
        Self::Feature(value)
    }
}

impl From<FeatureCollection> for Geometry {
    fn from(value: FeatureCollection) -> Self {
        Self::FeatureCollection(value)
    }
}

impl From<BoundingBox> for Geometry {
    fn from(value: BoundingBox) -> Self {
        Self::BoundingBox(Box::new(value))
    }
}

impl Shape for Geometry {
    fn contains(&self, point: &Point) -> bool {
        dispatch!(self, v => v.contains(point))
    }

    fn bounding_rect(&self) -> Option<Rect> {
        dispatch!(self, v => v.bounding_rect())
    }

    fn transform(&mut self, transformer: &mut impl Transformer) {
        dispatch!(self, v => v.transform(transformer))
    }

    fn visit(&self, visitor: &mut impl Visitor) {
        dispatch!(self, v => v.visit(visitor))
    }
}

impl ToWkt for Geometry {
    fn write_wkt(&self, out: &mut String) {
        dispatch!(self, v => v.write_wkt(out))
    }
}

impl FromWkt for Geometry {
    /// Decodes a geometry of any type that has a WKT tag.
    fn from_wkt_with(input: &str, options: &DecodeOptions) -> Result<Self, GeoShapeError> {
        let Some(kind) = GeometryType::sniff_wkt(input) else {
            let token = input
                .trim_start()
                .split(|c: char| c == '(' || c.is_whitespace())
                .next()
                .unwrap_or_default();
            if token.is_empty() {
                return Err(GeoShapeError::malformed("Geometry", input));
            }
            return Err(GeoShapeError::UnrecognizedType(token.to_string()));
        };

        log::trace!("Decoding {kind} from WKT");

        Ok(match kind {
            GeometryType::Point => Point::from_wkt_with(input, options)?.into(),
            GeometryType::LineString => Line::from_wkt_with(input, options)?.into(),
            GeometryType::MultiPoint => MultiPoint::from_wkt_with(input, options)?.into(),
            GeometryType::Polygon => Polygon::from_wkt_with(input, options)?.into(),
            GeometryType::MultiLineString => MultiLine::from_wkt_with(input, options)?.into(),
            GeometryType::MultiPolygon => MultiPolygon::from_wkt_with(input, options)?.into(),
            GeometryType::Circle => Circle::from_wkt_with(input, options)?.into(),
            GeometryType::GeometryCollection => {
                GeometryCollection::from_wkt_with(input, options)?.into()
            }
            GeometryType::Feature | GeometryType::FeatureCollection => {
                return Err(GeoShapeError::UnrecognizedType(kind.to_string()))
            }
        })
    }
}

impl ToGeoJson for Geometry {
    fn write_geojson(&self, out: &mut String) -> Result<(), GeoShapeError> {
        dispatch!(self, v => v.write_geojson(out))
    }
}

impl FromGeoJson for Geometry {
    /// Decodes a geometry of any type. If the object has a non-empty `bbox` member, the result is wrapped into
    /// [`Geometry::BoundingBox`].
    fn from_envelope(
        mut envelope: Envelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoShapeError> {
        let kind = envelope.geometry_type()?;
        let bbox = envelope.bbox.take().filter(|bbox| !bbox.is_empty());

        log::trace!("Decoding {kind} from GeoJSON");

        let geometry: Geometry = match kind {
            GeometryType::Point => Point::from_envelope(envelope, options)?.into(),
            GeometryType::LineString => Line::from_envelope(envelope, options)?.into(),
            GeometryType::MultiPoint => MultiPoint::from_envelope(envelope, options)?.into(),
            GeometryType::Polygon => Polygon::from_envelope(envelope, options)?.into(),
            GeometryType::MultiLineString => MultiLine::from_envelope(envelope, options)?.into(),
            GeometryType::MultiPolygon => MultiPolygon::from_envelope(envelope, options)?.into(),
            GeometryType::Circle => Circle::from_envelope(envelope, options)?.into(),
            GeometryType::GeometryCollection => {
                GeometryCollection::from_envelope(envelope, options)?.into()
            }
            GeometryType::Feature => Feature::from_envelope(envelope, options)?.into(),
            GeometryType::FeatureCollection => {
                FeatureCollection::from_envelope(envelope, options)?.into()
            }
        };

        Ok(match bbox {
            Some(bbox) => geometry.with_bbox(bbox),
            None => geometry,
        })
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

/// Serialized as the GeoJSON object.
impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let json = self.to_geojson().map_err(S::Error::custom)?;
        let value: Value = serde_json::from_str(&json).map_err(S::Error::custom)?;
        value.serialize(serializer)
    }
}

/// Deserialized from the GeoJSON object with default decode options.
impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Geometry::from_json_value_with(value, &DecodeOptions::default()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::codec::DbValue;

    fn square() -> Polygon {
        Polygon::new(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ]])
    }

    fn all_kinds() -> Vec<Geometry> {
        vec![
            Point::new(1.0, 2.0).into(),
            Line::new(vec![Point::new(0.0, 0.0), Point::new(1.5, -1.0)]).into(),
            MultiPoint::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).into(),
            square().into(),
            MultiLine::new(vec![
                Line::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]),
                Line::new(vec![Point::new(5.0, 5.0), Point::new(6.0, 5.0), Point::new(6.0, 6.0)]),
            ])
            .into(),
            MultiPolygon::new(vec![square(), square()]).into(),
            Circle::new(Point::new(0.0, 4.0), 2.0).into(),
            GeometryCollection::new(vec![Point::new(0.0, 0.0).into(), square().into()]).into(),
        ]
    }

    #[test]
    fn wkt_round_trip() {
        for geometry in all_kinds() {
            let wkt = geometry.to_wkt();
            assert_eq!(Geometry::from_wkt(&wkt).ok(), Some(geometry), "{wkt}");
        }
    }

    #[test]
    fn geojson_round_trip() {
        let mut geometries = all_kinds();
        geometries.push(Feature::new(Point::new(1.0, 2.0)).into());
        geometries.push(FeatureCollection::new(vec![Feature::new(square())]).into());
        geometries.push(Geometry::from(Point::new(1.0, 2.0)).with_bbox(vec![1.0, 2.0]));

        for geometry in geometries {
            let json = geometry.to_geojson().expect("finite");
            let decoded = Geometry::from_geojson(&json).expect("valid json");
            assert_eq!(decoded, geometry, "{json}");
            assert_eq!(decoded.to_geojson().ok(), Some(json));
        }
    }

    #[test]
    fn kind() {
        let kinds: Vec<_> = all_kinds().iter().map(Geometry::kind).collect();
        assert_eq!(kinds, GeometryType::ALL[..8].to_vec());

        let decorated = Geometry::from(Point::new(1.0, 2.0)).with_bbox(vec![1.0, 2.0]);
        assert_eq!(decorated.kind(), GeometryType::Point);
        assert_eq!(decorated.undecorated(), &Geometry::Point(Point::new(1.0, 2.0)));
    }

    #[test]
    fn unknown_types() {
        assert_matches!(
            Geometry::from_geojson(r#"{"type":"Circulo","coordinates":[1,2]}"#),
            Err(GeoShapeError::UnrecognizedType(kind)) if kind == "Circulo"
        );
        assert_matches!(
            Geometry::from_wkt("CIRCULO(1 2)"),
            Err(GeoShapeError::UnrecognizedType(kind)) if kind == "CIRCULO"
        );
        assert_matches!(
            Geometry::from_wkt("POINTS (1 2)"),
            Err(GeoShapeError::UnrecognizedType(kind)) if kind == "POINTS"
        );
        assert_matches!(Geometry::from_wkt("  "), Err(GeoShapeError::Malformed { .. }));
    }

    #[test]
    fn bbox_decoration() {
        let json = r#"{"type":"Point","coordinates":[1,2],"bbox":[1,2]}"#;
        let decorated = Geometry::from_geojson(json).expect("valid json");
        assert_eq!(decorated.bbox(), Some(&[1.0, 2.0][..]));
        assert_ne!(decorated, Geometry::Point(Point::new(1.0, 2.0)));
        assert_eq!(decorated.to_geojson().ok().as_deref(), Some(json));
        assert_eq!(decorated.to_wkt(), "POINT(1 2)");

        let plain = Geometry::from_geojson(r#"{"type":"Point","coordinates":[1,2],"bbox":[]}"#)
            .expect("valid json");
        assert_eq!(plain, Geometry::Point(Point::new(1.0, 2.0)));
        assert_eq!(plain.bbox(), None);
    }

    #[test]
    fn computed_bbox() {
        let geometry = Geometry::from(square()).with_computed_bbox();
        assert_eq!(geometry.bbox(), Some(&[0.0, 0.0, 4.0, 4.0][..]));

        let empty = Geometry::from(Line::default()).with_computed_bbox();
        assert_eq!(empty.bbox(), None);
    }

    #[test]
    fn variants_never_equal() {
        let point = Geometry::from(Point::new(1.0, 2.0));
        let multi_point = Geometry::from(MultiPoint::new(vec![Point::new(1.0, 2.0)]));
        let feature = Geometry::from(Feature::new(Point::new(1.0, 2.0)));
        assert_ne!(point, multi_point);
        assert_ne!(point, feature);
    }

    #[test]
    fn scan() {
        assert_eq!(
            Geometry::scan(&DbValue::from(b"LINESTRING(0 0, 1 1)".as_slice())).ok(),
            Some(Line::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).into())
        );
        assert_matches!(
            Geometry::scan(&DbValue::Integer(4)),
            Err(GeoShapeError::UnsupportedSourceKind(_))
        );
        assert_matches!(
            Geometry::scan(&DbValue::Null),
            Err(GeoShapeError::UnsupportedSourceKind(_))
        );
        assert_matches!(
            Geometry::scan(&DbValue::from("POINT(1 abc)")),
            Err(GeoShapeError::NumericParse(_))
        );
        assert_eq!(
            Geometry::from(Point::new(1.0, 2.0)).value(),
            DbValue::Text("POINT(1 2)".into())
        );
    }

    #[test]
    fn shape_dispatch() {
        let mut geometry = Geometry::from(square());
        assert!(geometry.contains(&Point::new(2.0, 2.0)));
        assert_eq!(geometry.bounding_rect(), Some(Rect::new(0.0, 0.0, 4.0, 4.0)));

        geometry.transform(&mut |p: Point| Point::new(p.x() * 2.0, p.y() * 2.0));
        assert!(geometry.contains(&Point::new(6.0, 6.0)));

        let mut visited = vec![];
        geometry.visit(&mut |p: &Point| visited.push(*p));
        assert_eq!(visited[2], Point::new(8.0, 8.0));
        assert_eq!(visited.len(), 4);
    }

    #[test]
    fn serde() {
        let geometry =
            Geometry::from(Feature::new(Point::new(1.0, 2.0)).with_properties(json!({"a": 1})));
        let value = serde_json::to_value(&geometry).expect("serializable");
        assert_eq!(
            value,
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [1, 2]},
                "properties": {"a": 1}
            })
        );

        let decoded: Geometry = serde_json::from_value(value).expect("valid geometry");
        assert_eq!(decoded, geometry);

        assert!(serde_json::from_str::<Geometry>(r#"{"type":"Circulo"}"#).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Geometry::from(square()).to_string(), "POLYGON((0 0, 4 0, 4 4, 0 4))");
    }
}
