use crate::geodecimate::position::Position;
use geo_types::{Geometry, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

pub const TYPE: &str = "type";
pub const POINT: &str = "point";
pub const MULTI_POINT: &str = "multipoint";
pub const LINE_STRING: &str = "linestring";
pub const MULTI_LINE_STRING: &str = "multilinestring";
pub const POLYGON: &str = "polygon";
pub const MULTI_POLYGON: &str = "multipolygon";
pub const GEOMETRY_COLLECTION: &str = "geometrycollection";

/// Geometries as stored in index documents, discriminated by their
/// lowercase `type` tag. Unknown tags fail to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeometryValue {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection(GeometryCollection),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<GeometryValue>,
}

impl GeometryValue {
    pub fn type_tag(&self) -> &'static str {
        match self {
            GeometryValue::Point { .. } => POINT,
            GeometryValue::MultiPoint { .. } => MULTI_POINT,
            GeometryValue::LineString { .. } => LINE_STRING,
            GeometryValue::MultiLineString { .. } => MULTI_LINE_STRING,
            GeometryValue::Polygon { .. } => POLYGON,
            GeometryValue::MultiPolygon { .. } => MULTI_POLYGON,
            GeometryValue::GeometryCollection(_) => GEOMETRY_COLLECTION,
        }
    }

    pub fn coord_count(&self) -> usize {
        match self {
            GeometryValue::Point { .. } => 1,
            GeometryValue::MultiPoint { coordinates } => coordinates.len(),
            GeometryValue::LineString { coordinates } => coordinates.len(),
            GeometryValue::MultiLineString { coordinates } => rings_coord_count(coordinates),
            GeometryValue::Polygon { coordinates } => rings_coord_count(coordinates),
            GeometryValue::MultiPolygon { coordinates } => coordinates
                .iter()
                .map(|rings| rings_coord_count(rings))
                .sum(),
            GeometryValue::GeometryCollection(gc) => gc.coord_count(),
        }
    }
}

impl GeometryCollection {
    pub fn new(geometries: Vec<GeometryValue>) -> GeometryCollection {
        GeometryCollection { geometries }
    }

    pub fn coord_count(&self) -> usize {
        self.geometries.iter().map(|g| g.coord_count()).sum()
    }
}

fn rings_coord_count(rings: &[Vec<Position>]) -> usize {
    rings.iter().map(|ring| ring.len()).sum()
}

fn point(p: &Position) -> Point<f64> {
    Point::new(p.longitude, p.latitude)
}

fn line_string(line: &[Position]) -> LineString<f64> {
    line.iter()
        .map(|p| (p.longitude, p.latitude))
        .collect::<Vec<(f64, f64)>>()
        .into()
}

fn polygon(rings: &[Vec<Position>]) -> Polygon<f64> {
    match rings.split_first() {
        Some((exterior, interiors)) => Polygon::new(
            line_string(exterior),
            interiors.iter().map(|ring| line_string(ring)).collect(),
        ),
        None => Polygon::new(LineString(vec![]), vec![]),
    }
}

/// Planar view of a geometry; altitude is dropped.
impl From<&GeometryValue> for Geometry<f64> {
    fn from(geometry: &GeometryValue) -> Geometry<f64> {
        match geometry {
            GeometryValue::Point { coordinates } => Geometry::Point(point(coordinates)),
            GeometryValue::MultiPoint { coordinates } => Geometry::MultiPoint(geo_types::MultiPoint(
                coordinates.iter().map(point).collect(),
            )),
            GeometryValue::LineString { coordinates } => {
                Geometry::LineString(line_string(coordinates))
            }
            GeometryValue::MultiLineString { coordinates } => Geometry::MultiLineString(
                geo_types::MultiLineString(coordinates.iter().map(|l| line_string(l)).collect()),
            ),
            GeometryValue::Polygon { coordinates } => Geometry::Polygon(polygon(coordinates)),
            GeometryValue::MultiPolygon { coordinates } => Geometry::MultiPolygon(
                geo_types::MultiPolygon(coordinates.iter().map(|p| polygon(p)).collect()),
            ),
            GeometryValue::GeometryCollection(gc) => Geometry::GeometryCollection(
                geo_types::GeometryCollection(gc.geometries.iter().map(Geometry::from).collect()),
            ),
        }
    }
}
