use crate::geodecimate::geometry::GeometryValue;
use crate::geodecimate::position::Position;
use geojson::{Geometry, Value};

fn position(p: &Position) -> Vec<f64> {
    if p.has_altitude() {
        vec![p.longitude, p.latitude, p.altitude]
    } else {
        vec![p.longitude, p.latitude]
    }
}

fn line(coords: &[Position]) -> Vec<Vec<f64>> {
    coords.iter().map(position).collect()
}

fn lines(coords: &[Vec<Position>]) -> Vec<Vec<Vec<f64>>> {
    coords.iter().map(|l| line(l)).collect()
}

/// Standard GeoJSON for a shape geometry, keeping altitudes.
pub fn geojson_geometry(geom: &GeometryValue) -> Geometry {
    let value = match geom {
        GeometryValue::Point { coordinates } => Value::Point(position(coordinates)),
        GeometryValue::MultiPoint { coordinates } => Value::MultiPoint(line(coordinates)),
        GeometryValue::LineString { coordinates } => Value::LineString(line(coordinates)),
        GeometryValue::MultiLineString { coordinates } => Value::MultiLineString(lines(coordinates)),
        GeometryValue::Polygon { coordinates } => Value::Polygon(lines(coordinates)),
        GeometryValue::MultiPolygon { coordinates } => {
            Value::MultiPolygon(coordinates.iter().map(|p| lines(p)).collect())
        }
        GeometryValue::GeometryCollection(gc) => {
            Value::GeometryCollection(gc.geometries.iter().map(geojson_geometry).collect())
        }
    };
    Geometry::new(value)
}

#[cfg(test)]
mod tests {
    use crate::geodecimate::geojson::geojson_geometry;
    use crate::geodecimate::geometry::{GeometryCollection, GeometryValue};
    use crate::geodecimate::position::Position;
    use serde_json::json;

    #[test]
    fn writes_standard_geojson() {
        let gc = GeometryValue::GeometryCollection(GeometryCollection::new(vec![
            GeometryValue::Point {
                coordinates: Position::new(1.0, 2.0),
            },
            GeometryValue::LineString {
                coordinates: vec![Position::new(0.0, 0.0), Position::with_altitude(1.0, 1.0, 20.0)],
            },
        ]));
        let gj = serde_json::to_value(&geojson_geometry(&gc)).unwrap();
        assert_eq!(
            json!({
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Point", "coordinates": [1.0, 2.0]},
                    {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0, 20.0]]}
                ]
            }),
            gj
        );
    }

    #[test]
    fn writes_polygon_rings() {
        let ring = vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 1.0),
            Position::new(0.0, 0.0),
        ];
        let poly = GeometryValue::MultiPolygon {
            coordinates: vec![vec![ring.clone(), ring]],
        };
        let gj = serde_json::to_value(&geojson_geometry(&poly)).unwrap();
        assert_eq!("MultiPolygon", gj["type"]);
        assert_eq!(2, gj["coordinates"][0].as_array().map(|r| r.len()).unwrap_or(0));
    }
}
