use crate::geodecimate::error::Error;
use crate::geodecimate::geometry::{GeometryCollection, GeometryValue, TYPE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ShapeObj = Map<String, Value>;

#[derive(Serialize)]
#[serde(tag = "type", rename = "geometrycollection")]
struct EncodedCollection<'a> {
    geometries: &'a [GeometryValue],
}

pub fn shape_type(shape: &ShapeObj) -> Option<&str> {
    shape.get(TYPE).and_then(Value::as_str)
}

pub fn decode_geometry(shape: &ShapeObj) -> Result<GeometryValue, Error> {
    GeometryValue::deserialize(Value::Object(shape.clone()))
        .map_err(|e| Error::InvalidShape(e.to_string()))
}

pub fn decode(shape: &ShapeObj) -> Result<GeometryCollection, Error> {
    match decode_geometry(shape)? {
        GeometryValue::GeometryCollection(gc) => Ok(gc),
        other => Err(Error::InvalidShape(format!(
            "expected a geometrycollection, found {}",
            other.type_tag()
        ))),
    }
}

pub fn encode(collection: &GeometryCollection) -> Result<ShapeObj, Error> {
    as_shape_obj(serde_json::to_value(EncodedCollection {
        geometries: &collection.geometries,
    })?)
}

pub fn encode_geometry(geometry: &GeometryValue) -> Result<ShapeObj, Error> {
    as_shape_obj(serde_json::to_value(geometry)?)
}

fn as_shape_obj(value: Value) -> Result<ShapeObj, Error> {
    match value {
        Value::Object(shape) => Ok(shape),
        _ => Err(Error::InvalidJSONType),
    }
}
