use crate::geodecimate::codec::ShapeObj;
use crate::geodecimate::error::Error;
use crate::geodecimate::setting::DecimationSetting;
use crate::geodecimate::shape;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const VIRTUAL_DEFAULT_LOCATION_WGS84_PATH: &str =
    "VirtualProperties.DefaultLocation.Wgs84Coordinates";
pub const VIRTUAL_DEFAULT_LOCATION_IS_DECIMATED_PATH: &str =
    "VirtualProperties.DefaultLocation.IsDecimated";
pub const DEFAULT_GEO_SHAPE_PROPERTY: &str = "SpatialLocation.Wgs84Coordinates";

/// A record on its way to the index, with its data flattened into
/// dotted property paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub id: String,
    #[serde(default)]
    pub data: ShapeObj,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The property holding the record's geo-shape: the given one, else the
/// spatial location, else the virtual default location. The virtual
/// location is a copy of its source property, so the source is preferred.
pub fn geo_shape_property<'a>(data: &ShapeObj, property: Option<&'a str>) -> Option<&'a str> {
    property.or_else(|| {
        [DEFAULT_GEO_SHAPE_PROPERTY, VIRTUAL_DEFAULT_LOCATION_WGS84_PATH]
            .iter()
            .copied()
            .find(|p| data.contains_key(*p))
    })
}

/// Replaces the shape under `property` with its decimated version and
/// records on the virtual default location whether that happened.
pub fn decimate_geo_shape(data: &mut ShapeObj, property: &str) -> Result<(), Error> {
    let result = match data.get(property) {
        Some(Value::Object(shape_obj)) => shape::decimate_shape_obj(shape_obj)?,
        _ => return Ok(()),
    };

    let has_virtual_location = data.contains_key(VIRTUAL_DEFAULT_LOCATION_WGS84_PATH);
    if let Some(decimated) = result.decimated_shape {
        if has_virtual_location {
            data.insert(
                VIRTUAL_DEFAULT_LOCATION_WGS84_PATH.to_string(),
                Value::Object(decimated.clone()),
            );
        }
        data.insert(property.to_string(), Value::Object(decimated));
    }
    if has_virtual_location {
        data.insert(
            VIRTUAL_DEFAULT_LOCATION_IS_DECIMATED_PATH.to_string(),
            Value::Bool(result.is_decimated),
        );
    }
    Ok(())
}

/// A shape that fails to decode is logged and the record is kept as is.
pub fn decimate_record(
    record: &mut IndexRecord,
    property: Option<&str>,
    setting: &DecimationSetting,
    partition_id: Option<&str>,
) {
    if !setting.is_enabled_for(partition_id) {
        return;
    }
    let property = match geo_shape_property(&record.data, property) {
        Some(p) => p,
        None => return,
    };
    if let Err(e) = decimate_geo_shape(&mut record.data, property) {
        warn!(
            "record-id: {} | error decimating geoshape | error: {}",
            record.id, e
        );
    }
}
