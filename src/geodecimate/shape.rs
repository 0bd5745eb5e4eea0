use crate::geodecimate::codec::{self, ShapeObj};
use crate::geodecimate::decimator;
use crate::geodecimate::error::Error;
use crate::geodecimate::geometry::GEOMETRY_COLLECTION;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecimatedResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimated_shape: Option<ShapeObj>,
    pub is_decimated: bool,
    pub thumbnail_shape: ShapeObj,
}

/// Decimates a geometry collection shape at the normal resolution and
/// again, on top of that, at the thumbnail resolution.
///
/// Shapes of any other type come back as an empty, undecimated result.
/// The input map is left untouched.
pub fn decimate_shape_obj(shape: &ShapeObj) -> Result<DecimatedResult, Error> {
    let mut result = DecimatedResult::default();
    if codec::shape_type(shape) != Some(GEOMETRY_COLLECTION) {
        return Ok(result);
    }

    let mut collection = codec::decode(shape)?;
    let points = collection.coord_count();

    if decimator::decimate(&mut collection) {
        result.decimated_shape = Some(codec::encode(&collection)?);
        result.is_decimated = true;
    }
    let decimated_points = collection.coord_count();

    decimator::decimate_as_thumbnail(&mut collection);
    result.thumbnail_shape = codec::encode(&collection)?;

    debug!(
        "decimated shape of {} points to {} points, thumbnail {} points",
        points,
        decimated_points,
        collection.coord_count()
    );
    Ok(result)
}
