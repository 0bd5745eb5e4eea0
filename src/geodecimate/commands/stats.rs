use crate::geodecimate::bbox::bbox;
use crate::geodecimate::commands::parse_shape;
use crate::geodecimate::decimator::{
    self, NORMAL_SHAPE_DECIMATION_EPSILON, THUMBNAIL_SHAPE_DECIMATION_EPSILON,
};
use crate::geodecimate::geometry::GeometryValue;
use crate::geodecimate::{codec, error::Error, par};
use geo_types::Geometry;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShapeStats {
    points: usize,
    decimated_points: usize,
    thumbnail_points: usize,
    is_decimated: bool,
    bbox_preserved: bool,
}

fn stats(original: &GeometryValue) -> ShapeStats {
    let mut decimated = original.clone();
    let is_decimated = decimator::decimate_geometry(&mut decimated, NORMAL_SHAPE_DECIMATION_EPSILON);
    let mut thumbnail = decimated.clone();
    decimator::decimate_geometry(&mut thumbnail, THUMBNAIL_SHAPE_DECIMATION_EPSILON);

    ShapeStats {
        points: original.coord_count(),
        decimated_points: decimated.coord_count(),
        thumbnail_points: thumbnail.coord_count(),
        is_decimated,
        bbox_preserved: bbox(&Geometry::from(original)) == bbox(&Geometry::from(&decimated)),
    }
}

pub fn run() -> Result<(), Error> {
    par::for_stdin_line(|line| {
        let geom = codec::decode_geometry(&parse_shape(&line)?)?;
        Ok(vec![serde_json::to_string(&stats(&geom))?])
    })
}
