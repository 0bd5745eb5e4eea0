use crate::geodecimate::commands::parse_shape;
use crate::geodecimate::geojson::geojson_geometry;
use crate::geodecimate::{codec, error::Error, par, shape};
use clap::ArgMatches;

pub fn run(matches: &ArgMatches) -> Result<(), Error> {
    let thumbnail = matches.is_present("thumbnail");

    par::for_stdin_line(move |line| {
        let shape_obj = parse_shape(&line)?;
        let result = shape::decimate_shape_obj(&shape_obj)?;
        // only geometry collections get a thumbnail
        let output = if thumbnail && !result.thumbnail_shape.is_empty() {
            &result.thumbnail_shape
        } else {
            result.decimated_shape.as_ref().unwrap_or(&shape_obj)
        };
        let geom = codec::decode_geometry(output)?;
        Ok(vec![serde_json::to_string(&geojson_geometry(&geom))?])
    })
}
