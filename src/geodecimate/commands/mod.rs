pub mod geojson_cmd;
pub mod record;
pub mod shape;
pub mod simplify;
pub mod stats;

use crate::geodecimate::codec::ShapeObj;
use crate::geodecimate::error::Error;
use crate::geodecimate::setting::{DecimationSetting, FilePartitionProvider, InMemoryPartitionProvider};
use clap::ArgMatches;
use serde_json::Value;

pub fn decimation_setting(matches: &ArgMatches) -> DecimationSetting {
    match matches.value_of("settings") {
        Some(path) => DecimationSetting::new(Box::new(FilePartitionProvider::new(path))),
        None => DecimationSetting::new(Box::new(InMemoryPartitionProvider::default())),
    }
}

pub fn parse_shape(line: &str) -> Result<ShapeObj, Error> {
    match serde_json::from_str(line)? {
        Value::Object(shape) => Ok(shape),
        _ => Err(Error::InvalidJSONType),
    }
}
