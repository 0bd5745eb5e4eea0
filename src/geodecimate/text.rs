pub const MAIN_AFTER_HELP: &str = r#"
Commands read newline-delimited JSON from STDIN and write one line of
output per input line, in input order.

Shapes are geometry collections as stored in index documents:

  {"type":"geometrycollection",
   "geometries":[{"type":"linestring","coordinates":[[lon,lat],[lon,lat,alt]]}]}

Member types are point, multipoint, linestring, multilinestring, polygon,
multipolygon and geometrycollection.

Set RUST_LOG=debug to see point counts for each shape.
"#;

pub const SHAPE_ABOUT: &str = "Decimate shapes and build their thumbnails";

pub const SHAPE_AFTER_HELP: &str = r#"
Lines and polygon rings are reduced with a 10 meter tolerance, then the
result is reduced again with a 1000 meter tolerance for the thumbnail.
Points are never reduced, and neither are lines of fewer than 7 points.

Output is a result object. "decimatedShape" is only present when the shape
changed:

  {"decimatedShape":{...},"isDecimated":true,"thumbnailShape":{...}}

Example:

$ echo '{"type":"geometrycollection","geometries":[{"type":"point","coordinates":[1,2]}]}' | geodecimate shape
  {"isDecimated":false,"thumbnailShape":{"geometries":[{"coordinates":[1.0,2.0],"type":"point"}],"type":"geometrycollection"}}
"#;

pub const RECORD_ABOUT: &str = "Decimate the geo-shape of index records";

pub const RECORD_AFTER_HELP: &str = r#"
Input records look like {"id":"...","data":{...}} where data holds the
record's flattened properties.

The geo-shape is read from --property if given, otherwise from
SpatialLocation.Wgs84Coordinates, otherwise from
VirtualProperties.DefaultLocation.Wgs84Coordinates. A decimated shape
replaces the original and is copied to the virtual default location.
VirtualProperties.DefaultLocation.IsDecimated is set whenever the virtual
default location is present.

Records whose shape cannot be read are passed through unchanged.
"#;

pub const STATS_ABOUT: &str = "Report point counts before and after decimation";

pub const GEOJSON_ABOUT: &str = "Output decimated shapes as GeoJSON geometries";

pub const SIMPLIFY_ABOUT: &str = "Decimate shapes with a custom tolerance";

pub const SIMPLIFY_AFTER_HELP: &str = r#"
The tolerance is given in meters, using 100km per degree of longitude
and latitude.

Example:

$ geodecimate simplify --epsilon 250 < shapes.json
"#;

pub const PARTITION_ARG_HELP: &str = "Data partition of the input. Decimation can be disabled per partition.";

pub const SETTINGS_ARG_HELP: &str = r#"TOML file of partition properties, e.g.

[partitions.opendes]
indexer-decimation-enabled = "false"
"#;
