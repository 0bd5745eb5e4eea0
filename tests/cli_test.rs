extern crate assert_cli;
use assert_cli::Assert;
use std::io::Write;

// 100m steps with a 1m wobble and a 400m bump at index 3
const WIGGLY_SHAPE: &str = r#"{"type":"geometrycollection","geometries":[{"type":"linestring","coordinates":[[0,0],[0.001,0.00001],[0.002,0],[0.003,0.004],[0.004,0],[0.005,0.00001],[0.006,0],[0.007,0]]}]}"#;
const DECIMATED_LINE: &str = "[[0.0,0.0],[0.002,0.0],[0.003,0.004],[0.004,0.0],[0.007,0.0]]";

fn settings_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn it_decimates_shapes() {
    Assert::main_binary()
        .with_args(&["shape"])
        .stdin(WIGGLY_SHAPE)
        .stdout()
        .contains(r#""isDecimated":true"#)
        .stdout()
        .contains(DECIMATED_LINE)
        .stdout()
        .contains(r#""thumbnailShape":{"#)
        .unwrap();
}

#[test]
fn it_does_not_decimate_points() {
    let input = r#"{"type":"geometrycollection","geometries":[{"type":"point","coordinates":[1,2]}]}"#;
    Assert::main_binary()
        .with_args(&["shape"])
        .stdin(input)
        .stdout()
        .contains(r#"{"isDecimated":false,"thumbnailShape":{"#)
        .stdout()
        .contains("[1.0,2.0]")
        .unwrap();
}

#[test]
fn it_returns_empty_results_for_other_shapes() {
    Assert::main_binary()
        .with_args(&["shape"])
        .stdin(r#"{"type":"point","coordinates":[1,2]}"#)
        .stdout()
        .contains(r#"{"isDecimated":false,"thumbnailShape":{}}"#)
        .unwrap();
}

#[test]
fn it_writes_one_result_per_line_in_order() {
    let point = r#"{"type":"geometrycollection","geometries":[{"type":"point","coordinates":[1,2]}]}"#;
    let input = format!("{}\n{}\n\n{}\n", WIGGLY_SHAPE, point, WIGGLY_SHAPE);
    let output = r#"{"points":8,"decimatedPoints":5,"thumbnailPoints":5,"isDecimated":true,"bboxPreserved":true}
{"points":1,"decimatedPoints":1,"thumbnailPoints":1,"isDecimated":false,"bboxPreserved":true}
{"points":8,"decimatedPoints":5,"thumbnailPoints":5,"isDecimated":true,"bboxPreserved":true}
"#;
    Assert::main_binary()
        .with_args(&["stats"])
        .stdin(input)
        .stdout()
        .contains(output)
        .unwrap();
}

#[test]
fn it_skips_partitions_with_decimation_disabled() {
    let settings = settings_file("[partitions.opendes]\nindexer-decimation-enabled = \"false\"\n");
    let path = settings.path().to_str().unwrap();

    Assert::main_binary()
        .with_args(&["shape", "--partition", "opendes", "--settings", path])
        .stdin(WIGGLY_SHAPE)
        .stdout()
        .contains(r#"{"isDecimated":false,"thumbnailShape":{}}"#)
        .unwrap();

    Assert::main_binary()
        .with_args(&["shape", "--partition", "tenant1", "--settings", path])
        .stdin(WIGGLY_SHAPE)
        .stdout()
        .contains(r#""isDecimated":true"#)
        .unwrap();
}

#[test]
fn it_decimates_when_settings_cannot_be_read() {
    Assert::main_binary()
        .with_args(&["shape", "--partition", "opendes", "--settings", "/nonexistent/settings.toml"])
        .stdin(WIGGLY_SHAPE)
        .stdout()
        .contains(r#""isDecimated":true"#)
        .unwrap();
}

#[test]
fn exits_on_invalid_json() {
    Assert::main_binary()
        .with_args(&["shape"])
        .stdin("pizza")
        .stderr()
        .contains("Application error: JSONParseError")
        .fails()
        .unwrap();
}

#[test]
fn exits_on_unknown_geometry_types() {
    let input = r#"{"type":"geometrycollection","geometries":[{"type":"circle","coordinates":[1,2]}]}"#;
    Assert::main_binary()
        .with_args(&["shape"])
        .stdin(input)
        .stderr()
        .contains("InvalidShape")
        .fails()
        .unwrap();
}

#[test]
fn it_decimates_records() {
    let input = format!(
        r#"{{"id":"opendes:wellbore:1","kind":"osdu:wks:wellbore:1.0.0","data":{{"SpatialLocation.Wgs84Coordinates":{},"VirtualProperties.DefaultLocation.Wgs84Coordinates":{}}}}}"#,
        WIGGLY_SHAPE, WIGGLY_SHAPE
    );
    Assert::main_binary()
        .with_args(&["record"])
        .stdin(input)
        .stdout()
        .contains(r#""VirtualProperties.DefaultLocation.IsDecimated":true"#)
        .stdout()
        .contains(DECIMATED_LINE)
        .stdout()
        .contains(r#""kind":"osdu:wks:wellbore:1.0.0""#)
        .unwrap();
}

#[test]
fn it_decimates_the_source_property_of_records() {
    // the virtual location holds a stale point, so only the source can produce the line
    let point = r#"{"type":"geometrycollection","geometries":[{"type":"point","coordinates":[1,2]}]}"#;
    let input = format!(
        r#"{{"id":"opendes:wellbore:3","data":{{"SpatialLocation.Wgs84Coordinates":{},"VirtualProperties.DefaultLocation.Wgs84Coordinates":{}}}}}"#,
        WIGGLY_SHAPE, point
    );
    Assert::main_binary()
        .with_args(&["record"])
        .stdin(input)
        .stdout()
        .contains(DECIMATED_LINE)
        .stdout()
        .contains(r#""VirtualProperties.DefaultLocation.IsDecimated":true"#)
        .stdout()
        .doesnt_contain("[1,2]")
        .unwrap();
}

#[test]
fn it_passes_through_records_with_bad_shapes() {
    let input = r#"{"id":"opendes:wellbore:2","data":{"SpatialLocation.Wgs84Coordinates":{"type":"geometrycollection","geometries":[{"type":"circle"}]}}}"#;
    Assert::main_binary()
        .with_args(&["record"])
        .stdin(input)
        .stdout()
        .contains(r#""type":"circle""#)
        .stdout()
        .contains(r#""id":"opendes:wellbore:2""#)
        .unwrap();
}

#[test]
fn it_reports_stats() {
    Assert::main_binary()
        .with_args(&["stats"])
        .stdin(WIGGLY_SHAPE)
        .stdout()
        .contains(r#"{"points":8,"decimatedPoints":5,"thumbnailPoints":5,"isDecimated":true,"bboxPreserved":true}"#)
        .unwrap();
}

#[test]
fn it_outputs_geojson() {
    Assert::main_binary()
        .with_args(&["gj"])
        .stdin(WIGGLY_SHAPE)
        .stdout()
        .contains(r#""type":"GeometryCollection""#)
        .stdout()
        .contains(DECIMATED_LINE)
        .unwrap();
}

#[test]
fn it_simplifies_with_a_custom_epsilon() {
    Assert::main_binary()
        .with_args(&["simplify", "--epsilon", "1000"])
        .stdin(WIGGLY_SHAPE)
        .stdout()
        .contains("[[0.0,0.0],[0.003,0.004],[0.007,0.0]]")
        .unwrap();
}

#[test]
fn simplify_fails_for_invalid_epsilon() {
    Assert::main_binary()
        .with_args(&["simplify", "--epsilon", "pizza"])
        .stdin(WIGGLY_SHAPE)
        .stderr()
        .contains("Invalid Epsilon")
        .fails()
        .unwrap();
}
