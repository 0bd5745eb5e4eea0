use crate::geodecimate::geometry::{GeometryCollection, GeometryValue};
use crate::geodecimate::position::Position;
use crate::geodecimate::simplifier;
use log::debug;
use std::borrow::Cow;

pub const NORMAL_SHAPE_DECIMATION_EPSILON: f64 = 10.0; // meters
pub const THUMBNAIL_SHAPE_DECIMATION_EPSILON: f64 = 1000.0; // meters
const DEGREES_TO_METERS: f64 = 100000.0; // approximate using 100km per degree
const MAX_SHAPE_POINT_COUNT_FOR_LINE_DECIMATION: usize = 300000;
const TOLERANCE_FACTOR: f64 = 1.2;

pub fn decimate(collection: &mut GeometryCollection) -> bool {
    decimate_collection(collection, NORMAL_SHAPE_DECIMATION_EPSILON)
}

pub fn decimate_as_thumbnail(collection: &mut GeometryCollection) -> bool {
    decimate_collection(collection, THUMBNAIL_SHAPE_DECIMATION_EPSILON)
}

pub fn decimate_collection(collection: &mut GeometryCollection, epsilon: f64) -> bool {
    let mut decimated = false;
    for geometry in collection.geometries.iter_mut() {
        decimated |= decimate_geometry(geometry, epsilon);
    }
    decimated
}

/// Points and point clouds have no line to simplify and are left alone.
pub fn decimate_geometry(geometry: &mut GeometryValue, epsilon: f64) -> bool {
    match geometry {
        GeometryValue::Point { .. } | GeometryValue::MultiPoint { .. } => false,
        GeometryValue::LineString { coordinates } => replace_line(coordinates, epsilon),
        GeometryValue::MultiLineString { coordinates } | GeometryValue::Polygon { coordinates } => {
            replace_lines(coordinates, epsilon)
        }
        GeometryValue::MultiPolygon { coordinates } => {
            let mut decimated = false;
            for polygon in coordinates.iter_mut() {
                decimated |= replace_lines(polygon, epsilon);
            }
            decimated
        }
        GeometryValue::GeometryCollection(gc) => decimate_collection(gc, epsilon),
    }
}

fn replace_lines(lines: &mut [Vec<Position>], epsilon: f64) -> bool {
    let mut decimated = false;
    for line in lines.iter_mut() {
        decimated |= replace_line(line, epsilon);
    }
    decimated
}

fn replace_line(line: &mut Vec<Position>, epsilon: f64) -> bool {
    match decimate_line(line, epsilon) {
        Some(decimated) => {
            *line = decimated;
            true
        }
        None => false,
    }
}

/// Simplifies one line, returning `None` when every point is kept.
///
/// Very long lines are sampled at a fixed stride first; the sampling alone
/// counts as a change.
pub fn decimate_line(coordinates: &[Position], epsilon: f64) -> Option<Vec<Position>> {
    if coordinates.len() < 3 {
        return None;
    }

    let sampled = down_sample_points(coordinates);
    let point_indexes =
        simplifier::point_indexes_to_keep(&sampled, DEGREES_TO_METERS, epsilon);
    if point_indexes.len() == coordinates.len() {
        return None;
    }

    Some(point_indexes.into_iter().map(|i| sampled[i]).collect())
}

fn down_sample_points(coordinates: &[Position]) -> Cow<[Position]> {
    let count = coordinates.len();
    if count as f64 <= MAX_SHAPE_POINT_COUNT_FOR_LINE_DECIMATION as f64 * TOLERANCE_FACTOR {
        return Cow::Borrowed(coordinates);
    }

    let interval = (count + MAX_SHAPE_POINT_COUNT_FOR_LINE_DECIMATION - 1)
        / MAX_SHAPE_POINT_COUNT_FOR_LINE_DECIMATION;
    let mut sampled: Vec<Position> = coordinates.iter().step_by(interval).copied().collect();
    if (count - 1) % interval != 0 {
        sampled.push(coordinates[count - 1]);
    }
    debug!(
        "down-sampled line of {} points to {} points (stride {})",
        count,
        sampled.len(),
        interval
    );
    Cow::Owned(sampled)
}
