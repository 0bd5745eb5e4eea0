//! Douglas-Peucker reduction over positions that may carry an altitude.
//!
//! Longitude and latitude are scaled by `xy_scalar` (meters per degree) so
//! that they can be compared against an altitude given in meters, and the
//! tolerance `epsilon` is expressed in the same unit.

use crate::geodecimate::position::Position;

/// Lines whose last usable index is below this keep every point.
pub const SMALL_OBJECT_POINT_COUNT: usize = 6;

/// Returns the ascending, deduplicated indexes of the points to keep.
///
/// The first and last points are always kept, and so are the points holding
/// the minimum and maximum of each component, which leaves the bounding box
/// of the line unchanged.
pub fn point_indexes_to_keep(coordinates: &[Position], xy_scalar: f64, epsilon: f64) -> Vec<usize> {
    if coordinates.is_empty() {
        return Vec::new();
    }

    let first_point_index = 0;
    let mut last_point_index = coordinates.len() - 1;
    let mut point_indexes_to_keep = vec![first_point_index, last_point_index];

    // A closed ring would give the reduction a zero-length chord
    while first_point_index < last_point_index
        && coordinates[last_point_index].same_location(&coordinates[first_point_index])
    {
        last_point_index -= 1;
    }

    if last_point_index < SMALL_OBJECT_POINT_COUNT {
        point_indexes_to_keep.extend(1..=last_point_index);
    } else {
        point_indexes_to_keep.push(last_point_index);
        point_indexes_to_keep.extend(boundary_point_indexes(
            coordinates,
            first_point_index,
            last_point_index,
        ));
        reduce(
            coordinates,
            first_point_index,
            last_point_index,
            xy_scalar,
            epsilon,
            &mut point_indexes_to_keep,
        );
    }

    point_indexes_to_keep.sort_unstable();
    point_indexes_to_keep.dedup();
    point_indexes_to_keep
}

/// Running minimum and maximum of one component, skipping NaN values.
struct Extent {
    min: f64,
    max: f64,
    min_index: usize,
    max_index: usize,
}

impl Extent {
    fn new(start: usize) -> Extent {
        Extent {
            min: f64::NAN,
            max: f64::NAN,
            min_index: start,
            max_index: start,
        }
    }

    fn add(&mut self, value: f64, index: usize) {
        if value.is_nan() {
            return;
        }
        if self.min.is_nan() || value < self.min {
            self.min = value;
            self.min_index = index;
        }
        if self.max.is_nan() || value > self.max {
            self.max = value;
            self.max_index = index;
        }
    }
}

fn boundary_point_indexes(coordinates: &[Position], first: usize, last: usize) -> Vec<usize> {
    let mut x = Extent::new(first);
    let mut y = Extent::new(first);
    let mut z = Extent::new(first);
    for (index, position) in coordinates.iter().enumerate().take(last + 1).skip(first) {
        x.add(position.longitude, index);
        y.add(position.latitude, index);
        z.add(position.altitude, index);
    }

    let mut indexes = vec![
        x.min_index,
        x.max_index,
        y.min_index,
        y.max_index,
        z.min_index,
        z.max_index,
    ];
    indexes.sort_unstable();
    indexes.dedup();
    indexes
}

fn reduce(
    coordinates: &[Position],
    first: usize,
    last: usize,
    xy_scalar: f64,
    epsilon: f64,
    point_indexes_to_keep: &mut Vec<usize>,
) {
    let mut ranges = vec![(first, last)];
    while let Some((start, end)) = ranges.pop() {
        let start_point = &coordinates[start];
        let end_point = &coordinates[end];

        let mut max_distance = 0.0;
        let mut farthest = None;
        for index in (start + 1)..end {
            let distance =
                perpendicular_distance(start_point, end_point, &coordinates[index], xy_scalar);
            if distance > max_distance {
                max_distance = distance;
                farthest = Some(index);
            }
        }

        if let Some(index) = farthest {
            if max_distance > epsilon {
                point_indexes_to_keep.push(index);
                ranges.push((index, end));
                ranges.push((start, index));
            }
        }
    }
}

/// Distance from `test_point` to the line through `start` and `end`, in
/// scaled units. Altitude is used when the start point has one.
pub fn perpendicular_distance(start: &Position, end: &Position, test_point: &Position, xy_scalar: f64) -> f64 {
    let has_altitude = start.has_altitude();

    let start_x = start.longitude * xy_scalar;
    let start_y = start.latitude * xy_scalar;
    let start_z = start.altitude;

    let v_x = end.longitude * xy_scalar - start_x;
    let v_y = end.latitude * xy_scalar - start_y;
    let v_z = end.altitude - start_z;

    let test_x = test_point.longitude * xy_scalar;
    let test_y = test_point.latitude * xy_scalar;
    let test_z = test_point.altitude;

    let w_x = test_x - start_x;
    let w_y = test_y - start_y;
    let w_z = test_z - start_z;

    let c1 = w_x * v_x + w_y * v_y + if has_altitude { w_z * v_z } else { 0.0 };
    let c2 = v_x * v_x + v_y * v_y + if has_altitude { v_z * v_z } else { 0.0 };

    if c2 == 0.0 {
        return (w_x * w_x + w_y * w_y + if has_altitude { w_z * w_z } else { 0.0 }).sqrt();
    }

    let b = c1 / c2;
    let d_x = start_x + b * v_x - test_x;
    let d_y = start_y + b * v_y - test_y;
    let d_z = start_z + b * v_z - test_z;
    (d_x * d_x + d_y * d_y + if has_altitude { d_z * d_z } else { 0.0 }).sqrt()
}
