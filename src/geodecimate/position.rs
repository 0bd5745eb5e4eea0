use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` or `[longitude, latitude, altitude]` coordinate.
///
/// A missing altitude is stored as NaN. Range checks on longitude and
/// latitude happen before shapes reach the decimator.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Position {
        Position {
            longitude,
            latitude,
            altitude: f64::NAN,
        }
    }

    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Position {
        Position {
            longitude,
            latitude,
            altitude,
        }
    }

    pub fn has_altitude(&self) -> bool {
        !self.altitude.is_nan()
    }

    /// Equality used when trimming degenerate line ends. Altitude only
    /// participates when both positions carry one.
    pub fn same_location(&self, other: &Position) -> bool {
        self.longitude == other.longitude
            && self.latitude == other.latitude
            && (!(self.has_altitude() && other.has_altitude()) || self.altitude == other.altitude)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.longitude == other.longitude
            && self.latitude == other.latitude
            && (self.altitude == other.altitude || !(self.has_altitude() || other.has_altitude()))
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.has_altitude() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.longitude)?;
        seq.serialize_element(&self.latitude)?;
        if self.has_altitude() {
            seq.serialize_element(&self.altitude)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Position, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        match values.as_slice() {
            [longitude, latitude] => Ok(Position::new(*longitude, *latitude)),
            [longitude, latitude, altitude, ..] => {
                Ok(Position::with_altitude(*longitude, *latitude, *altitude))
            }
            _ => Err(de::Error::invalid_length(
                values.len(),
                &"a position of 2 or 3 numbers",
            )),
        }
    }
}
