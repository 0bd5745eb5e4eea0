use crate::geodecimate::commands::parse_shape;
use crate::geodecimate::{codec, decimator, error::Error, par};
use clap::ArgMatches;
use std::str::FromStr;

fn simplify(epsilon: f64) -> Result<(), Error> {
    par::for_stdin_line(move |line| {
        let mut geom = codec::decode_geometry(&parse_shape(&line)?)?;
        decimator::decimate_geometry(&mut geom, epsilon);
        Ok(vec![serde_json::to_string(&codec::encode_geometry(&geom)?)?])
    })
}

pub fn run(matches: &ArgMatches) -> Result<(), Error> {
    match matches.value_of("epsilon") {
        Some(arg) => match f64::from_str(arg) {
            Ok(eps) if eps >= 0.0 => simplify(eps),
            _ => {
                eprintln!(
                    "Invalid Epsilon: {:?} - must be a non-negative number of meters, e.g. 250.",
                    arg
                );
                Err(Error::InvalidNumberFormat)
            }
        },
        _ => Err(Error::MissingArgument),
    }
}
