use crate::geodecimate::commands::{decimation_setting, parse_shape};
use crate::geodecimate::shape::{self, DecimatedResult};
use crate::geodecimate::{error::Error, par};
use clap::ArgMatches;

pub fn run(matches: &ArgMatches) -> Result<(), Error> {
    let setting = decimation_setting(matches);
    let partition = matches.value_of("partition");

    par::for_stdin_line(|line| {
        let shape_obj = parse_shape(&line)?;
        let result = if setting.is_enabled_for(partition) {
            shape::decimate_shape_obj(&shape_obj)?
        } else {
            DecimatedResult::default()
        };
        Ok(vec![serde_json::to_string(&result)?])
    })
}
