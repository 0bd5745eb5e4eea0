use crate::geodecimate::commands::decimation_setting;
use crate::geodecimate::record::{self, IndexRecord};
use crate::geodecimate::{error::Error, par};
use clap::ArgMatches;

pub fn run(matches: &ArgMatches) -> Result<(), Error> {
    let setting = decimation_setting(matches);
    let partition = matches.value_of("partition");
    let property = matches.value_of("property");

    par::for_stdin_line(|line| {
        let mut index_record: IndexRecord = serde_json::from_str(&line)?;
        record::decimate_record(&mut index_record, property, &setting, partition);
        Ok(vec![serde_json::to_string(&index_record)?])
    })
}
