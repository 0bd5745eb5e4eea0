mod geodecimate;
use geodecimate::commands;
use geodecimate::error::Error;
use geodecimate::text;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::process;

fn run(matches: ArgMatches) -> Result<(), Error> {
    match matches.subcommand() {
        ("shape", Some(m)) => commands::shape::run(m),
        ("record", Some(m)) => commands::record::run(m),
        ("stats", Some(_)) => commands::stats::run(),
        ("gj", Some(m)) => commands::geojson_cmd::run(m),
        ("simplify", Some(m)) => commands::simplify::run(m),
        _ => Err(Error::UnknownCommand),
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn partition_args<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name("partition")
            .help(text::PARTITION_ARG_HELP)
            .takes_value(true)
            .long("partition")
            .short("p"),
    )
    .arg(
        Arg::with_name("settings")
            .help(text::SETTINGS_ARG_HELP)
            .takes_value(true)
            .long("settings")
            .short("s"),
    )
}

fn main() {
    env_logger::init();

    let shape = partition_args(
        SubCommand::with_name("shape")
            .about(text::SHAPE_ABOUT)
            .after_help(text::SHAPE_AFTER_HELP),
    );

    let record = partition_args(
        SubCommand::with_name("record")
            .about(text::RECORD_ABOUT)
            .after_help(text::RECORD_AFTER_HELP)
            .arg(
                Arg::with_name("property")
                    .help("Flattened path of the geo-shape property to decimate.")
                    .takes_value(true)
                    .long("property"),
            ),
    );

    let geojson = SubCommand::with_name("gj")
        .about(text::GEOJSON_ABOUT)
        .arg(
            Arg::with_name("thumbnail")
                .help("Output the thumbnail shape instead of the decimated shape.")
                .long("thumbnail")
                .short("t"),
        );

    let simplify = SubCommand::with_name("simplify")
        .about(text::SIMPLIFY_ABOUT)
        .after_help(text::SIMPLIFY_AFTER_HELP)
        .arg(
            Arg::with_name("epsilon")
                .help("Tolerance in meters")
                .takes_value(true)
                .required(true)
                .long("epsilon")
                .short("e"),
        );

    let matches = App::new("geodecimate")
        .version(VERSION)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .about("geodecimate - Geo-shape decimation for search index documents")
        .after_help(text::MAIN_AFTER_HELP)
        .subcommand(shape)
        .subcommand(record)
        .subcommand(SubCommand::with_name("stats").about(text::STATS_ABOUT))
        .subcommand(geojson)
        .subcommand(simplify)
        .get_matches();

    if let Err(e) = run(matches) {
        eprintln!("Application error: {:?}", e);
        process::exit(1);
    }
}
