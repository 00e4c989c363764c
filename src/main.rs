use std::env;

use clap::error::ErrorKind;
use clap::ArgMatches;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use yansi::Color::Blue;
use yansi::Paint;

use histplot::plot::{self, BarWidthMode, PlotOptions, PlotOptionsBuilder};

#[macro_use]
extern crate log;

mod app;

/// Sets up color choices and verbosity in the two places where we write
/// output: the logger (stderr) and the confirmation line (stdout).
fn configure_output(option: &str, verbose: bool) {
    let mut color_choice = ColorChoice::Auto;
    match option {
        "no" => {
            Paint::disable();
            color_choice = ColorChoice::Never;
        }
        "auto" => match env::var("TERM") {
            Ok(value) if value == "dumb" => {
                Paint::disable();
                color_choice = ColorChoice::Never;
            }
            _ => {
                if !atty::is(atty::Stream::Stdout) {
                    Paint::disable();
                }
            }
        },
        _ => color_choice = ColorChoice::Always,
    };
    let logged = TermLogger::init(
        if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        ConfigBuilder::new()
            .set_time_level(LevelFilter::Trace)
            .set_thread_level(LevelFilter::Trace)
            .set_target_level(LevelFilter::Trace)
            .build(),
        TerminalMode::Stderr,
        color_choice,
    );
    if let Err(error) = logged {
        eprintln!("Could not set up logging: {}", error);
    }
}

fn print_usage() {
    println!(
        "Usage: {} <histogram_file.txt> <title>",
        clap::crate_name!()
    );
}

fn get_options(matches: &ArgMatches) -> Result<PlotOptions, String> {
    let mut builder = PlotOptionsBuilder::default();
    if let Some(title) = matches.get_one::<String>("title") {
        builder.title(title.as_str());
    }
    if let Some(mode) = matches.get_one::<String>("bar-width") {
        builder.mode(mode.parse::<BarWidthMode>()?);
    }
    if let Some(dpi) = matches.get_one::<u32>("dpi") {
        builder.dpi(*dpi);
    }
    builder.build().map_err(|error| error.to_string())
}

fn main() {
    let matches = match app::get_app().try_get_matches() {
        Ok(matches) => matches,
        Err(error) => match error.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => {
                print_usage();
                std::process::exit(1);
            }
            _ => error.exit(),
        },
    };
    configure_output(
        matches
            .get_one::<String>("color")
            .map(String::as_str)
            .unwrap_or("auto"),
        matches.is_present("verbose"),
    );
    let options = match get_options(&matches) {
        Ok(options) => options,
        Err(error) => {
            error!("{}", error);
            std::process::exit(1);
        }
    };
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_default();
    match plot::plot_histogram(input, &options) {
        Ok(output) => println!("Plot saved as {}", Blue.paint(output)),
        Err(error) => {
            error!("{}", error);
            std::process::exit(1);
        }
    }
}
