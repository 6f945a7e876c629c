use std::env;
use std::path::Path;

use clap::ArgMatches;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use yansi::Color::{Green, Red};
use yansi::Paint;

use countycharts::render::Artifact;
use countycharts::reports;

mod app;

fn disable_color_if_needed(option: &str) {
    match option {
        "no" => Paint::disable(),
        "auto" => match env::var("TERM") {
            Ok(value) if value == "dumb" => Paint::disable(),
            _ => {
                if !atty::is(atty::Stream::Stdout) {
                    Paint::disable();
                }
            }
        },
        _ => (),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();
}

fn run(name: &str, matches: &ArgMatches) -> countycharts::Result<Vec<Artifact>> {
    let out_dir = Path::new(matches.value_of("out-dir").unwrap());
    reports::prepare_out_dir(out_dir)?;
    match name {
        "demographics" => reports::demographics::generate(out_dir),
        "population" => reports::population::generate(out_dir),
        "income" => reports::income::generate(out_dir),
        "employment" => reports::employment::generate(out_dir),
        "real-estate" => reports::real_estate::generate(out_dir),
        "all" => reports::generate_all(out_dir),
        _ => unreachable!("Invalid subcommand"),
    }
}

fn main() {
    let matches = app::get_app().get_matches();
    if let Some(c) = matches.value_of("color") {
        disable_color_if_needed(c);
    }
    init_logging(matches.is_present("verbose"));
    let (name, subcommand_matches) = match matches.subcommand() {
        Some(pair) => pair,
        None => unreachable!("Invalid subcommand"),
    };
    match run(name, subcommand_matches) {
        Ok(artifacts) => {
            for artifact in &artifacts {
                println!("[{}] {}", Green.paint("OK"), artifact.path.display());
            }
        }
        Err(error) => {
            eprintln!("[{}] {}", Red.paint("ERROR"), error);
            std::process::exit(1);
        }
    }
}
