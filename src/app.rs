use clap::{self, App, AppSettings, Arg};

fn add_out_dir(app: App) -> App {
    app.arg(
        Arg::new("out-dir")
            .long("out-dir")
            .short('o')
            .help("Write CSV and PNG artifacts into this directory")
            .default_value(".")
            .takes_value(true),
    )
}

fn report(name: &'static str, about: &'static str) -> App<'static> {
    add_out_dir(App::new(name).version(clap::crate_version!()).about(about))
}

pub fn get_app() -> App<'static> {
    App::new("countycharts")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .max_term_width(100)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::new("color")
                .short('c')
                .long("color")
                .help("Use colors in the output")
                .possible_values(["auto", "no", "yes"])
                .default_value("auto")
                .takes_value(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Be more verbose")
                .takes_value(false),
        )
        .subcommand(report(
            "demographics",
            "Age distribution by generation for Harris County",
        ))
        .subcommand(report(
            "population",
            "Population growth, migration components and suburban counties",
        ))
        .subcommand(report(
            "income",
            "Income by race-ethnicity and top-income zip codes",
        ))
        .subcommand(report(
            "employment",
            "Job change by sector for the Houston metro",
        ))
        .subcommand(report(
            "real-estate",
            "Submarket rental rates and multifamily market trends",
        ))
        .subcommand(report("all", "Generate every report"))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn report_subcommand_arg_parsing() {
        let arg_vec = vec!["countycharts", "--verbose", "demographics", "-o", "out"];
        let m = get_app().get_matches_from(arg_vec);
        assert!(m.is_present("verbose"));
        if let Some(sub_m) = m.subcommand_matches("demographics") {
            assert_eq!("out", sub_m.value_of("out-dir").unwrap());
        } else {
            panic!("Subcommand `demographics` not detected");
        }
    }

    #[test]
    fn out_dir_defaults_to_cwd() {
        let arg_vec = vec!["countycharts", "all"];
        let m = get_app().get_matches_from(arg_vec);
        assert!(!m.is_present("verbose"));
        if let Some(sub_m) = m.subcommand_matches("all") {
            assert_eq!(".", sub_m.value_of("out-dir").unwrap());
        } else {
            panic!("Subcommand `all` not detected");
        }
    }

    #[test]
    fn color_flag_parsing() {
        let arg_vec = vec!["countycharts", "--color", "no", "income"];
        let m = get_app().get_matches_from(arg_vec);
        assert_eq!("no", m.value_of("color").unwrap());
        assert!(m.subcommand_matches("income").is_some());
    }
}
