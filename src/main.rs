use anyhow::Result;
use bmi_tui::app::App;
use bmi_tui::config::Config;
use bmi_tui::logger::StateLogger;
use clap::{crate_version, App as Cli, Arg};
use log::{info, LevelFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("bmi-tui")
        .version(crate_version!())
        .about("A terminal BMI calculator with a contact form")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (default: ~/.config/bmi-tui)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("endpoint")
                .short("e")
                .long("endpoint")
                .value_name("URL")
                .help("URL the contact form posts to")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("units")
                .short("u")
                .long("units")
                .value_name("UNITS")
                .help("Unit system selected at start")
                .possible_values(&["metric", "imperial"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Show debug messages in the log panel"),
        )
        .get_matches();

    let level = if matches.is_present("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log = StateLogger::init(level)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(path) = config.file_path() {
        info!("Loaded configuration from {}.", path.display());
    }
    config.apply_overrides(matches.value_of("endpoint"), matches.value_of("units"))?;

    App::start(config, log).await
}
