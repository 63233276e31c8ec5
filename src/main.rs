mod core;
mod monitor;
mod report;
mod util;

use crate::core::DisplayConfig;
use crate::monitor::MetricPaths;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(author, about, long_about = None)]
struct Cli {
    /// View everything: model, frequency range, current clock and temperature
    #[clap(short, long)]
    verbose: bool,

    /// Report the temperature in Fahrenheit (implies --temp)
    #[clap(short, long)]
    fahrenheit: bool,

    /// Print the version banner
    #[clap(short = 'V', long)]
    version: bool,

    /// Show the current CPU temperature
    #[clap(short, long)]
    temp: bool,

    /// Show the current CPU clock speed in MHz
    #[clap(short, long)]
    mhz: bool,
}

impl Cli {
    fn display_config(&self) -> DisplayConfig {
        DisplayConfig {
            show_all: self.verbose,
            // Asking for Fahrenheit is asking for the temperature.
            show_temperature: self.temp || self.fahrenheit,
            show_current_frequency: self.mhz,
            show_version: self.version,
            use_fahrenheit: self.fahrenheit,
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = cli.display_config();

    if config.selects_nothing() {
        // Running with nothing to show is a usage error, not a silent no-op.
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "nothing selected; pass at least one of -v, -t, -m, -V",
            )
            .exit();
    }

    let snapshot = monitor::collect_snapshot(&config, &MetricPaths::default());
    print!("{}", report::render_report(&config, &snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> DisplayConfig {
        Cli::try_parse_from(args)
            .expect("arguments should parse")
            .display_config()
    }

    #[test]
    fn verbose_selects_the_full_report() {
        let config = parse(&["picpu", "-v"]);
        assert!(config.show_all);
        assert!(!config.show_version);
        assert!(!config.use_fahrenheit);
        assert!(!config.selects_nothing());
    }

    #[test]
    fn each_flag_maps_to_its_section() {
        assert!(parse(&["picpu", "-t"]).show_temperature);
        assert!(parse(&["picpu", "-m"]).show_current_frequency);
        assert!(parse(&["picpu", "-V"]).show_version);
        assert!(parse(&["picpu", "--temp"]).show_temperature);
        assert!(parse(&["picpu", "--mhz"]).show_current_frequency);
    }

    #[test]
    fn fahrenheit_implies_temperature() {
        let config = parse(&["picpu", "-f"]);
        assert!(config.use_fahrenheit);
        assert!(config.show_temperature);
        assert!(!config.selects_nothing());
    }

    #[test]
    fn flags_combine_independently() {
        let config = parse(&["picpu", "-t", "-m"]);
        assert!(config.show_temperature);
        assert!(config.show_current_frequency);
        assert!(!config.show_all);

        let config = parse(&["picpu", "-V", "-f", "-m"]);
        assert!(config.show_version);
        assert!(config.use_fahrenheit);
        assert!(config.show_temperature);
        assert!(config.show_current_frequency);
    }

    #[test]
    fn no_arguments_selects_nothing() {
        assert!(parse(&["picpu"]).selects_nothing());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["picpu", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        let err = Cli::try_parse_from(["picpu", "temp"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_short_circuits_parsing() {
        let err = Cli::try_parse_from(["picpu", "-h", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
