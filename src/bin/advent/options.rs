use std::path::{Path, PathBuf};
use std::time::Duration;

use advent::SearchLimits;
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

const DEFAULT_INPUT_DIR: &str = "inputs";

pub(crate) struct Options {
    day: u8,
    input: PathBuf,
    limits: SearchLimits,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let day = matches.value_of("day").unwrap_or_default();
        let day: u8 = day
            .parse()
            .with_context(|| format!("invalid day \"{}\"", day))?;
        let input = match matches.value_of("input") {
            Some(path) => path.into(),
            None => default_input(day),
        };
        let mut limits = SearchLimits::default();
        if let Some(max_attempts) = matches.value_of("max_attempts") {
            limits.max_attempts = max_attempts
                .parse()
                .map_err(|_| anyhow!("invalid attempt limit \"{}\"", max_attempts))?;
        }
        if let Some(max_runtime) = matches.value_of("max_runtime") {
            let secs = max_runtime
                .parse()
                .map_err(|_| anyhow!("invalid runtime limit \"{}\"", max_runtime))?;
            limits.max_runtime = Duration::from_secs(secs);
        }
        Ok(Self { day, input, limits })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }
}

fn default_input(day: u8) -> PathBuf {
    Path::new(DEFAULT_INPUT_DIR).join(format!("day{}.txt", day))
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("Advent")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .help_message("Solve daily puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("day")
                .required(true)
                .value_name("DAY")
                .possible_values(&["4", "5", "6", "9", "10", "11", "12"])
                .help("the puzzle to solve"),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read the puzzle input from a file (default inputs/day<DAY>.txt)"),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .takes_value(true)
                .value_name("N")
                .help("give up on a day 12 region after this many placements"),
        )
        .arg(
            Arg::with_name("max_runtime")
                .long("max-runtime")
                .takes_value(true)
                .value_name("SECS")
                .help("give up on a day 12 region after this many seconds"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> Result<Options> {
        let matches = clap_app().get_matches_from_safe(args)?;
        Options::from_arg_matches(&matches)
    }

    #[test]
    fn default_input_path() {
        let options = options(&["advent", "9"]).unwrap();
        assert_eq!(9, options.day());
        assert_eq!(PathBuf::from("inputs").join("day9.txt"), options.input());
        assert_eq!(
            SearchLimits::DEFAULT_MAX_ATTEMPTS,
            options.limits().max_attempts
        );
    }

    #[test]
    fn search_limits() {
        let args = ["advent", "12", "-i", "in.txt", "--max-attempts", "50", "--max-runtime", "2"];
        let options = options(&args).unwrap();
        assert_eq!(PathBuf::from("in.txt"), options.input());
        assert_eq!(50, options.limits().max_attempts);
        assert_eq!(Duration::from_secs(2), options.limits().max_runtime);
    }

    #[test]
    fn unknown_day() {
        assert!(options(&["advent", "3"]).is_err());
    }

    #[test]
    fn invalid_limit() {
        assert!(options(&["advent", "12", "--max-attempts", "many"]).is_err());
    }
}
