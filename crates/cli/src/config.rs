// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use spots_dates::{FormatError, format_instant, resolve_timezone};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Spots - inspect a saved parking availability payload
#[derive(Parser, Debug)]
#[command(name = "spots", author, version, about, long_about = None)]
pub struct Args {
    /// Path to a saved availability payload. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Time zone for absolute timestamps (IANA name or abbreviation such as PST)
    #[arg(short = 'z', long, default_value = "UTC")]
    pub timezone: String,

    /// strftime pattern for absolute timestamps
    #[arg(short = 'f', long, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Phrase single units as words ("Yesterday") instead of "1 day ago"
    #[arg(short, long)]
    pub words: bool,

    /// Print the decoded response as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// Validates the display flags.
    ///
    /// The pattern is checked up front by formatting the current time, so
    /// a bad pattern fails before any payload is read.
    pub fn render_options(&self) -> Result<RenderOptions, FormatError> {
        let timezone = resolve_timezone(&self.timezone)?;
        format_instant(Utc::now(), &self.date_format, &self.timezone)?;

        Ok(RenderOptions {
            timezone,
            timezone_name: self.timezone.clone(),
            date_format: self.date_format.clone(),
            numeric_dates: !self.words,
        })
    }
}

/// Validated settings for the text summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub timezone: Tz,
    pub timezone_name: String,
    pub date_format: String,
    pub numeric_dates: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["spots"]).unwrap();
        let options = args.render_options().unwrap();

        assert_eq!(args.input, None);
        assert!(!args.json);
        assert_eq!(args.log_level(), LevelFilter::INFO);
        assert_eq!(options.timezone, chrono_tz::UTC);
        assert_eq!(options.date_format, DEFAULT_DATE_FORMAT);
        assert!(options.numeric_dates);
    }

    #[test]
    fn test_words_and_zone() {
        let args =
            Args::try_parse_from(["spots", "-w", "-z", "PST", "-vv", "payload.json"]).unwrap();
        let options = args.render_options().unwrap();

        assert_eq!(args.input, Some(PathBuf::from("payload.json")));
        assert_eq!(args.log_level(), LevelFilter::TRACE);
        assert_eq!(options.timezone, chrono_tz::America::Los_Angeles);
        assert_eq!(options.timezone_name, "PST");
        assert!(!options.numeric_dates);
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        let args = Args::try_parse_from(["spots", "--timezone", "Moon/Base"]).unwrap();
        assert!(matches!(
            args.render_options(),
            Err(FormatError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        let args = Args::try_parse_from(["spots", "--date-format", "%Q"]).unwrap();
        assert_eq!(
            args.render_options(),
            Err(FormatError::InvalidPattern(String::from("%Q")))
        );
    }
}
