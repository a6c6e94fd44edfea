//! Command-line surface
//!
//! Flags are written Go-style (`-url=http://...`, `-all`). They are rewritten
//! to the double-dash form before clap sees them, so both spellings work.

use std::ffi::OsString;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};

use crate::duration::parse_timeout;

const USAGE_EXAMPLES: &str = "\
Examples:
  pokego http -url=http://localhost:8080/-/reload
  pokego sighup -name=myapp

Use 'pokego <command> -h' for more information about a command.";

/// Flags that take a value; `-name value` consumes the next token as-is
const VALUE_FLAGS: &[&str] = &["url", "timeout", "name"];

const HTTP_EXAMPLES: &str = "\
Examples:
  pokego http -url=http://localhost:8080/-/reload
  pokego http -url=http://localhost:9090/-/reload";

const SIGHUP_EXAMPLES: &str = "\
Examples:
  pokego sighup -name=myapp
  pokego sighup -name=custom-exporter -all";

#[derive(Parser, Debug)]
#[command(name = "pokego")]
#[command(about = "pokego - Poke your processes to reload them")]
#[command(disable_version_flag = true)]
#[command(after_help = USAGE_EXAMPLES)]
pub struct Args {
    /// Show version information
    #[arg(long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Send POST request to reload endpoint
    #[command(after_help = HTTP_EXAMPLES)]
    Http {
        /// URL to send POST request to (required)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        url: String,

        /// Request timeout
        #[arg(long, default_value = "30s", value_parser = parse_timeout, allow_hyphen_values = true)]
        timeout: Duration,

        /// Enable verbose output
        #[arg(
            long,
            action = ArgAction::Set,
            num_args = 0..=1,
            require_equals = true,
            default_value_t = false,
            default_missing_value = "true"
        )]
        verbose: bool,
    },

    /// Send SIGHUP signal to process by name
    #[command(after_help = SIGHUP_EXAMPLES)]
    Sighup {
        /// Process name to send SIGHUP to (required)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        name: String,

        /// Send signal to all matching processes
        #[arg(
            long,
            action = ArgAction::Set,
            num_args = 0..=1,
            require_equals = true,
            default_value_t = false,
            default_missing_value = "true"
        )]
        all: bool,

        /// Enable verbose output
        #[arg(
            long,
            action = ArgAction::Set,
            num_args = 0..=1,
            require_equals = true,
            default_value_t = false,
            default_missing_value = "true"
        )]
        verbose: bool,
    },
}

impl Command {
    /// Sub-command name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Http { .. } => "http",
            Command::Sighup { .. } => "sighup",
        }
    }

    /// The required input is present and non-empty
    pub fn has_required(&self) -> bool {
        match self {
            Command::Http { url, .. } => !url.is_empty(),
            Command::Sighup { name, .. } => !name.is_empty(),
        }
    }
}

/// Rewrite single-dash long flags (`-url=x`) to `--url=x`.
///
/// The program name is left alone, as are short flags (`-h`), the value
/// token after a value flag written without `=` (`-name -foo`), and
/// everything after a bare `--`.
pub fn normalize_flags<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut value_next = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough || value_next {
            value_next = false;
            out.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (flag, inline_value) = match s.split_once('=') {
            Some((flag, _)) => (flag, true),
            None => (s, false),
        };
        if !inline_value && flag.starts_with('-') {
            value_next = VALUE_FLAGS.contains(&flag.trim_start_matches('-'));
        }

        if flag.len() > 2 && flag.starts_with('-') && !flag.starts_with("--") {
            out.push(OsString::from(format!("-{s}")));
        } else {
            out.push(arg);
        }
    }

    out
}

impl Args {
    /// Parse after rewriting Go-style flags
    pub fn try_parse_normalized<I, S>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Args::try_parse_from(normalize_flags(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_normalized(args.iter().copied())
    }

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_normalize_single_dash() {
        let out = normalize_flags(["pokego", "http", "-url=http://x/", "-verbose", "-h"]);
        assert_eq!(out, os(&["pokego", "http", "--url=http://x/", "--verbose", "-h"]));
    }

    #[test]
    fn test_normalize_leaves_values_and_passthrough() {
        let out = normalize_flags(["pokego", "sighup", "--name", "myapp", "--", "-all"]);
        assert_eq!(out, os(&["pokego", "sighup", "--name", "myapp", "--", "-all"]));
    }

    #[test]
    fn test_normalize_leaves_flag_like_values() {
        let out = normalize_flags(["pokego", "sighup", "-name", "-foo", "-all"]);
        assert_eq!(out, os(&["pokego", "sighup", "--name", "-foo", "--all"]));

        let out = normalize_flags(["pokego", "http", "-url", "-x", "-timeout", "-verbose"]);
        assert_eq!(out, os(&["pokego", "http", "--url", "-x", "--timeout", "-verbose"]));
    }

    #[test]
    fn test_dash_prefixed_name_value() {
        let args = parse(&["pokego", "sighup", "-name", "-foo", "-all"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Sighup {
                name: "-foo".into(),
                all: true,
                verbose: false,
            })
        );
    }

    #[test]
    fn test_http_defaults() {
        let args = parse(&["pokego", "http", "-url=http://localhost:8080/-/reload"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Http {
                url: "http://localhost:8080/-/reload".into(),
                timeout: Duration::from_secs(30),
                verbose: false,
            })
        );
    }

    #[test]
    fn test_http_timeout_and_verbose() {
        let args = parse(&["pokego", "http", "-url", "http://x/", "-timeout=1m30s", "-verbose"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Http {
                url: "http://x/".into(),
                timeout: Duration::from_secs(90),
                verbose: true,
            })
        );
    }

    #[test]
    fn test_http_rejects_bad_timeout() {
        assert!(parse(&["pokego", "http", "-url=http://x/", "-timeout=0s"]).is_err());
        assert!(parse(&["pokego", "http", "-url=http://x/", "-timeout=soon"]).is_err());
        assert!(parse(&["pokego", "http", "-url=http://x/", "-timeout=30"]).is_err());
    }

    #[test]
    fn test_sighup_flags() {
        let args = parse(&["pokego", "sighup", "-name=exporter", "-all"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Sighup {
                name: "exporter".into(),
                all: true,
                verbose: false,
            })
        );

        let args = parse(&["pokego", "sighup", "--name=exporter", "-all=false", "-verbose=true"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Sighup {
                name: "exporter".into(),
                all: false,
                verbose: true,
            })
        );
    }

    #[test]
    fn test_bool_flag_does_not_consume_next_token() {
        let args = parse(&["pokego", "sighup", "-all", "-name=myapp"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Sighup {
                name: "myapp".into(),
                all: true,
                verbose: false,
            })
        );
    }

    #[test]
    fn test_missing_required_is_detected() {
        let args = parse(&["pokego", "sighup"]).unwrap();
        let command = args.command.unwrap();
        assert_eq!(command.name(), "sighup");
        assert!(!command.has_required());

        let args = parse(&["pokego", "http", "-url="]).unwrap();
        assert!(!args.command.unwrap().has_required());
    }

    #[test]
    fn test_version_flag() {
        assert!(parse(&["pokego", "-version"]).unwrap().version);
        assert!(parse(&["pokego", "--version"]).unwrap().version);
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse(&["pokego", "restart"]).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse(&["pokego", "http", "-url=http://x/", "-method=GET"]).is_err());
    }
}
