#![forbid(unsafe_code)]

//! Command-line argument parsing for the college table.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `CTAB_DEMO_*` prefix; explicit flags win.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
ctab: browse a college dataset in the terminal

USAGE:
    ctab [OPTIONS]

OPTIONS:
    --data=PATH          JSON array of colleges (default: built-in sample)
    --seed=N             Seed for the row icons (default: time-based)
    --log=PATH           Write logs to PATH (filter with RUST_LOG)
    --no-mouse           Disable mouse event capture
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    typing               Edit the search box; the table filters as you type
    Ctrl+U / Ctrl+W      Clear the search / delete the previous word
    Up / Down            Scroll one row
    PgUp / PgDn          Scroll one page
    Home / End           Jump to the first / last loaded row
    click a header       Sort by that column; click again to reverse
    Esc / Ctrl+C         Quit

Scrolling to the bottom loads the next 10 rows.

ENVIRONMENT VARIABLES:
    CTAB_DEMO_DATA       Override --data
    CTAB_DEMO_SEED       Override --seed
    CTAB_DEMO_LOG        Override --log
    RUST_LOG             Log filter (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Dataset file; `None` uses the built-in sample.
    pub data: Option<PathBuf>,
    /// Icon seed; `None` picks one from the clock.
    pub seed: Option<u64>,
    /// Log file; `None` disables logging.
    pub log: Option<PathBuf>,
    /// Whether mouse events are enabled.
    pub mouse: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            data: None,
            seed: None,
            log: None,
            mouse: true,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the table.
    Run(Opts),
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

/// A bad command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A flag value that does not parse.
    InvalidValue {
        /// The flag, e.g. `--seed`.
        flag: &'static str,
        /// What was given.
        value: String,
    },
    /// An argument that is not a known flag.
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            CliError::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl Opts {
    /// Parse the process arguments and environment.
    ///
    /// Prints help or version and exits when asked; prints the error and
    /// exits with status 1 on a bad command line.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("ctab {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` (without the program name), reading environment
    /// overrides through `env`.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags. An unparsable environment
    /// value is ignored; an unparsable flag is an error.
    pub fn parse_from<I, S>(
        args: I,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("CTAB_DEMO_DATA") {
            opts.data = Some(PathBuf::from(val));
        }
        if let Some(val) = env("CTAB_DEMO_SEED")
            && let Ok(n) = val.parse()
        {
            opts.seed = Some(n);
        }
        if let Some(val) = env("CTAB_DEMO_LOG") {
            opts.log = Some(PathBuf::from(val));
        }

        // Parse command-line args (override env vars)
        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--no-mouse" => opts.mouse = false,
                other => {
                    if let Some(val) = other.strip_prefix("--data=") {
                        opts.data = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        let seed = val.parse().map_err(|_| CliError::InvalidValue {
                            flag: "--seed",
                            value: val.to_string(),
                        })?;
                        opts.seed = Some(seed);
                    } else if let Some(val) = other.strip_prefix("--log=") {
                        opts.log = Some(PathBuf::from(val));
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}
