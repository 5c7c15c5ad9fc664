use crate::generator::DuplicatePolicy;
use crate::logging::LogLevel;
use std::path::PathBuf;
use thiserror::Error;

/// Catalog path, relative to the directory the generator runs from.
pub const DEFAULT_INPUT_PATH: &str = "icons.json";
/// Header path, relative to the directory the generator runs from.
pub const DEFAULT_OUTPUT_PATH: &str = "../src/imgui/IconsMaterialCommunity.h";

pub const USAGE: &str = "usage: mdi-codegen [--write|--check] [--input <path>] [--output <path>] \
[--reject-duplicates] [--log-level <trace|debug|info|warn|error>]";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Compare the rendered header with the file on disk; never write.
    Check,
    /// Regenerate and overwrite the header.
    #[default]
    Write,
}

/// Settings for a single generator run. `Default` reproduces the fixed
/// paths used when the tool is invoked without arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: Mode,
    pub duplicates: DuplicatePolicy,
    pub log_level: LogLevel,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            mode: Mode::default(),
            duplicates: DuplicatePolicy::default(),
            log_level: LogLevel::Info,
        }
    }
}

/// Outcome of command-line parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(GeneratorConfig),
    Help,
}

impl GeneratorConfig {
    /// Overlays command-line flags (program name already stripped) onto the defaults.
    pub fn from_args<I, S>(args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--check" => config.mode = Mode::Check,
                "--write" => config.mode = Mode::Write,
                "--input" => config.input = PathBuf::from(require_value(&mut args, "--input")?),
                "--output" => config.output = PathBuf::from(require_value(&mut args, "--output")?),
                "--reject-duplicates" => config.duplicates = DuplicatePolicy::Reject,
                "--log-level" => {
                    let raw = require_value(&mut args, "--log-level")?;
                    config.log_level = raw
                        .parse()
                        .map_err(|_| ConfigError::InvalidLogLevel(raw))?;
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(Invocation::Run(config))
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ConfigError> {
    args.next().ok_or(ConfigError::MissingValue(flag))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}
