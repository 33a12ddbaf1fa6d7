pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::options::{LoaderOptions, OutputFormat};
#[cfg(feature = "cli")]
use crate::domain::options::{MalformedLinePolicy, SourcePolicy};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use self::toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "pipe-reach")]
#[command(about = "Report which labeled sinks are connected to the source through pipes")]
pub struct CliConfig {
    /// Grid file with one `<tag> <x> <y>` record per line [default: input.txt]
    pub input: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail when the input contains more than one source record
    #[arg(long)]
    pub strict_source: bool,

    /// Skip malformed lines with a warning instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges flags over the optional TOML file over built-in defaults.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let input_path = self
            .input
            .clone()
            .or_else(|| file.input_path().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));

        let source_policy = if self.strict_source {
            SourcePolicy::Strict
        } else {
            file.source_policy().unwrap_or_default()
        };
        let malformed_lines = if self.skip_malformed {
            MalformedLinePolicy::Skip
        } else {
            file.malformed_line_policy().unwrap_or_default()
        };

        let config = RunConfig {
            input_path,
            options: LoaderOptions {
                source_policy,
                malformed_lines,
            },
            format: self
                .format
                .or_else(|| file.output_format())
                .unwrap_or_default(),
            monitor: self.monitor || file.monitoring_enabled(),
            log_level: file.log_level().map(str::to_string),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub options: LoaderOptions,
    pub format: OutputFormat,
    pub monitor: bool,
    pub log_level: Option<String>,
}

impl RunConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            options: LoaderOptions::default(),
            format: OutputFormat::default(),
            monitor: false,
            log_level: None,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input_path.to_string_lossy())
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn loader_options(&self) -> LoaderOptions {
        self.options
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let config = CliConfig::parse_from(["pipe-reach"]).resolve().unwrap();
        assert_eq!(config, RunConfig::new(DEFAULT_INPUT_PATH));
    }

    #[test]
    fn test_flags_parse() {
        let cli = CliConfig::parse_from([
            "pipe-reach",
            "grid.txt",
            "--strict-source",
            "--skip-malformed",
            "--format",
            "json",
            "--monitor",
        ]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.input_path, PathBuf::from("grid.txt"));
        assert_eq!(config.options.source_policy, SourcePolicy::Strict);
        assert_eq!(config.options.malformed_lines, MalformedLinePolicy::Skip);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.monitor);
    }

    #[test]
    fn test_flags_override_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[input]\npath = \"from-toml.txt\"\n[parse]\non_malformed_line = \"skip\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let config = CliConfig::parse_from(["pipe-reach", "--config", &config_path])
            .resolve()
            .unwrap();
        assert_eq!(config.input_path, PathBuf::from("from-toml.txt"));
        assert_eq!(config.options.malformed_lines, MalformedLinePolicy::Skip);
        assert_eq!(config.format, OutputFormat::Json);

        let config = CliConfig::parse_from([
            "pipe-reach",
            "cli.txt",
            "--config",
            &config_path,
            "--format",
            "text",
        ])
        .resolve()
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("cli.txt"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_toml_value_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[parse]\nsource_policy = \"sometimes\"\n").unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let err = CliConfig::parse_from(["pipe-reach", "--config", &config_path])
            .resolve()
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
