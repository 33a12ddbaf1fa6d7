use crate::domain::options::{MalformedLinePolicy, OutputFormat, SourcePolicy};
use crate::utils::error::{ReachError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SOURCE_POLICIES: [&str; 2] = ["last_wins", "strict"];
const MALFORMED_LINE_POLICIES: [&str; 2] = ["abort", "skip"];
const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub parse: Option<ParseConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseConfig {
    pub source_policy: Option<String>,
    pub on_malformed_line: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReachError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReachError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GRID_FILE})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReachError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }

        if let Some(parse) = &self.parse {
            if let Some(policy) = &parse.source_policy {
                validation::validate_one_of("parse.source_policy", policy, &SOURCE_POLICIES)?;
            }
            if let Some(policy) = &parse.on_malformed_line {
                validation::validate_one_of(
                    "parse.on_malformed_line",
                    policy,
                    &MALFORMED_LINE_POLICIES,
                )?;
            }
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_ref()) {
            validation::validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_log_level("monitoring.log_level", level)?;
        }

        Ok(())
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.as_ref()?.path.as_deref()
    }

    /// Only meaningful after [`Validate::validate`]; unknown names read as unset.
    pub fn source_policy(&self) -> Option<SourcePolicy> {
        match self.parse.as_ref()?.source_policy.as_deref()? {
            "last_wins" => Some(SourcePolicy::LastWins),
            "strict" => Some(SourcePolicy::Strict),
            _ => None,
        }
    }

    pub fn malformed_line_policy(&self) -> Option<MalformedLinePolicy> {
        match self.parse.as_ref()?.on_malformed_line.as_deref()? {
            "abort" => Some(MalformedLinePolicy::Abort),
            "skip" => Some(MalformedLinePolicy::Skip),
            _ => None,
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        match self.output.as_ref()?.format.as_deref()? {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref()?.log_level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
path = "grids/plant.txt"

[parse]
source_policy = "strict"
on_malformed_line = "skip"

[output]
format = "json"

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.input_path(), Some("grids/plant.txt"));
        assert_eq!(config.source_policy(), Some(SourcePolicy::Strict));
        assert_eq!(config.malformed_line_policy(), Some(MalformedLinePolicy::Skip));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_empty_config_leaves_everything_unset() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.input_path(), None);
        assert_eq!(config.source_policy(), None);
        assert_eq!(config.output_format(), None);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PIPE_REACH_TEST_INPUT", "/tmp/grid.txt");

        let toml_content = r#"
[input]
path = "${PIPE_REACH_TEST_INPUT}"

[output]
format = "${PIPE_REACH_TEST_UNSET_FORMAT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), Some("/tmp/grid.txt"));
        // unknown variables stay verbatim and then fail validation
        assert!(config.validate().is_err());

        std::env::remove_var("PIPE_REACH_TEST_INPUT");
    }

    #[test]
    fn test_config_validation_rejects_unknown_values() {
        let config = TomlConfig::from_toml_str("[parse]\nsource_policy = \"first_wins\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ReachError::InvalidConfigValueError { .. }));

        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[input]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = TomlConfig::from_toml_str("[extract]\nmax_records = 3\n").unwrap_err();
        assert!(matches!(err, ReachError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npath = \"from-file.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), Some("from-file.txt"));

        assert!(matches!(
            TomlConfig::from_file("/definitely/not/here.toml"),
            Err(ReachError::ConfigError { .. })
        ));
    }
}
