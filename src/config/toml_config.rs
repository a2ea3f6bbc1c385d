use crate::core::ConfigProvider;
use crate::domain::model::Strategy;
use crate::utils::error::{EnumError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub enumeration: EnumerationConfig,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumerationConfig {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub depth: Option<u32>,
    pub strategy: Option<Strategy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub max_lines: Option<u64>,
    pub metrics_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EnumError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EnumError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DIGIT_PREFIX})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EnumError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let depth = validation::validate_required_field("enumeration.depth", &self.enumeration.depth)?;
        validation::validate_depth("enumeration.depth", *depth)?;

        if let Some(prefix) = &self.enumeration.prefix {
            validation::validate_prefix("enumeration.prefix", prefix)?;
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                validation::validate_path("output.path", path)?;
            }
            if let Some(max_lines) = output.max_lines {
                validation::validate_positive_number("output.max_lines", max_lines, 1)?;
            }
            if let Some(metrics_file) = &output.metrics_file {
                validation::validate_path("output.metrics_file", metrics_file)?;
            }
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(EnumError::InvalidConfigValueError {
                    field: "monitoring.log_level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        self.enumeration.name.as_deref().unwrap_or("digit-enum")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    fn output(&self) -> Option<&OutputConfig> {
        self.output.as_ref()
    }
}

impl ConfigProvider for TomlConfig {
    fn prefix(&self) -> &str {
        self.enumeration.prefix.as_deref().unwrap_or("")
    }

    fn depth(&self) -> u32 {
        // presence is enforced by validate_config
        self.enumeration.depth.unwrap_or(1)
    }

    fn strategy(&self) -> Strategy {
        self.enumeration.strategy.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output().and_then(|o| o.path.as_deref())
    }

    fn max_lines(&self) -> Option<u64> {
        self.output().and_then(|o| o.max_lines)
    }

    fn metrics_file(&self) -> Option<&str> {
        self.output().and_then(|o| o.metrics_file.as_deref())
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
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[enumeration]
name = "ids"
prefix = "id-"
depth = 3
strategy = "recursive"

[output]
path = "./out/ids.txt"
max_lines = 5000
metrics_file = "./out/metrics.json"

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.name(), "ids");
        assert_eq!(config.prefix(), "id-");
        assert_eq!(config.depth(), 3);
        assert_eq!(config.strategy(), Strategy::Recursive);
        assert_eq!(config.output_path(), Some("./out/ids.txt"));
        assert_eq!(config.max_lines(), Some(5000));
        assert_eq!(config.metrics_file(), Some("./out/metrics.json"));
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = TomlConfig::from_toml_str("[enumeration]\ndepth = 2\n").unwrap();

        assert_eq!(config.name(), "digit-enum");
        assert_eq!(config.prefix(), "");
        assert_eq!(config.strategy(), Strategy::Iterative);
        assert_eq!(config.output_path(), None);
        assert_eq!(config.max_lines(), None);
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DIGIT_ENUM_TEST_PREFIX", "env-");

        let toml_content = r#"
[enumeration]
prefix = "${DIGIT_ENUM_TEST_PREFIX}"
depth = 1
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.prefix(), "env-");

        std::env::remove_var("DIGIT_ENUM_TEST_PREFIX");
    }

    #[test]
    fn test_unknown_env_var_is_left_intact() {
        let toml_content = r#"
[enumeration]
prefix = "${DIGIT_ENUM_SURELY_UNSET_VAR}"
depth = 1
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.prefix(), "${DIGIT_ENUM_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let missing_depth = TomlConfig::from_toml_str("[enumeration]\nprefix = \"a\"\n").unwrap();
        assert!(matches!(
            missing_depth.validate(),
            Err(EnumError::MissingConfigError { .. })
        ));

        let too_deep = TomlConfig::from_toml_str("[enumeration]\ndepth = 40\n").unwrap();
        assert!(too_deep.validate().is_err());

        let bad_level = TomlConfig::from_toml_str(
            "[enumeration]\ndepth = 1\n[monitoring]\nenabled = false\nlog_level = \"loud\"\n",
        )
        .unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[enumeration\ndepth = 1").unwrap_err();
        assert!(matches!(err, EnumError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[enumeration]\nname = \"file-test\"\ndepth = 2\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), "file-test");
        assert_eq!(config.depth(), 2);
    }
}
