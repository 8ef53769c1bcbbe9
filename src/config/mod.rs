pub mod toml_config;

use crate::domain::model::{OutputFormat, OverflowPolicy, DEFAULT_TRUNCATE_WIDTH};
use crate::domain::ports::ConfigProvider;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::Operation;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(version)]
#[command(about = "Arithmetic and text utilities with explicit overflow handling")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Overflow policy; overrides the configuration file
    #[arg(long, value_enum, global = true)]
    pub overflow: Option<OverflowPolicy>,

    /// Output format; overrides the configuration file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔並套用命令列覆蓋設定
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                validation::validate_path("config", path)?;
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                Settings::from_toml(&file_config)
            }
            None => Settings::default(),
        };

        if let Some(policy) = self.overflow {
            settings.overflow = policy;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        Ok(settings)
    }
}

/// Effective settings after merging the configuration file with flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub overflow: OverflowPolicy,
    pub format: OutputFormat,
    pub truncate_width: usize,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::default(),
            format: OutputFormat::default(),
            truncate_width: DEFAULT_TRUNCATE_WIDTH,
            log_level: "warn".to_string(),
            log_json: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            overflow: config.overflow_policy(),
            format: config.output_format(),
            truncate_width: config.truncate_width(),
            log_level: config
                .log_level()
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            log_json: config.log_json(),
        }
    }
}

impl ConfigProvider for Settings {
    fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn truncate_width(&self) -> usize {
        self.truncate_width
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_negative_operands() {
        let cli = CliConfig::try_parse_from(["small-calc", "divide", "-7", "2"]).unwrap();
        assert_eq!(cli.operation, Operation::Divide { a: -7, b: 2 });
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[arithmetic]\noverflow = \"wrap\"\n[output]\nformat = \"json\"\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "small-calc",
            "--config",
            path.as_str(),
            "--overflow",
            "saturate",
            "add",
            "1",
            "2",
        ])
        .unwrap();
        let settings = cli.resolve_settings().unwrap();

        assert_eq!(settings.overflow, OverflowPolicy::Saturate);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = CliConfig::try_parse_from(["small-calc", "count-words", "a b"]).unwrap();
        assert_eq!(cli.resolve_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[text]\ntruncate_width = 0\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli =
            CliConfig::try_parse_from(["small-calc", "-c", path.as_str(), "reverse", "abc"])
                .unwrap();
        assert!(cli.resolve_settings().is_err());
    }
}
