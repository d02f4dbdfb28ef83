use crate::utils::error::{RelocateError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Job file layout. Every field may also come from the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub relocation: RelocationSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelocationSection {
    pub source_dir: Option<String>,
    pub destination_dir: Option<String>,
    pub files: Option<Vec<String>>,
    pub list_from: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| RelocateError::ConfigError {
                message: format!("cannot read job file {}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RelocateError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RelocateError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性；缺少的欄位留給命令列補上
    pub fn validate_config(&self) -> Result<()> {
        let section = &self.relocation;

        if let Some(source) = &section.source_dir {
            validation::validate_path("relocation.source_dir", source)?;
        }
        if let Some(destination) = &section.destination_dir {
            validation::validate_path("relocation.destination_dir", destination)?;
        }
        if let Some(list_from) = &section.list_from {
            validation::validate_path("relocation.list_from", list_from)?;
        }
        if let Some(files) = &section.files {
            validation::validate_file_names("relocation.files", files)?;
        }

        if section.files.is_some() && section.list_from.is_some() {
            return Err(RelocateError::ValidationError {
                message: "relocation.files and relocation.list_from are mutually exclusive"
                    .to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
