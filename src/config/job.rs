use crate::adapters::LocalFs;
use crate::config::toml_config::{LoggingConfig, TomlConfig};
use crate::core::manifest::FileSource;
use crate::core::relocator::Relocator;
use crate::domain::ports::FileMover;
use crate::utils::error::{RelocateError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

/// Values given on the command line. They take precedence over the job file.
#[derive(Debug, Clone, Default)]
pub struct JobOverrides {
    pub source_dir: Option<String>,
    pub destination_dir: Option<String>,
    pub files: Vec<String>,
    pub list_from: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

/// A fully resolved relocation: where from, where to, and which names.
#[derive(Debug, Clone)]
pub struct RelocationJob {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub files: FileSource,
    pub logging: LoggingConfig,
}

impl RelocationJob {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        files: FileSource,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
            files,
            logging: LoggingConfig::default(),
        }
    }

    /// Merges the optional job file with command-line overrides and validates the result.
    pub fn resolve(file: Option<TomlConfig>, overrides: JobOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();
        file.validate()?;
        let section = file.relocation;

        let source_dir = overrides.source_dir.or(section.source_dir);
        let source_dir = validation::validate_required_field("source_dir", &source_dir)?;

        let destination_dir = overrides.destination_dir.or(section.destination_dir);
        let destination_dir =
            validation::validate_required_field("destination_dir", &destination_dir)?;

        // 命令列有指定檔案來源時整個取代檔案中的設定，不做合併
        let cli_selects_files = !overrides.files.is_empty() || overrides.list_from.is_some();
        let (files, list_from) = if cli_selects_files {
            (Some(overrides.files).filter(|f| !f.is_empty()), overrides.list_from)
        } else {
            (section.files, section.list_from)
        };

        let files = match (files, list_from) {
            (Some(_), Some(_)) => {
                return Err(RelocateError::ValidationError {
                    message: "an explicit file list and --list-from cannot be combined".to_string(),
                })
            }
            (Some(names), None) => FileSource::Explicit(names),
            (None, Some(dir)) => {
                validation::validate_path("list_from", &dir)?;
                FileSource::ListDir(PathBuf::from(dir))
            }
            (None, None) => FileSource::default(),
        };

        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: overrides.log_level.or(file_logging.level),
            format: overrides.log_format.or(file_logging.format),
        };

        let job = Self {
            source_dir: PathBuf::from(source_dir),
            destination_dir: PathBuf::from(destination_dir),
            files,
            logging,
        };
        job.validate()?;
        Ok(job)
    }

    /// Runs against the local filesystem.
    pub fn run(&self) -> Result<()> {
        self.run_with(&Relocator::<LocalFs>::default())
    }

    pub fn run_with<M: FileMover>(&self, relocator: &Relocator<M>) -> Result<()> {
        let names = self.files.resolve()?;
        tracing::info!(
            "Relocating {} entries from {} to {}",
            names.len(),
            self.source_dir.display(),
            self.destination_dir.display()
        );
        relocator.relocate(&names, &self.source_dir, &self.destination_dir)
    }
}

impl Validate for RelocationJob {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source_dir", &self.source_dir.to_string_lossy())?;
        validation::validate_path("destination_dir", &self.destination_dir.to_string_lossy())?;
        if let FileSource::Explicit(names) = &self.files {
            validation::validate_file_names("files", names)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(toml: &str) -> Option<TomlConfig> {
        Some(TomlConfig::from_toml_str(toml).unwrap())
    }

    #[test]
    fn test_resolve_from_overrides_only() {
        let overrides = JobOverrides {
            source_dir: Some("/src".to_string()),
            destination_dir: Some("/dst".to_string()),
            files: vec!["a.txt".to_string(), "b.txt".to_string()],
            ..Default::default()
        };

        let job = RelocationJob::resolve(None, overrides).unwrap();

        assert_eq!(job.source_dir, PathBuf::from("/src"));
        assert_eq!(job.destination_dir, PathBuf::from("/dst"));
        assert_eq!(
            job.files,
            FileSource::Explicit(vec!["a.txt".to_string(), "b.txt".to_string()])
        );
    }

    #[test]
    fn test_no_files_means_empty_list() {
        let overrides = JobOverrides {
            source_dir: Some("/src".to_string()),
            destination_dir: Some("/dst".to_string()),
            ..Default::default()
        };

        let job = RelocationJob::resolve(None, overrides).unwrap();
        assert_eq!(job.files, FileSource::Explicit(vec![]));
    }

    #[test]
    fn test_missing_destination() {
        let overrides = JobOverrides {
            source_dir: Some("/src".to_string()),
            ..Default::default()
        };

        let err = RelocationJob::resolve(None, overrides).unwrap_err();
        assert!(
            matches!(err, RelocateError::MissingConfigError { ref field } if field == "destination_dir")
        );
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = file_config(
            r#"
[relocation]
source_dir = "/file-src"
destination_dir = "/file-dst"
list_from = "/file-listing"

[logging]
level = "warn"
format = "json"
"#,
        );
        let overrides = JobOverrides {
            destination_dir: Some("/cli-dst".to_string()),
            files: vec!["only.txt".to_string()],
            log_level: Some("trace".to_string()),
            ..Default::default()
        };

        let job = RelocationJob::resolve(file, overrides).unwrap();

        assert_eq!(job.source_dir, PathBuf::from("/file-src"));
        assert_eq!(job.destination_dir, PathBuf::from("/cli-dst"));
        // the CLI list replaces the file's list_from rather than conflicting with it
        assert_eq!(job.files, FileSource::Explicit(vec!["only.txt".to_string()]));
        assert_eq!(job.logging.level.as_deref(), Some("trace"));
        assert_eq!(job.logging.format, Some(LogFormat::Json));
    }

    #[test]
    fn test_file_list_from() {
        let file = file_config(
            r#"
[relocation]
source_dir = "/src"
destination_dir = "/dst"
list_from = "/listing"
"#,
        );

        let job = RelocationJob::resolve(file, JobOverrides::default()).unwrap();
        assert_eq!(job.files, FileSource::ListDir(PathBuf::from("/listing")));
    }

    #[test]
    fn test_cli_files_and_list_from_conflict() {
        let overrides = JobOverrides {
            source_dir: Some("/src".to_string()),
            destination_dir: Some("/dst".to_string()),
            files: vec!["a.txt".to_string()],
            list_from: Some("/listing".to_string()),
            ..Default::default()
        };

        let err = RelocationJob::resolve(None, overrides).unwrap_err();
        assert!(matches!(err, RelocateError::ValidationError { .. }));
    }

    #[test]
    fn test_blank_name_rejected() {
        let overrides = JobOverrides {
            source_dir: Some("/src".to_string()),
            destination_dir: Some("/dst".to_string()),
            files: vec!["a.txt".to_string(), "".to_string()],
            ..Default::default()
        };

        assert!(RelocationJob::resolve(None, overrides).is_err());
    }
}
