use crate::config::job::{JobOverrides, RelocationJob};
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "file-relocator")]
#[command(about = "Move a list of named files from one directory to another")]
pub struct CliConfig {
    /// Directory the files are moved out of
    #[arg(long, value_name = "DIR")]
    pub source: Option<String>,

    /// Directory the files are moved into; created if missing
    #[arg(long, value_name = "DIR")]
    pub destination: Option<String>,

    /// Comma-separated file names, relative to --source
    #[arg(long, value_delimiter = ',')]
    pub files: Vec<String>,

    /// Use the entry names of this directory as the file list
    #[arg(long, value_name = "DIR", conflicts_with_all = ["files", "names"])]
    pub list_from: Option<String>,

    /// TOML job file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// File names, appended after --files
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

impl CliConfig {
    pub fn overrides(&self) -> JobOverrides {
        let mut files = self.files.clone();
        files.extend(self.names.iter().cloned());

        JobOverrides {
            source_dir: self.source.clone(),
            destination_dir: self.destination.clone(),
            files,
            list_from: self.list_from.clone(),
            log_level: None,
            log_format: self.log_format,
        }
    }

    /// Loads the job file (if any) and applies the command-line values on top.
    pub fn load_job(&self) -> Result<RelocationJob> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading job file {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        RelocationJob::resolve(file, self.overrides())
    }
}
