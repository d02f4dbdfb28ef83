use clap::Parser;
use file_relocator::utils::logger::{self, LogFormat};
use file_relocator::{CliConfig, RelocateError};

fn main() {
    let config = CliConfig::parse();

    // 先解析工作設定，日誌等級可能來自設定檔
    let job = match config.load_job() {
        Ok(job) => job,
        Err(e) => exit_with(&e),
    };

    logger::init_cli_logger(
        config.verbose,
        job.logging.level.as_deref(),
        job.logging.format.unwrap_or(LogFormat::Compact),
    );

    tracing::info!("Starting file-relocator");
    tracing::debug!("Resolved job: {:?}", job);

    match job.run() {
        Ok(()) => {
            tracing::info!("✅ Relocation completed");
        }
        Err(e) => {
            tracing::error!(
                "❌ Relocation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }
}

fn exit_with(e: &RelocateError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
