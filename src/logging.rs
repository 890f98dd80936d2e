//! Logging bootstrap
//!
//! stdout carries the MCP protocol, so log output goes to stderr, or to
//! size-rotated files when a log directory is configured. Initialization
//! happens at most once per process.

use anyhow::{Result, anyhow, bail};
use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use std::path::Path;
use std::sync::OnceLock;

const LOG_FILE_BASENAME: &str = "checklist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Start the logger with `level`, writing to `log_dir` if given
///
/// `RUST_LOG` overrides `level` when set. Calling this again after a
/// successful start is a no-op.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let level = normalize_level(level)?;
    let logger = Logger::try_with_env_or_str(level)
        .map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))?;

    let logger = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| {
                anyhow!("Failed to create log directory {}: {}", dir.display(), e)
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir)
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .duplicate_to_stderr(Duplicate::Warn)
        }
        None => logger.log_to_stderr(),
    };

    let handle = logger
        .start()
        .map_err(|e| anyhow!("Failed to start logger: {}", e))?;
    // A concurrent initializer may have won; its handle stays alive either way
    let _ = LOGGER.set(handle);

    log::info!(
        "event=app_start status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(())
}

/// Lowercase and validate a log level name
pub fn normalize_level(level: &str) -> Result<&'static str> {
    let lowered = level.trim().to_ascii_lowercase();
    match LEVELS.iter().find(|candidate| **candidate == lowered) {
        Some(found) => Ok(*found),
        None => bail!(
            "Invalid log level '{}'. Valid levels: {}",
            level,
            LEVELS.join(", ")
        ),
    }
}
