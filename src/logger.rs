//! Logger setup. Log lines go to stderr so they never interleave with the
//! menus on stdout, and optionally to rotated files as well.

use std::path::Path;

use flexi_logger::{
    style, Age, Cleanup, Criterion, DeferredNow, FileSpec, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::{debug, Level, Record};

/// How many rotated log files to keep when logging to a directory.
const KEEP_FILES: usize = 7;

/// Starts the global logger with a flexi_logger spec such as `"info"` or
/// `"euler_bst::graph=debug"`. When `dir` is given, log lines are also written
/// to daily-rotated files there. Keep the returned handle alive for as long as
/// logging is needed.
pub fn configure(
    level: &str,
    dir: Option<&Path>,
) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    let logger = Logger::try_with_str(level)?.format(colour_format);
    let logger = match dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .duplicate_to_stderr(flexi_logger::Duplicate::All)
            .write_mode(WriteMode::BufferAndFlush)
            .rotate(
                Criterion::Age(Age::Day),
                Naming::Timestamps,
                Cleanup::KeepLogFiles(KEEP_FILES),
            ),
        None => logger.log_to_stderr().write_mode(WriteMode::Direct),
    };
    let handle = logger.start()?;
    if let Some(dir) = dir {
        debug!("Logging to directory: {}", dir.display());
    }
    Ok(handle)
}

/// Maps `-v` counts onto a level, for when no explicit spec is given.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn colour_format(
    out: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    rec: &Record,
) -> Result<(), std::io::Error> {
    let level = rec.level();
    write!(
        out,
        "[{}] {} {}:{}: {}",
        style(Level::Debug).paint(now.format("%Y-%m-%d %H:%M:%S%.3f %:z").to_string()),
        style(level).paint(level.to_string()),
        rec.file().unwrap_or("<unknown>"),
        rec.line().unwrap_or(0),
        style(level).paint(rec.args().to_string())
    )
}
