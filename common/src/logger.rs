//! Process-wide logger setup built on `fern`.

use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

/// Initializes the global logger, writing to the given file and,
/// optionally, stdout.
///
/// Unknown level names fall back to `info`. Should be called once at
/// startup; a second call is ignored because the global logger is
/// already set.
pub fn init_logger(log_level: &str, log_file_path: &str, log_to_stdout: bool) {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.exists() {
            create_dir_all(parent).expect("Failed to create log directory");
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .expect("Cannot open log file");

    let level: LevelFilter = log_level.parse().unwrap_or(LevelFilter::Info);

    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            let level_tag = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level_tag,
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(log_file);

    if log_to_stdout {
        dispatch = dispatch.chain(std::io::stdout());
    }

    // Ignore the error if a logger is already installed (tests may
    // initialize more than once).
    let _ = dispatch.apply();
}
