//! File-backed logging for the terminal front-end.
//!
//! Writing to stderr would tear the alternate screen, so log output goes to
//! ~/.slots/slots.log, and only when `RUST_LOG` is set.

use super::persistence::save_path;
use std::fs::OpenOptions;
use std::io;

pub const LOG_FILE: &str = "slots.log";

/// Install the global logger. Returns `Ok(false)` when logging is not
/// requested.
pub fn init_file_logger() -> io::Result<bool> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(false);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(save_path(LOG_FILE)?)?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;
    Ok(true)
}
