//! Logger setup for the terminal frontend.
//!
//! Logs go either to a file (`--log-file`) or to stderr. Stderr output is
//! held back while the game owns the screen and written out once the
//! terminal is restored, so warnings never draw over the board.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use env_logger::{Builder, Target};

/// Filter used when `RUST_LOG` is unset and logs go to stderr.
pub const STDERR_DEFAULT_FILTER: &str = "warn";

/// Filter used when `RUST_LOG` is unset and logs go to a file.
pub const FILE_DEFAULT_FILTER: &str = "warn,wrap_snake=info";

/// `Some` while stderr logging is being held back.
static HELD_STDERR: Mutex<Option<Vec<u8>>> = Mutex::new(None);

/// Picks the filter directives: an explicit `RUST_LOG` always wins.
#[must_use]
pub fn filter_spec(rust_log: Option<&str>, to_file: bool) -> &str {
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => spec,
        _ if to_file => FILE_DEFAULT_FILTER,
        _ => STDERR_DEFAULT_FILTER,
    }
}

/// Builds the logger configuration without installing it.
pub fn builder(rust_log: Option<&str>, log_file: Option<&Path>) -> io::Result<Builder> {
    let mut builder = Builder::new();
    builder.parse_filters(filter_spec(rust_log, log_file.is_some()));

    match log_file {
        Some(path) => builder.target(Target::Pipe(Box::new(File::create(path)?))),
        None => builder.target(Target::Pipe(Box::new(HeldStderr))),
    };

    Ok(builder)
}

/// Installs the global logger, reading `RUST_LOG` from the environment.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    builder(rust_log.as_deref(), log_file)?.init();
    Ok(())
}

/// Starts buffering stderr log output.
pub fn hold_stderr() {
    let mut held = held_stderr();
    if held.is_none() {
        *held = Some(Vec::new());
    }
}

/// Stops buffering and writes everything held so far to stderr.
pub fn release_stderr() {
    let _ = release_into(&mut io::stderr());
}

fn release_into(out: &mut impl Write) -> io::Result<()> {
    let Some(buffered) = held_stderr().take() else {
        return Ok(());
    };

    out.write_all(&buffered)?;
    out.flush()
}

fn held_stderr() -> MutexGuard<'static, Option<Vec<u8>>> {
    HELD_STDERR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Stderr writer that appends to the held buffer while the screen is taken.
struct HeldStderr;

impl Write for HeldStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(held) = held_stderr().as_mut() {
            held.extend_from_slice(buf);
            return Ok(buf.len());
        }

        io::stderr().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if held_stderr().is_some() {
            return Ok(());
        }

        io::stderr().flush()
    }
}
