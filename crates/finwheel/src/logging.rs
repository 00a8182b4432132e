//! File logging for the finwheel window.
//!
//! What ends up in `finwheel.log`:
//! - `info`: startup with the log path, every period reload (period name,
//!   date range, operation count), each deleted operation and shutdown.
//! - `debug`: per-category totals after a reload, and why a side's chart is
//!   not drawable (empty side, zero total).
//! - `warn`: a config or ledger snapshot that failed to load, and deletes of
//!   operations that are already gone.
//! - `error`: the terminal could not be restored on exit.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "finwheel.log";

/// Size at which the log gets trimmed (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept after trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Trim the log to its most recent `keep` bytes once it grows past `max`.
///
/// Returns whether the file was rewritten.
fn trim_log(log_path: &Path, max: u64, keep: u64) -> std::io::Result<bool> {
    let Ok(metadata) = fs::metadata(log_path) else {
        return Ok(false);
    };
    if metadata.len() <= max {
        return Ok(false);
    }

    let mut file = File::open(log_path)?;
    file.seek(SeekFrom::Start(metadata.len().saturating_sub(keep)))?;
    let mut tail = Vec::new();
    file.read_to_end(&mut tail)?;
    drop(file);

    // Drop the partial first line
    let skip = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- log trimmed, older entries removed ---\n")?;
    file.write_all(&tail[skip..])?;
    Ok(true)
}

/// Hands out writers to one shared log file
#[derive(Clone)]
struct SharedLogFile {
    file: Arc<Mutex<File>>,
}

struct SharedLogWriter {
    file: Arc<Mutex<File>>,
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.file.lock() {
            Ok(mut file) => file.write(buf),
            Err(poisoned) => poisoned.into_inner().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(poisoned) => poisoned.into_inner().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            file: self.file.clone(),
        }
    }
}

/// Default filter directive for a given level.
///
/// `finwheel_core` stays at `warn` so broken ledger snapshots are reported
/// without the per-load chatter.
fn default_filter(level: &str) -> String {
    format!("finwheel={level},finwheel_core=warn")
}

/// Initialize logging into `{data_dir}/finwheel.log`.
///
/// The terminal belongs to the UI, so nothing is logged to stdout/stderr.
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = trim_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: could not trim {}: {}", log_path.display(), e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedLogFile {
                    file: Arc::new(Mutex::new(file)),
                })
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(
        log_path = %log_path.display(),
        data_dir = %data_dir.display(),
        "finwheel logging initialized"
    );
    Ok(log_path)
}
