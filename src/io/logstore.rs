//! Prepend-style audit log store
//!
//! Two flat text files, newest record first: a human-readable log and a
//! debug log with structured INFO/ERROR records. Every write rebuilds the
//! file through a sibling temp file that is atomically renamed over the
//! target, so a crash mid-write leaves either the old file or the fully
//! written new one, never a truncated mix. The store assumes a single active
//! writer; there is no cross-process locking.

use crate::services::format::format_timestamp;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

/// Immutable log-file configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding both log files
    pub dir: PathBuf,
    /// Human log file name
    pub log_file: String,
    /// Debug/error log file name
    pub debug_file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs_files"),
            log_file: "log.txt".to_string(),
            debug_file: "debug_log.log".to_string(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.dir.join(&self.log_file)
    }

    #[must_use]
    pub fn debug_path(&self) -> PathBuf {
        self.dir.join(&self.debug_file)
    }
}

/// One human-log line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: String,
    pub message: String,
}

impl LogRecord {
    #[must_use]
    pub fn now(message: &str) -> Self {
        Self {
            timestamp: format_timestamp(SystemTime::now()),
            message: message.to_string(),
        }
    }

    /// `[YYYY-MM-DD HH:MM:SS]  <message>`, with two spaces after the bracket.
    #[must_use]
    pub fn render(&self) -> String {
        format!("[{}]  {}\n", self.timestamp, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugKind {
    Info,
    Error,
}

impl DebugKind {
    fn header(self) -> &'static str {
        match self {
            DebugKind::Info => "INFO",
            DebugKind::Error => "ERROR",
        }
    }
}

/// One structured debug-log record.
///
/// Call-site metadata is explicit: the operation name comes from the caller
/// and file/line from `#[track_caller]`, replacing runtime stack inspection.
#[derive(Debug, Clone)]
pub struct DebugRecord {
    pub kind: DebugKind,
    pub timestamp: String,
    pub function: String,
    pub file: String,
    pub line: u32,
    /// Error code, present on ERROR records only
    pub code: Option<String>,
    pub message: String,
}

impl DebugRecord {
    fn now(kind: DebugKind, function: &str, location: &Location<'_>, message: &str) -> Self {
        Self {
            kind,
            timestamp: format_timestamp(SystemTime::now()),
            function: function.to_string(),
            file: location.file().to_string(),
            line: location.line(),
            code: None,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} [{}]\n\tFunction name: {}\n\tFunction file: {}\n\tLine number: {}\n",
            self.kind.header(),
            self.timestamp,
            self.function,
            self.file,
            self.line
        );
        if let Some(code) = &self.code {
            out.push_str(&format!("\tCode: {code}\n"));
        }
        out.push_str(&format!("\tMessage: {}\n", self.message));
        out
    }
}

/// Handle on the two audit log files.
#[derive(Debug, Clone)]
pub struct LogStore {
    config: LogConfig,
}

impl LogStore {
    #[must_use]
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Create the log directory and both files if missing.
    ///
    /// Must run once at process start, before any write call; the write paths
    /// themselves never create the human log file.
    pub fn init(&self) -> io::Result<()> {
        fs::create_dir_all(&self.config.dir)?;
        for path in [self.config.log_path(), self.config.debug_path()] {
            // append mode so an existing file is left untouched
            OpenOptions::new().append(true).create(true).open(&path)?;
        }
        Ok(())
    }

    /// Prepend a timestamped message to the human log.
    ///
    /// No-op when the message is empty or the log file is absent.
    pub fn write_log(&self, message: &str) -> io::Result<()> {
        let path = self.config.log_path();
        if message.is_empty() || !path.exists() {
            return Ok(());
        }

        let record = LogRecord::now(message);
        self.prepend(&path, &record.render())?;
        log::info!("{}", record.message);
        Ok(())
    }

    /// Prepend an INFO record to the debug log.
    ///
    /// The record carries the caller's file and line plus the caller-supplied
    /// function name. An empty message is a silent no-op.
    #[track_caller]
    pub fn write_debug(&self, function: &str, message: &str) -> io::Result<()> {
        if message.is_empty() {
            return Ok(());
        }

        let record = DebugRecord::now(DebugKind::Info, function, Location::caller(), message);
        self.prepend(&self.config.debug_path(), &record.render())?;
        log::debug!("{function}: {message}");
        Ok(())
    }

    /// Prepend an ERROR record carrying a structured error's code and message.
    #[track_caller]
    pub fn write_debug_error(&self, function: &str, error: &crate::Error) -> io::Result<()> {
        let mut record = DebugRecord::now(
            DebugKind::Error,
            function,
            Location::caller(),
            &error.to_string(),
        );
        record.code = Some(error.code().to_string());
        self.prepend(&self.config.debug_path(), &record.render())?;
        log::error!("{function}: {error}");
        Ok(())
    }

    /// Truncate both log files to zero length without deleting them.
    ///
    /// Missing files are ignored.
    pub fn clear(&self) -> io::Result<()> {
        for path in [self.config.log_path(), self.config.debug_path()] {
            if path.exists() {
                let file = OpenOptions::new().write(true).open(&path)?;
                file.set_len(0)?;
            }
        }
        Ok(())
    }

    /// Whole-file read of the human log; a missing file reads as empty.
    pub fn read_log(&self) -> io::Result<String> {
        read_or_empty(&self.config.log_path())
    }

    /// Whole-file read of the debug log; a missing file reads as empty.
    pub fn read_debug(&self) -> io::Result<String> {
        read_or_empty(&self.config.debug_path())
    }

    /// Head-insertion: write `head` to a temp file in the log directory,
    /// stream the old contents after it, then rename over the target.
    ///
    /// A missing target is created rather than skipped; `write_log` performs
    /// its own existence check first.
    fn prepend(&self, path: &Path, head: &str) -> io::Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(head.as_bytes())?;

        match File::open(path) {
            Ok(mut existing) => {
                io::copy(&mut existing, temp.as_file_mut())?;
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }

        temp.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}

fn read_or_empty(path: &Path) -> io::Result<String> {
    match File::open(path) {
        Ok(mut file) => {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            Ok(contents)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err),
    }
}
