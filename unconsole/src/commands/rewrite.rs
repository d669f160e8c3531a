//! In-place rewrite driver shared by `comment-console` and `remove-console`.
//!
//! Reads the whole file as UTF-8, applies a `ConsoleTransform`, and writes
//! the result back over the same path. The write truncates and replaces the
//! file directly; there is no temporary file and no backup.

use log::{debug, info};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use unconsole_core::{ConsoleMatch, ConsoleTransform};

/// Failures while reading or writing the target file.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("No such file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("File is not valid UTF-8: {}", .0.display())]
    NotUtf8(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl RewriteError {
    fn from_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => RewriteError::FileNotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => RewriteError::PermissionDenied(path.to_path_buf()),
            ErrorKind::InvalidData => RewriteError::NotUtf8(path.to_path_buf()),
            _ => RewriteError::Read { path: path.to_path_buf(), source: err },
        }
    }

    fn from_write(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::PermissionDenied => RewriteError::PermissionDenied(path.to_path_buf()),
            _ => RewriteError::Write { path: path.to_path_buf(), source: err },
        }
    }
}

/// What a rewrite did to one file.
#[derive(Debug)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub matches: Vec<ConsoleMatch>,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

/// Which confirmation line an executable prints after a successful rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Commented,
    Cleaned,
}

impl Confirmation {
    /// The confirmation line for `path`, echoed as given on the command line.
    pub fn message(&self, path: &Path) -> String {
        match self {
            Confirmation::Commented => format!("Commented console statements in {}", path.display()),
            Confirmation::Cleaned => format!("Cleaned {}", path.display()),
        }
    }
}

/// Reads `path`, applies `transform`, and writes the result back in place.
///
/// The file is written even when nothing matched.
pub fn rewrite_file(path: &Path, transform: &dyn ConsoleTransform) -> Result<RewriteReport, RewriteError> {
    info!("Rewriting {} with the {}.", path.display(), transform.name());

    let content = fs::read_to_string(path).map_err(|e| RewriteError::from_read(path, e))?;
    let outcome = transform.apply(&content);

    debug!(
        "Transformed {}: {} match(es), {} -> {} bytes",
        path.display(),
        outcome.matches.len(),
        content.len(),
        outcome.content.len()
    );
    for (method, count) in outcome.counts_by_method() {
        debug!("  {}: {}", method, count);
    }

    fs::write(path, &outcome.content).map_err(|e| RewriteError::from_write(path, e))?;

    Ok(RewriteReport {
        path: path.to_path_buf(),
        bytes_before: content.len(),
        bytes_after: outcome.content.len(),
        matches: outcome.matches,
    })
}

/// Rewrites `path` and prints the confirmation line to `out`.
pub fn run_rewrite<W: Write>(
    path: &Path,
    transform: &dyn ConsoleTransform,
    confirmation: Confirmation,
    out: &mut W,
) -> anyhow::Result<RewriteReport> {
    let report = rewrite_file(path, transform)?;
    writeln!(out, "{}", confirmation.message(path))?;
    info!(
        "{} statement(s) rewritten in {}.",
        report.matches.len(),
        report.path.display()
    );
    Ok(report)
}
