//! Error handling for kiln.
//! Defines the error type returned by every generation stage and the
//! binary's default handler.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced while generating a project.
///
/// Every failure of the acquisition or substitution stage is caught once by
/// the generator, the destination is rolled back and the error is returned
/// unchanged, or wrapped in [`Error::CleanupFailed`] when the rollback
/// itself could not complete.
#[derive(Error, Debug)]
pub enum Error {
    /// The destination is already taken by a file, directory or link.
    #[error("Directory '{path}' already exists.")]
    DestinationExists { path: PathBuf },

    /// The local template could not be traversed or read.
    #[error("Cannot read template source '{path}': {source}.")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The clone program could not be started at all.
    #[error("Failed to run '{program}': {source}.")]
    ExternalToolUnavailable {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program} clone' exited with {status}.")]
    ExternalToolFailed { program: String, status: ExitStatus },

    #[error("Failed to copy '{path}': {source}.")]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create directory '{path}': {source}.")]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing a file during placeholder substitution failed.
    #[error("Error replacing template variables in '{path}': {source}.")]
    SubstitutionIoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generation failed and the partially written destination could not be
    /// removed either. The operator has to clean `path` up by hand.
    #[error("{original} Cleanup of '{path}' failed: {cleanup}.")]
    CleanupFailed {
        original: Box<Error>,
        path: PathBuf,
        cleanup: io::Error,
    },

    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error("Operation canceled.")]
    Cancelled,

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that reports the error and exits the program.
///
/// A declined confirmation is not a failure: it is reported at info level
/// and the process exits with status 0. Everything else exits with 1.
pub fn default_error_handler(err: Error) {
    if let Error::Cancelled = err {
        log::info!("{}", err);
        std::process::exit(0);
    }
    log::error!("Failed to generate project: {}", err);
    std::process::exit(1);
}
