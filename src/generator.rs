//! Project generation orchestration.
//! Materializes the template, substitutes the project name and removes the
//! destination again if either step fails.

use crate::constants::DEFAULT_GIT_PROGRAM;
use crate::error::{Error, Result};
use crate::events::{EventSink, GenerationEvent};
use crate::loader::get_loader;
use crate::renderer::TemplateRenderer;
use crate::request::GenerationRequest;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of removing a partially generated destination.
#[derive(Debug)]
pub enum Cleanup {
    Removed,
    RemovalFailed(io::Error),
}

/// Removes `destination` and everything below it.
///
/// A destination that was never created counts as removed.
pub fn rollback<P: AsRef<Path>>(destination: P) -> Cleanup {
    match fs::remove_dir_all(destination.as_ref()) {
        Ok(()) => Cleanup::Removed,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Cleanup::Removed,
        Err(e) => Cleanup::RemovalFailed(e),
    }
}

/// Fails with `Error::DestinationExists` if anything, including a dangling
/// symlink, occupies `destination`.
pub fn ensure_destination_free<P: AsRef<Path>>(destination: P) -> Result<()> {
    let destination = destination.as_ref();
    match fs::symlink_metadata(destination) {
        Ok(_) => Err(Error::DestinationExists { path: destination.to_path_buf() }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::IoError(e)),
    }
}

/// Fails with `Error::DestinationUnwritable` unless `parent_dir` is an
/// existing directory. Parents are never created, so a rollback of the
/// project directory leaves nothing behind.
pub fn ensure_parent_dir<P: AsRef<Path>>(parent_dir: P) -> Result<()> {
    let parent_dir = parent_dir.as_ref();
    match fs::metadata(parent_dir) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(Error::DestinationUnwritable {
            path: parent_dir.to_path_buf(),
            source: io::Error::other("not a directory"),
        }),
        Err(e) => Err(Error::DestinationUnwritable { path: parent_dir.to_path_buf(), source: e }),
    }
}

/// Creates projects from templates, all or nothing.
pub struct Generator<'a> {
    sink: &'a dyn EventSink,
    renderer: &'a dyn TemplateRenderer,
    git_program: String,
}

impl<'a> Generator<'a> {
    pub fn new(sink: &'a dyn EventSink, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { sink, renderer, git_program: DEFAULT_GIT_PROGRAM.to_string() }
    }

    /// Clones remote templates with `program` instead of `git`.
    pub fn with_git_program<S: Into<String>>(mut self, program: S) -> Self {
        self.git_program = program.into();
        self
    }

    /// Generates the project described by `request`.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The generated project directory
    ///
    /// # Errors
    /// * `Error::DestinationExists` before anything is touched
    /// * `Error::DestinationUnwritable` if the parent directory is missing
    /// * Any acquisition or substitution error, after the destination has
    ///   been removed
    /// * `Error::CleanupFailed` if the destination could not be removed
    pub fn generate(&self, request: &GenerationRequest) -> Result<PathBuf> {
        let destination = request.destination();
        ensure_destination_free(&destination)?;
        ensure_parent_dir(request.parent_dir())?;

        debug!(
            "Generating '{}' from {} '{}'",
            destination.display(),
            request.source_kind(),
            request.template_source()
        );

        let loader = get_loader(request.source_kind(), self.sink, &self.git_program);
        if let Err(err) =
            loader.materialize(request.template_source(), &destination, request.branch())
        {
            return Err(self.abort(&destination, err));
        }

        if let Err(err) = self.renderer.render_tree(&destination, request.project_name()) {
            return Err(self.abort(&destination, err));
        }

        Ok(destination)
    }

    fn abort(&self, destination: &Path, original: Error) -> Error {
        debug!("Generation failed, removing '{}'", destination.display());
        match rollback(destination) {
            Cleanup::Removed => {
                self.sink.emit(&GenerationEvent::RollbackCompleted {
                    path: destination.to_path_buf(),
                });
                original
            }
            Cleanup::RemovalFailed(cleanup) => {
                self.sink.emit(&GenerationEvent::RollbackFailed {
                    path: destination.to_path_buf(),
                    reason: cleanup.to_string(),
                });
                Error::CleanupFailed {
                    original: Box::new(original),
                    path: destination.to_path_buf(),
                    cleanup,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rollback_missing_destination() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(rollback(temp_dir.path().join("never-created")), Cleanup::Removed));
    }

    #[test]
    fn test_rollback_removes_tree() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("myapp");
        fs::create_dir_all(destination.join("src")).unwrap();
        fs::write(destination.join("src/main.rs"), "fn main() {}").unwrap();

        assert!(matches!(rollback(&destination), Cleanup::Removed));
        assert!(!destination.exists());
    }

    #[test]
    fn test_rollback_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain-file");
        fs::write(&file, "not a directory").unwrap();

        assert!(matches!(rollback(&file), Cleanup::RemovalFailed(_)));
    }

    #[test]
    fn test_ensure_destination_free() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ensure_destination_free(temp_dir.path().join("new")).is_ok());
        assert!(matches!(
            ensure_destination_free(temp_dir.path()),
            Err(Error::DestinationExists { .. })
        ));
    }

    #[test]
    fn test_ensure_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file");
        fs::write(&file, "").unwrap();

        assert!(ensure_parent_dir(temp_dir.path()).is_ok());
        assert!(matches!(
            ensure_parent_dir(temp_dir.path().join("missing")),
            Err(Error::DestinationUnwritable { .. })
        ));
        assert!(matches!(ensure_parent_dir(&file), Err(Error::DestinationUnwritable { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_counts_as_existing() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(temp_dir.path().join("missing"), &link).unwrap();

        assert!(matches!(ensure_destination_free(&link), Err(Error::DestinationExists { .. })));
    }
}
