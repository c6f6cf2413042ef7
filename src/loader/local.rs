use crate::constants::DIR_MODE;
use crate::error::{Error, Result};
use crate::events::{EventSink, GenerationEvent};
use crate::loader::interface::TemplateLoader;
use crate::request::SourceKind;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Counters reported while a local template is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyProgress {
    total: usize,
    copied: usize,
}

impl CopyProgress {
    pub fn new(total: usize) -> Self {
        Self { total, copied: 0 }
    }

    /// Records one more copied file and returns the matching event.
    pub fn advance(&mut self) -> GenerationEvent {
        self.copied += 1;
        GenerationEvent::FileCopied { copied: self.copied, total: self.total }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn copied(&self) -> usize {
        self.copied
    }
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<'a> {
    sink: &'a dyn EventSink,
}

impl<'a> LocalLoader<'a> {
    /// Creates a new LocalLoader instance.
    pub fn new(sink: &'a dyn EventSink) -> Self {
        Self { sink }
    }
}

impl TemplateLoader for LocalLoader<'_> {
    /// Copies the tree at `source` into `destination`, one file at a time.
    ///
    /// # Errors
    /// * `Error::SourceUnreadable` if `source` is not a readable directory
    /// * `Error::DestinationUnwritable` if a directory cannot be created
    /// * `Error::CopyFailed` if a file cannot be copied
    fn materialize(&self, source: &str, destination: &Path, _branch: Option<&str>) -> Result<()> {
        let root = Path::new(source);
        self.sink.emit(&GenerationEvent::AcquisitionStarted {
            kind: SourceKind::Local,
            source: source.to_string(),
        });

        let metadata = fs::metadata(root)
            .map_err(|e| Error::SourceUnreadable { path: root.to_path_buf(), source: e })?;
        if !metadata.is_dir() {
            return Err(Error::SourceUnreadable {
                path: root.to_path_buf(),
                source: io::Error::other("not a directory"),
            });
        }

        let mut progress = CopyProgress::new(count_files(root)?);
        debug!("Template '{}' contains {} files", root.display(), progress.total());

        create_dir(destination)?;
        let nested = nested_destination(root, destination);

        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| Some(e.path()) != nested.as_deref());

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            let relative = entry.path().strip_prefix(root).map_err(|e| Error::SourceUnreadable {
                path: entry.path().to_path_buf(),
                source: io::Error::other(e),
            })?;
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                create_dir(&target)?;
            } else {
                copy_file(entry.path(), &target)?;
                self.sink.emit(&progress.advance());
            }
        }
        Ok(())
    }
}

/// Counts every entry below `root` that is not a directory.
pub fn count_files<P: AsRef<Path>>(root: P) -> Result<usize> {
    let root = root.as_ref();
    let mut total = 0;
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_dir() {
            total += 1;
        }
    }
    Ok(total)
}

/// Copies the full content of one file.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<()> {
    let source = source.as_ref();
    fs::copy(source, destination.as_ref())
        .map(|_| ())
        .map_err(|e| Error::CopyFailed { path: source.to_path_buf(), source: e })
}

fn create_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(path)
        .map_err(|e| Error::DestinationUnwritable { path: path.to_path_buf(), source: e })
}

// Where `destination` shows up while walking `root`, if it lives inside it.
fn nested_destination(root: &Path, destination: &Path) -> Option<PathBuf> {
    let canonical_root = fs::canonicalize(root).ok()?;
    let canonical_dest = fs::canonicalize(destination).ok()?;
    let relative = canonical_dest.strip_prefix(&canonical_root).ok()?;
    Some(root.join(relative))
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    Error::SourceUnreadable { path, source: err.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_count_files_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b/e")).unwrap();
        fs::create_dir(root.join("d")).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("b/c.txt"), "c").unwrap();
        fs::write(root.join("b/e/f.txt"), "f").unwrap();

        assert_eq!(count_files(root).unwrap(), 3);
    }

    #[test]
    fn test_count_files_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        match count_files(&missing) {
            Err(Error::SourceUnreadable { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected SourceUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_progress() {
        let mut progress = CopyProgress::new(2);
        assert_eq!(progress.advance(), GenerationEvent::FileCopied { copied: 1, total: 2 });
        assert_eq!(progress.advance(), GenerationEvent::FileCopied { copied: 2, total: 2 });
        assert_eq!(progress.copied(), progress.total());
    }

    #[test]
    fn test_copy_file_reports_source() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        match copy_file(&missing, temp_dir.path().join("out.txt")) {
            Err(Error::CopyFailed { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected CopyFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_directories_created_with_conservative_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a/b");
        create_dir(&target).unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o002, 0, "directory must not be world-writable");
    }
}
