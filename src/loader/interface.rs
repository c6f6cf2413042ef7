use crate::error::Result;
use std::path::Path;

/// Trait for materializing templates from different sources.
pub trait TemplateLoader {
    /// Produces the template found at `source` as a new directory tree at
    /// `destination`.
    ///
    /// # Arguments
    /// * `source` - Repository URL or local template path
    /// * `destination` - Directory to create; must not exist yet
    /// * `branch` - Branch to check out. Loaders without branches ignore it.
    ///
    /// # Errors
    /// Aborts on the first failure. Whatever was already written to
    /// `destination` stays there; removing it is the caller's job.
    fn materialize(&self, source: &str, destination: &Path, branch: Option<&str>) -> Result<()>;
}
