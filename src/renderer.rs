//! Placeholder substitution for generated projects.
//! Replaces the literal `{{project_name}}` token in every file of a tree.

use crate::constants::PLACEHOLDER;
use crate::error::{Error, Result};
use crate::events::{EventSink, GenerationEvent};
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Trait for rewriting a materialized project tree.
pub trait TemplateRenderer {
    /// Rewrites every file below `root` for the project `project_name`.
    ///
    /// # Errors
    /// * `Error::SubstitutionIoError` on the first file that cannot be read
    ///   or written. Files rewritten before it keep their new content.
    fn render_tree(&self, root: &Path, project_name: &str) -> Result<()>;
}

/// Literal `{{project_name}}` substitution.
///
/// Files are handled as raw bytes, so binary files containing the token are
/// rewritten too.
pub struct PlaceholderRenderer<'a> {
    sink: &'a dyn EventSink,
}

impl<'a> PlaceholderRenderer<'a> {
    pub fn new(sink: &'a dyn EventSink) -> Self {
        Self { sink }
    }

    /// Replaces every placeholder in `content`.
    ///
    /// Returns `None` when `content` contains no placeholder.
    pub fn render_str(&self, content: &[u8], project_name: &str) -> Option<Vec<u8>> {
        let token = PLACEHOLDER.as_bytes();
        let mut rest = content;
        let mut rendered: Option<Vec<u8>> = None;

        while let Some(pos) = rest.windows(token.len()).position(|window| window == token) {
            let out = rendered.get_or_insert_with(|| Vec::with_capacity(content.len()));
            out.extend_from_slice(&rest[..pos]);
            out.extend_from_slice(project_name.as_bytes());
            rest = &rest[pos + token.len()..];
        }

        let mut rendered = rendered?;
        rendered.extend_from_slice(rest);
        Some(rendered)
    }

    fn render_file(&self, path: &Path, project_name: &str) -> Result<bool> {
        let content = fs::read(path).map_err(|e| self.failed(path, e))?;
        let Some(rendered) = self.render_str(&content, project_name) else {
            return Ok(false);
        };

        let permissions = fs::metadata(path).map_err(|e| self.failed(path, e))?.permissions();
        fs::write(path, rendered).map_err(|e| self.failed(path, e))?;
        fs::set_permissions(path, permissions).map_err(|e| self.failed(path, e))?;
        Ok(true)
    }

    fn failed(&self, path: &Path, source: std::io::Error) -> Error {
        self.sink.emit(&GenerationEvent::SubstitutionFailed {
            path: path.to_path_buf(),
            reason: source.to_string(),
        });
        Error::SubstitutionIoError { path: path.to_path_buf(), source }
    }
}

impl TemplateRenderer for PlaceholderRenderer<'_> {
    fn render_tree(&self, root: &Path, project_name: &str) -> Result<()> {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                self.failed(&path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path: PathBuf = entry.into_path();
            if self.render_file(&path, project_name)? {
                self.sink.emit(&GenerationEvent::FileRewritten { path });
            } else {
                trace!("No template variables in '{}'", path.display());
            }
        }
        Ok(())
    }
}
