//! The validated input of one generation run.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where a template comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A git repository cloned by an external `git` process.
    Remote,
    /// A directory tree on the local filesystem.
    Local,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Remote => write!(f, "git repository"),
            SourceKind::Local => write!(f, "local path"),
        }
    }
}

/// Everything the generator needs to create one project.
///
/// Built once from already validated input and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    project_name: String,
    template_source: String,
    source_kind: SourceKind,
    branch: Option<String>,
    parent_dir: PathBuf,
}

impl GenerationRequest {
    /// A request cloning `url`, optionally restricted to `branch`.
    pub fn remote<N, U>(project_name: N, url: U, branch: Option<String>) -> Self
    where
        N: Into<String>,
        U: Into<String>,
    {
        Self {
            project_name: project_name.into(),
            template_source: url.into(),
            source_kind: SourceKind::Remote,
            branch,
            parent_dir: PathBuf::from("."),
        }
    }

    /// A request copying the directory tree at `path`.
    pub fn local<N, P>(project_name: N, path: P) -> Self
    where
        N: Into<String>,
        P: Into<String>,
    {
        Self {
            project_name: project_name.into(),
            template_source: path.into(),
            source_kind: SourceKind::Local,
            branch: None,
            parent_dir: PathBuf::from("."),
        }
    }

    /// Creates the project inside `parent_dir` instead of the working directory.
    pub fn in_dir<P: Into<PathBuf>>(mut self, parent_dir: P) -> Self {
        self.parent_dir = parent_dir.into();
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn template_source(&self) -> &str {
        &self.template_source
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    /// The requested branch. Always `None` for local templates.
    pub fn branch(&self) -> Option<&str> {
        match self.source_kind {
            SourceKind::Remote => self.branch.as_deref(),
            SourceKind::Local => None,
        }
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    /// Path of the directory the project is generated into.
    pub fn destination(&self) -> PathBuf {
        self.parent_dir.join(&self.project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_defaults_to_working_directory() {
        let request = GenerationRequest::local("myapp", "./template");
        assert_eq!(request.destination(), PathBuf::from("./myapp"));

        let request = request.in_dir("/tmp/projects");
        assert_eq!(request.destination(), PathBuf::from("/tmp/projects/myapp"));
    }

    #[test]
    fn test_branch_only_for_remote() {
        let request = GenerationRequest::remote(
            "myapp",
            "https://github.com/user/repo.git",
            Some("main".to_string()),
        );
        assert_eq!(request.source_kind(), SourceKind::Remote);
        assert_eq!(request.branch(), Some("main"));

        let request = GenerationRequest::local("myapp", "./template");
        assert_eq!(request.branch(), None);
    }

    #[test]
    fn test_source_kind_display() {
        assert_eq!(SourceKind::Remote.to_string(), "git repository");
        assert_eq!(SourceKind::Local.to_string(), "local path");
    }
}
