//! Input validation for values collected on the command line or prompted
//! from the user, before they become a [`GenerationRequest`].
//!
//! [`GenerationRequest`]: crate::request::GenerationRequest

use crate::constants::FALLBACK_PROJECT_NAME;
use crate::error::{Error, Result};
use crate::request::SourceKind;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use url::Url;

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid project name pattern"));

static INVALID_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]").expect("valid name character pattern"));

static REPO_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^/?:]+?)(?:\.git)?/?(?:\?.*)?$").expect("valid repository name pattern")
});

/// Checks that `name` only consists of letters, digits, `_` and `-`.
pub fn validate_project_name(name: &str) -> Result<()> {
    if PROJECT_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::ValidationError(format!(
            "invalid project name '{}': only letters, numbers, '_', and '-' are allowed",
            name
        )))
    }
}

/// Returns true for `https://` URLs with a host and for `git@host:path`
/// SSH addresses.
pub fn is_git_url(s: &str) -> bool {
    if s.starts_with("git@") {
        return s.len() > "git@".len();
    }
    match Url::parse(s) {
        Ok(url) => url.scheme() == "https" && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Checks the template source for the given kind.
///
/// # Errors
/// * `Error::ValidationError` for a malformed git URL or a missing local path
pub fn validate_source(source: &str, kind: SourceKind) -> Result<()> {
    match kind {
        SourceKind::Remote if !is_git_url(source) => {
            Err(Error::ValidationError(format!("invalid Git URL format: {}", source)))
        }
        SourceKind::Local if !Path::new(source).exists() => Err(Error::ValidationError(format!(
            "local template path '{}' does not exist",
            source
        ))),
        _ => Ok(()),
    }
}

/// Derives a project name from the template source.
///
/// Remote sources use the repository name without `.git` and query string,
/// local sources use the directory name. Characters not allowed in project
/// names become `_`.
pub fn default_project_name(source: &str, kind: SourceKind) -> String {
    let name = match kind {
        SourceKind::Remote => REPO_NAME
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        SourceKind::Local => Path::new(source)
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string),
    };

    match name.filter(|n| !n.is_empty()) {
        Some(name) => INVALID_NAME_CHARS.replace_all(&name, "_").into_owned(),
        None => FALLBACK_PROJECT_NAME.to_string(),
    }
}
