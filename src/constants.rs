//! Common constants used throughout kiln.

/// The only template token recognised by the substitution pass.
pub const PLACEHOLDER: &str = "{{project_name}}";

/// Permission bits for directories created while copying a local template.
pub const DIR_MODE: u32 = 0o750;

/// Program invoked to clone remote templates.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Project name used when none can be derived from the template source.
pub const FALLBACK_PROJECT_NAME: &str = "new_project";
