//! kiln creates new projects from templates.
//! A template is either cloned from a git repository or copied from a local
//! directory, then every `{{project_name}}` in it is replaced with the name
//! of the new project. Generation is all or nothing: on failure the
//! destination directory is removed again.

/// Command-line interface module for the kiln application
pub mod cli;

/// Common constants: the placeholder token, directory mode, defaults
pub mod constants;

/// Error types and handling for the kiln application
pub mod error;

/// Structured progress events and the sinks presenting them
pub mod events;

/// Orchestration of acquisition, substitution and rollback
pub mod generator;

/// Template acquisition from git repositories and local directories
pub mod loader;

/// Logger setup for the binary
pub mod logger;

/// User input and interaction handling
pub mod prompt;

/// Placeholder substitution over a generated tree
pub mod renderer;

/// The validated input of one generation run
pub mod request;

/// Validation of project names and template sources
pub mod validate;
