use crate::constants::DEFAULT_GIT_PROGRAM;
use crate::error::{Error, Result};
use crate::events::{EventSink, GenerationEvent};
use crate::loader::interface::TemplateLoader;
use crate::request::SourceKind;
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Loader for templates from git repositories.
///
/// Runs `git clone` as a child process whose output goes straight to the
/// terminal.
pub struct GitLoader<'a> {
    sink: &'a dyn EventSink,
    program: String,
}

impl<'a> GitLoader<'a> {
    /// Creates a new GitLoader running the `git` found on `PATH`.
    pub fn new(sink: &'a dyn EventSink) -> Self {
        Self { sink, program: DEFAULT_GIT_PROGRAM.to_string() }
    }

    /// Uses `program` instead of `git` for cloning.
    pub fn with_program<S: Into<String>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    /// Builds the clone invocation.
    pub fn command(&self, source: &str, destination: &Path, branch: Option<&str>) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("clone").arg(source).arg(destination);
        if let Some(branch) = branch.filter(|b| !b.is_empty()) {
            command.arg("--branch").arg(branch);
        }
        command.stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());
        command
    }
}

impl TemplateLoader for GitLoader<'_> {
    /// Clones `source` into `destination`.
    ///
    /// # Errors
    /// * `Error::ExternalToolUnavailable` if the clone program cannot be started
    /// * `Error::ExternalToolFailed` if it exits with a non-zero status
    fn materialize(&self, source: &str, destination: &Path, branch: Option<&str>) -> Result<()> {
        self.sink.emit(&GenerationEvent::AcquisitionStarted {
            kind: SourceKind::Remote,
            source: source.to_string(),
        });
        if let Some(branch) = branch.filter(|b| !b.is_empty()) {
            self.sink.emit(&GenerationEvent::BranchSelected { branch: branch.to_string() });
        }

        let mut command = self.command(source, destination, branch);
        debug!("Running {:?}", command);

        let status = command.status().map_err(|e| Error::ExternalToolUnavailable {
            program: self.program.clone(),
            source: e,
        })?;

        if !status.success() {
            return Err(Error::ExternalToolFailed { program: self.program.clone(), status });
        }
        Ok(())
    }
}
