//! Template acquisition.
//! A template is materialized either by cloning a git repository or by
//! copying a local directory tree; both loaders share [`TemplateLoader`].

use crate::events::EventSink;
use crate::request::SourceKind;

pub mod git;
pub mod interface;
pub mod local;

pub use git::GitLoader;
pub use interface::TemplateLoader;
pub use local::{CopyProgress, LocalLoader};

/// Returns the loader responsible for `kind`.
///
/// # Arguments
/// * `kind` - Where the template comes from
/// * `sink` - Receiver of progress events
/// * `git_program` - Program used for cloning remote templates
pub fn get_loader<'a>(
    kind: SourceKind,
    sink: &'a dyn EventSink,
    git_program: &str,
) -> Box<dyn TemplateLoader + 'a> {
    match kind {
        SourceKind::Remote => Box::new(GitLoader::new(sink).with_program(git_program)),
        SourceKind::Local => Box::new(LocalLoader::new(sink)),
    }
}
