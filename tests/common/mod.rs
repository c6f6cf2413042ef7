use kiln::events::{EventSink, GenerationEvent};
use std::cell::RefCell;
use std::fs;
use std::path::Path;

/// Keeps every emitted event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<GenerationEvent>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn events(&self) -> Vec<GenerationEvent> {
        self.events.borrow().clone()
    }

    /// The `(copied, total)` pairs of all `FileCopied` events.
    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                GenerationEvent::FileCopied { copied, total } => Some((*copied, *total)),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &GenerationEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Template with `a.txt`, `b/c.txt` and the empty directory `d/`.
#[allow(dead_code)]
pub fn write_basic_template(root: &Path) {
    fs::create_dir_all(root.join("b")).unwrap();
    fs::create_dir_all(root.join("d")).unwrap();
    fs::write(root.join("a.txt"), "Hello {{project_name}}!").unwrap();
    fs::write(root.join("b/c.txt"), "nothing to replace here").unwrap();
}
