//! A plain text buffer that records its content through snapshots.

use super::originator::Originator;
use tracing::trace;

/// Single-field text editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editor {
    content: String,
}

impl Editor {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Originator for Editor {
    type Memento = String;

    fn snapshot(&self) -> String {
        trace!(len = self.content.len(), "editor snapshot");
        self.content.clone()
    }

    fn restore(&mut self, memento: &String) {
        self.content.clone_from(memento);
    }
}
