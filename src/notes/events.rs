//! Change notification for editor state
//!
//! Rendering layers either poll the version counter or subscribe a callback.

use serde::{Deserialize, Serialize};

/// What changed in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
    NoteAdded { index: usize },
    TabSelected { index: usize },
    TextChanged { index: usize },
    StylesChanged { index: usize },
    FormattingChanged { bold: bool, italic: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&EditorEvent) + Send>;

/// Observer list plus a version counter bumped on every emitted event
#[derive(Default)]
pub struct Observers {
    version: u64,
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&EditorEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn emit(&mut self, event: EditorEvent) {
        self.version += 1;
        log::trace!("v{} {:?}", self.version, event);
        for (_, observer) in self.entries.iter_mut() {
            observer(&event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("version", &self.version)
            .field("subscribers", &self.entries.len())
            .finish()
    }
}
