//! Process-lifetime note store
//!
//! Ids are sequential from 1 and never reused. Deleting an unknown id is a
//! no-op. Nothing survives a restart.

use std::sync::Mutex;

use async_trait::async_trait;

use super::NoteStore;
use crate::db::repos::{DbError, Note};
use crate::models::NoteText;

#[derive(Debug)]
struct Notes {
    items: Vec<Note>,
    next_id: i32,
}

/// In-memory notes guarded by a mutex
#[derive(Debug)]
pub struct MemoryNoteStore {
    inner: Mutex<Notes>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Notes {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Notes> {
        // a panic while holding the lock cannot leave Notes half-updated
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn insert(&self, text: NoteText) -> Result<Note, DbError> {
        let mut notes = self.lock();
        let note = Note {
            id: notes.next_id,
            text: text.into_string(),
            created_at: None,
        };
        notes.items.push(note.clone());
        notes.next_id += 1;

        tracing::debug!(id = note.id, "note inserted (memory)");
        Ok(note)
    }

    async fn list(&self) -> Result<Vec<Note>, DbError> {
        Ok(self.lock().items.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.lock().items.retain(|n| i64::from(n.id) != id);
        Ok(())
    }
}
