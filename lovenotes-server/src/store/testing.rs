//! Store doubles with persistent-table semantics for router tests
//!
//! Ids come from a counter like a `SERIAL` column, rows are stamped with
//! created_at on insert, and deleting an unknown id is `NotFound`.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{NoteStore, PredictionStore};
use crate::db::repos::{DbError, LovePrediction, Note};
use crate::models::{NewPrediction, NoteText};

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn remove(
        &mut self,
        id: i64,
        row_id: impl Fn(&T) -> i32,
        resource: &'static str,
    ) -> Result<(), DbError> {
        let before = self.rows.len();
        self.rows.retain(|row| i64::from(row_id(row)) != id);
        if self.rows.len() == before {
            return Err(DbError::NotFound {
                resource,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

/// Notes with `PgNoteStore` semantics
#[derive(Default)]
pub struct TableNoteStore {
    table: Mutex<Table<Note>>,
}

#[async_trait]
impl NoteStore for TableNoteStore {
    async fn insert(&self, text: NoteText) -> Result<Note, DbError> {
        let mut table = self.table.lock().unwrap();
        let note = Note {
            id: table.next_id(),
            text: text.into_string(),
            created_at: Some(Utc::now()),
        };
        table.rows.push(note.clone());
        Ok(note)
    }

    async fn list(&self) -> Result<Vec<Note>, DbError> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.table.lock().unwrap().remove(id, |n| n.id, "Note")
    }
}

/// Predictions with `PgPredictionStore` semantics
#[derive(Default)]
pub struct TablePredictionStore {
    table: Mutex<Table<LovePrediction>>,
}

#[async_trait]
impl PredictionStore for TablePredictionStore {
    async fn insert(&self, new: NewPrediction) -> Result<LovePrediction, DbError> {
        let mut table = self.table.lock().unwrap();
        let prediction = LovePrediction {
            id: table.next_id(),
            boy_name: new.boy_name,
            boy_age: new.boy_age,
            boy_dob: new.boy_dob,
            girl_name: new.girl_name,
            girl_age: new.girl_age,
            girl_dob: new.girl_dob,
            prediction_score: new.prediction_score,
            created_at: Some(Utc::now()),
        };
        table.rows.push(prediction.clone());
        Ok(prediction)
    }

    async fn list(&self) -> Result<Vec<LovePrediction>, DbError> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.table
            .lock()
            .unwrap()
            .remove(id, |p| p.id, "Prediction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_prediction(boy: &str) -> NewPrediction {
        NewPrediction {
            boy_name: boy.into(),
            boy_age: 20,
            boy_dob: String::new(),
            girl_name: "Bo".into(),
            girl_age: 20,
            girl_dob: String::new(),
            prediction_score: 50,
        }
    }

    #[tokio::test]
    async fn listed_notes_keep_timestamps() {
        let store = TableNoteStore::default();
        store.insert(NoteText::new("hi").unwrap()).await.unwrap();
        let notes = store.list().await.unwrap();
        assert!(notes[0].created_at.is_some());
    }

    #[tokio::test]
    async fn prediction_ids_not_reused_after_deleting_last() {
        let store = TablePredictionStore::default();
        store.insert(new_prediction("Al")).await.unwrap();
        let second = store.insert(new_prediction("Cy")).await.unwrap();
        store.delete(second.id.into()).await.unwrap();

        let third = store.insert(new_prediction("Ed")).await.unwrap();
        assert_eq!(third.id, 3);
    }
}
