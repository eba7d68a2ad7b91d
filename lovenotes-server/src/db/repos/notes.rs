//! Note repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use super::DbError;
use crate::models::NoteText;

/// Note record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: i32,
    pub text: String,
    /// Null for rows written without the column default, and for in-memory notes
    pub created_at: Option<DateTime<Utc>>,
}

/// Note repository
pub struct NoteRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> NoteRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a note; id and created_at are assigned by the database.
    pub async fn create(&mut self, text: &NoteText) -> Result<Note, DbError> {
        let note: Note = sqlx::query_as(
            r#"
            INSERT INTO notes (text)
            VALUES ($1)
            RETURNING id, text, created_at
            "#,
        )
        .bind(text.as_str())
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(note)
    }

    /// All notes in the table's natural order.
    pub async fn list(&mut self) -> Result<Vec<Note>, DbError> {
        let notes = sqlx::query_as("SELECT id, text, created_at FROM notes")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(notes)
    }

    /// Delete a note by id.
    ///
    /// Returns `DbError::NotFound` if no note has that id. Ids outside the
    /// `SERIAL` range cannot exist and are reported the same way.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let not_found = || DbError::NotFound {
            resource: "Note",
            id: id.to_string(),
        };
        let id = i32::try_from(id).map_err(|_| not_found())?;

        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }
}
