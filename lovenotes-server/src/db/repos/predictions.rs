//! Love prediction repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use super::DbError;
use crate::models::NewPrediction;

/// Love prediction record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LovePrediction {
    pub id: i32,
    pub boy_name: String,
    pub boy_age: i32,
    pub boy_dob: String,
    pub girl_name: String,
    pub girl_age: i32,
    pub girl_dob: String,
    pub prediction_score: i32,
    pub created_at: Option<DateTime<Utc>>,
}

const COLUMNS: &str = "id, boy_name, boy_age, boy_dob, girl_name, girl_age, girl_dob, \
                       prediction_score, created_at";

/// Love prediction repository
pub struct PredictionRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PredictionRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a scored prediction.
    pub async fn create(&mut self, new: &NewPrediction) -> Result<LovePrediction, DbError> {
        let sql = format!(
            r#"
            INSERT INTO love_predictions
                (boy_name, boy_age, boy_dob, girl_name, girl_age, girl_dob, prediction_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        );

        let prediction: LovePrediction = sqlx::query_as(&sql)
            .bind(&new.boy_name)
            .bind(new.boy_age)
            .bind(&new.boy_dob)
            .bind(&new.girl_name)
            .bind(new.girl_age)
            .bind(&new.girl_dob)
            .bind(new.prediction_score)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(prediction)
    }

    /// All predictions in the table's natural order.
    pub async fn list(&mut self) -> Result<Vec<LovePrediction>, DbError> {
        let sql = format!("SELECT {COLUMNS} FROM love_predictions");
        let predictions = sqlx::query_as(&sql).fetch_all(&mut *self.conn).await?;

        Ok(predictions)
    }

    /// Delete a prediction by id.
    ///
    /// Returns `DbError::NotFound` if no prediction has that id. Ids outside the
    /// `SERIAL` range cannot exist and are reported the same way.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let not_found = || DbError::NotFound {
            resource: "Prediction",
            id: id.to_string(),
        };
        let id = i32::try_from(id).map_err(|_| not_found())?;

        let result = sqlx::query("DELETE FROM love_predictions WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }
}
