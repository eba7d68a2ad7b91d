//! Debug views of the backing table
//!
//! `/db-viewer` returns every record with its timestamp as JSON,
//! `/db-table` renders the same rows as an HTML table.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::repos::{LovePrediction, Note};
use crate::http::error::ApiError;
use crate::store::{NoteStore, PredictionStore};

/// Note with its creation timestamp
#[derive(Debug, Serialize)]
pub struct NoteRecord {
    pub id: i32,
    pub text: String,
    pub created_at: Option<String>,
}

impl From<Note> for NoteRecord {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            text: n.text,
            created_at: timestamp(n.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotesDump {
    pub total_notes: usize,
    pub notes: Vec<NoteRecord>,
}

/// Prediction with its creation timestamp
#[derive(Debug, Serialize)]
pub struct PredictionRecord {
    pub id: i32,
    pub boy_name: String,
    pub boy_age: i32,
    pub boy_dob: String,
    pub girl_name: String,
    pub girl_age: i32,
    pub girl_dob: String,
    pub prediction_score: i32,
    pub created_at: Option<String>,
}

impl From<LovePrediction> for PredictionRecord {
    fn from(p: LovePrediction) -> Self {
        Self {
            id: p.id,
            boy_name: p.boy_name,
            boy_age: p.boy_age,
            boy_dob: p.boy_dob,
            girl_name: p.girl_name,
            girl_age: p.girl_age,
            girl_dob: p.girl_dob,
            prediction_score: p.prediction_score,
            created_at: timestamp(p.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictionsDump {
    pub total_predictions: usize,
    pub predictions: Vec<PredictionRecord>,
}

fn timestamp(at: Option<DateTime<Utc>>) -> Option<String> {
    at.map(|t| t.to_rfc3339())
}

async fn note_records<S: NoteStore>(store: &S) -> Result<Vec<NoteRecord>, ApiError> {
    Ok(store.list().await?.into_iter().map(NoteRecord::from).collect())
}

async fn prediction_records<S: PredictionStore>(
    store: &S,
) -> Result<Vec<PredictionRecord>, ApiError> {
    Ok(store
        .list()
        .await?
        .into_iter()
        .map(PredictionRecord::from)
        .collect())
}

/// GET /db-viewer (notes)
async fn notes_json<S: NoteStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<NotesDump>, ApiError> {
    let notes = note_records(store.as_ref()).await?;
    Ok(Json(NotesDump {
        total_notes: notes.len(),
        notes,
    }))
}

/// GET /db-table (notes)
async fn notes_html<S: NoteStore>(State(store): State<Arc<S>>) -> Result<Html<String>, ApiError> {
    let notes = note_records(store.as_ref()).await?;
    let rows: Vec<Vec<String>> = notes
        .into_iter()
        .map(|n| vec![n.id.to_string(), n.text, n.created_at.unwrap_or_default()])
        .collect();

    Ok(Html(render_table("Notes", &["ID", "Text", "Created At"], &rows)))
}

/// GET /db-viewer (predictions)
async fn predictions_json<S: PredictionStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<PredictionsDump>, ApiError> {
    let predictions = prediction_records(store.as_ref()).await?;
    Ok(Json(PredictionsDump {
        total_predictions: predictions.len(),
        predictions,
    }))
}

/// GET /db-table (predictions)
async fn predictions_html<S: PredictionStore>(
    State(store): State<Arc<S>>,
) -> Result<Html<String>, ApiError> {
    let predictions = prediction_records(store.as_ref()).await?;
    let rows: Vec<Vec<String>> = predictions
        .into_iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.boy_name,
                p.boy_age.to_string(),
                p.boy_dob,
                p.girl_name,
                p.girl_age.to_string(),
                p.girl_dob,
                p.prediction_score.to_string(),
                p.created_at.unwrap_or_default(),
            ]
        })
        .collect();

    let headers = [
        "ID",
        "Boy Name",
        "Boy Age",
        "Boy DOB",
        "Girl Name",
        "Girl Age",
        "Girl DOB",
        "Score",
        "Created At",
    ];
    Ok(Html(render_table("Love Predictions", &headers, &rows)))
}

/// Viewer routes for a notes service
pub fn notes_router<S: NoteStore>() -> Router<Arc<S>> {
    Router::new()
        .route("/db-viewer", get(notes_json::<S>))
        .route("/db-table", get(notes_html::<S>))
}

/// Viewer routes for a predictions service
pub fn predictions_router<S: PredictionStore>() -> Router<Arc<S>> {
    Router::new()
        .route("/db-viewer", get(predictions_json::<S>))
        .route("/db-table", get(predictions_html::<S>))
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse}\
th,td{border:1px solid #ccc;padding:.4rem .8rem;text-align:left}\
th{background:#f4f4f4}";

/// Render a titled HTML table. Cell text is escaped.
fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head><body><h1>{title}</h1><p>Total: {total}</p>\
         <table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table></body></html>",
        total = rows.len()
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
