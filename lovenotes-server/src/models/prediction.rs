//! Love prediction request/response models and the scoring algorithm

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::db::repos::LovePrediction;

/// Scores below this get a flat bonus
const LOW_SCORE_FLOOR: i32 = 20;
const LOW_SCORE_BONUS: i32 = 30;

/// Scores above this are re-rolled into `HIGH_SCORE_RANGE`
const HIGH_SCORE_CEILING: i32 = 95;
const HIGH_SCORE_RANGE: std::ops::RangeInclusive<i32> = 85..=95;

const RANDOM_FACTOR_RANGE: std::ops::RangeInclusive<i32> = 1..=30;

/// POST /predict body
///
/// Unknown fields (including any client-sent `prediction_score`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePredictionRequest {
    pub boy_name: String,
    pub boy_age: i32,
    pub boy_dob: String,
    pub girl_name: String,
    pub girl_age: i32,
    pub girl_dob: String,
}

/// A prediction ready to be inserted: request fields plus the computed score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrediction {
    pub boy_name: String,
    pub boy_age: i32,
    pub boy_dob: String,
    pub girl_name: String,
    pub girl_age: i32,
    pub girl_dob: String,
    pub prediction_score: i32,
}

impl NewPrediction {
    /// Score the request and attach the result.
    pub fn score<R: Rng + ?Sized>(req: CreatePredictionRequest, rng: &mut R) -> Self {
        let prediction_score = predict_score(
            &req.boy_name,
            &req.girl_name,
            req.boy_age,
            req.girl_age,
            rng,
        );

        Self {
            boy_name: req.boy_name,
            boy_age: req.boy_age,
            boy_dob: req.boy_dob,
            girl_name: req.girl_name,
            girl_age: req.girl_age,
            girl_dob: req.girl_dob,
            prediction_score,
        }
    }
}

/// Compute a love score. Non-deterministic: two calls with identical
/// inputs generally differ.
pub fn predict_score<R: Rng + ?Sized>(
    boy_name: &str,
    girl_name: &str,
    boy_age: i32,
    girl_age: i32,
    rng: &mut R,
) -> i32 {
    let random_factor = rng.gen_range(RANDOM_FACTOR_RANGE);
    let raw = raw_score(boy_name, girl_name, boy_age, girl_age, random_factor);
    adjust_score(raw, rng)
}

/// Score before the low/high adjustment, always in `0..=99`.
///
/// Name length counts characters, not bytes. The modulo is Euclidean so a
/// large age gap never produces a negative score.
pub fn raw_score(
    boy_name: &str,
    girl_name: &str,
    boy_age: i32,
    girl_age: i32,
    random_factor: i32,
) -> i32 {
    let name_compatibility = (boy_name.chars().count() as i64 + girl_name.chars().count() as i64) * 3;
    let age_compatibility = (i64::from(boy_age) - i64::from(girl_age)).abs() * 2;

    // rem_euclid(100) is in 0..=99, fits in i32
    (name_compatibility + i64::from(random_factor) - age_compatibility).rem_euclid(100) as i32
}

/// Apply the low-score bonus or the high-score re-roll.
///
/// The bonus is not clamped afterwards.
pub fn adjust_score<R: Rng + ?Sized>(raw: i32, rng: &mut R) -> i32 {
    if raw < LOW_SCORE_FLOOR {
        raw + LOW_SCORE_BONUS
    } else if raw > HIGH_SCORE_CEILING {
        rng.gen_range(HIGH_SCORE_RANGE)
    } else {
        raw
    }
}

/// Prediction as returned by the list and create endpoints (no timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub id: i32,
    pub boy_name: String,
    pub boy_age: i32,
    pub boy_dob: String,
    pub girl_name: String,
    pub girl_age: i32,
    pub girl_dob: String,
    pub prediction_score: i32,
}

impl From<LovePrediction> for PredictionResponse {
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
        }
    }
}
