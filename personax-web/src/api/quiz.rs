//! Quiz API: question listing, scoring, and result export
//!
//! Submissions carry one answer per catalog question, as either a
//! canonical scale label or a raw weight. Scoring is a pure call into
//! personax-core; nothing is stored between requests.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use personax_core::{describe, score, Error, Response as ScaleResponse, TypeResult};

use crate::AppState;

/// One catalog entry as shown to the quiz UI. Axis tags and favored
/// letters stay server-side; exposing them would let the page bias
/// presentation per axis.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub text: String,
}

/// GET /api/questions response
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub count: usize,
    pub questions: Vec<QuestionView>,
    pub options: Vec<&'static str>,
}

/// GET /api/questions
///
/// Returns the question texts in catalog order plus the five answer labels.
pub async fn get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    let questions = state
        .catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionView {
            number: index + 1,
            text: question.text.clone(),
        })
        .collect();

    Json(QuestionsResponse {
        count: state.catalog.len(),
        questions,
        options: ScaleResponse::ALL.iter().map(|r| r.label()).collect(),
    })
}

/// A single submitted answer: either a raw weight or a canonical label
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Weight(i32),
    Label(String),
}

impl Answer {
    fn to_weight(&self) -> Result<i32, Error> {
        match self {
            Answer::Weight(weight) => ScaleResponse::from_weight(*weight).map(|r| r.weight()),
            Answer::Label(label) => ScaleResponse::from_label(label).map(|r| r.weight()),
        }
    }
}

/// POST /api/score and /api/export request body
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Answer>,
}

impl ScoreRequest {
    fn to_weights(&self) -> Result<Vec<i32>, Error> {
        self.answers.iter().map(Answer::to_weight).collect()
    }
}

/// Per-letter explanation attached to a score response
#[derive(Debug, Serialize)]
pub struct LetterView {
    pub letter: char,
    pub explanation: &'static str,
}

/// POST /api/score response: the result plus display text
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: TypeResult,
    pub summary: &'static str,
    pub letters: Vec<LetterView>,
}

/// POST /api/score
///
/// Scores one submission and attaches the static type summary and
/// per-letter explanations for display.
pub async fn score_submission(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, QuizError> {
    let weights = request.to_weights().map_err(QuizError)?;
    let result = score(&state.catalog, &weights).map_err(QuizError)?;
    debug!("Scored submission: {}", result.code);

    let summary = describe::type_summary(&result.code).unwrap_or(describe::UNKNOWN_TYPE_SUMMARY);
    let letters = result
        .code
        .chars()
        .filter_map(|letter| {
            describe::letter_explanation(letter).map(|explanation| LetterView { letter, explanation })
        })
        .collect();

    Ok(Json(ScoreResponse { result, summary, letters }))
}

/// POST /api/export
///
/// Scores one submission and returns the key/value export document as a
/// plain-text download.
pub async fn export_submission(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Response, QuizError> {
    let weights = request.to_weights().map_err(QuizError)?;
    let result = score(&state.catalog, &weights).map_err(QuizError)?;
    let document = result.to_export_string().map_err(QuizError)?;

    Ok((
        StatusCode::OK,
        [
            ("content-type", "text/plain; charset=utf-8"),
            ("content-disposition", "attachment; filename=\"personax_result.toml\""),
        ],
        document,
    )
        .into_response())
}

/// Quiz API error wrapper mapping the core taxonomy to HTTP statuses
#[derive(Debug)]
pub struct QuizError(pub Error);

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}
