//! HTTP DTOs for the JSON number endpoint.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::NumbersView;
use crate::domain::numbers::{NumberForm, ResultRecord};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A field value as sent by a JSON client: a number or its text.
///
/// Any other JSON value (boolean, array, object) is kept as its JSON text,
/// which then fails numeric validation like any other bad input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawNumber {
    fn into_text(self) -> String {
        match self {
            RawNumber::Number(n) => n.to_string(),
            RawNumber::Text(s) => s,
            RawNumber::Other(value) => value.to_string(),
        }
    }
}

/// Request to compute statistics over five numbers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitNumbersRequest {
    #[serde(default)]
    pub a: Option<RawNumber>,
    #[serde(default)]
    pub b: Option<RawNumber>,
    #[serde(default)]
    pub c: Option<RawNumber>,
    #[serde(default)]
    pub d: Option<RawNumber>,
    #[serde(default)]
    pub e: Option<RawNumber>,
}

impl From<SubmitNumbersRequest> for NumberForm {
    fn from(req: SubmitNumbersRequest) -> Self {
        Self {
            a: req.a.map(RawNumber::into_text),
            b: req.b.map(RawNumber::into_text),
            c: req.c.map(RawNumber::into_text),
            d: req.d.map(RawNumber::into_text),
            e: req.e.map(RawNumber::into_text),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Computed statistics for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
    pub original: Vec<f64>,
    pub filtered: Vec<f64>,
    pub average: f64,
    pub avg_above_50: bool,
    pub positive_count: u32,
    pub is_even: bool,
    pub has_negative: bool,
}

impl From<ResultRecord> for ResultResponse {
    fn from(record: ResultRecord) -> Self {
        Self {
            original: record.original.values().to_vec(),
            filtered: record.filtered,
            average: record.average,
            avg_above_50: record.avg_above_50,
            positive_count: record.positive_count,
            is_even: record.is_even,
            has_negative: record.has_negative,
        }
    }
}

/// Response for a number submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitNumbersResponse {
    pub form: NumberForm,
    pub result: Option<ResultResponse>,
    pub error: Option<String>,
}

impl From<NumbersView> for SubmitNumbersResponse {
    fn from(view: NumbersView) -> Self {
        Self {
            form: view.form,
            result: view.result.map(Into::into),
            error: view.error,
        }
    }
}
