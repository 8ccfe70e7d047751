//! PersistedDocument - the write-once record of one computation.

use serde::Serialize;

use super::input::InputVector;
use super::result::ResultRecord;
use crate::domain::foundation::Timestamp;

/// Name of the collection every document is written to.
pub const RESULTS_COLLECTION: &str = "results";

/// Input plus derived result, as handed to the durable store.
///
/// Serializes to `{ "input": [...], "result": {...} }`. The creation time
/// is kept out of the body; stores record it alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistedDocument {
    input: InputVector,
    result: ResultRecord,
    #[serde(skip)]
    created_at: Timestamp,
}

impl PersistedDocument {
    pub fn new(input: InputVector, result: ResultRecord) -> Self {
        Self {
            input,
            result,
            created_at: Timestamp::now(),
        }
    }

    pub fn input(&self) -> &InputVector {
        &self.input
    }

    pub fn result(&self) -> &ResultRecord {
        &self.result
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
