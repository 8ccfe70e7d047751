//! SubmitNumbersHandler - validates, computes and persists one submission.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::numbers::{InputVector, NumberForm, PersistedDocument, ResultRecord};
use crate::ports::ResultStore;

/// Message shown for any missing or non-numeric field.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter valid numbers.";

/// Command carrying the raw form of one submission.
#[derive(Debug, Clone)]
pub struct SubmitNumbersCommand {
    pub form: NumberForm,
}

/// Everything the page needs to render.
///
/// - fresh page: empty form, no result, no error
/// - invalid submission: submitted form, no result, error
/// - valid submission: submitted form, result, and an error only if the
///   store write failed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumbersView {
    pub form: NumberForm,
    pub result: Option<ResultRecord>,
    pub error: Option<String>,
}

impl NumbersView {
    /// View for a fresh, unsubmitted page.
    pub fn empty() -> Self {
        Self {
            form: NumberForm::empty(),
            result: None,
            error: None,
        }
    }

    fn invalid(form: NumberForm) -> Self {
        Self {
            form,
            result: None,
            error: Some(INVALID_INPUT_MESSAGE.to_string()),
        }
    }

    fn computed(form: NumberForm, result: ResultRecord, error: Option<String>) -> Self {
        Self {
            form,
            result: Some(result),
            error,
        }
    }

    /// True when the submission failed validation.
    pub fn is_invalid(&self) -> bool {
        self.result.is_none() && self.error.is_some()
    }
}

/// Handler for number submissions.
pub struct SubmitNumbersHandler {
    store: Arc<dyn ResultStore>,
}

impl SubmitNumbersHandler {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    /// Runs one submission through validate, compute, persist.
    ///
    /// Never fails: validation and store errors are both folded into the
    /// returned view.
    pub async fn handle(&self, cmd: SubmitNumbersCommand) -> NumbersView {
        // 1. Validate
        let input = match InputVector::parse(&cmd.form) {
            Ok(input) => input,
            Err(e) => {
                debug!(field = e.field(), reason = %e, "Rejected number submission");
                return NumbersView::invalid(cmd.form);
            }
        };

        // 2. Compute
        let result = ResultRecord::compute(&input);

        // 3. Persist, single attempt
        let document = PersistedDocument::new(input, result.clone());
        let error = match self.store.insert(&document).await {
            Ok(document_id) => {
                info!(
                    document_id = %document_id,
                    average = result.average,
                    "Stored number result"
                );
                None
            }
            Err(e) => {
                warn!(code = %e.code, error = %e.message, "Failed to store number result");
                Some(format!("Database error: {}", e.message))
            }
        };

        NumbersView::computed(cmd.form, result, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DocumentId, DomainError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockResultStore {
        saved: Mutex<Vec<PersistedDocument>>,
        fail_insert: bool,
    }

    impl MockResultStore {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_insert: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_insert: true,
            }
        }

        fn saved(&self) -> Vec<PersistedDocument> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResultStore for MockResultStore {
        async fn insert(&self, document: &PersistedDocument) -> Result<DocumentId, DomainError> {
            if self.fail_insert {
                return Err(DomainError::database("connection refused"));
            }
            self.saved.lock().unwrap().push(document.clone());
            Ok(DocumentId::new())
        }
    }

    fn command(values: [&str; 5]) -> SubmitNumbersCommand {
        SubmitNumbersCommand {
            form: NumberForm::from_values(values),
        }
    }

    #[test]
    fn empty_view_has_nothing() {
        let view = NumbersView::empty();
        assert!(view.form.is_empty());
        assert!(view.result.is_none());
        assert!(view.error.is_none());
        assert!(!view.is_invalid());
    }

    #[tokio::test]
    async fn valid_submission_computes_and_persists() {
        let store = Arc::new(MockResultStore::new());
        let handler = SubmitNumbersHandler::new(store.clone());

        let view = handler.handle(command(["5", "15", "-3", "60", "20"])).await;

        let result = view.result.expect("result should be present");
        assert_eq!(result.average, 19.4);
        assert_eq!(result.filtered, vec![15.0, 20.0, 60.0]);
        assert!(view.error.is_none());

        let saved = store.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].result(), &result);
        assert_eq!(saved[0].input().values(), &[5.0, 15.0, -3.0, 60.0, 20.0]);
    }

    #[tokio::test]
    async fn valid_submission_keeps_submitted_form() {
        let handler = SubmitNumbersHandler::new(Arc::new(MockResultStore::new()));
        let cmd = command(["60", "70", "80", "90", "100"]);
        let form = cmd.form.clone();

        let view = handler.handle(cmd).await;

        assert_eq!(view.form, form);
    }

    #[tokio::test]
    async fn invalid_submission_skips_compute_and_store() {
        let store = Arc::new(MockResultStore::new());
        let handler = SubmitNumbersHandler::new(store.clone());

        let view = handler.handle(command(["5", "abc", "-3", "60", "20"])).await;

        assert!(view.is_invalid());
        assert!(view.result.is_none());
        assert_eq!(view.error.as_deref(), Some(INVALID_INPUT_MESSAGE));
        assert_eq!(view.form.field("b"), Some("abc"));
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn missing_field_is_invalid() {
        let handler = SubmitNumbersHandler::new(Arc::new(MockResultStore::new()));
        let mut cmd = command(["1", "2", "3", "4", "5"]);
        cmd.form.e = None;

        let view = handler.handle(cmd).await;

        assert!(view.is_invalid());
    }

    #[tokio::test]
    async fn store_failure_still_returns_result() {
        let handler = SubmitNumbersHandler::new(Arc::new(MockResultStore::failing()));

        let view = handler.handle(command(["60", "70", "80", "90", "100"])).await;

        let result = view.result.as_ref().expect("result should be present");
        assert_eq!(result.average, 80.0);
        assert!(result.avg_above_50);
        assert!(!result.is_even);

        assert!(!view.is_invalid());
        let error = view.error.as_deref().expect("error should be present");
        assert_eq!(error, "Database error: connection refused");
    }
}
