//! HTTP adapter for number endpoints.
//!
//! Exposes the number statistics flow:
//! - `GET /` - Empty form page
//! - `POST /` - Form submission (urlencoded), HTML result page
//! - `POST /api/numbers` - JSON submission, JSON view

mod dto;
mod handlers;
mod page;
mod routes;

pub use dto::{RawNumber, ResultResponse, SubmitNumbersRequest, SubmitNumbersResponse};
pub use handlers::NumbersAppState;
pub use page::{escape_html, render_page};
pub use routes::numbers_router;
