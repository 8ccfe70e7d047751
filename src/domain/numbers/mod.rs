//! Numbers module - the five-number statistics domain.
//!
//! # Components
//!
//! - `NumberForm` - raw text of the five fields, as submitted
//! - `InputVector` - validated `[a, b, c, d, e]`
//! - `ResultRecord` - average, parity, filter and sign statistics
//! - `PersistedDocument` - input and result bundled for the store
//!
//! Everything here is pure; persistence lives behind `ports::ResultStore`.

mod document;
mod form;
mod input;
mod result;

pub use document::{PersistedDocument, RESULTS_COLLECTION};
pub use form::{NumberForm, FIELD_NAMES};
pub use input::{InputVector, INPUT_LEN};
pub use result::{
    round_to, ResultRecord, AVERAGE_DECIMALS, AVERAGE_THRESHOLD, FILTER_THRESHOLD,
};
