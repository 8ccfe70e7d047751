//! Number submission handlers.

mod submit_numbers;

pub use submit_numbers::{
    NumbersView, SubmitNumbersCommand, SubmitNumbersHandler, INVALID_INPUT_MESSAGE,
};
