//! # quizgen
//!
//! Interactive generator for quiz question files.
//!
//! The user is prompted field by field for each question; the collected
//! questions are written out as a pretty-printed JSON array.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizgen::{App, QuizGenError, Settings, terminal::Console};
//!
//! fn main() -> Result<(), QuizGenError> {
//!     let app = App::new(Console::stdio(true), Settings::default());
//!     let report = app.run()?;
//!     eprintln!("{} questions written", report.count);
//!     Ok(())
//! }
//! ```

mod app;
pub mod builders;
mod data;
mod models;
pub mod terminal;

use std::io;

use thiserror::Error;

pub use app::{App, BANNER, SaveReport, Session, Settings, Stage};
pub use data::{DEFAULT_OUTPUT_PATH, WriteError, write_questions};
pub use models::{
    MultipleChoice, OPTION_LABELS, Question, QuestionKind, SameLetterMc, UnknownKind,
};

/// Error type for generator operations.
#[derive(Debug, Error)]
pub enum QuizGenError {
    /// Terminal read or write failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Standard input ended before the session was finished.
    #[error("Input closed before the session was saved")]
    InputClosed,

    /// Writing the output file failed.
    #[error(transparent)]
    Write(#[from] WriteError),
}
