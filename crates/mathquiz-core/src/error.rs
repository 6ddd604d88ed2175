//! Quiz configuration error types.
//!
//! Defined here so the builder in `engine` can reject bad operand ranges at
//! construction time instead of panicking mid-draw.

use thiserror::Error;

/// Errors that can occur when configuring a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// An operand range is empty: its start is greater than its end.
    #[error("invalid operand range: start {start} is greater than end {end}")]
    InvalidRange { start: i64, end: i64 },
}
