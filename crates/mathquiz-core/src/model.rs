//! Core data model types for mathquiz.
//!
//! These are the fundamental types the quiz is built from: the arithmetic
//! operators, a single generated question, and the recorded answer outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The arithmetic operators a question can use.
///
/// The set is closed and small, so variants are dispatched by pattern
/// matching rather than through a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operator {
    /// Every operator, in a fixed order. Used for uniform random selection.
    pub const ALL: [Operator; 3] = [
        Operator::Addition,
        Operator::Subtraction,
        Operator::Multiplication,
    ];

    /// Apply the operation to two operands.
    ///
    /// Total over `i64`; overflow follows native integer semantics.
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Addition => left + right,
            Operator::Subtraction => left - right,
            Operator::Multiplication => left * right,
        }
    }

    /// The display symbol: `"+"`, `"-"`, or `"*"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Addition => "+",
            Operator::Subtraction => "-",
            Operator::Multiplication => "*",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The recorded outcome of a submission for one question.
///
/// A question that has not been answered yet carries the [`Answer::missing`]
/// sentinel, which reports `is_correct() == false` just like a genuinely
/// wrong submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    is_correct: bool,
}

impl Answer {
    /// The "not answered yet" sentinel.
    pub fn missing() -> Self {
        Self { is_correct: false }
    }

    /// A concrete grading outcome.
    pub fn graded(is_correct: bool) -> Self {
        Self { is_correct }
    }

    pub fn is_correct(self) -> bool {
        self.is_correct
    }
}

/// One generated arithmetic problem with a definite correct answer.
///
/// Operands and operator are fixed at creation; only the stored [`Answer`]
/// changes, through [`Question::answered_with`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    left_operand: i64,
    right_operand: i64,
    operator: Operator,
    answer: Answer,
}

impl Question {
    pub fn new(left_operand: i64, right_operand: i64, operator: Operator) -> Self {
        Self {
            left_operand,
            right_operand,
            operator,
            answer: Answer::missing(),
        }
    }

    pub fn left_operand(&self) -> i64 {
        self.left_operand
    }

    pub fn right_operand(&self) -> i64 {
        self.right_operand
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The correct answer for this question. Pure; callable any number of
    /// times.
    pub fn correct_answer(&self) -> i64 {
        self.operator.apply(self.left_operand, self.right_operand)
    }

    /// Render as `"{left} {symbol} {right}"`.
    pub fn formatted(&self) -> String {
        format!(
            "{} {} {}",
            self.left_operand, self.operator, self.right_operand
        )
    }

    /// Grade a submission and store the outcome.
    ///
    /// Repeated calls overwrite: the last submission wins.
    pub fn answered_with(&mut self, submitted: i64) -> Answer {
        self.answer = Answer::graded(submitted == self.correct_answer());
        self.answer
    }

    /// The currently stored answer; [`Answer::missing`] before any
    /// submission.
    pub fn answer(&self) -> Answer {
        self.answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left_operand, self.operator, self.right_operand
        )
    }
}
