//! The interactive quiz loop.
//!
//! The loop is written against `impl BufRead` / `impl Write` and takes the
//! question set as a parameter, so unit tests can drive a full run with a
//! seeded rng and a scripted transcript. `main` wires up stdin, stdout, and
//! the thread-local rng.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::{bail, Context, Result};
use rand::rngs::ThreadRng;
use rand::Rng;

use mathquiz_core::engine::QuestionSet;

/// The fixed game configuration: five questions per run.
pub const QUESTION_COUNT: usize = 5;
pub const LEFT_OPERANDS: RangeInclusive<i64> = 1..=10;
pub const RIGHT_OPERANDS: RangeInclusive<i64> = 1..=5;

/// Build the question set for a default game.
pub fn default_question_set() -> Result<QuestionSet<ThreadRng>> {
    QuestionSet::of_size(QUESTION_COUNT)
        .with_left_operands(LEFT_OPERANDS)
        .and_right_operands(RIGHT_OPERANDS)
        .context("invalid quiz configuration")
}

/// Play one quiz run to completion.
///
/// Malformed or missing input is a fatal error: it propagates to the caller
/// without any retry or re-prompt.
pub fn run<R: Rng>(
    set: &mut QuestionSet<R>,
    mut input: impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    tracing::debug!(count = set.question_count(), "starting quiz run");

    writeln!(output, "Welcome to the Math Quiz Game!")?;
    writeln!(
        output,
        "You will be presented with math problems, and you need to provide the correct answers."
    )?;

    while let Some(question) = set.next_question() {
        writeln!(output, "Question: {} = ?", question.formatted())?;
        write!(output, "Your answer: ")?;
        output.flush()?;

        let submitted = read_answer(&mut input)?;

        if question.answered_with(submitted).is_correct() {
            writeln!(output, "Correct! You earned a point.")?;
        } else {
            writeln!(
                output,
                "Wrong answer. The correct answer is {}",
                question.correct_answer()
            )?;
        }
    }

    writeln!(output, "\nGame over! Your score is: {}", set.results())?;
    Ok(())
}

fn read_answer(input: &mut impl BufRead) -> Result<i64> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line).context("failed to read answer")?;
    if bytes_read == 0 {
        bail!("no answer given: end of input");
    }
    let trimmed = line.trim();
    trimmed
        .parse()
        .with_context(|| format!("invalid answer {trimmed:?}: expected an integer"))
}
