//! Question generation engine.
//!
//! A [`QuestionSet`] is configured through a staged builder (question count,
//! then left operand range, then right operand range) and then produces a
//! lazy, finite, non-restartable sequence of random questions. Randomness is
//! injectable so tests can drive generation with a seeded rng.

use std::ops::RangeInclusive;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{Operator, Question};
use crate::report::ScoreReport;

/// Uniform random integer in `start..=end`.
///
/// Callers guarantee `start <= end`; the builder validates its ranges before
/// any draw happens.
pub fn random_integer_between<R: Rng + ?Sized>(rng: &mut R, start: i64, end: i64) -> i64 {
    rng.gen_range(start..=end)
}

/// Uniform random choice among the three operators, 1/3 each.
pub fn random_operator<R: Rng + ?Sized>(rng: &mut R) -> Operator {
    Operator::ALL[rng.gen_range(0..Operator::ALL.len())]
}

/// Finalized quiz configuration: how many questions, and which operand
/// ranges to draw from.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    question_count: usize,
    left_range: RangeInclusive<i64>,
    right_range: RangeInclusive<i64>,
}

/// First builder stage: the question count is fixed, the left operand range
/// comes next.
#[derive(Debug)]
pub struct Builder {
    question_count: usize,
}

impl Builder {
    /// Fix the inclusive range the left operand is drawn from.
    pub fn with_left_operands(self, range: RangeInclusive<i64>) -> BuilderWithLeft {
        BuilderWithLeft {
            question_count: self.question_count,
            left_range: range,
        }
    }
}

/// Second builder stage: count and left range are fixed, the right operand
/// range finalizes the configuration.
#[derive(Debug)]
pub struct BuilderWithLeft {
    question_count: usize,
    left_range: RangeInclusive<i64>,
}

impl BuilderWithLeft {
    /// Fix the right operand range and finalize, drawing from the thread-local
    /// rng.
    pub fn and_right_operands(
        self,
        range: RangeInclusive<i64>,
    ) -> Result<QuestionSet<ThreadRng>, QuizError> {
        self.and_right_operands_with_rng(range, rand::thread_rng())
    }

    /// Fix the right operand range and finalize with an injected rng, so
    /// generation is reproducible under test.
    pub fn and_right_operands_with_rng<R: Rng>(
        self,
        range: RangeInclusive<i64>,
        rng: R,
    ) -> Result<QuestionSet<R>, QuizError> {
        let config = QuizConfig {
            question_count: self.question_count,
            left_range: self.left_range,
            right_range: range,
        };
        config.validate()?;
        Ok(QuestionSet {
            config,
            rng,
            questions: Vec::new(),
        })
    }
}

impl QuizConfig {
    /// Reject empty ranges instead of letting a draw panic later.
    ///
    /// The effective left draw range is `left.start()..=right.end()`, so it
    /// is checked as well: two individually valid ranges can still combine
    /// into an empty one.
    fn validate(&self) -> Result<(), QuizError> {
        for range in [&self.left_range, &self.right_range] {
            if range.start() > range.end() {
                return Err(QuizError::InvalidRange {
                    start: *range.start(),
                    end: *range.end(),
                });
            }
        }
        if self.left_range.start() > self.right_range.end() {
            return Err(QuizError::InvalidRange {
                start: *self.left_range.start(),
                end: *self.right_range.end(),
            });
        }
        Ok(())
    }
}

/// The configured, finite sequence of questions comprising one quiz run.
///
/// Questions are generated lazily, one per [`QuestionSet::next_question`]
/// call, and accumulated for scoring. The sequence is exhausted after
/// exactly `question_count` draws and cannot be restarted; build a fresh set
/// to run another quiz.
#[derive(Debug)]
pub struct QuestionSet<R> {
    config: QuizConfig,
    rng: R,
    questions: Vec<Question>,
}

impl QuestionSet<ThreadRng> {
    /// Start building a set of `question_count` questions.
    pub fn of_size(question_count: usize) -> Builder {
        Builder { question_count }
    }
}

impl<R: Rng> QuestionSet<R> {
    /// Generate the next question, or `None` once the configured count has
    /// been reached.
    ///
    /// The left operand is drawn from `left.start()..=right.end()`: its
    /// upper bound is the right range's end, not the left range's.
    pub fn next_question(&mut self) -> Option<&mut Question> {
        if self.questions.len() >= self.config.question_count {
            return None;
        }

        let left = random_integer_between(
            &mut self.rng,
            *self.config.left_range.start(),
            *self.config.right_range.end(),
        );
        let right = random_integer_between(
            &mut self.rng,
            *self.config.right_range.start(),
            *self.config.right_range.end(),
        );
        let operator = random_operator(&mut self.rng);

        tracing::debug!(left, right, %operator, "generated question");

        self.questions.push(Question::new(left, right, operator));
        self.questions.last_mut()
    }
}

impl<R> QuestionSet<R> {
    /// How many questions this set generates in total.
    pub fn question_count(&self) -> usize {
        self.config.question_count
    }

    /// The questions generated so far, in generation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Count correct answers out of the configured total.
    ///
    /// Only meaningful after the set has been fully drawn and answered;
    /// questions never drawn or never answered simply count as incorrect.
    pub fn results(&self) -> ScoreReport {
        let correct = self
            .questions
            .iter()
            .filter(|q| q.answer().is_correct())
            .count();
        ScoreReport {
            correct,
            total: self.config.question_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn random_integer_stays_within_inclusive_bounds() {
        let mut rng = seeded(42);
        let ranges = [(1i64, 10i64), (5, 5), (-10, -2), (-3, 4), (0, 1)];
        for (lo, hi) in ranges {
            for _ in 0..1_000 {
                let v = random_integer_between(&mut rng, lo, hi);
                assert!((lo..=hi).contains(&v), "{v} outside {lo}..={hi}");
            }
        }
    }

    #[test]
    fn random_integer_degenerate_range_is_constant() {
        let mut rng = seeded(7);
        for _ in 0..100 {
            assert_eq!(random_integer_between(&mut rng, 3, 3), 3);
        }
    }

    #[test]
    fn random_operator_only_yields_known_symbols() {
        let mut rng = seeded(1);
        for _ in 0..1_000 {
            let symbol = random_operator(&mut rng).symbol();
            assert!(["+", "-", "*"].contains(&symbol));
        }
    }

    #[test]
    fn random_operator_is_roughly_uniform() {
        let mut rng = seeded(99);
        let mut counts = [0u32; 3];
        let trials = 10_000;
        for _ in 0..trials {
            match random_operator(&mut rng) {
                Operator::Addition => counts[0] += 1,
                Operator::Subtraction => counts[1] += 1,
                Operator::Multiplication => counts[2] += 1,
            }
        }
        // Each operator should land near trials/3; allow a generous band.
        for count in counts {
            assert!(
                (2_800..=3_900).contains(&count),
                "skewed operator distribution: {counts:?}"
            );
        }
    }

    #[test]
    fn set_yields_exactly_the_configured_count_then_exhausts() {
        let mut set = QuestionSet::of_size(5)
            .with_left_operands(1..=10)
            .and_right_operands_with_rng(1..=5, seeded(3))
            .unwrap();

        for _ in 0..5 {
            assert!(set.next_question().is_some());
        }
        assert!(set.next_question().is_none());
        // Exhaustion is stable, not restartable.
        assert!(set.next_question().is_none());
        assert_eq!(set.questions().len(), 5);
    }

    #[test]
    fn empty_set_exhausts_immediately_and_scores_zero_of_zero() {
        let mut set = QuestionSet::of_size(0)
            .with_left_operands(1..=10)
            .and_right_operands_with_rng(1..=5, seeded(3))
            .unwrap();

        assert!(set.next_question().is_none());
        assert_eq!(set.results().to_string(), "0/0");
    }

    #[test]
    fn operands_respect_the_configured_draw_ranges() {
        let mut set = QuestionSet::of_size(500)
            .with_left_operands(1..=10)
            .and_right_operands_with_rng(1..=5, seeded(11))
            .unwrap();

        while let Some(question) = set.next_question() {
            // Left is drawn from left.start()..=right.end().
            assert!((1..=5).contains(&question.left_operand()));
            assert!((1..=5).contains(&question.right_operand()));
        }
    }

    #[test]
    fn left_draw_is_bounded_by_the_right_ranges_end() {
        // With a right range wider than the left one, left operands exceed
        // the left range's own upper bound.
        let mut set = QuestionSet::of_size(2_000)
            .with_left_operands(1..=3)
            .and_right_operands_with_rng(1..=50, seeded(17))
            .unwrap();

        let mut saw_left_above_left_end = false;
        while let Some(question) = set.next_question() {
            assert!((1..=50).contains(&question.left_operand()));
            if question.left_operand() > 3 {
                saw_left_above_left_end = true;
            }
        }
        assert!(saw_left_above_left_end);
    }

    #[test]
    fn answering_everything_correctly_scores_full_marks() {
        let mut set = QuestionSet::of_size(5)
            .with_left_operands(1..=10)
            .and_right_operands_with_rng(1..=5, seeded(23))
            .unwrap();

        while let Some(question) = set.next_question() {
            let correct = question.correct_answer();
            assert!(question.answered_with(correct).is_correct());
        }
        assert_eq!(set.results().to_string(), "5/5");
    }

    #[test]
    fn partial_answering_undercounts_without_error() {
        let mut set = QuestionSet::of_size(4)
            .with_left_operands(1..=10)
            .and_right_operands_with_rng(1..=5, seeded(29))
            .unwrap();

        let mut answered = 0;
        while let Some(question) = set.next_question() {
            if answered < 2 {
                let correct = question.correct_answer();
                question.answered_with(correct);
                answered += 1;
            }
        }
        let report = set.results();
        assert_eq!(report.correct, 2);
        assert_eq!(report.total, 4);
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let err = QuestionSet::of_size(5)
            .with_left_operands(10..=1)
            .and_right_operands_with_rng(1..=5, seeded(0))
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidRange { start: 10, end: 1 }));

        let err = QuestionSet::of_size(5)
            .with_left_operands(1..=10)
            .and_right_operands_with_rng(5..=1, seeded(0))
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidRange { start: 5, end: 1 }));
    }

    #[test]
    fn effective_left_range_empty_across_valid_ranges_is_rejected() {
        // Left 5..=10 and right 1..=3 are each valid, but the left draw
        // range collapses to 5..=3.
        let err = QuestionSet::of_size(5)
            .with_left_operands(5..=10)
            .and_right_operands_with_rng(1..=3, seeded(0))
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidRange { start: 5, end: 3 }));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let draw = |seed: u64| {
            let mut set = QuestionSet::of_size(10)
                .with_left_operands(1..=10)
                .and_right_operands_with_rng(1..=5, seeded(seed))
                .unwrap();
            let mut formatted = Vec::new();
            while let Some(question) = set.next_question() {
                formatted.push(question.formatted());
            }
            formatted
        };

        assert_eq!(draw(1234), draw(1234));
        assert_ne!(draw(1234), draw(4321));
    }
}
