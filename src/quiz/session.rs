use super::category::{Category, ScoreMap};
use super::question::Question;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("quiz is already complete")]
    AlreadyComplete,

    #[error("answer {answer} is out of range for question {question} ({options} options)")]
    AnswerOutOfRange {
        question: usize,
        answer: usize,
        options: usize,
    },

    #[error("expected {expected} answers, got {actual}")]
    WrongAnswerCount { expected: usize, actual: usize },
}

/// What happened after an answer was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Moved on to the question at this index
    Next(usize),
    /// That was the last question; totals are available
    Complete,
}

/// An in-progress quiz over a borrowed question set.
///
/// Answers are append-only. Totals are computed once, when the last answer
/// arrives, and stay fixed until `reset`.
#[derive(Debug, Clone)]
pub struct QuizSession<'q, C: Category> {
    questions: &'q [Question<C>],
    answers: Vec<usize>,
    scores: Option<ScoreMap<C>>,
}

impl<'q, C: Category> QuizSession<'q, C> {
    pub fn new(questions: &'q [Question<C>]) -> Self {
        Self {
            questions,
            answers: Vec::with_capacity(questions.len()),
            scores: None,
        }
    }

    /// Record the selected option for the current question.
    ///
    /// Out-of-range answers and answers after completion are rejected and
    /// leave the session untouched.
    pub fn submit_answer(&mut self, answer: usize) -> Result<Progress, QuizError> {
        let index = self.answers.len();
        let question = match self.questions.get(index) {
            Some(q) if self.scores.is_none() => q,
            _ => return Err(QuizError::AlreadyComplete),
        };

        if answer >= question.options.len() {
            return Err(QuizError::AnswerOutOfRange {
                question: index,
                answer,
                options: question.options.len(),
            });
        }

        self.answers.push(answer);

        if self.answers.len() < self.questions.len() {
            Ok(Progress::Next(self.answers.len()))
        } else {
            let scores = tally(self.questions, &self.answers);
            tracing::debug!(answers = ?self.answers, ?scores, "quiz complete");
            self.scores = Some(scores);
            Ok(Progress::Complete)
        }
    }

    /// Question waiting for an answer, or None once complete
    pub fn current_question(&self) -> Option<&'q Question<C>> {
        if self.scores.is_some() {
            return None;
        }
        self.questions.get(self.answers.len())
    }

    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.scores.is_some()
    }

    /// Final totals; only available after the last answer
    pub fn scores(&self) -> Option<&ScoreMap<C>> {
        self.scores.as_ref()
    }

    /// Percentage through the quiz, counting the question currently shown
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 100.0;
        }
        let shown = (self.answers.len() + 1).min(self.questions.len());
        shown as f64 / self.questions.len() as f64 * 100.0
    }

    /// Drop all answers and totals
    pub fn reset(&mut self) {
        self.answers.clear();
        self.scores = None;
    }
}

/// Sum the weight vector of each answered question.
///
/// Answers beyond the question set are ignored.
pub fn tally<C: Category>(questions: &[Question<C>], answers: &[usize]) -> ScoreMap<C> {
    let mut scores = ScoreMap::zeroed();
    for (question, answer) in questions.iter().zip(answers) {
        scores.accumulate(question.weights_for(*answer));
    }
    scores
}

/// Run a full answer sequence through a fresh session and return the totals
pub fn score_answers<C: Category>(
    questions: &[Question<C>],
    answers: &[usize],
) -> Result<ScoreMap<C>, QuizError> {
    if answers.len() != questions.len() {
        return Err(QuizError::WrongAnswerCount {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let mut session = QuizSession::new(questions);
    for answer in answers {
        session.submit_answer(*answer)?;
    }
    session
        .scores()
        .cloned()
        .ok_or(QuizError::WrongAnswerCount {
            expected: questions.len(),
            actual: answers.len(),
        })
}
