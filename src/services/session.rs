use crate::domain::answers::AnswerSet;
use crate::domain::models::{RuleId, Verdict};
use crate::domain::questions::{Question, QUESTIONS};
use crate::services::evaluator::evaluate_traced;
use crate::services::validation::{validate, InvalidInput, Problem, RawAnswers};

/// Progress through the quiz. Transitions return a new session and leave the
/// receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    position: usize,
    answers: RawAnswers,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        QUESTIONS.len()
    }

    pub fn is_complete(&self) -> bool {
        self.position >= QUESTIONS.len()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.position)
    }

    pub fn select(&self, value: &str) -> Result<QuizSession, InvalidInput> {
        let question = self
            .current_question()
            .ok_or_else(|| InvalidInput::single(Problem::QuizComplete))?;
        if question.option(value).is_none() {
            return Err(InvalidInput::single(Problem::UnknownOption {
                question: question.id,
                value: value.to_string(),
            }));
        }

        let mut answers = self.answers.clone();
        answers.insert(question.id.as_str().to_string(), value.to_string());
        log::debug!("answered {} = {}", question.id, value);
        Ok(QuizSession {
            position: self.position + 1,
            answers,
        })
    }

    /// Steps back one question. The earlier answer stays recorded until it is
    /// answered again.
    pub fn back(&self) -> QuizSession {
        QuizSession {
            position: self.position.saturating_sub(1),
            answers: self.answers.clone(),
        }
    }

    pub fn restart(&self) -> QuizSession {
        QuizSession::new()
    }

    pub fn answers(&self) -> Result<AnswerSet, InvalidInput> {
        if !self.is_complete() {
            let problems = QUESTIONS[self.position..]
                .iter()
                .map(|q| Problem::Missing { question: q.id })
                .collect();
            return Err(InvalidInput { problems });
        }
        validate(&self.answers)
    }

    pub fn verdict(&self) -> Result<(RuleId, Verdict), InvalidInput> {
        self.answers().map(|a| evaluate_traced(&a))
    }
}
