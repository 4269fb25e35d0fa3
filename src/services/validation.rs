use crate::domain::answers::{AnswerSet, QuestionId};
use std::collections::BTreeMap;
use std::fmt;

/// Untyped answers as they arrive from a file, flags or a partially filled quiz.
pub type RawAnswers = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Missing { question: QuestionId },
    UnknownOption { question: QuestionId, value: String },
    UnknownQuestion { key: String },
    QuizComplete,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing { question } => write!(f, "missing answer for {}", question),
            Problem::UnknownOption { question, value } => write!(
                f,
                "invalid value '{}' for {} (expected one of: {})",
                value,
                question,
                question.values().join(", ")
            ),
            Problem::UnknownQuestion { key } => write!(f, "unknown question '{}'", key),
            Problem::QuizComplete => write!(f, "all questions are already answered"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid input: {}", join_problems(.problems))]
pub struct InvalidInput {
    pub problems: Vec<Problem>,
}

impl InvalidInput {
    pub fn single(problem: Problem) -> Self {
        Self {
            problems: vec![problem],
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.problems.iter().map(ToString::to_string).collect()
    }
}

fn join_problems(problems: &[Problem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks a raw answer map against the option domain and builds an `AnswerSet`.
///
/// Every problem is reported, not just the first. Unknown keys are rejected
/// rather than ignored.
pub fn validate(raw: &RawAnswers) -> Result<AnswerSet, InvalidInput> {
    let mut problems = Vec::new();

    for key in raw.keys() {
        if QuestionId::parse(key).is_none() {
            problems.push(Problem::UnknownQuestion { key: key.clone() });
        }
    }

    let snap_recipient = field(raw, QuestionId::SnapRecipient, &mut problems);
    let age = field(raw, QuestionId::Age, &mut problems);
    let children = field(raw, QuestionId::Children, &mut problems);
    let exemptions = field(raw, QuestionId::Exemptions, &mut problems);

    match (snap_recipient, age, children, exemptions) {
        (Some(s), Some(a), Some(c), Some(e)) if problems.is_empty() => {
            Ok(AnswerSet::new(s, a, c, e))
        }
        _ => {
            log::warn!("rejected answers: {}", join_problems(&problems));
            Err(InvalidInput { problems })
        }
    }
}

fn field<T: std::str::FromStr>(
    raw: &RawAnswers,
    question: QuestionId,
    problems: &mut Vec<Problem>,
) -> Option<T> {
    let Some(value) = raw.get(question.as_str()) else {
        problems.push(Problem::Missing { question });
        return None;
    };
    match value.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            problems.push(Problem::UnknownOption {
                question,
                value: value.clone(),
            });
            None
        }
    }
}
