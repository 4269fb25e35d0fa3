use crate::domain::answers::AnswerSet;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Outcome of one evaluation: whether the work requirement changes apply,
/// plus the explanation shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub affected: bool,
    pub message: String,
    pub details: Option<String>,
    pub action: Option<String>,
}

impl Verdict {
    pub fn affected(message: &str, details: Option<&str>, action: Option<&str>) -> Self {
        Self {
            affected: true,
            message: message.to_string(),
            details: details.map(str::to_string),
            action: action.map(str::to_string),
        }
    }

    pub fn not_affected(message: &str, details: Option<&str>, action: Option<&str>) -> Self {
        Self {
            affected: false,
            ..Self::affected(message, details, action)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    NotRecipient,
    AgeExcluded,
    YoungChild,
    RetainedExemption,
    RemovedExemption,
    NewlyAgedInWithTeen,
    NewlyAgedIn,
    LostParentExemption,
    AlreadySubject,
    Fallback,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::NotRecipient => "not_recipient",
            RuleId::AgeExcluded => "age_excluded",
            RuleId::YoungChild => "young_child",
            RuleId::RetainedExemption => "retained_exemption",
            RuleId::RemovedExemption => "removed_exemption",
            RuleId::NewlyAgedInWithTeen => "newly_aged_in_with_teen",
            RuleId::NewlyAgedIn => "newly_aged_in",
            RuleId::LostParentExemption => "lost_parent_exemption",
            RuleId::AlreadySubject => "already_subject",
            RuleId::Fallback => "fallback",
        }
    }
}

/// Result of evaluating untyped answers. Invalid input never yields a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    Complete {
        answers: AnswerSet,
        rule: RuleId,
        verdict: Verdict,
    },
    Incomplete {
        problems: Vec<String>,
    },
}

impl Evaluation {
    pub fn is_complete(&self) -> bool {
        matches!(self, Evaluation::Complete { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct RuleInfo {
    pub position: usize,
    pub id: RuleId,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_text_serializes_as_null() {
        let v = Verdict::not_affected("msg", None, None);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["affected"], false);
        assert!(json["details"].is_null());
        assert!(json["action"].is_null());
    }

    #[test]
    fn incomplete_evaluation_is_tagged() {
        let e = Evaluation::Incomplete {
            problems: vec!["missing answer for age".to_string()],
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["status"], "incomplete");
        assert!(!e.is_complete());
    }

    #[test]
    fn rule_id_names_match_serde() {
        let json = serde_json::to_value(RuleId::NewlyAgedInWithTeen).unwrap();
        assert_eq!(json, RuleId::NewlyAgedInWithTeen.as_str());
    }
}
