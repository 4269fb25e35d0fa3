use crate::domain::answers::QuestionId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Resolves user input as either a 1-based option number or an option value.
    pub fn resolve(&self, input: &str) -> Option<&'static QuestionOption> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| self.options.get(i));
        }
        self.option(input)
    }
}

pub static QUESTIONS: [Question; 4] = [
    Question {
        id: QuestionId::SnapRecipient,
        prompt: "Do you currently receive SNAP benefits?",
        options: &[
            QuestionOption {
                value: "yes",
                label: "Yes, I receive SNAP",
            },
            QuestionOption {
                value: "no",
                label: "No, I don't receive SNAP",
            },
        ],
    },
    Question {
        id: QuestionId::Age,
        prompt: "How old are you?",
        options: &[
            QuestionOption {
                value: "under_18",
                label: "Under 18",
            },
            QuestionOption {
                value: "18_to_54",
                label: "18 to 54",
            },
            QuestionOption {
                value: "55_to_64",
                label: "55 to 64",
            },
            QuestionOption {
                value: "over_64",
                label: "65 or older",
            },
        ],
    },
    Question {
        id: QuestionId::Children,
        prompt: "Do you have dependent children? If yes, how old is your youngest child?",
        options: &[
            QuestionOption {
                value: "no_children",
                label: "No dependent children",
            },
            QuestionOption {
                value: "under_14",
                label: "Yes, youngest is under 14",
            },
            QuestionOption {
                value: "14_to_17",
                label: "Yes, youngest is 14-17",
            },
            QuestionOption {
                value: "over_18",
                label: "Yes, but all are 18+",
            },
        ],
    },
    Question {
        id: QuestionId::Exemptions,
        prompt: "Do any of these apply to you?",
        options: &[
            QuestionOption {
                value: "disabled",
                label: "I have a disability or receive disability benefits",
            },
            QuestionOption {
                value: "pregnant",
                label: "I am pregnant",
            },
            QuestionOption {
                value: "medically_unable",
                label: "I am medically certified as unable to work",
            },
            QuestionOption {
                value: "caregiver",
                label: "I care for an incapacitated household member",
            },
            QuestionOption {
                value: "veteran",
                label: "I am a veteran",
            },
            QuestionOption {
                value: "homeless",
                label: "I am experiencing homelessness",
            },
            QuestionOption {
                value: "foster_youth",
                label: "I aged out of foster care and am 18-24",
            },
            QuestionOption {
                value: "none",
                label: "None of these apply to me",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: QuestionId) -> &'static Question {
        QUESTIONS.iter().find(|q| q.id == id).unwrap()
    }

    #[test]
    fn catalog_matches_answer_domain() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id, QuestionId::ALL[i]);
            let values: Vec<&str> = q.options.iter().map(|o| o.value).collect();
            assert_eq!(values, q.id.values());
            assert!(std::ptr::eq(question(q.id), q));
        }
    }

    #[test]
    fn resolve_accepts_numbers_and_values() {
        let age = question(QuestionId::Age);
        assert_eq!(age.resolve("1").map(|o| o.value), Some("under_18"));
        assert_eq!(age.resolve(" 55_to_64 ").map(|o| o.value), Some("55_to_64"));
        assert!(age.resolve("0").is_none());
        assert!(age.resolve("5").is_none());
        assert!(age.resolve("old").is_none());
    }
}
