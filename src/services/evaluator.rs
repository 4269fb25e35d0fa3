//! HR1 work-requirement rule chain.
//!
//! Rules are evaluated strictly in order and the first match wins. Precedence is
//! positional: a rule later in `RULES` is only consulted when every earlier rule
//! declined, so e.g. a veteran whose youngest child is under 14 is settled by
//! `young_child` before `removed_exemption` is ever looked at.

use crate::domain::answers::{AgeBracket, AnswerSet, ChildrenBracket, SnapRecipient};
use crate::domain::models::{Evaluation, RuleId, RuleInfo, Verdict};
use crate::services::validation::{validate, RawAnswers};

pub struct Rule {
    pub id: RuleId,
    pub description: &'static str,
    applies: fn(&AnswerSet) -> bool,
    verdict: fn() -> Verdict,
}

impl Rule {
    pub fn applies(&self, answers: &AnswerSet) -> bool {
        (self.applies)(answers)
    }

    pub fn verdict(&self) -> Verdict {
        (self.verdict)()
    }
}

pub static RULES: [Rule; 10] = [
    Rule {
        id: RuleId::NotRecipient,
        description: "not receiving SNAP",
        applies: |a| a.snap_recipient == SnapRecipient::No,
        verdict: not_recipient,
    },
    Rule {
        id: RuleId::AgeExcluded,
        description: "under 18 or over 64",
        applies: |a| matches!(a.age, AgeBracket::Under18 | AgeBracket::Over64),
        verdict: age_excluded,
    },
    Rule {
        id: RuleId::YoungChild,
        description: "youngest dependent child is under 14",
        applies: |a| a.children == ChildrenBracket::Under14,
        verdict: young_child,
    },
    Rule {
        id: RuleId::RetainedExemption,
        description: "disability, pregnancy, medical certification or caregiver",
        applies: |a| a.exemptions.is_retained(),
        verdict: retained_exemption,
    },
    Rule {
        id: RuleId::RemovedExemption,
        description: "veteran, homeless or former foster youth",
        applies: |a| a.exemptions.is_removed(),
        verdict: removed_exemption,
    },
    Rule {
        id: RuleId::NewlyAgedInWithTeen,
        description: "age 55 to 64 with youngest child 14 to 17",
        applies: |a| {
            a.age == AgeBracket::From55To64 && a.children == ChildrenBracket::From14To17
        },
        verdict: newly_aged_in_with_teen,
    },
    Rule {
        id: RuleId::NewlyAgedIn,
        description: "age 55 to 64",
        applies: |a| a.age == AgeBracket::From55To64,
        verdict: newly_aged_in,
    },
    Rule {
        id: RuleId::LostParentExemption,
        description: "age 18 to 54 with youngest child 14 to 17",
        applies: |a| {
            a.age == AgeBracket::From18To54 && a.children == ChildrenBracket::From14To17
        },
        verdict: lost_parent_exemption,
    },
    Rule {
        id: RuleId::AlreadySubject,
        description: "age 18 to 54",
        applies: |a| a.age == AgeBracket::From18To54,
        verdict: already_subject,
    },
    Rule {
        id: RuleId::Fallback,
        description: "anything else",
        applies: |_| true,
        verdict: fallback,
    },
];

pub fn evaluate(answers: &AnswerSet) -> Verdict {
    evaluate_traced(answers).1
}

/// Like `evaluate`, also naming the rule that decided.
pub fn evaluate_traced(answers: &AnswerSet) -> (RuleId, Verdict) {
    let rule = RULES
        .iter()
        .find(|r| r.applies(answers))
        .unwrap_or(&RULES[RULES.len() - 1]);
    log::debug!("rule {} matched {:?}", rule.id.as_str(), answers);
    (rule.id, rule.verdict())
}

/// Validates untyped answers first; invalid input yields `Incomplete`.
pub fn evaluate_raw(raw: &RawAnswers) -> Evaluation {
    match validate(raw) {
        Ok(answers) => {
            let (rule, verdict) = evaluate_traced(&answers);
            Evaluation::Complete {
                answers,
                rule,
                verdict,
            }
        }
        Err(e) => Evaluation::Incomplete {
            problems: e.messages(),
        },
    }
}

pub fn rule_chain() -> Vec<RuleInfo> {
    RULES
        .iter()
        .enumerate()
        .map(|(i, r)| RuleInfo {
            position: i + 1,
            id: r.id,
            description: r.description,
        })
        .collect()
}

fn not_recipient() -> Verdict {
    Verdict::not_affected(
        "SNAP work requirements only apply to SNAP recipients. If you apply for SNAP in the future, these requirements may apply to you.",
        None,
        None,
    )
}

fn age_excluded() -> Verdict {
    Verdict::not_affected(
        "Work requirements do not apply to people under 18 or over 64.",
        Some("You are outside the age range for work requirements."),
        None,
    )
}

fn young_child() -> Verdict {
    Verdict::not_affected(
        "You remain exempt from work requirements because you have a dependent child under 14.",
        Some("Parents with children under 14 are still exempt under HR1."),
        None,
    )
}

fn retained_exemption() -> Verdict {
    Verdict::not_affected(
        "You are exempt from work requirements due to your circumstances.",
        Some("Disability, pregnancy, medical certification, and caregiver status remain exemptions under HR1."),
        Some("Keep your documentation up to date when you recertify."),
    )
}

fn removed_exemption() -> Verdict {
    Verdict::affected(
        "You previously had an exemption, but HR1 removed exemptions for veterans, homeless individuals, and foster youth ages 18-24.",
        Some("Your exemption was removed under HR1. You now need to meet work requirements unless you qualify for a different exemption (like disability)."),
        Some("Contact your state SNAP office to understand your work requirement obligations and get help finding qualifying work or training programs."),
    )
}

fn newly_aged_in_with_teen() -> Verdict {
    Verdict::affected(
        "You are affected by TWO major changes in HR1: the age range expanded to include 55-64, AND the parent exemption changed to only apply if your youngest child is under 14.",
        Some("Before HR1, you were exempt due to age AND having a child under 18. Both of those exemptions were removed."),
        Some("Contact your state SNAP office immediately. You are newly subject to work requirements and need to understand your obligations and options for meeting them."),
    )
}

fn newly_aged_in() -> Verdict {
    Verdict::affected(
        "You are NEWLY subject to work requirements under HR1. Before July 2025, people ages 55-64 were exempt.",
        Some("HR1 expanded the age range from 18-54 to 18-64. You were previously exempt due to age."),
        Some("Contact your state SNAP office to learn about work requirements and E&T programs that can help you meet them."),
    )
}

fn lost_parent_exemption() -> Verdict {
    Verdict::affected(
        "You are NEWLY subject to work requirements because the parent exemption changed. Before HR1, parents with children under 18 were exempt. Now you must have a child under 14 to be exempt.",
        Some("Your youngest child is 14-17, so you lost the parent exemption under HR1."),
        Some("Contact your state SNAP office to understand work requirements. You need to complete 80 hours/month of work, training, or volunteer activities."),
    )
}

fn already_subject() -> Verdict {
    Verdict::affected(
        "You were already subject to work requirements before HR1, and remain subject to them.",
        Some("Work requirements applied to people ages 18-54 before HR1, and continue to apply."),
        Some("Make sure you are meeting the 80 hours/month requirement and keep documentation. Check with your state SNAP office if you have questions."),
    )
}

fn fallback() -> Verdict {
    Verdict::affected(
        "Based on your answers, you may be subject to work requirements. Contact your state SNAP office for personalized guidance.",
        None,
        Some("Visit your state SNAP office or call to get accurate information about your specific situation."),
    )
}
