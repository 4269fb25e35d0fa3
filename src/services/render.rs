use crate::domain::models::Verdict;
use crate::domain::questions::Question;

pub const AFFECTED_TITLE: &str = "You May Be Affected by New Work Requirements";
pub const NOT_AFFECTED_TITLE: &str = "You Are Not Affected by New Work Requirements";

pub fn title(affected: bool) -> &'static str {
    if affected {
        AFFECTED_TITLE
    } else {
        NOT_AFFECTED_TITLE
    }
}

pub fn render_text(verdict: &Verdict) -> String {
    let mut out = format!("{}\n\n{}\n", title(verdict.affected), verdict.message);
    if let Some(details) = &verdict.details {
        out.push_str(&format!("\nWhy: {}\n", details));
    }
    if let Some(action) = &verdict.action {
        out.push_str(&format!("\nWhat to do: {}\n", action));
    }
    out
}

pub fn render_question(question: &Question, position: usize, total: usize) -> String {
    let mut out = format!(
        "Question {} of {}\n{}\n",
        position + 1,
        total,
        question.prompt
    );
    for (i, o) in question.options.iter().enumerate() {
        out.push_str(&format!("  {}) {} [{}]\n", i + 1, o.label, o.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questions::QUESTIONS;

    #[test]
    fn text_includes_optional_sections_only_when_present() {
        let bare = Verdict::not_affected("Not on SNAP.", None, None);
        let text = render_text(&bare);
        assert!(text.starts_with(NOT_AFFECTED_TITLE));
        assert!(!text.contains("Why:"));
        assert!(!text.contains("What to do:"));

        let full = Verdict::affected("Newly subject.", Some("Age range grew."), Some("Call."));
        let text = render_text(&full);
        assert!(text.starts_with(AFFECTED_TITLE));
        assert!(text.contains("Why: Age range grew."));
        assert!(text.contains("What to do: Call."));
    }

    #[test]
    fn question_lists_numbered_options() {
        let text = render_question(&QUESTIONS[0], 0, 4);
        assert!(text.starts_with("Question 1 of 4\n"));
        assert!(text.contains("  1) Yes, I receive SNAP [yes]"));
        assert!(text.contains("  2) No, I don't receive SNAP [no]"));
    }
}
