use crate::*;
use anyhow::Context;
use std::path::Path;

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Evaluate(args) => {
            let raw = collect_answers(args)?;
            let evaluation = evaluate_raw(&raw);
            let complete = evaluation.is_complete();
            print_one(cli.json, complete, &evaluation, |e| evaluation_text(e))?;
            if !complete {
                anyhow::bail!("answers incomplete; nothing was evaluated");
            }
        }
        Commands::Questions => {
            print_out(cli.json, &QUESTIONS, |q| {
                let options: Vec<&str> = q.options.iter().map(|o| o.value).collect();
                format!("{}\t{}\t{}", q.id, q.prompt, options.join(","))
            })?;
        }
        Commands::Rules => {
            let chain = rule_chain();
            print_out(cli.json, &chain, |r| {
                format!("{}\t{}\t{}", r.position, r.id.as_str(), r.description)
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

/// Merges the answers file (if any) with explicit flags; flags win.
pub fn collect_answers(args: &EvaluateArgs) -> anyhow::Result<RawAnswers> {
    let mut raw = match &args.answers {
        Some(path) => load_answers_file(path)?,
        None => RawAnswers::new(),
    };

    let flags = [
        (QuestionId::SnapRecipient, args.snap_recipient.map(|v| v.as_str())),
        (QuestionId::Age, args.age.map(|v| v.as_str())),
        (QuestionId::Children, args.children.map(|v| v.as_str())),
        (QuestionId::Exemptions, args.exemptions.map(|v| v.as_str())),
    ];
    for (question, value) in flags {
        if let Some(v) = value {
            raw.insert(question.as_str().to_string(), v.to_string());
        }
    }
    Ok(raw)
}

fn load_answers_file(path: &Path) -> anyhow::Result<RawAnswers> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading answers file {}", path.display()))?;
    let raw: RawAnswers = serde_json::from_str(&text)
        .with_context(|| format!("answers file {} is not a JSON object of strings", path.display()))?;
    log::debug!("loaded {} answers from {}", raw.len(), path.display());
    Ok(raw)
}

pub fn evaluation_text(evaluation: &Evaluation) -> String {
    match evaluation {
        Evaluation::Complete { rule, verdict, .. } => {
            format!("{}\nrule: {}", render_text(verdict), rule.as_str())
        }
        Evaluation::Incomplete { problems } => {
            let mut out = String::from("incomplete answers:");
            for p in problems {
                out.push_str(&format!("\n  - {}", p));
            }
            out
        }
    }
}
