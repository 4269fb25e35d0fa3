use crate::*;
use crate::commands::runtime::evaluation_text;
use std::io::{BufRead, Write};

pub fn handle_quiz_command(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Quiz = &cli.command else {
        return Ok(false);
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_quiz(cli.json, stdin.lock(), stdout.lock())?;
    Ok(true)
}

/// Drives a quiz session over line-oriented input.
///
/// Each line is an option number or value, `b` to go back or `q` to quit.
/// After a result, `r` restarts and anything else ends the quiz. In JSON mode
/// prompts are suppressed, only results are written, and a rejected answer
/// ends the quiz. Input that ends before the last question is reported as
/// incomplete and returns an error.
pub fn run_quiz<R: BufRead, W: Write>(json: bool, mut input: R, mut out: W) -> anyhow::Result<()> {
    let mut session = QuizSession::new();
    let mut line = String::new();

    loop {
        if let Some(question) = session.current_question() {
            if !json {
                write!(
                    out,
                    "{}> ",
                    render_question(question, session.position(), session.total())
                )?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("input closed at question {}", session.position() + 1);
                return match session.answers() {
                    Ok(_) => Ok(()),
                    Err(e) => report_incomplete(json, &mut out, e),
                };
            }
            match line.trim() {
                "q" => return Ok(()),
                "b" => session = session.back(),
                choice => match question.resolve(choice) {
                    Some(option) => session = session.select(option.value)?,
                    None if json => {
                        let problem = Problem::UnknownOption {
                            question: question.id,
                            value: choice.to_string(),
                        };
                        return report_incomplete(json, &mut out, InvalidInput::single(problem));
                    }
                    None => {
                        writeln!(
                            out,
                            "Please enter 1-{}, an option value, b (back) or q (quit).\n",
                            question.options.len()
                        )?;
                    }
                },
            }
            continue;
        }

        let answers = session.answers()?;
        let (rule, verdict) = evaluate_traced(&answers);
        if json {
            let evaluation = Evaluation::Complete {
                answers,
                rule,
                verdict,
            };
            writeln!(
                out,
                "{}",
                serde_json::to_string(&JsonOut {
                    ok: true,
                    data: evaluation
                })?
            )?;
        } else {
            write!(out, "\n{}\n[r]estart or press enter to close: ", render_text(&verdict))?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim() != "r" {
            return Ok(());
        }
        session = session.restart();
    }
}

fn report_incomplete<W: Write>(json: bool, out: &mut W, err: InvalidInput) -> anyhow::Result<()> {
    let evaluation = Evaluation::Incomplete {
        problems: err.messages(),
    };
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string(&JsonOut {
                ok: false,
                data: &evaluation
            })?
        )?;
    } else {
        writeln!(out, "\n{}", evaluation_text(&evaluation))?;
    }
    anyhow::bail!("quiz incomplete; nothing was evaluated")
}
