use crate::domain::answers::{AgeBracket, ChildrenBracket, Exemption, SnapRecipient};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "snapcheck",
    version,
    about = "Check whether the HR1 SNAP work requirement changes affect you"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a full set of answers given as flags and/or a JSON file
    Evaluate(EvaluateArgs),
    /// Answer the questions one at a time on stdin
    Quiz,
    /// List the quiz questions and their options
    Questions,
    /// List the rules in evaluation order
    Rules,
}

#[derive(Args, Debug, Default)]
pub struct EvaluateArgs {
    #[arg(long, help = "JSON object mapping question ids to option values")]
    pub answers: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub snap_recipient: Option<SnapRecipient>,
    #[arg(long, value_enum)]
    pub age: Option<AgeBracket>,
    #[arg(long, value_enum)]
    pub children: Option<ChildrenBracket>,
    #[arg(long, value_enum)]
    pub exemptions: Option<Exemption>,
}
