//! Shared data model layer (types and static data only).
//!
//! ## Files
//! - `answers.rs` — question ids, typed option enums, `AnswerSet`.
//! - `questions.rs` — the quiz question catalog (prompts and option labels).
//! - `models.rs` — verdicts, rule ids, evaluation/report structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no I/O, no evaluation logic.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod answers;
pub mod models;
pub mod questions;
