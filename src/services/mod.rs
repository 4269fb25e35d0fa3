//! Service layer containing evaluation logic and output helpers.
//!
//! ## Service map
//! - `evaluator.rs` — ordered HR1 rule chain, `evaluate`.
//! - `validation.rs` — raw answer maps to `AnswerSet`, `InvalidInput`.
//! - `session.rs` — immutable quiz progress.
//! - `render.rs` — human-readable verdicts and questions.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Evaluation is pure; only `output.rs` and the command layer touch stdio.
//! - Keep command handlers thin; delegate to services.

pub mod evaluator;
pub mod output;
pub mod render;
pub mod session;
pub mod validation;
