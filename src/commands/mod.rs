//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — evaluate/questions/rules.
//! - `quiz.rs` — the interactive quiz loop.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate evaluation to `services/*`.
//! - Keep behavior and output schema stable.

pub mod quiz;
pub mod runtime;

pub use quiz::handle_quiz_command;
pub use runtime::handle_runtime_commands;
