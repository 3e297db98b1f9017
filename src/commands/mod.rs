//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `inspect.rs` — verify/summary/counts/peek read-only diagnostics.
//! - `export.rs` — curriculum text export.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod export;
pub mod inspect;

pub use export::handle_export;
pub use inspect::{handle_counts, handle_peek, handle_summary, handle_verify};
