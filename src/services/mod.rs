//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `verifier.rs` — pure consistency check over decoded records.
//! - `store.rs` — JSON-directory data store client + record decoding.
//! - `export.rs` — embedded curriculum text export.
//! - `auditlog.rs` — append-only trail of export events.
//! - `output.rs` — JSON envelope + tab-separated row rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod auditlog;
pub mod export;
pub mod output;
pub mod store;
pub mod verifier;
