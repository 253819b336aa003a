#![forbid(unsafe_code)]

//! LocalizedWords demo: a guess-the-word challenge over localized words.
//!
//! The library half holds the headless pieces — the built-in catalog and the
//! challenge screen model — so they stay testable without a terminal. The
//! binary in `main.rs` wires them to stdin/stdout and a logging notification
//! host.

pub mod challenge;
pub mod data;

pub use challenge::{ACCEPTED_KEYS, ChallengeScreen, Feedback};
pub use data::builtin_catalog;
