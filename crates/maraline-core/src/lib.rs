//! maraline core: apps data model, decoder, and line-protocol encoder.
//!
//! This crate holds the pure half of the collector: the typed view of the
//! orchestrator's `/v2/apps` response, the permissive JSON decoder, and the
//! line-protocol renderer. It intentionally carries no network or runtime
//! dependencies so the transforms stay trivially testable.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MaralineError`/`Result` so a
//! collection run never crashes on malformed upstream data.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decode;
pub mod error;
pub mod lineproto;
pub mod model;

/// Shared result type.
pub use error::{MaralineError, Result};
