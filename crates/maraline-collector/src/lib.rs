//! maraline collector library entry.
//!
//! This crate wires the CLI/config surface, the deadline-bounded fetcher,
//! and the core decode/encode transforms into the single-shot collection
//! pipeline. It is intended to be consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod pipeline;
