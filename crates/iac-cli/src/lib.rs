//! IAC CLI crate
//!
//! Command-line harness around `iac-runtime`:
//! - init: write the reference network description as TOML.
//! - run: build a network from a TOML file (or `--demo`), inject input for a
//!   number of cycles, and print the named activations as text or JSON.
//! - inspect: print pools, anchor pool, node and edge counts, and optionally
//!   the weight matrix.
//!
//! The binary (src/main.rs) wires up logging and argument parsing, calling
//! `IacCli::execute()`. Command modules are public so tests can drive them
//! without spawning a process.

pub mod commands;
pub mod config;
pub mod error;

pub use commands::IacCli;
