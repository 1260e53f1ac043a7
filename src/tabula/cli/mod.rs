//! # Shell Layer
//!
//! This module is **one possible UI client** for tabula, not the application itself.
//!
//! It is the only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs a tracing subscriber
//! - Parses arguments and command lines
//! - Formats output for humans
//!
//! ## Structure
//!
//! - `setup`: clap definitions for process arguments and shell lines
//! - `commands`: `run()`, the read-dispatch loop and per-command handlers
//! - `print`: table, form, and message rendering
//! - `viewport`: terminal width as a queried capability, and the layout it implies

mod commands;
mod print;
mod setup;
mod viewport;

pub use commands::run;
