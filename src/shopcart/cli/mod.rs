//! # CLI Layer
//!
//! This module is **one possible UI client** for shopcart, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup, dispatch and per-command handlers
//! - `shell`: Interactive session reading one command per line
//! - `render`: Navbar badge, product cards, cart panel, messages
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
mod setup;
mod shell;

pub use commands::run;
