//! # Shopcart Architecture
//!
//! Shopcart is a **UI-agnostic shopping-cart library**. A storefront shows the
//! cart in several places (a badge in the navigation bar, quantity controls on
//! every product card, a cart panel); all of them read and change the same cart
//! through this crate. The bundled terminal client is one such storefront.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders badge / cards / panel          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session guard, id parsing, dispatch                      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Runs ledger operations, builds CmdResult + messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session + Ledger (session.rs, ledger.rs)                   │
//! │  - Line items, quantity rules, open/closed panel flag       │
//! │  - Write-through to the store on every change               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust
//! types, never writes to stdout/stderr and never exits the process. Diagnostics
//! go through `tracing`; installing a subscriber is the client's job.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Per-operation logic and result types
//! - [`ledger`]: The cart ledger and its change notifications
//! - [`session`]: Explicit cart scope, replaces an ambient global cart
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`ProductId`, `LineItem`)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod ledger;
pub mod model;
pub mod session;
pub mod store;
