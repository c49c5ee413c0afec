//! # abctl Architecture
//!
//! abctl manages the AI players registered with a tournament server. The binary is a
//! thin shell around this library: everything except argument parsing and terminal
//! output lives here, so the same operations can be driven from tests or other tools.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Argument validation, one handler per workflow            │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client/)                                     │
//! │  - Abstract PlayerService trait                             │
//! │  - HttpClient (production), InMemoryService (testing)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they land.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Validation and the list/create/delete workflows
//! - [`client`]: Remote service abstraction and implementations
//! - [`model`]: Player records as the service returns them
//! - [`game`]: Side colors and game outcomes
//! - [`config`]: Configuration file handling
//! - [`init`]: Resolves configuration into a ready-to-use API
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod init;
pub mod model;
