//! # Recstore Architecture
//!
//! Recstore keeps a list of user records (`id`, `email`, `age`) in one JSON
//! array file and performs a single operation on it per invocation:
//! `list`, `add`, `remove` or `findById`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses flags, installs logging, owns stdout/exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Arguments
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - perform(): open store, resolve Request, dispatch, render │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / add / remove / find, returning CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every invocation reads the whole file, changes at most one record, and
//! rewrites the whole file. There is no locking: two processes working on
//! the same file at once can lose updates.
//!
//! "Already exists" and "not found" are not errors. They are reported as
//! output text and the operation succeeds.
//!
//! ## Module Overview
//!
//! - [`api`]: `perform` and the `RecordApi` facade
//! - [`commands`]: business logic for each operation
//! - [`config`]: `Arguments`, `Operation` and `Request`
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: the `Record` type
//! - [`output`]: rendering results as text
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod store;
