//! # Stocklog Architecture
//!
//! Stocklog is a **UI-agnostic inventory library** with a thin CLI client.
//! The in-memory store is the authority of record for a session; the text
//! codec fills it from `inventory.txt` at startup and writes it back at the
//! end. Everything in between is a pure state transition.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (3-digit ids, non-negative prices)     │
//! │  - Owns the session store; loads on open, saves on demand   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic returning structured CmdResults      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, store.rs, codec.rs)                        │
//! │  - Item records with append-only price/stock histories      │
//! │  - Invariant: history.last == current, after every mutation │
//! │  - Line-oriented text persistence, format-compatible with   │
//! │    files written by earlier versions                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, and never touches stdout/stderr or the process exit code.
//! Not-found ids and insufficient stock are messages and outcomes, not
//! process failures: the session continues and the store stays consistent.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: The `Item` record and its history invariants
//! - [`store`]: The in-memory `Inventory`
//! - [`codec`]: Plain-text save/load of the store
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
