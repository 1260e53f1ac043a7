//! # Tabula Architecture
//!
//! Tabula is a **UI-agnostic record table engine**: a small in-memory
//! collection of records with multi-field search, sorted and paged views,
//! and an explicit add/edit session. The terminal shell in this package is
//! one client of the library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Reads command lines, renders pages, colors messages      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - TableApi: owns the store and the edit session            │
//! │  - Thin dispatch, returns structured Result types           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, session.rs)                  │
//! │  - CRUD, search, sort, paging, the edit state machine       │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments, returns Rust types, and
//! never prints or exits. Logging goes through `tracing`; installing a
//! subscriber is the client's job.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: create, update, delete, list, sort, page, search, query
//! - [`session`]: The add/edit form state machine
//! - [`validation`]: Draft to [`model::RecordFields`]
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: `Record`, `RecordId`, `Draft`, `Field`
//! - [`config`]: `tabula.json` settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod validation;
