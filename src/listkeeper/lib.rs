//! # ListKeeper Architecture
//!
//! ListKeeper is a **UI-agnostic note and to-do library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, cli/, wired by main.rs)                │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Hydrates notes/session from storage, persists after      │
//! │    mutations                                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State & Storage (notes.rs, session.rs, auth.rs, storage/)  │
//! │  - In-memory NoteStore, session broadcaster                 │
//! │  - Abstract KeyValueStore + Authenticator seams             │
//! │  - FileStore/DirectoryAuthenticator (production),           │
//! │    InMemoryStore (testing)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event-Driven, Single-Threaded
//!
//! Everything here runs on the caller's thread. The only timing-sensitive
//! piece is [`debounce::SearchDebouncer`], and even that holds deadlines
//! rather than timers: the host loop feeds it keystrokes and polls it. No
//! locks, no channels, no background work.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, state), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a browser app, or any
//! other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and state** (`commands/*.rs`, `notes.rs`, `filter.rs`,
//!    `debounce.rs`): thorough unit tests of business logic. This is where
//!    the lion's share of testing lives.
//! 2. **API** (`api.rs`): dispatch and persistence tests over
//!    `InMemoryStore`.
//! 3. **CLI** (thin `main.rs`): end-to-end flows in `tests/`, driving the
//!    binary with a temporary home directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`notes`]: The authoritative note collection and id assignment
//! - [`filter`]: Status label toggles and their reconciliation rules
//! - [`debounce`]: Keystroke-to-search-term debouncing
//! - [`session`]: Current-user broadcaster with replay-one subscribe
//! - [`auth`]: Authentication seam and the local user directory
//! - [`forms`]: Explicit form state for the login/signup flows
//! - [`storage`]: Durable key-value storage abstraction
//! - [`model`]: Core data types (`Note`, `User`, `NoteColor`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the
//!   lib API)

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod forms;
pub mod model;
pub mod notes;
pub mod session;
pub mod storage;
