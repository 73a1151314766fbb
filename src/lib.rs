//! # todo2org
//!
//! Converts todo.txt task lists into Emacs Org mode outlines and rebuilds
//! todo.txt lines from those outlines.
//!
//! ## Features
//!
//! - **Line Parsing**: completion, priority, dates, `+project`, `@context` and `key:value` tags
//! - **Org Outlines**: tasks grouped under one heading per project, with `CLOSED`, creation and `DEADLINE` lines
//! - **Reverse Conversion**: Org headings back to canonical todo.txt lines
//! - **Batch Files**: converts many files at once, writing `.org`/`.txt` siblings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo2org::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
