//! Core library modules for todo2org.
//!
//! The converters ([`task`], [`outline`], [`reverse`]) are pure functions
//! over lines of text. Everything else is the command-line shell around
//! them.
//!
//! ## Usage
//!
//! ```rust
//! use todo2org::libs::outline::convert_to_org;
//! use todo2org::libs::reverse::convert_to_todo;
//!
//! let org = convert_to_org(&["Take dog for a walk due:2018-12-12"]);
//! assert_eq!(org, "* Tasks\n** TODO Take dog for a walk\nDEADLINE: <2018-12-12>");
//!
//! let lines: Vec<&str> = org.split('\n').collect();
//! assert_eq!(convert_to_todo(&lines), "Take dog for a walk due:2018-12-12");
//! ```

pub mod config;
pub mod convert;
pub mod data_storage;
pub mod date;
pub mod error;
pub mod messages;
pub mod outline;
pub mod reverse;
pub mod task;
pub mod view;
