//! User-facing message catalogue and output macros.
//!
//! All text printed by the command-line shell is defined once in
//! [`Message`] and rendered through its `Display` implementation, so the
//! wording of every status line lives in a single place.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
