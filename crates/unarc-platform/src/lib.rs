//! Process and executable helpers.
//!
//! - `command.rs` - Builder around `std::process::Command` with captured output
//! - `executable.rs` - Checks that a path names something the OS can execute

pub use command::Command;
pub use error::{Error, Result};
pub use executable::ensure_executable;

pub mod command;
mod error;
mod executable;
