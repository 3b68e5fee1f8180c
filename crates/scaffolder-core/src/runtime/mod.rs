//! External command execution
//!
//! This module provides:
//! - The `CommandRunner` seam the scaffolder shells out through
//! - `SystemRunner`, which runs real processes with inherited stdio

pub mod command;

#[cfg(test)]
pub(crate) mod fake;

pub use command::{ensure_success, CommandRunner, Invocation, SystemRunner};
