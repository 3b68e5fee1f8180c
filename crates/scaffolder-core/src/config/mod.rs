//! Toolchain configuration
//!
//! Which programs the scaffolder shells out to and what it asks them to do.

pub mod toolchain;

pub use toolchain::{Toolchain, DEV_DEPENDENCIES};
