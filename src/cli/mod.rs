//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod paths;
pub mod props;

pub use args::{Cli, Commands, ResolveArgs};
