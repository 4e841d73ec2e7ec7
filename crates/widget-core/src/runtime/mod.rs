//! Post-generation tooling
//!
//! This module provides:
//! - Node.js toolchain detection for the generated project
//! - Dependency installation and the downstream grunt build

pub mod check;
pub mod tasks;

pub use check::{check_node, check_npm, RuntimeInfo};
pub use tasks::{install_dependencies, run_build};
