//! Node.js toolchain detection
//!
//! Generated widgets are built with npm and grunt; detection is advisory
//! only — a missing toolchain skips the install step, it never fails the
//! generation itself.

use std::process::Command;

/// Toolchain detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}
