//! Support library for the twinspan CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and tests can
//! exercise them without spawning a subprocess.

pub mod cli;
pub mod logging;
