//! Command trait definition for CLI commands.
//!
//! This module defines the [`Command`] trait that all fgbarcodes CLI commands implement.
//! The trait uses `enum_dispatch` for efficient dynamic dispatch across command variants.

use anyhow::Result;
use enum_dispatch::enum_dispatch;

/// Trait implemented by all fgbarcodes CLI commands.
///
/// The `command_line` parameter holds the full invocation, logged at debug level.
#[enum_dispatch]
pub trait Command {
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self, command_line: &str) -> Result<()>;
}
