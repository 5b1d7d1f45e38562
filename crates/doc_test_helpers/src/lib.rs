//! Shared test utilities for DocDeck test suites
//!
//! # Modules
//!
//! - [`workspace`]: Temp workspaces with a `.docdeck/config.toml`
//! - [`cli`]: Server command builders with pre-configured environments
//! - [`logging`]: Test logging configuration
//! - [`assertions`]: JSON-RPC assertion helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use doc_test_helpers::prelude::*;
//!
//! let workspace = workspace_with_documents(&[("a.md", "alpha")]);
//! server_command()
//!     .arg("--workspace")
//!     .arg(workspace.path())
//!     .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
//!     .assert()
//!     .success();
//! ```

pub mod assertions;
pub mod cli;
pub mod logging;
pub mod workspace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::cli::{command_for, server_command};
    pub use crate::logging::{init_test_logging, suppress_logs};
    pub use crate::workspace::{temp_dir, workspace_with_config, workspace_with_documents};
}
