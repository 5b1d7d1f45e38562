//! Command builders for the server binary
//!
//! Commands run with `RUST_LOG=error` and without the user's config so
//! tests see only protocol traffic.

use assert_cmd::Command;

/// Name of the stdio server binary
pub const SERVER_BIN: &str = "docdeck-mcp";

/// Get a Command for the `docdeck-mcp` binary with clean environment
///
/// ```rust,no_run
/// use doc_test_helpers::cli::server_command;
///
/// server_command().arg("--version").assert().success();
/// ```
pub fn server_command() -> Command {
    command_for(SERVER_BIN)
}

/// Get a Command for a specific binary with clean environment
#[allow(deprecated)]
pub fn command_for(bin_name: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin_name)
        .unwrap_or_else(|_| panic!("Failed to find {} binary", bin_name));
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("DOCDECK_CONFIG"); // Don't use user's config
    cmd
}
