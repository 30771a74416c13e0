//! Help and usage specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("scan")
        .stdout_has("check")
        .stdout_has("replay");
}

#[test]
fn no_subcommand_prints_usage() {
    cli().fails().stderr_has("Usage");
}

#[test]
fn scan_help_documents_pattern() {
    cli()
        .args(&["scan", "--help"])
        .passes()
        .stdout_has("--pattern")
        .stdout_has("--capture-group");
}

#[test]
fn version_prints() {
    cli().args(&["--version"]).passes().stdout_has("starlog");
}
