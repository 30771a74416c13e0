//! Error reporting specs

use crate::prelude::*;

#[test]
fn missing_config_file() {
    let temp = Project::empty();
    temp.starlog()
        .args(&["check", "missing.toml"])
        .fails()
        .stderr_has("failed to load config missing.toml");
}

#[test]
fn config_without_event_source() {
    let temp = Project::empty();
    temp.file("starlog.toml", "targets = [\"document\"]\n");

    temp.starlog()
        .args(&["check", "starlog.toml"])
        .fails()
        .stderr_has("expected `loggers`, `events`, or `pattern` and `select` to be defined");
}

#[test]
fn unknown_listener_name() {
    let temp = Project::empty();
    temp.file("starlog.toml", "events = [\"click\"]\nlistener = \"shout\"\n");

    temp.starlog()
        .args(&["check", "starlog.toml"])
        .fails()
        .stderr_has("unknown listener 'shout'");
}

#[test]
fn unknown_config_key() {
    let temp = Project::empty();
    temp.file("starlog.toml", "events = [\"click\"]\ncolour = \"red\"\n");

    temp.starlog()
        .args(&["check", "starlog.toml"])
        .fails()
        .stderr_has("colour");
}

#[test]
fn invalid_scan_pattern() {
    let temp = Project::empty();
    temp.file("grid.js", "fire('fin-click');");

    temp.starlog()
        .args(&["scan", "grid.js", "--pattern", "(unclosed"])
        .fails()
        .stderr_has("invalid pattern '(unclosed'");
}

#[test]
fn unreadable_scan_file() {
    let temp = Project::empty();
    temp.starlog()
        .args(&["scan", "absent.js", "--pattern", "fin-[a-z]+"])
        .fails()
        .stderr_has("cannot read absent.js");
}

#[test]
fn replay_unknown_target() {
    let temp = Project::empty();
    temp.file("starlog.toml", CLICK_CONFIG);

    temp.starlog()
        .args(&["replay", "starlog.toml", "click", "--target", "window"])
        .fails()
        .stderr_has("unknown target 'window'");
}
