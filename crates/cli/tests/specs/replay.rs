//! Replay command specs
//!
//! Verify the start/dispatch/stop lifecycle end to end.

use crate::prelude::*;

#[test]
fn dispatched_events_are_logged() {
    let temp = Project::empty();
    temp.file("starlog.toml", CLICK_CONFIG);

    temp.starlog()
        .args(&["replay", "starlog.toml", "click", "keydown"])
        .passes()
        .stdout_eq("click\nkeydown\n");
}

#[test]
fn starting_twice_still_logs_once() {
    let temp = Project::empty();
    temp.file("starlog.toml", CLICK_CONFIG);

    temp.starlog()
        .args(&["replay", "starlog.toml", "click", "--twice"])
        .passes()
        .stdout_eq("click\n");
}

#[test]
fn unregistered_events_are_silent() {
    let temp = Project::empty();
    temp.file("starlog.toml", CLICK_CONFIG);

    temp.starlog()
        .args(&["replay", "starlog.toml", "scroll", "click"])
        .passes()
        .stdout_eq("click\n");
}

#[test]
fn each_target_logs_its_own_dispatch() {
    let temp = Project::empty();
    temp.file(
        "starlog.toml",
        r#"
sink = "stdout"

[loggers.click]
targets = ["button", "document"]

[loggers.keydown]
targets = ["input"]
listener = "json"
"#,
    );

    temp.starlog()
        .args(&["replay", "starlog.toml", "click", "keydown"])
        .passes()
        .stdout_eq("click\nclick\n{\"type\":\"keydown\",\"detail\":null}\n");
}

#[test]
fn target_flag_limits_dispatch() {
    let temp = Project::empty();
    temp.file(
        "starlog.toml",
        r#"
sink = "stdout"

[loggers.click]
targets = ["button", "document"]

[loggers.keydown]
targets = ["input"]
"#,
    );

    temp.starlog()
        .args(&["replay", "starlog.toml", "click", "keydown", "--target", "input"])
        .passes()
        .stdout_eq("keydown\n");
}

#[test]
fn default_sink_is_stderr() {
    let temp = Project::empty();
    temp.file("starlog.toml", "events = [\"click\"]\ntargets = \"document\"\n");

    temp.starlog()
        .args(&["replay", "starlog.toml", "click"])
        .passes()
        .stdout_eq("")
        .stderr_has("click");
}

#[test]
fn tracing_sink_respects_log_filter() {
    let temp = Project::empty();
    temp.file(
        "starlog.toml",
        "events = [\"click\"]\ntargets = \"document\"\nsink = \"tracing\"\n",
    );

    temp.starlog()
        .args(&["replay", "starlog.toml", "click"])
        .env("STARLOG_LOG", "starlog::events=info")
        .passes()
        .stderr_has("click");
}
