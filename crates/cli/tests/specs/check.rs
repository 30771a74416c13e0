//! Check command specs
//!
//! Verify registry construction from config files.

use crate::prelude::*;
use serde_json::Value;

fn check_json(temp: &Project) -> Vec<Value> {
    let stdout = temp
        .starlog()
        .args(&["check", "starlog.toml", "--format", "json"])
        .passes()
        .stdout();
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn events_use_default_listener_and_targets() {
    let temp = Project::empty();
    temp.file("starlog.toml", CLICK_CONFIG);

    let entries = check_json(&temp);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["event"], "click");
    assert_eq!(entries[0]["listener"], "type");
    assert_eq!(entries[0]["targets"], serde_json::json!(["document"]));
    assert_eq!(entries[1]["event"], "keydown");
}

#[test]
fn text_output_lists_each_event() {
    let temp = Project::empty();
    temp.file("starlog.toml", CLICK_CONFIG);

    temp.starlog()
        .args(&["check", "starlog.toml"])
        .passes()
        .stdout_has("click")
        .stdout_has("keydown")
        .stdout_has("document");
}

#[test]
fn loggers_keep_document_order_and_cascade() {
    let temp = Project::empty();
    temp.file(
        "starlog.toml",
        r#"
targets = ["document"]
listener = "detail"

[loggers.scroll]
targets = ["viewport"]

[loggers.click]
listener = "json"

[loggers.keydown]

[listener_dictionary]
keydown = "type"

[targets_dictionary]
click = ["button", "document"]
scroll = ["ignored"]
"#,
    );

    let entries = check_json(&temp);
    let names: Vec<&str> = entries.iter().map(|e| e["event"].as_str().unwrap()).collect();

    assert_eq!(names, vec!["scroll", "click", "keydown"]);
    // explicit targets beat the dictionary
    assert_eq!(entries[0]["targets"], serde_json::json!(["viewport"]));
    assert_eq!(entries[0]["listener"], "detail");
    assert_eq!(entries[1]["listener"], "json");
    assert_eq!(entries[1]["targets"], serde_json::json!(["button", "document"]));
    assert_eq!(entries[2]["listener"], "type");
    assert_eq!(entries[2]["targets"], serde_json::json!(["document"]));
}

#[test]
fn loggers_win_over_events() {
    let temp = Project::empty();
    temp.file(
        "starlog.toml",
        r#"
events = ["from-events"]

[loggers.from-loggers]
"#,
    );

    let entries = check_json(&temp);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["event"], "from-loggers");
}

#[test]
fn pattern_scans_files_relative_to_config() {
    let temp = Project::empty();
    temp.file("web/src/grid.js", "fire('fin-click'); fire('fin-keydown');");
    temp.file("web/src/canvas.js", "fire('fin-click'); fire('fin-canvas-resized');");
    temp.file(
        "web/starlog.toml",
        r#"
targets = "grid"

[pattern]
regex = "'(fin-[a-z-]+)'"
select = ["src/grid.js", "src/canvas.js"]
deny = ["fin-keydown"]
"#,
    );

    let stdout = temp
        .starlog()
        .args(&["check", "web/starlog.toml", "--format", "json"])
        .passes()
        .stdout();
    let entries: Vec<Value> = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e["event"].as_str().unwrap()).collect();

    assert_eq!(names, vec!["fin-click", "fin-canvas-resized"]);
    assert_eq!(entries[0]["targets"], serde_json::json!(["grid"]));
}

#[test]
fn events_without_targets_show_a_dash() {
    let temp = Project::empty();
    temp.file("starlog.toml", "events = [\"click\"]\n");

    temp.starlog()
        .args(&["check", "starlog.toml"])
        .passes()
        .stdout_has("click")
        .stdout_has(" -");
}

#[test]
fn empty_loggers_table_registers_nothing() {
    let temp = Project::empty();
    temp.file("starlog.toml", "events = [\"ignored\"]\n\n[loggers]\n");

    temp.starlog()
        .args(&["check", "starlog.toml", "--format", "json"])
        .passes()
        .stdout_eq("[]\n")
        .stdout_lacks("ignored");
}
