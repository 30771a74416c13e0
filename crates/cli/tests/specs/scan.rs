//! Scan command specs
//!
//! Verify event-name discovery across source files.

use crate::prelude::*;

const QUOTED: &str = "'(fin-[a-z-]+)'";

fn sources() -> Project {
    let temp = Project::empty();
    temp.file(
        "src/grid.js",
        "grid.fire('fin-click');\ngrid.fire('fin-keydown');\ngrid.fire('fin-click');\n",
    );
    temp.file(
        "src/canvas.js",
        "canvas.fire('fin-canvas-resized');\ncanvas.fire('fin-click');\n",
    );
    temp
}

#[test]
fn names_are_deduped_across_files_in_first_seen_order() {
    sources()
        .starlog()
        .args(&["scan", "src/grid.js", "src/canvas.js", "--pattern", QUOTED])
        .passes()
        .stdout_eq("fin-click\nfin-keydown\nfin-canvas-resized\n");
}

#[test]
fn file_order_decides_name_order() {
    sources()
        .starlog()
        .args(&["scan", "src/canvas.js", "src/grid.js", "--pattern", QUOTED])
        .passes()
        .stdout_eq("fin-canvas-resized\nfin-click\nfin-keydown\n");
}

#[test]
fn capture_group_zero_returns_whole_match() {
    sources()
        .starlog()
        .args(&[
            "scan",
            "src/canvas.js",
            "--pattern",
            QUOTED,
            "--capture-group",
            "0",
        ])
        .passes()
        .stdout_eq("'fin-canvas-resized'\n'fin-click'\n");
}

#[test]
fn capture_group_out_of_range_fails() {
    sources()
        .starlog()
        .args(&[
            "scan",
            "src/grid.js",
            "--pattern",
            QUOTED,
            "--capture-group",
            "2",
        ])
        .fails()
        .stderr_has("capture group 2 out of range");
}

#[test]
fn deny_filters_matches() {
    sources()
        .starlog()
        .args(&[
            "scan",
            "src/grid.js",
            "src/canvas.js",
            "--pattern",
            QUOTED,
            "--deny",
            "fin-canvas-*",
        ])
        .passes()
        .stdout_eq("fin-click\nfin-keydown\n");
}

#[test]
fn allow_keeps_only_matching_names() {
    sources()
        .starlog()
        .args(&[
            "scan",
            "src/grid.js",
            "src/canvas.js",
            "--pattern",
            QUOTED,
            "--allow",
            "fin-k*",
            "--allow",
            "*-resized",
        ])
        .passes()
        .stdout_eq("fin-keydown\nfin-canvas-resized\n");
}

#[test]
fn no_matches_prints_nothing() {
    sources()
        .starlog()
        .args(&["scan", "src/grid.js", "--pattern", "'(evt-[a-z]+)'"])
        .passes()
        .stdout_eq("");
}

#[test]
fn json_output_is_an_array() {
    let stdout = sources()
        .starlog()
        .args(&[
            "scan",
            "src/grid.js",
            "--pattern",
            QUOTED,
            "--format",
            "json",
        ])
        .passes()
        .stdout();

    let names: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(names, vec!["fin-click", "fin-keydown"]);
}
