//! Hygiene — enforces coding standards at test time
//!
//! Scans the previews crate's production sources for antipatterns. Every
//! rule carries a budget (zero unless stated); if you must add an
//! occurrence, fix an existing one first — the budget never grows.

use std::fs;
use std::path::{Path, PathBuf};

/// One banned pattern and how many occurrences the crate tolerates.
struct Rule {
    needle: &'static str,
    budget: usize,
}

/// Panicking escape hatches. The widget cores are pure and total, so none
/// of these belong in production code.
const PANIC_RULES: &[Rule] = &[
    Rule { needle: ".unwrap()", budget: 0 },
    Rule { needle: ".expect(", budget: 0 },
    Rule { needle: "panic!(", budget: 0 },
    Rule { needle: "unreachable!(", budget: 0 },
    Rule { needle: "todo!(", budget: 0 },
    Rule { needle: "unimplemented!(", budget: 0 },
];

/// Error-dropping forms. Canvas calls propagate `Result` instead.
const DISCARD_RULES: &[Rule] = &[
    Rule { needle: "let _ =", budget: 0 },
    Rule { needle: ".ok()", budget: 0 },
];

/// Structure smells.
const STYLE_RULES: &[Rule] = &[Rule { needle: "#[allow(dead_code)]", budget: 0 }];

/// `file:line` locations where a rule's needle occurs.
fn occurrences(sources: &[(PathBuf, String)], needle: &str) -> Vec<String> {
    let mut found = Vec::new();
    for (path, content) in sources {
        for (idx, line) in content.lines().enumerate() {
            if line.contains(needle) {
                found.push(format!("{}:{}", path.display(), idx + 1));
            }
        }
    }
    found
}

/// Production `.rs` files under `src/`, skipping sibling `*_test.rs` files.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut sources = Vec::new();
    read_tree(Path::new("src"), &mut sources);
    assert!(
        !sources.is_empty(),
        "hygiene scan found no sources; was the crate layout moved?"
    );
    sources
}

fn read_tree(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            read_tree(&path, out);
            continue;
        }
        let is_source = path.extension().is_some_and(|ext| ext == "rs")
            && !path.to_string_lossy().ends_with("_test.rs");
        if is_source {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn enforce(rules: &[Rule]) {
    let sources = production_sources();
    let mut report = String::new();
    for rule in rules {
        let hits = occurrences(&sources, rule.needle);
        if hits.len() > rule.budget {
            report.push_str(&format!(
                "`{}` over budget ({} found, {} allowed):\n  {}\n",
                rule.needle,
                hits.len(),
                rule.budget,
                hits.join("\n  ")
            ));
        }
    }
    assert!(report.is_empty(), "{report}");
}

#[test]
fn no_panicking_calls() {
    enforce(PANIC_RULES);
}

#[test]
fn no_silent_error_discards() {
    enforce(DISCARD_RULES);
}

#[test]
fn no_dead_code_allowances() {
    enforce(STYLE_RULES);
}
