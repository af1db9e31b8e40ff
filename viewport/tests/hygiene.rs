//! Hygiene: source-level rules for the viewport engine.
//!
//! The engine runs inside every pointer and wheel handler, so it must never
//! panic and never drop an error on the floor. Each rule below has a budget
//! (zero unless noted); a rule may only be tightened, never loosened.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    name: &'static str,
    pattern: &'static str,
    budget: usize,
}

const RULES: &[Rule] = &[
    // Panics.
    Rule { name: "unwrap", pattern: ".unwrap()", budget: 0 },
    Rule { name: "expect", pattern: ".expect(", budget: 0 },
    Rule { name: "panic", pattern: "panic!(", budget: 0 },
    Rule { name: "unreachable", pattern: "unreachable!(", budget: 0 },
    Rule { name: "todo", pattern: "todo!(", budget: 0 },
    Rule { name: "unimplemented", pattern: "unimplemented!(", budget: 0 },
    // Silent loss.
    Rule { name: "discard", pattern: "let _ =", budget: 0 },
    Rule { name: "ok", pattern: ".ok()", budget: 0 },
    // Structure. Geometry is f64 end to end; output belongs to the host.
    Rule { name: "dead code", pattern: "#[allow(dead_code)]", budget: 0 },
    Rule { name: "f32", pattern: "f32", budget: 0 },
    Rule { name: "println", pattern: "println!(", budget: 0 },
    Rule { name: "dbg", pattern: "dbg!(", budget: 0 },
];

/// Production sources under `src/`; `*_test.rs` files are exempt.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    let mut pending = vec![PathBuf::from("src")];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|e| e.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if is_production(&path) {
                if let Ok(content) = fs::read_to_string(&path) {
                    out.push((path, content));
                }
            }
        }
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

fn is_production(path: &Path) -> bool {
    let is_rs = path.extension().is_some_and(|e| e == "rs");
    let is_test = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with("_test.rs"));
    is_rs && !is_test
}

/// `(file, line number, line)` for every line containing `pattern`, comments excluded.
fn hits<'a>(sources: &'a [(PathBuf, String)], pattern: &str) -> Vec<(&'a Path, usize, &'a str)> {
    sources
        .iter()
        .flat_map(|(path, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim_start().starts_with("//") && line.contains(pattern))
                .map(move |(i, line)| (path.as_path(), i + 1, line.trim()))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let sources = production_sources();
    assert!(
        sources.iter().any(|(p, _)| p.ends_with("engine.rs")),
        "expected to scan src/engine.rs; run from the crate root"
    );
}

#[test]
fn every_rule_is_within_budget() {
    let sources = production_sources();
    let mut report = String::new();
    for rule in RULES {
        let found = hits(&sources, rule.pattern);
        if found.len() > rule.budget {
            report.push_str(&format!("{}: {} found, budget {}\n", rule.name, found.len(), rule.budget));
            for (path, line_no, line) in found {
                report.push_str(&format!("  {}:{line_no}: {line}\n", path.display()));
            }
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{report}");
}

#[test]
fn test_modules_live_in_sibling_files() {
    // Every `#[cfg(test)]` module in production code points at a `*_test.rs` sibling.
    for (path, content) in production_sources() {
        for (i, line) in content.lines().enumerate() {
            if line.trim() == "#[cfg(test)]" {
                let next = content.lines().nth(i + 1).unwrap_or_default();
                assert!(
                    next.trim_start().starts_with("#[path = \"") && next.contains("_test.rs"),
                    "{}:{}: inline test module; use a sibling *_test.rs file",
                    path.display(),
                    i + 1
                );
            }
        }
    }
}
