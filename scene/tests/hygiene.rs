//! Hygiene: enforces coding standards for the scene crate at test time.
//!
//! The scene runs inside every page view, so production sources must not be
//! able to panic or silently drop errors. Each pattern has a budget (zero
//! today). The budget never grows: fix an existing hit before adding one.

use std::fs;
use std::path::Path;

struct Rule {
    name: &'static str,
    pattern: &'static str,
    budget: usize,
}

const RULES: &[Rule] = &[
    // Panics crash the frame loop.
    Rule { name: "unwrap", pattern: ".unwrap()", budget: 0 },
    Rule { name: "expect", pattern: ".expect(", budget: 0 },
    Rule { name: "panic", pattern: "panic!(", budget: 0 },
    Rule { name: "unreachable", pattern: "unreachable!(", budget: 0 },
    Rule { name: "todo", pattern: "todo!(", budget: 0 },
    Rule { name: "unimplemented", pattern: "unimplemented!(", budget: 0 },
    // Silent loss: discards errors without inspecting.
    Rule { name: "silent discard", pattern: "let _ =", budget: 0 },
    Rule { name: "dot ok", pattern: ".ok()", budget: 0 },
    // Style / structure.
    Rule { name: "allow dead code", pattern: "#[allow(dead_code)]", budget: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `scene/src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_were_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn every_rule_is_within_budget() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("  {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{} budget exceeded: found {count}, max {}.\n{detail}", rule.name, rule.budget));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

fn indent(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Lines at the `save()` indentation that can return early before the
/// matching `restore()`.
fn early_exits_between_save_and_restore(content: &str) -> Vec<String> {
    let mut exits = Vec::new();
    let mut open: Option<usize> = None;
    for line in content.lines() {
        let trimmed = line.trim();
        match open {
            None if trimmed == "ctx.save();" => open = Some(indent(line)),
            Some(depth) if trimmed == "ctx.restore();" && indent(line) == depth => open = None,
            Some(depth) if indent(line) == depth && (trimmed.contains('?') || trimmed.starts_with("return")) => {
                exits.push(trimmed.to_owned());
            }
            _ => {}
        }
    }
    if open.is_some() {
        exits.push("save() without restore()".to_owned());
    }
    exits
}

#[test]
fn canvas_state_is_restored_on_every_path() {
    let mut failures = Vec::new();
    for file in source_files() {
        for exit in early_exits_between_save_and_restore(&file.content) {
            failures.push(format!("  {}: {exit}", file.path));
        }
    }
    assert!(failures.is_empty(), "early exit between save() and restore():\n{}", failures.join("\n"));
}

#[test]
fn save_restore_scan_flags_question_mark_exits() {
    let leaky = "    ctx.save();\n    ctx.translate(x, y)?;\n    ctx.restore();\n";
    assert_eq!(early_exits_between_save_and_restore(leaky), vec!["ctx.translate(x, y)?;".to_owned()]);

    let balanced = "    ctx.save();\n    let r = (|| {\n        ctx.translate(x, y)?;\n        Ok(())\n    })();\n    ctx.restore();\n";
    assert!(early_exits_between_save_and_restore(balanced).is_empty());
}
