use std::fmt::Write as _;
use std::fs::File;
use std::path::{Path, PathBuf};

use addin_host::{FileType, FileTypeInfo, Registry, keyword_help};
use anyhow::{Context, Result};
use include_scanner::{IncludeScanner, RevisitPolicy, ScanOptions, TextLines};
use lexer_core::{span_runs, split_lines};
use serde_json::json;
use tracing::{debug, info};

use crate::Format;

/// Read a source file, honoring its byte-order mark, with lines joined by `\n`.
fn read_text(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let lines = TextLines::new(file).with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), encoding = ?lines.encoding(), "reading");
    let lines = lines
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(lines.join("\n"))
}

fn file_type<'r>(registry: &'r Registry, path: &Path, grammar: Option<&str>) -> Result<&'r FileType> {
    let file_type = match grammar {
        Some(name) => registry.by_name(name)?,
        None => registry.for_file(path)?,
    };
    Ok(file_type)
}

fn to_json(value: &impl serde::Serialize) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

pub(crate) fn highlight(path: &Path, grammar: Option<&str>, format: Format) -> Result<String> {
    let registry = Registry::builtin();
    let file_type = file_type(&registry, path, grammar)?;
    let text = read_text(path)?;
    let lines = file_type.grammar.highlight(&text);

    if format == Format::Json {
        return to_json(&lines);
    }
    let mut out = String::new();
    for (line, content) in lines.iter().zip(split_lines(&text)) {
        let runs: Vec<String> = span_runs(&line.spans, content.chars().count())
            .into_iter()
            .map(|(start, end, category)| format!("{start}..{end}:{}", category.name()))
            .collect();
        writeln!(out, "{:>5} {:04x}  {}", line.line + 1, line.cookie, runs.join(" "))?;
    }
    Ok(out)
}

pub(crate) fn folds(path: &Path, grammar: Option<&str>, format: Format) -> Result<String> {
    let registry = Registry::builtin();
    let file_type = file_type(&registry, path, grammar)?;
    let regions = file_type.grammar.fold_regions(&read_text(path)?);

    if format == Format::Json {
        return to_json(&regions);
    }
    let mut out = String::new();
    for region in &regions {
        writeln!(
            out,
            "{}-{} depth {}",
            region.start_line + 1,
            region.end_line + 1,
            region.depth
        )?;
    }
    Ok(out)
}

pub(crate) fn deps(
    path: &Path,
    once: bool,
    max_depth: Option<usize>,
    format: Format,
) -> Result<String> {
    let registry = Registry::builtin();
    let file_type = registry.for_file(path)?;

    let mut options = ScanOptions::new();
    if once {
        options = options.revisit(RevisitPolicy::Once);
    }
    if let Some(depth) = max_depth {
        options = options.max_depth(depth);
    }

    let mut found: Vec<PathBuf> = Vec::new();
    let summary = file_type
        .scan(&IncludeScanner::with_options(options), path, |p: &Path| {
            found.push(p.to_path_buf());
            true
        })
        .with_context(|| format!("dependency scan of {} failed", path.display()))?;
    info!(
        dependencies = summary.dependencies,
        files = summary.files_scanned,
        unresolved = summary.unresolved,
        cycles_cut = summary.cycles_cut,
        "scan complete"
    );

    if format == Format::Json {
        return to_json(&json!({
            "dependencies": found,
            "files_scanned": summary.files_scanned,
            "unresolved": summary.unresolved,
            "cycles_cut": summary.cycles_cut,
        }));
    }
    let mut out = String::new();
    for dep in &found {
        writeln!(out, "{}", dep.display())?;
    }
    Ok(out)
}

pub(crate) fn keyword(word: &str, document: &Path) -> String {
    match keyword_help(&Registry::builtin(), word, document) {
        Some(topic) => format!("{topic}\n"),
        None => format!("'{word}' is not a keyword for {}\n", document.display()),
    }
}

pub(crate) fn types(format: Format) -> Result<String> {
    let infos: Vec<FileTypeInfo> = Registry::builtin().iter().map(FileType::info).collect();

    if format == Format::Json {
        return to_json(&infos);
    }
    let mut out = String::new();
    for info in &infos {
        let extensions: Vec<String> = info.extensions.iter().map(|e| format!("*.{e}")).collect();
        write!(out, "{:<6} {:<10} {}", info.name, extensions.join(","), info.description)?;
        if info.scanner.is_some() {
            out.push_str(" [dependency scanner]");
        }
        out.push('\n');
        for shell in info.shells {
            writeln!(out, "       build: {shell}")?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_highlight_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, "int x = 1; /* open\nclose */\n").unwrap();

        let out = highlight(&path, None, Format::Text).unwrap();
        assert_eq!(
            out,
            "    1 0104  0..3:keyword 3..6:text 6..7:operator 7..8:text 8..9:number 9..11:text 11..18:comment\n    2 0000  0..8:comment\n"
        );
    }

    #[test]
    fn test_highlight_grammar_override_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "[null]").unwrap();

        assert!(highlight(&path, None, Format::Text).is_err());
        let out = highlight(&path, Some("json"), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["spans"][1]["category"], "keyword");
    }

    #[test]
    fn test_folds_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, "{\n  \"a\": [\n    1\n  ]\n}\n").unwrap();
        assert_eq!(
            folds(&path, None, Format::Text).unwrap(),
            "1-5 depth 1\n2-4 depth 2\n"
        );
    }

    #[test]
    fn test_deps_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let main = dir.path().join("main.cpp");
        fs::write(&main, "#include \"a.h\"\n#include \"a.h\"\n").unwrap();
        fs::write(dir.path().join("a.h"), "").unwrap();
        let a = dir.path().join("a.h");

        let out = deps(&main, false, None, Format::Text).unwrap();
        assert_eq!(out, format!("{0}\n{0}\n", a.display()));

        let out = deps(&main, true, None, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["dependencies"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["files_scanned"], 2);

        assert!(deps(&dir.path().join("x.json"), false, None, Format::Text).is_err());
    }

    #[test]
    fn test_keyword_and_types() {
        assert_eq!(
            keyword("static_assert", Path::new("a.cpp")),
            "C++ file: 'static_assert' is a keyword\n"
        );
        assert_eq!(
            keyword("static", Path::new("a.json")),
            "'static' is not a keyword for a.json\n"
        );

        let out = types(Format::Text).unwrap();
        assert!(out.starts_with("cpp    *.cpp      C++ file [dependency scanner]\n"));
        assert!(out.contains("json   *.json     JSON file\n"));
    }
}
