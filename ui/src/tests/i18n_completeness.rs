//! Every `t!("...")` key used in `src/` must exist in the en-US bundle, and
//! every additional locale must carry all en-US keys.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "leano-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message IDs defined in a Fluent file. Terms (`-name`), comments,
/// attributes and continuation lines are skipped.
fn ftl_keys(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of `t!` invocations.
fn referenced_keys(source: &str) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";
    let mut keys = BTreeSet::new();
    let mut rest = source;
    while let Some(pos) = rest.find(NEEDLE) {
        rest = &rest[pos + NEEDLE.len()..];
        if let Some(end) = rest.find('"') {
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                keys.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }
    keys
}

fn read_locale(locale: &str) -> String {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {path:?}: {err}"))
}

#[test]
fn fallback_bundle_has_no_duplicate_keys() {
    let keys = ftl_keys(&read_locale(FALLBACK));
    assert!(!keys.is_empty(), "en-US bundle defines no messages");
    let unique: BTreeSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len(), "en-US bundle defines a key twice");
}

#[test]
fn every_referenced_key_is_translated() {
    let fallback: BTreeSet<String> = ftl_keys(&read_locale(FALLBACK)).into_iter().collect();

    let mut files = Vec::new();
    rust_sources(&crate_root().join("src"), &mut files);
    assert!(!files.is_empty(), "no Rust sources found under src/");

    let mut missing = BTreeSet::new();
    for file in files {
        let source = fs::read_to_string(&file).unwrap_or_default();
        for key in referenced_keys(&source) {
            if !fallback.contains(&key) {
                missing.insert(format!("{key} ({})", file.display()));
            }
        }
    }

    assert!(
        missing.is_empty(),
        "keys missing from en-US/{FTL_FILENAME}:\n  {}",
        missing.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

#[test]
fn additional_locales_are_complete() {
    let fallback: BTreeSet<String> = ftl_keys(&read_locale(FALLBACK)).into_iter().collect();
    let Ok(entries) = fs::read_dir(crate_root().join("i18n")) else {
        return;
    };

    for entry in entries.flatten() {
        let locale = entry.file_name().to_string_lossy().to_string();
        if locale == FALLBACK || !entry.path().is_dir() {
            continue;
        }
        let keys: BTreeSet<String> = ftl_keys(&read_locale(&locale)).into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        assert!(missing.is_empty(), "{locale} is missing: {}", missing.join(", "));
    }
}

#[test]
fn key_scanner_reads_macro_literals() {
    let keys = referenced_keys(r#"let a = t!("nav-home"); let b = crate::t!("form-name");"#);
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        vec!["form-name".to_string(), "nav-home".to_string()]
    );
}
