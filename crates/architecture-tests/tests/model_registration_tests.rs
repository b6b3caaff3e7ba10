//! Architecture tests for record registration.
//!
//! Every `record!` declaration under `crates/client/src/models/` must be:
//! - registered in `crates/client/src/registry.rs` with `Schema::of::<T>()`,
//! - re-exported from `models/mod.rs`,
//! - declared under a schema type name no other record uses.
//!
//! The check is static: it reads the sources rather than linking the client
//! crate, so a forgotten registration fails here with the file and type name.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A `pub struct Name => "typeName"` line from a `record!` block.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Declaration {
    struct_name: String,
    type_name: String,
    file: PathBuf,
}

#[test]
fn every_record_is_registered_and_exported() {
    let workspace_root = find_workspace_root();
    let client_src = workspace_root.join("crates").join("client").join("src");
    let models_dir = client_src.join("models");

    let declarations = find_declarations(&models_dir);
    assert!(
        !declarations.is_empty(),
        "no record! declarations found under {}",
        models_dir.display()
    );

    let registry = fs::read_to_string(client_src.join("registry.rs")).expect("read registry.rs");
    let models_mod = fs::read_to_string(models_dir.join("mod.rs")).expect("read models/mod.rs");

    let mut problems = Vec::new();
    for decl in &declarations {
        let registration = format!("Schema::of::<{}>()", decl.struct_name);
        if !registry.contains(&registration) {
            problems.push(format!(
                "{} ({}): missing `{}` in registry.rs",
                decl.struct_name,
                decl.file.display(),
                registration
            ));
        }
        if !contains_word(&models_mod, &decl.struct_name) {
            problems.push(format!(
                "{} ({}): not re-exported from models/mod.rs",
                decl.struct_name,
                decl.file.display()
            ));
        }
    }

    let registered = registry.matches("Schema::of::<").count();
    if registered != declarations.len() {
        problems.push(format!(
            "registry.rs has {} entries but {} records are declared",
            registered,
            declarations.len()
        ));
    }

    assert!(
        problems.is_empty(),
        "\n=== Record registration problems ===\n{}\n",
        problems.join("\n")
    );
    eprintln!(
        "[architecture] {} records declared and registered.",
        declarations.len()
    );
}

#[test]
fn schema_type_names_are_unique() {
    let models_dir = find_workspace_root()
        .join("crates")
        .join("client")
        .join("src")
        .join("models");

    let mut seen: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for decl in find_declarations(&models_dir) {
        seen.entry(decl.type_name).or_default().push(decl.struct_name);
    }

    let duplicates: Vec<_> = seen
        .iter()
        .filter(|(_, structs)| structs.len() > 1)
        .map(|(type_name, structs)| format!("{type_name}: {}", structs.join(", ")))
        .collect();
    assert!(
        duplicates.is_empty(),
        "type names declared more than once:\n{}",
        duplicates.join("\n")
    );
}

/// Collect `record!` declarations from every `.rs` file under `dir`.
fn find_declarations(dir: &Path) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let content = fs::read_to_string(entry.path()).unwrap_or_default();
        declarations.extend(
            content
                .lines()
                .filter_map(parse_declaration)
                .map(|(struct_name, type_name)| Declaration {
                    struct_name,
                    type_name,
                    file: entry.path().to_path_buf(),
                }),
        );
    }
    declarations
}

/// Parse `pub struct Name => "typeName" {` into its two names.
fn parse_declaration(line: &str) -> Option<(String, String)> {
    let rest = line.trim().strip_prefix("pub struct ")?;
    let (struct_name, rest) = rest.split_once("=>")?;
    let type_name = rest.trim().strip_prefix('"')?.split('"').next()?;
    Some((struct_name.trim().to_string(), type_name.to_string()))
}

/// Whole-identifier match, so `Taint` does not match inside `RkeTaint`.
fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + word.len()..].chars().next();
        let is_ident = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
        !is_ident(before) && !is_ident(after)
    })
}

/// Find the workspace root by looking for Cargo.toml with [workspace].
fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

#[test]
fn test_parse_declaration() {
    assert_eq!(
        parse_declaration(r#"    pub struct GlobalOpenstackOpts => "globalOpenstackOpts" {"#),
        Some((
            "GlobalOpenstackOpts".to_string(),
            "globalOpenstackOpts".to_string()
        ))
    );
    assert_eq!(parse_declaration("pub struct Plain {"), None);
    assert_eq!(parse_declaration("    // pub struct Commented => \"x\""), None);
}

#[test]
fn test_contains_word() {
    assert!(contains_word("pub use node::{Taint, NodePool};", "Taint"));
    assert!(!contains_word("pub use rke::RkeTaint;", "Taint"));
    assert!(!contains_word("TaintList", "Taint"));
}

#[test]
fn test_find_declarations_in_temp_tree() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("a.rs"),
        "record! {\n    /// Doc.\n    pub struct Alpha => \"alpha\" {\n    }\n}\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "pub struct Beta => \"beta\" {").unwrap();

    let found = find_declarations(temp_dir.path());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].struct_name, "Alpha");
    assert_eq!(found[0].type_name, "alpha");
}
