//! Extraction of field annotations from Go source text.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

use crate::tag::Tag;

/// One field annotation found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSite {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    pub field: String,
    /// The annotation text between the backticks.
    pub raw: String,
    pub tag: Tag,
}

// Opens a multi-line struct body: `type User struct {` or `Inner struct {`
static STRUCT_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bstruct\s*\{\s*(?://.*)?$").unwrap());

// Any line that leaves a block open: `Handler interface {`, `Items []struct {`
static BLOCK_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\s*(?://.*)?$").unwrap());

// The field a block-typed declaration belongs to: `Server struct {`
static BLOCK_FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_]\w*)\s+\S").unwrap());

// A field declaration ending in a raw string annotation:
// - `Name string `json:"name"``
// - `ID, Ref int `db:"id"` // comment`
// - `*pkg.Base `json:",inline"`` (embedded, named after its type)
// Capture group 1: field name, group 2: annotation text.
static FIELD_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*?([A-Za-z_][\w.]*)[^`]*`([^`]*)`\s*(?://.*)?$").unwrap()
});

// The annotation trailing the close of a block-typed field: `} `json:"server"``
static BLOCK_CLOSE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\}\s*`([^`]*)`\s*(?://.*)?$").unwrap());

/// An open `{ ... }` block while scanning.
struct Block {
    /// Only struct bodies declare annotated fields.
    is_struct: bool,
    /// The field whose type this block spells out, if any.
    field: Option<String>,
}

/// Find every annotated field inside `struct { ... }` bodies of `source`.
///
/// Backtick strings outside struct bodies are not annotations and are skipped.
/// A field whose type is an inline block (`struct { ... }`, `interface { ... }`)
/// is reported at its closing line, where its annotation sits.
pub fn scan_source(path: &Path, source: &str) -> Vec<TagSite> {
    let mut sites = Vec::new();
    let mut blocks: Vec<Block> = Vec::new();

    let mut push_site = |line_idx: usize, field: &str, raw: &str| {
        sites.push(TagSite {
            file: path.to_path_buf(),
            line: line_idx + 1,
            field: field.to_string(),
            raw: raw.to_string(),
            tag: Tag::parse(raw),
        });
    };

    for (line_idx, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();

        let Some(current) = blocks.last() else {
            if STRUCT_OPEN_REGEX.is_match(line) {
                blocks.push(Block {
                    is_struct: true,
                    field: None,
                });
            }
            continue;
        };
        if trimmed.starts_with("//") {
            continue;
        }

        if trimmed.starts_with('}') {
            if let Some(Block {
                field: Some(field), ..
            }) = blocks.pop()
                && let Some(captures) = BLOCK_CLOSE_TAG_REGEX.captures(line)
            {
                push_site(line_idx, &field, &captures[1]);
            }
            continue;
        }

        if BLOCK_OPEN_REGEX.is_match(line) {
            let field = current
                .is_struct
                .then(|| BLOCK_FIELD_REGEX.captures(line))
                .flatten()
                .map(|captures| captures[1].to_string());
            blocks.push(Block {
                is_struct: STRUCT_OPEN_REGEX.is_match(line),
                field,
            });
            continue;
        }

        if current.is_struct
            && let Some(captures) = FIELD_TAG_REGEX.captures(line)
        {
            let field = &captures[1];
            let field = field.rsplit('.').next().unwrap_or(field);
            push_site(line_idx, field, &captures[2]);
        }
    }

    sites
}
