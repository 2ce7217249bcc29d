//! Building node stores from files or stdin.
//!
//! Two input formats are understood:
//!
//! - **Path lists** (`.paths` or `.txt`): one full path per line. Blank lines
//!   and lines starting with `#` are skipped.
//! - **Documents** (anything else): YAML, which also covers JSON. The document
//!   is flattened so every mapping, sequence and scalar becomes a node keyed by
//!   its full path. Mapping keys are escaped, so a key such as `eu.west`
//!   stays one component. Sequence elements use their index as the name.
//!
//! Either format may be gzip-compressed (`.gz` on files, magic bytes on stdin).
//!
//! Stdin has no file name, so its format is given as an [`InputFormat`]. With
//! `InputFormat::Auto` the content is read as a document when it parses as a
//! YAML mapping or sequence. Some path lists are valid YAML collections too
//! (a line `-` is a sequence, a line `a.b: c` is a mapping); pass
//! `InputFormat::PathList` for those.

use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::node::TreeNode;
use super::tree::NodeStore;
use crate::path::{escape_component, join_with, PathSyntax};

/// How to read content that has no file name to go by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// A YAML mapping or sequence is a document; anything else a path list.
    #[default]
    Auto,
    /// YAML or JSON document.
    Document,
    /// One path per line.
    PathList,
}

/// Loads a node store from the filesystem.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A `.gz` file is not valid gzip
/// - A document file is not valid YAML
///
/// # Examples
///
/// ```no_run
/// use nodepath::path::PathSyntax;
/// use nodepath::store::loader::load_store_file;
///
/// let store = load_store_file("config.yaml", &PathSyntax::default()).unwrap();
/// println!("{} nodes", store.len());
/// ```
pub fn load_store_file<P: AsRef<Path>>(path: P, syntax: &PathSyntax) -> Result<NodeStore> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let store = if is_path_list(path_ref) {
        parse_path_list(&content, syntax)
    } else {
        parse_document(&content, syntax)
            .with_context(|| format!("Failed to parse {}", path_ref.display()))?
    };

    info!(
        file = %path_ref.display(),
        nodes = store.len(),
        "loaded node store"
    );
    Ok(store)
}

/// Loads a node store from standard input.
///
/// Gzip input is detected by its magic bytes; the content is then parsed
/// according to `format`.
pub fn load_store_from_stdin(syntax: &PathSyntax, format: InputFormat) -> Result<NodeStore> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = decode_bytes(buffer)?;
    parse_store_content(&content, syntax, format)
}

/// Parses in-memory content in the given format.
///
/// With `InputFormat::Auto`, a bare line of text is valid YAML too, so only
/// mappings and sequences count as documents. Only `InputFormat::Document`
/// can fail.
pub fn parse_store_content(
    content: &str,
    syntax: &PathSyntax,
    format: InputFormat,
) -> Result<NodeStore> {
    match format {
        InputFormat::Document => parse_document(content, syntax),
        InputFormat::PathList => Ok(parse_path_list(content, syntax)),
        InputFormat::Auto => match serde_yaml::from_str::<Value>(content) {
            Ok(value @ (Value::Mapping(_) | Value::Sequence(_))) => {
                let mut store = NodeStore::with_syntax(*syntax);
                flatten_root(&value, syntax, &mut store);
                Ok(store)
            }
            _ => {
                debug!("input is not a YAML mapping or sequence, reading as path list");
                Ok(parse_path_list(content, syntax))
            }
        },
    }
}

/// Parses a YAML (or JSON) document into a flattened store.
///
/// The document root itself has no path; its entries are the root-level
/// nodes. A scalar document yields an empty store.
pub fn parse_document(content: &str, syntax: &PathSyntax) -> Result<NodeStore> {
    let value: Value = serde_yaml::from_str(content).context("Invalid YAML document")?;
    let mut store = NodeStore::with_syntax(*syntax);
    flatten_root(&value, syntax, &mut store);
    Ok(store)
}

/// Parses a path list: one path per line.
///
/// Leading whitespace and unescaped trailing whitespace are trimmed, so `a\ `
/// keeps its escaped space. Blank lines and `#` comments are skipped;
/// duplicate paths keep their first position.
pub fn parse_path_list(content: &str, syntax: &PathSyntax) -> NodeStore {
    let mut store = NodeStore::with_syntax(*syntax);
    for line in content.lines() {
        let line = trim_unescaped_end(line.trim_start(), syntax);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        store.insert_path(line);
    }
    store
}

/// Strips trailing whitespace that is not bound to an escape character.
fn trim_unescaped_end<'a>(line: &'a str, syntax: &PathSyntax) -> &'a str {
    let mut end = 0;
    let mut escape_pending = false;
    for (offset, ch) in line.char_indices() {
        let next = offset + ch.len_utf8();
        if escape_pending {
            escape_pending = false;
            end = next;
        } else if ch == syntax.escape() {
            escape_pending = true;
            end = next;
        } else if !ch.is_whitespace() {
            end = next;
        }
    }
    &line[..end]
}

fn flatten_root(value: &Value, syntax: &PathSyntax, store: &mut NodeStore) {
    let mut prefix = Vec::new();
    for (name, child) in entries(value) {
        flatten(&name, child, &mut prefix, syntax, store);
    }
}

/// Inserts `value` under `prefix + name`, then recurses into its entries.
///
/// Tags are dropped; the tagged value decides the node's shape.
fn flatten(
    name: &str,
    value: &Value,
    prefix: &mut Vec<String>,
    syntax: &PathSyntax,
    store: &mut NodeStore,
) {
    let value = untag(value);
    prefix.push(escape_component(name, syntax));
    let key = join_with(prefix.iter(), syntax);

    let node = match value {
        Value::Mapping(_) => TreeNode::mapping(name),
        Value::Sequence(_) => TreeNode::sequence(name),
        scalar => TreeNode::scalar(name, scalar_text(scalar)),
    };
    store.insert(key, node);

    for (child_name, child) in entries(value) {
        flatten(&child_name, child, prefix, syntax, store);
    }
    prefix.pop();
}

fn untag(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}

/// Named children of a container value; empty for scalars.
fn entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Mapping(map) => map.iter().map(|(k, v)| (scalar_text(k), v)).collect(),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Tagged(tagged) => entries(&tagged.value),
        _ => Vec::new(),
    }
}

/// Text of a scalar as it would read in the document.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        // Complex mapping keys; rendered inline.
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Determines if a file is a path list based on its name, ignoring `.gz`.
fn is_path_list(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);
    base.ends_with(".paths") || base.ends_with(".txt")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file(path: &Path) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open gzipped file {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decodes raw input bytes, gunzipping when they start with the gzip magic
/// bytes (0x1f 0x8b).
fn decode_bytes(buffer: Vec<u8>) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    if buffer.starts_with(&[0x1f, 0x8b]) {
        let mut decoder = GzDecoder::new(buffer.as_slice());
        let mut content = String::new();
        decoder
            .read_to_string(&mut content)
            .context("Failed to decompress gzipped stdin")?;
        Ok(content)
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")
    }
}
