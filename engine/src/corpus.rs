use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use walkdir::WalkDir;

use crate::index::{Category, Document};
use crate::tokenizer::tokenize;

/// The record fields the engine reads. Unknown fields survive in the raw
/// payload and are otherwise ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    id: String,
    name: String,
    description: String,
    keywords: Vec<String>,
    complexity: String,
}

/// Load every record under `<root>/patterns` and `<root>/tasks`, in a
/// deterministic discovery order. A missing subtree contributes nothing.
pub(crate) fn load_documents(root: &Path) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for (subtree, category) in [("patterns", Category::Pattern), ("tasks", Category::Task)] {
        let dir = root.join(subtree);
        if !dir.is_dir() {
            continue;
        }
        collect_subtree(root, &dir, category, &mut documents)?;
    }
    Ok(documents)
}

fn collect_subtree(
    root: &Path,
    dir: &Path,
    category: Category,
    out: &mut Vec<Document>,
) -> Result<()> {
    // Links are followed so a subtree materialized as a symlink or junction
    // is still fully indexed; sorting keeps discovery order reproducible.
    let walker = WalkDir::new(dir).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => {
                // A followed link leading back into an ancestor would never
                // terminate; skip that branch and keep walking.
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                tracing::warn!(%path, "skipping symlink cycle");
                continue;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("walking corpus directory {}", dir.display()))
            }
        };
        if !entry.file_type().is_file() || !is_record(entry.path()) {
            continue;
        }
        out.push(load_record(root, entry.path(), category)?);
    }
    Ok(())
}

fn is_record(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

fn load_record(root: &Path, path: &Path, category: Category) -> Result<Document> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading corpus record {}", path.display()))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing corpus record {}", path.display()))?;
    let record: RawRecord = serde_json::from_value(payload.clone())
        .with_context(|| format!("parsing corpus record {}", path.display()))?;

    let tokens = tokenize(&searchable_text(&record));
    let token_count = tokens.len();
    let source_path = path
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf());
    tracing::debug!(id = %record.id, path = %source_path.display(), "indexed record");

    Ok(Document {
        id: record.id,
        name: record.name,
        description: record.description,
        keywords: record.keywords,
        complexity: record.complexity,
        category,
        source_path,
        tokens,
        token_count,
        payload,
    })
}

/// Searchable text: id, name, description, and the keyword list repeated
/// three times. Keywords weigh 3x by literal repetition, before
/// tokenization, not by a multiplier applied later.
fn searchable_text(record: &RawRecord) -> String {
    let mut parts: Vec<&str> = vec![&record.id, &record.name, &record.description];
    for _ in 0..3 {
        parts.extend(record.keywords.iter().map(String::as_str));
    }
    parts.join(" ")
}
