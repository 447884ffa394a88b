use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::corpus;

/// Which corpus subtree a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pattern,
    Task,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Pattern => write!(f, "pattern"),
            Category::Task => write!(f, "task"),
        }
    }
}

/// One retrievable unit: a pattern or task record plus its token statistics.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub complexity: String,
    pub category: Category,
    /// Record location, relative to the corpus root when the file lies
    /// under it, absolute otherwise.
    pub source_path: PathBuf,
    /// Tokens of the searchable text, duplicates retained.
    pub tokens: Vec<String>,
    pub token_count: usize,
    /// Full original record, for callers that need fields beyond the above.
    pub payload: Value,
}

/// Immutable corpus snapshot: documents in discovery order plus the
/// corpus-wide statistics BM25 scoring needs.
///
/// Built once per run and never patched; a new corpus snapshot means a new
/// `Index`. Multiple indices can coexist, so tests can score against
/// synthetic corpora.
#[derive(Debug, Default)]
pub struct Index {
    pub documents: Vec<Document>,
    /// How many documents contain each term at least once.
    pub document_frequency: HashMap<String, u32>,
    pub document_count: usize,
    /// Mean token count over all documents, 0 for an empty corpus.
    pub average_document_length: f64,
}

impl Index {
    /// Build an index from `<corpus_root>/patterns` and `<corpus_root>/tasks`.
    ///
    /// The whole corpus is read in one pass. A malformed record aborts the
    /// build with the offending path in the error chain.
    pub fn build<P: AsRef<Path>>(corpus_root: P) -> Result<Index> {
        let documents = corpus::load_documents(corpus_root.as_ref())?;
        Ok(Index::from_documents(documents))
    }

    /// Accumulate corpus statistics over already-loaded documents.
    pub fn from_documents(documents: Vec<Document>) -> Index {
        let mut document_frequency: HashMap<String, u32> = HashMap::new();
        let mut total_length = 0usize;
        for doc in &documents {
            total_length += doc.token_count;
            // Multiple occurrences within one document count once.
            let distinct: HashSet<&str> = doc.tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let document_count = documents.len();
        let average_document_length = if document_count > 0 {
            total_length as f64 / document_count as f64
        } else {
            0.0
        };

        Index {
            documents,
            document_frequency,
            document_count,
            average_document_length,
        }
    }
}
