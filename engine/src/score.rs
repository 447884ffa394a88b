use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::index::{Category, Document, Index};
use crate::query::extract_keywords;
use crate::tokenizer::tokenize;

/// BM25 tuning parameters, configurable per call.
#[derive(Debug, Clone, Copy)]
pub struct Bm25Params {
    /// Term-frequency saturation, typically 1.2-2.0.
    pub k1: f64,
    /// Length-normalization strength, 0.75 is standard.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// One ranked result. The full record payload rides along for callers that
/// need extra fields, but stays out of the serialized form.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub complexity: String,
    pub category: Category,
    pub source_path: PathBuf,
    pub score: f64,
    #[serde(skip_serializing)]
    pub payload: Value,
}

/// Rank indexed documents against a free-text query.
///
/// Results are sorted by score descending; equal scores keep corpus
/// discovery order (the sort is stable). Documents scoring exactly 0 never
/// appear. `top_k = 0` yields an empty list. Never mutates the index, so a
/// built index can serve any number of queries.
pub fn search(index: &Index, query: &str, top_k: usize, params: &Bm25Params) -> Vec<SearchHit> {
    let keywords = extract_keywords(query);
    let terms = tokenize(&keywords.join(" "));
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = Vec::new();
    for doc in &index.documents {
        let score = score_document(index, &terms, doc, params);
        if score > 0.0 {
            hits.push(SearchHit {
                id: doc.id.clone(),
                name: doc.name.clone(),
                description: doc.description.clone(),
                keywords: doc.keywords.clone(),
                complexity: doc.complexity.clone(),
                category: doc.category,
                source_path: doc.source_path.clone(),
                score,
                payload: doc.payload.clone(),
            });
        }
    }

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    hits.truncate(top_k);
    hits
}

/// BM25 score of one document against the query terms.
fn score_document(index: &Index, terms: &[String], doc: &Document, params: &Bm25Params) -> f64 {
    let mut term_freq: HashMap<&str, u32> = HashMap::new();
    for token in &doc.tokens {
        *term_freq.entry(token.as_str()).or_insert(0) += 1;
    }

    let n = index.document_count as f64;
    let mut seen: HashSet<&str> = HashSet::new();
    let mut score = 0.0;

    for term in terms {
        // Each distinct query term contributes once.
        if !seen.insert(term.as_str()) {
            continue;
        }
        let tf = match term_freq.get(term.as_str()) {
            Some(&tf) => f64::from(tf),
            None => continue,
        };
        // A term the corpus never saw carries no signal.
        let df = match index.document_frequency.get(term.as_str()) {
            Some(&df) if df > 0 => f64::from(df),
            _ => continue,
        };

        let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
        let length_norm = if index.average_document_length > 0.0 {
            1.0 - params.b + params.b * (doc.token_count as f64 / index.average_document_length)
        } else {
            1.0
        };
        score += idf * (tf * (params.k1 + 1.0)) / (tf + params.k1 * length_norm);
    }

    score
}
