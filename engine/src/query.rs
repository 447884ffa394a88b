use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::tokenizer::tokenize;

lazy_static! {
    static ref HTTP_VERB: Regex =
        Regex::new(r"\b(get|post|put|delete|patch)\b").expect("valid regex");
    static ref API_SEGMENT: Regex = Regex::new(r"/api/(\w+)").expect("valid regex");
    /// Ordered tag table: a tag is appended when any of its trigger
    /// patterns matches the lowercased query. Evaluated in table order so
    /// tag emission order is deterministic.
    static ref TAG_TABLE: Vec<(&'static str, Vec<Regex>)> = {
        let table: &[(&str, &[&str])] = &[
            ("crud", &["crud", "create.*api", "full.*endpoint", "rest.*api"]),
            ("authentication", &["auth", "jwt", "login", "secure", "token", "protect"]),
            ("repository", &["repository", "database", "dao", "data.*access", "jpa"]),
            ("service", &["service", "business.*logic", "service.*layer"]),
            ("controller", &["controller", "endpoint", "rest", "api", "mapping"]),
            ("pagination", &["pagina", "page", "sort", "limit", "offset"]),
            ("validation", &["validat", "constraint", "check"]),
            ("search", &["search", "filter", "query", "find"]),
            ("configuration", &["config", r"application\.yaml", "properties", "setup"]),
            ("logging", &["log", "logging", "logback", "slf4j"]),
            ("security", &["security", "secure", "protect", "jwt", "auth"]),
            ("test", &["test", "unit.*test", "integration.*test", "mock"]),
        ];
        table
            .iter()
            .map(|(tag, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|p| Regex::new(p).expect("valid trigger pattern"))
                    .collect();
                (*tag, compiled)
            })
            .collect()
    };
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "the", "a", "an", "to", "for", "with", "in", "on", "me", "help", "please", "want",
            "need", "how", "can", "i",
        ];
        words.iter().copied().collect()
    };
}

/// Extract search keywords from a free-text query.
///
/// Appends, in order: HTTP verbs appearing as whole words, the `<segment>`
/// of an `/api/<segment>` fragment, every tag whose trigger set matches the
/// query, and the query's own non-stopword tokens; then deduplicates
/// preserving first occurrence. An empty or fully-stopword query yields an
/// empty list.
pub fn extract_keywords(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let mut keywords: Vec<String> = Vec::new();

    for mat in HTTP_VERB.find_iter(&lowered) {
        keywords.push(mat.as_str().to_string());
    }

    if let Some(caps) = API_SEGMENT.captures(&lowered) {
        keywords.push(caps[1].to_string());
    }

    for (tag, triggers) in TAG_TABLE.iter() {
        if triggers.iter().any(|trigger| trigger.is_match(&lowered)) {
            keywords.push((*tag).to_string());
        }
    }

    for token in tokenize(query) {
        if !STOPWORDS.contains(token.as_str()) {
            keywords.push(token);
        }
    }

    let mut seen = HashSet::new();
    keywords.retain(|keyword| seen.insert(keyword.clone()));
    keywords
}
