use criterion::{criterion_group, criterion_main, Criterion};
use engine::tokenizer::tokenize;
use engine::{search, Bm25Params, Category, Document, Index};
use std::path::PathBuf;

fn synthetic_index(docs: usize) -> Index {
    let vocab = [
        "api", "crud", "rest", "controller", "service", "repository", "jwt", "security",
        "pagination", "validation", "logging", "config",
    ];
    let documents = (0..docs)
        .map(|i| {
            let text = (0..40)
                .map(|j| vocab[(i + j) % vocab.len()])
                .collect::<Vec<_>>()
                .join(" ");
            let tokens = tokenize(&text);
            let token_count = tokens.len();
            Document {
                id: format!("doc-{i}"),
                name: format!("Doc {i}"),
                description: text,
                keywords: vec!["api".to_string()],
                complexity: "medium".to_string(),
                category: Category::Pattern,
                source_path: PathBuf::from(format!("patterns/doc-{i}.json")),
                tokens,
                token_count,
                payload: serde_json::Value::Null,
            }
        })
        .collect();
    Index::from_documents(documents)
}

fn bench_tokenize(c: &mut Criterion) {
    let text =
        "Create CRUD REST API endpoints with pagination, validation and JWT security. ".repeat(64);
    c.bench_function("tokenize_text", |b| b.iter(|| tokenize(&text)));
}

fn bench_search(c: &mut Criterion) {
    let index = synthetic_index(200);
    c.bench_function("search_200_docs", |b| {
        b.iter(|| search(&index, "create rest api with jwt security", 5, &Bm25Params::default()))
    });
}

criterion_group!(benches, bench_tokenize, bench_search);
criterion_main!(benches);
