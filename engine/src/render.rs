use crate::score::SearchHit;

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Report for a terminal, with quality banding and a recommendation.
    Human,
    /// JSON list of per-result fields, payload omitted.
    Structured,
}

/// Quality band for a score on the practical 0-10 display scale. Scores are
/// unbounded above; anything past 10 still bands as excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Excellent,
    Good,
    Moderate,
    Weak,
    NotRelevant,
}

impl Quality {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Quality::Excellent
        } else if score >= 6.0 {
            Quality::Good
        } else if score >= 4.0 {
            Quality::Moderate
        } else if score >= 2.0 {
            Quality::Weak
        } else {
            Quality::NotRelevant
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quality::Excellent => "excellent",
            Quality::Good => "good",
            Quality::Moderate => "moderate",
            Quality::Weak => "weak",
            Quality::NotRelevant => "not relevant",
        }
    }
}

/// Star rating: floor(score / 2), clamped to the 0-5 display range.
pub fn stars(score: f64) -> String {
    let count = ((score / 2.0).floor() as usize).min(5);
    "*".repeat(count)
}

const RULE: &str = "======================================================================";
const DASH: &str = "----------------------------------------------------------------------";

/// Render ranked results as text.
pub fn render(results: &[SearchHit], query: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::Human => render_human(results, query),
        RenderMode::Structured => {
            serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

fn render_human(results: &[SearchHit], query: &str) -> String {
    if results.is_empty() {
        return render_no_matches(query);
    }

    let top = &results[0];
    let quality = Quality::from_score(top.score);

    let mut out: Vec<String> = Vec::new();
    out.push(RULE.to_string());
    out.push(format!("SEARCH RESULTS FOR: \"{query}\""));
    out.push(RULE.to_string());
    out.push(String::new());
    out.push(format!(
        "Found: {} matches | Top score: {:.2}/10 | Quality: {}",
        results.len(),
        top.score,
        quality.label()
    ));
    out.push(String::new());

    for (idx, hit) in results.iter().enumerate() {
        out.push(render_hit(hit, idx + 1));
    }

    out.push(String::new());
    out.push(RULE.to_string());
    out.push("RECOMMENDATION".to_string());
    out.push(RULE.to_string());
    out.push(recommendation(top, quality));

    out.join("\n")
}

fn render_hit(hit: &SearchHit, rank: usize) -> String {
    let flag = if rank == 1 && hit.score >= 8.0 {
        " [RECOMMENDED]"
    } else {
        ""
    };
    let quality = Quality::from_score(hit.score);
    [
        DASH.to_string(),
        format!("#{rank}{flag} {}", hit.name),
        DASH.to_string(),
        format!("ID:       {}", hit.id),
        format!("Type:     {}", hit.category),
        format!("Score:    {:.2}/10 {}", hit.score, stars(hit.score)),
        format!("File:     {}", hit.source_path.display()),
        format!("Match:    {}", quality.label()),
        String::new(),
        "Description:".to_string(),
        hit.description.clone(),
    ]
    .join("\n")
}

fn recommendation(top: &SearchHit, quality: Quality) -> String {
    match quality {
        Quality::Excellent => format!(
            "Use: {} ({}) - {} match\n\
             Score is {:.2}/10; this {} covers the request end to end.\n\
             Next step: proceed with \"{}\".",
            top.name,
            top.id,
            quality.label(),
            top.score,
            top.category,
            top.name
        ),
        Quality::Good => format!(
            "Consider: {} ({}) - {} match\n\
             Score is {:.2}/10; minor adjustments may be needed.\n\
             Next step: present the top 2-3 options and let the caller choose.",
            top.name,
            top.id,
            quality.label(),
            top.score
        ),
        _ => format!(
            "Low-quality match - top score {:.2}/10.\n\
             Next step: try different search keywords, or proceed with a\n\
             custom implementation instead.",
            top.score
        ),
    }
}

fn render_no_matches(query: &str) -> String {
    format!(
        "{RULE}\n\
         SEARCH RESULTS FOR: \"{query}\"\n\
         {RULE}\n\
         \n\
         No matching patterns or tasks found.\n\
         \n\
         Suggestions:\n\
         1. Try broader terms: \"api\", \"crud\", \"controller\"\n\
         2. Try specific features: \"list\", \"get all\", \"pagination\"\n\
         3. Example queries: \"create rest api\", \"controller service repository\"\n\
         4. Or ask for a custom implementation.\n\
         {RULE}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Category;
    use std::path::PathBuf;

    fn hit(score: f64) -> SearchHit {
        SearchHit {
            id: "p1".into(),
            name: "CRUD endpoints".into(),
            description: "Create CRUD REST API endpoints".into(),
            keywords: vec!["crud".into()],
            complexity: "medium".into(),
            category: Category::Pattern,
            source_path: PathBuf::from("patterns/p1.json"),
            score,
            payload: serde_json::json!({"id": "p1"}),
        }
    }

    #[test]
    fn quality_bands() {
        assert_eq!(Quality::from_score(12.0), Quality::Excellent);
        assert_eq!(Quality::from_score(8.0), Quality::Excellent);
        assert_eq!(Quality::from_score(6.5), Quality::Good);
        assert_eq!(Quality::from_score(4.0), Quality::Moderate);
        assert_eq!(Quality::from_score(2.1), Quality::Weak);
        assert_eq!(Quality::from_score(0.3), Quality::NotRelevant);
    }

    #[test]
    fn star_rating_floors_and_clamps() {
        assert_eq!(stars(9.9), "****");
        assert_eq!(stars(10.0), "*****");
        assert_eq!(stars(23.0), "*****");
        assert_eq!(stars(1.9), "");
    }

    #[test]
    fn human_report_lists_result_fields() {
        let rendered = render(&[hit(8.4)], "create rest api", RenderMode::Human);
        assert!(rendered.contains("CRUD endpoints"));
        assert!(rendered.contains("[RECOMMENDED]"));
        assert!(rendered.contains("patterns/p1.json"));
        assert!(rendered.contains("RECOMMENDATION"));
        assert!(rendered.contains("excellent"));
    }

    #[test]
    fn no_matches_renders_guidance() {
        let rendered = render(&[], "quantum tunneling", RenderMode::Human);
        assert!(rendered.contains("No matching patterns or tasks found"));
        assert!(rendered.contains("Suggestions"));
    }

    #[test]
    fn structured_omits_payload() {
        let rendered = render(&[hit(5.0)], "q", RenderMode::Structured);
        assert!(rendered.contains("\"source_path\""));
        assert!(rendered.contains("\"category\": \"pattern\""));
        assert!(!rendered.contains("payload"));
    }

    #[test]
    fn structured_empty_is_empty_list() {
        assert_eq!(render(&[], "q", RenderMode::Structured), "[]");
    }
}
