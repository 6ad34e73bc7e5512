//! New-phrase detector: technical 2- and 3-word phrases the draft introduces.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::text::tokens::words;
use crate::validation::ValidationResult;

/// Curated multi-word technical phrases, in tokenized form (hyphens become spaces).
pub const TECH_PHRASES: &[&str] = &[
    "machine learning", "deep learning", "reinforcement learning", "federated learning",
    "natural language processing", "computer vision", "large language models",
    "large language model", "retrieval augmented generation", "prompt engineering",
    "model fine tuning", "feature store", "vector database", "graph neural networks",
    "distributed systems", "distributed tracing", "event driven architecture", "event sourcing",
    "microservices architecture", "serverless architecture", "service mesh", "api gateway",
    "message queue", "stream processing", "real time analytics", "data pipeline",
    "data pipelines", "etl pipelines", "data lake", "data warehouse", "data governance",
    "data mesh", "predictive analytics", "recommendation engine", "recommendation system",
    "a/b testing", "ci/cd pipeline", "ci/cd pipelines", "infrastructure as code",
    "container orchestration", "kubernetes operators", "blue green deployment",
    "canary deployment", "zero downtime", "high availability", "fault tolerant",
    "fault tolerance", "load balancing", "horizontal scaling", "auto scaling", "chaos engineering",
    "site reliability engineering", "observability stack", "edge computing", "multi cloud",
    "cloud native", "zero trust", "domain driven design", "test driven development",
    "behavior driven development", "threat modeling", "penetration testing",
    "access management", "single sign on", "design system", "design systems",
    "growth hacking", "marketing automation", "revenue operations", "financial modeling",
    "variance analysis", "supply chain optimization", "six sigma", "lean six sigma",
];

static PHRASE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TECH_PHRASES.iter().copied().collect());

/// Lowercased 2- and 3-word sequences, in document order.
pub fn ngrams(text: &str) -> Vec<String> {
    let tokens = words(text);
    let mut grams = Vec::new();
    for n in [2usize, 3] {
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}

pub fn detect_new_phrases(original: &str, draft: &str) -> ValidationResult<String> {
    let known: HashSet<String> = ngrams(original).into_iter().collect();
    let mut seen = HashSet::new();
    let mut result = ValidationResult::default();

    for gram in ngrams(draft) {
        if !PHRASE_SET.contains(gram.as_str()) || known.contains(&gram) || !seen.insert(gram.clone()) {
            continue;
        }
        result
            .warnings
            .push(format!("\"{gram}\" is new technical language not present in the original"));
        result.flagged_items.push(gram);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_new_jargon() {
        let result = detect_new_phrases(
            "Built Python services for the billing team.",
            "Built event-driven architecture and Python services with machine learning for billing.",
        );
        assert_eq!(result.flagged_items, vec!["machine learning", "event driven architecture"]);
    }

    #[test]
    fn test_existing_phrases_are_not_flagged() {
        let original = "Worked on machine-learning pipelines and distributed systems.";
        let draft = "Led Machine Learning work on distributed systems.";
        assert!(detect_new_phrases(original, draft).passed());
    }

    #[test]
    fn test_non_technical_ngrams_ignored() {
        let result = detect_new_phrases("Wrote code.", "Wrote a lot of very good code quickly.");
        assert!(result.passed());
    }

    #[test]
    fn test_each_phrase_reported_once() {
        let result = detect_new_phrases("", "data lake and another data lake");
        assert_eq!(result.flagged_items, vec!["data lake"]);
    }
}
