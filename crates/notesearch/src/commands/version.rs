use notesearch_core::{DuplicatePolicy, EngineConfig};

/// Version line followed by the settings the engine would run with
pub fn format_version(config: &EngineConfig) -> String {
    let duplicates = match config.duplicate_policy {
        DuplicatePolicy::Reject => "reject",
        DuplicatePolicy::Replace => "replace",
    };

    format!(
        "notesearch {}\n\
         snippets: {} per document, {} chars of context\n\
         summary: {} sentences, keywords: top {} (min length {})\n\
         history: {} queries, duplicates: {}, max document: {} bytes\n",
        env!("CARGO_PKG_VERSION"),
        config.max_snippets,
        config.context_chars,
        config.summary_sentences,
        config.keyword_top_n,
        config.min_word_len,
        config.history_capacity,
        duplicates,
        config.max_document_bytes,
    )
}

pub fn run(config: &EngineConfig) -> anyhow::Result<()> {
    print!("{}", format_version(config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_reports_defaults() {
        let out = format_version(&EngineConfig::default());
        assert!(out.starts_with(&format!("notesearch {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(out.contains("snippets: 5 per document, 150 chars of context"));
        assert!(out.contains("history: 10 queries, duplicates: reject"));
    }

    #[test]
    fn test_version_reports_overrides() {
        let config = EngineConfig {
            keyword_top_n: 7,
            duplicate_policy: DuplicatePolicy::Replace,
            ..EngineConfig::default()
        };
        let out = format_version(&config);
        assert!(out.contains("keywords: top 7 (min length 3)"));
        assert!(out.contains("duplicates: replace"));
    }
}
