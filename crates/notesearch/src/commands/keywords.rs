use crate::commands::load::{document_name, load_engine};
use notesearch_core::{EngineConfig, Keyword};
use std::path::Path;

const BAR_WIDTH: usize = 30;

/// Keyword cloud as text bars scaled to the most frequent word
pub fn format_keywords(keywords: &[Keyword]) -> String {
    let Some(max) = keywords.first().map(|k| k.frequency) else {
        return "No keywords found\n".to_string();
    };
    let width = keywords.iter().map(|k| k.word.chars().count()).max().unwrap_or(0);

    keywords
        .iter()
        .map(|k| {
            let bar = (k.frequency * BAR_WIDTH).div_ceil(max.max(1));
            format!("{:<width$}  {:>4}  {}\n", k.word, k.frequency, "#".repeat(bar))
        })
        .collect()
}

pub fn run(mut config: EngineConfig, file: &Path, top: Option<usize>) -> anyhow::Result<()> {
    if let Some(top) = top {
        config.keyword_top_n = top;
    }
    let engine = load_engine(config, &[file])?;
    let doc = engine.document(&document_name(file))?;
    print!("{}", format_keywords(doc.keywords()));
    Ok(())
}
