use crate::commands::load::{document_name, load_engine};
use notesearch_core::{Document, EngineConfig};
use std::path::Path;

pub fn format_summary(doc: &Document) -> String {
    let stats = doc.stats();
    let mut out = format!("Summary of {}\n", doc.name());
    out.push_str(&"=".repeat(11 + doc.name().len()));
    out.push('\n');

    if doc.summary().is_empty() {
        out.push_str("(no sentences found)\n");
    }
    for (i, sentence) in doc.summary().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, sentence));
    }

    out.push_str(&format!(
        "\nWords: {}  Characters: {}  Lines: {}  Sentences: {}\n\
         Compression: {:.1}%\n",
        stats.words,
        stats.chars,
        stats.lines,
        stats.sentences,
        stats.compression_ratio(doc.summary())
    ));
    out
}

pub fn run(config: EngineConfig, file: &Path) -> anyhow::Result<()> {
    let engine = load_engine(config, &[file])?;
    let doc = engine.document(&document_name(file))?;
    print!("{}", format_summary(doc));
    Ok(())
}
