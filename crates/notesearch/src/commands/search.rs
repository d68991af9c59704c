use crate::commands::load::load_engine;
use notesearch_core::{EngineConfig, SearchHit};
use std::path::PathBuf;

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Human-readable result listing
pub fn format_hits(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No results for \"{}\"", query);
    }

    let total: usize = hits.iter().map(|h| h.match_count).sum();
    let mut out = format!(
        "{} for \"{}\" in {}\n",
        plural(total, "match", "matches"),
        query,
        plural(hits.len(), "document", "documents")
    );
    for hit in hits {
        out.push_str(&format!(
            "\n{} ({})\n",
            hit.name,
            plural(hit.match_count, "match", "matches")
        ));
        for snippet in &hit.snippets {
            let location = match snippet.page_number {
                Some(page) => format!("page {}, line {}", page, snippet.line_number),
                None => format!("line {}", snippet.line_number),
            };
            out.push_str(&format!("  [{}] {}\n", location, snippet.render()));
        }
    }
    out
}

pub fn run(config: EngineConfig, query: &str, files: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let mut engine = load_engine(config, files)?;
    let hits = engine.search(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        print!("{}", format_hits(query.trim(), &hits));
        if hits.is_empty() {
            println!();
        }
    }
    Ok(())
}
