use crate::commands::keywords::format_keywords;
use crate::commands::load::{load_engine, register_file};
use crate::commands::search::format_hits;
use crate::commands::summarize::format_summary;
use notesearch_core::{DocumentListing, EngineConfig};
use notesearch_engine::Engine;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const HELP: &str = "\
Commands:
  search <query>     search every loaded document
  list               show loaded documents
  load <path>        load a text file
  delete <name>      remove a document
  summary <name>     show a document's summary and stats
  keywords <name>    show a document's keyword cloud
  notes <name>       show study notes for a document
  history            show recent searches
  clear              remove all documents and history
  quit               leave the shell";

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

fn format_listing(documents: &[DocumentListing]) -> String {
    if documents.is_empty() {
        return "No documents loaded".to_string();
    }
    documents
        .iter()
        .map(|doc| {
            let lead = doc.summary.first().map(String::as_str).unwrap_or("");
            format!(
                "{} | {} | {} words\n  {}",
                doc.uploaded_at.format("%Y-%m-%d %H:%M"),
                doc.name,
                doc.word_count,
                lead
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_history(history: &[String]) -> String {
    if history.is_empty() {
        return "No searches yet".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, query)| format!("{:>2}. {}", i + 1, query))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run one shell line against the engine
pub fn execute(engine: &mut Engine, line: &str) -> Outcome {
    let line = line.trim();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let result: anyhow::Result<String> = match command {
        "" => Ok(String::new()),
        "quit" | "exit" => return Outcome::Quit,
        "help" => Ok(HELP.to_string()),
        "search" if arg.is_empty() => Ok("Please enter a search query".to_string()),
        "search" => Ok(format_hits(arg, &engine.search(arg))),
        "list" => Ok(format_listing(&engine.list_documents())),
        "load" => {
            register_file(engine, Path::new(arg)).map(|name| format!("Loaded {}", name))
        }
        "delete" => engine
            .delete_document(arg)
            .map(|()| format!("Deleted {}", arg))
            .map_err(Into::into),
        "summary" => engine
            .document(arg)
            .map(format_summary)
            .map_err(Into::into),
        "keywords" => engine
            .document(arg)
            .map(|doc| format_keywords(doc.keywords()))
            .map_err(Into::into),
        "notes" => engine
            .study_notes(arg)
            .map(|notes| notes.render())
            .map_err(Into::into),
        "history" => Ok(format_history(engine.history())),
        "clear" => {
            engine.clear();
            Ok("Cleared all documents and history".to_string())
        }
        other => Err(anyhow::anyhow!("unknown command: {} (try `help`)", other)),
    };

    Outcome::Continue(match result {
        Ok(text) => text,
        Err(err) => format!("error: {:#}", err),
    })
}

/// Read commands from `input` until EOF or `quit`
pub fn run_session(
    engine: &mut Engine,
    input: impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        match execute(engine, &line?) {
            Outcome::Quit => break,
            Outcome::Continue(text) => {
                if !text.is_empty() {
                    writeln!(output, "{}", text.trim_end())?;
                }
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

pub fn run(config: EngineConfig, files: &[PathBuf]) -> anyhow::Result<()> {
    let mut engine = load_engine(config, files)?;
    println!(
        "Loaded {} document(s). Type `help` for commands.",
        engine.len()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_session(&mut engine, stdin.lock(), &mut stdout)
}
