//! Study-notes extraction: definitions, formulas and bullet points

use notesearch_core::Document;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

const MAX_DEFINITIONS: usize = 10;
const MAX_FORMULAS: usize = 15;
const MAX_KEY_POINTS: usize = 20;
const MAX_NOTE_KEYWORDS: usize = 20;
const RULE_WIDTH: usize = 50;

static DEFINITION_RES: OnceLock<Vec<Regex>> = OnceLock::new();
static FORMULA_RES: OnceLock<[Regex; 2]> = OnceLock::new();
static KEY_POINT_RE: OnceLock<Regex> = OnceLock::new();

fn definition_patterns() -> &'static [Regex] {
    DEFINITION_RES.get_or_init(|| {
        [
            r"(?im)^\s*(.+?)\s+is\s+defined\s+as\s+(.+?)(?:\.|$)",
            r"(?im)^\s*(.+?)\s+means\s+(.+?)(?:\.|$)",
            r"(?im)^\s*Definition:\s+(.+?)(?:\.|$)",
            r"(?im)^\s*([^:\n]+?):\s+(.+?)(?:\.|$)",
        ]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
    })
}

/// Sentences shaped like definitions, as `term: definition` strings
pub fn extract_definitions(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for re in definition_patterns() {
        for caps in re.captures_iter(text) {
            let entry = match (caps.get(1), caps.get(2)) {
                (Some(term), Some(definition)) => {
                    let term = term.as_str().trim();
                    let definition = definition.as_str().trim();
                    if term.len() < 50 && definition.len() < 200 {
                        Some(format!("{}: {}", term, definition))
                    } else {
                        None
                    }
                }
                (Some(only), None) => Some(only.as_str().trim().to_string()),
                _ => None,
            };

            if let Some(entry) = entry {
                if !found.contains(&entry) {
                    found.push(entry);
                }
            }
            if found.len() == MAX_DEFINITIONS {
                return found;
            }
        }
    }

    found
}

/// Short lines that look like equations or arithmetic
pub fn extract_formulas(text: &str) -> Vec<String> {
    let [symbolic, numeric] = FORMULA_RES.get_or_init(|| {
        [
            Regex::new(r"[a-zA-Z]\s*[=+\-*/]").unwrap(),
            Regex::new(r"\d+\s*[=+\-*/]").unwrap(),
        ]
    });

    text.lines()
        .map(str::trim)
        .filter(|line| line.len() < 100 && line.contains(['=', '+', '*', '/']))
        .filter(|line| symbolic.is_match(line) || numeric.is_match(line))
        .take(MAX_FORMULAS)
        .map(str::to_string)
        .collect()
}

/// Bulleted or numbered lines
pub fn extract_key_points(text: &str) -> Vec<String> {
    let re = KEY_POINT_RE.get_or_init(|| Regex::new(r"^(?:[•\-*+]|\d+[.)])\s+").unwrap());

    text.lines()
        .map(str::trim)
        .filter(|line| re.is_match(line))
        .take(MAX_KEY_POINTS)
        .map(str::to_string)
        .collect()
}

/// Downloadable study notes for one document
#[derive(Debug, Clone, Serialize)]
pub struct StudyNotes {
    pub name: String,
    pub keywords: Vec<String>,
    pub summary: Vec<String>,
    pub definitions: Vec<String>,
    pub formulas: Vec<String>,
    pub key_points: Vec<String>,
}

impl StudyNotes {
    /// Assemble notes from a document's cached summary and keywords plus
    /// the extractors above
    pub fn from_document(doc: &Document) -> Self {
        let text = doc.text();
        Self {
            name: doc.name().to_string(),
            keywords: doc
                .keywords()
                .iter()
                .take(MAX_NOTE_KEYWORDS)
                .map(|k| k.word.clone())
                .collect(),
            summary: doc.summary().to_vec(),
            definitions: extract_definitions(text),
            formulas: extract_formulas(text),
            key_points: extract_key_points(text),
        }
    }

    /// Plain-text rendering; empty optional sections are left out
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str("STUDY NOTES SUMMARY\n");
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Original File: {}\n\n", self.name));

        out.push_str("KEYWORDS:\n");
        out.push_str(&self.keywords.join(", "));
        out.push_str("\n\n");

        out.push_str(&rule);
        out.push_str("\nSUMMARY:\n\n");
        for (i, sentence) in self.summary.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, sentence));
        }

        for (title, lines) in [
            ("DEFINITIONS", &self.definitions),
            ("FORMULAS", &self.formulas),
            ("KEY POINTS", &self.key_points),
        ] {
            if lines.is_empty() {
                continue;
            }
            out.push('\n');
            out.push_str(title);
            out.push_str(":\n");
            for line in lines {
                out.push_str(&format!("- {}\n", line));
            }
        }

        out.push('\n');
        out.push_str(&rule);
        out.push_str("\nGenerated by notesearch\n");
        out
    }
}
