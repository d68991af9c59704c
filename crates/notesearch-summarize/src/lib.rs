//! Extractive summaries, keyword statistics and study notes

mod keywords;
mod markers;
mod notes;
mod stopwords;
mod summarizer;

pub use keywords::extract_keywords;
pub use markers::strip_page_markers;
pub use notes::{extract_definitions, extract_formulas, extract_key_points, StudyNotes};
pub use stopwords::{is_meaningful, is_stop_word};
pub use summarizer::{score_sentence, summarize};
