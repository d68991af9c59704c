#![allow(dead_code)]

use notesearch_core::EngineConfig;
use notesearch_engine::Engine;

pub const ML_INTRO: &str =
    "Machine learning is a subset of AI. Machine learning models learn from data.";
pub const DEEP_LEARNING: &str = "Deep learning is a kind of machine learning.";
pub const GRADIENT: &str = "Gradient descent is an optimization algorithm. It minimizes a cost \
                            function. Many algorithms use gradient descent.";

pub fn sample_config() -> EngineConfig {
    EngineConfig {
        max_snippets: 5,
        context_chars: 150,
        summary_sentences: 3,
        keyword_top_n: 15,
        min_word_len: 3,
        history_capacity: 10,
        ..EngineConfig::default()
    }
}

/// Engine preloaded with `documents`, registered in order
pub fn engine_with(documents: &[(&str, &str)]) -> Engine {
    let mut engine = Engine::new(sample_config());
    for (name, text) in documents {
        engine.register_document(name, text).unwrap();
    }
    engine
}

pub fn lecture_engine() -> Engine {
    engine_with(&[
        ("doc1.txt", ML_INTRO),
        ("doc2.txt", DEEP_LEARNING),
        ("optim.txt", GRADIENT),
    ])
}
