mod common;

use common::{engine_with, lecture_engine, sample_config, DEEP_LEARNING, ML_INTRO};
use notesearch_core::{EngineConfig, EngineError};
use notesearch_engine::Engine;
use notesearch_index::{SubstringScanner, TextMatcher};
use std::ops::Range;

#[test]
fn test_ranking_by_match_count() {
    let mut engine = lecture_engine();
    let hits = engine.search("machine learning");

    let ranked: Vec<(&str, usize)> = hits
        .iter()
        .map(|hit| (hit.name.as_str(), hit.match_count))
        .collect();
    assert_eq!(ranked, vec![("doc1.txt", 2), ("doc2.txt", 1)]);
    assert!(hits[0].snippets[0].text.contains("<mark>Machine learning</mark>"));
}

#[test]
fn test_every_present_substring_is_found() {
    let mut engine = lecture_engine();
    for query in ["subset", "LEARN", "kind of mach", "cost function", "t descen"] {
        let hits = engine.search(query);
        assert!(!hits.is_empty(), "expected a hit for {:?}", query);
        assert!(hits.iter().all(|hit| hit.match_count >= 1));
    }
}

#[test]
fn test_ties_keep_upload_order() {
    let mut engine = engine_with(&[
        ("b.txt", "one rust mention"),
        ("a.txt", "another rust mention"),
    ]);
    let names: Vec<String> = engine
        .search("rust")
        .into_iter()
        .map(|hit| hit.name)
        .collect();
    assert_eq!(names, vec!["b.txt", "a.txt"]);
}

#[test]
fn test_absent_query_leaves_history_unchanged() {
    let mut engine = lecture_engine();
    engine.search("gradient");
    let before = engine.history().to_vec();

    assert!(engine.search("quantum chromodynamics").is_empty());
    assert_eq!(engine.history(), before.as_slice());
}

#[test]
fn test_blank_query_returns_nothing() {
    let mut engine = lecture_engine();
    assert!(engine.search("").is_empty());
    assert!(engine.search("   \t").is_empty());
    assert!(engine.history().is_empty());
}

#[test]
fn test_history_is_bounded_and_most_recent_first() {
    let text: String = (0..12).map(|i| format!("topic{} ", i)).collect();
    let mut engine = engine_with(&[("topics.txt", text.as_str())]);

    for i in 0..12 {
        engine.search(&format!("topic{}", i));
    }
    assert_eq!(engine.history().len(), 10);
    assert_eq!(engine.history()[0], "topic11");
    assert_eq!(engine.history()[9], "topic2");

    engine.search("topic5");
    assert_eq!(engine.history()[0], "topic5");
    assert_eq!(engine.history().len(), 10);
    assert_eq!(
        engine.history().iter().filter(|q| *q == "topic5").count(),
        1
    );
}

#[test]
fn test_history_capacity_from_config() {
    let config = EngineConfig::from_json(r#"{"history_capacity": 2}"#).unwrap();
    let mut engine = Engine::new(config);
    engine.register_document("ml.txt", ML_INTRO).unwrap();

    engine.search("machine");
    engine.search("subset");
    engine.search("data");
    assert_eq!(engine.history(), ["data", "subset"]);
}

#[test]
fn test_deleted_document_is_not_searched() {
    let mut engine = lecture_engine();
    engine.delete_document("doc1.txt").unwrap();

    let hits = engine.search("machine learning");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "doc2.txt");
}

#[test]
fn test_search_single_document() {
    let mut engine = lecture_engine();
    let hit = engine
        .search_document("doc2.txt", "learning")
        .unwrap()
        .unwrap();
    assert_eq!(hit.match_count, 2);
    assert_eq!(engine.history(), ["learning"]);

    assert_eq!(
        engine.search_document("ghost.txt", "learning"),
        Err(EngineError::DocumentNotFound("ghost.txt".to_string()))
    );
}

/// Reports only the first occurrence in each document
struct FirstOccurrence;

impl TextMatcher for FirstOccurrence {
    fn locate(&self, text: &str, query: &str) -> Vec<Range<usize>> {
        let mut ranges = SubstringScanner.locate(text, query);
        ranges.truncate(1);
        ranges
    }
}

#[test]
fn test_custom_matcher() {
    let mut engine = Engine::with_matcher(sample_config(), FirstOccurrence);
    engine.register_document("doc1.txt", ML_INTRO).unwrap();
    engine.register_document("doc2.txt", DEEP_LEARNING).unwrap();

    let hits = engine.search("machine learning");
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|hit| hit.match_count == 1));
}
