use criterion::{criterion_group, criterion_main, Criterion};
use notesearch_core::EngineConfig;
use notesearch_engine::Engine;
use std::hint::black_box;

const PARAGRAPH: &str = "Gradient descent is an optimization algorithm. It minimizes a cost \
                         function by following the negative gradient. Machine learning models \
                         use it to fit parameters to data. ";

fn lecture_text(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

fn bench_search_100_docs(c: &mut Criterion) {
    let mut engine = Engine::new(EngineConfig::default());
    for i in 0..100 {
        engine
            .register_document(&format!("lecture{}.txt", i), &lecture_text(20))
            .unwrap();
    }

    c.bench_function("search_100_docs", |b| {
        b.iter(|| engine.search(black_box("machine learning")));
    });
}

fn bench_register_document(c: &mut Criterion) {
    let text = lecture_text(200);

    c.bench_function("register_document", |b| {
        b.iter(|| {
            let mut engine = Engine::default();
            engine
                .register_document("lecture.txt", black_box(&text))
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_search_100_docs, bench_register_document);
criterion_main!(benches);
