use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jobextract::Extractor;

const FENCED: &str = "Here is the analysis:\n```json\n{\"parameters\": {\
\"degree\": [\"BSc Computer Science\"], \
\"experience\": [\"5 years backend\"], \
\"technical_skill\": [\"Rust\", \"PostgreSQL\", \"Kafka\"], \
\"responsibility\": [\"Design services\", \"Review code\"], \
\"certificate\": [], \
\"soft_skill\": [\"Communication\"]}}\n```\nLet me know if you need anything else.";

const PROSE: &str = "I'm sorry, but the document you provided does not appear to be a job description.";

fn bench_extract(c: &mut Criterion) {
    let extractor = Extractor::new();

    c.bench_function("extract_fenced", |b| {
        b.iter(|| extractor.extract(black_box(FENCED)))
    });
    c.bench_function("extract_fallback", |b| {
        b.iter(|| extractor.extract(black_box(PROSE)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
