use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use markdown_wysiwym_engine::parsing::SpanParser;
mod common;

fn bench_span_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);
    let parser = SpanParser::default();

    for size in [10, 100] {
        let content = common::generate_markdown_content(size);
        group.bench_with_input(BenchmarkId::new("span_parser", size), &content, |b, content| {
            b.iter(|| {
                let spans = parser.parse(std::hint::black_box(content));
                std::hint::black_box(spans);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_span_parser);
criterion_main!(benches);
