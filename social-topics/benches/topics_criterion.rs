use criterion::{black_box, criterion_group, criterion_main, Criterion};
use social_topics::benchmark_support::{TopicDerivationFixture, TopicMatchingFixture};

const DERIVATION_ROWS: usize = 256;
const MATCHING_ROWS: usize = 128;

fn topics_criterion(c: &mut Criterion) {
    let derivation_fixture = TopicDerivationFixture::new(DERIVATION_ROWS);

    let mut derivation_group = c.benchmark_group("topic_derivation");
    derivation_group.bench_function("builders", |b| {
        b.iter(|| {
            let len = derivation_fixture.derive_topics_len();
            black_box(len);
        });
    });
    derivation_group.bench_function("requests", |b| {
        b.iter(|| {
            let count = derivation_fixture
                .resolve_requests_count()
                .expect("benchmark requests should resolve");
            black_box(count);
        });
    });
    derivation_group.finish();

    let matching_fixture =
        TopicMatchingFixture::new(MATCHING_ROWS).expect("topic-matching fixture should build");

    let mut matching_group = c.benchmark_group("topic_matching");
    matching_group.bench_function("subtree_filters", |b| {
        b.iter(|| {
            let count = matching_fixture.match_count();
            black_box(count);
        });
    });
    matching_group.finish();
}

criterion_group!(benches, topics_criterion);
criterion_main!(benches);
