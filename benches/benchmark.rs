//! Benchmarks for wordgraph

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordgraph::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Graph-based ranking measures the importance of a word by the words it appears
next to. A co-occurrence graph links words that appear within a small window,
and the weight of each link counts how often the two words meet.

PageRank walks the co-occurrence graph and rewards words linked to other
important words. Central words of a document collect the most rank, while rare
words at the edge of the graph collect little rank.

Community detection groups words that are linked more densely to each other
than to the rest of the graph. Each group receives its own colour when the
graph is drawn, which makes the topics of a document visible at a glance.
"#;

fn sample_tokens(repeat: usize) -> Vec<String> {
    let resources = ResourceBundle::load(Language::English);
    let text = TextNormalizer::new().normalize(&SAMPLE_TEXT.repeat(repeat));
    Tokenizer::new().tokenize(&text, &resources).tokens
}

fn benchmark_tokenization(c: &mut Criterion) {
    let resources = ResourceBundle::load(Language::English);
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT), &resources))
    });

    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text), &resources))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let tokens = sample_tokens(10);

    let mut group = c.benchmark_group("graph_build_by_window");
    for window in 1..=5 {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &w| {
            b.iter(|| CooccurrenceGraph::from_tokens(black_box(&tokens), w))
        });
    }
    group.finish();
}

fn benchmark_pagerank(c: &mut Criterion) {
    let graph = CooccurrenceGraph::from_tokens(&sample_tokens(10), 2);
    let csr = CsrGraph::from_graph(&graph);

    c.bench_function("pagerank_standard", |b| {
        b.iter(|| StandardPageRank::new().run(black_box(&csr)))
    });

    c.bench_function("pagerank_top_k", |b| {
        let result = StandardPageRank::new().run(&csr);
        b.iter(|| pagerank::top_k(&graph, black_box(&result.scores), 20))
    });
}

/// Deterministic token stream with a log-uniform word distribution
fn skewed_tokens(count: usize, vocabulary: usize) -> Vec<String> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let u = (state >> 11) as f64 / (1u64 << 53) as f64;
            format!("w{}", (u * (vocabulary as f64).ln()).exp() as usize)
        })
        .collect()
}

fn benchmark_communities(c: &mut Criterion) {
    let csr = CsrGraph::from_graph(&CooccurrenceGraph::from_tokens(&sample_tokens(10), 2));

    c.bench_function("community_detection", |b| {
        b.iter(|| CommunityDetector::new().detect(black_box(&csr)))
    });

    let mut group = c.benchmark_group("community_detection_by_tokens");
    group.sample_size(10);
    for tokens in [5_000, 20_000, 40_000].iter() {
        let graph = CooccurrenceGraph::from_tokens(&skewed_tokens(*tokens, *tokens / 7), 5);
        let csr = CsrGraph::from_graph(&graph);
        group.throughput(Throughput::Elements(csr.num_edges() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tokens), &csr, |b, csr| {
            b.iter(|| CommunityDetector::new().detect(black_box(csr)))
        });
    }
    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let options = AnalysisOptions::new().with_language(Language::English);
    let resources = ResourceBundle::load(Language::English);

    let mut group = c.benchmark_group("process_by_size");
    for size in [1, 5, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| process(black_box(text), &options, &resources))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_graph_building,
    benchmark_pagerank,
    benchmark_communities,
    benchmark_full_pipeline,
);

criterion_main!(benches);
