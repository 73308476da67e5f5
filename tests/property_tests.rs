//! Property-based tests using proptest

use proptest::prelude::*;
use wordgraph::*;

const VOCABULARY: &[&str] = &[
    "graph", "word", "rank", "node", "edge", "window", "score", "text", "page", "link",
];

fn token_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..60)
        .prop_map(|words| words.into_iter().map(String::from).collect())
}

/// Prose fragments with reference-section headings mixed in.
fn document_text() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        4 => "[a-zA-Z \\n\\t.,]{0,30}",
        1 => Just("References".to_string()),
        1 => Just("DAFTAR\nPUSTAKA".to_string()),
        1 => Just("daftar   pustaka".to_string()),
        1 => Just("REFERENSI".to_string()),
        1 => Just("Bibliographie".to_string()),
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|fragments| fragments.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_normalizer_idempotent(text in document_text()) {
        let normalizer = nlp::normalizer::TextNormalizer::new();
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(once.trim(), once.as_str());
        prop_assert!(normalizer.references_offset(&once).is_none());
    }

    #[test]
    fn test_edge_weights_equal_pair_counts(
        tokens in token_sequence(),
        window in 1usize..=5
    ) {
        let graph = CooccurrenceGraph::from_tokens(&tokens, window);

        for edge in graph.edges() {
            let a = graph.get_word(edge.source).unwrap();
            let b = graph.get_word(edge.target).unwrap();
            let mut expected = 0u32;
            for i in 0..tokens.len() {
                for j in (i + 1)..(i + 1 + window).min(tokens.len()) {
                    let pair = (tokens[i].as_str(), tokens[j].as_str());
                    if pair == (a, b) || pair == (b, a) {
                        expected += 1;
                    }
                }
            }
            prop_assert_eq!(edge.weight, expected);
        }
    }

    #[test]
    fn test_pagerank_scores_sum_to_one(
        tokens in token_sequence(),
        window in 1usize..=5
    ) {
        let graph = CooccurrenceGraph::from_tokens(&tokens, window);
        prop_assume!(!graph.is_empty());

        let result = StandardPageRank::new().run(&CsrGraph::from_graph(&graph));
        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6, "Scores sum to {} instead of 1", sum);
        prop_assert!(result.scores.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_top_n_respects_limit(
        tokens in token_sequence(),
        top_n in 1usize..20
    ) {
        let graph = CooccurrenceGraph::from_tokens(&tokens, 2);
        let result = StandardPageRank::new().run(&CsrGraph::from_graph(&graph));
        let ranked = pagerank::top_k(&graph, &result.scores, top_n);

        prop_assert_eq!(ranked.len(), top_n.min(graph.node_count()));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_tokens_are_alphabetic_and_not_stopwords(
        text in "[a-zA-Z0-9 ,.!?'-]{0,200}",
        custom in "[a-z]{2,6}"
    ) {
        let resources = ResourceBundle::load(Language::English);
        let outcome = Tokenizer::new()
            .with_custom_stopwords(&custom)
            .tokenize(&text, &resources);
        let stopwords = resources.stopwords().unwrap();

        for token in &outcome.tokens {
            prop_assert!(token.len() >= 2);
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase()));
            prop_assert!(!stopwords.is_stopword(token));
            prop_assert_ne!(token, &custom);
        }
    }

    #[test]
    fn test_partition_covers_every_node(
        tokens in token_sequence(),
        window in 1usize..=5
    ) {
        let graph = CooccurrenceGraph::from_tokens(&tokens, window);
        let partition = CommunityDetector::new().detect(&CsrGraph::from_graph(&graph));

        prop_assert_eq!(partition.assignments.len(), graph.node_count());
        prop_assert!(partition.assignments.iter().all(|&c| c < partition.community_count));
        prop_assert!(partition.members().iter().all(|m| !m.is_empty()));
    }
}
