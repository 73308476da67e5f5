//! Pipeline runner: text in, ranked graph out.
//!
//! Stages run strictly forward: normalize, tokenize, build the co-occurrence
//! graph, rank, optionally detect communities, lay out the view. Each stage is
//! wrapped in a `pipeline_stage` tracing span and reported to the observer.
//! Input that yields fewer than `min_tokens` tokens stops after tokenization
//! with [`Analysis::Insufficient`].

use crate::clustering::CommunityDetector;
use crate::errors::Result;
use crate::extract::{DocumentInput, TextExtractor};
use crate::graph::builder::CooccurrenceGraph;
use crate::graph::csr::CsrGraph;
use crate::nlp::normalizer::{preview, TextNormalizer};
use crate::nlp::resources::ResourceBundle;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::{standard::StandardPageRank, top_k};
use crate::pipeline::artifacts::{Analysis, AnalysisReport, InsufficientInput};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    STAGE_COMMUNITIES, STAGE_GRAPH, STAGE_NORMALIZE, STAGE_RANK, STAGE_TOKENIZE, STAGE_VIEW,
};
use crate::types::AnalysisOptions;
use crate::visualization::{ViewBuilder, VisualOptions};

/// Enter a tracing span for a pipeline stage
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Run the whole pipeline on raw text.
///
/// Options are validated first; invalid options are the only error this can
/// return.
pub fn process(
    raw_text: &str,
    options: &AnalysisOptions,
    resources: &ResourceBundle,
) -> Result<Analysis> {
    process_with_observer(raw_text, options, resources, &mut NoopObserver)
}

/// Assemble the submitted document and text, then run [`process`].
///
/// An unreadable document halts the run with `ExtractionFailure`.
pub fn process_document(
    input: &DocumentInput,
    extractor: &dyn TextExtractor,
    options: &AnalysisOptions,
    resources: &ResourceBundle,
) -> Result<Analysis> {
    let raw_text = input.assemble_text(extractor)?;
    process(&raw_text, options, resources)
}

/// [`process`] with stage notifications
pub fn process_with_observer(
    raw_text: &str,
    options: &AnalysisOptions,
    resources: &ResourceBundle,
    observer: &mut impl PipelineObserver,
) -> Result<Analysis> {
    options.validate()?;

    // Stage 1: Normalize
    let cleaned_text = {
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let cleaned = TextNormalizer::new().normalize(raw_text);
        observer.on_stage_end(STAGE_NORMALIZE, &StageReport::new(clock.elapsed()));
        cleaned
    };

    // Stage 2: Tokenize
    let outcome = {
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let outcome = Tokenizer::new()
            .with_min_length(options.min_token_length)
            .with_custom_stopwords(&options.custom_stopwords)
            .with_stemming(options.do_stem)
            .tokenize(&cleaned_text, resources);
        let report = StageReportBuilder::new(clock.elapsed())
            .tokens(outcome.tokens.len())
            .build();
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_tokens(&outcome);
        outcome
    };

    let token_count = outcome.tokens.len();
    if token_count < options.min_tokens {
        tracing::debug!(
            token_count,
            minimum = options.min_tokens,
            "not enough tokens to build a graph"
        );
        return Ok(Analysis::Insufficient(InsufficientInput {
            token_count,
            minimum: options.min_tokens,
            cleaned_text,
            advisories: outcome.advisories,
        }));
    }

    // Stage 3: Build graph
    let (graph, csr) = {
        trace_stage!(STAGE_GRAPH);
        observer.on_stage_start(STAGE_GRAPH);
        let clock = StageClock::start();
        let graph = CooccurrenceGraph::from_tokens(&outcome.tokens, options.window_size);
        let csr = CsrGraph::from_graph(&graph);
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(graph.node_count())
            .edges(graph.edge_count())
            .build();
        observer.on_stage_end(STAGE_GRAPH, &report);
        observer.on_graph(&graph);
        (graph, csr)
    };

    // Stage 4: Rank
    let (ranked, ranking) = {
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let result = StandardPageRank::new()
            .with_damping(options.damping)
            .with_max_iterations(options.max_iterations)
            .with_tolerance(options.tolerance)
            .run(&csr);
        let ranked = top_k(&graph, &result.scores, options.top_n);
        let report = StageReportBuilder::new(clock.elapsed())
            .iterations(result.iterations)
            .converged(result.converged)
            .residual(result.delta)
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_rank(&result);
        (ranked, result.diagnostics())
    };

    // Stage 5: Communities
    let partition = if options.detect_communities {
        trace_stage!(STAGE_COMMUNITIES);
        observer.on_stage_start(STAGE_COMMUNITIES);
        let clock = StageClock::start();
        let partition = CommunityDetector::new().detect(&csr);
        let report = StageReportBuilder::new(clock.elapsed())
            .communities(partition.community_count)
            .build();
        observer.on_stage_end(STAGE_COMMUNITIES, &report);
        Some(partition)
    } else {
        None
    };

    // Stage 6: View
    let view = {
        trace_stage!(STAGE_VIEW);
        observer.on_stage_start(STAGE_VIEW);
        let clock = StageClock::start();
        let view = ViewBuilder::new(VisualOptions {
            scale: options.scale,
            base_font_size: options.base_font_size,
        })
        .build(&graph, &ranked, partition.as_ref());
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(view.nodes.len())
            .edges(view.edges.len())
            .build();
        observer.on_stage_end(STAGE_VIEW, &report);
        view
    };

    Ok(Analysis::Complete(AnalysisReport {
        preview: preview(&cleaned_text, options.preview_chars),
        cleaned_text,
        token_count,
        tokenizer_path: outcome.path,
        stemmed: outcome.stemmed,
        graph_summary: graph.summary(),
        ranked,
        communities: partition
            .as_ref()
            .map(|p| p.by_label(|node| graph.get_word(node as u32))),
        community_count: partition.as_ref().map(|p| p.community_count),
        ranking,
        advisories: outcome.advisories,
        view,
    }))
}

/// Options plus the resources loaded for their language
#[derive(Debug)]
pub struct Analyzer {
    options: AnalysisOptions,
    resources: ResourceBundle,
}

impl Analyzer {
    /// Validate the options and load resources for their language
    pub fn new(options: AnalysisOptions) -> Result<Self> {
        options.validate()?;
        let resources = ResourceBundle::load(options.language);
        Ok(Self { options, resources })
    }

    /// Use an already loaded bundle
    pub fn with_resources(options: AnalysisOptions, resources: ResourceBundle) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, resources })
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn resources(&self) -> &ResourceBundle {
        &self.resources
    }

    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        process(text, &self.options, &self.resources)
    }

    pub fn analyze_document(
        &self,
        input: &DocumentInput,
        extractor: &dyn TextExtractor,
    ) -> Result<Analysis> {
        process_document(input, extractor, &self.options, &self.resources)
    }
}
