//! Stage observation hooks.
//!
//! The runner notifies a [`PipelineObserver`] around every stage. The default
//! methods do nothing, so [`NoopObserver`] costs nothing; [`StageTimingObserver`]
//! records a [`StageReport`] per stage.

use crate::graph::builder::CooccurrenceGraph;
use crate::nlp::tokenizer::TokenizeOutcome;
use crate::pagerank::PageRankResult;
use std::time::{Duration, Instant};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_COMMUNITIES: &str = "communities";
pub const STAGE_VIEW: &str = "view";

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What happened in one stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    tokens: Option<usize>,
    nodes: Option<usize>,
    edges: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    residual: Option<f64>,
    communities: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }

    pub fn nodes(&self) -> Option<usize> {
        self.nodes
    }

    pub fn edges(&self) -> Option<usize> {
        self.edges
    }

    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    pub fn residual(&self) -> Option<f64> {
        self.residual
    }

    pub fn communities(&self) -> Option<usize> {
        self.communities
    }
}

/// Builder for reports that carry stage-specific counts
#[derive(Debug, Clone)]
pub struct StageReportBuilder(StageReport);

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self(StageReport::new(elapsed))
    }

    pub fn tokens(mut self, tokens: usize) -> Self {
        self.0.tokens = Some(tokens);
        self
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.0.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.0.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.0.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.0.converged = Some(converged);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.0.residual = Some(residual);
        self
    }

    pub fn communities(mut self, communities: usize) -> Self {
        self.0.communities = Some(communities);
        self
    }

    pub fn build(self) -> StageReport {
        self.0
    }
}

/// Hooks invoked by the runner; every method defaults to a no-op.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_tokens(&mut self, _outcome: &TokenizeOutcome) {}

    fn on_graph(&mut self, _graph: &CooccurrenceGraph) {}

    fn on_rank(&mut self, _result: &PageRankResult) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that keeps the report of every finished stage, in order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report of a stage by name
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .nodes(4)
            .edges(5)
            .build();
        assert_eq!(report.elapsed(), Duration::from_millis(3));
        assert_eq!(report.nodes(), Some(4));
        assert_eq!(report.edges(), Some(5));
        assert_eq!(report.iterations(), None);
    }

    #[test]
    fn test_timing_observer_collects_in_order() {
        let mut observer = StageTimingObserver::new();
        observer.on_stage_end(STAGE_NORMALIZE, &StageReport::new(Duration::from_millis(1)));
        observer.on_stage_end(STAGE_TOKENIZE, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<&str> = observer.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_NORMALIZE, STAGE_TOKENIZE]);
        assert_eq!(observer.total(), Duration::from_millis(3));
        assert!(observer.report(STAGE_GRAPH).is_none());
    }
}
