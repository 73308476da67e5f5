//! Co-occurrence graph
//!
//! [`builder::CooccurrenceGraph`] accumulates window co-occurrences;
//! [`csr::CsrGraph`] is the read-only, ID-ordered view used by the ranker and
//! the community detector.

pub mod builder;
pub mod csr;
