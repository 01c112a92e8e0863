#![forbid(unsafe_code)]
//! bestparents-search library.
//!
//! Learns a sparse parent-set structure over categorical attributes by
//! ranking attribute pairs on conditional entropy and greedily accepting the
//! strongest edges under degree bounds.
//!
//! ## Pipeline
//!
//! ```text
//! Dataset
//!    ↓  contingency::PairTables::build()
//! one joint-count table per attribute pair (i > j)
//!    ↓  scorer::score_pairs()
//! PairScore: H(i|j), H(j|i) and the winning orientation
//!    ↓  candidates::{CandidateIndex, NeighborLists}
//! global and per-attribute rankings (entropy, then enumeration order)
//!    ↓  strategy::SelectionStrategy::run()
//! assembler::GraphAssembler applies accepted edges to the network
//!    ↓
//! search::SearchReport
//! ```
//!
//! # Conventions
//!
//! - **Errors**: [`bestparents_core::LearnError`] for every fallible stage.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod assembler;
pub mod candidates;
pub mod constraints;
pub mod contingency;
pub mod rules;
pub mod scorer;
pub mod search;
pub mod strategy;

pub use assembler::{AcceptedEdge, GraphAssembler};
pub use rules::{Rule, RuleReport, ranked_rules};
pub use search::{SearchReport, StructureSearch};
pub use strategy::SelectionStrategy;
