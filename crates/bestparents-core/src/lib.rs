#![forbid(unsafe_code)]
//! bestparents-core library.
//!
//! Collaborators consumed by the structure search: the categorical
//! [`dataset`], the mutable parent-set [`network`], the contingency
//! [`table`] with its conditional-entropy primitives, plus shared
//! [`error`] and [`config`] types.
//!
//! # Conventions
//!
//! - **Errors**: Domain failures are [`error::LearnError`]; config loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod dataset;
pub mod error;
pub mod network;
pub mod table;

pub use config::{ProjectConfig, SearchConfig, StrategyKind};
pub use dataset::{Attribute, CategoricalDataset, Dataset};
pub use error::{ErrorCode, LearnError};
pub use network::{BayesNet, ParentSetGraph};
pub use table::{ContingencyTable, entropy_conditioned_on_columns, entropy_conditioned_on_rows};
