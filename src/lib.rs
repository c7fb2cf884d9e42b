//! Lazy equi-joins over heterogeneous in-memory collections.
//!
//! A query starts from a base collection with [`on`] and adds joins with
//! [`Query::join`]. Each result row holds the base element followed by the
//! first matching element of every joined collection, or `None` where
//! nothing matched.

pub mod accessor;
pub use accessor::AccessorMode;

pub mod aggregate;
pub use aggregate::{slot_cloned, Aggregate, Aggregates, Materializer};

pub mod config;
pub use config::{Config, ProbeStrategy};

pub mod diagnostics;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticLevel, DiagnosticSink, TracingSink};

pub mod element;
pub use element::{Attributes, Collection, Element, Field, Key, KeyFn};

pub mod executor;
pub use executor::{Row, Rows};

pub mod planner;

pub mod query;
pub use query::{on, JoinError, JoinOn, JoinSpec, Query, Result, Side};
