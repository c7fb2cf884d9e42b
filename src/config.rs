use serde::{Deserialize, Serialize};

/// How a join finds its match for each base element.
///
/// - `Scan`: rescan the joined collection from its first element for every
///   base element. Works for every key kind.
/// - `HashIndex`: build a first-match index over the joined collection once
///   per evaluation, when its elements are subscriptable and the right-hand
///   key is a field. Joins that do not qualify fall back to `Scan`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ProbeStrategy {
    #[default]
    Scan,
    HashIndex,
}

/// Evaluation settings carried by a query.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Probe strategy for every join of the query
    pub strategy: ProbeStrategy,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(strategy: ProbeStrategy) -> Self {
        Self { strategy }
    }

    pub fn scan() -> Self {
        Self { strategy: ProbeStrategy::Scan }
    }

    pub fn hash_index() -> Self {
        Self { strategy: ProbeStrategy::HashIndex }
    }
}
