use std::{fmt, rc::Rc};

use crate::{
    aggregate::{Aggregate, Aggregates, Materializer},
    config::Config,
    diagnostics::{DiagnosticSink, TracingSink},
    element::Collection,
    executor::{Row, Rows},
    query::{JoinOn, JoinSpec, Result},
};

/// A declared join: the collection to search and how to match it.
pub struct Join<'a> {
    pub collection: &'a dyn Collection,
    pub spec: JoinSpec,
}

/// Fluent join query over a base collection.
///
/// Building is purely declarative; collections are only read when results
/// are pulled, and every pull re-runs the whole evaluation.
///
/// ```
/// use qjoin::{on, JoinOn};
/// use serde_json::json;
///
/// let spacecrafts = vec![json!({"name": "Kepler"}), json!({"name": "Psyche"})];
/// let properties = vec![json!({"name": "Kepler", "power": 1100})];
///
/// let rows = on(&spacecrafts).join(&properties, JoinOn::key("name"))?.all();
/// assert_eq!(rows.len(), 2);
/// assert!(rows[0].is_matched(0));
/// assert!(rows[1].joined(0).is_none());
/// # Ok::<(), qjoin::JoinError>(())
/// ```
pub struct Query<'a> {
    base: &'a dyn Collection,
    joins: Vec<Join<'a>>,
    config: Config,
    sink: Rc<dyn DiagnosticSink>,
}

/// Starts a query on `collection`. Its shape is not inspected here.
pub fn on<'a, C: Collection + 'a>(collection: &'a C) -> Query<'a> {
    Query::new(collection)
}

impl<'a> Query<'a> {
    pub fn new(collection: &'a dyn Collection) -> Self {
        Self {
            base: collection,
            joins: Vec::new(),
            config: Config::default(),
            sink: Rc::new(TracingSink),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_diagnostics(mut self, sink: Rc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Appends a join. The key combination is validated now; the collection
    /// is not read until evaluation.
    pub fn join<C: Collection + 'a>(mut self, collection: &'a C, on: JoinOn) -> Result<Self> {
        let spec = on.into_spec(self.joins.len())?;
        self.joins.push(Join { collection, spec });
        Ok(self)
    }

    pub fn join_count(&self) -> usize {
        self.joins.len()
    }

    /// Width of every row this query produces.
    pub fn width(&self) -> usize {
        self.joins.len() + 1
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starts a fresh lazy evaluation.
    pub fn iter(&self) -> Rows<'a> {
        Rows::evaluate(self.base, &self.joins, &self.config, self.sink.as_ref())
    }

    pub fn all(&self) -> Vec<Row<'a>> {
        self.iter().collect()
    }

    /// Copies row slots, by position, into the named fields of `T`.
    pub fn as_aggregate<T: Aggregate>(&self, fields: &[&str]) -> Vec<T> {
        self.iter_aggregate(fields).collect()
    }

    pub fn iter_aggregate<T: Aggregate>(&self, fields: &[&str]) -> Aggregates<'a, T> {
        let materializer = Materializer::new(fields, Rc::clone(&self.sink));
        Aggregates::new(self.iter(), materializer)
    }
}

impl<'q, 'a> IntoIterator for &'q Query<'a> {
    type Item = Row<'a>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Rows<'a> {
        self.iter()
    }
}

impl fmt::Debug for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specs: Vec<&JoinSpec> = self.joins.iter().map(|j| &j.spec).collect();
        f.debug_struct("Query")
            .field("joins", &specs)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
