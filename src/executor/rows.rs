use std::iter;

use crate::{
    accessor::AccessorMode,
    config::Config,
    diagnostics::DiagnosticSink,
    element::{Collection, Elements},
    executor::{JoinPlan, Row},
    query::Join,
};

/// Lazy result sequence of one evaluation.
///
/// Accessor modes, predicates and indexes are settled when the sequence is
/// created; each `next` then joins exactly one more base element. Nothing is
/// cached: evaluating again re-reads every collection.
pub struct Rows<'a> {
    base: Elements<'a>,
    plans: Vec<JoinPlan<'a>>,
}

impl<'a> Rows<'a> {
    pub fn evaluate(
        base: &'a dyn Collection,
        joins: &[Join<'a>],
        config: &Config,
        sink: &dyn DiagnosticSink,
    ) -> Rows<'a> {
        let mut elements = base.elements();

        // an empty base touches no join at all
        let Some(first) = elements.next() else {
            sink.debug("base collection is empty, no rows");
            return Rows::empty();
        };

        // the probed element is spliced back instead of re-read
        let base_mode = AccessorMode::of_element(first);
        sink.debug(&format!("base collection is {base_mode}, {} join(s)", joins.len()));

        let plans = joins
            .iter()
            .enumerate()
            .map(|(position, join)| JoinPlan::build(position, join, base_mode, config, sink))
            .collect();

        Rows {
            base: Box::new(iter::once(first).chain(elements)),
            plans,
        }
    }

    pub fn empty() -> Rows<'a> {
        Rows { base: Box::new(iter::empty()), plans: Vec::new() }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        let base = self.base.next()?;
        let joined = self.plans.iter().map(|plan| plan.probe(base)).collect();
        Some(Row::new(base, joined))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.base.size_hint()
    }
}
