use crate::{
    accessor::AccessorMode,
    config::{Config, ProbeStrategy},
    diagnostics::DiagnosticSink,
    element::{Collection, Element},
    executor::HashIndex,
    planner::Predicate,
    query::Join,
};

/// A join ready to be probed: its collection, its compiled predicate and,
/// when the strategy allows it, a first-match index.
pub struct JoinPlan<'a> {
    collection: &'a dyn Collection,
    predicate: Predicate,
    index: Option<HashIndex<'a>>,
}

impl<'a> JoinPlan<'a> {
    pub fn build(
        position: usize,
        join: &Join<'a>,
        base_mode: AccessorMode,
        config: &Config,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let collection = join.collection;
        let joined_mode = AccessorMode::resolve(collection);
        let predicate = Predicate::compile(&join.spec, base_mode, joined_mode);

        let index = match (&config.strategy, predicate.right()) {
            (ProbeStrategy::HashIndex, Some(right))
                if right.mode == AccessorMode::Subscriptable && !right.key.is_func() =>
            {
                Some(HashIndex::build(collection, right))
            }
            _ => None,
        };

        let how = match (&predicate, &index) {
            (Predicate::Never, _) => "never matches".to_string(),
            (_, Some(index)) => format!("hash index over {} keys", index.len()),
            (_, None) => "linear scan".to_string(),
        };
        sink.debug(&format!(
            "join #{position}: joined collection is {joined_mode}, left {} = right {}, {how}",
            join.spec.left(),
            join.spec.right(),
        ));

        Self { collection, predicate, index }
    }

    /// First joined element matching `base`, or `None` for the null slot.
    pub fn probe(&self, base: &dyn Element) -> Option<&'a dyn Element> {
        let wanted = self.predicate.left_value(base)?;
        if let Some(index) = &self.index {
            return index.get(&wanted);
        }
        let collection: &'a dyn Collection = self.collection;
        collection
            .elements()
            .find(|candidate| self.predicate.matches_value(&wanted, *candidate))
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}
