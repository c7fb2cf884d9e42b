use std::borrow::Cow;

use serde_json::Value;

use crate::{accessor::AccessorMode, element::{Element, Key}, query::JoinSpec};

/// One side of a join predicate: a key descriptor bound to the accessor mode
/// of the collection it reads from.
#[derive(Debug, Clone)]
pub struct Probe {
    pub mode: AccessorMode,
    pub key: Key,
}

impl Probe {
    pub fn new(mode: AccessorMode, key: Key) -> Self {
        Self { mode, key }
    }

    pub fn read<'e>(&self, element: &'e dyn Element) -> Option<Cow<'e, Value>> {
        self.mode.read(element, &self.key)
    }

    pub fn can_read(&self) -> bool {
        self.mode.can_read(&self.key)
    }
}

/// Equality predicate between a base element and a joined candidate,
/// compiled once per join and evaluation. Each predicate owns clones of its
/// own descriptors only.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// A side can never produce a value; nothing matches.
    Never,
    Equals { left: Probe, right: Probe },
}

impl Predicate {
    pub fn compile(spec: &JoinSpec, base_mode: AccessorMode, joined_mode: AccessorMode) -> Predicate {
        let left = Probe::new(base_mode, spec.left().clone());
        let right = Probe::new(joined_mode, spec.right().clone());
        if left.can_read() && right.can_read() {
            Predicate::Equals { left, right }
        } else {
            Predicate::Never
        }
    }

    /// The base element's join value; `None` means nothing can match it.
    pub fn left_value<'e>(&self, base: &'e dyn Element) -> Option<Cow<'e, Value>> {
        match self {
            Predicate::Never => None,
            Predicate::Equals { left, .. } => left.read(base),
        }
    }

    /// Compares an already-read left value against a candidate. Plain
    /// `Value` equality: no coercion between types.
    pub fn matches_value(&self, left_value: &Value, candidate: &dyn Element) -> bool {
        match self {
            Predicate::Never => false,
            Predicate::Equals { right, .. } => {
                right.read(candidate).is_some_and(|value| &*value == left_value)
            }
        }
    }

    pub fn matches(&self, base: &dyn Element, candidate: &dyn Element) -> bool {
        self.left_value(base)
            .is_some_and(|value| self.matches_value(&value, candidate))
    }

    pub fn right(&self) -> Option<&Probe> {
        match self {
            Predicate::Never => None,
            Predicate::Equals { right, .. } => Some(right),
        }
    }
}
