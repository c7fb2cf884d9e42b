use std::collections::HashMap;

use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::{element::{Collection, Element}, planner::Probe};

/// Hashable mirror of a JSON value.
///
/// Two keys are equal exactly when the `Value`s they came from are equal:
/// integers and floats stay distinct variants, floats compare through
/// `OrderedFloat` (so `0.0` and `-0.0` collide), object keys are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Null,
    Bool(bool),
    PosInt(u64),
    NegInt(i64),
    Float(OrderedFloat<f64>),
    String(String),
    Array(Vec<HashKey>),
    Object(Vec<(String, HashKey)>),
}

impl From<&Value> for HashKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => HashKey::Null,
            Value::Bool(b) => HashKey::Bool(*b),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    HashKey::PosInt(u)
                } else if let Some(i) = n.as_i64() {
                    HashKey::NegInt(i)
                } else {
                    HashKey::Float(OrderedFloat(n.as_f64().unwrap_or_default()))
                }
            }
            Value::String(s) => HashKey::String(s.clone()),
            Value::Array(items) => HashKey::Array(items.iter().map(HashKey::from).collect()),
            Value::Object(map) => {
                let mut entries: Vec<(String, HashKey)> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), HashKey::from(v)))
                    .collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                HashKey::Object(entries)
            }
        }
    }
}

/// First-match index over one joined collection, built once per evaluation.
/// Elements whose key reads as no value are left out.
pub struct HashIndex<'a> {
    by_key: HashMap<HashKey, &'a dyn Element>,
}

impl<'a> HashIndex<'a> {
    pub fn build(collection: &'a dyn Collection, probe: &Probe) -> Self {
        let mut by_key: HashMap<HashKey, &'a dyn Element> = HashMap::new();
        for element in collection.elements() {
            if let Some(value) = probe.read(element) {
                // earliest element wins; later duplicates are never reachable
                by_key.entry(HashKey::from(value.as_ref())).or_insert(element);
            }
        }
        Self { by_key }
    }

    pub fn get(&self, value: &Value) -> Option<&'a dyn Element> {
        self.by_key.get(&HashKey::from(value)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
