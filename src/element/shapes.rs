use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::element::{Element, Field};

impl Element for Value {
    fn is_subscriptable(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    fn subscript(&self, field: &Field) -> Option<Cow<'_, Value>> {
        match (self, field) {
            (Value::Object(map), Field::Name(name)) => map.get(name).map(Cow::Borrowed),
            (Value::Array(items), Field::Index(index)) => items.get(*index).map(Cow::Borrowed),
            _ => None,
        }
    }
}

impl Element for Map<String, Value> {
    fn is_subscriptable(&self) -> bool {
        true
    }

    fn subscript(&self, field: &Field) -> Option<Cow<'_, Value>> {
        match field {
            Field::Name(name) => self.get(name).map(Cow::Borrowed),
            Field::Index(_) => None,
        }
    }
}

impl Element for IndexMap<String, Value> {
    fn is_subscriptable(&self) -> bool {
        true
    }

    fn subscript(&self, field: &Field) -> Option<Cow<'_, Value>> {
        match field {
            Field::Name(name) => self.get(name).map(Cow::Borrowed),
            Field::Index(_) => None,
        }
    }
}

impl Element for HashMap<String, Value> {
    fn is_subscriptable(&self) -> bool {
        true
    }

    fn subscript(&self, field: &Field) -> Option<Cow<'_, Value>> {
        match field {
            Field::Name(name) => self.get(name).map(Cow::Borrowed),
            Field::Index(_) => None,
        }
    }
}

impl Element for BTreeMap<String, Value> {
    fn is_subscriptable(&self) -> bool {
        true
    }

    fn subscript(&self, field: &Field) -> Option<Cow<'_, Value>> {
        match field {
            Field::Name(name) => self.get(name).map(Cow::Borrowed),
            Field::Index(_) => None,
        }
    }
}

// positional records
impl Element for Vec<Value> {
    fn is_subscriptable(&self) -> bool {
        true
    }

    fn subscript(&self, field: &Field) -> Option<Cow<'_, Value>> {
        match field {
            Field::Index(index) => self.get(*index).map(Cow::Borrowed),
            Field::Name(_) => None,
        }
    }
}
