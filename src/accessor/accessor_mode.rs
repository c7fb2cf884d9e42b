use std::{borrow::Cow, fmt::Display};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::element::{Collection, Element, Field, Key};

/// How field descriptors are read from the elements of one collection.
///
/// Resolved once per collection and evaluation by probing the first element,
/// then applied uniformly. A later element of a different shape reads as "no
/// value" instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorMode {
    /// The collection had no first element; every read yields no value.
    Empty,
    /// `element[key]` / `element[index]`
    Subscriptable,
    /// `element.name`
    AttributeBearing,
}

impl AccessorMode {
    pub fn resolve(collection: &dyn Collection) -> AccessorMode {
        match collection.first() {
            Some(first) => Self::of_element(first),
            None => AccessorMode::Empty,
        }
    }

    pub fn of_element(element: &dyn Element) -> AccessorMode {
        if element.is_subscriptable() {
            AccessorMode::Subscriptable
        } else {
            AccessorMode::AttributeBearing
        }
    }

    /// Reads `key` from `element`. Functions are invoked directly; fields go
    /// through this mode. Never fails: anything unreadable is `None`.
    pub fn read<'e>(&self, element: &'e dyn Element, key: &Key) -> Option<Cow<'e, Value>> {
        match (self, key) {
            (AccessorMode::Empty, _) => None,
            (_, Key::Func(f)) => f(element).map(Cow::Owned),
            (AccessorMode::Subscriptable, Key::Field(field)) => element.subscript(field),
            (AccessorMode::AttributeBearing, Key::Field(Field::Name(name))) => element.attribute(name),
            (AccessorMode::AttributeBearing, Key::Field(Field::Index(_))) => None,
        }
    }

    /// Whether `key` can ever produce a value under this mode.
    pub fn can_read(&self, key: &Key) -> bool {
        !matches!(
            (self, key),
            (AccessorMode::Empty, _) | (AccessorMode::AttributeBearing, Key::Field(Field::Index(_)))
        )
    }
}

impl Display for AccessorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            AccessorMode::Empty => "empty",
            AccessorMode::Subscriptable => "subscriptable",
            AccessorMode::AttributeBearing => "attribute-bearing",
        };
        f.write_str(text)
    }
}
