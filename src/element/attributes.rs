use std::{borrow::Cow, fmt::Debug, ops::Deref};

use serde::Serialize;
use serde_json::Value;

use crate::element::Element;

/// Attribute-bearing view over any serializable record.
///
/// Attributes are the record's serialized field names, so a struct
/// `Spacecraft { name, .. }` answers `attribute("name")`. Each read serializes
/// the record; implement [`Element::attribute`] by hand on hot paths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes<T>(pub T);

impl<T> Attributes<T> {
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// Wraps every record of a collection.
    pub fn wrap_all<I: IntoIterator<Item = T>>(items: I) -> Vec<Self> {
        items.into_iter().map(Self).collect()
    }
}

impl<T> Deref for Attributes<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Attributes<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Element for Attributes<T>
where
    T: Serialize + Debug + 'static,
{
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        match serde_json::to_value(&self.0).ok()? {
            Value::Object(mut map) => map.remove(name).map(Cow::Owned),
            _ => None,
        }
    }
}
