use std::{any::Any, borrow::Cow, fmt::Debug};

use serde_json::Value;

use crate::element::Field;

/// Object-safe access to `Any`, so row slots can be turned back into the
/// caller's concrete element type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An opaque member of a joined collection.
///
/// An element exposes its fields in one of two ways:
/// - subscription (`element[key]` / `element[index]`) for mapping-like and
///   positionally-indexed records,
/// - named attributes for struct-like records.
///
/// Which one is used for a whole collection is decided once by probing its
/// first element with `is_subscriptable`. Every method has a default, so an
/// attribute-bearing type only implements `attribute`.
pub trait Element: AsAny + Debug + 'static {
    /// Whether this element supports lookup by key or index.
    fn is_subscriptable(&self) -> bool {
        false
    }

    /// `element[field]`; `None` when absent or not subscriptable.
    fn subscript(&self, _field: &Field) -> Option<Cow<'_, Value>> {
        None
    }

    /// `element.name`; `None` when the attribute does not exist.
    fn attribute(&self, _name: &str) -> Option<Cow<'_, Value>> {
        None
    }
}

impl dyn Element {
    /// Reads `name` using whatever access this element supports. Meant for key
    /// functions, which see one element at a time and have no accessor mode.
    pub fn field(&self, name: &str) -> Option<Value> {
        let value = if self.is_subscriptable() {
            self.subscript(&Field::Name(name.to_string()))
        } else {
            self.attribute(name)
        };
        value.map(Cow::into_owned)
    }

    /// Positional counterpart of [`field`](Self::field).
    pub fn at(&self, index: usize) -> Option<Value> {
        self.subscript(&Field::Index(index)).map(Cow::into_owned)
    }

    pub fn downcast_ref<T: Element>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Element>(&self) -> bool {
        self.as_any().is::<T>()
    }
}
