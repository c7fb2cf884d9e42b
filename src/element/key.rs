use std::{fmt, rc::Rc};

use serde_json::Value;

use crate::element::Element;

/// Unary key function: maps an element to the value it is joined on.
/// Returning `None` means "no value", which never matches.
pub type KeyFn = Rc<dyn Fn(&dyn Element) -> Option<Value>>;

/// A plain field reference: a name for mapping-like or attribute-bearing
/// elements, a position for positionally-indexed ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name(String),
    Index(usize),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name(name) => write!(f, "'{name}'"),
            Field::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Key descriptor of a join: either a field read through the collection's
/// accessor mode, or a function invoked directly on the element.
#[derive(Clone)]
pub enum Key {
    Field(Field),
    Func(KeyFn),
}

impl Key {
    pub fn name(name: &str) -> Self {
        Key::Field(Field::Name(name.to_string()))
    }

    pub fn index(index: usize) -> Self {
        Key::Field(Field::Index(index))
    }

    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&dyn Element) -> Option<Value> + 'static,
    {
        Key::Func(Rc::new(f))
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Key::Func(_))
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Key::Field(field) => Some(field),
            Key::Func(_) => None,
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(field) => f.debug_tuple("Field").field(field).finish(),
            Key::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(field) => field.fmt(f),
            Key::Func(_) => f.write_str("<fn>"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::name(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Field(Field::Name(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::index(value)
    }
}

impl From<Field> for Key {
    fn from(value: Field) -> Self {
        Key::Field(value)
    }
}
