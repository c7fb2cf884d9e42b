use crate::element::Element;

/// A caller-defined record assembled from result rows.
///
/// The materializer starts from `Default`, assigns row slots by position to
/// the requested field names that appear in `FIELDS`, then calls
/// `post_populate` once.
///
/// ```
/// use qjoin::{Aggregate, Element, slot_cloned};
/// use serde_json::Value;
///
/// #[derive(Default)]
/// struct Global {
///     spacecraft: Option<Value>,
///     properties: Option<Value>,
///     complete: bool,
/// }
///
/// impl Aggregate for Global {
///     const FIELDS: &'static [&'static str] = &["spacecraft", "properties"];
///
///     fn set_field(&mut self, name: &str, value: Option<&dyn Element>) {
///         match name {
///             "spacecraft" => self.spacecraft = slot_cloned(value),
///             "properties" => self.properties = slot_cloned(value),
///             _ => {}
///         }
///     }
///
///     fn post_populate(&mut self) {
///         self.complete = self.properties.is_some();
///     }
/// }
/// ```
pub trait Aggregate: Default {
    /// Field names this type accepts.
    const FIELDS: &'static [&'static str];

    /// Assigns one slot. Only called with names listed in `FIELDS`.
    fn set_field(&mut self, name: &str, value: Option<&dyn Element>);

    /// Runs once per instance after every field is set.
    fn post_populate(&mut self) {}

    fn has_field(name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }
}

/// Clones a slot back into its concrete element type; `None` for an empty
/// slot or a different type.
pub fn slot_cloned<T: Element + Clone>(value: Option<&dyn Element>) -> Option<T> {
    value.and_then(|e| e.downcast_ref::<T>()).cloned()
}
