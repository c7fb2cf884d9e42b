use std::collections::VecDeque;

use crate::element::Element;

/// Boxed pass over a collection's elements.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Element> + 'a>;

/// A repeatable source of elements.
///
/// Every call to `elements` starts a fresh pass from the first element. An
/// evaluation iterates each collection several times (probing, then scanning
/// once per base element), so single-pass sources must be collected into a
/// `Vec` before being joined.
pub trait Collection {
    fn elements(&self) -> Elements<'_>;

    fn first(&self) -> Option<&dyn Element> {
        self.elements().next()
    }

    fn is_empty(&self) -> bool {
        self.first().is_none()
    }
}

impl<T: Element> Collection for Vec<T> {
    fn elements(&self) -> Elements<'_> {
        Box::new(self.iter().map(|e| e as &dyn Element))
    }
}

impl<T: Element> Collection for VecDeque<T> {
    fn elements(&self) -> Elements<'_> {
        Box::new(self.iter().map(|e| e as &dyn Element))
    }
}

impl<T: Element, const N: usize> Collection for [T; N] {
    fn elements(&self) -> Elements<'_> {
        Box::new(self.iter().map(|e| e as &dyn Element))
    }
}

impl<T: Element> Collection for &[T] {
    fn elements(&self) -> Elements<'_> {
        Box::new(self.iter().map(|e| e as &dyn Element))
    }
}
