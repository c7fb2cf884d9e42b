use crate::element::Element;

/// One result tuple: the base element in slot 0, then one slot per join in
/// declaration order, `None` where the join found no match.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    base: &'a dyn Element,
    joined: Vec<Option<&'a dyn Element>>,
}

impl<'a> Row<'a> {
    pub fn new(base: &'a dyn Element, joined: Vec<Option<&'a dyn Element>>) -> Self {
        Self { base, joined }
    }

    pub fn base(&self) -> &'a dyn Element {
        self.base
    }

    /// Slot by position: 0 is the base element, `j + 1` is join `j`.
    pub fn get(&self, slot: usize) -> Option<&'a dyn Element> {
        match slot {
            0 => Some(self.base),
            _ => self.joined.get(slot - 1).copied().flatten(),
        }
    }

    /// Match of join `j`.
    pub fn joined(&self, j: usize) -> Option<&'a dyn Element> {
        self.get(j + 1)
    }

    pub fn get_as<T: Element>(&self, slot: usize) -> Option<&'a T> {
        self.get(slot).and_then(|e| e.downcast_ref::<T>())
    }

    pub fn is_matched(&self, j: usize) -> bool {
        self.joined(j).is_some()
    }

    pub fn width(&self) -> usize {
        self.joined.len() + 1
    }

    /// Every slot in order, base first.
    pub fn slots(&self) -> impl Iterator<Item = Option<&'a dyn Element>> + '_ {
        std::iter::once(Some(self.base)).chain(self.joined.iter().copied())
    }
}
