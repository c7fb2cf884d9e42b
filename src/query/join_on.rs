use crate::{element::Key, query::{JoinError, Side}};

/// Key arguments of a join, as given by the caller.
///
/// Valid combinations are a single `key` used on both sides, or a `left` key
/// for base elements together with a `right` key for joined elements.
/// `Query::join` rejects every other combination.
#[derive(Debug, Clone, Default)]
pub struct JoinOn {
    pub key: Option<Key>,
    pub left: Option<Key>,
    pub right: Option<Key>,
}

impl JoinOn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(key: impl Into<Key>) -> Self {
        Self::new().with_key(key)
    }

    pub fn left_right(left: impl Into<Key>, right: impl Into<Key>) -> Self {
        Self::new().with_left(left).with_right(right)
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_left(mut self, left: impl Into<Key>) -> Self {
        self.left = Some(left.into());
        self
    }

    pub fn with_right(mut self, right: impl Into<Key>) -> Self {
        self.right = Some(right.into());
        self
    }

    /// Validates the combination; `position` is the join's index in the chain.
    pub fn into_spec(self, position: usize) -> Result<JoinSpec, JoinError> {
        match (self.key, self.left, self.right) {
            (Some(key), None, None) => Ok(JoinSpec::Key(key)),
            (None, Some(left), Some(right)) => Ok(JoinSpec::LeftRight { left, right }),
            (Some(_), _, _) => Err(JoinError::KeyWithLeftRight { position }),
            (None, None, None) => Err(JoinError::MissingKey { position }),
            (None, Some(_), None) => Err(JoinError::OneSided { position, given: Side::Left }),
            (None, None, Some(_)) => Err(JoinError::OneSided { position, given: Side::Right }),
        }
    }
}

/// A validated join specification.
#[derive(Debug, Clone)]
pub enum JoinSpec {
    /// Same descriptor applied to base and joined elements.
    Key(Key),
    /// `left` reads base elements, `right` reads joined elements.
    LeftRight { left: Key, right: Key },
}

impl JoinSpec {
    pub fn left(&self) -> &Key {
        match self {
            JoinSpec::Key(key) => key,
            JoinSpec::LeftRight { left, .. } => left,
        }
    }

    pub fn right(&self) -> &Key {
        match self {
            JoinSpec::Key(key) => key,
            JoinSpec::LeftRight { right, .. } => right,
        }
    }
}
