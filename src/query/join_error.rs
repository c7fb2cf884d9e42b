use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Invalid key combination passed to `Query::join`. Raised at the call,
/// never during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    #[error("join #{position}: a `key`, or both `left` and `right`, must be given")]
    MissingKey { position: usize },
    #[error("join #{position}: `key` cannot be combined with `left` or `right`")]
    KeyWithLeftRight { position: usize },
    #[error("join #{position}: `{given}` was given without `{}`", .given.other())]
    OneSided { position: usize, given: Side },
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl JoinError {
    /// Zero-based position of the offending join in the chain.
    pub fn position(&self) -> usize {
        match self {
            JoinError::MissingKey { position }
            | JoinError::KeyWithLeftRight { position }
            | JoinError::OneSided { position, .. } => *position,
        }
    }
}

pub type Result<T> = std::result::Result<T, JoinError>;
