use std::{cell::RefCell, fmt::Display};

use serde::{Deserialize, Serialize};

/// Target used for every event this crate emits through `tracing`.
pub const LOG_TARGET: &str = "qjoin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Debug,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            DiagnosticLevel::Debug => write!(f, "debug: {}", self.message),
            DiagnosticLevel::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

/// The only collaborator evaluation talks to. Non-fatal conditions (unknown
/// aggregate fields) arrive as warnings; plan details as debug messages.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);

    fn debug(&self, _message: &str) {}
}

/// Default sink: forwards to `tracing` under the `qjoin` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: LOG_TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: LOG_TARGET, "{message}");
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(DiagnosticLevel::Warning)
    }

    pub fn debugs(&self) -> Vec<String> {
        self.messages(DiagnosticLevel::Debug)
    }

    pub fn clear(&self) -> usize {
        let mut diagnostics = self.diagnostics.borrow_mut();
        let count = diagnostics.len();
        diagnostics.clear();
        count
    }

    fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .map(|d| d.message.clone())
            .collect()
    }

    fn push(&self, level: DiagnosticLevel, message: &str) {
        self.diagnostics.borrow_mut().push(Diagnostic { level, message: message.to_string() });
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, message: &str) {
        self.push(DiagnosticLevel::Warning, message);
    }

    fn debug(&self, message: &str) {
        self.push(DiagnosticLevel::Debug, message);
    }
}
