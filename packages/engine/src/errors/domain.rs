//! Domain-level error type used across the engine.
//!
//! Invariant violations (a card missing from its claimed container,
//! acting out of turn, mutating an ended round) are reported loudly
//! through this type and never silently corrected. Expected
//! rejections — a table selection matching no candidate move, an
//! accuso that fails its checker — are `Option`/`bool` results on the
//! operations themselves, not errors.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds to distinguish contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidPlayerCount,
    OutOfTurn,
    PhaseMismatch,
    CardNotInHand,
    CardNotOnTable,
    DuplicateCard,
    EmptyDeck,
    ParseCard,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Contract or business rule violation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other("INVARIANT".into()), detail.into())
    }
}
