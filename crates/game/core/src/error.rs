//! Shared error classification.
//!
//! Every rules error maps onto one of a small set of kinds so the service
//! boundary can surface failures distinctly without matching on individual
//! variants. The kinds mirror how the caller is expected to report them:
//! a rejected request, a conflict, a missing entity, a soft refusal, or an
//! internal fault.

/// Broad classification of a rules failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or semantically invalid input; nothing was mutated.
    Validation,
    /// The operation would violate an invariant (second character, second
    /// active dungeon).
    Conflict,
    /// A referenced entity does not exist in the current visible scope.
    NotFound,
    /// A precondition is temporarily unmet (enemies present, exhausted).
    /// A soft refusal, not a hard error.
    Blocked,
    /// Repository or content fault; not attributable to the caller.
    Internal,
}

/// Implemented by every rules error enum so callers can classify failures
/// uniformly and log a stable code.
pub trait RulesError {
    /// Classification used by the caller to pick a response shape.
    fn kind(&self) -> ErrorKind;

    /// Stable machine-readable code for logs and clients.
    fn code(&self) -> &'static str;
}
