//! Common error infrastructure for escape-core.
//!
//! Domain-specific errors (`PuzzleError`, `DoorError`, `InteractError`,
//! `WorldError`) live next to the operations they guard. This module holds the
//! shared severity classification they all report through [`GameError`].

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the player may retry, usually after changing something in
///   the world (picking up a key, solving a puzzle)
/// - **Validation**: invalid input from the controller, should not be retried as-is
/// - **Internal**: world bookkeeping out of sync, indicates a bug
/// - **Fatal**: a core invariant is broken, the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: door locked, key missing
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: puzzle index out of range, object not interactable
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: player points at a room that is not registered
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    ///
    /// Examples: puzzle grid is no longer a permutation
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all escape-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
    }

    #[test]
    fn severity_display_is_snake_case() {
        assert_eq!(ErrorSeverity::Recoverable.to_string(), "recoverable");
        assert_eq!(ErrorSeverity::Fatal.as_ref(), "fatal");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn severity_is_serializable() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<ErrorSeverity>();
        assert_serde::<crate::GameConfig>();
    }
}
