//! Registry audit errors.
//!
//! Nothing on the command path fails; these only surface when a caller asks
//! [`Registry::audit`](crate::Registry::audit) for a strict report.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    /// `pop` was called on an empty stack, or a registration found its entry already gone.
    #[error("{count} pop(s) arrived with no matching push")]
    RedundantPops { count: u64 },

    /// A registration was dropped while a later one was still live.
    #[error("{count} registration(s) torn down out of mount order")]
    OutOfOrderPops { count: u64 },
}
