//! Capability handles exposed by overlay surfaces.

use std::fmt;

/// Identifier assigned by the [`Registry`](crate::Registry) when a handle is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub(crate) u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A mounted surface that can be shown or hidden imperatively.
///
/// Implementors own their visibility; nothing outside the surface reads or
/// writes it except through these methods. Both commands are idempotent.
pub trait OverlayHandle {
    fn show(&self);

    fn hide(&self);

    fn is_visible(&self) -> bool;

    /// Short name used in diagnostics.
    fn label(&self) -> &str {
        "overlay"
    }
}

/// Open/close contract of a dialog, held by whoever owns the dialog.
///
/// Separate from [`OverlayHandle`]: dialogs are never pushed onto the registry.
pub trait DialogHandle {
    fn open(&self);

    fn close(&self);

    fn is_open(&self) -> bool;
}
