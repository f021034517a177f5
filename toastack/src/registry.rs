//! The overlay-reference stack.
//!
//! Every mounted toast host pushes one handle; the most recently mounted,
//! still-live handle is the one commands are routed to. Hosts nested inside a
//! dialog therefore take over while the dialog is open, and control reverts
//! to the parent host as soon as the nested one is dropped.
//!
//! The stack is owned by a single [`Registry`] created at application start
//! and cloned into whatever needs it. Clones share the same stack.
//!
//! # Usage
//!
//! ```ignore
//! let registry = Registry::new();
//! let root = ToastHost::mount(&registry, ToastConfig::default());
//! assert_eq!(registry.depth(), 1);
//! drop(root);
//! assert!(registry.is_empty());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::AuditError;
use crate::handle::{HandleId, OverlayHandle};

/// Counters that make stack misuse observable without making it fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub pushes: u64,
    pub pops: u64,
    /// Pops that found nothing to remove.
    pub redundant_pops: u64,
    /// Registrations dropped while not on top of the stack.
    pub out_of_order_pops: u64,
}

/// Diagnostic snapshot of one stack entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefInfo {
    pub id: HandleId,
    pub label: String,
    pub visible: bool,
}

impl fmt::Display for RefInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.visible { "visible" } else { "hidden" };
        write!(f, "{} {} ({})", self.id, self.label, state)
    }
}

struct Entry {
    id: HandleId,
    handle: Rc<dyn OverlayHandle>,
}

#[derive(Default)]
struct Stack {
    entries: Vec<Entry>,
    next_id: u64,
    stats: RegistryStats,
}

/// Process-wide stack of live overlay handles, LIFO by mount order.
///
/// Single-threaded by construction (`!Send`): all mutation happens on the
/// UI thread inside event handling. Handles are always invoked after the
/// internal borrow is released, so a handle may call back into the registry.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Rc<RefCell<Stack>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handle` to the top of the stack.
    pub fn push(&self, handle: Rc<dyn OverlayHandle>) -> HandleId {
        let mut stack = self.inner.borrow_mut();
        stack.next_id += 1;
        let id = HandleId(stack.next_id);
        stack.entries.push(Entry { id, handle });
        stack.stats.pushes += 1;
        log::trace!("registry push {} (depth {})", id, stack.entries.len());
        id
    }

    /// Remove the top handle. Popping an empty stack is a counted no-op.
    pub fn pop(&self) -> Option<Rc<dyn OverlayHandle>> {
        let mut stack = self.inner.borrow_mut();
        match stack.entries.pop() {
            Some(entry) => {
                stack.stats.pops += 1;
                log::trace!("registry pop {} (depth {})", entry.id, stack.entries.len());
                Some(entry.handle)
            }
            None => {
                stack.stats.redundant_pops += 1;
                log::warn!("registry pop on empty stack ignored");
                None
            }
        }
    }

    /// Remove the entry registered as `id`.
    ///
    /// Normally that entry is on top. If it is not, it is still removed (so no
    /// stale handle stays routable) and the anomaly is counted.
    fn release(&self, id: HandleId) -> Option<Rc<dyn OverlayHandle>> {
        let mut stack = self.inner.borrow_mut();
        let Some(pos) = stack.entries.iter().rposition(|e| e.id == id) else {
            stack.stats.redundant_pops += 1;
            log::warn!("registration {} released but no longer on the stack", id);
            return None;
        };

        if pos + 1 != stack.entries.len() {
            stack.stats.out_of_order_pops += 1;
            log::warn!(
                "registration {} released out of mount order ({} above it)",
                id,
                stack.entries.len() - pos - 1
            );
        }

        let entry = stack.entries.remove(pos);
        stack.stats.pops += 1;
        log::trace!("registry release {} (depth {})", id, stack.entries.len());
        Some(entry.handle)
    }

    /// The most recently pushed handle that is still live.
    pub fn peek_last(&self) -> Option<Rc<dyn OverlayHandle>> {
        self.inner
            .borrow()
            .entries
            .last()
            .map(|e| Rc::clone(&e.handle))
    }

    /// Snapshot of the stack, bottom to top. Diagnostics only.
    pub fn all(&self) -> Vec<RefInfo> {
        let entries: Vec<(HandleId, Rc<dyn OverlayHandle>)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|e| (e.id, Rc::clone(&e.handle)))
            .collect();

        entries
            .into_iter()
            .map(|(id, handle)| RefInfo {
                id,
                label: handle.label().to_string(),
                visible: handle.is_visible(),
            })
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth() == 0
    }

    pub fn stats(&self) -> RegistryStats {
        self.inner.borrow().stats
    }

    /// Push `handle` and return a guard that removes it exactly once on drop.
    pub fn register(&self, handle: Rc<dyn OverlayHandle>) -> Registration {
        let id = self.push(handle);
        Registration {
            registry: self.clone(),
            id,
        }
    }

    /// Strict report of anything the non-fatal paths swallowed.
    pub fn audit(&self) -> Result<(), AuditError> {
        let stats = self.stats();
        if stats.redundant_pops > 0 {
            return Err(AuditError::RedundantPops {
                count: stats.redundant_pops,
            });
        }
        if stats.out_of_order_pops > 0 {
            return Err(AuditError::OutOfOrderPops {
                count: stats.out_of_order_pops,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack = self.inner.borrow();
        f.debug_struct("Registry")
            .field(
                "entries",
                &stack.entries.iter().map(|e| e.id).collect::<Vec<_>>(),
            )
            .field("stats", &stack.stats)
            .finish()
    }
}

/// Scoped ownership of one stack slot.
///
/// Created by [`Registry::register`]; dropping it releases the slot.
#[must_use = "dropping a Registration immediately unregisters the handle"]
pub struct Registration {
    registry: Registry,
    id: HandleId,
}

impl Registration {
    pub fn id(&self) -> HandleId {
        self.id
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("id", &self.id).finish()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        // The released handle is dropped here, outside the registry borrow.
        let _released = self.registry.release(self.id);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        visible: Cell<bool>,
        shows: Cell<u32>,
    }

    impl OverlayHandle for Recorder {
        fn show(&self) {
            self.shows.set(self.shows.get() + 1);
            self.visible.set(true);
        }

        fn hide(&self) {
            self.visible.set(false);
        }

        fn is_visible(&self) -> bool {
            self.visible.get()
        }

        fn label(&self) -> &str {
            "recorder"
        }
    }

    fn recorder() -> Rc<Recorder> {
        Rc::new(Recorder::default())
    }

    #[test]
    fn push_pop_is_lifo() {
        let registry = Registry::new();
        let a = recorder();
        let b = recorder();
        registry.push(a.clone());
        registry.push(b.clone());

        let top = registry.peek_last().unwrap();
        top.show();
        assert_eq!(b.shows.get(), 1);
        assert_eq!(a.shows.get(), 0);

        registry.pop();
        registry.peek_last().unwrap().show();
        assert_eq!(a.shows.get(), 1);
    }

    #[test]
    fn pop_on_empty_is_counted() {
        let registry = Registry::new();
        assert!(registry.pop().is_none());
        assert!(registry.pop().is_none());
        assert_eq!(registry.stats().redundant_pops, 2);
        assert_eq!(registry.stats().pops, 0);
        assert_eq!(
            registry.audit(),
            Err(AuditError::RedundantPops { count: 2 })
        );
    }

    #[test]
    fn peek_last_on_empty_is_none() {
        assert!(Registry::new().peek_last().is_none());
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let registry = Registry::new();
        let a = registry.push(recorder());
        registry.pop();
        let b = registry.push(recorder());
        assert!(b > a);
    }

    #[test]
    fn clones_share_the_stack() {
        let registry = Registry::new();
        let other = registry.clone();
        other.push(recorder());
        assert_eq!(registry.depth(), 1);
    }

    #[test]
    fn registration_releases_on_drop() {
        let registry = Registry::new();
        let outer = registry.register(recorder());
        let inner = registry.register(recorder());
        assert_eq!(registry.depth(), 2);

        drop(inner);
        assert_eq!(registry.depth(), 1);
        drop(outer);
        assert!(registry.is_empty());
        assert_eq!(registry.audit(), Ok(()));
    }

    #[test]
    fn out_of_order_release_removes_own_entry() {
        let registry = Registry::new();
        let a = recorder();
        let b = recorder();
        let outer = registry.register(a.clone());
        let _inner = registry.register(b.clone());

        drop(outer);
        assert_eq!(registry.depth(), 1);
        assert_eq!(registry.stats().out_of_order_pops, 1);

        // The surviving entry is the inner one, not a stale outer handle.
        registry.peek_last().unwrap().show();
        assert_eq!(b.shows.get(), 1);
        assert_eq!(a.shows.get(), 0);
        assert_eq!(
            registry.audit(),
            Err(AuditError::OutOfOrderPops { count: 1 })
        );
    }

    #[test]
    fn registration_after_manual_pop_counts_redundant() {
        let registry = Registry::new();
        let reg = registry.register(recorder());
        registry.pop();
        drop(reg);
        assert!(registry.is_empty());
        assert_eq!(registry.stats().redundant_pops, 1);
    }

    #[test]
    fn all_reports_bottom_to_top() {
        let registry = Registry::new();
        let a = recorder();
        registry.push(a.clone());
        registry.push(recorder());
        a.show();

        let refs = registry.all();
        assert_eq!(refs.len(), 2);
        assert!(refs[0].visible);
        assert!(!refs[1].visible);
        assert!(refs[0].id < refs[1].id);
        assert_eq!(refs[0].label, "recorder");
    }
}
