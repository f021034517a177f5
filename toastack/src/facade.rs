//! Command surface for showing and hiding the active toast.

use crate::registry::{RefInfo, Registry};

/// Routes commands to the most recently mounted toast host.
///
/// Holds no state of its own beyond the shared registry. Commands issued
/// while nothing is mounted are dropped.
#[derive(Debug, Clone)]
pub struct Toaster {
    registry: Registry,
}

impl Toaster {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn show(&self) {
        match self.registry.peek_last() {
            Some(handle) => handle.show(),
            None => log::debug!("toast show dropped: no host mounted"),
        }
    }

    pub fn hide(&self) {
        match self.registry.peek_last() {
            Some(handle) => handle.hide(),
            None => log::debug!("toast hide dropped: no host mounted"),
        }
    }

    /// Log and return the current stack, bottom to top.
    pub fn show_refs(&self) -> Vec<RefInfo> {
        let refs = self.registry.all();
        log::debug!("toast refs (depth {}):", refs.len());
        for info in &refs {
            log::debug!("  {}", info);
        }
        refs
    }

    pub fn depth(&self) -> usize {
        self.registry.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use crate::toast::ToastHost;

    #[test]
    fn empty_registry_commands_are_noops() {
        let toaster = Toaster::new(Registry::new());
        toaster.show();
        toaster.hide();
        assert!(toaster.show_refs().is_empty());
        assert_eq!(toaster.registry().stats().redundant_pops, 0);
    }

    #[test]
    fn show_targets_top_host_only() {
        let registry = Registry::new();
        let toaster = Toaster::new(registry.clone());
        let first = ToastHost::mount(&registry, ToastConfig::new("first"));
        let second = ToastHost::mount(&registry, ToastConfig::new("second"));

        toaster.show();
        assert!(second.is_visible());
        assert!(!first.is_visible());

        toaster.hide();
        assert!(!second.is_visible());
    }

    #[test]
    fn show_refs_reports_labels_in_mount_order() {
        let registry = Registry::new();
        let toaster = Toaster::new(registry.clone());
        let _root = ToastHost::mount(&registry, ToastConfig::new("root"));
        let _nested = ToastHost::mount(&registry, ToastConfig::new("nested"));
        toaster.show();

        let refs = toaster.show_refs();
        let labels: Vec<&str> = refs.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["root", "nested"]);
        assert!(refs[1].visible);
    }
}
