use std::rc::Rc;

use toastack::{
    AuditError, Buffer, OverlayHandle, Rect, Registry, RegistryStats, ToastConfig, ToastHost,
    Toaster,
};

fn setup() -> (Registry, Toaster) {
    let registry = Registry::new();
    let toaster = Toaster::new(registry.clone());
    (registry, toaster)
}

// ============================================================================
// Depth
// ============================================================================

#[test]
fn test_depth_tracks_live_hosts() {
    let (registry, _) = setup();

    let mut hosts = Vec::new();
    for i in 0..5 {
        hosts.push(ToastHost::mount(&registry, ToastConfig::new(format!("h{i}"))));
        assert_eq!(registry.depth(), i + 1);
    }

    while let Some(host) = hosts.pop() {
        let before = registry.depth();
        drop(host);
        assert_eq!(registry.depth(), before - 1);
    }

    assert!(registry.is_empty());
    assert_eq!(registry.audit(), Ok(()));
}

#[test]
fn test_stats_count_pushes_and_pops() {
    let (registry, _) = setup();
    {
        let _a = ToastHost::mount(&registry, ToastConfig::default());
        let _b = ToastHost::mount(&registry, ToastConfig::default());
    }
    let stats = registry.stats();
    assert_eq!(stats.pushes, 2);
    assert_eq!(stats.pops, 2);
    assert_eq!(stats.redundant_pops, 0);
    assert_eq!(stats.out_of_order_pops, 0);
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_show_routes_to_most_recent_host() {
    let (registry, toaster) = setup();
    let h1 = ToastHost::mount(&registry, ToastConfig::new("h1"));
    let h2 = ToastHost::mount(&registry, ToastConfig::new("h2"));

    toaster.show();

    assert!(h2.is_visible());
    assert!(!h1.is_visible());
}

#[test]
fn test_routing_reverts_after_unmount() {
    let (registry, toaster) = setup();
    let h1 = ToastHost::mount(&registry, ToastConfig::new("h1"));
    let h2 = ToastHost::mount(&registry, ToastConfig::new("h2"));
    drop(h2);

    toaster.show();

    assert!(h1.is_visible());
}

#[test]
fn test_hide_is_idempotent() {
    let (registry, toaster) = setup();
    let host = ToastHost::mount(&registry, ToastConfig::default());

    toaster.hide();
    toaster.hide();
    assert!(!host.is_visible());

    toaster.show();
    toaster.hide();
    toaster.hide();
    assert!(!host.is_visible());
}

#[test]
fn test_commands_on_empty_registry_do_nothing() {
    let (registry, toaster) = setup();
    toaster.show();
    toaster.hide();
    assert!(registry.is_empty());
    assert_eq!(registry.stats(), RegistryStats::default());
}

#[test]
fn test_commands_after_last_unmount_do_nothing() {
    let (registry, toaster) = setup();
    let host = ToastHost::mount(&registry, ToastConfig::default());
    let surface = Rc::clone(host.surface());
    drop(host);

    toaster.show();
    assert!(!surface.is_visible());
}

// ============================================================================
// Re-render stability
// ============================================================================

#[test]
fn test_rerender_keeps_depth_and_identity() {
    let (registry, toaster) = setup();
    let host = ToastHost::mount(&registry, ToastConfig::default());
    let before = registry.peek_last().unwrap();

    let area = Rect::new(0, 0, 40, 10);
    let mut buf = Buffer::new(40, 10);
    for i in 0..50 {
        if i % 2 == 0 {
            toaster.show();
        } else {
            toaster.hide();
        }
        buf.clear();
        host.render(&mut buf, area);
    }

    let after = registry.peek_last().unwrap();
    assert_eq!(registry.depth(), 1);
    assert!(Rc::ptr_eq(&before, &after));
    assert_eq!(registry.stats().pushes, 1);
    assert_eq!(registry.stats().pops, 0);
}

// ============================================================================
// Misuse is observable
// ============================================================================

#[test]
fn test_redundant_pop_is_counted_not_fatal() {
    let (registry, toaster) = setup();
    assert!(registry.pop().is_none());
    toaster.show();
    assert_eq!(
        registry.audit(),
        Err(AuditError::RedundantPops { count: 1 })
    );
}

#[test]
fn test_out_of_order_unmount_is_counted() {
    let (registry, toaster) = setup();
    let outer = ToastHost::mount(&registry, ToastConfig::new("outer"));
    let inner = ToastHost::mount(&registry, ToastConfig::new("inner"));

    drop(outer);
    assert_eq!(registry.depth(), 1);

    toaster.show();
    assert!(inner.is_visible());

    let err = registry.audit().unwrap_err();
    assert_eq!(err, AuditError::OutOfOrderPops { count: 1 });
    assert_eq!(
        err.to_string(),
        "1 registration(s) torn down out of mount order"
    );
}

#[test]
fn test_show_refs_snapshot() {
    let (registry, toaster) = setup();
    let _root = ToastHost::mount(&registry, ToastConfig::new("root"));
    let _inner = ToastHost::mount(&registry, ToastConfig::new("inner"));
    toaster.show();

    let refs = toaster.show_refs();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].label, "root");
    assert!(!refs[0].visible);
    assert_eq!(refs[1].label, "inner");
    assert!(refs[1].visible);
    assert!(refs[1].to_string().ends_with("inner (visible)"));
}
