use decoy_os::apps::AppKind;
use decoy_os::desktop::registry::{WindowId, WindowRegistry};

/// The registry's central invariant: the active pointer is absent or names
/// an existing, non-minimized window.
fn assert_active_invariant(registry: &WindowRegistry) {
    if let Some(active) = registry.active() {
        let window = registry
            .get(active)
            .expect("active id must reference an existing window");
        assert!(!window.minimized(), "active window must not be minimized");
    }
}

fn assert_unique_ids(registry: &WindowRegistry) {
    let mut ids: Vec<WindowId> = registry.windows().iter().map(|w| w.id()).collect();
    let before = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(before, ids.len(), "window ids must be unique");
}

#[test]
fn scenario_a_first_window_opens_focused() {
    let mut registry = WindowRegistry::new();
    let id = registry.open(AppKind::Terminal);
    assert_eq!(registry.windows().len(), 1);
    let window = registry.get(id).unwrap();
    assert!(!window.minimized());
    assert!(!window.maximized());
    assert_eq!(registry.active(), Some(id));
    assert_active_invariant(&registry);
}

#[test]
fn scenario_b_minimizing_inactive_window_keeps_active() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let b = registry.open(AppKind::Browser);
    let c = registry.open(AppKind::Notes);
    registry.minimize(b);
    // b was not active, so no reassignment happens
    assert_eq!(registry.active(), Some(c));
    let visible: Vec<WindowId> = registry.visible().map(|w| w.id()).collect();
    assert_eq!(visible, vec![a, c]);
    assert_active_invariant(&registry);
}

#[test]
fn scenario_c_minimizing_active_window_falls_back() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let b = registry.open(AppKind::Browser);
    assert_eq!(registry.active(), Some(b));
    registry.minimize(b);
    assert_eq!(registry.active(), Some(a));
    assert_active_invariant(&registry);
}

#[test]
fn scenario_d_closing_last_window_clears_everything() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    registry.close(a);
    assert!(registry.is_empty());
    assert_eq!(registry.active(), None);
    assert_active_invariant(&registry);
}

#[test]
fn scenario_e_focusing_minimized_window_restores_it() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let _b = registry.open(AppKind::Browser);
    registry.minimize(a);
    assert!(registry.get(a).unwrap().minimized());
    registry.focus(a);
    assert!(!registry.get(a).unwrap().minimized());
    assert_eq!(registry.active(), Some(a));
    assert_active_invariant(&registry);
}

#[test]
fn scenario_f_same_kind_windows_cascade_apart() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let b = registry.open(AppKind::Terminal);
    let c = registry.open(AppKind::Terminal);
    let pa = registry.get(a).unwrap().position();
    let pb = registry.get(b).unwrap().position();
    let pc = registry.get(c).unwrap().position();
    assert_ne!(pa, pb);
    assert_ne!(pb, pc);
    assert_ne!(pa, pc);
    // diagonal stagger: each successive window is further down-right
    assert!(pb.x > pa.x && pb.y > pa.y);
    assert!(pc.x > pb.x && pc.y > pb.y);
}

#[test]
fn minimize_is_idempotent() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let b = registry.open(AppKind::Browser);
    registry.minimize(b);
    let active_after_one = registry.active();
    registry.minimize(b);
    assert_eq!(registry.active(), active_after_one);
    assert_eq!(registry.active(), Some(a));
    let visible: Vec<WindowId> = registry.visible().map(|w| w.id()).collect();
    assert_eq!(visible, vec![a]);
    assert_active_invariant(&registry);
}

#[test]
fn maximize_twice_is_identity() {
    let mut registry = WindowRegistry::new();
    let id = registry.open(AppKind::Browser);
    registry.move_to(id, 12, 7);
    let before = registry.get(id).unwrap();
    let (position, size, maximized) = (before.position(), before.size(), before.maximized());

    registry.toggle_maximize(id);
    assert!(registry.get(id).unwrap().maximized());
    registry.toggle_maximize(id);

    let after = registry.get(id).unwrap();
    assert_eq!(after.maximized(), maximized);
    assert_eq!(after.position(), position);
    assert_eq!(after.size(), size);
}

#[test]
fn maximize_does_not_steal_focus() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let b = registry.open(AppKind::Browser);
    assert_eq!(registry.active(), Some(b));
    registry.toggle_maximize(a);
    assert_eq!(registry.active(), Some(b));
}

#[test]
fn closing_active_window_activates_most_recent_survivor() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let b = registry.open(AppKind::Browser);
    let c = registry.open(AppKind::Notes);
    registry.focus(c);
    registry.close(c);
    assert_eq!(registry.active(), Some(b));
    // closing an inactive window leaves focus alone
    registry.close(a);
    assert_eq!(registry.active(), Some(b));
    assert_active_invariant(&registry);
}

#[test]
fn paint_order_is_insertion_order_and_focus_does_not_raise() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let b = registry.open(AppKind::Browser);
    let c = registry.open(AppKind::Notes);
    registry.focus(a);
    let order: Vec<WindowId> = registry.windows().iter().map(|w| w.id()).collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn ids_stay_unique_through_churn() {
    let mut registry = WindowRegistry::new();
    let mut opened = Vec::new();
    for round in 0..10 {
        opened.push(registry.open(AppKind::Terminal));
        opened.push(registry.open(AppKind::Calculator));
        if round % 2 == 0
            && let Some(id) = opened.first().copied()
        {
            registry.close(id);
            opened.remove(0);
        }
        assert_unique_ids(&registry);
        assert_active_invariant(&registry);
    }
}

#[test]
fn minimizing_every_window_leaves_no_active() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(AppKind::Terminal);
    let b = registry.open(AppKind::Browser);
    registry.minimize(a);
    registry.minimize(b);
    assert_eq!(registry.active(), None);
    assert_eq!(registry.windows().len(), 2);
    assert_active_invariant(&registry);
}
