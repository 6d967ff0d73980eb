//! The window registry: single source of truth for every open window and
//! for which one is active.
//!
//! All mutation goes through the operations here; the chrome and the
//! coordinator never touch a `WindowInstance` directly. That discipline is
//! what keeps the central invariant true: `active` always names an existing,
//! non-minimized window, or nothing.
//!
//! Paint order is insertion order. Focusing a window highlights it but does
//! not raise it; later windows always paint over earlier ones.

use std::fmt;

use crate::apps::AppKind;

use super::placement;

/// Opaque window handle. Ids are handed out monotonically and never reused
/// within a session, even after the window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Signed desktop-cell origin. Drags may push a window partially past the
/// viewport; clamping is the renderer's concern, not the registry's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone)]
pub struct WindowInstance {
    id: WindowId,
    kind: AppKind,
    title: &'static str,
    icon: &'static str,
    position: Point,
    size: Size,
    minimized: bool,
    maximized: bool,
}

impl WindowInstance {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn kind(&self) -> AppKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// Stored windowed origin. Preserved (not overwritten) while maximized
    /// so restore returns the window to where it was.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Fixed windowed size chosen at creation; only maximize changes the
    /// rendered geometry.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn maximized(&self) -> bool {
        self.maximized
    }
}

#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<WindowInstance>,
    active: Option<WindowId>,
    next_id: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new window hosting `kind`. Always succeeds; the new window is
    /// placed by the cascade policy and becomes active.
    pub fn open(&mut self, kind: AppKind) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        let meta = placement::metadata(kind);
        let window = WindowInstance {
            id,
            kind,
            title: meta.title,
            icon: meta.icon,
            position: placement::cascade_origin(self.windows.len()),
            size: meta.size,
            minimized: false,
            maximized: false,
        };
        tracing::debug!(%id, ?kind, "opened window");
        self.windows.push(window);
        self.active = Some(id);
        id
    }

    /// Remove a window. If it was active, activity falls back to the most
    /// recently created survivor. Unknown ids are ignored.
    pub fn close(&mut self, id: WindowId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.windows.remove(index);
        if self.active == Some(id) {
            self.active = self.windows.last().map(WindowInstance::id);
        }
        tracing::debug!(%id, "closed window");
    }

    /// Hide a window from the render stack while keeping it in the registry.
    /// Idempotent; reassigns activity if the minimized window held it.
    pub fn minimize(&mut self, id: WindowId) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.minimized = true;
        if self.active == Some(id) {
            self.active = self
                .windows
                .iter()
                .rev()
                .find(|w| !w.minimized)
                .map(WindowInstance::id);
        }
    }

    /// Toggle between windowed and full-viewport geometry. Focus and the
    /// stored windowed position are untouched, so applying it twice is the
    /// identity.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        if let Some(window) = self.get_mut(id) {
            window.maximized = !window.maximized;
        }
    }

    /// Make `id` the active window, restoring it from minimized state if
    /// needed (a taskbar click on a minimized entry must bring it back).
    pub fn focus(&mut self, id: WindowId) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.minimized = false;
        self.active = Some(id);
    }

    /// Overwrite a window's stored origin. No clamping: the registry records
    /// what the drag produced and leaves presentation to the chrome.
    pub fn move_to(&mut self, id: WindowId, x: i32, y: i32) {
        if let Some(window) = self.get_mut(id) {
            window.position = Point { x, y };
        }
    }

    pub fn windows(&self) -> &[WindowInstance] {
        &self.windows
    }

    /// Non-minimized windows in paint order.
    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &WindowInstance> {
        self.windows.iter().filter(|w| !w.minimized)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowInstance> {
        self.windows.iter_mut().find(|w| w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut registry = WindowRegistry::new();
        let first = registry.open(AppKind::Terminal);
        registry.close(first);
        let second = registry.open(AppKind::Terminal);
        assert_ne!(first, second);
    }

    #[test]
    fn operations_on_unknown_ids_are_noops() {
        let mut registry = WindowRegistry::new();
        let id = registry.open(AppKind::Notes);
        let ghost = WindowId(9000);
        registry.close(ghost);
        registry.minimize(ghost);
        registry.toggle_maximize(ghost);
        registry.focus(ghost);
        registry.move_to(ghost, 1, 1);
        assert_eq!(registry.windows().len(), 1);
        assert_eq!(registry.active(), Some(id));
    }

    #[test]
    fn move_preserves_flags() {
        let mut registry = WindowRegistry::new();
        let id = registry.open(AppKind::Browser);
        registry.toggle_maximize(id);
        registry.move_to(id, -4, 7);
        let window = registry.get(id).unwrap();
        assert_eq!(window.position(), Point { x: -4, y: 7 });
        assert!(window.maximized());
    }

    #[test]
    fn minimize_then_focus_restores() {
        let mut registry = WindowRegistry::new();
        let id = registry.open(AppKind::Vpn);
        registry.minimize(id);
        assert!(registry.get(id).unwrap().minimized());
        assert_eq!(registry.active(), None);
        registry.focus(id);
        assert!(!registry.get(id).unwrap().minimized());
        assert_eq!(registry.active(), Some(id));
    }
}
