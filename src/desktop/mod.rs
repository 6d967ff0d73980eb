//! Desktop coordinator: glue between the launch surfaces (icons, start menu,
//! context menu, taskbar), the window registry, and the hosted apps.
//!
//! The coordinator owns the registry for exactly as long as the desktop is
//! mounted; there is no global window state anywhere. All window mutation is
//! expressed as registry operations, so the registry's invariants hold no
//! matter how events interleave.

pub mod chrome;
pub mod context_menu;
pub mod icons;
pub mod placement;
pub mod registry;
pub mod start_menu;
pub mod taskbar;

use std::collections::BTreeMap;

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::apps::{AppContent, AppKind, AppRequest, ContentContext};
use crate::theme;
use crate::ui::UiFrame;

use chrome::{COMPACT_WIDTH, DefaultChrome, DragState, HeaderAction, WindowChrome, frame_rect};
use context_menu::{ContextMenu, ContextMenuHit};
use icons::IconGrid;
use registry::{WindowId, WindowRegistry};
use start_menu::{StartMenu, StartMenuHit};
use taskbar::{Taskbar, TaskbarHit, rect_contains};

/// At most one transient menu is open at a time; opening one closes the
/// other by construction.
#[derive(Debug, Default)]
enum TransientMenu {
    #[default]
    None,
    Start,
    Context(ContextMenu),
}

pub struct Desktop {
    registry: WindowRegistry,
    contents: BTreeMap<WindowId, Box<dyn AppContent>>,
    chrome: Box<dyn WindowChrome>,
    menu: TransientMenu,
    start_menu: StartMenu,
    icon_grid: IconGrid,
    taskbar: Taskbar,
    drag: Option<DragState>,
    viewport: Rect,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Desktop {
    pub fn new() -> Self {
        Self {
            registry: WindowRegistry::new(),
            contents: BTreeMap::new(),
            chrome: Box::new(DefaultChrome),
            menu: TransientMenu::None,
            start_menu: StartMenu::new(),
            icon_grid: IconGrid::new(),
            taskbar: Taskbar::new(),
            drag: None,
            viewport: Rect::default(),
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn start_menu_open(&self) -> bool {
        matches!(self.menu, TransientMenu::Start)
    }

    pub fn context_menu_open(&self) -> bool {
        matches!(self.menu, TransientMenu::Context(_))
    }

    /// Launch an application: new window, new content instance, and any open
    /// transient menu is dismissed.
    pub fn open_app(&mut self, kind: AppKind) -> WindowId {
        let id = self.registry.open(kind);
        self.contents.insert(id, kind.launch());
        self.menu = TransientMenu::None;
        id
    }

    fn close_window(&mut self, id: WindowId) {
        self.registry.close(id);
        self.contents.remove(&id);
        if self.drag.map(|d| d.id) == Some(id) {
            self.drag = None;
        }
    }

    /// Everything below the taskbar strip.
    fn desktop_area(&self) -> Rect {
        let bar = Taskbar::area(self.viewport);
        Rect {
            x: self.viewport.x,
            y: self.viewport.y,
            width: self.viewport.width,
            height: self.viewport.height.saturating_sub(bar.height),
        }
    }

    fn compact(&self) -> bool {
        self.viewport.width < COMPACT_WIDTH
    }

    /// Advance time-driven app simulations and apply anything they asked the
    /// desktop to do (the breach sequence opens windows this way).
    pub fn tick(&mut self) {
        let mut requests: Vec<AppRequest> = Vec::new();
        for content in self.contents.values_mut() {
            content.tick();
            requests.extend(content.take_requests());
        }
        for request in requests {
            match request {
                AppRequest::OpenWindow(kind) => {
                    tracing::debug!(?kind, "app requested window");
                    self.open_app(kind);
                }
            }
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Key(_) => {
                let Some(active) = self.registry.active() else {
                    return false;
                };
                let Some(content) = self.contents.get_mut(&active) else {
                    return false;
                };
                content.handle_event(event, &ContentContext::new(true))
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(button) => self.handle_mouse_down(mouse, button),
            MouseEventKind::Drag(_) => {
                let Some(drag) = self.drag else {
                    return false;
                };
                let area = self.desktop_area();
                self.registry.move_to(
                    drag.id,
                    mouse.column as i32 - drag.grab_x - area.x as i32,
                    mouse.row as i32 - drag.grab_y - area.y as i32,
                );
                true
            }
            MouseEventKind::Up(_) => self.drag.take().is_some(),
            _ => false,
        }
    }

    fn handle_mouse_down(&mut self, mouse: MouseEvent, button: MouseButton) -> bool {
        let (column, row) = (mouse.column, mouse.row);

        if let Some(hit) = self.taskbar.hit_test(column, row) {
            match hit {
                TaskbarHit::Start => {
                    // toggle, exclusively of the context menu
                    self.menu = if self.start_menu_open() {
                        TransientMenu::None
                    } else {
                        TransientMenu::Start
                    };
                }
                TaskbarHit::Window(id) => {
                    self.registry.focus(id);
                    self.menu = TransientMenu::None;
                }
            }
            return true;
        }

        // transient menus swallow clicks inside themselves; a click outside
        // dismisses them and falls through to whatever is underneath
        match &self.menu {
            TransientMenu::Start => match self.start_menu.hit_test(column, row) {
                StartMenuHit::App(kind) => {
                    self.open_app(kind);
                    return true;
                }
                StartMenuHit::Inside => return true,
                StartMenuHit::Outside => self.menu = TransientMenu::None,
            },
            TransientMenu::Context(menu) => match menu.hit_test(column, row) {
                ContextMenuHit::Open(kind) => {
                    self.open_app(kind);
                    return true;
                }
                ContextMenuHit::Cancel => {
                    self.menu = TransientMenu::None;
                    return true;
                }
                ContextMenuHit::Inside => return true,
                ContextMenuHit::Outside => self.menu = TransientMenu::None,
            },
            TransientMenu::None => {}
        }

        let area = self.desktop_area();
        let compact = self.compact();

        // topmost window first: paint order is insertion order, so hit-test
        // back to front
        let hit = self
            .registry
            .visible()
            .rev()
            .map(|window| {
                (
                    window.id(),
                    frame_rect(window, area, compact),
                    window.maximized() || compact,
                )
            })
            .find(|(_, rect, _)| rect_contains(*rect, column, row));
        if let Some((id, rect, fixed)) = hit {
            let action = if button == MouseButton::Left {
                self.chrome.hit_test(rect, column, row)
            } else {
                HeaderAction::None
            };
            match action {
                HeaderAction::Minimize => self.registry.minimize(id),
                HeaderAction::Maximize => self.registry.toggle_maximize(id),
                HeaderAction::Close => self.close_window(id),
                HeaderAction::Drag => {
                    self.registry.focus(id);
                    // maximized frames have nothing to reposition
                    if !fixed {
                        self.drag = Some(DragState {
                            id,
                            grab_x: column as i32 - rect.x as i32,
                            grab_y: row as i32 - rect.y as i32,
                        });
                    }
                }
                HeaderAction::None => {
                    self.registry.focus(id);
                    if let Some(content) = self.contents.get_mut(&id) {
                        content.handle_event(&Event::Mouse(mouse), &ContentContext::new(true));
                    }
                }
            }
            return true;
        }

        // background
        match button {
            MouseButton::Right => {
                self.menu = TransientMenu::Context(ContextMenu::anchored(column, row, area));
            }
            _ => {
                if let Some(kind) = self.icon_grid.hit_test(column, row) {
                    self.open_app(kind);
                    return true;
                }
                self.menu = TransientMenu::None;
            }
        }
        true
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, viewport: Rect, clock: &str) {
        self.viewport = viewport;
        let area = self.desktop_area();

        frame.fill(
            viewport,
            Style::default()
                .bg(theme::wallpaper_bg())
                .fg(theme::wallpaper_fg()),
        );
        self.render_wallpaper(frame, area);
        self.icon_grid.render(frame, area);

        let compact = self.compact();
        let active = self.registry.active();
        for window in self.registry.windows() {
            if window.minimized() {
                continue;
            }
            let rect = frame_rect(window, area, compact);
            let focused = active == Some(window.id());
            self.chrome.render(frame, window, rect, focused);
            let content_rect = self.chrome.content_rect(rect);
            if content_rect.width > 0
                && content_rect.height > 0
                && let Some(content) = self.contents.get_mut(&window.id())
            {
                content.render(frame, content_rect, &ContentContext::new(focused));
            }
        }

        match &mut self.menu {
            TransientMenu::Start => self.start_menu.render(frame, viewport),
            TransientMenu::Context(menu) => menu.render(frame),
            TransientMenu::None => {}
        }

        self.taskbar.render(
            frame,
            viewport,
            &self.registry,
            matches!(self.menu, TransientMenu::Start),
            clock,
        );
    }

    fn render_wallpaper(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if area.width < 20 || area.height < 6 {
            return;
        }
        let mark = "decoy-os";
        let x = area.x + (area.width - mark.len() as u16) / 2;
        let y = area.y + area.height / 2;
        frame.set_string(
            x,
            y,
            mark,
            Style::default()
                .fg(theme::wallpaper_fg())
                .add_modifier(Modifier::BOLD),
        );
    }
}
