//! Right-click context menu, anchored at the pointer and clamped so it never
//! overhangs the viewport.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::apps::AppKind;
use crate::theme;
use crate::ui::UiFrame;

use super::taskbar::rect_contains;

const ENTRIES: &[(&str, Option<AppKind>)] = &[
    ("Open Terminal", Some(AppKind::Terminal)),
    ("Open Browser", Some(AppKind::Browser)),
    ("Open File Explorer", Some(AppKind::FileExplorer)),
    ("Cancel", None),
];

const MENU_WIDTH: u16 = 24;
const MENU_HEIGHT: u16 = ENTRIES.len() as u16 + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuHit {
    Open(AppKind),
    Cancel,
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy)]
pub struct ContextMenu {
    rect: Rect,
}

impl ContextMenu {
    /// Anchor at the pointer, pulled back inside `viewport` when the menu
    /// would spill past the right or bottom edge.
    pub fn anchored(column: u16, row: u16, viewport: Rect) -> Self {
        let width = MENU_WIDTH.min(viewport.width);
        let height = MENU_HEIGHT.min(viewport.height);
        let max_x = viewport.x + viewport.width - width;
        let max_y = viewport.y + viewport.height - height;
        Self {
            rect: Rect {
                x: column.clamp(viewport.x, max_x),
                y: row.clamp(viewport.y, max_y),
                width,
                height,
            },
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn render(&self, frame: &mut UiFrame<'_>) {
        let style = Style::default().bg(theme::menu_bg()).fg(theme::menu_fg());
        frame.fill(self.rect, style);
        frame.render_widget(
            Block::bordered().border_style(Style::default().fg(theme::border_inactive())),
            self.rect,
        );
        for (index, (label, kind)) in ENTRIES.iter().enumerate() {
            let dim = kind.is_none();
            frame.set_string(
                self.rect.x + 2,
                self.rect.y + 1 + index as u16,
                label,
                if dim {
                    style.fg(theme::menu_dim_fg())
                } else {
                    style
                },
            );
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> ContextMenuHit {
        if !rect_contains(self.rect, column, row) {
            return ContextMenuHit::Outside;
        }
        let first_entry = self.rect.y + 1;
        if row >= first_entry
            && column > self.rect.x
            && column < self.rect.x + self.rect.width - 1
            && let Some((_, kind)) = ENTRIES.get((row - first_entry) as usize)
        {
            return match kind {
                Some(kind) => ContextMenuHit::Open(*kind),
                None => ContextMenuHit::Cancel,
            };
        }
        ContextMenuHit::Inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn anchors_at_pointer_when_room() {
        let menu = ContextMenu::anchored(10, 5, VIEWPORT);
        assert_eq!((menu.rect().x, menu.rect().y), (10, 5));
    }

    #[test]
    fn clamps_near_bottom_right_corner() {
        let menu = ContextMenu::anchored(79, 23, VIEWPORT);
        let rect = menu.rect();
        assert!(rect.x + rect.width <= 80);
        assert!(rect.y + rect.height <= 24);
    }

    #[test]
    fn entries_resolve_to_app_kinds() {
        let menu = ContextMenu::anchored(0, 0, VIEWPORT);
        let rect = menu.rect();
        assert_eq!(
            menu.hit_test(rect.x + 2, rect.y + 1),
            ContextMenuHit::Open(AppKind::Terminal)
        );
        assert_eq!(
            menu.hit_test(rect.x + 2, rect.y + 4),
            ContextMenuHit::Cancel
        );
        assert_eq!(menu.hit_test(70, 20), ContextMenuHit::Outside);
    }
}
