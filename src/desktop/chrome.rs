//! Window chrome: frame rendering, header hit-testing, and drag bookkeeping.
//!
//! The chrome translates pointer coordinates into actions (`Drag`,
//! `Minimize`, `Maximize`, `Close`) but never mutates windows itself; the
//! coordinator routes every action through the registry.

use std::fmt;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

use super::registry::{WindowId, WindowInstance};

/// Viewport widths below this force every window into maximized geometry.
/// Presentation only: the stored `maximized` flag is not touched, so layouts
/// revert when the terminal grows again.
pub const COMPACT_WIDTH: u16 = 70;

/// What a pointer position inside a window frame maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Content area or border; focus and forward.
    None,
    /// Grabbable header region.
    Drag,
    Minimize,
    Maximize,
    Close,
}

/// Transient drag gesture state, local to the controller and never stored in
/// the registry. `grab` is the pointer offset from the window origin captured
/// on mouse-down.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub id: WindowId,
    pub grab_x: i32,
    pub grab_y: i32,
}

/// Effective frame geometry for a window inside the desktop area.
///
/// Maximized (or compact-forced) windows cover the whole area. Windowed
/// geometry is the stored origin clamped into the viewport; the raw position
/// in the registry is left untouched.
pub fn frame_rect(window: &WindowInstance, area: Rect, force_max: bool) -> Rect {
    if force_max || window.maximized() {
        return area;
    }
    let size = window.size();
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    let max_x = (area.x + area.width - width) as i32;
    let max_y = (area.y + area.height - height) as i32;
    let x = (area.x as i32 + window.position().x).clamp(area.x as i32, max_x);
    let y = (area.y as i32 + window.position().y).clamp(area.y as i32, max_y);
    Rect {
        x: x as u16,
        y: y as u16,
        width,
        height,
    }
}

pub trait WindowChrome: fmt::Debug {
    fn render(&self, frame: &mut UiFrame<'_>, window: &WindowInstance, rect: Rect, focused: bool);

    fn hit_test(&self, rect: Rect, column: u16, row: u16) -> HeaderAction;

    /// Region available to hosted content.
    fn content_rect(&self, rect: Rect) -> Rect;
}

/// Border box, one-row header with icon + title on the left and the
/// minimize/maximize/close buttons on the right.
#[derive(Debug)]
pub struct DefaultChrome;

const BUTTONS: &str = "─ □ ✕";
const BUTTON_SPAN: u16 = 6;

impl WindowChrome for DefaultChrome {
    fn render(&self, frame: &mut UiFrame<'_>, window: &WindowInstance, rect: Rect, focused: bool) {
        if rect.width < 3 || rect.height < 3 {
            return;
        }
        frame.fill(
            rect,
            Style::default()
                .bg(theme::content_bg())
                .fg(theme::content_fg()),
        );
        let border = if focused {
            theme::border_active()
        } else {
            theme::border_inactive()
        };
        frame.render_widget(
            Block::bordered().border_style(Style::default().fg(border)),
            rect,
        );

        let header = Rect {
            x: rect.x + 1,
            y: rect.y + 1,
            width: rect.width - 2,
            height: 1,
        };
        let header_bg = if focused {
            theme::header_active_bg()
        } else {
            theme::header_inactive_bg()
        };
        let header_style = Style::default().bg(header_bg).fg(theme::header_fg());
        frame.fill(header, header_style);

        let label_width = header.width.saturating_sub(BUTTON_SPAN + 2) as usize;
        let label = truncate_to_width(&format!("{} {}", window.icon(), window.title()), label_width);
        frame.set_string(
            header.x + 1,
            header.y,
            &label,
            header_style.add_modifier(Modifier::BOLD),
        );
        if header.width > BUTTON_SPAN {
            frame.set_string(
                header.x + header.width - BUTTON_SPAN,
                header.y,
                BUTTONS,
                header_style,
            );
        }
    }

    fn hit_test(&self, rect: Rect, column: u16, row: u16) -> HeaderAction {
        if rect.width < 3 || rect.height < 3 {
            return HeaderAction::None;
        }
        let header_y = rect.y + 1;
        if row != header_y {
            return HeaderAction::None;
        }
        let header_x = rect.x + 1;
        let header_width = rect.width - 2;
        if column < header_x || column >= header_x + header_width {
            return HeaderAction::None;
        }
        if header_width > BUTTON_SPAN {
            let buttons_x = header_x + header_width - BUTTON_SPAN;
            if column >= buttons_x {
                // layout is "─ □ ✕": two columns per button
                return match (column - buttons_x) / 2 {
                    0 => HeaderAction::Minimize,
                    1 => HeaderAction::Maximize,
                    _ => HeaderAction::Close,
                };
            }
        }
        HeaderAction::Drag
    }

    fn content_rect(&self, rect: Rect) -> Rect {
        if rect.width < 3 || rect.height < 4 {
            return Rect::default();
        }
        Rect {
            x: rect.x + 1,
            y: rect.y + 2,
            width: rect.width - 2,
            height: rect.height - 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::AppKind;
    use crate::desktop::registry::WindowRegistry;

    fn sample_rect() -> Rect {
        Rect {
            x: 10,
            y: 5,
            width: 40,
            height: 12,
        }
    }

    #[test]
    fn header_buttons_hit_in_order() {
        let chrome = DefaultChrome;
        let rect = sample_rect();
        let header_y = rect.y + 1;
        let buttons_x = rect.x + 1 + (rect.width - 2) - BUTTON_SPAN;
        assert_eq!(
            chrome.hit_test(rect, buttons_x, header_y),
            HeaderAction::Minimize
        );
        assert_eq!(
            chrome.hit_test(rect, buttons_x + 2, header_y),
            HeaderAction::Maximize
        );
        assert_eq!(
            chrome.hit_test(rect, buttons_x + 4, header_y),
            HeaderAction::Close
        );
    }

    #[test]
    fn header_left_of_buttons_is_draggable() {
        let chrome = DefaultChrome;
        let rect = sample_rect();
        assert_eq!(
            chrome.hit_test(rect, rect.x + 3, rect.y + 1),
            HeaderAction::Drag
        );
    }

    #[test]
    fn body_is_not_a_header_action() {
        let chrome = DefaultChrome;
        let rect = sample_rect();
        assert_eq!(
            chrome.hit_test(rect, rect.x + 3, rect.y + 5),
            HeaderAction::None
        );
    }

    #[test]
    fn content_rect_is_inside_chrome() {
        let chrome = DefaultChrome;
        let rect = sample_rect();
        let content = chrome.content_rect(rect);
        assert_eq!(content.y, rect.y + 2);
        assert_eq!(content.height, rect.height - 3);
    }

    #[test]
    fn maximized_window_fills_the_area() {
        let mut registry = WindowRegistry::new();
        let id = registry.open(AppKind::Terminal);
        registry.toggle_maximize(id);
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        };
        let rect = frame_rect(registry.get(id).unwrap(), area, false);
        assert_eq!(rect, area);
    }

    #[test]
    fn offscreen_position_is_clamped_for_presentation() {
        let mut registry = WindowRegistry::new();
        let id = registry.open(AppKind::Calculator);
        registry.move_to(id, -50, -50);
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        };
        let rect = frame_rect(registry.get(id).unwrap(), area, false);
        assert_eq!((rect.x, rect.y), (0, 0));
        // the stored position is untouched
        assert_eq!(registry.get(id).unwrap().position().x, -50);
    }
}
