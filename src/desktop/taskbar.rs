//! Bottom taskbar: start button, one entry per window (minimized included),
//! and a clock. Hit rectangles are rebuilt on every render, mirroring
//! whatever was last painted.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

use super::registry::{WindowId, WindowRegistry};

pub const TASKBAR_HEIGHT: u16 = 1;
const START_LABEL: &str = " ⌬ start ";
const ENTRY_MAX_WIDTH: u16 = 18;
const CLOCK_WIDTH: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarHit {
    Start,
    Window(WindowId),
}

#[derive(Debug, Default)]
pub struct Taskbar {
    start_rect: Rect,
    window_hits: Vec<(WindowId, Rect)>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// The strip reserved at the bottom of the viewport.
    pub fn area(viewport: Rect) -> Rect {
        Rect {
            x: viewport.x,
            y: viewport
                .y
                .saturating_add(viewport.height.saturating_sub(TASKBAR_HEIGHT)),
            width: viewport.width,
            height: TASKBAR_HEIGHT.min(viewport.height),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        viewport: Rect,
        registry: &WindowRegistry,
        start_open: bool,
        clock: &str,
    ) {
        self.start_rect = Rect::default();
        self.window_hits.clear();

        let bar = Self::area(viewport);
        if bar.height == 0 || bar.width == 0 {
            return;
        }
        let base = Style::default()
            .bg(theme::taskbar_bg())
            .fg(theme::taskbar_fg());
        frame.fill(bar, base);

        // start button
        let start_width = (START_LABEL.chars().count() as u16).min(bar.width);
        self.start_rect = Rect {
            x: bar.x,
            y: bar.y,
            width: start_width,
            height: 1,
        };
        let start_style = if start_open {
            Style::default()
                .bg(theme::taskbar_active_bg())
                .fg(theme::accent())
                .add_modifier(Modifier::BOLD)
        } else {
            base.fg(theme::accent())
        };
        frame.set_string(bar.x, bar.y, START_LABEL, start_style);

        // clock, right aligned
        let clock_x = bar.x + bar.width.saturating_sub(CLOCK_WIDTH);
        frame.set_string(clock_x, bar.y, clock, base);

        // window entries between start button and clock
        let mut x = self.start_rect.x + self.start_rect.width + 1;
        let limit = clock_x.saturating_sub(1);
        for window in registry.windows() {
            if x >= limit {
                break;
            }
            let label = format!(" {} {} ", window.icon(), window.title());
            let width = (label.chars().count() as u16)
                .min(ENTRY_MAX_WIDTH)
                .min(limit - x);
            if width < 4 {
                break;
            }
            let style = if registry.active() == Some(window.id()) {
                Style::default()
                    .bg(theme::taskbar_active_bg())
                    .fg(theme::menu_fg())
            } else if window.minimized() {
                base.fg(theme::menu_dim_fg())
            } else {
                base
            };
            frame.set_string(x, bar.y, &truncate_to_width(&label, width as usize), style);
            self.window_hits.push((
                window.id(),
                Rect {
                    x,
                    y: bar.y,
                    width,
                    height: 1,
                },
            ));
            x += width + 1;
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<TaskbarHit> {
        if rect_contains(self.start_rect, column, row) {
            return Some(TaskbarHit::Start);
        }
        self.window_hits
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(id, _)| TaskbarHit::Window(*id))
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
