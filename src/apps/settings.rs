//! Settings panel. The toggles are cosmetic — they exist so the desktop has
//! a settings surface, not because anything reads them yet.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

struct Toggle {
    label: &'static str,
    enabled: bool,
}

pub struct SettingsApp {
    toggles: Vec<Toggle>,
    selected: usize,
}

impl SettingsApp {
    pub fn new() -> Self {
        Self {
            toggles: vec![
                Toggle { label: "Matrix wallpaper", enabled: true },
                Toggle { label: "Taskbar clock", enabled: true },
                Toggle { label: "Boot animation", enabled: true },
                Toggle { label: "Sound effects", enabled: false },
                Toggle { label: "Auto-lock session", enabled: false },
            ],
            selected: 0,
        }
    }
}

impl Default for SettingsApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for SettingsApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ContentContext) {
        let mut lines = vec![
            Line::styled(
                "appearance & behavior",
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
        ];
        for (index, toggle) in self.toggles.iter().enumerate() {
            let mark = if toggle.enabled { "[x]" } else { "[ ]" };
            let style = if index == self.selected && ctx.focused() {
                Style::default()
                    .bg(theme::taskbar_active_bg())
                    .fg(theme::menu_fg())
            } else {
                Style::default().fg(theme::content_fg())
            };
            lines.push(Line::styled(format!(" {mark} {}", toggle.label), style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "↑/↓ select · space toggles",
            Style::default().fg(theme::menu_dim_fg()),
        ));
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ContentContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.toggles.len() - 1);
                true
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let toggle = &mut self.toggles[self.selected];
                toggle.enabled = !toggle.enabled;
                true
            }
            _ => false,
        }
    }
}
