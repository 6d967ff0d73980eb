//! Read-only faux file browser over a canned home directory.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

struct Entry {
    name: &'static str,
    dir: bool,
    size: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry { name: "documents", dir: true, size: "-" },
    Entry { name: "exploits", dir: true, size: "-" },
    Entry { name: "loot", dir: true, size: "-" },
    Entry { name: "wordlists", dir: true, size: "-" },
    Entry { name: "notes.md", dir: false, size: "2.1K" },
    Entry { name: "scan-results.xml", dir: false, size: "48K" },
    Entry { name: "capture.pcapng", dir: false, size: "1.2M" },
    Entry { name: "resume.pdf", dir: false, size: "96K" },
];

pub struct FileExplorerApp {
    selected: usize,
}

impl FileExplorerApp {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Default for FileExplorerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for FileExplorerApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ContentContext) {
        let mut lines = vec![
            Line::styled(
                "/home/operator",
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
        ];
        for (index, entry) in ENTRIES.iter().enumerate() {
            let marker = if entry.dir { "▸" } else { " " };
            let text = format!(" {marker} {:<24} {:>6}", entry.name, entry.size);
            let style = if index == self.selected && ctx.focused() {
                Style::default()
                    .bg(theme::taskbar_active_bg())
                    .fg(theme::menu_fg())
            } else if entry.dir {
                Style::default().fg(theme::accent())
            } else {
                Style::default().fg(theme::content_fg())
            };
            lines.push(Line::styled(text, style));
        }
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
                self.selected = (self.selected + 1).min(ENTRIES.len() - 1);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = FileExplorerApp::new();
        let ctx = ContentContext::new(true);
        for _ in 0..50 {
            app.handle_event(
                &Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
                &ctx,
            );
        }
        assert_eq!(app.selected, ENTRIES.len() - 1);
        for _ in 0..50 {
            app.handle_event(
                &Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
                &ctx,
            );
        }
        assert_eq!(app.selected, 0);
    }
}
