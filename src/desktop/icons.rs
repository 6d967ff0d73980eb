//! Desktop launcher icons, stacked down the left edge of the wallpaper.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::apps::AppKind;
use crate::theme;
use crate::ui::UiFrame;

use super::placement;
use super::taskbar::rect_contains;

const ICONS: &[(AppKind, &str)] = &[
    (AppKind::FileExplorer, "Home"),
    (AppKind::Terminal, "Terminal"),
    (AppKind::Browser, "Browser"),
    (AppKind::Sniffer, "Sniffer"),
    (AppKind::PortScan, "Scanner"),
    (AppKind::CodeEditor, "Editor"),
    (AppKind::Notes, "Notes"),
    (AppKind::Settings, "Settings"),
];

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 2;

#[derive(Debug, Default)]
pub struct IconGrid {
    hits: Vec<(AppKind, Rect)>,
}

impl IconGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect) {
        self.hits.clear();
        let mut y = area.y + 1;
        for (kind, label) in ICONS {
            if y + CELL_HEIGHT > area.y + area.height {
                break;
            }
            let cell = Rect {
                x: area.x + 2,
                y,
                width: CELL_WIDTH.min(area.width.saturating_sub(2)),
                height: CELL_HEIGHT,
            };
            let glyph = placement::metadata(*kind).icon;
            frame.set_string(
                cell.x + 1,
                cell.y,
                glyph,
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            );
            frame.set_string(cell.x, cell.y + 1, label, Style::default().fg(theme::menu_fg()));
            self.hits.push((*kind, cell));
            y += CELL_HEIGHT + 1;
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<AppKind> {
        self.hits
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(kind, _)| *kind)
    }
}
