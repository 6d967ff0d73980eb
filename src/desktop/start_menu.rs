//! Start menu: the full application list, anchored above the taskbar.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::apps::AppKind;
use crate::theme;
use crate::ui::UiFrame;

use super::placement;
use super::taskbar::{TASKBAR_HEIGHT, rect_contains};

pub const ENTRIES: &[(AppKind, &str)] = &[
    (AppKind::Terminal, "Terminal"),
    (AppKind::FileExplorer, "File Explorer"),
    (AppKind::Browser, "Web Browser"),
    (AppKind::Sniffer, "Packet Sniffer"),
    (AppKind::PortScan, "Port Scanner"),
    (AppKind::CodeEditor, "Code Editor"),
    (AppKind::Notes, "Notes"),
    (AppKind::Calculator, "Calculator"),
    (AppKind::PdfViewer, "PDF Viewer"),
    (AppKind::Vpn, "Secure VPN"),
    (AppKind::Settings, "Settings"),
];

const MENU_WIDTH: u16 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMenuHit {
    App(AppKind),
    Inside,
    Outside,
}

#[derive(Debug, Default)]
pub struct StartMenu {
    rect: Rect,
}

impl StartMenu {
    pub fn new() -> Self {
        Self::default()
    }

    fn layout(viewport: Rect) -> Rect {
        let height = (ENTRIES.len() as u16 + 3).min(viewport.height);
        let width = MENU_WIDTH.min(viewport.width);
        Rect {
            x: viewport.x,
            y: viewport
                .y
                .saturating_add(viewport.height)
                .saturating_sub(TASKBAR_HEIGHT + height),
            width,
            height,
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, viewport: Rect) {
        self.rect = Self::layout(viewport);
        let style = Style::default().bg(theme::menu_bg()).fg(theme::menu_fg());
        frame.fill(self.rect, style);
        frame.render_widget(
            Block::bordered().border_style(Style::default().fg(theme::border_inactive())),
            self.rect,
        );
        frame.set_string(
            self.rect.x + 2,
            self.rect.y + 1,
            "decoy-os  applications",
            style.fg(theme::accent()).add_modifier(Modifier::BOLD),
        );
        for (index, (kind, label)) in ENTRIES.iter().enumerate() {
            let y = self.rect.y + 2 + index as u16;
            if y >= self.rect.y + self.rect.height - 1 {
                break;
            }
            let meta = placement::metadata(*kind);
            frame.set_string(
                self.rect.x + 2,
                y,
                &format!("{} {}", meta.icon, label),
                style,
            );
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> StartMenuHit {
        if !rect_contains(self.rect, column, row) {
            return StartMenuHit::Outside;
        }
        let first_entry = self.rect.y + 2;
        if row >= first_entry
            && column > self.rect.x
            && column < self.rect.x + self.rect.width - 1
            && let Some((kind, _)) = ENTRIES.get((row - first_entry) as usize)
        {
            return StartMenuHit::App(*kind);
        }
        StartMenuHit::Inside
    }
}
