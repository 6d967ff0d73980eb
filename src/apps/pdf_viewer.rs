//! Paged document viewer over an embedded faux report.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

const PAGES: &[&str] = &[
    indoc! {"
        PENETRATION TEST REPORT (SAMPLE)

        Client:      Example Corp (fictional)
        Engagement:  External network assessment
        Classification: DEMO — contains no real findings

        This document is part of a portfolio piece. Every
        host, finding, and credential inside is invented.
    "},
    indoc! {"
        1. EXECUTIVE SUMMARY

        The assessment identified three illustrative issues
        ranging from informational to high severity. All
        were fabricated for demonstration purposes, which
        conveniently made remediation instantaneous.
    "},
    indoc! {"
        2. FINDINGS

        H-01  Default credentials on demo router
        M-01  Directory listing on static file server
        I-01  Verbose banner on simulated SSH service

        3. CLOSING

        Thanks for reading a fake PDF inside a fake OS.
    "},
];

pub struct PdfViewerApp {
    page: usize,
}

impl PdfViewerApp {
    pub fn new() -> Self {
        Self { page: 0 }
    }
}

impl Default for PdfViewerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for PdfViewerApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ContentContext) {
        if area.height < 2 {
            return;
        }
        let body = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height - 1,
        };
        let lines: Vec<Line> = PAGES[self.page]
            .lines()
            .map(|text| {
                if text.chars().next().is_some_and(|c| c.is_ascii_digit())
                    || text == text.to_uppercase() && text.len() > 10
                {
                    Line::styled(
                        text,
                        Style::default()
                            .fg(theme::accent())
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(text)
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), body);
        frame.set_string(
            area.x,
            area.y + area.height - 1,
            &format!(
                "page {}/{}  ←/→ to flip",
                self.page + 1,
                PAGES.len()
            ),
            Style::default().fg(theme::menu_dim_fg()),
        );
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ContentContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Left | KeyCode::PageUp => {
                self.page = self.page.saturating_sub(1);
                true
            }
            KeyCode::Right | KeyCode::PageDown => {
                self.page = (self.page + 1).min(PAGES.len() - 1);
                true
            }
            _ => false,
        }
    }
}
