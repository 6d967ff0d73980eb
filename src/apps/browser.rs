//! Faux web browser. One canned page, no network: the original screenshot
//! proxy is out of scope, so the "portfolio" ships embedded.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

const URL: &str = "https://operator.dev/portfolio";

const PAGE: &str = indoc! {"
    ── operator.dev ────────────────────────────────

    SECURITY ENGINEER / PENETRATION TESTER

    about
      Breaking things carefully since 2018. This
      entire desktop is a portfolio piece; nothing
      on it touches a real network.

    projects
      * decoy-os      — the environment you are in
      * packet-lab    — protocol teaching sandbox
      * redteam-notes — engagement methodology wiki

    contact
      mail: hello@operator.dev
      key:  0xDECAFBAD (simulated)
"};

pub struct BrowserApp {
    scroll: u16,
}

impl BrowserApp {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    fn max_scroll(&self) -> u16 {
        PAGE.lines().count() as u16
    }
}

impl Default for BrowserApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for BrowserApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ContentContext) {
        if area.height < 2 {
            return;
        }
        let url_bar = Rect { height: 1, ..area };
        frame.fill(
            url_bar,
            Style::default()
                .bg(theme::header_inactive_bg())
                .fg(theme::menu_fg()),
        );
        frame.set_string(
            url_bar.x + 1,
            url_bar.y,
            &format!("⟳  {URL}"),
            Style::default()
                .bg(theme::header_inactive_bg())
                .fg(theme::menu_fg()),
        );
        let body = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height - 1,
        };
        let lines: Vec<Line> = PAGE
            .lines()
            .skip(self.scroll as usize)
            .map(|text| {
                if text.chars().all(|c| c.is_uppercase() || c.is_whitespace()) && !text.is_empty() {
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
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                true
            }
            KeyCode::Home => {
                self.scroll = 0;
                true
            }
            _ => false,
        }
    }
}
