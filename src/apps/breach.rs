//! The SYSTEM BREACH window: a scripted extraction transcript that reveals
//! itself over time, then asks the desktop to open the browser on the
//! "exfiltrated" page. Pure theater.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, AppKind, AppRequest, ContentContext};

const SCRIPT: &[&str] = &[
    "[*] establishing encrypted channel...",
    "[*] channel up (aes-256-gcm, simulated)",
    "[*] enumerating portfolio endpoints...",
    "[+] found /about /projects /contact",
    "[*] bypassing decorative firewall...",
    "[+] firewall was a png, bypass trivial",
    "[*] extracting portfolio data.......",
    "[+] 3 sections recovered",
    "[*] preparing browser redirect...",
    "[+] extraction complete",
];

/// Ticks between revealed lines.
const TICKS_PER_LINE: u8 = 6;

pub struct BreachApp {
    revealed: usize,
    tick: u8,
    redirected: bool,
    requests: Vec<AppRequest>,
}

impl BreachApp {
    pub fn new() -> Self {
        Self {
            revealed: 0,
            tick: 0,
            redirected: false,
            requests: Vec::new(),
        }
    }

    fn done(&self) -> bool {
        self.revealed >= SCRIPT.len()
    }
}

impl Default for BreachApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for BreachApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ContentContext) {
        let mut lines: Vec<Line> = SCRIPT[..self.revealed]
            .iter()
            .map(|text| {
                let style = if text.starts_with("[+]") {
                    Style::default().fg(theme::success())
                } else {
                    Style::default().fg(theme::accent())
                };
                Line::styled(*text, style)
            })
            .collect();
        if self.done() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "ACCESS GRANTED",
                Style::default()
                    .fg(theme::success())
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let percent = self.revealed * 100 / SCRIPT.len();
            lines.push(Line::styled(
                format!("extraction {percent}%"),
                Style::default().fg(theme::warning()),
            ));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn tick(&mut self) {
        if self.done() {
            if !self.redirected {
                self.redirected = true;
                self.requests.push(AppRequest::OpenWindow(AppKind::Browser));
            }
            return;
        }
        self.tick += 1;
        if self.tick >= TICKS_PER_LINE {
            self.tick = 0;
            self.revealed += 1;
        }
    }

    fn take_requests(&mut self) -> Vec<AppRequest> {
        std::mem::take(&mut self.requests)
    }
}
