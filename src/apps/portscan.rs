//! Port-scanner lookalike: a scan transcript revealed on tick, with
//! randomized latencies so successive runs differ.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::rng::Rng;
use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

const TARGET: &str = "10.0.2.1";
const PORTS: &[(u16, &str)] = &[
    (22, "ssh"),
    (53, "domain"),
    (80, "http"),
    (139, "netbios-ssn"),
    (443, "https"),
    (445, "microsoft-ds"),
    (3306, "mysql"),
    (8080, "http-proxy"),
];
const TICKS_PER_LINE: u8 = 4;

pub struct PortScanApp {
    lines: Vec<String>,
    revealed: usize,
    tick: u8,
    rng: Rng,
}

impl PortScanApp {
    pub fn new() -> Self {
        let mut app = Self {
            lines: Vec::new(),
            revealed: 0,
            tick: 0,
            rng: Rng::from_clock(),
        };
        app.restart();
        app
    }

    fn restart(&mut self) {
        self.revealed = 0;
        self.tick = 0;
        self.lines = vec![
            format!("Starting scan against {TARGET} (simulated)"),
            format!("Host is up ({}.{:03}s latency).", 0, self.rng.range(1, 99)),
            String::new(),
            format!("{:<9} {:<7} {}", "PORT", "STATE", "SERVICE"),
        ];
        for (port, service) in PORTS {
            let open = self.rng.chance(70);
            let state = if open { "open" } else { "filtered" };
            self.lines
                .push(format!("{:<9} {:<7} {}", format!("{port}/tcp"), state, service));
        }
        self.lines.push(String::new());
        self.lines.push(format!(
            "Scan done: 1 host up, scanned in {}.{:02} seconds",
            self.rng.range(2, 9),
            self.rng.range(0, 99)
        ));
    }

    fn done(&self) -> bool {
        self.revealed >= self.lines.len()
    }
}

impl Default for PortScanApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for PortScanApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ContentContext) {
        let mut lines: Vec<Line> = self.lines[..self.revealed]
            .iter()
            .map(|text| {
                if text.contains(" open ") {
                    Line::styled(text.clone(), Style::default().fg(theme::success()))
                } else {
                    Line::raw(text.clone())
                }
            })
            .collect();
        if self.done() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "press 'r' to rescan",
                Style::default()
                    .fg(theme::menu_dim_fg())
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ContentContext) -> bool {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('r')
            && self.done()
        {
            self.restart();
            return true;
        }
        false
    }

    fn tick(&mut self) {
        if self.done() {
            return;
        }
        self.tick += 1;
        if self.tick >= TICKS_PER_LINE {
            self.tick = 0;
            self.revealed += 1;
        }
    }
}
