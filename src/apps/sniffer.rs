//! Packet sniffer lookalike. Rows are random noise appended on tick; space
//! pauses the feed.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::rng::Rng;
use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

const PROTOCOLS: &[&str] = &["TCP", "UDP", "TLSv1.3", "DNS", "HTTP", "ARP", "ICMP"];
const MAX_ROWS: usize = 256;

struct PacketRow {
    number: u32,
    source: String,
    dest: String,
    protocol: &'static str,
    length: u32,
}

pub struct SnifferApp {
    rows: Vec<PacketRow>,
    next_number: u32,
    paused: bool,
    rng: Rng,
}

impl SnifferApp {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_number: 1,
            paused: false,
            rng: Rng::from_clock(),
        }
    }

    fn random_addr(rng: &mut Rng) -> String {
        format!(
            "10.0.{}.{}:{}",
            rng.range(0, 8),
            rng.range(2, 254),
            rng.range(1024, 65535)
        )
    }

    fn capture_one(&mut self) {
        let source = Self::random_addr(&mut self.rng);
        let dest = Self::random_addr(&mut self.rng);
        let protocol = *self.rng.pick(PROTOCOLS);
        let row = PacketRow {
            number: self.next_number,
            source,
            dest,
            protocol,
            length: self.rng.range(54, 1514),
        };
        self.next_number += 1;
        self.rows.push(row);
        if self.rows.len() > MAX_ROWS {
            self.rows.remove(0);
        }
    }
}

impl Default for SnifferApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for SnifferApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ContentContext) {
        if area.height < 2 {
            return;
        }
        let status = if self.paused {
            "capture paused — space resumes"
        } else {
            "capturing on eth0 (simulated) — space pauses"
        };
        let mut lines = vec![
            Line::styled(
                format!("{:>5} {:<22} {:<22} {:<8} {:>5}", "no.", "source", "destination", "proto", "len"),
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        let visible = area.height.saturating_sub(2) as usize;
        let start = self.rows.len().saturating_sub(visible);
        for row in &self.rows[start..] {
            lines.push(Line::raw(format!(
                "{:>5} {:<22} {:<22} {:<8} {:>5}",
                row.number, row.source, row.dest, row.protocol, row.length
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
        frame.set_string(
            area.x,
            area.y + area.height - 1,
            status,
            Style::default().fg(theme::menu_dim_fg()),
        );
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ContentContext) -> bool {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char(' ')
        {
            self.paused = !self.paused;
            return true;
        }
        false
    }

    fn tick(&mut self) {
        if self.paused {
            return;
        }
        // bursty, like a real capture
        let burst = self.rng.range(0, 3);
        for _ in 0..burst {
            self.capture_one();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_buffer_stays_bounded() {
        let mut app = SnifferApp::new();
        for _ in 0..(MAX_ROWS * 4) {
            app.capture_one();
        }
        assert_eq!(app.rows.len(), MAX_ROWS);
        // numbering keeps climbing even as old rows fall off
        assert!(app.rows.last().unwrap().number > MAX_ROWS as u32);
    }

    #[test]
    fn paused_capture_is_frozen() {
        let mut app = SnifferApp::new();
        app.paused = true;
        app.tick();
        assert!(app.rows.is_empty());
    }
}
