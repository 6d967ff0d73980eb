//! VPN client lookalike: a connect/disconnect state machine with a
//! tick-driven handshake and a randomized exit IP.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::rng::Rng;
use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

const HANDSHAKE_TICKS: u8 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
enum VpnState {
    Disconnected,
    Handshake { progress: u8 },
    Connected { exit_ip: String },
}

pub struct VpnApp {
    state: VpnState,
    log: Vec<String>,
    rng: Rng,
}

impl VpnApp {
    pub fn new() -> Self {
        Self {
            state: VpnState::Disconnected,
            log: vec!["ready. press enter to connect.".to_string()],
            rng: Rng::from_clock(),
        }
    }

    fn toggle(&mut self) {
        match &self.state {
            VpnState::Disconnected => {
                self.log.push("negotiating tunnel (simulated)...".to_string());
                self.state = VpnState::Handshake { progress: 0 };
            }
            VpnState::Handshake { .. } | VpnState::Connected { .. } => {
                self.log.push("tunnel closed.".to_string());
                self.state = VpnState::Disconnected;
            }
        }
    }

    fn random_exit_ip(rng: &mut Rng) -> String {
        format!(
            "185.{}.{}.{}",
            rng.range(10, 250),
            rng.range(1, 254),
            rng.range(1, 254)
        )
    }
}

impl Default for VpnApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for VpnApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ContentContext) {
        let (status, style) = match &self.state {
            VpnState::Disconnected => (
                "● DISCONNECTED".to_string(),
                Style::default().fg(theme::danger()),
            ),
            VpnState::Handshake { progress } => (
                format!(
                    "● CONNECTING {}%",
                    (*progress as u32 * 100) / HANDSHAKE_TICKS as u32
                ),
                Style::default().fg(theme::warning()),
            ),
            VpnState::Connected { exit_ip } => (
                format!("● CONNECTED via {exit_ip}"),
                Style::default().fg(theme::success()),
            ),
        };
        let mut lines = vec![
            Line::styled(status, style.add_modifier(Modifier::BOLD)),
            Line::raw(""),
        ];
        let visible = area.height.saturating_sub(3) as usize;
        let start = self.log.len().saturating_sub(visible);
        for entry in &self.log[start..] {
            lines.push(Line::styled(
                entry.clone(),
                Style::default().fg(theme::menu_dim_fg()),
            ));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ContentContext) -> bool {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Enter
        {
            self.toggle();
            return true;
        }
        false
    }

    fn tick(&mut self) {
        if let VpnState::Handshake { progress } = &mut self.state {
            *progress += 1;
            if *progress >= HANDSHAKE_TICKS {
                let exit_ip = Self::random_exit_ip(&mut self.rng);
                self.log.push(format!("tunnel up, exit {exit_ip}"));
                self.state = VpnState::Connected { exit_ip };
            }
        }
    }
}
