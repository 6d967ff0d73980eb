//! Boot splash: scripted service lines revealed on tick, skippable with any
//! key. Pure presentation; nothing actually starts.

use crossterm::event::{Event, KeyEventKind};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

const BOOT_LOG: &str = indoc! {"
    decoy-os 1.0 booting...
    [ OK ] mounted /decoy (tmpfs, obviously)
    [ OK ] started network pretender daemon
    [ OK ] loaded 0 kernel modules (none exist)
    [ OK ] started packet theater service
    [ OK ] reticulating splines
    [ OK ] reached target graphical pretend-session
"};

const TICKS_PER_LINE: u8 = 3;

pub struct BootScreen {
    revealed: usize,
    tick: u8,
    skipped: bool,
}

impl BootScreen {
    pub fn new() -> Self {
        Self {
            revealed: 0,
            tick: 0,
            skipped: false,
        }
    }

    fn total() -> usize {
        BOOT_LOG.lines().count()
    }

    pub fn finished(&self) -> bool {
        self.skipped || self.revealed >= Self::total()
    }

    pub fn tick(&mut self) {
        if self.finished() {
            return;
        }
        self.tick += 1;
        if self.tick >= TICKS_PER_LINE {
            self.tick = 0;
            self.revealed += 1;
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.skipped = true;
        }
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        frame.fill(area, Style::default().bg(theme::wallpaper_bg()));
        let lines: Vec<Line> = BOOT_LOG
            .lines()
            .take(self.revealed)
            .map(|text| {
                if let Some(rest) = text.strip_prefix("[ OK ]") {
                    Line::from(vec![
                        ratatui::text::Span::styled(
                            "[ OK ]",
                            Style::default().fg(theme::success()),
                        ),
                        ratatui::text::Span::raw(rest.to_string()),
                    ])
                } else {
                    Line::styled(
                        text,
                        Style::default()
                            .fg(theme::accent())
                            .add_modifier(Modifier::BOLD),
                    )
                }
            })
            .collect();
        let inset = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        frame.render_widget(Paragraph::new(lines), inset);
        if !self.finished() {
            frame.set_string(
                inset.x,
                inset.y + inset.height.saturating_sub(1),
                "press any key to skip",
                Style::default().fg(theme::menu_dim_fg()),
            );
        }
    }
}

impl Default for BootScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn finishes_after_enough_ticks() {
        let mut boot = BootScreen::new();
        for _ in 0..(BootScreen::total() as u32 * TICKS_PER_LINE as u32 + 4) {
            boot.tick();
        }
        assert!(boot.finished());
    }

    #[test]
    fn any_key_skips() {
        let mut boot = BootScreen::new();
        boot.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
        )));
        assert!(boot.finished());
    }
}
