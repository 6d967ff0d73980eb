//! Login screen. The check is a hardcoded list of lab-default passwords;
//! there is no real authentication anywhere in this system.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::theme;
use crate::ui::UiFrame;

const USERNAME: &str = "operator";
const ACCEPTED: &[&str] = &["kali", "toor"];

pub struct LoginScreen {
    password: String,
    error: Option<&'static str>,
    unlocked: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            password: String::new(),
            error: None,
            unlocked: false,
        }
    }

    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    fn submit(&mut self) {
        if self.password.is_empty() {
            self.error = Some("please enter a password");
            return;
        }
        if ACCEPTED.contains(&self.password.as_str()) {
            tracing::info!(user = USERNAME, "login accepted");
            self.unlocked = true;
        } else {
            self.error = Some("incorrect password");
            self.password.clear();
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.error = None;
                self.password.push(c);
            }
            KeyCode::Backspace => {
                self.password.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        frame.fill(area, Style::default().bg(theme::wallpaper_bg()));
        let width = 40u16.min(area.width);
        let height = 8u16.min(area.height);
        let card = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        frame.fill(card, Style::default().bg(theme::menu_bg()));
        frame.render_widget(
            Block::bordered().border_style(Style::default().fg(theme::accent())),
            card,
        );
        frame.set_string(
            card.x + 2,
            card.y + 1,
            "decoy-os",
            Style::default()
                .fg(theme::accent())
                .add_modifier(Modifier::BOLD),
        );
        frame.set_string(
            card.x + 2,
            card.y + 3,
            &format!("user:     {USERNAME}"),
            Style::default().fg(theme::menu_fg()),
        );
        let masked = "●".repeat(self.password.chars().count());
        frame.set_string(
            card.x + 2,
            card.y + 4,
            &format!("password: {masked}█"),
            Style::default().fg(theme::menu_fg()),
        );
        if let Some(error) = self.error {
            frame.set_string(
                card.x + 2,
                card.y + 6,
                error,
                Style::default().fg(theme::danger()),
            );
        } else {
            frame.set_string(
                card.x + 2,
                card.y + 6,
                "hint: the usual lab defaults",
                Style::default().fg(theme::menu_dim_fg()),
            );
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn type_password(login: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            login.handle_event(&Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            )));
        }
        login.handle_event(&Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn default_passwords_unlock() {
        let mut login = LoginScreen::new();
        type_password(&mut login, "toor");
        assert!(login.unlocked());
    }

    #[test]
    fn wrong_password_shows_error_and_clears() {
        let mut login = LoginScreen::new();
        type_password(&mut login, "hunter2");
        assert!(!login.unlocked());
        assert_eq!(login.error, Some("incorrect password"));
        assert!(login.password.is_empty());
    }

    #[test]
    fn empty_submit_is_rejected() {
        let mut login = LoginScreen::new();
        login.handle_event(&Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!login.unlocked());
        assert!(login.error.is_some());
    }
}
