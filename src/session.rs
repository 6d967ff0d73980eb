//! Screen sequencing: boot splash → login → desktop.
//!
//! The desktop (and with it the window registry) is created when the login
//! succeeds and dropped with the session; nothing survives across runs.

use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::apps::AppKind;
use crate::boot::BootScreen;
use crate::desktop::Desktop;
use crate::login::LoginScreen;
use crate::ui::UiFrame;

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Jump straight to the desktop (demo/debug convenience).
    pub skip_boot: bool,
    /// Applications to open once the desktop mounts.
    pub open: Vec<AppKind>,
}

enum Screen {
    Boot(BootScreen),
    Login(LoginScreen),
    Desktop(Desktop),
}

pub struct Session {
    screen: Screen,
    options: SessionOptions,
    quit: bool,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        let mut session = Self {
            screen: Screen::Boot(BootScreen::new()),
            options,
            quit: false,
        };
        if session.options.skip_boot {
            session.mount_desktop();
        }
        session
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn mount_desktop(&mut self) {
        let mut desktop = Desktop::new();
        for kind in &self.options.open {
            desktop.open_app(*kind);
        }
        tracing::info!("desktop mounted");
        self.screen = Screen::Desktop(desktop);
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event
            && key.code == KeyCode::Char('q')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.quit = true;
            return;
        }
        match &mut self.screen {
            Screen::Boot(boot) => {
                boot.handle_event(event);
                if boot.finished() {
                    self.screen = Screen::Login(LoginScreen::new());
                }
            }
            Screen::Login(login) => {
                login.handle_event(event);
                if login.unlocked() {
                    self.mount_desktop();
                }
            }
            Screen::Desktop(desktop) => {
                desktop.handle_event(event);
            }
        }
    }

    pub fn tick(&mut self) {
        match &mut self.screen {
            Screen::Boot(boot) => {
                boot.tick();
                if boot.finished() {
                    self.screen = Screen::Login(LoginScreen::new());
                }
            }
            Screen::Login(_) => {}
            Screen::Desktop(desktop) => desktop.tick(),
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        match &mut self.screen {
            Screen::Boot(boot) => boot.render(frame, area),
            Screen::Login(login) => login.render(frame, area),
            Screen::Desktop(desktop) => {
                let clock = clock_hhmm();
                desktop.render(frame, area, &clock);
            }
        }
    }

    /// Test/tooling access to the mounted desktop, if any.
    pub fn desktop(&self) -> Option<&Desktop> {
        match &self.screen {
            Screen::Desktop(desktop) => Some(desktop),
            _ => None,
        }
    }
}

/// Wall-clock HH:MM (UTC). The taskbar clock is decoration; time-zone
/// handling is not worth a dependency here.
fn clock_hhmm() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let minutes = (secs / 60) % (24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind};

    #[test]
    fn skip_boot_mounts_desktop_with_requested_apps() {
        let session = Session::new(SessionOptions {
            skip_boot: true,
            open: vec![AppKind::Terminal, AppKind::Notes],
        });
        let desktop = session.desktop().expect("desktop should be mounted");
        assert_eq!(desktop.registry().windows().len(), 2);
    }

    #[test]
    fn ctrl_q_quits_from_any_screen() {
        let mut session = Session::new(SessionOptions::default());
        let mut quit_key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        quit_key.kind = KeyEventKind::Press;
        session.handle_event(&Event::Key(quit_key));
        assert!(session.should_quit());
    }

    #[test]
    fn boot_leads_to_login_which_leads_to_desktop() {
        let mut session = Session::new(SessionOptions::default());
        // run the boot script out
        for _ in 0..200 {
            session.tick();
        }
        assert!(matches!(session.screen, Screen::Login(_)));
        for c in "toor".chars() {
            session.handle_event(&Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            )));
        }
        session.handle_event(&Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(session.desktop().is_some());
    }
}
