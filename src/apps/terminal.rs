//! Simulated shell. Commands are canned; `hack` kicks off the scripted
//! breach sequence by asking the desktop for a SYSTEM BREACH window.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, AppKind, AppRequest, ContentContext};

const HELP: &str = indoc! {"
    available commands:
      help        show this text
      whoami      current user
      uname       kernel banner
      ls          list home directory
      cat <file>  print a file
      ifconfig    interface summary
      clear       wipe scrollback
      hack        run the breach demo
"};

const MOTD: &str = indoc! {"
    decoy-os 1.0 — all tooling on this machine is simulated
    type 'help' to get started
"};

pub struct TerminalApp {
    scrollback: Vec<Line<'static>>,
    input: String,
    host: String,
    requests: Vec<AppRequest>,
}

impl TerminalApp {
    pub fn new() -> Self {
        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "decoy".to_string());
        let mut app = Self {
            scrollback: Vec::new(),
            input: String::new(),
            host,
            requests: Vec::new(),
        };
        for line in MOTD.lines() {
            app.push_dim(line.to_string());
        }
        app
    }

    fn prompt(&self) -> String {
        format!("operator@{}:~$ ", self.host)
    }

    fn push_plain(&mut self, text: String) {
        self.scrollback.push(Line::raw(text));
    }

    fn push_dim(&mut self, text: String) {
        self.scrollback.push(Line::styled(
            text,
            Style::default().fg(theme::menu_dim_fg()),
        ));
    }

    fn push_accent(&mut self, text: String) {
        self.scrollback
            .push(Line::styled(text, Style::default().fg(theme::accent())));
    }

    fn submit(&mut self) {
        let input = std::mem::take(&mut self.input);
        let echo = format!("{}{}", self.prompt(), input);
        self.push_accent(echo);
        let words = match shell_words::split(&input) {
            Ok(words) => words,
            Err(err) => {
                self.push_plain(format!("parse error: {err}"));
                return;
            }
        };
        let Some(command) = words.first() else {
            return;
        };
        match command.as_str() {
            "help" => {
                for line in HELP.lines() {
                    self.push_plain(line.to_string());
                }
            }
            "whoami" => self.push_plain("operator".to_string()),
            "uname" => self.push_plain("decoy-os 1.0 x86_64 (simulated)".to_string()),
            "ls" => {
                self.push_plain("documents  exploits  loot  notes.md  scan-results".to_string());
            }
            "cat" => match words.get(1).map(String::as_str) {
                Some("notes.md") => {
                    self.push_plain("# notes".to_string());
                    self.push_plain("everything here is staged demo data.".to_string());
                }
                Some(name) => self.push_plain(format!("cat: {name}: permission denied")),
                None => self.push_plain("usage: cat <file>".to_string()),
            },
            "ifconfig" => {
                self.push_plain("eth0: inet 10.0.2.15  netmask 255.255.255.0".to_string());
                self.push_plain("lo:   inet 127.0.0.1  netmask 255.0.0.0".to_string());
            }
            "clear" => self.scrollback.clear(),
            "hack" => {
                self.push_plain("initializing breach toolkit...".to_string());
                self.push_plain("target acquired, opening extraction console".to_string());
                self.requests.push(AppRequest::OpenWindow(AppKind::Breach));
            }
            other => self.push_plain(format!("{other}: command not found")),
        }
    }
}

impl Default for TerminalApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for TerminalApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ContentContext) {
        if area.height == 0 {
            return;
        }
        let visible = area.height.saturating_sub(1) as usize;
        let start = self.scrollback.len().saturating_sub(visible);
        let mut lines: Vec<Line> = self.scrollback[start..].to_vec();
        let cursor = if ctx.focused() { "█" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                self.prompt(),
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.input.clone()),
            Span::styled(cursor, Style::default().fg(theme::accent())),
        ]));
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ContentContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                true
            }
            KeyCode::Backspace => {
                self.input.pop();
                true
            }
            KeyCode::Enter => {
                self.submit();
                true
            }
            _ => false,
        }
    }

    fn take_requests(&mut self) -> Vec<AppRequest> {
        std::mem::take(&mut self.requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn type_line(app: &mut TerminalApp, text: &str) {
        let ctx = ContentContext::new(true);
        for c in text.chars() {
            app.handle_event(
                &Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                &ctx,
            );
        }
        app.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            &ctx,
        );
    }

    #[test]
    fn hack_requests_a_breach_window() {
        let mut app = TerminalApp::new();
        type_line(&mut app, "hack");
        assert_eq!(
            app.take_requests(),
            vec![AppRequest::OpenWindow(AppKind::Breach)]
        );
        // drained
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn unknown_command_reports_not_found() {
        let mut app = TerminalApp::new();
        type_line(&mut app, "metasploit");
        let last = app.scrollback.last().unwrap();
        assert!(format!("{last:?}").contains("command not found"));
    }

    #[test]
    fn clear_wipes_scrollback() {
        let mut app = TerminalApp::new();
        type_line(&mut app, "ls");
        type_line(&mut app, "clear");
        assert!(app.scrollback.is_empty());
    }
}
