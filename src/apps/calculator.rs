//! Keyboard-driven four-function calculator.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Op::Add => Some(lhs + rhs),
            Op::Sub => Some(lhs - rhs),
            Op::Mul => Some(lhs * rhs),
            Op::Div => (rhs != 0.0).then(|| lhs / rhs),
        }
    }

    fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

pub struct CalculatorApp {
    entry: String,
    stored: Option<(f64, Op)>,
    error: bool,
}

impl CalculatorApp {
    pub fn new() -> Self {
        Self {
            entry: String::new(),
            stored: None,
            error: false,
        }
    }

    fn current(&self) -> f64 {
        self.entry.parse().unwrap_or(0.0)
    }

    fn display(&self) -> String {
        if self.error {
            return "error".to_string();
        }
        if self.entry.is_empty() {
            "0".to_string()
        } else {
            self.entry.clone()
        }
    }

    fn press_digit(&mut self, c: char) {
        if self.error {
            self.clear();
        }
        if c == '.' && self.entry.contains('.') {
            return;
        }
        self.entry.push(c);
    }

    fn press_op(&mut self, op: Op) {
        if self.error {
            return;
        }
        self.press_equals();
        if !self.error {
            self.stored = Some((self.current(), op));
            self.entry.clear();
        }
    }

    fn press_equals(&mut self) {
        let Some((lhs, op)) = self.stored.take() else {
            return;
        };
        match op.apply(lhs, self.current()) {
            Some(result) => {
                self.entry = format_result(result);
            }
            None => {
                self.error = true;
                self.entry.clear();
            }
        }
    }

    fn clear(&mut self) {
        self.entry.clear();
        self.stored = None;
        self.error = false;
    }
}

fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for CalculatorApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ContentContext) {
        let pending = self
            .stored
            .map(|(lhs, op)| format!("{} {}", format_result(lhs), op.symbol()))
            .unwrap_or_default();
        let lines = vec![
            Line::styled(pending, Style::default().fg(theme::menu_dim_fg())),
            Line::styled(
                self.display(),
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                "digits  + - * /  enter(=)  c(clear)",
                Style::default().fg(theme::menu_dim_fg()),
            ),
        ];
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
            KeyCode::Char(c @ ('0'..='9' | '.')) => {
                self.press_digit(c);
                true
            }
            KeyCode::Char('+') => {
                self.press_op(Op::Add);
                true
            }
            KeyCode::Char('-') => {
                self.press_op(Op::Sub);
                true
            }
            KeyCode::Char('*') => {
                self.press_op(Op::Mul);
                true
            }
            KeyCode::Char('/') => {
                self.press_op(Op::Div);
                true
            }
            KeyCode::Char('=') | KeyCode::Enter => {
                self.press_equals();
                true
            }
            KeyCode::Char('c') => {
                self.clear();
                true
            }
            KeyCode::Backspace => {
                self.entry.pop();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(app: &mut CalculatorApp, keys: &str) {
        for c in keys.chars() {
            match c {
                '=' => app.press_equals(),
                '+' => app.press_op(Op::Add),
                '-' => app.press_op(Op::Sub),
                '*' => app.press_op(Op::Mul),
                '/' => app.press_op(Op::Div),
                other => app.press_digit(other),
            }
        }
    }

    #[test]
    fn chained_arithmetic() {
        let mut app = CalculatorApp::new();
        feed(&mut app, "12+30=");
        assert_eq!(app.display(), "42");
        feed(&mut app, "*2=");
        assert_eq!(app.display(), "84");
    }

    #[test]
    fn divide_by_zero_shows_error_until_cleared() {
        let mut app = CalculatorApp::new();
        feed(&mut app, "5/0=");
        assert_eq!(app.display(), "error");
        app.clear();
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn single_decimal_point_only() {
        let mut app = CalculatorApp::new();
        feed(&mut app, "1.2.3");
        assert_eq!(app.display(), "1.23");
    }
}
