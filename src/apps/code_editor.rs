//! Read-only code viewer with line numbers and a movable cursor line.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

const FILE_NAME: &str = "cascade.rs";

const SOURCE: &str = indoc! {r#"
    /// Diagonal cascade for newly opened windows.
    ///
    /// Offsets wrap so the stagger never walks off screen,
    /// no matter how many windows the user opens.
    pub fn cascade_origin(open_count: usize) -> Point {
        let n = open_count as i32;
        Point {
            x: ORIGIN_X + (n * STEP_X) % WRAP_X,
            y: ORIGIN_Y + (n * STEP_Y) % WRAP_Y,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn three_windows_three_spots() {
            let spots: Vec<_> = (0..3).map(cascade_origin).collect();
            assert_ne!(spots[0], spots[1]);
            assert_ne!(spots[1], spots[2]);
        }
    }
"#};

pub struct CodeEditorApp {
    cursor: usize,
    scroll: usize,
}

impl CodeEditorApp {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll: 0,
        }
    }

    fn line_count() -> usize {
        SOURCE.lines().count()
    }
}

impl Default for CodeEditorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for CodeEditorApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ContentContext) {
        if area.height < 2 {
            return;
        }
        let body_height = area.height as usize - 1;
        // keep the cursor in view
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + body_height {
            self.scroll = self.cursor + 1 - body_height;
        }
        let lines: Vec<Line> = SOURCE
            .lines()
            .enumerate()
            .skip(self.scroll)
            .take(body_height)
            .map(|(number, text)| {
                let gutter = Span::styled(
                    format!("{:>3} ", number + 1),
                    Style::default().fg(theme::menu_dim_fg()),
                );
                let body_style = if number == self.cursor && ctx.focused() {
                    Style::default().bg(theme::taskbar_active_bg())
                } else if text.trim_start().starts_with("//") {
                    Style::default().fg(theme::menu_dim_fg())
                } else {
                    Style::default().fg(theme::content_fg())
                };
                Line::from(vec![gutter, Span::styled(text, body_style)])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
        frame.set_string(
            area.x,
            area.y + area.height - 1,
            &format!("{FILE_NAME}  [read-only]  ln {}", self.cursor + 1),
            Style::default().fg(theme::accent()),
        );
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
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(Self::line_count() - 1);
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = Self::line_count() - 1;
                true
            }
            _ => false,
        }
    }
}
