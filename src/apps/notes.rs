//! Notes app: embedded markdown rendered to styled lines.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use indoc::indoc;
use pulldown_cmark::{Event as MdEvent, Options, Parser, Tag, TagEnd};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme;
use crate::ui::UiFrame;

use super::{AppContent, ContentContext};

const NOTES_MD: &str = indoc! {"
    # engagement notes

    Everything on this machine is **staged**. The tools render canned or
    randomized output and never touch a real target.

    ## todo

    - polish the breach cutscene timing
    - add more canned commands to the terminal
    - write up the window manager design

    ## reminders

    Passwords for the login screen are the classic lab defaults. Do not
    reuse them anywhere that matters — use `a real password manager`.
"};

/// Flatten a markdown document into styled terminal lines. Headings get the
/// accent color, inline code goes yellow, list items get a dash. Block
/// structure beyond that is ignored; notes are short.
fn render_markdown(raw: &str) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(raw, Options::empty());
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut bold = false;
    let mut heading = false;

    for event in parser {
        match event {
            MdEvent::Start(Tag::Strong) => bold = true,
            MdEvent::End(TagEnd::Strong) => bold = false,
            MdEvent::Start(Tag::Heading { .. }) => heading = true,
            MdEvent::End(TagEnd::Heading(_)) => {
                heading = false;
                lines.push(Line::from(std::mem::take(&mut current)));
                lines.push(Line::raw(""));
            }
            MdEvent::Start(Tag::Item) => current.push(Span::raw("- ")),
            MdEvent::End(TagEnd::Item) => {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            MdEvent::End(TagEnd::Paragraph) => {
                lines.push(Line::from(std::mem::take(&mut current)));
                lines.push(Line::raw(""));
            }
            MdEvent::Text(text) => {
                let mut style = Style::default();
                if heading {
                    style = style.fg(theme::accent()).add_modifier(Modifier::BOLD);
                } else if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                current.push(Span::styled(text.to_string(), style));
            }
            MdEvent::Code(text) => {
                current.push(Span::styled(
                    text.to_string(),
                    Style::default().fg(theme::warning()),
                ));
            }
            MdEvent::SoftBreak => current.push(Span::raw(" ")),
            MdEvent::HardBreak => lines.push(Line::from(std::mem::take(&mut current))),
            _ => {}
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

pub struct NotesApp {
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl NotesApp {
    pub fn new() -> Self {
        Self {
            lines: render_markdown(NOTES_MD),
            scroll: 0,
        }
    }
}

impl Default for NotesApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContent for NotesApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ContentContext) {
        let lines: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll as usize)
            .cloned()
            .collect();
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
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.lines.len() as u16);
                true
            }
            _ => false,
        }
    }
}
