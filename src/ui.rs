//! UiFrame: a thin wrapper over `ratatui::Frame` that clips every draw call
//! to the visible buffer.
//!
//! Window geometry on this desktop is user-controlled (a drag can push a
//! frame partially past the viewport edge), so components routinely compute
//! rectangles that overhang the terminal. Writing out of bounds into the
//! underlying `Buffer` panics; routing all drawing through `UiFrame` keeps
//! components free of per-call bounds checks.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{StatefulWidget, Widget};

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Build a `UiFrame` from raw parts; used by tests that render into an
    /// offscreen buffer.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    pub fn render_stateful_widget<W>(&mut self, widget: W, area: Rect, state: &mut W::State)
    where
        W: StatefulWidget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer, state);
        }
    }

    /// Paint a solid region: blanks symbols and applies `style`.
    pub fn fill(&mut self, area: Rect, style: Style) {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }

    /// Write a string clipped to this frame, truncating at the right edge.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        safe_set_string(self.buffer, self.area, x, y, text, style);
    }
}

pub fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_string_clips_at_right_edge() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 4,
            height: 1,
        };
        let mut buffer = Buffer::empty(area);
        safe_set_string(&mut buffer, area, 2, 0, "abcdef", Style::default());
        assert_eq!(buffer.cell((2, 0)).unwrap().symbol(), "a");
        assert_eq!(buffer.cell((3, 0)).unwrap().symbol(), "b");
    }

    #[test]
    fn set_string_outside_bounds_is_noop() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 4,
            height: 1,
        };
        let mut buffer = Buffer::empty(area);
        safe_set_string(&mut buffer, area, 9, 0, "x", Style::default());
        safe_set_string(&mut buffer, area, 0, 5, "x", Style::default());
        for x in 0..4 {
            assert_eq!(buffer.cell((x, 0)).unwrap().symbol(), " ");
        }
    }

    #[test]
    fn fill_clips_overhanging_rect() {
        let frame_area = Rect {
            x: 0,
            y: 0,
            width: 3,
            height: 2,
        };
        let mut buffer = Buffer::empty(frame_area);
        let mut frame = UiFrame::from_parts(frame_area, &mut buffer);
        frame.fill(
            Rect {
                x: 2,
                y: 0,
                width: 10,
                height: 10,
            },
            Style::default(),
        );
    }
}
