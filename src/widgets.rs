//! Clickable UI components for the clicker screen.
//!
//! Each component draws its lines and registers the matching click targets
//! in the same call, so a row that shows a key hint is always tappable.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

struct Tab {
    label: String,
    style: Style,
    action_id: u16,
}

/// Single-row panel switcher used by the narrow layout.
pub struct TabBar<'a> {
    separator: &'a str,
    tabs: Vec<Tab>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            separator,
            tabs: Vec::new(),
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push(Tab {
            label: format!(" {} ", label.into()),
            style,
            action_id,
        });
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let separator_width = Line::from(self.separator).width() as u16;
        let widths: Vec<(u16, u16)> = self
            .tabs
            .iter()
            .map(|t| (Line::from(t.label.as_str()).width() as u16, t.action_id))
            .collect();

        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (i, tab) in self.tabs.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(tab.label, tab.style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);

        cs.register_tab_targets(
            &widths,
            separator_width,
            area.x,
            area.y,
            area.width,
            area.height.max(1),
        );
    }
}

/// Lines for a bordered panel, each optionally bound to an action.
///
/// Rows are derived from line order when targets are registered, so adding
/// a line above a row moves its target with it.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    actions: Vec<Option<u16>>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a line that is not clickable.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
        self.actions.push(None);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.lines.push(line);
        self.actions.push(Some(action_id));
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register a full-width target for every row a clickable line covers.
    ///
    /// `area` is the outer rect of a `Borders::ALL` block. `wrap` must match
    /// the paragraph's wrap setting; wrapped lines take several rows.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, wrap: bool) {
        let wrap_width = if wrap {
            area.width.saturating_sub(2) as usize
        } else {
            0
        };
        let end = area.y + area.height.saturating_sub(1);
        let mut row = area.y + 1;

        for (line, action) in self.lines.iter().zip(&self.actions) {
            if row >= end {
                break;
            }
            let height = visual_rows(line, wrap_width);
            if let Some(action_id) = *action {
                for r in row..(row + height).min(end) {
                    cs.add_row_target(area, r, action_id);
                }
            }
            row += height;
        }
    }
}

impl Default for ClickableList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows a line occupies at `wrap_width` (0 = no wrapping).
fn visual_rows(line: &Line, wrap_width: usize) -> u16 {
    if wrap_width == 0 {
        return 1;
    }
    line.width().div_ceil(wrap_width).max(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::Terminal;

    #[test]
    fn targets_skip_border_and_plain_lines() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("buy cursor"), 101);
        cl.push_clickable(Line::from("buy worker"), 102);
        cl.push(Line::from("footer"));

        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 5, 80, 10), &mut cs, false);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 7), Some(101));
        assert_eq!(cs.hit_test(10, 8), Some(102));
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn rows_past_bottom_border_are_dropped() {
        let mut cl = ClickableList::new();
        for i in 0..20 {
            cl.push_clickable(Line::from(format!("row {}", i)), 200 + i);
        }
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 80, 5), &mut cs, false);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(10, 3), Some(202));
        assert_eq!(cs.hit_test(10, 4), None);
    }

    #[test]
    fn wrapped_line_pushes_later_rows_down() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("12345678901234567890")); // 2 rows at width 10
        cl.push_clickable(Line::from("item"), 7);

        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 12, 10), &mut cs, true);

        assert_eq!(cs.hit_test(5, 1), None);
        assert_eq!(cs.hit_test(5, 2), None);
        assert_eq!(cs.hit_test(5, 3), Some(7));
    }

    #[test]
    fn wrapped_clickable_covers_every_row() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("123456789012345678901234567890"), 42);

        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 12, 10), &mut cs, true);

        assert_eq!(cs.hit_test(5, 1), Some(42));
        assert_eq!(cs.hit_test(5, 3), Some(42));
        assert_eq!(cs.hit_test(5, 4), None);
    }

    #[test]
    fn unwrapped_long_line_takes_one_row() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("123456789012345678901234567890"), 1);
        cl.push_clickable(Line::from("next"), 2);

        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 12, 10), &mut cs, false);

        assert_eq!(cs.hit_test(5, 1), Some(1));
        assert_eq!(cs.hit_test(5, 2), Some(2));
    }

    #[test]
    fn empty_line_still_takes_a_row_when_wrapping() {
        assert_eq!(visual_rows(&Line::from(""), 10), 1);
        assert_eq!(visual_rows(&Line::from("12345678901"), 10), 2);
    }

    #[test]
    fn tab_bar_registers_each_tab() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        let mut cs = ClickState::new();
        terminal
            .draw(|f| {
                TabBar::new(" │ ")
                    .tab("Upgrades", Style::default(), 10)
                    .tab("Multipliers", Style::default(), 11)
                    .render(f, f.area(), &mut cs);
            })
            .unwrap();

        // " Upgrades " is 10 wide; the separator splits 1/2
        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(0, 0), Some(10));
        assert_eq!(cs.hit_test(10, 0), Some(10));
        assert_eq!(cs.hit_test(11, 0), Some(11));
        assert_eq!(cs.hit_test(39, 0), Some(11));
    }
}
