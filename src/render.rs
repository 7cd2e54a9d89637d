//! Terminal view: keeps the latest snapshot and draws it with ratatui.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::actions::{BUY_MULTIPLIER_BASE, BUY_UPGRADE_BASE, CLICK, TAB_MULTIPLIERS, TAB_UPGRADES};
use crate::economy::{MultiplierEntry, Snapshot, UpgradeEntry};
use crate::input::{is_narrow_layout, ClickState};
use crate::view::View;
use crate::widgets::{ClickableList, TabBar};

/// Key shown next to each upgrade, by catalog index.
pub const UPGRADE_KEYS: &[char] = &['1', '2', '3', '4'];
/// Key shown next to each multiplier, by catalog index.
pub const MULTIPLIER_KEYS: &[char] = &['q', 'w', 'e', 'r'];

/// How long the "+N" click feedback stays on screen.
pub const GAIN_FEEDBACK_MS: f64 = 1000.0;

#[derive(Default)]
pub struct TerminalView {
    pub snapshot: Option<Snapshot>,
    /// Frame clock in ms, advanced by the draw loop.
    pub now_ms: f64,
    /// `(amount, now_ms)` of the most recent click.
    pub last_gain: Option<(f64, f64)>,
    /// Narrow layout only: multipliers panel instead of upgrades.
    pub show_multipliers: bool,
}

impl TerminalView {
    /// Gain of the last click, while its feedback is still on screen.
    pub fn visible_gain(&self) -> Option<f64> {
        self.last_gain
            .filter(|&(_, at)| self.now_ms - at < GAIN_FEEDBACK_MS)
            .map(|(gain, _)| gain)
    }
}

impl View for TerminalView {
    fn score_changed(&mut self, gained: f64) {
        self.last_gain = Some((gained, self.now_ms));
    }

    fn present(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
    }
}

pub fn render(view: &TerminalView, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let snap = match &view.snapshot {
        Some(s) => s,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // score header
            Constraint::Length(4), // click button
            Constraint::Min(5),    // catalog
            Constraint::Length(3), // help
        ])
        .split(area);

    let narrow = is_narrow_layout(area.width);
    render_header(snap, f, chunks[0]);
    render_click_button(view, snap, f, chunks[1], click_state);
    if narrow {
        render_narrow_catalog(view, snap, f, chunks[2], click_state);
    } else {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);
        render_upgrades(snap, f, halves[0], click_state);
        render_multipliers(snap, f, halves[1], click_state);
    }
    render_help(f, chunks[3], narrow);
}

fn render_header(snap: &Snapshot, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} 💰", snap.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}/sec", snap.per_second),
            Style::default().fg(Color::Green),
        ),
    ]);
    let header = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Incremental Clicker "),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_click_button(
    view: &TerminalView,
    snap: &Snapshot,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [C] CLICK ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  +{} per click", snap.click_power),
                Style::default().fg(Color::White),
            ),
        ]),
        CLICK,
    );
    let feedback = match view.visible_gain() {
        Some(gain) => Line::from(Span::styled(
            format!(" +{}", gain),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(""),
    };
    cl.push_clickable(feedback, CLICK);

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, false);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(widget, area);
}

/// Narrow screens: tab bar plus one catalog panel sized to its content.
fn render_narrow_catalog(
    view: &TerminalView,
    snap: &Snapshot,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let cl = if view.show_multipliers {
        multiplier_lines(snap)
    } else {
        upgrade_lines(snap)
    };
    let inner_width = area.width.saturating_sub(2);
    let content_rows = Paragraph::new(cl.lines().to_vec())
        .wrap(Wrap { trim: false })
        .line_count(inner_width) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length((content_rows + 2).max(3)),
            Constraint::Min(0),
        ])
        .split(area);

    let tab_style = |active: bool, color: Color| {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        }
    };
    {
        let mut cs = click_state.borrow_mut();
        TabBar::new(" │ ")
            .tab("Upgrades", tab_style(!view.show_multipliers, Color::Green), TAB_UPGRADES)
            .tab("Multipliers", tab_style(view.show_multipliers, Color::Magenta), TAB_MULTIPLIERS)
            .render(f, chunks[0], &mut cs);
    }

    let title = if view.show_multipliers {
        " Multipliers "
    } else {
        " Upgrades "
    };
    render_catalog_panel(cl, title, Color::Cyan, f, chunks[1], click_state, true);
}

fn render_upgrades(snap: &Snapshot, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    render_catalog_panel(upgrade_lines(snap), " Upgrades ", Color::Green, f, area, click_state, false);
}

fn render_multipliers(snap: &Snapshot, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    render_catalog_panel(
        multiplier_lines(snap),
        " Multipliers ",
        Color::Magenta,
        f,
        area,
        click_state,
        false,
    );
}

fn render_catalog_panel(
    cl: ClickableList<'static>,
    title: &'static str,
    color: Color,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    wrap: bool,
) {
    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, wrap);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);
    let mut widget = Paragraph::new(cl.into_lines()).block(block);
    if wrap {
        widget = widget.wrap(Wrap { trim: false });
    }
    f.render_widget(widget, area);
}

fn entry_styles(affordable: bool) -> (Style, Style) {
    if affordable {
        (
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    }
}

/// Unlocked upgrades, two lines each, both bound to the purchase action.
fn upgrade_lines(snap: &Snapshot) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    let unlocked: Vec<(usize, &UpgradeEntry)> = snap
        .upgrades
        .iter()
        .enumerate()
        .filter(|(_, u)| u.unlocked)
        .collect();

    for (i, u) in unlocked {
        let action = BUY_UPGRADE_BASE + i as u16;
        let (name_style, cost_style) = entry_styles(u.affordable);
        let key = UPGRADE_KEYS.get(i).copied().unwrap_or(' ');
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!(" [{}] ", key), Style::default().fg(Color::Cyan)),
                Span::styled(u.name, name_style),
                Span::styled(format!("  {} 💰", u.cost), cost_style),
            ]),
            action,
        );
        let efficiency = match u.efficiency {
            Some(e) => format!(" | Efficiency: {:.4}", e),
            None => String::new(),
        };
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     {} | Owned: {}{}", u.rate, u.count, efficiency),
                Style::default().fg(Color::DarkGray),
            )),
            action,
        );
    }
    cl
}

/// Visible multipliers; an empty panel explains how to reveal them.
fn multiplier_lines(snap: &Snapshot) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    let visible: Vec<(usize, &MultiplierEntry)> = snap
        .multipliers
        .iter()
        .enumerate()
        .filter(|(_, m)| m.visible)
        .collect();

    if visible.is_empty() {
        cl.push(Line::from(Span::styled(
            " Buy an upgrade to reveal its multiplier.",
            Style::default().fg(Color::DarkGray),
        )));
        return cl;
    }

    for (i, m) in visible {
        let action = BUY_MULTIPLIER_BASE + i as u16;
        let (name_style, cost_style) = entry_styles(m.affordable);
        let key = MULTIPLIER_KEYS.get(i).copied().unwrap_or(' ');
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!(" [{}] ", key.to_ascii_uppercase()), Style::default().fg(Color::Cyan)),
                Span::styled(m.name, name_style),
                Span::styled(format!("  {} 💰", m.cost), cost_style),
            ]),
            action,
        );
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     {} | Owned: {}", m.rate, m.count),
                Style::default().fg(Color::DarkGray),
            )),
            action,
        );
    }
    cl
}

/// Key help; panel switching only matters when one panel is shown at a time.
fn help_text(narrow: bool) -> &'static str {
    if narrow {
        "C/Space: click · 1-4: upgrades · Q-R: multipliers · U/M: panels"
    } else {
        "C/Space: click · 1-4: upgrades · Q-R: multipliers"
    }
}

fn render_help(f: &mut Frame, area: Rect, narrow: bool) {
    let help = Paragraph::new(Line::from(Span::styled(
        help_text(narrow),
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}
