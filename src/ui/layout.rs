//! Screen layout and the shared status bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas of the slot machine screen.
pub struct SlotsLayout {
    /// Coin and bet line.
    pub header: Rect,
    /// The three reel windows.
    pub reels: Rect,
    /// Status message + controls (2 lines).
    pub status_bar: Rect,
    /// Right-hand panel with its own border.
    pub info_panel: Rect,
}

/// Split the screen.
///
/// ```text
/// ┌─ Slots ─────────────────────────┬─ Info ──────┐
/// │ COINS: 10000   BET: 100         │             │
/// │  ┌──────┐ ┌──────┐ ┌──────┐     │             │
/// │  │ reel │ │ reel │ │ reel │     │             │
/// │  └──────┘ └──────┘ └──────┘     │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_slots_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> SlotsLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(11),
            Constraint::Length(2),
        ])
        .split(h_chunks[0]);

    SlotsLayout {
        header: v_chunks[0],
        reels: v_chunks[1],
        status_bar: v_chunks[2],
        info_panel: h_chunks[1],
    }
}

/// A key hint in the status bar. Disabled controls render dimmed.
pub struct Control<'a> {
    pub key: &'a str,
    pub action: &'a str,
    pub enabled: bool,
}

/// Render the status bar: message on line 1, controls on line 2.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[Control],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, control) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let (key_color, action_color) = if control.enabled {
                (Color::White, Color::Gray)
            } else {
                (Color::DarkGray, Color::DarkGray)
            };
            spans.push(Span::styled(control.key, Style::default().fg(key_color)));
            spans.push(Span::styled(
                format!(" {}", control.action),
                Style::default().fg(action_color),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}
