//! Coin/bet header and the info panel.

use crate::audio::CueFeed;
use crate::machine::SlotMachine;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// "COINS: n   BET: m". The bet reads as an input field while editable.
pub fn render_header(frame: &mut Frame, area: Rect, machine: &SlotMachine) {
    let title = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let bet_style = if machine.spin_disabled() {
        Style::default().fg(Color::DarkGray)
    } else {
        title.add_modifier(Modifier::UNDERLINED)
    };

    let line = Line::from(vec![
        Span::styled(format!("COINS: {}", machine.shown_coins()), title),
        Span::raw("      "),
        Span::styled("BET: ", title),
        Span::styled(machine.bet().to_string(), bet_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Payout rules and the most recent sound cues.
pub fn render_info_panel(frame: &mut Frame, area: Rect, machine: &SlotMachine, cues: &CueFeed) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("Payout", heading)),
        Line::from(Span::styled(
            format!("3 alike: {}x bet", machine.payout_multiplier()),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled("Sound", heading)),
    ];

    for entry in cues.entries() {
        let (marker, color) = if entry.started {
            ("♪", Color::Green)
        } else {
            ("■", Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, entry.cue.label()),
            Style::default().fg(color),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
