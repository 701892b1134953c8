//! Reel windows. Each window shows the symbol above the payline, the
//! payline symbol and the one below, scrolled by the reel position.

use crate::core::constants::{SLOT_HEIGHT, VISIBLE_SLOTS};
use crate::machine::SlotMachine;
use crate::symbols::SymbolSet;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_reels(frame: &mut Frame, area: Rect, machine: &SlotMachine) {
    let positions = machine.reel_positions();
    if positions.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = positions
        .iter()
        .map(|_| Constraint::Ratio(1, positions.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let spinning = machine.spin_disabled();
    for (chunk, position) in chunks.iter().zip(positions) {
        render_reel(frame, *chunk, machine.symbols(), position, spinning);
    }
}

fn render_reel(frame: &mut Frame, area: Rect, symbols: &SymbolSet, position: f64, spinning: bool) {
    let border_color = if spinning {
        Color::DarkGray
    } else {
        Color::Magenta
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cell_rows = SLOT_HEIGHT as i64;
    let window_rows = VISIBLE_SLOTS as i64 * cell_rows;
    let shown_rows = window_rows.min(inner.height as i64);
    let top_pad = (inner.height as i64 - window_rows).max(0) / 2;

    // Strip row sitting at the top of the payline cell
    let offset = (-position).round() as i64;

    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    for row in 0..shown_rows {
        let strip_row = offset + row - cell_rows;
        let cell = strip_row.div_euclid(cell_rows);
        let row_in_cell = strip_row.rem_euclid(cell_rows);
        let on_payline = row >= cell_rows && row < 2 * cell_rows;

        if row_in_cell != cell_rows / 2 {
            lines.push(Line::from(""));
            continue;
        }

        let Some(symbol) = symbols.get(symbols.symbol_at_cell(cell)) else {
            lines.push(Line::from(""));
            continue;
        };
        let (r, g, b) = symbol.tint;
        let mut style = Style::default().fg(Color::Rgb(r, g, b));
        if on_payline {
            style = style.add_modifier(Modifier::BOLD);
        } else {
            style = style.add_modifier(Modifier::DIM);
        }

        let mut spans = Vec::new();
        if on_payline {
            spans.push(Span::styled("▶ ", Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(format!("{} {}", symbol.glyph, symbol.name), style));
        if on_payline {
            spans.push(Span::styled(" ◀", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
