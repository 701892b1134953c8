//! Terminal rendering of the slot machine screen.

pub mod hud;
pub mod layout;
pub mod reel_view;

use crate::audio::CueFeed;
use crate::machine::SlotMachine;
use layout::{create_slots_layout, render_status_bar, Control};
use ratatui::{style::Color, Frame};

pub fn draw_slots(frame: &mut Frame, machine: &SlotMachine, cues: &CueFeed) {
    let area = frame.size();
    let layout = create_slots_layout(frame, area, " Slots ", Color::Magenta, 24);

    hud::render_header(frame, layout.header, machine);
    reel_view::render_reels(frame, layout.reels, machine);
    hud::render_info_panel(frame, layout.info_panel, machine, cues);

    let status_color = match machine.last_round() {
        Some(round) if round.is_win() => Color::Green,
        Some(_) => Color::Red,
        None => Color::White,
    };
    let editable = !machine.spin_disabled();
    render_status_bar(
        frame,
        layout.status_bar,
        &machine.status_text(),
        status_color,
        &[
            Control {
                key: "[Space]",
                action: "Spin",
                enabled: machine.can_spin(),
            },
            Control {
                key: "[0-9/Bksp/↑↓]",
                action: "Bet",
                enabled: editable,
            },
            Control {
                key: "[N]",
                action: "New Game",
                enabled: machine.can_new_game(),
            },
            Control {
                key: "[Q]",
                action: "Quit",
                enabled: true,
            },
        ],
    );
}
