//! Key handling for the slot machine screen.
//!
//! Keys map to UI-agnostic `SlotsInput` actions first so the dispatch logic
//! can be tested without a terminal.

use crate::audio::AudioSink;
use crate::core::constants::BET_STEP;
use crate::machine::SlotMachine;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;

/// Player intents on the slot machine screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotsInput {
    Spin,
    NewGame,
    /// Append a digit to the bet field.
    BetDigit(u8),
    /// Drop the last digit of the bet field.
    BetBackspace,
    BetUp,
    BetDown,
    Quit,
    Other,
}

/// Result of handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn map_key(key: KeyEvent) -> SlotsInput {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return SlotsInput::Other;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => SlotsInput::Spin,
        KeyCode::Char('n') | KeyCode::Char('N') => SlotsInput::NewGame,
        KeyCode::Char(c) if c.is_ascii_digit() => SlotsInput::BetDigit(c as u8 - b'0'),
        KeyCode::Backspace => SlotsInput::BetBackspace,
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => SlotsInput::BetUp,
        KeyCode::Down | KeyCode::Char('-') => SlotsInput::BetDown,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => SlotsInput::Quit,
        _ => SlotsInput::Other,
    }
}

/// The bet an edit would produce, before validation.
///
/// The bet field behaves like a controlled numeric text box: the edit is
/// applied to the current bet's digits and the ledger decides whether the
/// new value sticks.
pub fn edited_bet(current: u64, coins: u64, input: SlotsInput) -> Option<u64> {
    match input {
        SlotsInput::BetDigit(d) => current.checked_mul(10)?.checked_add(d as u64),
        SlotsInput::BetBackspace => Some(current / 10),
        SlotsInput::BetUp => Some(current.saturating_add(BET_STEP).min(coins)),
        SlotsInput::BetDown => Some(current.saturating_sub(BET_STEP).max(1)),
        _ => None,
    }
}

pub fn handle_input<R: Rng>(
    machine: &mut SlotMachine,
    input: SlotsInput,
    rng: &mut R,
    audio: &mut dyn AudioSink,
) -> InputResult {
    match input {
        SlotsInput::Quit => return InputResult::Quit,
        SlotsInput::Spin => {
            machine.spin(rng, audio);
        }
        SlotsInput::NewGame => {
            machine.new_game();
        }
        SlotsInput::Other => {}
        edit => {
            if let Some(amount) = edited_bet(machine.bet(), machine.coins(), edit) {
                machine.set_bet(amount);
            }
        }
    }
    InputResult::Continue
}
