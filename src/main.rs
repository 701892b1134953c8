use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use slots::audio::CueFeed;
use slots::core::{SlotsConfig, CONFIG_FILE, CUE_FEED_LEN, REALTIME_FRAME_MS};
use slots::input::{handle_input, map_key, InputResult};
use slots::ledger::Ledger;
use slots::machine::SlotMachine;
use slots::store::{FileStore, KeyValueStore, MemoryStore};
use slots::ui::draw_slots;
use slots::utils::{build_info, logging, persistence};
use std::io;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Reset,
    Config,
    Version,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CliArgs {
    command: Command,
    no_save: bool,
}

/// Read every argument before anything runs, so flags apply wherever they
/// appear relative to the command.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        command: Command::Play,
        no_save: false,
    };
    for arg in args {
        match arg.as_str() {
            "reset" => parsed.command = Command::Reset,
            "config" => parsed.command = Command::Config,
            "--no-save" => parsed.no_save = true,
            "--version" | "-v" => parsed.command = Command::Version,
            "--help" | "-h" => parsed.command = Command::Help,
            other => return Err(other.to_string()),
        }
    }
    Ok(parsed)
}

fn print_help() {
    println!("Slots - Terminal Slot Machine\n");
    println!("Usage: slots [command] [--no-save]\n");
    println!("Commands:");
    println!("  reset      Restore the starting balance");
    println!("  config     Write the current settings to ~/.slots/config.json");
    println!("  --no-save  Play without touching the saved balance");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
    println!("\nSet RUST_LOG=debug to log to ~/.slots/slots.log");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(unknown) => {
            eprintln!("Unknown command: {}", unknown);
            eprintln!("Run 'slots --help' for usage.");
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Play => {}
        Command::Version => {
            println!(
                "slots {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            );
            return Ok(());
        }
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Reset if cli.no_save => {
            println!("Nothing to reset with --no-save; the saved balance is untouched.");
            return Ok(());
        }
        Command::Reset => {
            logging::init_file_logger().ok();
            if let Err(e) = reset_balance() {
                eprintln!("Could not reset balance: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
        Command::Config => match persistence::save_json(CONFIG_FILE, &SlotsConfig::load()) {
            Ok(path) => {
                println!("Wrote {}", path.display());
                return Ok(());
            }
            Err(e) => {
                eprintln!("Could not write config: {}", e);
                std::process::exit(1);
            }
        },
    }

    if let Err(e) = logging::init_file_logger() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = SlotsConfig::load();
    let mut machine = SlotMachine::new(&config, open_store(cli.no_save));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut machine);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn open_store(no_save: bool) -> Box<dyn KeyValueStore> {
    if no_save {
        return Box::new(MemoryStore::new());
    }
    match FileStore::new() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("balance will not be saved: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn reset_balance() -> io::Result<()> {
    let store = FileStore::new().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let mut ledger = Ledger::initialize(Box::new(store), SlotsConfig::load().ledger_rules());
    if ledger.reset() {
        println!("Balance reset to {} coins.", ledger.coins());
    } else {
        println!("Balance is already {} coins.", ledger.coins());
    }
    Ok(())
}

/// Draw, poll input for one frame, advance the machine by the time that
/// actually passed.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    machine: &mut SlotMachine,
) -> io::Result<()> {
    let mut cues = CueFeed::new(CUE_FEED_LEN);
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_slots(frame, machine, &cues))?;

        if event::poll(Duration::from_millis(REALTIME_FRAME_MS))? {
            if let Event::Key(key_event) = event::read()? {
                let input = map_key(key_event);
                if handle_input(machine, input, &mut rng, &mut cues) == InputResult::Quit {
                    break;
                }
            }
        }

        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        machine.tick(dt_ms, &mut cues);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_plays_with_saving() {
        let cli = parse_args(&[]).unwrap();
        assert_eq!(cli.command, Command::Play);
        assert!(!cli.no_save);
    }

    #[test]
    fn test_no_save_applies_on_either_side_of_reset() {
        for list in [["--no-save", "reset"], ["reset", "--no-save"]] {
            let cli = parse_args(&args(&list)).unwrap();
            assert_eq!(cli.command, Command::Reset);
            assert!(cli.no_save);
        }
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert_eq!(
            parse_args(&args(&["reset", "--bogus"])),
            Err("--bogus".to_string())
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(&args(&["-v"])).unwrap().command, Command::Version);
        assert_eq!(parse_args(&args(&["--help"])).unwrap().command, Command::Help);
    }
}
