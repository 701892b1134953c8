//! Integration test: ledger balance persistence
//!
//! Runs the ledger and the machine against the checksummed file store and
//! against a store that cannot be written, and checks the balance survives
//! restarts (or, when it cannot, that play carries on regardless).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slots::audio::NullAudio;
use slots::core::COINS_KEY;
use slots::ledger::{Ledger, LedgerRules};
use slots::store::{FileStore, KeyValueStore};
use slots::{SlotMachine, SlotsConfig};
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "slots_ledger_{}_{}.dat",
        name,
        std::process::id()
    ));
    fs::remove_file(&path).ok();
    path
}

/// Every spin wins: the streak threshold is already met at zero losses.
fn always_win() -> SlotsConfig {
    SlotsConfig {
        max_defeat: 0,
        ..SlotsConfig::default()
    }
}

fn play_round(machine: &mut SlotMachine, rng: &mut ChaCha8Rng) {
    assert!(machine.spin(rng, &mut NullAudio));
    for _ in 0..1000 {
        if machine.tick(16, &mut NullAudio).is_some() {
            return;
        }
    }
    panic!("spin never finished");
}

#[test]
fn test_balance_survives_restart() {
    let path = temp_path("restart");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut machine = SlotMachine::new(&always_win(), Box::new(FileStore::at(&path)));
    play_round(&mut machine, &mut rng);
    assert_eq!(machine.coins(), 11_400);
    drop(machine);

    let restarted = SlotMachine::new(&SlotsConfig::default(), Box::new(FileStore::at(&path)));
    assert_eq!(restarted.coins(), 11_400);
    assert_eq!(restarted.bet(), 100);

    fs::remove_file(&path).ok();
}

#[test]
fn test_stake_is_saved_before_the_reels_stop() {
    let path = temp_path("stake");
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let mut machine = SlotMachine::new(&SlotsConfig::default(), Box::new(FileStore::at(&path)));
    assert!(machine.spin(&mut rng, &mut NullAudio));

    // Quitting mid-spin keeps the stake taken
    let reader = FileStore::at(&path);
    assert_eq!(reader.get(COINS_KEY).unwrap().as_deref(), Some("9900"));

    fs::remove_file(&path).ok();
}

#[test]
fn test_corrupt_file_falls_back_to_default_and_is_replaced() {
    let path = temp_path("corrupt");
    fs::write(&path, b"garbage that is not a ledger").unwrap();

    let mut ledger = Ledger::initialize(Box::new(FileStore::at(&path)), LedgerRules::default());
    assert_eq!(ledger.coins(), 10_000);

    ledger.commit_spin();
    ledger.resolve_spin(false, ledger.bet());

    let reader = FileStore::at(&path);
    assert_eq!(reader.get(COINS_KEY).unwrap().as_deref(), Some("9900"));

    fs::remove_file(&path).ok();
}

#[test]
fn test_unwritable_store_does_not_stop_play() {
    // A directory in place of the ledger file fails every read and write
    let dir = std::env::temp_dir().join(format!("slots_ledger_dir_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut machine = SlotMachine::new(&always_win(), Box::new(FileStore::at(&dir)));
    assert_eq!(machine.coins(), 10_000);

    play_round(&mut machine, &mut rng);
    assert_eq!(machine.coins(), 11_400);
    assert!(!machine.spin_disabled());

    assert!(machine.set_bet(500));
    assert!(machine.new_game());
    assert_eq!(machine.coins(), 10_000);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_custom_rules_from_config() {
    let path = temp_path("config");
    let config = SlotsConfig {
        default_coins: 1_000,
        default_bet: 10,
        payout_multiplier: 5,
        max_defeat: 0,
        ..SlotsConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let mut machine = SlotMachine::new(&config, Box::new(FileStore::at(&path)));
    assert_eq!(machine.coins(), 1_000);
    assert_eq!(machine.bet(), 10);

    play_round(&mut machine, &mut rng);
    assert_eq!(machine.coins(), 1_040);

    fs::remove_file(&path).ok();
}
