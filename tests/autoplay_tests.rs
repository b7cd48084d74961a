// Host-side tests for the holiday auto-play driver.

use patatap_core::*;
use std::time::Duration;

#[test]
fn holiday_season_is_december() {
    assert!(is_holiday_season(11, 1));
    assert!(is_holiday_season(11, 25));
    assert!(is_holiday_season(11, 31));
    assert!(!is_holiday_season(10, 30));
    assert!(!is_holiday_season(0, 1));
}

#[test]
fn idle_driver_emits_nothing() {
    let mut auto = AutoPlay::new(1);
    assert!(!auto.is_playing());
    assert!(auto.tick(Duration::from_secs(5)).is_empty());
}

#[test]
fn start_fires_immediately_then_every_period() {
    let mut auto = AutoPlay::new(7);
    auto.start();
    let first = auto.tick(Duration::from_millis(16));
    assert_eq!(first.len(), 1);
    assert!(HOLIDAY_KEYS.contains(&first[0]));

    assert!(auto.tick(Duration::from_millis(400)).is_empty());
    let second = auto.tick(Duration::from_millis(30));
    assert_eq!(second.len(), 1);
    assert!(HOLIDAY_KEYS.contains(&second[0]));
}

#[test]
fn long_frames_catch_up() {
    let mut auto = AutoPlay::new(3);
    auto.start();
    auto.tick(Duration::ZERO);
    // 1.0 s holds two whole 420 ms periods
    let burst = auto.tick(Duration::from_secs(1));
    assert_eq!(burst.len(), 2);
}

#[test]
fn stop_discards_pending_time() {
    let mut auto = AutoPlay::new(9);
    auto.start();
    auto.tick(Duration::ZERO);
    auto.tick(Duration::from_millis(400));
    auto.stop();
    assert!(auto.tick(Duration::from_millis(100)).is_empty());

    // restarting fires straight away and does not reuse the old accumulator
    auto.start();
    assert_eq!(auto.tick(Duration::ZERO).len(), 1);
    assert!(auto.tick(Duration::from_millis(100)).is_empty());
}

#[test]
fn toggle_flips_state() {
    let mut auto = AutoPlay::new(0);
    assert!(auto.toggle());
    assert!(auto.is_playing());
    assert!(!auto.toggle());
    assert!(!auto.is_playing());
}

#[test]
fn autoplay_letters_spawn_particles() {
    let key_map = KeyMap::with_default_table(&AssetConfig::default()).unwrap();
    let mut field = ParticleField::new(key_map, Bounds::new(640, 480), 5);
    let mut auto = AutoPlay::new(5);
    auto.start();
    let frame = Duration::from_millis(16);
    let mut spawned = 0;
    // ~1 s of frames: one immediate letter plus two periods
    for _ in 0..63 {
        for letter in auto.tick(frame) {
            assert!(field.spawn(letter, &mut Silent).is_some());
            spawned += 1;
        }
        field.tick();
    }
    assert_eq!(spawned, 3);
    assert!(!field.is_empty());
}
