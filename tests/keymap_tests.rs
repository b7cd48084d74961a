// Host-side tests for the letter -> (clip, color) table.

use patatap_core::*;

fn entry(file: &str, hex: &str) -> StimulusEntry {
    StimulusEntry {
        sound: AssetConfig::default().resolve_sound(file),
        color: Rgb::from_hex(hex).unwrap(),
    }
}

fn default_map() -> KeyMap {
    KeyMap::with_default_table(&AssetConfig::new("/patatap-app/")).unwrap()
}

#[test]
fn every_letter_resolves() {
    let map = default_map();
    for letter in 'a'..='z' {
        assert!(map.lookup(letter).is_some(), "no entry for {letter}");
    }
    assert_eq!(map.iter().count(), ALPHABET_LEN);
}

#[test]
fn lookup_is_case_insensitive() {
    let map = default_map();
    assert_eq!(map.lookup('Q'), map.lookup('q'));
    assert_eq!(map.lookup('Z'), map.lookup('z'));
}

#[test]
fn non_letters_have_no_entry() {
    let map = default_map();
    for c in ['1', ' ', '-', '\n', 'é', 'ß'] {
        assert!(map.lookup(c).is_none(), "{c:?} should not resolve");
    }
}

#[test]
fn default_table_uses_configured_asset_base() {
    let map = default_map();
    let q = map.lookup('q').unwrap();
    assert_eq!(q.sound.as_str(), "/patatap-app/sounds/bubbles.mp3");
    assert_eq!(q.color, Rgb::from_hex("#1abc9c").unwrap());
    let a = map.lookup('a').unwrap();
    assert_eq!(a.sound.as_str(), "/patatap-app/sounds/pinwheel.mp3");
}

#[test]
fn asset_base_gets_trailing_slash() {
    let assets = AssetConfig::new("/base");
    assert_eq!(assets.base_path(), "/base/");
    assert_eq!(assets.resolve_sound("x.mp3").as_str(), "/base/sounds/x.mp3");
    assert_eq!(
        AssetConfig::new("https://cdn.example/app/").resolve_sound("y.mp3").as_str(),
        "https://cdn.example/app/sounds/y.mp3"
    );
}

#[test]
fn missing_letters_wrap_onto_base_order() {
    let q = entry("q.mp3", "#ff0000");
    let w = entry("w.mp3", "#00ff00");
    let e = entry("e.mp3", "#0000ff");
    let map = KeyMap::build(&[('q', q.clone()), ('w', w.clone()), ('e', e.clone())]).unwrap();

    // defined letters are used verbatim
    assert_eq!(map.lookup('q'), Some(&q));
    assert_eq!(map.lookup('w'), Some(&w));
    assert_eq!(map.lookup('e'), Some(&e));
    // others take base[alphabet_index % 3]
    assert_eq!(map.lookup('a'), Some(&q)); // 0
    assert_eq!(map.lookup('b'), Some(&w)); // 1
    assert_eq!(map.lookup('c'), Some(&e)); // 2
    assert_eq!(map.lookup('d'), Some(&q)); // 3
    assert_eq!(map.lookup('z'), Some(&w)); // 25
}

#[test]
fn single_entry_base_covers_everything() {
    let only = entry("only.mp3", "#123456");
    let map = KeyMap::build(&[('m', only.clone())]).unwrap();
    for letter in 'a'..='z' {
        assert_eq!(map.lookup(letter), Some(&only));
    }
    assert_eq!(map.sounds().len(), 1);
}

#[test]
fn base_keys_are_case_folded() {
    let x = entry("x.mp3", "#abcdef");
    let map = KeyMap::build(&[('X', x.clone())]).unwrap();
    assert_eq!(map.lookup('x'), Some(&x));
}

#[test]
fn bad_base_tables_are_rejected() {
    assert_eq!(KeyMap::build(&[]).unwrap_err(), KeyMapError::EmptyBaseTable);
    assert_eq!(
        KeyMap::build(&[('1', entry("a.mp3", "#000"))]).unwrap_err(),
        KeyMapError::NotALetter('1')
    );
    assert_eq!(
        KeyMap::build(&[('a', entry("a.mp3", "#000")), ('A', entry("b.mp3", "#fff"))])
            .unwrap_err(),
        KeyMapError::DuplicateLetter('a')
    );
}

#[test]
fn sounds_are_deduplicated() {
    // p and m share moon.mp3
    let map = default_map();
    let sounds = map.sounds();
    assert_eq!(sounds.len(), 25);
    let moon = sounds
        .iter()
        .filter(|s| s.as_str().ends_with("/moon.mp3"))
        .count();
    assert_eq!(moon, 1);
}

#[test]
fn letter_from_key_accepts_single_letters_only() {
    assert_eq!(letter_from_key("a"), Some('a'));
    assert_eq!(letter_from_key("Q"), Some('q'));
    assert_eq!(letter_from_key("Shift"), None);
    assert_eq!(letter_from_key("Enter"), None);
    assert_eq!(letter_from_key("1"), None);
    assert_eq!(letter_from_key(" "), None);
    assert_eq!(letter_from_key(""), None);
    assert_eq!(letter_from_key("ä"), None);
}
