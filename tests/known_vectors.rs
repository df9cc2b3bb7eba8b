//! Known-answer tests for complete Enigma I machines.
//!
//! Every expected ciphertext is a frozen vector: a change in any of them
//! means rotor wiring, ring offsets, stepping or the signal path changed.
//!
//! Coverage:
//! - `MachineFactory::enigma_i` with and without plugboard cables
//! - `LetterCipher::process_text` round trips
//! - `MachineConfig::build` producing the same machines from JSON

use enigma::{
    CipherEngine, LetterCipher, MachineConfig, MachineFactory, NonLetterPolicy, PairPlugboard,
    ReflectorType, RotorType, WiredReflector,
};

/// Plugboard wired for every plugged vector below.
const PLUGS: &str = "BA QU CG XT DI ER JW LS VK NM";

fn machine(rotors: [RotorType; 3], rings: &str, positions: &str, plugs: &str) -> CipherEngine {
    MachineFactory::enigma_i(
        &rotors,
        rings,
        positions,
        plugs.parse::<PairPlugboard>().unwrap(),
        WiredReflector::default(),
    )
    .unwrap()
}

fn run(machine: &mut CipherEngine, text: &str) -> String {
    machine.process_text(text, NonLetterPolicy::PassThrough).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Plugged vectors
// ═══════════════════════════════════════════════════════════════════════

/// I-III-V, rings BBB, start WWW, ten cables.
#[test]
fn vector_i_iii_v_bbb_www() {
    let mut m = machine([RotorType::I, RotorType::III, RotorType::V], "BBB", "WWW", PLUGS);
    assert_eq!(run(&mut m, "HELLOHOWAREYOU"), "DXXIQUIJZMNBEH");
    assert_eq!(m.window(), "WXK");
}

/// I-II-III, rings ZZZ, start AAA, ten cables.
#[test]
fn vector_i_ii_iii_zzz_aaa() {
    let mut m = machine([RotorType::I, RotorType::II, RotorType::III], "ZZZ", "AAA", PLUGS);
    assert_eq!(run(&mut m, "HELLOHOWAREYOU"), "XNNJSANZVAZHBV");
}

/// Same machine, different plaintext.
#[test]
fn vector_i_ii_iii_zzz_aaa_qwerty() {
    let mut m = machine([RotorType::I, RotorType::II, RotorType::III], "ZZZ", "AAA", PLUGS);
    assert_eq!(run(&mut m, "QWERTY"), "CIJWHI");
}

/// Rings XYZ, start ABC, three rotor orders.
#[test]
fn vectors_rings_xyz_start_abc() {
    let cases = [
        ([RotorType::I, RotorType::III, RotorType::V], "YNHWFVJEMWGLVY"),
        ([RotorType::I, RotorType::III, RotorType::IV], "PKWSGCUAYAMUDG"),
        ([RotorType::IV, RotorType::III, RotorType::V], "ZMDVVLHGBMXMTN"),
    ];
    for (rotors, expected) in cases {
        let mut m = machine(rotors, "XYZ", "ABC", PLUGS);
        assert_eq!(run(&mut m, "HELLOHOWAREYOU"), expected, "rotors {:?}", rotors);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Unplugged vectors
// ═══════════════════════════════════════════════════════════════════════

/// I-II-III, rings ZZZ, start AAA, empty plugboard.
#[test]
fn vector_i_ii_iii_zzz_aaa_unplugged() {
    let mut m = machine([RotorType::I, RotorType::II, RotorType::III], "ZZZ", "AAA", "");
    assert_eq!(run(&mut m, "HELLOHOWAREYOU"), "TZDHLBMCGOTHAN");
}

/// Ground setting: five A keypresses.
#[test]
fn vector_ground_setting() {
    let mut m = machine([RotorType::I, RotorType::II, RotorType::III], "AAA", "AAA", "");
    assert_eq!(run(&mut m, "AAAAA"), "BDZGO");
}

/// Reversed rotor order gives a different stream.
#[test]
fn vector_ground_setting_reversed_rotors() {
    let mut m = machine([RotorType::III, RotorType::II, RotorType::I], "AAA", "AAA", "");
    assert_eq!(run(&mut m, "AAAAA"), "FTZMG");
}

/// Non-letters keep their place and do not step the rotors.
#[test]
fn vector_with_punctuation_pass_through() {
    let mut m = machine([RotorType::I, RotorType::II, RotorType::III], "AAA", "AAA", "");
    assert_eq!(run(&mut m, "HI THERE!"), "IO HKRTK!");
    assert_eq!(m.window(), "AAH");
}

// ═══════════════════════════════════════════════════════════════════════
// Reciprocity
// ═══════════════════════════════════════════════════════════════════════

/// Deciphering every vector on a fresh machine restores the plaintext.
#[test]
fn vectors_decrypt_on_fresh_machine() {
    let cases = [
        ([RotorType::I, RotorType::III, RotorType::V], "BBB", "WWW", PLUGS, "DXXIQUIJZMNBEH"),
        ([RotorType::I, RotorType::II, RotorType::III], "ZZZ", "AAA", PLUGS, "XNNJSANZVAZHBV"),
        ([RotorType::I, RotorType::II, RotorType::III], "ZZZ", "AAA", "", "TZDHLBMCGOTHAN"),
        ([RotorType::IV, RotorType::III, RotorType::V], "XYZ", "ABC", PLUGS, "ZMDVVLHGBMXMTN"),
    ];
    for (rotors, rings, positions, plugs, cipher) in cases {
        let mut m = machine(rotors, rings, positions, plugs);
        assert_eq!(run(&mut m, cipher), "HELLOHOWAREYOU", "rotors {:?} rings {}", rotors, rings);
    }
}

/// Lowercase input enciphers like uppercase.
#[test]
fn lowercase_input_matches_uppercase() {
    let mut upper = machine([RotorType::I, RotorType::III, RotorType::V], "BBB", "WWW", PLUGS);
    let mut lower = machine([RotorType::I, RotorType::III, RotorType::V], "BBB", "WWW", PLUGS);
    assert_eq!(run(&mut lower, "hellohowareyou"), run(&mut upper, "HELLOHOWAREYOU"));
}

/// A different reflector changes the ciphertext but keeps reciprocity.
#[test]
fn reflector_c_round_trip() {
    let build = || {
        MachineFactory::enigma_i(
            &[RotorType::II, RotorType::I, RotorType::V],
            "FOX",
            "JMP",
            PLUGS.parse::<PairPlugboard>().unwrap(),
            WiredReflector::preset(ReflectorType::C),
        )
        .unwrap()
    };
    let plain = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
    let cipher = run(&mut build(), plain);
    assert_ne!(cipher, plain);
    assert_eq!(run(&mut build(), &cipher), plain);

    let mut with_b = machine([RotorType::II, RotorType::I, RotorType::V], "FOX", "JMP", PLUGS);
    assert_ne!(run(&mut with_b, plain), cipher);
}

// ═══════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════

/// A JSON key builds the same machine as the factory.
#[test]
fn json_config_reproduces_vector() {
    let config = MachineConfig::from_json(
        r#"{
            "rotors": ["i", "iii", "v"],
            "ring_settings": "bbb",
            "positions": "www",
            "plugboard": ["BA", "QU", "CG", "XT", "DI", "ER", "JW", "LS", "VK", "NM"],
            "reflector": "B"
        }"#,
    )
    .unwrap();
    let mut m = config.build().unwrap();
    assert_eq!(run(&mut m, "HELLOHOWAREYOU"), "DXXIQUIJZMNBEH");
}
