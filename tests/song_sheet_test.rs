use chordshift::chord::ChordToken;
use chordshift::scale::CHROMATIC_SCALE;
use chordshift::{normalize, steps_between, transpose_chord, transpose_line, transpose_text};

const SHEET: &str = "\
Intro:  Eb   Bb   Cm   Ab
        Eb        Bb/D
Verse:  Cm7       Ab2       Eb/G      Bb
";

#[test]
fn test_song_key_and_chords_up_two() {
    let key = "Eb";
    let chords_bars = "Eb   Bb   Cm   Ab";

    assert_eq!(transpose_chord(key, 1), "E");
    assert_eq!(transpose_chord(key, 2), "F");
    assert_eq!(transpose_line(chords_bars, 2), "F   C   Dm   Bb");
}

#[test]
fn test_sheet_keeps_layout() {
    let expected = "\
Intro:  F   C   Dm   Bb
        F        C/E
Verse:  Dm7       Bb2       F/A      C
";
    assert_eq!(transpose_text(SHEET, 2), expected);
}

#[test]
fn test_sheet_round_trip() {
    for steps in -12..=12 {
        let shifted = transpose_text(SHEET, steps);
        assert_eq!(transpose_text(&shifted, -steps), SHEET);
    }
}

#[test]
fn test_transpose_to_target_key() {
    let steps = steps_between("Eb", "G").unwrap();
    assert_eq!(steps, 4);
    assert_eq!(transpose_line("Eb   Bb   Cm   Ab", steps), "G   D   Em   C");
}

#[test]
fn test_transposed_tokens_parse_back() {
    let line = transpose_line("Cmaj7 G/B Am7 Dsus4", 5);

    let chords: Vec<ChordToken> = line
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();

    assert_eq!(chords.len(), 4);
    assert_eq!(chords[1].bass.map(|b| b.to_string()), Some("E".to_string()));
}

#[test]
fn test_every_spelling_is_recognized() {
    for letter in ["A", "B", "C", "D", "E", "F", "G"] {
        for accidental in ["", "#", "b"] {
            let root = format!("{}{}", letter, accidental);
            let canonical = normalize(&root);

            assert!(CHROMATIC_SCALE.contains(&canonical), "{}", root);
            assert_eq!(transpose_chord(&root, 0), canonical);
        }
    }
}
